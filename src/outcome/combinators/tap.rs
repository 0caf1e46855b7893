use crate::outcome::{Failure, Outcome};

impl<T> Outcome<T> {
    /// Run a side effect on the success value and return the outcome as is.
    ///
    /// ```
    /// use wellspring::Outcome;
    ///
    /// let mut seen = None;
    /// let outcome = Outcome::success(7).tap(|v| seen = Some(*v));
    /// assert_eq!(seen, Some(7));
    /// assert_eq!(outcome.ok(), Some(7));
    /// ```
    #[inline]
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        self.if_success(f);
        self
    }

    /// Run a side effect on the failure and return the outcome as is.
    #[inline]
    pub fn tap_error<F>(self, f: F) -> Self
    where
        F: FnOnce(&Failure),
    {
        self.if_failure(f);
        self
    }

    /// Run a side effect on either branch and return the outcome as is.
    #[inline]
    pub fn tap_both<F>(self, f: F) -> Self
    where
        F: FnOnce(&Outcome<T>),
    {
        f(&self);
        self
    }
}
