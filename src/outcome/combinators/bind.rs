use crate::outcome::{CopyPolicy, Failure, Outcome};

impl<T> Outcome<T> {
    /// Chain a computation that may itself fail.
    ///
    /// On failure the closure is not invoked and the failure keeps its primary
    /// error, reasons and metadata ([`CopyPolicy::Preserve`]).
    ///
    /// # Examples
    ///
    /// ```
    /// use wellspring::{Outcome, ValidationError};
    ///
    /// fn half(n: i32) -> Outcome<i32> {
    ///     if n % 2 == 0 {
    ///         Outcome::success(n / 2)
    ///     } else {
    ///         Outcome::failure(ValidationError::new("odd"))
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::success(8).bind(half).bind(half).ok(), Some(2));
    /// assert!(Outcome::success(6).bind(half).bind(half).is_failure());
    /// ```
    #[inline]
    pub fn bind<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        self.bind_with(CopyPolicy::Preserve, f)
    }

    /// [`bind`](Outcome::bind) with an explicit policy for what a
    /// short-circuited failure carries.
    ///
    /// ```
    /// use wellspring::{CopyPolicy, Exception, Outcome};
    ///
    /// let failed = Outcome::<i32>::failure(Exception::msg("io"))
    ///     .with_metadata("attempt", 2);
    ///
    /// let bare = failed.bind_with(CopyPolicy::Discard, |n| Outcome::success(n + 1));
    /// assert_eq!(bare.reasons().len(), 1);
    /// assert!(bare.metadata().is_empty());
    /// ```
    pub fn bind_with<U, F>(self, policy: CopyPolicy, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Outcome::Success(s) => f(s.into_value()),
            Outcome::Failure(failure) => Outcome::Failure(failure.carry(policy)),
        }
    }

    /// Replace a failure with the outcome of `f`. Successes pass through.
    ///
    /// Unlike [`recover_with`](Outcome::recover_with), the fallback may fail
    /// again.
    pub fn or_else<F>(self, f: F) -> Self
    where
        F: FnOnce(Failure) -> Outcome<T>,
    {
        match self {
            Outcome::Success(_) => self,
            Outcome::Failure(failure) => f(failure),
        }
    }
}

impl<T> Outcome<Outcome<T>> {
    /// Remove one level of nesting.
    ///
    /// ```
    /// use wellspring::Outcome;
    ///
    /// let nested = Outcome::success(Outcome::success(3));
    /// assert_eq!(nested.flatten().ok(), Some(3));
    /// ```
    #[inline]
    pub fn flatten(self) -> Outcome<T> {
        self.bind(|inner| inner)
    }
}
