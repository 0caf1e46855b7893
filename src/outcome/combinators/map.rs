use crate::outcome::{Failure, Outcome};
use crate::reason::IntoErrorReason;

impl<T> Outcome<T> {
    /// Transform the success value.
    ///
    /// Failures pass through untouched. Success annotations and metadata
    /// describe the old value and are not carried over.
    ///
    /// # Examples
    ///
    /// ```
    /// use wellspring::{Exception, Outcome};
    ///
    /// assert_eq!(Outcome::success(2).map(|x| x * 10).ok(), Some(20));
    ///
    /// let failed = Outcome::<i32>::failure(Exception::msg("boom")).map(|x| x + 1);
    /// assert_eq!(failed.err().map(|e| e.message()), Some("boom".to_string()));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(s) => Outcome::success(f(s.into_value())),
            Outcome::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Transform the success value with a fallible function.
    ///
    /// An `Err` becomes a failure wrapping that error (the very same
    /// [`Exception`](crate::Exception) instance when one is returned). The new
    /// failure keeps the metadata of the outcome it came from. Side effects
    /// the closure performed before failing are not undone.
    ///
    /// # Examples
    ///
    /// ```
    /// use wellspring::Outcome;
    ///
    /// let parsed = Outcome::success("42").try_map(|s| s.parse::<i32>());
    /// assert_eq!(parsed.ok(), Some(42));
    ///
    /// let bad = Outcome::success("4x")
    ///     .with_metadata("field", "age")
    ///     .try_map(|s| s.parse::<i32>());
    /// assert!(bad.is_failure());
    /// assert!(bad.metadata().contains_key("field"));
    /// ```
    pub fn try_map<U, E, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Result<U, E>,
        E: IntoErrorReason,
    {
        match self {
            Outcome::Success(s) => {
                let (value, _, metadata) = s.into_parts();
                match f(value) {
                    Ok(mapped) => Outcome::success(mapped),
                    Err(error) => {
                        let failure = Failure::new(error).merge_metadata(&metadata);
                        #[cfg(feature = "tracing")]
                        tracing::debug!(
                            code = failure.reasons()[0].code(),
                            error = %failure.error(),
                            "try_map captured error"
                        );
                        Outcome::Failure(failure)
                    }
                }
            }
            Outcome::Failure(failure) => Outcome::Failure(failure),
        }
    }
}
