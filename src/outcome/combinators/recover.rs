use crate::exception::Exception;
use crate::outcome::{Failure, Outcome};

impl<T> Outcome<T> {
    /// Turn a failure into a success carrying `fallback`. No-op on success.
    ///
    /// ```
    /// use wellspring::{NotFoundError, Outcome};
    ///
    /// let name = Outcome::<String>::failure(NotFoundError::new("no profile"))
    ///     .recover("anonymous".to_string());
    /// assert_eq!(name.ok().as_deref(), Some("anonymous"));
    /// ```
    pub fn recover(self, fallback: T) -> Self {
        match self {
            Outcome::Success(_) => self,
            Outcome::Failure(_) => Outcome::success(fallback),
        }
    }

    /// Turn a failure into a success computed from it. No-op on success.
    pub fn recover_with<F>(self, f: F) -> Self
    where
        F: FnOnce(Failure) -> T,
    {
        match self {
            Outcome::Success(_) => self,
            Outcome::Failure(failure) => Outcome::success(f(failure)),
        }
    }

    /// The success value, or `fallback` on failure.
    #[inline]
    pub fn value_or(self, fallback: T) -> T {
        match self {
            Outcome::Success(s) => s.into_value(),
            Outcome::Failure(_) => fallback,
        }
    }

    /// The success value, or one computed from the failure.
    #[inline]
    pub fn value_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(Failure) -> T,
    {
        self.fold(|value| value, f)
    }

    /// The success value, or an [`AggregateError`](crate::AggregateError)
    /// holding every collected error.
    ///
    /// # Examples
    ///
    /// ```
    /// use wellspring::{AggregateError, ConflictError, Exception, Outcome};
    ///
    /// let failed = Outcome::<i32>::failure(Exception::msg("timeout"))
    ///     .or_else(|f| Outcome::Failure(f.with_error(ConflictError::new("stale"))));
    ///
    /// let err = failed.value_or_throw().unwrap_err();
    /// let aggregate = err.downcast_ref::<AggregateError>().unwrap();
    /// assert_eq!(aggregate.len(), 2);
    /// assert_eq!(err.message(), "2 errors occurred: timeout; stale");
    /// ```
    pub fn value_or_throw(self) -> Result<T, Exception> {
        self.value_or_throw_with(|failure| {
            let errors = failure.errors();
            #[cfg(feature = "tracing")]
            tracing::debug!(count = errors.len(), primary = %failure.error(), "value_or_throw raising");
            Exception::aggregate(errors)
        })
    }

    /// The success value, or the error built by `f` from the failure.
    pub fn value_or_throw_with<E, F>(self, f: F) -> Result<T, E>
    where
        F: FnOnce(Failure) -> E,
    {
        match self {
            Outcome::Success(s) => Ok(s.into_value()),
            Outcome::Failure(failure) => Err(f(failure)),
        }
    }
}
