//! Async transforms over an already-available outcome.
//!
//! Each method awaits exactly one future, the one produced by the supplied
//! function, and only on the branch that calls it. Everything else is handed
//! to the synchronous combinator of the same name.

use std::future::Future;

use crate::exception::Exception;
use crate::outcome::{Failure, MapErrorPolicy, Outcome, Success};
use crate::reason::{IntoErrorReason, ValidationError};

impl<Fut> Outcome<Fut>
where
    Fut: Future,
{
    /// Await the future carried on the success path.
    ///
    /// Annotations and metadata are kept; failures resolve immediately.
    ///
    /// ```
    /// use wellspring::Outcome;
    ///
    /// # tokio_test::block_on(async {
    /// let pending = Outcome::success(async { 6 * 7 });
    /// assert_eq!(pending.sequence().await.ok(), Some(42));
    /// # });
    /// ```
    pub async fn sequence(self) -> Outcome<Fut::Output> {
        match self {
            Outcome::Success(s) => {
                let (future, reasons, metadata) = s.into_parts();
                Outcome::Success(Success::from_parts(future.await, reasons, metadata))
            }
            Outcome::Failure(failure) => Outcome::Failure(failure),
        }
    }
}

impl<T> Outcome<T> {
    /// [`bind`](Outcome::bind) with an async function.
    ///
    /// # Examples
    ///
    /// ```
    /// use wellspring::{NotFoundError, Outcome};
    ///
    /// async fn load(id: u32) -> Outcome<String> {
    ///     if id == 7 {
    ///         Outcome::success("seven".to_string())
    ///     } else {
    ///         Outcome::failure(NotFoundError::new("unknown id"))
    ///     }
    /// }
    ///
    /// # tokio_test::block_on(async {
    /// let loaded = Outcome::success(7).bind_async(load).await;
    /// assert_eq!(loaded.ok().as_deref(), Some("seven"));
    /// # });
    /// ```
    pub async fn bind_async<U, F, Fut>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        self.map(f).sequence().await.flatten()
    }

    /// [`map`](Outcome::map) with an async function.
    pub async fn map_async<U, F, Fut>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        self.map(f).sequence().await
    }

    /// [`try_map`](Outcome::try_map) with an async function.
    ///
    /// An `Err` keeps the source outcome's metadata, as in the synchronous form.
    pub async fn try_map_async<U, E, F, Fut>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Result<U, E>>,
        E: IntoErrorReason,
    {
        match self {
            Outcome::Success(s) => {
                let (value, reasons, metadata) = s.into_parts();
                Outcome::Success(Success::from_parts(f(value), reasons, metadata))
                    .sequence()
                    .await
                    .try_map(|result| result)
            }
            Outcome::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// [`tap`](Outcome::tap) with an async side effect.
    ///
    /// The returned future must not borrow the value; copy out what it needs.
    pub async fn tap_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        let pending = match &self {
            Outcome::Success(s) => Some(f(s.value())),
            Outcome::Failure(_) => None,
        };
        if let Some(pending) = pending {
            pending.await;
        }
        self
    }

    /// [`tap_error`](Outcome::tap_error) with an async side effect.
    pub async fn tap_error_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(&Failure) -> Fut,
        Fut: Future<Output = ()>,
    {
        let pending = self.as_failure().map(f);
        if let Some(pending) = pending {
            pending.await;
        }
        self
    }

    /// [`ensure`](Outcome::ensure) with an async predicate.
    pub async fn ensure_async<P, Fut>(self, predicate: P, error: impl Into<ValidationError>) -> Self
    where
        P: FnOnce(&T) -> Fut,
        Fut: Future<Output = bool>,
    {
        let pending = self.value().map(predicate);
        let holds = match pending {
            Some(pending) => pending.await,
            None => true,
        };
        self.ensure(|_| holds, error)
    }

    /// [`recover_with`](Outcome::recover_with) with an async fallback.
    pub async fn recover_with_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(Failure) -> Fut,
        Fut: Future<Output = T>,
    {
        match self {
            Outcome::Success(_) => self,
            Outcome::Failure(failure) => Outcome::success(f(failure).await),
        }
    }

    /// [`or_else`](Outcome::or_else) with an async fallback.
    pub async fn or_else_async<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(Failure) -> Fut,
        Fut: Future<Output = Outcome<T>>,
    {
        match self {
            Outcome::Success(_) => self,
            Outcome::Failure(failure) => f(failure).await,
        }
    }

    /// [`map_error`](Outcome::map_error) with an async mapping.
    pub async fn map_error_async<E, F, Fut>(self, policy: MapErrorPolicy, f: F) -> Self
    where
        F: FnOnce(&Exception) -> Fut,
        Fut: Future<Output = E>,
        E: Into<Exception>,
    {
        let pending = self.err().map(f);
        match pending {
            Some(pending) => {
                let mapped: Exception = pending.await.into();
                self.map_error(policy, move |_| mapped)
            }
            None => self,
        }
    }
}
