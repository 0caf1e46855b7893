use crate::exception::Exception;
use crate::outcome::{MapErrorPolicy, Outcome};
use crate::reason::IntoErrorReason;

impl<T> Outcome<T> {
    /// Transform the primary error. No-op on success.
    ///
    /// With [`MapErrorPolicy::ShortCircuit`] the result holds only the mapped
    /// error. With [`MapErrorPolicy::Accumulate`] every reason and the
    /// metadata are kept. When the primary stands for an `Exceptional` reason,
    /// that reason is rewritten in place to wrap the mapped error; otherwise the
    /// reason list does not change. Other exceptions are never rewritten.
    ///
    /// # Examples
    ///
    /// ```
    /// use wellspring::{ConflictError, Exception, MapErrorPolicy, Outcome};
    ///
    /// let failed = Outcome::<i32>::failure(Exception::msg("socket reset"))
    ///     .or_else(|f| Outcome::Failure(f.with_error(ConflictError::new("dup"))));
    ///
    /// let wrapped = failed.clone().map_error(MapErrorPolicy::Accumulate, |e| {
    ///     Exception::msg(format!("save failed: {}", e))
    /// });
    /// assert_eq!(wrapped.reasons().len(), 2);
    /// assert_eq!(wrapped.err().map(|e| e.message()), Some("save failed: socket reset".to_string()));
    ///
    /// let bare = failed.map_error(MapErrorPolicy::ShortCircuit, |_| Exception::msg("save failed"));
    /// assert_eq!(bare.reasons().len(), 1);
    /// ```
    pub fn map_error<E, F>(self, policy: MapErrorPolicy, f: F) -> Self
    where
        F: FnOnce(&Exception) -> E,
        E: Into<Exception>,
    {
        match self {
            Outcome::Success(_) => self,
            Outcome::Failure(failure) => {
                let mapped = f(failure.error()).into();
                #[cfg(feature = "tracing")]
                tracing::trace!(?policy, from = %failure.error(), to = %mapped, "map_error");
                match policy {
                    MapErrorPolicy::ShortCircuit => Outcome::failure(mapped),
                    MapErrorPolicy::Accumulate => Outcome::Failure(failure.replace_primary(mapped)),
                }
            }
        }
    }

    /// Build one new primary error from every collected error.
    ///
    /// `f` receives the primary error first, then the exception of each other
    /// error reason (synthesized from the message when the reason has none).
    /// Reasons and metadata are kept under the
    /// [`Accumulate`](MapErrorPolicy::Accumulate) rule.
    ///
    /// ```
    /// use wellspring::{ConflictError, Exception, Outcome};
    ///
    /// let failed = Outcome::<()>::failure(Exception::msg("timeout"))
    ///     .or_else(|f| Outcome::Failure(f.with_error(ConflictError::new("stale row"))));
    ///
    /// let merged = failed.map_errors(|errors| {
    ///     let parts: Vec<String> = errors.iter().map(|e| e.message()).collect();
    ///     Exception::msg(parts.join(" & "))
    /// });
    /// assert_eq!(merged.reasons().len(), 2);
    /// assert_eq!(merged.err().map(|e| e.message()), Some("timeout & stale row".to_string()));
    /// ```
    pub fn map_errors<E, F>(self, f: F) -> Self
    where
        F: FnOnce(Vec<Exception>) -> E,
        E: Into<Exception>,
    {
        match self {
            Outcome::Success(_) => self,
            Outcome::Failure(failure) => {
                let errors = failure.errors();
                #[cfg(feature = "tracing")]
                tracing::trace!(count = errors.len(), "map_errors collecting");
                let mapped = f(errors).into();
                Outcome::Failure(failure.replace_primary(mapped))
            }
        }
    }

    /// Put `error` in front of the failure's reasons and make it primary.
    /// No-op on success.
    ///
    /// ```
    /// use wellspring::{Exception, Outcome, UnauthorizedError};
    ///
    /// let failed = Outcome::<i32>::failure(Exception::msg("token expired"))
    ///     .prepend_error(UnauthorizedError::new("login required"));
    /// assert_eq!(failed.reasons()[0].code(), "UNAUTHORIZED");
    /// assert_eq!(failed.err().map(|e| e.message()), Some("login required".to_string()));
    /// ```
    pub fn prepend_error(self, error: impl IntoErrorReason) -> Self {
        match self {
            Outcome::Success(_) => self,
            Outcome::Failure(failure) => Outcome::Failure(failure.prepend(error)),
        }
    }
}
