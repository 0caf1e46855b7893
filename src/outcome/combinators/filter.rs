use crate::outcome::{Outcome, Success};
use crate::reason::{Reason, ReasonKind};

impl<T> Outcome<T> {
    /// Keep only the error reasons matching `predicate`.
    ///
    /// Informational reasons always survive. When at least one error reason
    /// remains, the primary error is resolved again over the survivors. When
    /// none remains the outcome turns into a success whose value comes from
    /// `on_cleared`, keeping the surviving annotations and the metadata.
    /// No-op on success.
    ///
    /// # Examples
    ///
    /// ```
    /// use wellspring::{Outcome, Reason, ValidationError};
    ///
    /// let checked = Outcome::from_validation(
    ///     "draft",
    ///     vec![ValidationError::new("title missing").with_code("SOFT")],
    /// );
    ///
    /// // Soft findings do not block publishing.
    /// let publishable = checked.filter_errors(|r| r.code() != "SOFT", || "draft");
    /// assert_eq!(publishable.ok(), Some("draft"));
    /// ```
    pub fn filter_errors<P, F>(self, predicate: P, on_cleared: F) -> Self
    where
        P: FnMut(&Reason) -> bool,
        F: FnOnce() -> T,
    {
        match self {
            Outcome::Success(_) => self,
            Outcome::Failure(failure) => match failure.retain_errors(predicate) {
                Ok(remaining) => Outcome::Failure(remaining),
                Err((reasons, metadata)) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        annotations = reasons.len(),
                        "filter_errors cleared every error reason"
                    );
                    Outcome::Success(Success::from_parts(on_cleared(), reasons, metadata))
                }
            },
        }
    }

    /// Look up the first reason of kind `K`.
    ///
    /// Runs `on_match` with it when found, whether the outcome succeeded or
    /// failed, and `on_else` otherwise.
    ///
    /// ```
    /// use wellspring::{NotFoundError, Outcome, SuccessReason};
    ///
    /// let missing = Outcome::<u32>::failure(NotFoundError::new("no such order"));
    /// let status = missing.match_error::<NotFoundError, _>(|_| 404, || 500);
    /// assert_eq!(status, 404);
    ///
    /// let cached = Outcome::success(1).with_reason("served from cache");
    /// let note = cached.match_error::<SuccessReason, _>(|r| r.message().to_string(), String::new);
    /// assert_eq!(note, "served from cache");
    /// ```
    pub fn match_error<K, R>(&self, on_match: impl FnOnce(&K) -> R, on_else: impl FnOnce() -> R) -> R
    where
        K: ReasonKind,
    {
        match K::find(self.reasons()) {
            Some(reason) => on_match(reason),
            None => on_else(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::exception::Exception;
    use crate::outcome::Outcome;
    use crate::reason::{ConflictError, ExceptionalError, NotFoundError, Reason, ValidationError};

    fn mixed() -> Outcome<i32> {
        Outcome::<i32>::failure(ValidationError::new("v1"))
            .with_reason("note")
            .with_metadata("k", 1)
            .or_else(|f| {
                Outcome::Failure(
                    f.with_error(Exception::msg("io"))
                        .with_error(ConflictError::new("c1")),
                )
            })
    }

    #[test]
    fn test_filter_re_resolves_primary() {
        let original = mixed();
        assert_eq!(original.err().map(|e| e.message()), Some("io".to_string()));

        let filtered = original.filter_errors(|r| !matches!(r, Reason::Exceptional(_)), || 0);
        assert!(filtered.is_failure());
        assert_eq!(filtered.err().map(|e| e.message()), Some("v1".to_string()));
        assert_eq!(filtered.reasons().len(), 3);
        assert_eq!(filtered.metadata().len(), 1);
    }

    #[test]
    fn test_filter_keeping_everything_keeps_primary() {
        let original = mixed();
        let kept = original.clone().filter_errors(|_| true, || 0);

        assert!(kept.err().unwrap().ptr_eq(original.err().unwrap()));
        assert_eq!(kept.reasons(), original.reasons());
        assert_eq!(kept.errors().len(), original.errors().len());
    }

    #[test]
    fn test_filter_clearing_everything_yields_supplied_value() {
        let cleared = mixed().filter_errors(|_| false, || 99);

        assert_eq!(cleared.value(), Some(&99));
        assert_eq!(cleared.reasons().len(), 1);
        assert!(!cleared.reasons()[0].is_error());
        assert_eq!(cleared.metadata().len(), 1);
    }

    #[test]
    fn test_filter_on_success_skips_callbacks() {
        let mut asked = false;
        let ok = Outcome::success(1).filter_errors(
            |_| {
                asked = true;
                true
            },
            || 0,
        );
        assert_eq!(ok.ok(), Some(1));
        assert!(!asked);
    }

    #[test]
    fn test_match_error_finds_first_of_kind() {
        let outcome = mixed();
        let code = outcome.match_error::<ConflictError, _>(|c| c.message().to_string(), || "none".into());
        assert_eq!(code, "c1");

        let wrapped = outcome.match_error::<ExceptionalError, _>(|e| e.message(), String::new);
        assert_eq!(wrapped, "io");

        let absent = outcome.match_error::<NotFoundError, _>(|_| true, || false);
        assert!(!absent);
    }
}
