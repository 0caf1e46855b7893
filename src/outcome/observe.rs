//! Tracing support for outcomes. Feature-gated behind `tracing`.

use crate::outcome::Outcome;

/// Extension trait for logging completed outcomes.
///
/// Only available with the `tracing` feature.
pub trait OutcomeTracingExt: Sized {
    /// Log this outcome under `operation` and return it unchanged.
    ///
    /// Successes are logged at `debug`; failures at `warn` with the code of
    /// the first reason, the primary message and the reason count.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wellspring::{NotFoundError, Outcome, OutcomeTracingExt};
    ///
    /// let outcome = Outcome::<u32>::failure(NotFoundError::new("no invoice"))
    ///     .trace_outcome("load_invoice");
    /// assert!(outcome.is_failure());
    /// ```
    fn trace_outcome(self, operation: &str) -> Self;
}

impl<T> OutcomeTracingExt for Outcome<T> {
    fn trace_outcome(self, operation: &str) -> Self {
        match &self {
            Outcome::Success(s) => {
                tracing::debug!(operation, annotations = s.reasons().len(), "outcome succeeded");
            }
            Outcome::Failure(f) => {
                let code = f.reasons().first().map(|r| r.code()).unwrap_or_default();
                tracing::warn!(
                    operation,
                    code,
                    error = %f.error(),
                    reasons = f.reasons().len(),
                    "outcome failed"
                );
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exception::Exception;
    use crate::future::OutcomeFuture;
    use crate::reason::ConflictError;
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn test_trace_outcome_logs_failure() {
        let outcome = Outcome::<()>::failure(ConflictError::new("version clash")).trace_outcome("save_doc");

        assert!(outcome.is_failure());
        assert!(logs_contain("outcome failed"));
        assert!(logs_contain("save_doc"));
        assert!(logs_contain("CONFLICT"));
    }

    #[test]
    #[traced_test]
    fn test_trace_outcome_logs_success() {
        let outcome = Outcome::success(1).with_reason("cached").trace_outcome("lookup");
        assert_eq!(outcome.ok(), Some(1));
        assert!(logs_contain("outcome succeeded"));
    }

    #[test]
    #[traced_test]
    fn test_try_map_logs_captured_error() {
        let _ = Outcome::success("nope").try_map(|s| s.parse::<i32>());
        assert!(logs_contain("try_map captured error"));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_instrument_outcome_keeps_result() {
        let outcome = async { Outcome::<i32>::failure(Exception::msg("late")) }
            .instrument_outcome(tracing::info_span!("fetch"))
            .then_map(|x| x + 1)
            .await
            .trace_outcome("fetch");

        assert_eq!(outcome.err().map(|e| e.message()), Some("late".to_string()));
        assert!(logs_contain("outcome failed"));
    }
}
