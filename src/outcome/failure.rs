//! The failure payload shared by every outcome arity.

use std::fmt;

use crate::exception::Exception;
use crate::metadata::{Metadata, MetadataValue};
use crate::outcome::policy::CopyPolicy;
use crate::reason::{resolve_primary, IntoErrorReason, Reason, SuccessReason};

/// Why an outcome failed: one primary [`Exception`], the ordered reasons
/// behind it, and outcome-level metadata.
///
/// A `Failure` carries no value, so it moves unchanged between outcomes of
/// any arity. It can only be built from at least one error-kind reason.
///
/// # Example
///
/// ```
/// use wellspring::{ConflictError, Exception, Failure};
///
/// let ex = Exception::msg("write rejected");
/// let failure = Failure::new(ex.clone())
///     .with_error(ConflictError::new("row locked"))
///     .with_metadata("table", "users");
///
/// assert!(failure.error().ptr_eq(&ex));
/// assert_eq!(failure.reasons().len(), 2);
/// assert_eq!(failure.metadata().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Failure {
    error: Exception,
    // Index of the reason the primary error stands for, if any.
    source: Option<usize>,
    reasons: Vec<Reason>,
    metadata: Metadata,
}

impl Failure {
    /// Create a failure from a single error.
    ///
    /// An [`Exception`] (or any `std::error::Error`) becomes exactly one
    /// `Exceptional` reason wrapping that instance. A domain error becomes
    /// exactly one reason equal to it; its primary is the wrapped exception or
    /// one synthesized from its message.
    pub fn new(error: impl IntoErrorReason) -> Self {
        let reason = error.into_error_reason();
        let error = match reason.exception() {
            Some(ex) => ex.clone(),
            None => Exception::msg(reason.message()),
        };
        Failure {
            error,
            source: Some(0),
            reasons: vec![reason],
            metadata: Metadata::new(),
        }
    }

    /// Build a failure from a reason list, resolving the primary error.
    ///
    /// Returns `None` when the list holds no error-kind reason.
    pub fn from_reasons(reasons: Vec<Reason>) -> Option<Self> {
        let (error, source) = resolve_primary(&reasons)?;
        Some(Failure {
            error,
            source: Some(source),
            reasons,
            metadata: Metadata::new(),
        })
    }

    /// The primary error.
    pub fn error(&self) -> &Exception {
        &self.error
    }

    /// The primary error's message.
    pub fn message(&self) -> String {
        self.error.message()
    }

    /// Every reason, in order.
    pub fn reasons(&self) -> &[Reason] {
        &self.reasons
    }

    /// Outcome-level metadata.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Error-kind reasons only.
    pub fn error_reasons(&self) -> impl Iterator<Item = &Reason> {
        self.reasons.iter().filter(|r| r.is_error())
    }

    /// The collected error list: the primary error first, then the exception
    /// of every other error reason (synthesized from the message when the
    /// reason wraps none). No exception appears twice.
    pub fn errors(&self) -> Vec<Exception> {
        let mut errors = vec![self.error.clone()];
        for (idx, reason) in self.reasons.iter().enumerate() {
            if Some(idx) == self.source {
                continue;
            }
            if let Some(ex) = reason.to_exception() {
                if !errors.iter().any(|seen| seen.ptr_eq(&ex)) {
                    errors.push(ex);
                }
            }
        }
        errors
    }

    /// Append an error reason.
    ///
    /// The primary error follows [`resolve_primary`]: the new reason becomes
    /// primary when it outranks the reason the current primary stands for
    /// (an `Exceptional` reason outranks a domain error). A primary installed
    /// by [`map_error`](crate::Outcome::map_error) that stands for no reason
    /// is kept.
    ///
    /// Appending an `Exceptional` reason for an exception that is already
    /// wrapped by one is a no-op.
    ///
    /// ```
    /// use wellspring::{ConflictError, Exception, Failure};
    ///
    /// let io = Exception::msg("io");
    /// let failure = Failure::new(ConflictError::new("dup")).with_error(io.clone());
    /// assert!(failure.error().ptr_eq(&io));
    /// ```
    pub fn with_error(mut self, error: impl IntoErrorReason) -> Self {
        let reason = error.into_error_reason();
        if let Reason::Exceptional(e) = &reason {
            if self.reasons.iter().any(|r| r.wraps(e.exception())) {
                return self;
            }
        }
        let current = self
            .source
            .and_then(|idx| self.reasons.get(idx))
            .and_then(Reason::primary_rank);
        let outranks = matches!(
            (reason.primary_rank(), current),
            (Some(new), Some(current)) if new < current
        );
        self.reasons.push(reason);
        if outranks {
            if let Some(ex) = self.reasons.last().and_then(Reason::to_exception) {
                self.error = ex;
                self.source = Some(self.reasons.len() - 1);
            }
        }
        self
    }

    /// Append an informational reason.
    pub fn with_reason(mut self, reason: SuccessReason) -> Self {
        self.reasons.push(Reason::Success(reason));
        self
    }

    /// Attach an outcome-level metadata entry.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<MetadataValue>) -> Self {
        self.metadata.insert(key, value);
        self
    }

    pub(crate) fn merge_metadata(mut self, metadata: &Metadata) -> Self {
        self.metadata.merge(metadata);
        self
    }

    /// Reshape this failure for a derived outcome.
    pub(crate) fn carry(self, policy: CopyPolicy) -> Self {
        match policy {
            CopyPolicy::Preserve => self,
            CopyPolicy::Discard => Failure::new(self.error),
        }
    }

    /// Replace the primary error while keeping the reason history.
    ///
    /// When the current primary stands for an `Exceptional` reason, that
    /// reason is rewritten in place to wrap the new error; every other reason
    /// is left untouched. When the new error is already wrapped by some
    /// reason, that reason becomes the source and nothing is rewritten.
    pub(crate) fn replace_primary(mut self, error: Exception) -> Self {
        if let Some(idx) = self.reasons.iter().position(|r| r.wraps(&error)) {
            self.source = Some(idx);
            self.error = error;
            return self;
        }

        let rewritten = match self.source.and_then(|idx| self.reasons.get_mut(idx)) {
            Some(Reason::Exceptional(e)) => {
                *e = e.clone().replace_exception(error.clone());
                true
            }
            _ => false,
        };
        if !rewritten {
            self.source = None;
        }
        self.error = error;
        self
    }

    /// Put `error` in front of every other reason and make it primary.
    pub(crate) fn prepend(mut self, error: impl IntoErrorReason) -> Self {
        let reason = error.into_error_reason();
        if let Reason::Exceptional(e) = &reason {
            let ex = e.exception().clone();
            self.reasons.retain(|r| !r.wraps(&ex));
        }
        self.error = reason
            .to_exception()
            .unwrap_or_else(|| Exception::msg(reason.message()));
        self.reasons.insert(0, reason);
        self.source = Some(0);
        self
    }

    /// Keep only the error reasons matching `predicate`.
    ///
    /// Informational reasons always survive. Returns the remaining success
    /// annotations and metadata as `Err` when no error reason is left.
    pub(crate) fn retain_errors<P>(self, mut predicate: P) -> Result<Self, (Vec<Reason>, Metadata)>
    where
        P: FnMut(&Reason) -> bool,
    {
        let reasons: Vec<Reason> = self
            .reasons
            .into_iter()
            .filter(|r| !r.is_error() || predicate(r))
            .collect();
        match Failure::from_reasons(reasons.clone()) {
            Some(failure) => Ok(failure.merge_metadata(&self.metadata)),
            None => Err((reasons, self.metadata)),
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;
        let others = self.error_reasons().count().saturating_sub(1);
        if others > 0 {
            write!(f, " (+{} more)", others)?;
        }
        Ok(())
    }
}
