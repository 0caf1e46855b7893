//! The outcome type: a typed success value or a structured failure
//!
//! [`Outcome<T>`] is the crate's central value. It is either a
//! [`Success`] carrying a value plus informational annotations, or a
//! [`Failure`] carrying a primary [`Exception`] and the reasons behind it.
//!
//! The number of values an outcome carries is encoded in `T`:
//!
//! | values | type |
//! |---|---|
//! | 0 | `Outcome<()>` |
//! | 1 | `Outcome<A>` |
//! | n ≥ 2 | `Outcome<(A, B, ..)>` |
//!
//! Every combinator in [`combinators`] is written once over `T`, so all
//! arities share one definition. The [`arity`](crate::arity) module adds
//! spread-argument forms for tuple outcomes.
//!
//! # Examples
//!
//! ```
//! use wellspring::{Exception, NotFoundError, Outcome};
//!
//! fn find_user(id: u32) -> Outcome<String> {
//!     if id == 1 {
//!         Outcome::success("ada".to_string())
//!     } else {
//!         Outcome::failure(NotFoundError::new(format!("user {} not found", id)))
//!     }
//! }
//!
//! assert_eq!(find_user(1).ok(), Some("ada".to_string()));
//!
//! let missing = find_user(2);
//! assert!(missing.is_failure());
//! assert_eq!(missing.err().map(Exception::message), Some("user 2 not found".to_string()));
//! assert_eq!(missing.reasons()[0].code(), "NOT_FOUND");
//! ```

pub mod combinators;
mod failure;
#[cfg(feature = "tracing")]
mod observe;
mod policy;

pub use combinators::Emptiable;
pub use failure::Failure;
#[cfg(feature = "tracing")]
pub use observe::OutcomeTracingExt;
pub use policy::{CopyPolicy, MapErrorPolicy};

use std::panic::{self, AssertUnwindSafe};

use crate::exception::Exception;
use crate::metadata::{Metadata, MetadataValue};
use crate::reason::{IntoErrorReason, Reason, SuccessReason, ValidationError};

/// Either a successful value or a structured failure.
#[derive(Debug, Clone, PartialEq)]
#[must_use = "an outcome may be a failure that should be handled"]
pub enum Outcome<T> {
    /// The computation produced a value.
    Success(Success<T>),
    /// The computation failed.
    Failure(Failure),
}

/// The success payload: a value, informational annotations and metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Success<T> {
    value: T,
    // Only `Reason::Success` entries.
    reasons: Vec<Reason>,
    metadata: Metadata,
}

impl<T> Success<T> {
    /// Wrap a value with no annotations.
    pub fn new(value: T) -> Self {
        Success {
            value,
            reasons: Vec::new(),
            metadata: Metadata::new(),
        }
    }

    /// The carried value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Take the carried value, dropping annotations.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Informational annotations, in order.
    pub fn reasons(&self) -> &[Reason] {
        &self.reasons
    }

    /// Outcome-level metadata.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub(crate) fn into_parts(self) -> (T, Vec<Reason>, Metadata) {
        (self.value, self.reasons, self.metadata)
    }

    pub(crate) fn from_parts(value: T, reasons: Vec<Reason>, metadata: Metadata) -> Self {
        Success {
            value,
            reasons,
            metadata,
        }
    }
}

/// Create a successful outcome.
///
/// Shorthand for [`Outcome::success`].
#[inline]
pub fn success<T>(value: T) -> Outcome<T> {
    Outcome::success(value)
}

/// Create a failed outcome.
///
/// Shorthand for [`Outcome::failure`].
///
/// ```
/// use wellspring::{failure, Exception};
///
/// let failed = failure::<i32>(Exception::msg("boom"));
/// assert!(failed.is_failure());
/// ```
#[inline]
pub fn failure<T>(error: impl IntoErrorReason) -> Outcome<T> {
    Outcome::failure(error)
}

impl<T> Outcome<T> {
    /// Create a successful outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use wellspring::Outcome;
    ///
    /// let unit = Outcome::success(());
    /// let pair = Outcome::success((1, "one"));
    /// assert!(unit.is_success() && pair.is_success());
    /// ```
    #[inline]
    pub fn success(value: T) -> Self {
        Outcome::Success(Success::new(value))
    }

    /// Create a failed outcome from an exception, any `std::error::Error`,
    /// or a domain error.
    ///
    /// An exception yields exactly one `Exceptional` reason wrapping that very
    /// instance; a domain error yields exactly one reason equal to it.
    ///
    /// # Examples
    ///
    /// ```
    /// use wellspring::{ConflictError, Exception, Outcome};
    ///
    /// let ex = Exception::msg("db down");
    /// let failed = Outcome::<()>::failure(ex.clone());
    /// assert!(failed.err().is_some_and(|e| e.ptr_eq(&ex)));
    ///
    /// let conflict = Outcome::<()>::failure(ConflictError::new("dup"));
    /// assert_eq!(conflict.reasons().len(), 1);
    /// ```
    #[inline]
    pub fn failure(error: impl IntoErrorReason) -> Self {
        Outcome::Failure(Failure::new(error))
    }

    /// Success when `value` is present, otherwise a failure with `error`.
    ///
    /// ```
    /// use wellspring::{NotFoundError, Outcome};
    ///
    /// let found = Outcome::from_option(Some(3), NotFoundError::new("none"));
    /// assert_eq!(found.ok(), Some(3));
    ///
    /// let missing = Outcome::<i32>::from_option(None, NotFoundError::new("none"));
    /// assert!(missing.is_failure());
    /// ```
    pub fn from_option(value: Option<T>, error: impl IntoErrorReason) -> Self {
        match value {
            Some(value) => Outcome::success(value),
            None => Outcome::failure(error),
        }
    }

    /// Success with `on_true()` when `condition` holds, otherwise a failure
    /// with `on_false()`. Only the taken branch is evaluated.
    pub fn from_condition<E, S, F>(condition: bool, on_true: S, on_false: F) -> Self
    where
        E: IntoErrorReason,
        S: FnOnce() -> T,
        F: FnOnce() -> E,
    {
        if condition {
            Outcome::success(on_true())
        } else {
            Outcome::failure(on_false())
        }
    }

    /// Success with `value` when `errors` is empty; otherwise a failure that
    /// holds every validation error, in order.
    ///
    /// ```
    /// use wellspring::{Outcome, ValidationError};
    ///
    /// let errors = vec![ValidationError::new("too short"), ValidationError::new("no digit")];
    /// let checked = Outcome::from_validation("pw", errors);
    /// assert_eq!(checked.reasons().len(), 2);
    /// assert_eq!(checked.err().map(|e| e.message()), Some("too short".to_string()));
    /// ```
    pub fn from_validation<I>(value: T, errors: I) -> Self
    where
        I: IntoIterator<Item = ValidationError>,
    {
        let reasons: Vec<Reason> = errors.into_iter().map(Reason::Validation).collect();
        match Failure::from_reasons(reasons) {
            Some(failure) => Outcome::Failure(failure),
            None => Outcome::success(value),
        }
    }

    /// Convert a `Result`, wrapping its error.
    #[inline]
    pub fn from_result<E>(result: Result<T, E>) -> Self
    where
        E: IntoErrorReason,
    {
        match result {
            Ok(value) => Outcome::success(value),
            Err(error) => Outcome::failure(error),
        }
    }

    /// Run `f`, turning a panic into a failure carrying a
    /// [`PanicError`](crate::PanicError).
    ///
    /// ```
    /// use wellspring::{Outcome, PanicError};
    ///
    /// let caught = Outcome::<i32>::catch_unwind(|| panic!("overflow"));
    /// let panic = caught.err().and_then(|e| e.downcast_ref::<PanicError>().cloned());
    /// assert_eq!(panic.map(|p| p.message().to_string()), Some("overflow".to_string()));
    /// ```
    pub fn catch_unwind<F>(f: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match panic::catch_unwind(AssertUnwindSafe(f)) {
            Ok(value) => Outcome::success(value),
            Err(payload) => {
                let exception = Exception::from_panic(payload);
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %exception, "panic captured as failure");
                Outcome::failure(exception)
            }
        }
    }

    /// Returns `true` on success.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns `true` on failure.
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Borrow the success value.
    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Success(s) => Some(&s.value),
            Outcome::Failure(_) => None,
        }
    }

    /// Borrow the failure payload.
    pub fn as_failure(&self) -> Option<&Failure> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(f) => Some(f),
        }
    }

    /// The success value, if any.
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Outcome::Success(s) => Some(s.value),
            Outcome::Failure(_) => None,
        }
    }

    /// The primary error, if any.
    #[inline]
    pub fn err(&self) -> Option<&Exception> {
        self.as_failure().map(Failure::error)
    }

    /// Convert into a `Result` carrying the primary error.
    ///
    /// ```
    /// use wellspring::{Exception, Outcome};
    ///
    /// assert_eq!(Outcome::success(5).into_result().ok(), Some(5));
    ///
    /// let ex = Exception::msg("nope");
    /// let res = Outcome::<i32>::failure(ex.clone()).into_result();
    /// assert!(res.is_err_and(|e| e.ptr_eq(&ex)));
    /// ```
    pub fn into_result(self) -> Result<T, Exception> {
        match self {
            Outcome::Success(s) => Ok(s.value),
            Outcome::Failure(f) => Err(f.error().clone()),
        }
    }

    /// Borrow as a `Result` of the value or the primary error.
    pub fn as_result(&self) -> Result<&T, &Exception> {
        match self {
            Outcome::Success(s) => Ok(&s.value),
            Outcome::Failure(f) => Err(f.error()),
        }
    }

    /// Convert into a `Result` carrying the whole failure payload.
    pub fn unpack(self) -> Result<T, Failure> {
        match self {
            Outcome::Success(s) => Ok(s.value),
            Outcome::Failure(f) => Err(f),
        }
    }

    /// Eliminate the outcome. Exactly one branch runs.
    ///
    /// ```
    /// use wellspring::Outcome;
    ///
    /// let label = Outcome::success(2).fold(|n| format!("got {}", n), |f| f.message());
    /// assert_eq!(label, "got 2");
    /// ```
    pub fn fold<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(Failure) -> R,
    {
        match self {
            Outcome::Success(s) => on_success(s.value),
            Outcome::Failure(f) => on_failure(f),
        }
    }

    /// Run `action` on the value when successful.
    pub fn if_success<F>(&self, action: F)
    where
        F: FnOnce(&T),
    {
        if let Outcome::Success(s) = self {
            action(&s.value);
        }
    }

    /// Run `action` on the failure when failed.
    pub fn if_failure<F>(&self, action: F)
    where
        F: FnOnce(&Failure),
    {
        if let Outcome::Failure(f) = self {
            action(f);
        }
    }

    /// Every reason attached to the outcome, success annotations included.
    pub fn reasons(&self) -> &[Reason] {
        match self {
            Outcome::Success(s) => &s.reasons,
            Outcome::Failure(f) => f.reasons(),
        }
    }

    /// Outcome-level metadata.
    pub fn metadata(&self) -> &Metadata {
        match self {
            Outcome::Success(s) => &s.metadata,
            Outcome::Failure(f) => f.metadata(),
        }
    }

    /// The collected error list, primary first. Empty on success.
    pub fn errors(&self) -> Vec<Exception> {
        self.as_failure().map(Failure::errors).unwrap_or_default()
    }

    /// Append an informational annotation. Never changes success or failure.
    pub fn with_reason(self, reason: impl Into<SuccessReason>) -> Self {
        match self {
            Outcome::Success(mut s) => {
                s.reasons.push(Reason::Success(reason.into()));
                Outcome::Success(s)
            }
            Outcome::Failure(f) => Outcome::Failure(f.with_reason(reason.into())),
        }
    }

    /// Attach an outcome-level metadata entry. An existing key is overwritten.
    pub fn with_metadata(self, key: impl Into<String>, value: impl Into<MetadataValue>) -> Self {
        match self {
            Outcome::Success(mut s) => {
                s.metadata.insert(key, value);
                Outcome::Success(s)
            }
            Outcome::Failure(f) => Outcome::Failure(f.with_metadata(key, value)),
        }
    }

    /// Copy every metadata entry of `other` onto this outcome.
    ///
    /// ```
    /// use wellspring::Outcome;
    ///
    /// let upstream = Outcome::success(1).with_metadata("request_id", "r-9");
    /// let derived = Outcome::success("x").with_metadata_from(&upstream);
    /// assert_eq!(derived.metadata().get("request_id").and_then(|v| v.as_str()), Some("r-9"));
    /// ```
    pub fn with_metadata_from<U>(self, other: &Outcome<U>) -> Self {
        self.merge_metadata(other.metadata())
    }

    pub(crate) fn merge_metadata(self, metadata: &Metadata) -> Self {
        match self {
            Outcome::Success(mut s) => {
                s.metadata.merge(metadata);
                Outcome::Success(s)
            }
            Outcome::Failure(f) => Outcome::Failure(f.merge_metadata(metadata)),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: IntoErrorReason,
{
    fn from(result: Result<T, E>) -> Self {
        Outcome::from_result(result)
    }
}

impl<T> From<Failure> for Outcome<T> {
    fn from(failure: Failure) -> Self {
        Outcome::Failure(failure)
    }
}

impl<T> From<Success<T>> for Outcome<T> {
    fn from(success: Success<T>) -> Self {
        Outcome::Success(success)
    }
}

#[cfg(feature = "try_trait")]
impl<T> std::ops::Try for Outcome<T> {
    type Output = T;
    type Residual = Outcome<std::convert::Infallible>;

    fn from_output(output: Self::Output) -> Self {
        Outcome::success(output)
    }

    fn branch(self) -> std::ops::ControlFlow<Self::Residual, Self::Output> {
        match self {
            Outcome::Success(s) => std::ops::ControlFlow::Continue(s.value),
            Outcome::Failure(f) => std::ops::ControlFlow::Break(Outcome::Failure(f)),
        }
    }
}

#[cfg(feature = "try_trait")]
impl<T> std::ops::FromResidual<Outcome<std::convert::Infallible>> for Outcome<T> {
    fn from_residual(residual: Outcome<std::convert::Infallible>) -> Self {
        match residual {
            Outcome::Failure(f) => Outcome::Failure(f),
            Outcome::Success(s) => match s.value {},
        }
    }
}

#[cfg(feature = "try_trait")]
impl<T, E> std::ops::FromResidual<Result<std::convert::Infallible, E>> for Outcome<T>
where
    E: IntoErrorReason,
{
    fn from_residual(residual: Result<std::convert::Infallible, E>) -> Self {
        match residual {
            Err(error) => Outcome::failure(error),
            Ok(never) => match never {},
        }
    }
}
