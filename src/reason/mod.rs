//! The reason model: structured annotations attached to outcomes
//!
//! A [`Reason`] is either an error (a wrapped [`Exception`] or a coded domain
//! error) or an informational [`SuccessReason`]. A failed outcome always
//! carries at least one error-kind reason, and exactly one
//! [primary exception](resolve_primary) chosen from them.
//!
//! # Examples
//!
//! ```
//! use wellspring::{ConflictError, Exception, Reason, ReasonKind};
//!
//! let reasons = vec![
//!     Reason::from(ConflictError::new("email taken")),
//!     Reason::from(Exception::msg("db timeout")),
//! ];
//!
//! // The first wrapped exception wins over earlier domain errors.
//! let (primary, source) = wellspring::reason::resolve_primary(&reasons).unwrap();
//! assert_eq!(primary.message(), "db timeout");
//! assert_eq!(source, 1);
//!
//! let conflict = ConflictError::find(&reasons).unwrap();
//! assert_eq!(conflict.message(), "email taken");
//! ```

mod error;
mod success;

pub use error::{
    ConflictError, DomainError, ExceptionalError, NotFoundError, UnauthorizedError,
    ValidationError, EXCEPTION_CODE,
};
pub use success::SuccessReason;

use std::error::Error as StdError;
use std::fmt;

use crate::exception::Exception;
use crate::metadata::Metadata;

/// Code reported by [`SuccessReason`]s.
pub const SUCCESS_CODE: &str = "SUCCESS";

/// A structured annotation attached to an outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum Reason {
    /// A wrapped host error
    Exceptional(ExceptionalError),
    /// Requested entity missing
    NotFound(NotFoundError),
    /// State conflict
    Conflict(ConflictError),
    /// Validation rule violated
    Validation(ValidationError),
    /// Caller not authorized
    Unauthorized(UnauthorizedError),
    /// Domain error with a custom code
    Domain(DomainError),
    /// Informational, non-error annotation
    Success(SuccessReason),
}

impl Reason {
    /// Whether this reason describes an error.
    pub fn is_error(&self) -> bool {
        !matches!(self, Reason::Success(_))
    }

    /// Stable code of the reason.
    pub fn code(&self) -> &str {
        match self {
            Reason::Exceptional(_) => EXCEPTION_CODE,
            Reason::NotFound(e) => e.code(),
            Reason::Conflict(e) => e.code(),
            Reason::Validation(e) => e.code(),
            Reason::Unauthorized(e) => e.code(),
            Reason::Domain(e) => e.code(),
            Reason::Success(_) => SUCCESS_CODE,
        }
    }

    /// Human readable message.
    pub fn message(&self) -> String {
        match self {
            Reason::Exceptional(e) => e.message(),
            Reason::NotFound(e) => e.message().to_string(),
            Reason::Conflict(e) => e.message().to_string(),
            Reason::Validation(e) => e.message().to_string(),
            Reason::Unauthorized(e) => e.message().to_string(),
            Reason::Domain(e) => e.message().to_string(),
            Reason::Success(s) => s.message().to_string(),
        }
    }

    /// The exception this reason wraps, if any.
    pub fn exception(&self) -> Option<&Exception> {
        match self {
            Reason::Exceptional(e) => Some(e.exception()),
            Reason::NotFound(e) => e.exception(),
            Reason::Conflict(e) => e.exception(),
            Reason::Validation(e) => e.exception(),
            Reason::Unauthorized(e) => e.exception(),
            Reason::Domain(e) => e.exception(),
            Reason::Success(_) => None,
        }
    }

    /// Metadata attached to this individual reason.
    pub fn metadata(&self) -> &Metadata {
        match self {
            Reason::Exceptional(e) => e.metadata(),
            Reason::NotFound(e) => e.metadata(),
            Reason::Conflict(e) => e.metadata(),
            Reason::Validation(e) => e.metadata(),
            Reason::Unauthorized(e) => e.metadata(),
            Reason::Domain(e) => e.metadata(),
            Reason::Success(s) => s.metadata(),
        }
    }

    /// The exception standing for this error reason.
    ///
    /// Domain errors without a wrapped exception get one synthesized from
    /// their message. Success reasons return `None`.
    pub fn to_exception(&self) -> Option<Exception> {
        if !self.is_error() {
            return None;
        }
        Some(
            self.exception()
                .cloned()
                .unwrap_or_else(|| Exception::msg(self.message())),
        )
    }

    /// How strongly this reason claims the primary error; lower wins.
    ///
    /// `None` for success reasons, which never stand for the primary.
    pub(crate) fn primary_rank(&self) -> Option<u8> {
        match self {
            Reason::Success(_) => None,
            Reason::Exceptional(_) => Some(0),
            domain if domain.exception().is_some() => Some(1),
            _ => Some(2),
        }
    }

    /// Whether this is an `Exceptional` reason wrapping exactly `exception`.
    pub(crate) fn wraps(&self, exception: &Exception) -> bool {
        matches!(self, Reason::Exceptional(e) if e.exception().ptr_eq(exception))
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::Exceptional(e) => write!(f, "{}", e),
            Reason::NotFound(e) => write!(f, "{}", e),
            Reason::Conflict(e) => write!(f, "{}", e),
            Reason::Validation(e) => write!(f, "{}", e),
            Reason::Unauthorized(e) => write!(f, "{}", e),
            Reason::Domain(e) => write!(f, "{}", e),
            Reason::Success(s) => write!(f, "{}", s),
        }
    }
}

/// Resolve the primary exception of a reason list.
///
/// Preference order: the first `Exceptional` reason, then the first domain
/// error wrapping an exception, then an exception synthesized from the first
/// domain error's message. Returns the exception with the index of the reason
/// it came from, or `None` when the list holds no error reason.
pub fn resolve_primary(reasons: &[Reason]) -> Option<(Exception, usize)> {
    let (idx, reason) = reasons
        .iter()
        .enumerate()
        .filter_map(|(idx, r)| r.primary_rank().map(|rank| (rank, idx, r)))
        .min_by_key(|(rank, idx, _)| (*rank, *idx))
        .map(|(_, idx, r)| (idx, r))?;
    Some((reason.to_exception()?, idx))
}

/// Values that can stand as the error of a failed outcome.
///
/// Implemented for [`Exception`], every error-kind reason type, and any
/// `std::error::Error + Send + Sync + 'static` (which becomes an
/// [`ExceptionalError`]). [`SuccessReason`] deliberately does not implement
/// it, so a failure can never be built from an informational reason.
pub trait IntoErrorReason {
    /// Convert into an error-kind [`Reason`].
    fn into_error_reason(self) -> Reason;
}

impl IntoErrorReason for Exception {
    fn into_error_reason(self) -> Reason {
        Reason::Exceptional(ExceptionalError::new(self))
    }
}

impl IntoErrorReason for ExceptionalError {
    fn into_error_reason(self) -> Reason {
        Reason::Exceptional(self)
    }
}

impl<E> IntoErrorReason for E
where
    E: StdError + Send + Sync + 'static,
{
    fn into_error_reason(self) -> Reason {
        Reason::Exceptional(ExceptionalError::new(Exception::new(self)))
    }
}

/// Typed lookup of one reason kind, used by
/// [`Outcome::match_error`](crate::Outcome::match_error).
pub trait ReasonKind: Sized {
    /// View `reason` as this kind.
    fn from_reason(reason: &Reason) -> Option<&Self>;

    /// The first reason of this kind in `reasons`.
    fn find(reasons: &[Reason]) -> Option<&Self> {
        reasons.iter().find_map(Self::from_reason)
    }
}

macro_rules! impl_reason_kind {
    ($($variant:ident($ty:ty)),+ $(,)?) => {
        $(
            impl ReasonKind for $ty {
                fn from_reason(reason: &Reason) -> Option<&Self> {
                    match reason {
                        Reason::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }
            }

            impl From<$ty> for Reason {
                fn from(reason: $ty) -> Self {
                    Reason::$variant(reason)
                }
            }
        )+
    };
}

impl_reason_kind!(
    Exceptional(ExceptionalError),
    NotFound(NotFoundError),
    Conflict(ConflictError),
    Validation(ValidationError),
    Unauthorized(UnauthorizedError),
    Domain(DomainError),
    Success(SuccessReason),
);

macro_rules! impl_into_error_reason {
    ($($variant:ident($ty:ty)),+ $(,)?) => {
        $(
            impl IntoErrorReason for $ty {
                fn into_error_reason(self) -> Reason {
                    Reason::$variant(self)
                }
            }
        )+
    };
}

impl_into_error_reason!(
    NotFound(NotFoundError),
    Conflict(ConflictError),
    Validation(ValidationError),
    Unauthorized(UnauthorizedError),
    Domain(DomainError),
);

impl From<Exception> for Reason {
    fn from(exception: Exception) -> Self {
        exception.into_error_reason()
    }
}
