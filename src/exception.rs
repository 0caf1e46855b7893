//! Shared handles to host errors
//!
//! An [`Exception`] is what a failed [`Outcome`](crate::Outcome) ultimately
//! points at: a reference-counted `dyn Error` that can be cloned cheaply and
//! compared by identity. Two exceptions are equal only when they refer to the
//! same underlying error instance, which is what lets the reason model keep
//! its non-duplication guarantee without requiring `PartialEq` on user errors.
//!
//! # Examples
//!
//! ```
//! use wellspring::Exception;
//!
//! let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
//! let ex = Exception::new(io);
//! let same = ex.clone();
//!
//! assert_eq!(ex.message(), "disk full");
//! assert!(ex.ptr_eq(&same));
//! assert!(!ex.ptr_eq(&Exception::msg("disk full")));
//! ```

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// A cloneable, identity-compared handle to an error.
///
/// `Exception` intentionally does not implement [`std::error::Error`] itself,
/// so that any error type converts into it through `From`. Use
/// [`Exception::as_error`] when a `&dyn Error` is needed.
#[derive(Clone)]
pub struct Exception {
    inner: Arc<dyn StdError + Send + Sync + 'static>,
}

impl Exception {
    /// Wrap an error.
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Exception {
            inner: Arc::new(error),
        }
    }

    /// Create an exception that carries only a message.
    ///
    /// ```
    /// use wellspring::Exception;
    ///
    /// let ex = Exception::msg("boom");
    /// assert_eq!(ex.to_string(), "boom");
    /// ```
    pub fn msg(message: impl Into<String>) -> Self {
        Exception::new(MessageError(message.into()))
    }

    /// Combine several exceptions into one [`AggregateError`].
    pub fn aggregate(errors: Vec<Exception>) -> Self {
        Exception::new(AggregateError::new(errors))
    }

    /// Turn a panic payload into an exception carrying a [`PanicError`].
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        Exception::new(PanicError::from_payload(payload))
    }

    /// The error's `Display` output.
    pub fn message(&self) -> String {
        self.inner.to_string()
    }

    /// Borrow the underlying error.
    pub fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.inner
    }

    /// Attempt to view the underlying error as a concrete type.
    ///
    /// ```
    /// use wellspring::{AggregateError, Exception};
    ///
    /// let ex = Exception::aggregate(vec![Exception::msg("a")]);
    /// assert_eq!(ex.downcast_ref::<AggregateError>().map(|a| a.len()), Some(1));
    /// ```
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        self.as_error().downcast_ref::<E>()
    }

    /// Whether two handles refer to the same error instance.
    pub fn ptr_eq(&self, other: &Exception) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<E> From<E> for Exception
where
    E: StdError + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Exception::new(error)
    }
}

impl PartialEq for Exception {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Display for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.inner, f)
    }
}

impl fmt::Debug for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Exception").field(&self.message()).finish()
    }
}

/// Error carrying nothing but a message.
#[derive(Debug, Clone, PartialEq, Eq)]
struct MessageError(String);

impl fmt::Display for MessageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl StdError for MessageError {}

/// Several errors reported as one.
///
/// Produced by [`Outcome::value_or_throw`](crate::Outcome::value_or_throw)
/// from every error a failure collected.
///
/// ```
/// use wellspring::{AggregateError, Exception};
///
/// let agg = AggregateError::new(vec![Exception::msg("first"), Exception::msg("second")]);
/// assert_eq!(agg.to_string(), "2 errors occurred: first; second");
/// ```
#[derive(Debug, Clone)]
pub struct AggregateError {
    errors: Vec<Exception>,
}

impl AggregateError {
    /// Create an aggregate from the given errors.
    pub fn new(errors: Vec<Exception>) -> Self {
        AggregateError { errors }
    }

    /// The aggregated errors, in collection order.
    pub fn errors(&self) -> &[Exception] {
        &self.errors
    }

    /// Number of aggregated errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Whether the aggregate is empty.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.as_slice() {
            [] => f.write_str("no errors occurred"),
            [only] => write!(f, "{}", only),
            errors => {
                write!(f, "{} errors occurred: ", errors.len())?;
                for (idx, error) in errors.iter().enumerate() {
                    if idx > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{}", error)?;
                }
                Ok(())
            }
        }
    }
}

impl StdError for AggregateError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.errors
            .first()
            .map(|e| e.as_error() as &(dyn StdError + 'static))
    }
}

/// A panic captured by [`Outcome::catch_unwind`](crate::Outcome::catch_unwind).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanicError {
    message: String,
}

impl PanicError {
    fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "panic with non-string payload".to_string()
        };
        PanicError { message }
    }

    /// The panic message, when the payload was a string.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for PanicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "panicked: {}", self.message)
    }
}

impl StdError for PanicError {}
