//! Error-kind reasons: wrapped exceptions and coded domain errors.

use std::fmt;

use crate::exception::Exception;
use crate::metadata::{Metadata, MetadataValue};

/// Code reported by [`ExceptionalError`].
pub const EXCEPTION_CODE: &str = "EXCEPTION";

/// An unexpected failure: a wrapped host error.
///
/// Its message is always the wrapped exception's message.
#[derive(Debug, Clone, PartialEq)]
pub struct ExceptionalError {
    exception: Exception,
    metadata: Metadata,
}

impl ExceptionalError {
    /// Wrap an exception.
    pub fn new(exception: impl Into<Exception>) -> Self {
        ExceptionalError {
            exception: exception.into(),
            metadata: Metadata::new(),
        }
    }

    /// Attach a metadata entry to this reason.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<MetadataValue>) -> Self {
        self.metadata.insert(key, value);
        self
    }

    /// The wrapped exception.
    pub fn exception(&self) -> &Exception {
        &self.exception
    }

    /// The wrapped exception's message.
    pub fn message(&self) -> String {
        self.exception.message()
    }

    /// Metadata attached to this reason.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub(crate) fn replace_exception(self, exception: Exception) -> Self {
        ExceptionalError {
            exception,
            metadata: self.metadata,
        }
    }
}

impl fmt::Display for ExceptionalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.exception)
    }
}

// Every coded domain error has the same shape; only the name and the default
// code differ.
macro_rules! domain_error {
    ($(
        $(#[$meta:meta])*
        $name:ident => $code:literal;
    )+) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, PartialEq)]
            pub struct $name {
                code: String,
                message: String,
                exception: Option<Exception>,
                metadata: Metadata,
            }

            impl $name {
                /// Code used when none is given.
                pub const DEFAULT_CODE: &'static str = $code;

                /// Create the error with its default code.
                pub fn new(message: impl Into<String>) -> Self {
                    $name {
                        code: $code.to_string(),
                        message: message.into(),
                        exception: None,
                        metadata: Metadata::new(),
                    }
                }

                /// Override the code.
                pub fn with_code(mut self, code: impl Into<String>) -> Self {
                    self.code = code.into();
                    self
                }

                /// Record the exception that caused this error.
                pub fn caused_by(mut self, exception: impl Into<Exception>) -> Self {
                    self.exception = Some(exception.into());
                    self
                }

                /// Attach a metadata entry to this reason.
                pub fn with_metadata(
                    mut self,
                    key: impl Into<String>,
                    value: impl Into<MetadataValue>,
                ) -> Self {
                    self.metadata.insert(key, value);
                    self
                }

                /// Stable machine-readable code.
                pub fn code(&self) -> &str {
                    &self.code
                }

                /// Human readable message.
                pub fn message(&self) -> &str {
                    &self.message
                }

                /// The wrapped exception, if any.
                pub fn exception(&self) -> Option<&Exception> {
                    self.exception.as_ref()
                }

                /// Metadata attached to this reason.
                pub fn metadata(&self) -> &Metadata {
                    &self.metadata
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "[{}] {}", self.code, self.message)
                }
            }

            impl From<&str> for $name {
                fn from(message: &str) -> Self {
                    $name::new(message)
                }
            }

            impl From<String> for $name {
                fn from(message: String) -> Self {
                    $name::new(message)
                }
            }
        )+
    };
}

domain_error! {
    /// A requested entity does not exist.
    NotFoundError => "NOT_FOUND";
    /// The request conflicts with current state (duplicates, stale versions).
    ConflictError => "CONFLICT";
    /// Input failed a validation rule. Produced by the `ensure` family.
    ValidationError => "VALIDATION";
    /// The caller is not allowed to perform the operation.
    UnauthorizedError => "UNAUTHORIZED";
}

/// A domain error with a caller-chosen code.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainError {
    code: String,
    message: String,
    exception: Option<Exception>,
    metadata: Metadata,
}

impl DomainError {
    /// Create a domain error.
    ///
    /// ```
    /// use wellspring::DomainError;
    ///
    /// let err = DomainError::new("RATE_LIMITED", "slow down");
    /// assert_eq!(err.to_string(), "[RATE_LIMITED] slow down");
    /// ```
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        DomainError {
            code: code.into(),
            message: message.into(),
            exception: None,
            metadata: Metadata::new(),
        }
    }

    /// Record the exception that caused this error.
    pub fn caused_by(mut self, exception: impl Into<Exception>) -> Self {
        self.exception = Some(exception.into());
        self
    }

    /// Attach a metadata entry to this reason.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<MetadataValue>) -> Self {
        self.metadata.insert(key, value);
        self
    }

    /// Stable machine-readable code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The wrapped exception, if any.
    pub fn exception(&self) -> Option<&Exception> {
        self.exception.as_ref()
    }

    /// Metadata attached to this reason.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}
