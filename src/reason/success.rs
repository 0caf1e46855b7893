//! Informational annotations on successful outcomes.

use std::fmt;

use crate::metadata::{Metadata, MetadataValue};

/// A non-error annotation such as "served from cache".
///
/// Success reasons never change whether an outcome succeeded.
#[derive(Debug, Clone, PartialEq)]
pub struct SuccessReason {
    message: String,
    metadata: Metadata,
}

impl SuccessReason {
    /// Create an annotation.
    pub fn new(message: impl Into<String>) -> Self {
        SuccessReason {
            message: message.into(),
            metadata: Metadata::new(),
        }
    }

    /// Attach a metadata entry to this reason.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<MetadataValue>) -> Self {
        self.metadata.insert(key, value);
        self
    }

    /// The annotation text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Metadata attached to this reason.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}

impl fmt::Display for SuccessReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<&str> for SuccessReason {
    fn from(message: &str) -> Self {
        SuccessReason::new(message)
    }
}
