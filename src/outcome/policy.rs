//! Explicit propagation policies.
//!
//! Whether a derived failure keeps the history of the one it came from is
//! decided at the call site with these values, never by a hidden default
//! inside a combinator.

/// What a short-circuited failure carries onto its new shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CopyPolicy {
    /// Keep every reason and the outcome-level metadata.
    #[default]
    Preserve,
    /// Keep only the primary error.
    Discard,
}

/// How [`Outcome::map_error`](crate::Outcome::map_error) treats reason history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapErrorPolicy {
    /// Replace the failure with one holding only the mapped error.
    ShortCircuit,
    /// Keep all reasons and metadata, replace only the primary error.
    Accumulate,
}
