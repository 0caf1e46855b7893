//! # Wellspring
//!
//! Typed outcomes with structured reasons.
//!
//! An [`Outcome<T>`] is either a success carrying a value, or a failure
//! carrying a primary [`Exception`] together with the structured [`Reason`]s
//! that explain it. Outcomes compose through a catalog of combinators
//! (`bind`, `map`, `try_map`, `ensure`, `recover`, `map_error`, ..) that
//! short-circuit on failure and keep metadata flowing along the chain.
//!
//! ## Quick Example
//!
//! ```rust
//! use wellspring::{NotFoundError, Outcome, Spread2, ValidationError};
//!
//! fn find_user(id: u32) -> Outcome<String> {
//!     match id {
//!         1 => Outcome::success("ada".to_string()),
//!         _ => Outcome::failure(NotFoundError::new(format!("user {} not found", id))),
//!     }
//! }
//!
//! fn find_order(user: &str) -> Outcome<u32> {
//!     Outcome::success(user.len() as u32 * 100)
//! }
//!
//! let summary = find_user(1)
//!     .bind(|user| find_order(&user).map(|total| (user, total)))
//!     .spread_ensure(|_, total| *total > 0, ValidationError::new("empty order"))
//!     .spread_map(|user, total| format!("{} owes {}", user, total));
//! assert_eq!(summary.ok().as_deref(), Some("ada owes 300"));
//!
//! let missing = find_user(9).map(|user| user.len());
//! assert_eq!(missing.reasons()[0].code(), "NOT_FOUND");
//! ```
//!
//! ## Layout
//!
//! - [`outcome`]: the [`Outcome`] type and the whole-value combinators.
//! - [`reason`]: the reason model and primary-error resolution.
//! - [`arity`]: spread-argument combinators and flat zipping for 0 to 8 values.
//! - [`future`]: combinators on futures resolving to outcomes, inline or boxed.
//! - [`testing`]: assertion macros and, with `proptest`, `Arbitrary` impls.
//!
//! ## Features
//!
//! - `tracing`: debug/warn events from fallible combinators and
//!   [`OutcomeTracingExt`].
//! - `serde`: `Serialize` for outcomes and reasons, `Deserialize` for metadata.
//! - `proptest`: `Arbitrary` for [`Outcome`].
//! - `try_trait`: `?` on outcomes (nightly).

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![cfg_attr(feature = "try_trait", feature(try_trait_v2))]

pub mod arity;
pub mod exception;
pub mod future;
pub mod metadata;
pub mod outcome;
pub mod reason;
pub mod testing;

#[cfg(feature = "serde")]
mod serde_impl;

// Re-exports
pub use arity::{
    zip2, zip3, zip4, zip5, zip6, zip7, zip8, Spread0, Spread2, Spread3, Spread4, Spread5,
    Spread6, Spread7, Spread8, SpreadFuture0, SpreadFuture2, SpreadFuture3, SpreadFuture4,
    SpreadFuture5, SpreadFuture6, SpreadFuture7, SpreadFuture8, ZipAll, ZipAllAsync,
};
pub use exception::{AggregateError, Exception, PanicError};
pub use future::{BoxOutcomeFuture, OutcomeFuture};
pub use metadata::{Metadata, MetadataValue};
#[cfg(feature = "tracing")]
pub use outcome::OutcomeTracingExt;
pub use outcome::{
    failure, success, CopyPolicy, Emptiable, Failure, MapErrorPolicy, Outcome, Success,
};
pub use reason::{
    ConflictError, DomainError, ExceptionalError, IntoErrorReason, NotFoundError, Reason,
    ReasonKind, SuccessReason, UnauthorizedError, ValidationError,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::arity::{
        zip2, zip3, zip4, zip5, zip6, zip7, zip8, Spread0, Spread2, Spread3, Spread4, Spread5,
        Spread6, Spread7, Spread8, SpreadFuture0, SpreadFuture2, SpreadFuture3, SpreadFuture4,
        SpreadFuture5, SpreadFuture6, SpreadFuture7, SpreadFuture8, ZipAll, ZipAllAsync,
    };
    pub use crate::exception::Exception;
    pub use crate::future::{BoxOutcomeFuture, OutcomeFuture};
    pub use crate::metadata::{Metadata, MetadataValue};
    #[cfg(feature = "tracing")]
    pub use crate::outcome::OutcomeTracingExt;
    pub use crate::outcome::{failure, success, CopyPolicy, Emptiable, MapErrorPolicy, Outcome};
    pub use crate::reason::{
        ConflictError, DomainError, IntoErrorReason, NotFoundError, Reason, ReasonKind,
        SuccessReason, UnauthorizedError, ValidationError,
    };
}
