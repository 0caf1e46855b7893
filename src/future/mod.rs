//! Asynchronous outcome combinators
//!
//! Two directions are covered:
//!
//! - **sync outcome, async transform**: `bind_async`, `map_async`,
//!   `try_map_async`, `tap_async`, `ensure_async`, ... are inherent methods
//!   on [`Outcome`](crate::Outcome) that await the supplied function's
//!   future on the matching branch only.
//! - **async outcome**: [`OutcomeFuture`] extends every
//!   `Future<Output = Outcome<T>> + Send` with `then_*` methods. Each awaits
//!   the upstream future once, then runs the synchronous (`then_map`,
//!   `then_bind`, ...) or asynchronous (`then_map_async`,
//!   `then_bind_async`, ...) combinator.
//!
//! Futures are zero-cost by default. [`OutcomeFuture::into_boxed`] turns any
//! of them into a [`BoxOutcomeFuture`] when a nameable type is needed, for
//! example to store heterogeneous pipelines or return them from trait
//! objects. Both flavors share every definition, so they cannot disagree.
//!
//! ```
//! use wellspring::{BoxOutcomeFuture, Outcome, OutcomeFuture};
//!
//! fn pipeline(flag: bool) -> BoxOutcomeFuture<'static, String> {
//!     if flag {
//!         async { Outcome::success(1) }.then_map(|n| n.to_string()).into_boxed()
//!     } else {
//!         async { Outcome::success("static".to_string()) }.into_boxed()
//!     }
//! }
//!
//! # tokio_test::block_on(async {
//! assert_eq!(pipeline(true).await.ok().as_deref(), Some("1"));
//! assert_eq!(pipeline(false).await.ok().as_deref(), Some("static"));
//! # });
//! ```

mod ext;
mod transform;

pub use ext::{BoxOutcomeFuture, OutcomeFuture};
