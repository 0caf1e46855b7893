//! The combinator catalog.
//!
//! Every combinator is an inherent method on [`Outcome<T>`](crate::Outcome)
//! written once over `T`, so the same definition serves outcomes carrying
//! zero, one, or a tuple of values. Failures are only ever reshaped through
//! the helpers on [`Failure`](crate::Failure), which keeps one propagation
//! rule for reasons and metadata across the whole catalog.
//!
//! | family | methods |
//! |---|---|
//! | chaining | `bind`, `bind_with`, `flatten`, `or_else` |
//! | transforming | `map`, `try_map` |
//! | observing | `tap`, `tap_error`, `tap_both` |
//! | error shaping | `map_error`, `map_errors`, `prepend_error`, `filter_errors`, `match_error` |
//! | guards | `ensure`, `ensure_some`, `ensure_not_empty` |
//! | recovery | `recover`, `recover_with`, `value_or`, `value_or_else`, `value_or_throw` |
//! | combining | `zip`, `zip_with` |

mod bind;
mod filter;
mod guard;
mod map;
mod map_error;
mod recover;
mod tap;
mod zip;

pub use guard::Emptiable;
