//! Arity-dependent surface of the combinator catalog
//!
//! Outcomes carry their values as `T`: nothing is `()`, one value is the bare
//! value, and two to eight values are a tuple. Whole-value combinators on
//! [`Outcome`](crate::Outcome) therefore already work for every arity. This
//! module adds what depends on the number of values:
//!
//! - [`Spread0`], [`Spread2`] .. [`Spread8`]: combinators whose closures take
//!   the values as separate arguments (`|order, user| ..`) instead of a tuple.
//!   A single value needs no spreading and uses the plain methods.
//! - [`SpreadFuture0`], [`SpreadFuture2`] .. [`SpreadFuture8`]: `then_spread_map`
//!   and `then_spread_bind` on futures resolving to such outcomes, the spread
//!   counterpart of [`OutcomeFuture`](crate::OutcomeFuture).
//! - [`ZipAll`] and [`zip2`] .. [`zip8`]: combine several outcomes into one
//!   outcome of a flat tuple; [`ZipAllAsync`] does the same for futures.
//!
//! All of it is generated by `macro_rules!` from the arity alone, so every
//! instantiation delegates to the same whole-value definition.
//!
//! # Examples
//!
//! ```
//! use wellspring::{zip3, Outcome, Spread3};
//!
//! let total = zip3(Outcome::success(2), Outcome::success(3), Outcome::success(4))
//!     .spread_map(|a, b, c| a * b * c);
//! assert_eq!(total.ok(), Some(24));
//! ```

mod spread;
mod zip;

pub use spread::{
    Spread0, Spread2, Spread3, Spread4, Spread5, Spread6, Spread7, Spread8, SpreadFuture0,
    SpreadFuture2, SpreadFuture3, SpreadFuture4, SpreadFuture5, SpreadFuture6, SpreadFuture7,
    SpreadFuture8,
};
pub use zip::{zip2, zip3, zip4, zip5, zip6, zip7, zip8, ZipAll, ZipAllAsync};
