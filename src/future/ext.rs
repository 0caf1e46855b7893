//! Combinators on futures that resolve to an outcome.

use std::future::Future;

use futures::future::BoxFuture;

use crate::exception::Exception;
use crate::outcome::{Failure, MapErrorPolicy, Outcome};
use crate::reason::{IntoErrorReason, ValidationError};

/// A heap-allocated outcome future.
///
/// Boxing is opt-in through [`OutcomeFuture::into_boxed`]; the boxed future
/// is itself an [`OutcomeFuture`] and runs exactly the same combinators.
pub type BoxOutcomeFuture<'a, T> = BoxFuture<'a, Outcome<T>>;

// Expands one combinator per entry. Every method awaits the upstream future
// once and hands the outcome to the inherent method named after `=>`.
// `sync` targets return the outcome directly; `async` targets return a
// future that is awaited as the method's second and last step.
macro_rules! await_then {
    ($(
        $(#[$doc:meta])*
        $kind:ident fn $name:ident[$($gen:tt)*]($($arg:ident: $argty:ty),*) -> $ret:ty
            => $target:ident
            where { $($bounds:tt)* }
    );+ $(;)?) => {
        $(
            $(#[$doc])*
            fn $name<$($gen)*>(self, $($arg: $argty),*) -> impl Future<Output = $ret> + Send
            where
                $($bounds)*
            {
                await_then!(@body $kind self, $target($($arg),*))
            }
        )+
    };
    (@body sync $upstream:ident, $target:ident($($arg:ident),*)) => {
        async move { $upstream.await.$target($($arg),*) }
    };
    (@body async $upstream:ident, $target:ident($($arg:ident),*)) => {
        async move { $upstream.await.$target($($arg),*).await }
    };
}

/// Outcome combinators for any `Future<Output = Outcome<T>> + Send`.
///
/// Methods are named `then_*` after the synchronous combinator they run once
/// the upstream future resolves, so they never collide with
/// [`futures::FutureExt`]. A failed upstream outcome never invokes the
/// supplied function, sync or async.
///
/// Inline futures (`async` blocks, `async fn` calls) and boxed
/// [`BoxOutcomeFuture`]s go through the same definitions.
///
/// # Examples
///
/// ```
/// use wellspring::{Outcome, OutcomeFuture};
///
/// async fn fetch_price(sku: &str) -> Outcome<u32> {
///     Outcome::success(if sku == "apple" { 120 } else { 80 })
/// }
///
/// # tokio_test::block_on(async {
/// let inline = fetch_price("apple")
///     .then_map(|cents| cents * 2)
///     .then_ensure(|total| *total < 1_000, "over budget")
///     .await;
///
/// let boxed = fetch_price("apple")
///     .into_boxed()
///     .then_map(|cents| cents * 2)
///     .then_ensure(|total| *total < 1_000, "over budget")
///     .await;
///
/// assert_eq!(inline, boxed);
/// assert_eq!(inline.ok(), Some(240));
/// # });
/// ```
pub trait OutcomeFuture<T>: Future<Output = Outcome<T>> + Send + Sized {
    await_then! {
        /// Await, then [`map`](Outcome::map).
        sync fn then_map[U, F](f: F) -> Outcome<U> => map
            where { F: FnOnce(T) -> U + Send };
        /// Await, then [`bind`](Outcome::bind).
        sync fn then_bind[U, F](f: F) -> Outcome<U> => bind
            where { F: FnOnce(T) -> Outcome<U> + Send };
        /// Await, then [`try_map`](Outcome::try_map).
        sync fn then_try_map[U, E, F](f: F) -> Outcome<U> => try_map
            where { F: FnOnce(T) -> Result<U, E> + Send, E: IntoErrorReason };
        /// Await, then [`tap`](Outcome::tap).
        sync fn then_tap[F](f: F) -> Outcome<T> => tap
            where { F: FnOnce(&T) + Send };
        /// Await, then [`tap_error`](Outcome::tap_error).
        sync fn then_tap_error[F](f: F) -> Outcome<T> => tap_error
            where { F: FnOnce(&Failure) + Send };
        /// Await, then [`map_error`](Outcome::map_error).
        sync fn then_map_error[E, F](policy: MapErrorPolicy, f: F) -> Outcome<T> => map_error
            where { F: FnOnce(&Exception) -> E + Send, E: Into<Exception> };
        /// Await, then [`map_errors`](Outcome::map_errors).
        sync fn then_map_errors[E, F](f: F) -> Outcome<T> => map_errors
            where { F: FnOnce(Vec<Exception>) -> E + Send, E: Into<Exception> };
        /// Await, then [`prepend_error`](Outcome::prepend_error).
        sync fn then_prepend_error[E](error: E) -> Outcome<T> => prepend_error
            where { E: IntoErrorReason + Send };
        /// Await, then [`ensure`](Outcome::ensure).
        sync fn then_ensure[P, V](predicate: P, error: V) -> Outcome<T> => ensure
            where { P: FnOnce(&T) -> bool + Send, V: Into<ValidationError> + Send };
        /// Await, then [`zip`](Outcome::zip) with an available outcome.
        sync fn then_zip[U](other: Outcome<U>) -> Outcome<(T, U)> => zip
            where { U: Send };
        /// Await, then [`recover`](Outcome::recover).
        sync fn then_recover[](fallback: T) -> Outcome<T> => recover
            where { T: Send };
        /// Await, then [`recover_with`](Outcome::recover_with).
        sync fn then_recover_with[F](f: F) -> Outcome<T> => recover_with
            where { F: FnOnce(Failure) -> T + Send };
        /// Await, then [`or_else`](Outcome::or_else).
        sync fn then_or_else[F](f: F) -> Outcome<T> => or_else
            where { F: FnOnce(Failure) -> Outcome<T> + Send };
        /// Await, then [`value_or`](Outcome::value_or).
        sync fn then_value_or[](fallback: T) -> T => value_or
            where { T: Send };
        /// Await, then [`value_or_else`](Outcome::value_or_else).
        sync fn then_value_or_else[F](f: F) -> T => value_or_else
            where { F: FnOnce(Failure) -> T + Send };
        /// Await, then [`value_or_throw`](Outcome::value_or_throw).
        sync fn then_value_or_throw[]() -> Result<T, Exception> => value_or_throw
            where {};

        /// Await, then [`bind_async`](Outcome::bind_async).
        async fn then_bind_async[U, F, Fut](f: F) -> Outcome<U> => bind_async
            where {
                T: Send,
                F: FnOnce(T) -> Fut + Send,
                Fut: Future<Output = Outcome<U>> + Send,
            };
        /// Await, then [`map_async`](Outcome::map_async).
        async fn then_map_async[U, F, Fut](f: F) -> Outcome<U> => map_async
            where {
                T: Send,
                F: FnOnce(T) -> Fut + Send,
                Fut: Future<Output = U> + Send,
            };
        /// Await, then [`try_map_async`](Outcome::try_map_async).
        async fn then_try_map_async[U, E, F, Fut](f: F) -> Outcome<U> => try_map_async
            where {
                T: Send,
                F: FnOnce(T) -> Fut + Send,
                Fut: Future<Output = Result<U, E>> + Send,
                E: IntoErrorReason,
            };
        /// Await, then [`tap_async`](Outcome::tap_async).
        async fn then_tap_async[F, Fut](f: F) -> Outcome<T> => tap_async
            where {
                T: Send,
                F: FnOnce(&T) -> Fut + Send,
                Fut: Future<Output = ()> + Send,
            };
        /// Await, then [`tap_error_async`](Outcome::tap_error_async).
        async fn then_tap_error_async[F, Fut](f: F) -> Outcome<T> => tap_error_async
            where {
                T: Send,
                F: FnOnce(&Failure) -> Fut + Send,
                Fut: Future<Output = ()> + Send,
            };
        /// Await, then [`ensure_async`](Outcome::ensure_async).
        async fn then_ensure_async[P, V, Fut](predicate: P, error: V) -> Outcome<T> => ensure_async
            where {
                T: Send,
                P: FnOnce(&T) -> Fut + Send,
                Fut: Future<Output = bool> + Send,
                V: Into<ValidationError> + Send,
            };
        /// Await, then [`recover_with_async`](Outcome::recover_with_async).
        async fn then_recover_with_async[F, Fut](f: F) -> Outcome<T> => recover_with_async
            where {
                T: Send,
                F: FnOnce(Failure) -> Fut + Send,
                Fut: Future<Output = T> + Send,
            };
        /// Await, then [`or_else_async`](Outcome::or_else_async).
        async fn then_or_else_async[F, Fut](f: F) -> Outcome<T> => or_else_async
            where {
                T: Send,
                F: FnOnce(Failure) -> Fut + Send,
                Fut: Future<Output = Outcome<T>> + Send,
            };
        /// Await, then [`map_error_async`](Outcome::map_error_async).
        async fn then_map_error_async[E, F, Fut](policy: MapErrorPolicy, f: F) -> Outcome<T> => map_error_async
            where {
                T: Send,
                F: FnOnce(&Exception) -> Fut + Send,
                Fut: Future<Output = E> + Send,
                E: Into<Exception>,
            };
    }

    /// Box this future.
    fn into_boxed<'a>(self) -> BoxOutcomeFuture<'a, T>
    where
        Self: 'a,
    {
        Box::pin(self)
    }

    /// Run this future inside `span`.
    ///
    /// Only available with the `tracing` feature.
    #[cfg(feature = "tracing")]
    fn instrument_outcome(self, span: tracing::Span) -> tracing::instrument::Instrumented<Self> {
        tracing::Instrument::instrument(self, span)
    }
}

impl<T, Fut> OutcomeFuture<T> for Fut where Fut: Future<Output = Outcome<T>> + Send {}
