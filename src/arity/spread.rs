//! Spread-argument combinators for outcomes carrying zero or several values.

use std::future::Future;

use crate::outcome::{Failure, Outcome};
use crate::reason::{IntoErrorReason, ValidationError};

// One trait per arity. Every method destructures the value tuple and calls
// the whole-value combinator of the same family, so semantics never differ
// between arities. Arity 0 destructures `()` and calls closures with no
// arguments. The companion future trait awaits the upstream outcome and then
// runs the synchronous spread form.
macro_rules! impl_spread {
    ($name:ident, $future:ident, $arity:literal; $($T:ident $v:ident),*) => {
        #[doc = concat!("Spread-argument combinators for outcomes carrying ", $arity, " values.")]
        ///
        /// Each method takes a closure over the separate values instead of the
        /// value tuple and otherwise behaves exactly like the whole-value
        /// combinator it is named after.
        pub trait $name<$($T),*>: Sized {
            /// Number of values carried on the success path.
            const ARITY: usize;

            /// Spread form of [`Outcome::map`].
            fn spread_map<U, F>(self, f: F) -> Outcome<U>
            where
                F: FnOnce($($T),*) -> U;

            /// Spread form of [`Outcome::bind`].
            fn spread_bind<U, F>(self, f: F) -> Outcome<U>
            where
                F: FnOnce($($T),*) -> Outcome<U>;

            /// Spread form of [`Outcome::try_map`].
            fn spread_try_map<U, E, F>(self, f: F) -> Outcome<U>
            where
                F: FnOnce($($T),*) -> Result<U, E>,
                E: IntoErrorReason;

            /// Spread form of [`Outcome::tap`].
            fn spread_tap<F>(self, f: F) -> Self
            where
                F: FnOnce($(&$T),*);

            /// Spread form of [`Outcome::ensure`].
            fn spread_ensure<P>(self, predicate: P, error: impl Into<ValidationError>) -> Self
            where
                P: FnOnce($(&$T),*) -> bool;

            /// Spread form of [`Outcome::fold`].
            fn spread_fold<R, S, G>(self, on_success: S, on_failure: G) -> R
            where
                S: FnOnce($($T),*) -> R,
                G: FnOnce(Failure) -> R;

            /// Spread form of [`Outcome::bind_async`].
            fn spread_bind_async<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U>> + Send
            where
                $($T: Send,)*
                F: FnOnce($($T),*) -> Fut + Send,
                Fut: Future<Output = Outcome<U>> + Send;

            /// Spread form of [`Outcome::map_async`].
            fn spread_map_async<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U>> + Send
            where
                $($T: Send,)*
                F: FnOnce($($T),*) -> Fut + Send,
                Fut: Future<Output = U> + Send;
        }

        impl<$($T),*> $name<$($T),*> for Outcome<($($T,)*)> {
            const ARITY: usize = $arity;

            #[inline]
            fn spread_map<U, F>(self, f: F) -> Outcome<U>
            where
                F: FnOnce($($T),*) -> U,
            {
                self.map(|($($v,)*)| f($($v),*))
            }

            #[inline]
            fn spread_bind<U, F>(self, f: F) -> Outcome<U>
            where
                F: FnOnce($($T),*) -> Outcome<U>,
            {
                self.bind(|($($v,)*)| f($($v),*))
            }

            #[inline]
            fn spread_try_map<U, E, F>(self, f: F) -> Outcome<U>
            where
                F: FnOnce($($T),*) -> Result<U, E>,
                E: IntoErrorReason,
            {
                self.try_map(|($($v,)*)| f($($v),*))
            }

            #[inline]
            fn spread_tap<F>(self, f: F) -> Self
            where
                F: FnOnce($(&$T),*),
            {
                self.tap(|($($v,)*)| f($($v),*))
            }

            #[inline]
            fn spread_ensure<P>(self, predicate: P, error: impl Into<ValidationError>) -> Self
            where
                P: FnOnce($(&$T),*) -> bool,
            {
                self.ensure(|($($v,)*)| predicate($($v),*), error)
            }

            #[inline]
            fn spread_fold<R, S, G>(self, on_success: S, on_failure: G) -> R
            where
                S: FnOnce($($T),*) -> R,
                G: FnOnce(Failure) -> R,
            {
                self.fold(|($($v,)*)| on_success($($v),*), on_failure)
            }

            fn spread_bind_async<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U>> + Send
            where
                $($T: Send,)*
                F: FnOnce($($T),*) -> Fut + Send,
                Fut: Future<Output = Outcome<U>> + Send,
            {
                self.bind_async(move |($($v,)*)| f($($v),*))
            }

            fn spread_map_async<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U>> + Send
            where
                $($T: Send,)*
                F: FnOnce($($T),*) -> Fut + Send,
                Fut: Future<Output = U> + Send,
            {
                self.map_async(move |($($v,)*)| f($($v),*))
            }
        }

        #[doc = concat!("Spread forms for futures resolving to an outcome of ", $arity, " values.")]
        ///
        /// The spread counterpart of [`OutcomeFuture`](crate::OutcomeFuture):
        /// each method awaits the upstream future once, then applies the
        #[doc = concat!("[`", stringify!($name), "`] method of the same name without the `then_` prefix.")]
        pub trait $future<$($T),*>: Future<Output = Outcome<($($T,)*)>> + Send + Sized {
            /// Await, then spread-map.
            fn then_spread_map<U, F>(self, f: F) -> impl Future<Output = Outcome<U>> + Send
            where
                $($T: Send,)*
                F: FnOnce($($T),*) -> U + Send,
            {
                async move { self.await.spread_map(f) }
            }

            /// Await, then spread-bind.
            fn then_spread_bind<U, F>(self, f: F) -> impl Future<Output = Outcome<U>> + Send
            where
                $($T: Send,)*
                F: FnOnce($($T),*) -> Outcome<U> + Send,
            {
                async move { self.await.spread_bind(f) }
            }
        }

        impl<Fut, $($T),*> $future<$($T),*> for Fut where Fut: Future<Output = Outcome<($($T,)*)>> + Send {}
    };
}

impl_spread!(Spread0, SpreadFuture0, 0;);
impl_spread!(Spread2, SpreadFuture2, 2; T1 v1, T2 v2);
impl_spread!(Spread3, SpreadFuture3, 3; T1 v1, T2 v2, T3 v3);
impl_spread!(Spread4, SpreadFuture4, 4; T1 v1, T2 v2, T3 v3, T4 v4);
impl_spread!(Spread5, SpreadFuture5, 5; T1 v1, T2 v2, T3 v3, T4 v4, T5 v5);
impl_spread!(Spread6, SpreadFuture6, 6; T1 v1, T2 v2, T3 v3, T4 v4, T5 v5, T6 v6);
impl_spread!(Spread7, SpreadFuture7, 7; T1 v1, T2 v2, T3 v3, T4 v4, T5 v5, T6 v6, T7 v7);
impl_spread!(Spread8, SpreadFuture8, 8; T1 v1, T2 v2, T3 v3, T4 v4, T5 v5, T6 v6, T7 v7, T8 v8);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exception::Exception;

    #[test]
    fn test_arity_constants() {
        assert_eq!(<Outcome<()> as Spread0>::ARITY, 0);
        assert_eq!(<Outcome<(u8, u8)> as Spread2<u8, u8>>::ARITY, 2);
        assert_eq!(
            <Outcome<(u8, u8, u8, u8, u8, u8, u8, u8)> as Spread8<u8, u8, u8, u8, u8, u8, u8, u8>>::ARITY,
            8
        );
    }

    #[test]
    fn test_arity_zero_closures_take_no_arguments() {
        let mut ticks = 0;
        let mapped = Outcome::success(())
            .spread_tap(|| ticks += 1)
            .spread_ensure(|| true, "unreachable")
            .spread_map(|| "made");

        assert_eq!(mapped.ok(), Some("made"));
        assert_eq!(ticks, 1);
    }

    #[test]
    fn test_arity_zero_failure_short_circuits() {
        let result = Outcome::<()>::failure(Exception::msg("nothing"))
            .spread_bind(|| Outcome::success(1));
        assert_eq!(result.err().map(|e| e.message()), Some("nothing".to_string()));
    }

    #[test]
    fn test_arity_two_hello_scenario() {
        let greeting = Outcome::success(24)
            .bind(|x| Outcome::success(("fx", x)))
            .spread_bind(|order, user| Outcome::success(format!("Hello {} from {}", user, order)));

        assert_eq!(greeting.ok().as_deref(), Some("Hello 24 from fx"));
    }

    #[test]
    fn test_arity_two_ensure_and_fold() {
        let range = Outcome::success((10, 2)).spread_ensure(|lo, hi| lo <= hi, "inverted range");
        let text = range.spread_fold(|lo, hi| format!("{}..{}", lo, hi), |f| f.message());
        assert_eq!(text, "inverted range");
    }

    #[test]
    fn test_arity_eight_spreads_in_order() {
        let outcome = Outcome::success((1, 2, 3, 4, 5, 6, 7, 8));
        let digits = outcome
            .clone()
            .spread_map(|a, b, c, d, e, f, g, h| format!("{}{}{}{}{}{}{}{}", a, b, c, d, e, f, g, h));
        assert_eq!(digits.ok().as_deref(), Some("12345678"));

        let sum = outcome.spread_try_map(|a, b, c, d, e, f, g, h| {
            let total: i32 = [a, b, c, d, e, f, g, h].iter().sum();
            if total > 30 {
                Ok(total)
            } else {
                Err(Exception::msg("too small"))
            }
        });
        assert_eq!(sum.ok(), Some(36));
    }

    #[test]
    fn test_arity_eight_tap_sees_references() {
        let mut seen = Vec::new();
        let _ = Outcome::success(('a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'))
            .spread_tap(|a, _, _, _, _, _, _, h| seen.extend([*a, *h]));
        assert_eq!(seen, vec!['a', 'h']);
    }

    #[tokio::test]
    async fn test_then_spread_forms_await_upstream() {
        let mapped = async { Outcome::success(("user", 7)) }
            .then_spread_map(|name, id| format!("{}-{}", name, id))
            .await;
        assert_eq!(mapped.ok().as_deref(), Some("user-7"));

        let bound = async { Outcome::success(()) }
            .then_spread_bind(|| Outcome::success(5))
            .await;
        assert_eq!(bound.ok(), Some(5));
    }

    #[tokio::test]
    async fn test_then_spread_skips_failed_upstream() {
        let mut called = false;
        let result = async { Outcome::<(u8, u8, u8)>::failure(Exception::msg("down")) }
            .then_spread_map(|a, b, c| {
                called = true;
                a + b + c
            })
            .await;
        assert!(!called);
        assert_eq!(result.err().map(|e| e.message()), Some("down".to_string()));
    }

    #[tokio::test]
    async fn test_spread_async_forms() {
        let joined = Outcome::success(("user", 7))
            .spread_map_async(|name, id| async move { format!("{}-{}", name, id) })
            .await;
        assert_eq!(joined.ok().as_deref(), Some("user-7"));

        let bound = Outcome::success(())
            .spread_bind_async(|| async { Outcome::success(5) })
            .await;
        assert_eq!(bound.ok(), Some(5));
    }
}
