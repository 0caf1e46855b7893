//! Flat zipping of several outcomes.

use std::future::Future;

use crate::outcome::Outcome;

/// Combine a tuple of outcomes into one outcome of a flat value tuple.
///
/// Inputs are inspected left to right; the first failure is returned as is
/// and later inputs are ignored. Reasons are never accumulated across inputs.
///
/// # Examples
///
/// ```
/// use wellspring::{Exception, Outcome, ZipAll};
///
/// let all = (Outcome::success(1), Outcome::success("b"), Outcome::success(3.0)).zip_all();
/// assert_eq!(all.ok(), Some((1, "b", 3.0)));
///
/// let second = Exception::msg("second");
/// let failed = (
///     Outcome::success(1),
///     Outcome::<i32>::failure(second.clone()),
///     Outcome::<i32>::failure(Exception::msg("third")),
/// )
///     .zip_all();
/// assert!(failed.err().is_some_and(|e| e.ptr_eq(&second)));
/// ```
pub trait ZipAll {
    /// The flat tuple of success values.
    type Output;

    /// Combine every outcome, first failure wins.
    fn zip_all(self) -> Outcome<Self::Output>;
}

/// Await a tuple of outcome futures together, then [`ZipAll`] the results.
///
/// The futures are polled concurrently on the caller's task; failure
/// precedence is still leftmost first, regardless of completion order.
///
/// ```
/// use wellspring::{Outcome, ZipAllAsync};
///
/// # tokio_test::block_on(async {
/// let pair = (async { Outcome::success(1) }, async { Outcome::success('x') })
///     .zip_all_async()
///     .await;
/// assert_eq!(pair.ok(), Some((1, 'x')));
/// # });
/// ```
pub trait ZipAllAsync {
    /// The flat tuple of success values.
    type Output;

    /// Await every future, then combine their outcomes.
    fn zip_all_async(self) -> impl Future<Output = Outcome<Self::Output>> + Send;
}

macro_rules! impl_zip_all {
    ($zip:ident, $n:literal; $($T:ident $F:ident $v:ident),+) => {
        impl<$($T),+> ZipAll for ($(Outcome<$T>,)+) {
            type Output = ($($T,)+);

            fn zip_all(self) -> Outcome<Self::Output> {
                let ($($v,)+) = self;
                $(
                    let $v = match $v {
                        Outcome::Success(s) => s.into_value(),
                        Outcome::Failure(failure) => return Outcome::Failure(failure),
                    };
                )+
                Outcome::success(($($v,)+))
            }
        }

        impl<$($T,)+ $($F),+> ZipAllAsync for ($($F,)+)
        where
            $(
                $T: Send,
                $F: Future<Output = Outcome<$T>> + Send,
            )+
        {
            type Output = ($($T,)+);

            fn zip_all_async(self) -> impl Future<Output = Outcome<Self::Output>> + Send {
                let ($($v,)+) = self;
                async move { futures::join!($($v),+).zip_all() }
            }
        }

        #[doc = concat!("Zip ", $n, " outcomes into one flat outcome. See [`ZipAll`].")]
        #[inline]
        pub fn $zip<$($T),+>($($v: Outcome<$T>),+) -> Outcome<($($T,)+)> {
            ($($v,)+).zip_all()
        }
    };
}

impl_zip_all!(zip2, 2; T1 F1 v1, T2 F2 v2);
impl_zip_all!(zip3, 3; T1 F1 v1, T2 F2 v2, T3 F3 v3);
impl_zip_all!(zip4, 4; T1 F1 v1, T2 F2 v2, T3 F3 v3, T4 F4 v4);
impl_zip_all!(zip5, 5; T1 F1 v1, T2 F2 v2, T3 F3 v3, T4 F4 v4, T5 F5 v5);
impl_zip_all!(zip6, 6; T1 F1 v1, T2 F2 v2, T3 F3 v3, T4 F4 v4, T5 F5 v5, T6 F6 v6);
impl_zip_all!(zip7, 7; T1 F1 v1, T2 F2 v2, T3 F3 v3, T4 F4 v4, T5 F5 v5, T6 F6 v6, T7 F7 v7);
impl_zip_all!(zip8, 8; T1 F1 v1, T2 F2 v2, T3 F3 v3, T4 F4 v4, T5 F5 v5, T6 F6 v6, T7 F7 v7, T8 F8 v8);

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::exception::Exception;
    use crate::reason::{ConflictError, NotFoundError};

    #[test]
    fn test_zip2_matches_pairwise_zip() {
        let a = zip2(Outcome::success(1), Outcome::success('a'));
        let b = Outcome::success(1).zip(Outcome::success('a'));
        assert_eq!(a, b);
    }

    #[test]
    fn test_zip8_is_flat() {
        let all = zip8(
            Outcome::success(1u8),
            Outcome::success(2u16),
            Outcome::success(3u32),
            Outcome::success(4u64),
            Outcome::success('5'),
            Outcome::success("6"),
            Outcome::success(7.0),
            Outcome::success(false),
        );
        assert_eq!(all.ok(), Some((1u8, 2u16, 3u32, 4u64, '5', "6", 7.0, false)));
    }

    #[test]
    fn test_zip8_last_failure_reported() {
        let all = zip8(
            Outcome::success(1),
            Outcome::success(2),
            Outcome::success(3),
            Outcome::success(4),
            Outcome::success(5),
            Outcome::success(6),
            Outcome::success(7),
            Outcome::<i32>::failure(NotFoundError::new("eighth")),
        );
        assert_eq!(all.err().map(|e| e.message()), Some("eighth".to_string()));
        assert_eq!(all.reasons().len(), 1);
    }

    #[tokio::test]
    async fn test_zip_all_async_leftmost_failure_wins() {
        let slow_left = async {
            tokio::time::sleep(Duration::from_millis(20)).await;
            Outcome::<i32>::failure(ConflictError::new("left"))
        };
        let fast_right = async { Outcome::<i32>::failure(Exception::msg("right")) };

        let zipped = (slow_left, fast_right).zip_all_async().await;
        assert_eq!(zipped.err().map(|e| e.message()), Some("left".to_string()));
    }

    #[tokio::test]
    async fn test_zip_all_async_three() {
        let zipped = (
            async { Outcome::success(1) },
            async { Outcome::success("two") },
            async { Outcome::success(3) },
        )
            .zip_all_async()
            .await;
        assert_eq!(zipped.ok(), Some((1, "two", 3)));
    }
}
