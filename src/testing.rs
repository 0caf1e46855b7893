//! Testing utilities for outcomes
//!
//! Assertion macros for unit tests and, with the `proptest` feature, an
//! [`Arbitrary`](proptest::arbitrary::Arbitrary) implementation for
//! [`Outcome`] so algebraic laws can be checked over generated inputs.
//!
//! # Examples
//!
//! ```rust
//! use wellspring::{assert_failure, assert_failure_code, assert_success, NotFoundError, Outcome};
//!
//! let found = Outcome::success(42);
//! assert_success!(found, 42);
//!
//! let missing = Outcome::<i32>::failure(NotFoundError::new("no row"));
//! assert_failure!(missing.clone());
//! assert_failure_code!(missing, "NOT_FOUND");
//! ```

#[cfg(feature = "proptest")]
use crate::Outcome;

/// Assert that an outcome succeeded, optionally with an expected value.
///
/// This macro will panic if the outcome is a `Failure`.
///
/// # Example
///
/// ```rust
/// use wellspring::{assert_success, Outcome};
///
/// assert_success!(Outcome::success(()));
/// assert_success!(Outcome::success((1, "a")), (1, "a"));
/// ```
#[macro_export]
macro_rules! assert_success {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Success(_) => {}
            $crate::Outcome::Failure(f) => {
                panic!("Expected Success, got Failure: {:?}", f);
            }
        }
    };
    ($outcome:expr, $expected:expr) => {
        match $outcome {
            $crate::Outcome::Success(s) => {
                assert_eq!(s.into_value(), $expected);
            }
            $crate::Outcome::Failure(f) => {
                panic!("Expected Success({:?}), got Failure: {:?}", $expected, f);
            }
        }
    };
}

/// Assert that an outcome failed.
///
/// This macro will panic if the outcome is a `Success`.
///
/// # Example
///
/// ```rust
/// use wellspring::{assert_failure, Exception, Outcome};
///
/// assert_failure!(Outcome::<()>::failure(Exception::msg("boom")));
/// ```
#[macro_export]
macro_rules! assert_failure {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Failure(_) => {}
            $crate::Outcome::Success(s) => {
                panic!("Expected Failure, got Success: {:?}", s.value());
            }
        }
    };
}

/// Assert that an outcome failed with a reason carrying `code`.
///
/// This macro will panic if the outcome is a `Success` or if no reason has
/// the expected code.
///
/// # Example
///
/// ```rust
/// use wellspring::{assert_failure_code, ConflictError, Outcome};
///
/// let dup = Outcome::<()>::failure(ConflictError::new("email taken"));
/// assert_failure_code!(dup, "CONFLICT");
/// ```
#[macro_export]
macro_rules! assert_failure_code {
    ($outcome:expr, $code:expr) => {
        match $outcome {
            $crate::Outcome::Failure(f) => {
                let codes: Vec<&str> = f.reasons().iter().map(|r| r.code()).collect();
                assert!(
                    codes.contains(&$code),
                    "Expected a reason with code {:?}, got {:?}",
                    $code,
                    codes
                );
            }
            $crate::Outcome::Success(s) => {
                panic!(
                    "Expected Failure with code {:?}, got Success: {:?}",
                    $code,
                    s.value()
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl<T> Arbitrary for Outcome<T>
where
    T: Arbitrary + 'static,
{
    type Parameters = T::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        use crate::reason::{ConflictError, NotFoundError, ValidationError};
        use crate::Exception;

        let failure = ("[a-z ]{1,12}", 0..4u8).prop_map(|(message, kind)| -> Outcome<T> {
            match kind {
                0 => Outcome::failure(Exception::msg(message)),
                1 => Outcome::failure(NotFoundError::new(message)),
                2 => Outcome::failure(ConflictError::new(message)),
                _ => Outcome::failure(ValidationError::new(message)),
            }
        });

        prop_oneof![any_with::<T>(args).prop_map(Outcome::success), failure].boxed()
    }
}
