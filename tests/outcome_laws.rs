//! Property-based tests for the outcome combinator laws

use proptest::prelude::*;
use wellspring::{
    ConflictError, Exception, NotFoundError, Outcome, Reason, ValidationError, ZipAll,
};

fn outcome_strategy() -> impl Strategy<Value = Outcome<i32>> {
    prop_oneof![
        any::<i32>().prop_map(Outcome::success),
        ("[a-z]{1,8}", 0..3u8).prop_map(|(message, kind)| -> Outcome<i32> {
            match kind {
                0 => Outcome::failure(Exception::msg(message)),
                1 => Outcome::failure(NotFoundError::new(message)),
                _ => Outcome::failure(ConflictError::new(message)),
            }
        }),
    ]
}

fn half(x: i32) -> Outcome<i32> {
    if x % 2 == 0 {
        Outcome::success(x / 2)
    } else {
        Outcome::failure(ValidationError::new("odd"))
    }
}

// Fresh failures synthesize a new primary exception each time, so outcomes
// built independently are compared by value, reasons and message.
fn shape(outcome: &Outcome<i32>) -> (Option<i32>, Vec<Reason>, Option<String>) {
    (
        outcome.value().copied(),
        outcome.reasons().to_vec(),
        outcome.err().map(Exception::message),
    )
}

proptest! {
    #[test]
    fn prop_functor_identity(outcome in outcome_strategy()) {
        prop_assert_eq!(outcome.clone().map(|x| x), outcome);
    }

    #[test]
    fn prop_functor_composition(outcome in outcome_strategy()) {
        let f = |x: i32| x.wrapping_mul(3);
        let g = |x: i32| x.wrapping_sub(7);
        prop_assert_eq!(outcome.clone().map(f).map(g), outcome.map(|x| g(f(x))));
    }

    #[test]
    fn prop_bind_left_identity(x in any::<i32>()) {
        prop_assert_eq!(shape(&Outcome::success(x).bind(half)), shape(&half(x)));
    }

    #[test]
    fn prop_bind_right_identity(outcome in outcome_strategy()) {
        prop_assert_eq!(outcome.clone().bind(Outcome::success), outcome);
    }

    #[test]
    fn prop_failure_short_circuits(outcome in outcome_strategy()) {
        prop_assume!(outcome.is_failure());
        let mut calls = 0;
        let chained = outcome.clone().bind(|x| {
            calls += 1;
            half(x)
        });
        prop_assert_eq!(calls, 0);
        prop_assert_eq!(chained.reasons(), outcome.reasons());
        prop_assert!(chained.err().zip(outcome.err()).is_some_and(|(a, b)| a.ptr_eq(b)));
    }

    #[test]
    fn prop_extraction_agrees(outcome in outcome_strategy()) {
        let success = outcome.is_success();
        prop_assert_eq!(success, outcome.err().is_none());
        prop_assert_eq!(success, outcome.clone().into_result().is_ok());
        prop_assert_eq!(success, outcome.ok().is_some());
    }

    #[test]
    fn prop_zip_first_failure_wins(a in outcome_strategy(), b in outcome_strategy()) {
        let zipped = (a.clone(), b.clone()).zip_all();
        match (a.err(), b.err()) {
            (Some(first), _) => prop_assert!(zipped.err().is_some_and(|e| e.ptr_eq(first))),
            (None, Some(second)) => prop_assert!(zipped.err().is_some_and(|e| e.ptr_eq(second))),
            (None, None) => prop_assert!(zipped.is_success()),
        }
    }

    #[test]
    fn prop_tap_never_changes_outcome(outcome in outcome_strategy()) {
        let tapped = outcome.clone().tap(|_| {}).tap_error(|_| {});
        prop_assert_eq!(tapped, outcome);
    }
}
