//! End-to-end scenarios for the outcome algebra

use std::cell::Cell;

use wellspring::{
    assert_failure, assert_failure_code, assert_success, AggregateError, ConflictError, CopyPolicy,
    DomainError, Exception, MapErrorPolicy, NotFoundError, Outcome, Reason, Spread2,
    SuccessReason, ValidationError,
};

#[derive(Debug, Clone, PartialEq)]
struct Order {
    id: u32,
    total_cents: u64,
}

fn load_order(id: u32) -> Outcome<Order> {
    match id {
        1 => Outcome::success(Order {
            id,
            total_cents: 1_250,
        })
        .with_metadata("source", "db"),
        2 => Outcome::success(Order { id, total_cents: 0 }),
        _ => Outcome::failure(NotFoundError::new(format!("order {} not found", id))),
    }
}

fn charge(order: &Order) -> Outcome<String> {
    if order.total_cents > 100_000 {
        Outcome::failure(DomainError::new("LIMIT", "charge exceeds limit"))
    } else {
        Outcome::success(format!("ch_{}", order.id))
    }
}

#[test]
fn test_checkout_pipeline_success() {
    let receipt = load_order(1)
        .ensure(|o| o.total_cents > 0, "empty order")
        .bind(|order| charge(&order).map(|charge_id| (order, charge_id)))
        .spread_map(|order, charge_id| format!("{} paid {}", charge_id, order.total_cents));

    assert_success!(receipt, "ch_1 paid 1250".to_string());
}

#[test]
fn test_checkout_pipeline_guard_failure_keeps_metadata() {
    let receipt = load_order(2)
        .with_metadata("request_id", "r-1")
        .ensure(|o| o.total_cents > 0, ValidationError::new("empty order"))
        .bind(|order| charge(&order));

    assert_failure_code!(receipt.clone(), "VALIDATION");
    assert_eq!(receipt.err().map(|e| e.message()), Some("empty order".to_string()));
    assert!(receipt.metadata().contains_key("request_id"));
}

#[test]
fn test_hello_from_fx() {
    let greeting = Outcome::success(24)
        .bind(|x| Outcome::success(("fx", x)))
        .spread_bind(|order, user| Outcome::success(format!("Hello {} from {}", user, order)));

    assert_eq!(greeting.ok().as_deref(), Some("Hello 24 from fx"));
}

#[test]
fn test_failure_skips_map_closure() {
    let invoked = Cell::new(false);
    let mapped = Outcome::<i32>::failure(Exception::msg("boom")).map(|x| {
        invoked.set(true);
        x + 1
    });

    assert_eq!(mapped.err().map(|e| e.message()), Some("boom".to_string()));
    assert!(!invoked.get());
}

#[test]
fn test_failure_from_exception_wraps_same_instance() {
    let ex = Exception::msg("disk full");
    let failed = Outcome::<()>::failure(ex.clone());

    assert_eq!(failed.reasons().len(), 1);
    assert!(matches!(failed.reasons()[0], Reason::Exceptional(_)));
    assert!(failed.err().is_some_and(|e| e.ptr_eq(&ex)));
}

#[test]
fn test_failure_from_domain_error_is_not_duplicated() {
    let conflict = ConflictError::new("email taken");
    let failed = Outcome::<()>::failure(conflict.clone());

    assert_eq!(failed.reasons(), &[Reason::Conflict(conflict)]);
    assert_eq!(failed.err().map(|e| e.message()), Some("email taken".to_string()));
}

#[test]
fn test_extraction_agrees() {
    let outcomes = vec![
        Outcome::success(1),
        Outcome::failure(NotFoundError::new("gone")),
        Outcome::failure(Exception::msg("boom")),
    ];

    for outcome in outcomes {
        let success = outcome.is_success();
        assert_eq!(success, !outcome.is_failure());
        assert_eq!(success, outcome.err().is_none());
        assert_eq!(success, outcome.value().is_some());
        assert_eq!(success, outcome.clone().into_result().is_ok());
        assert_eq!(success, outcome.ok().is_some());
    }
}

#[test]
fn test_try_map_keeps_side_effects_and_wraps_error() {
    let audit = Cell::new(0);
    let ex = Exception::msg("parse failure");
    let parsed = Outcome::success("12x").try_map(|raw| {
        audit.set(audit.get() + 1);
        raw.parse::<i32>().map_err(|_| ex.clone())
    });

    assert_eq!(audit.get(), 1);
    assert!(parsed.err().is_some_and(|e| e.ptr_eq(&ex)));
    assert_eq!(parsed.reasons().len(), 1);
}

#[test]
fn test_zip_reports_first_failing_input() {
    let second = Exception::msg("second");
    let zipped = Outcome::success(1)
        .zip(Outcome::<i32>::failure(second.clone()))
        .zip(Outcome::<i32>::failure(Exception::msg("third")));

    assert!(zipped.err().is_some_and(|e| e.ptr_eq(&second)));
    assert_eq!(zipped.reasons().len(), 1);
}

#[test]
fn test_map_errors_keeps_two_reasons() {
    let failed = Outcome::<u32>::failure(Exception::msg("timeout"))
        .or_else(|f| Outcome::Failure(f.with_error(ConflictError::new("stale"))));

    let merged = failed.map_errors(|errors| Exception::aggregate(errors));
    assert_eq!(merged.reasons().len(), 2);
    assert!(merged
        .err()
        .and_then(|e| e.downcast_ref::<AggregateError>())
        .is_some_and(|agg| agg.len() == 2));
}

#[test]
fn test_bind_with_discard_drops_history() {
    let failed = Outcome::<u32>::failure(Exception::msg("primary"))
        .with_metadata("attempt", 3)
        .or_else(|f| Outcome::Failure(f.with_error(NotFoundError::new("cache miss"))));

    let preserved = failed.clone().bind(|x| Outcome::success(x + 1));
    assert_eq!(preserved.reasons().len(), 2);
    assert!(preserved.metadata().contains_key("attempt"));

    let discarded = failed.bind_with(CopyPolicy::Discard, |x| Outcome::success(x + 1));
    assert_eq!(discarded.reasons().len(), 1);
    assert!(discarded.metadata().is_empty());
    assert_eq!(discarded.err().map(|e| e.message()), Some("primary".to_string()));
}

#[test]
fn test_map_error_policies() {
    let failed = Outcome::<()>::failure(ValidationError::new("bad input"))
        .with_metadata("field", "email");

    let short = failed
        .clone()
        .map_error(MapErrorPolicy::ShortCircuit, |_| Exception::msg("rejected"));
    assert_eq!(short.reasons().len(), 1);
    assert!(short.metadata().is_empty());

    let accumulated = failed.map_error(MapErrorPolicy::Accumulate, |_| Exception::msg("rejected"));
    assert_eq!(accumulated.reasons().len(), 1);
    assert_eq!(accumulated.reasons()[0].code(), "VALIDATION");
    assert_eq!(accumulated.err().map(|e| e.message()), Some("rejected".to_string()));
    assert!(accumulated.metadata().contains_key("field"));
}

#[test]
fn test_filter_errors_clears_into_success() {
    let checked = Outcome::from_validation(
        7,
        vec![
            ValidationError::new("soft warning").with_code("SOFT"),
            ValidationError::new("another").with_code("SOFT"),
        ],
    )
    .with_reason(SuccessReason::new("linted"))
    .with_metadata("linter", "v2");

    let cleared = checked.filter_errors(|r| r.code() != "SOFT", || 0);
    assert_eq!(cleared.value(), Some(&0));
    assert_eq!(cleared.reasons().len(), 1);
    assert!(cleared.metadata().contains_key("linter"));
}

#[test]
fn test_filter_errors_re_resolves_primary() {
    let failed = Outcome::<i32>::failure(NotFoundError::new("first"))
        .or_else(|f| Outcome::Failure(f.with_error(ConflictError::new("second"))));

    let filtered = failed.filter_errors(|r| matches!(r, Reason::Conflict(_)), || 0);
    assert_failure!(filtered.clone());
    assert_eq!(filtered.err().map(|e| e.message()), Some("second".to_string()));
}

#[test]
fn test_appended_exception_takes_over_primary() {
    let io = Exception::msg("connection reset");
    let failed = Outcome::<()>::failure(ConflictError::new("dup"))
        .or_else(|f| Outcome::Failure(f.with_error(io.clone())));
    assert!(failed.err().is_some_and(|e| e.ptr_eq(&io)));

    let unchanged = failed.clone().filter_errors(|_| true, || ());
    assert!(unchanged.err().is_some_and(|e| e.ptr_eq(&io)));

    let wrapped = failed.map_error(MapErrorPolicy::Accumulate, |e| {
        Exception::msg(format!("save failed: {}", e))
    });
    let messages: Vec<String> = wrapped.errors().iter().map(|e| e.message()).collect();
    assert_eq!(messages, vec!["save failed: connection reset", "dup"]);
}

#[test]
fn test_match_error_finds_kind() {
    let failed = Outcome::<()>::failure(Exception::msg("io"))
        .or_else(|f| Outcome::Failure(f.with_error(ConflictError::new("version mismatch"))));

    let status = failed.match_error::<ConflictError, _>(|_| 409, || 500);
    assert_eq!(status, 409);
    let status = failed.match_error::<NotFoundError, _>(|_| 404, || 500);
    assert_eq!(status, 500);
}

#[test]
fn test_value_or_throw_aggregates() {
    let failed = Outcome::<u8>::failure(NotFoundError::new("a"))
        .or_else(|f| Outcome::Failure(f.with_error(ConflictError::new("b"))));

    let err = failed.value_or_throw().unwrap_err();
    assert_eq!(err.message(), "2 errors occurred: a; b");

    assert_eq!(Outcome::success(9u8).value_or_throw().ok(), Some(9));
}

#[test]
fn test_prepend_error_becomes_primary() {
    let failed = Outcome::<()>::failure(Exception::msg("socket closed"))
        .prepend_error(DomainError::new("UPSTREAM", "payment gateway unavailable"));

    assert_eq!(failed.reasons().len(), 2);
    assert_eq!(failed.reasons()[0].code(), "UPSTREAM");
    assert_eq!(
        failed.err().map(|e| e.message()),
        Some("payment gateway unavailable".to_string())
    );
}

#[test]
fn test_recovery_family() {
    let missing = load_order(9);
    assert_eq!(missing.clone().map(|o| o.id).value_or(0), 0);
    assert_eq!(
        missing.clone().map(|o| o.id).value_or_else(|f| f.reasons().len() as u32),
        1
    );

    let fallback = missing.recover_with(|_| Order {
        id: 0,
        total_cents: 0,
    });
    assert_eq!(fallback.ok().map(|o| o.id), Some(0));
}

#[test]
fn test_ensure_some_and_not_empty() {
    let name = Outcome::success(Some(String::from("ada")))
        .ensure_some("name required")
        .ensure_not_empty("name must not be blank");
    assert_success!(name, "ada".to_string());

    let blank = Outcome::success(Some(String::new()))
        .ensure_some("name required")
        .ensure_not_empty("name must not be blank");
    assert_eq!(
        blank.err().map(|e| e.message()),
        Some("name must not be blank".to_string())
    );
}

#[test]
fn test_from_result_and_question_mark_interop() {
    fn parse(raw: &str) -> Result<i64, Exception> {
        let n: i64 = raw.parse().map_err(Exception::new)?;
        Outcome::success(n).ensure(|n| *n > 0, "must be positive").into_result()
    }

    assert_eq!(parse("5").ok(), Some(5));
    assert_eq!(parse("-5").unwrap_err().message(), "must be positive");
    assert!(Outcome::from(parse("x")).is_failure());
}
