#![cfg(feature = "try_trait")]
#![feature(try_trait_v2)]

use wellspring::{Exception, NotFoundError, Outcome, ValidationError};

#[test]
fn test_outcome_question_mark() {
    fn lookup(id: u32) -> Outcome<&'static str> {
        match id {
            1 => Outcome::success("ada"),
            _ => Outcome::failure(NotFoundError::new("unknown id")),
        }
    }

    fn greet(id: u32) -> Outcome<String> {
        let name = lookup(id)?;
        Outcome::success(format!("hello {}", name))
    }

    assert_eq!(greet(1).ok().as_deref(), Some("hello ada"));
    let missing = greet(2);
    assert_eq!(missing.reasons()[0].code(), "NOT_FOUND");
}

#[test]
fn test_question_mark_keeps_failure_intact() {
    fn inner() -> Outcome<i32> {
        Outcome::<i32>::failure(Exception::msg("io"))
            .or_else(|f| Outcome::Failure(f.with_error(ValidationError::new("bad"))))
            .with_metadata("step", "inner")
    }

    fn outer() -> Outcome<()> {
        let _ = inner()?;
        Outcome::success(())
    }

    let failed = outer();
    assert_eq!(failed.reasons().len(), 2);
    assert!(failed.metadata().contains_key("step"));
}

#[test]
fn test_mixing_result_and_outcome() {
    fn parse_positive(raw: &str) -> Outcome<u32> {
        let n: i64 = raw.parse::<i64>()?;
        if n > 0 {
            Outcome::success(n as u32)
        } else {
            Outcome::failure(ValidationError::new("must be positive"))
        }
    }

    assert_eq!(parse_positive("12").ok(), Some(12));
    assert!(parse_positive("-3").is_failure());
    assert_eq!(parse_positive("abc").reasons()[0].code(), "EXCEPTION");
}
