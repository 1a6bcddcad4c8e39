use outcome_rail::convert::*;
use outcome_rail::Outcome;

#[test]
fn result_to_outcome_preserves_channel() {
    let ok: Result<i32, &str> = Ok(3);
    assert_eq!(result_to_outcome(ok), Outcome::Ok(3));

    let err: Result<i32, &str> = Err("fail");
    assert_eq!(result_to_outcome(err), Outcome::Err("fail"));
}

#[test]
fn outcome_to_result_preserves_channel() {
    assert_eq!(outcome_to_result(Outcome::<&str, i32>::ok(7)), Ok(7));
    assert_eq!(outcome_to_result(Outcome::<&str, i32>::error("boom")), Err("boom"));
}

#[test]
fn from_impls_round_trip() {
    let original: Result<u8, String> = Err("missing".to_string());
    let outcome: Outcome<String, u8> = original.clone().into();
    assert_eq!(outcome, Outcome::Err("missing".to_string()));

    let back: Result<u8, String> = outcome.into();
    assert_eq!(back, original);
}

#[test]
fn into_result_supports_question_mark() {
    fn sum(a: Option<i32>, b: Option<i32>) -> Result<i32, &'static str> {
        let a = Outcome::from_maybe("a missing", a).into_result()?;
        let b = Outcome::from_maybe("b missing", b).into_result()?;
        Ok(a + b)
    }

    assert_eq!(sum(Some(1), Some(2)), Ok(3));
    assert_eq!(sum(None, Some(2)), Err("a missing"));
    assert_eq!(sum(Some(1), None), Err("b missing"));
}

#[test]
fn from_result_matches_result_to_outcome() {
    let parsed = Outcome::from_result("12".parse::<u32>());
    assert_eq!(parsed.to_maybe(), Some(12));

    let failed = Outcome::from_result("x".parse::<u32>());
    assert!(failed.is_err());
}
