//! Functor and monad laws, checked over a fixed set of outcomes.

use outcome_rail::ops::{chain, error, from_maybe, map, ok, to_maybe};
use outcome_rail::Outcome;

fn samples() -> Vec<Outcome<String, i64>> {
    vec![
        ok(0),
        ok(1),
        ok(-17),
        ok(i64::MAX / 4),
        error(String::new()),
        error("bad".to_string()),
    ]
}

fn half(x: i64) -> Outcome<String, i64> {
    if x % 2 == 0 {
        ok(x / 2)
    } else {
        error(format!("{x} is odd"))
    }
}

fn non_negative(x: i64) -> Outcome<String, i64> {
    if x >= 0 {
        ok(x)
    } else {
        error("negative".to_string())
    }
}

#[test]
fn map_identity() {
    for r in samples() {
        assert_eq!(map(|x| x, r.clone()), r);
    }
}

#[test]
fn map_composition() {
    let f = |x: i64| x.wrapping_mul(3);
    let g = |x: i64| x.wrapping_sub(8);
    for r in samples() {
        assert_eq!(map(g, map(f, r.clone())), map(|x| g(f(x)), r));
    }
}

#[test]
fn chain_right_identity() {
    for r in samples() {
        assert_eq!(chain(ok, r.clone()), r);
    }
}

#[test]
fn chain_left_identity() {
    for v in [0_i64, 1, 2, -4, 7] {
        assert_eq!(chain(half, ok(v)), half(v));
    }
}

#[test]
fn chain_associativity() {
    for r in samples() {
        let nested = chain(|x| chain(non_negative, half(x)), r.clone());
        let sequential = chain(non_negative, chain(half, r));
        assert_eq!(nested, sequential);
    }
}

#[test]
fn exactly_one_predicate_holds() {
    for r in samples() {
        assert_ne!(r.is_ok(), r.is_err());
    }
}

#[test]
fn maybe_round_trip_reconstructs_ok() {
    for v in [0_i64, 1, -1, i64::MIN, i64::MAX] {
        let original: Outcome<&str, i64> = ok(v);
        assert_eq!(from_maybe("unused", to_maybe(original)), original);
    }
}
