//! Free-function form of every [`Outcome`] operation.
//!
//! Each function performs one exhaustive `match` over the two variants. The
//! methods on [`Outcome`] delegate here, so `ops::map(f, r)` and `r.map(f)`
//! are the same code path.
//!
//! Argument order follows the data-last convention: the function comes first
//! and the outcome it is applied to comes last, which reads naturally when
//! partially applying a combinator in a closure.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::ops::{chain, map, ok, recover};
//! use outcome_rail::Outcome;
//!
//! let parsed: Outcome<&str, i32> = chain(
//!     |s: &str| s.parse::<i32>().map_err(|_| "not a number").into(),
//!     ok("41"),
//! );
//! let bumped = map(|n| n + 1, parsed);
//! assert_eq!(recover(|_| 0, bumped), Outcome::Ok(42));
//! ```

use crate::outcome::core::Outcome;

/// Wraps `value` in the success channel.
///
/// # Examples
///
/// ```
/// use outcome_rail::ops::ok;
/// use outcome_rail::Outcome;
///
/// let r: Outcome<&str, i32> = ok(5);
/// assert_eq!(r, Outcome::Ok(5));
/// ```
#[inline]
pub fn ok<X, A>(value: A) -> Outcome<X, A> {
    Outcome::Ok(value)
}

/// Wraps `err` in the error channel.
///
/// # Examples
///
/// ```
/// use outcome_rail::ops::error;
/// use outcome_rail::Outcome;
///
/// let r: Outcome<&str, i32> = error("bad");
/// assert_eq!(r, Outcome::Err("bad"));
/// ```
#[inline]
pub fn error<X, A>(err: X) -> Outcome<X, A> {
    Outcome::Err(err)
}

/// Builds an outcome from an optional value, using `err` when it is absent.
///
/// # Arguments
///
/// * `err` - Error stored when `maybe` is `None`
/// * `maybe` - The optional success value
///
/// # Examples
///
/// ```
/// use outcome_rail::ops::from_maybe;
/// use outcome_rail::Outcome;
///
/// assert_eq!(from_maybe("Oops", Some(3)), Outcome::Ok(3));
/// assert_eq!(from_maybe("Oops", None::<i32>), Outcome::Err("Oops"));
/// ```
#[inline]
pub fn from_maybe<X, A>(err: X, maybe: Option<A>) -> Outcome<X, A> {
    match maybe {
        Some(value) => Outcome::Ok(value),
        None => Outcome::Err(err),
    }
}

/// Like [`from_maybe`], but only builds the error when `maybe` is `None`.
///
/// # Examples
///
/// ```
/// use outcome_rail::ops::from_maybe_with;
/// use outcome_rail::Outcome;
///
/// let missing: Outcome<String, u8> = from_maybe_with(|| "missing port".to_string(), None);
/// assert_eq!(missing, Outcome::Err("missing port".to_string()));
/// ```
#[inline]
pub fn from_maybe_with<X, A, F>(err: F, maybe: Option<A>) -> Outcome<X, A>
where
    F: FnOnce() -> X,
{
    match maybe {
        Some(value) => Outcome::Ok(value),
        None => Outcome::Err(err()),
    }
}

/// Returns `true` if `result` is on the success channel.
#[inline]
pub fn is_ok<X, A>(result: &Outcome<X, A>) -> bool {
    match result {
        Outcome::Ok(_) => true,
        Outcome::Err(_) => false,
    }
}

/// Returns `true` if `result` is on the error channel.
#[inline]
pub fn is_err<X, A>(result: &Outcome<X, A>) -> bool {
    !is_ok(result)
}

/// Maps the success value with `f`, passing an error through untouched.
///
/// # Arguments
///
/// * `f` - Function applied to the success value
/// * `result` - The outcome to transform
///
/// # Examples
///
/// ```
/// use outcome_rail::ops::{error, map, ok};
/// use outcome_rail::Outcome;
///
/// assert_eq!(map(|x: i32| x + 1, ok::<&str, _>(5)), Outcome::Ok(6));
/// assert_eq!(map(|x: i32| x + 1, error::<_, i32>("bad")), Outcome::Err("bad"));
/// ```
#[inline]
pub fn map<X, A, B, F>(f: F, result: Outcome<X, A>) -> Outcome<X, B>
where
    F: FnOnce(A) -> B,
{
    match result {
        Outcome::Ok(value) => Outcome::Ok(f(value)),
        Outcome::Err(err) => Outcome::Err(err),
    }
}

/// Maps the error with `f`, passing a success value through untouched.
///
/// # Arguments
///
/// * `f` - Function applied to the error value
/// * `result` - The outcome to transform
///
/// # Examples
///
/// ```
/// use outcome_rail::ops::{error, format};
/// use outcome_rail::Outcome;
///
/// let r: Outcome<u16, ()> = error(404);
/// assert_eq!(format(|code| code + 96, r), Outcome::Err(500));
/// ```
#[inline]
pub fn format<X, Y, A, F>(f: F, result: Outcome<X, A>) -> Outcome<Y, A>
where
    F: FnOnce(X) -> Y,
{
    match result {
        Outcome::Ok(value) => Outcome::Ok(value),
        Outcome::Err(err) => Outcome::Err(f(err)),
    }
}

/// Feeds the success value into `f` and returns whatever it produces.
///
/// An error is returned as-is and `f` is not called.
///
/// # Arguments
///
/// * `f` - Next step, which may itself fail
/// * `result` - The outcome to continue from
///
/// # Examples
///
/// ```
/// use outcome_rail::ops::{chain, error, ok};
/// use outcome_rail::Outcome;
///
/// let halve = |n: i32| if n % 2 == 0 { ok(n / 2) } else { error("odd") };
/// assert_eq!(chain(halve, ok(8)), Outcome::Ok(4));
/// assert_eq!(chain(halve, ok(7)), Outcome::Err("odd"));
/// assert_eq!(chain(halve, error("e")), Outcome::Err("e"));
/// ```
#[inline]
pub fn chain<X, A, B, F>(f: F, result: Outcome<X, A>) -> Outcome<X, B>
where
    F: FnOnce(A) -> Outcome<X, B>,
{
    match result {
        Outcome::Ok(value) => f(value),
        Outcome::Err(err) => Outcome::Err(err),
    }
}

/// Feeds the error into `f` and returns whatever it produces.
///
/// A success value is returned as-is and `f` is not called. Unlike
/// [`recover`], the handler may fail again, possibly with a new error type.
///
/// # Examples
///
/// ```
/// use outcome_rail::ops::{capture, error, ok};
/// use outcome_rail::Outcome;
///
/// let r: Outcome<&str, usize> = error("e");
/// assert_eq!(capture(|e: &str| ok::<(), _>(e.len()), r), Outcome::Ok(1));
/// ```
#[inline]
pub fn capture<X, Y, A, F>(f: F, result: Outcome<X, A>) -> Outcome<Y, A>
where
    F: FnOnce(X) -> Outcome<Y, A>,
{
    match result {
        Outcome::Ok(value) => Outcome::Ok(value),
        Outcome::Err(err) => f(err),
    }
}

/// Turns an error into a success value computed by `f`.
///
/// The returned outcome is always `Ok`; the error type stays in the
/// signature so `recover` composes with the other combinators.
///
/// # Examples
///
/// ```
/// use outcome_rail::ops::{error, recover};
/// use outcome_rail::Outcome;
///
/// let r: Outcome<String, String> = error("e".to_string());
/// assert_eq!(recover(|e| e + "!", r), Outcome::Ok("e!".to_string()));
/// ```
#[inline]
pub fn recover<X, A, F>(f: F, result: Outcome<X, A>) -> Outcome<X, A>
where
    F: FnOnce(X) -> A,
{
    match result {
        Outcome::Ok(value) => Outcome::Ok(value),
        Outcome::Err(err) => Outcome::Ok(f(err)),
    }
}

/// Returns `right` if `left` is `Ok`, otherwise `left`'s error.
///
/// Both arguments are already evaluated when this is called; use
/// [`and_with`] to build `right` only when it is needed.
///
/// # Examples
///
/// ```
/// use outcome_rail::ops::{and, error, ok};
/// use outcome_rail::Outcome;
///
/// assert_eq!(and(ok::<&str, _>(11), ok("foo")), Outcome::Ok("foo"));
/// assert_eq!(and(ok::<_, i32>(11), error::<_, &str>("x")), Outcome::Err("x"));
/// assert_eq!(and(error::<_, ()>(11), ok("foo")), Outcome::Err(11));
/// ```
#[inline]
pub fn and<X, A, B>(left: Outcome<X, A>, right: Outcome<X, B>) -> Outcome<X, B> {
    match left {
        Outcome::Ok(_) => right,
        Outcome::Err(err) => Outcome::Err(err),
    }
}

/// Lazy form of [`and`]: `right` is only called when `left` is `Ok`.
#[inline]
pub fn and_with<X, A, B, F>(left: Outcome<X, A>, right: F) -> Outcome<X, B>
where
    F: FnOnce() -> Outcome<X, B>,
{
    match left {
        Outcome::Ok(_) => right(),
        Outcome::Err(err) => Outcome::Err(err),
    }
}

/// Returns `left` if it is `Ok`, otherwise `right`.
///
/// # Examples
///
/// ```
/// use outcome_rail::ops::{error, ok, or};
/// use outcome_rail::Outcome;
///
/// assert_eq!(or(ok::<(), _>(1), ok::<(), _>(7)), Outcome::Ok(1));
/// assert_eq!(or(error::<_, i32>(1), ok::<(), _>(7)), Outcome::Ok(7));
/// assert_eq!(or(error::<_, i32>(1), error::<_, i32>("z")), Outcome::Err("z"));
/// ```
#[inline]
pub fn or<X, Y, A>(left: Outcome<X, A>, right: Outcome<Y, A>) -> Outcome<Y, A> {
    match left {
        Outcome::Ok(value) => Outcome::Ok(value),
        Outcome::Err(_) => right,
    }
}

/// Lazy form of [`or`]: `right` is only called when `left` is `Err`.
#[inline]
pub fn or_with<X, Y, A, F>(left: Outcome<X, A>, right: F) -> Outcome<Y, A>
where
    F: FnOnce() -> Outcome<Y, A>,
{
    match left {
        Outcome::Ok(value) => Outcome::Ok(value),
        Outcome::Err(_) => right(),
    }
}

/// Applies `on_ok` or `on_err` depending on the active channel.
#[inline]
pub fn bimap<X, Y, A, B, F, G>(on_ok: F, on_err: G, result: Outcome<X, A>) -> Outcome<Y, B>
where
    F: FnOnce(A) -> B,
    G: FnOnce(X) -> Y,
{
    match result {
        Outcome::Ok(value) => Outcome::Ok(on_ok(value)),
        Outcome::Err(err) => Outcome::Err(on_err(err)),
    }
}

/// Extracts the success value, or returns `fallback` for an error.
///
/// # Examples
///
/// ```
/// use outcome_rail::ops::{error, ok, to_value};
///
/// assert_eq!(to_value(ok::<&str, _>(3), 4), 3);
/// assert_eq!(to_value(error("x"), 4), 4);
/// ```
#[inline]
pub fn to_value<X, A>(result: Outcome<X, A>, fallback: A) -> A {
    match result {
        Outcome::Ok(value) => value,
        Outcome::Err(_) => fallback,
    }
}

/// Extracts the success value, or computes one from the error.
#[inline]
pub fn to_value_with<X, A, F>(result: Outcome<X, A>, fallback: F) -> A
where
    F: FnOnce(X) -> A,
{
    match result {
        Outcome::Ok(value) => value,
        Outcome::Err(err) => fallback(err),
    }
}

/// Converts the success channel into an `Option`, discarding any error.
///
/// # Examples
///
/// ```
/// use outcome_rail::ops::{error, ok, to_maybe};
///
/// assert_eq!(to_maybe(ok::<&str, _>(5)), Some(5));
/// assert_eq!(to_maybe(error::<_, i32>("x")), None);
/// ```
#[inline]
pub fn to_maybe<X, A>(result: Outcome<X, A>) -> Option<A> {
    match result {
        Outcome::Ok(value) => Some(value),
        Outcome::Err(_) => None,
    }
}

/// Converts the error channel into an `Option`, discarding any success value.
#[inline]
pub fn into_error<X, A>(result: Outcome<X, A>) -> Option<X> {
    match result {
        Outcome::Ok(_) => None,
        Outcome::Err(err) => Some(err),
    }
}
