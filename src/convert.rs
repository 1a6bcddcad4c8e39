//! Conversions between [`Outcome`], `core::result::Result` and `Option`.
//!
//! `Outcome<X, A>` and `Result<A, X>` are isomorphic; the `From` impls make
//! it cheap to step into the combinator API at a boundary and back out
//! again, e.g. to use `?` inside a function returning `Result`.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::*;
//! use outcome_rail::Outcome;
//!
//! let result: Result<i32, &str> = Ok(42);
//! let outcome = result_to_outcome(result);
//! assert!(outcome.is_ok());
//!
//! let back: Result<i32, &str> = outcome_to_result(Outcome::error("failed"));
//! assert_eq!(back, Err("failed"));
//! ```

use crate::outcome::core::Outcome;

/// Converts a `Result` into an `Outcome`.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::result_to_outcome;
/// use outcome_rail::Outcome;
///
/// assert_eq!(result_to_outcome(Ok::<i32, &str>(7)), Outcome::Ok(7));
/// assert_eq!(result_to_outcome(Err::<i32, &str>("boom")), Outcome::Err("boom"));
/// ```
#[inline]
pub fn result_to_outcome<X, A>(result: Result<A, X>) -> Outcome<X, A> {
    match result {
        Ok(value) => Outcome::Ok(value),
        Err(err) => Outcome::Err(err),
    }
}

/// Converts an `Outcome` into a `Result`.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::outcome_to_result;
/// use outcome_rail::Outcome;
///
/// assert_eq!(outcome_to_result(Outcome::<&str, i32>::ok(7)), Ok(7));
/// ```
#[inline]
pub fn outcome_to_result<X, A>(outcome: Outcome<X, A>) -> Result<A, X> {
    match outcome {
        Outcome::Ok(value) => Ok(value),
        Outcome::Err(err) => Err(err),
    }
}

impl<X, A> Outcome<X, A> {
    /// Wraps a `Result`, keeping its channel.
    #[inline]
    pub fn from_result(result: Result<A, X>) -> Self {
        result_to_outcome(result)
    }

    /// Unwraps into a `Result`, keeping the channel.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn total(a: &str, b: &str) -> Result<i32, &'static str> {
    ///     let parse = |s: &str| Outcome::from_maybe("not a number", s.parse::<i32>().ok());
    ///     Ok(parse(a).into_result()? + parse(b).into_result()?)
    /// }
    ///
    /// assert_eq!(total("2", "40"), Ok(42));
    /// assert_eq!(total("2", "x"), Err("not a number"));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<A, X> {
        outcome_to_result(self)
    }
}

impl<X, A> From<Result<A, X>> for Outcome<X, A> {
    #[inline]
    fn from(result: Result<A, X>) -> Self {
        result_to_outcome(result)
    }
}

impl<X, A> From<Outcome<X, A>> for Result<A, X> {
    #[inline]
    fn from(outcome: Outcome<X, A>) -> Self {
        outcome_to_result(outcome)
    }
}
