use crate::ops;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The outcome of a computation that may fail.
///
/// `Outcome<X, A>` carries either a success value of type `A` or an error of
/// type `X`. The error type comes first so that combinators working on the
/// success channel read left to right the same way their signatures do:
/// `map: (A -> B, Outcome<X, A>) -> Outcome<X, B>`.
///
/// Every combinator consumes the outcome and produces a new one. The methods
/// below are thin wrappers over the free functions in [`crate::ops`], so
/// either style can be used:
///
/// ```
/// use outcome_rail::{ops, Outcome};
///
/// let method: Outcome<&str, i32> = Outcome::ok(5).map(|x| x + 1);
/// let free: Outcome<&str, i32> = ops::map(|x| x + 1, ops::ok(5));
/// assert_eq!(method, free);
/// ```
///
/// # Serde Support
///
/// With the `serde` feature, `Outcome` implements `Serialize` and
/// `Deserialize` when `X` and `A` do, using the externally tagged form
/// `{"Ok": value}` / `{"Err": error}`.
///
/// # Type Parameters
///
/// * `X` - The error type
/// * `A` - The success value type
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Outcome<X, A> {
    /// Success, holding a value.
    Ok(A),
    /// Failure, holding an error.
    Err(X),
}

impl<X, A> Outcome<X, A> {
    /// Creates a successful outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let r = Outcome::<&str, i32>::ok(5);
    /// assert!(r.is_ok());
    /// ```
    #[inline]
    pub fn ok(value: A) -> Self {
        ops::ok(value)
    }

    /// Creates a failed outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let r = Outcome::<&str, i32>::error("bad");
    /// assert!(r.is_err());
    /// ```
    #[inline]
    pub fn error(err: X) -> Self {
        ops::error(err)
    }

    /// Creates an outcome from an optional value, falling back to `err`.
    ///
    /// # Arguments
    ///
    /// * `err` - Error used when `maybe` is `None`
    /// * `maybe` - The optional success value
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::from_maybe("Oops", Some(3)), Outcome::Ok(3));
    /// assert_eq!(Outcome::<_, i32>::from_maybe("Oops", None), Outcome::Err("Oops"));
    /// ```
    #[inline]
    pub fn from_maybe(err: X, maybe: Option<A>) -> Self {
        ops::from_maybe(err, maybe)
    }

    /// Creates an outcome from an optional value, building the error lazily.
    #[inline]
    pub fn from_maybe_with<F>(err: F, maybe: Option<A>) -> Self
    where
        F: FnOnce() -> X,
    {
        ops::from_maybe_with(err, maybe)
    }

    /// Returns `true` if the outcome holds a success value.
    #[must_use]
    #[inline]
    pub fn is_ok(&self) -> bool {
        ops::is_ok(self)
    }

    /// Returns `true` if the outcome holds an error.
    #[must_use]
    #[inline]
    pub fn is_err(&self) -> bool {
        ops::is_err(self)
    }

    /// Maps the success value, leaving an error untouched.
    ///
    /// # Arguments
    ///
    /// * `f` - A function that transforms the success value from `A` to `B`
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<&str, i32>::ok(3).map(|x| x + 1), Outcome::Ok(4));
    /// assert_eq!(
    ///     Outcome::<&str, i32>::error("bad input").map(|x| x + 1),
    ///     Outcome::Err("bad input")
    /// );
    /// ```
    #[inline]
    pub fn map<B, F>(self, f: F) -> Outcome<X, B>
    where
        F: FnOnce(A) -> B,
    {
        ops::map(f, self)
    }

    /// Maps the error, leaving a success value untouched.
    ///
    /// # Arguments
    ///
    /// * `f` - A function that transforms the error from `X` to `Y`
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let r = Outcome::<&str, ()>::error("timeout").format(|e| format!("upstream: {e}"));
    /// assert_eq!(r, Outcome::Err("upstream: timeout".to_string()));
    /// ```
    #[inline]
    pub fn format<Y, F>(self, f: F) -> Outcome<Y, A>
    where
        F: FnOnce(X) -> Y,
    {
        ops::format(f, self)
    }

    /// Continues with `next` when successful; an error short-circuits.
    ///
    /// # Arguments
    ///
    /// * `next` - Next step, producing its own outcome
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let r = Outcome::<&str, i32>::ok(5).chain(|_| Outcome::<_, i32>::error("nope"));
    /// assert_eq!(r, Outcome::Err("nope"));
    /// ```
    #[inline]
    pub fn chain<B, F>(self, next: F) -> Outcome<X, B>
    where
        F: FnOnce(A) -> Outcome<X, B>,
    {
        ops::chain(next, self)
    }

    /// Handles an error with `next`, which may succeed or fail again.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let r = Outcome::<&str, usize>::error("e").capture(|e| Outcome::<(), _>::ok(e.len()));
    /// assert_eq!(r, Outcome::Ok(1));
    /// ```
    #[inline]
    pub fn capture<Y, F>(self, next: F) -> Outcome<Y, A>
    where
        F: FnOnce(X) -> Outcome<Y, A>,
    {
        ops::capture(next, self)
    }

    /// Replaces an error with a success value computed from it.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let r = Outcome::<String, String>::error("e".into()).recover(|e| e + "!");
    /// assert_eq!(r, Outcome::Ok("e!".to_string()));
    /// ```
    #[inline]
    pub fn recover<F>(self, f: F) -> Outcome<X, A>
    where
        F: FnOnce(X) -> A,
    {
        ops::recover(f, self)
    }

    /// Returns `other` if `self` is `Ok`, otherwise `self`'s error.
    ///
    /// `other` is evaluated by the caller before this is called. Use
    /// [`Outcome::and_with`] when building it has a cost or side effects.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let first = Outcome::<&str, i32>::ok(11);
    /// assert_eq!(first.and(Outcome::ok("foo")), Outcome::Ok("foo"));
    /// ```
    #[inline]
    pub fn and<B>(self, other: Outcome<X, B>) -> Outcome<X, B> {
        ops::and(self, other)
    }

    /// Calls `other` only if `self` is `Ok`.
    #[inline]
    pub fn and_with<B, F>(self, other: F) -> Outcome<X, B>
    where
        F: FnOnce() -> Outcome<X, B>,
    {
        ops::and_with(self, other)
    }

    /// Returns `self` if it is `Ok`, otherwise `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let primary = Outcome::<i32, i32>::error(1);
    /// assert_eq!(primary.or(Outcome::<(), _>::ok(7)), Outcome::Ok(7));
    /// ```
    #[inline]
    pub fn or<Y>(self, other: Outcome<Y, A>) -> Outcome<Y, A> {
        ops::or(self, other)
    }

    /// Calls `other` only if `self` is `Err`.
    #[inline]
    pub fn or_with<Y, F>(self, other: F) -> Outcome<Y, A>
    where
        F: FnOnce() -> Outcome<Y, A>,
    {
        ops::or_with(self, other)
    }

    /// Maps both channels at once.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let r = Outcome::<&str, i32>::ok(21).bimap(|x| x * 2, str::len);
    /// assert_eq!(r, Outcome::Ok(42));
    /// ```
    #[inline]
    pub fn bimap<Y, B, F, G>(self, on_ok: F, on_err: G) -> Outcome<Y, B>
    where
        F: FnOnce(A) -> B,
        G: FnOnce(X) -> Y,
    {
        ops::bimap(on_ok, on_err, self)
    }

    /// Extracts the success value, or returns `fallback`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<&str, i32>::ok(3).to_value(4), 3);
    /// assert_eq!(Outcome::<&str, i32>::error("x").to_value(4), 4);
    /// ```
    #[must_use]
    #[inline]
    pub fn to_value(self, fallback: A) -> A {
        ops::to_value(self, fallback)
    }

    /// Extracts the success value, or computes one from the error.
    #[must_use]
    #[inline]
    pub fn to_value_with<F>(self, fallback: F) -> A
    where
        F: FnOnce(X) -> A,
    {
        ops::to_value_with(self, fallback)
    }

    /// Converts into an `Option`, discarding the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<&str, i32>::ok(5).to_maybe(), Some(5));
    /// assert_eq!(Outcome::<&str, i32>::error("x").to_maybe(), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn to_maybe(self) -> Option<A> {
        ops::to_maybe(self)
    }

    /// Extracts the error, if any.
    ///
    /// Returns `Some(error)` on failure, `None` on success.
    #[must_use]
    #[inline]
    pub fn into_error(self) -> Option<X> {
        ops::into_error(self)
    }

    /// Borrows both channels.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&X, &A> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(err) => Outcome::Err(err),
        }
    }

    /// Mutably borrows both channels.
    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut X, &mut A> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(err) => Outcome::Err(err),
        }
    }

    /// Calls `f` with the success value, then returns the outcome unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let mut seen = 0;
    /// let r = Outcome::<&str, i32>::ok(7).inspect(|v| seen = *v);
    /// assert_eq!(seen, 7);
    /// assert_eq!(r, Outcome::Ok(7));
    /// ```
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&A),
    {
        if let Self::Ok(value) = &self {
            f(value);
        }
        self
    }

    /// Calls `f` with the error, then returns the outcome unchanged.
    #[inline]
    pub fn inspect_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&X),
    {
        if let Self::Err(err) = &self {
            f(err);
        }
        self
    }
}
