use crate::outcome::core::Outcome;
use crate::traits::{ErrorCategory, WithError};

/// `Outcome<E, ()>` acts as the error category for `Outcome<E, T>`:
/// - `lift` creates `Ok` values
/// - `handle_error` creates `Err` values
///
/// # Examples
///
/// ```
/// use outcome_rail::traits::ErrorCategory;
/// use outcome_rail::Outcome;
///
/// let ok: Outcome<String, i32> = <Outcome<String, ()>>::lift(42);
/// assert!(ok.is_ok());
///
/// let err: Outcome<String, i32> = <Outcome<String, ()>>::handle_error("error".to_string());
/// assert!(err.is_err());
/// ```
impl<E> ErrorCategory<E> for Outcome<E, ()> {
    type ErrorFunctor<T> = Outcome<E, T>;

    #[inline]
    fn lift<T>(value: T) -> Outcome<E, T> {
        Outcome::ok(value)
    }

    #[inline]
    fn handle_error<T>(error: E) -> Outcome<E, T> {
        Outcome::error(error)
    }
}

/// `fmap_error` is [`Outcome::format`]; `to_result` is [`Outcome::into_result`].
///
/// # Examples
///
/// ```
/// use outcome_rail::traits::WithError;
/// use outcome_rail::Outcome;
///
/// let r: Outcome<u32, i32> = Outcome::error(404);
/// let mapped = r.fmap_error(|code| format!("HTTP {code}"));
/// assert_eq!(mapped.to_result(), Err("HTTP 404".to_string()));
/// ```
impl<T, E> WithError<E> for Outcome<E, T> {
    type Success = T;
    type ErrorOutput<G> = Outcome<G, T>;

    #[inline]
    fn fmap_error<F, G>(self, f: F) -> Self::ErrorOutput<G>
    where
        F: FnOnce(E) -> G,
    {
        self.format(f)
    }

    #[inline]
    fn to_result(self) -> Result<Self::Success, E> {
        self.into_result()
    }
}
