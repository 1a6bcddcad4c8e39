use crate::traits::WithError;

/// Lifts plain values and errors into a two-channel type.
///
/// The implementing type is a marker (`Result<(), E>` or `Outcome<E, ()>`);
/// [`ErrorCategory::ErrorFunctor`] names the concrete container for any
/// success type.
pub trait ErrorCategory<E> {
    type ErrorFunctor<T>: WithError<E, Success = T>;

    /// Places `value` on the success channel.
    fn lift<T>(value: T) -> Self::ErrorFunctor<T>;

    /// Places `error` on the error channel.
    fn handle_error<T>(error: E) -> Self::ErrorFunctor<T>;
}

impl<E> ErrorCategory<E> for Result<(), E> {
    type ErrorFunctor<T> = Result<T, E>;

    #[inline]
    fn lift<T>(value: T) -> Result<T, E> {
        Ok(value)
    }

    #[inline]
    fn handle_error<T>(error: E) -> Result<T, E> {
        Err(error)
    }
}
