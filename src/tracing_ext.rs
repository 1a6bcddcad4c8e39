//! Tracing integration for outcome-rail.
//!
//! Adds pass-through methods on [`Outcome`] that emit a `tracing` event for
//! one channel and hand the outcome back unchanged, so they can sit anywhere
//! in a combinator chain.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["tracing"] }
//! ```
//!
//! # Examples
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let port = Outcome::<&str, u16>::from_maybe("PORT unset", None)
//!     .trace_err("read_port")
//!     .recover(|_| 8080);
//! assert_eq!(port, Outcome::Ok(8080));
//! ```

use core::fmt::Debug;

use tracing::Span;

use crate::outcome::core::Outcome;

impl<X, A> Outcome<X, A> {
    /// Emits a `WARN` event carrying the error, if any, then returns `self`.
    ///
    /// # Arguments
    ///
    /// * `operation` - Name recorded in the event's `operation` field
    #[inline]
    pub fn trace_err(self, operation: &'static str) -> Self
    where
        X: Debug,
    {
        self.inspect_err(|error| tracing::warn!(operation, ?error, "operation failed"))
    }

    /// Emits a `DEBUG` event carrying the success value, if any, then returns `self`.
    #[inline]
    pub fn trace_ok(self, operation: &'static str) -> Self
    where
        A: Debug,
    {
        self.inspect(|value| tracing::debug!(operation, ?value, "operation succeeded"))
    }

    /// Emits the event for whichever channel is active inside `span`.
    ///
    /// Successes are recorded at `DEBUG` and errors at `WARN`, exactly as
    /// [`Outcome::trace_ok`] and [`Outcome::trace_err`] do.
    pub fn trace_in(self, span: &Span, operation: &'static str) -> Self
    where
        X: Debug,
        A: Debug,
    {
        span.in_scope(|| self.trace_ok(operation).trace_err(operation))
    }
}
