//! Channel abstractions shared by [`Outcome`](crate::Outcome) and
//! `core::result::Result`.
//!
//! - [`WithError`]: types whose error channel can be remapped and which can be
//!   flattened into a `Result`
//! - [`ErrorCategory`]: lifting plain values and errors into a two-channel type
//!
//! Both traits are implemented for `Result<T, E>` and `Outcome<E, T>`, so
//! helpers can be written once over either.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{ErrorCategory, WithError};
//! use outcome_rail::Outcome;
//!
//! fn port_of<C: ErrorCategory<&'static str>>(raw: &str) -> C::ErrorFunctor<u16> {
//!     match raw.parse::<u16>() {
//!         Ok(port) => C::lift(port),
//!         Err(_) => C::handle_error::<u16>("invalid port"),
//!     }
//! }
//!
//! let as_result = port_of::<Result<(), _>>("8080");
//! let as_outcome = port_of::<Outcome<_, ()>>("80x");
//!
//! assert_eq!(as_result, Ok(8080));
//! assert_eq!(as_outcome.to_result(), Err("invalid port"));
//! ```

pub mod error_category;
pub mod with_error;

pub use error_category::ErrorCategory;
pub use with_error::WithError;
