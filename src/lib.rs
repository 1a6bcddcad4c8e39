//! A two-channel [`Outcome`] type and its combinator algebra.
//!
//! `Outcome<X, A>` is either `Ok(A)` or `Err(X)`. Every operation exists
//! twice with identical behaviour: as a free function in [`ops`] (function
//! first, outcome last) and as a method on [`Outcome`] for left-to-right
//! chaining. The methods delegate to the free functions.
//!
//! # Examples
//!
//! ## Method Chaining
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let r = Outcome::<&str, i32>::ok(5)
//!     .map(|x| x + 1)
//!     .chain(|x| if x > 5 { Outcome::ok(x * 2) } else { Outcome::error("too small") })
//!     .recover(|_| 0);
//!
//! assert_eq!(r, Outcome::Ok(12));
//! ```
//!
//! ## Free Functions
//!
//! ```
//! use outcome_rail::ops::{capture, error, ok};
//! use outcome_rail::Outcome;
//!
//! let r: Outcome<&str, i32> = error("e");
//! let handled = capture(|e: &str| if e.is_empty() { error("empty") } else { ok(1) }, r);
//! assert_eq!(handled, Outcome::Ok(1));
//! ```
//!
//! ## Optional Values
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let found = Outcome::from_maybe("missing", Some(3));
//! assert_eq!(found.to_maybe(), Some(3));
//!
//! let absent = Outcome::<_, i32>::from_maybe("missing", None);
//! assert_eq!(absent, Outcome::Err("missing"));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "std")]
extern crate std;

/// Conversions between Outcome, Result, and Option
pub mod convert;
/// Free-function form of every Outcome operation
pub mod ops;
/// The Outcome type, its iterators, and its trait implementations
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Channel abstractions shared with `core::result::Result`
pub mod traits;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
#[cfg_attr(docsrs, doc(cfg(feature = "tracing")))]
pub mod tracing_ext;

pub use convert::{outcome_to_result, result_to_outcome};
pub use outcome::Outcome;
pub use traits::{ErrorCategory, WithError};
