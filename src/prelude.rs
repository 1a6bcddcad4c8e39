//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! let r: Outcome<&str, i32> = ok(2);
//! assert_eq!(map(|x| x * 21, r).to_value(0), 42);
//! ```
//!
//! # What's Included
//!
//! - **Type**: [`Outcome`]
//! - **Constructors**: [`ok`], [`error`], [`from_maybe`]
//! - **Combinators**: [`map`], [`format`], [`chain`], [`capture`], [`recover`], [`and`], [`or`]
//! - **Extraction**: [`to_value`], [`to_maybe`], [`is_ok`], [`is_err`]
//! - **Traits**: [`WithError`], [`ErrorCategory`]

pub use crate::ops::{
    and, capture, chain, error, format, from_maybe, is_err, is_ok, map, ok, or, recover,
    to_maybe, to_value,
};
pub use crate::outcome::Outcome;
pub use crate::traits::{ErrorCategory, WithError};
