//! The [`Outcome`] type and its method-chaining API.
//!
//! `Outcome<X, A>` is either `Ok(A)` or `Err(X)`. It is built with
//! [`Outcome::ok`], [`Outcome::error`] or [`Outcome::from_maybe`] and then
//! composed left to right:
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! fn parse_port(raw: &str) -> Outcome<String, u16> {
//!     Outcome::from(raw.parse::<u16>()).format(|e| format!("{raw}: {e}"))
//! }
//!
//! let port = parse_port("80")
//!     .chain(|p| if p < 1024 { Outcome::error("privileged".into()) } else { Outcome::ok(p) })
//!     .recover(|_| 8080);
//! assert_eq!(port, Outcome::Ok(8080));
//! ```
pub mod core;
pub mod iter;
pub mod traits;

pub use self::core::*;
pub use self::iter::*;
