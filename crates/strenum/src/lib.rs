//! Compile-time name tables for enumerations.
//!
//! Deriving [`Strenum`] on a fieldless enum records, for every variant, the
//! signature text a probe of that value renders. Name tables are then built
//! entirely during constant evaluation:
//!
//! 1. the scan range is resolved from explicit bounds or the variants marked
//!    `#[strenum(begin)]` / `#[strenum(end)]` ([`bounds`]),
//! 2. each value in the range is probed and its signature parsed back into
//!    an enumerator name, or nothing for values no variant carries
//!    ([`signature`], [`stringify()`]),
//! 3. the non-empty names are collected in ascending value order ([`search`]).
//!
//! ```
//! use strenum::Strenum;
//!
//! #[derive(Clone, Copy, Strenum)]
//! #[repr(u8)]
//! enum Color {
//! 	#[strenum(begin)]
//! 	Red = 1,
//! 	Green = 2,
//! 	#[strenum(end)]
//! 	Blue = 4,
//! }
//!
//! assert_eq!(Color::NAMES, ["Red", "Green", "Blue"]);
//! assert_eq!(strenum::name!(Color, Green), "Green");
//! assert!(strenum::name!(Color, 3).is_empty());
//! ```
//!
//! Every failure (unbounded range, range wider than the ceiling, unsupported
//! signature text) is a compile error, never a runtime one:
//!
//! ```compile_fail
//! #[derive(Clone, Copy, strenum::Strenum)]
//! #[strenum(max_search_size = 4)]
//! enum Wide {
//! 	#[strenum(begin)]
//! 	A = 0,
//! 	#[strenum(end)]
//! 	B = 100,
//! }
//!
//! let _ = Wide::NAMES;
//! ```
//!
//! The ceiling defaults to [`MAX_SEARCH_SIZE`]; raise it per type with
//! `#[strenum(max_search_size = N)]`, or globally by setting
//! `STRENUM_MAX_SEARCH_SIZE` when building this crate.

extern crate self as strenum;

/// Scan range resolution.
pub mod bounds;
/// Build-time configuration.
pub mod config;
/// Enumeration traits and per-type options.
pub mod enumeration;
/// Error types.
pub mod error;
/// Const-evaluable text values.
pub mod fixed_string;
/// Range search strategies.
pub mod search;
/// Signature rendering and parsing.
pub mod signature;
mod stringify;

pub use bounds::{Bound, ScanRange};
pub use config::MAX_SEARCH_SIZE;
pub use enumeration::{EnumInformation, Enumeration, Enumerator, Repr};
pub use error::StrenumError;
pub use fixed_string::FixedString;
pub use search::{NameTable, Searcher};
pub use signature::SignatureStyle;
pub use strenum_macros::Strenum;
pub use stringify::{checked_range, stringify, try_checked_range};

#[cfg(test)]
mod tests;
