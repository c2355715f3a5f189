//! Error types for name table construction.

use thiserror::Error;

/// Everything that can stop a name table from being built.
///
/// Inside constant evaluation these surface as compile errors carrying
/// [`StrenumError::message`]. The `try_*` entry points return them as values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StrenumError {
	/// The signature text has no delimiter structure the parser recognizes.
	#[error("unrecognized signature: no enumerator delimiter found")]
	UnrecognizedSignature,

	/// The resolved range probes more values than the ceiling allows.
	#[error(
		"scan width exceeds the maximum search size; raise `max_search_size` for this enum or set STRENUM_MAX_SEARCH_SIZE (width {width}, max {max})"
	)]
	ExceedsMaxSearchSize {
		/// Number of values in `[begin, end)`.
		width: u128,
		/// Ceiling in effect for the enumeration.
		max: usize,
	},

	/// The resolved range is empty or inverted.
	#[error("the end value must be larger than begin (begin {begin}, end {end})")]
	EmptyRange {
		/// Inclusive start.
		begin: i128,
		/// Exclusive end.
		end: i128,
	},

	/// No begin bound was given and the type declares no begin marker.
	#[error("no begin bound: pass `begin` or mark a variant with #[strenum(begin)]")]
	MissingBegin,

	/// No end bound was given and the type declares no end marker.
	#[error("no end bound: pass `end` or mark a variant with #[strenum(end)]")]
	MissingEnd,

	/// A bound lies outside the range of the underlying representation.
	#[error("bound does not fit the enum's representation (value {value})")]
	OutOfRepr {
		/// The offending underlying value.
		value: i128,
	},

	/// The searcher filled a different number of slots than it counted.
	#[error("searcher result does not match the counted table length (expected {expected}, found {found})")]
	ShapeMismatch {
		/// Length computed by the counting pass.
		expected: usize,
		/// Slots filled by the second pass.
		found: usize,
	},

	/// The bitflag searcher is declared but has no algorithm.
	#[error("the bitflag searcher is not implemented")]
	BitflagUnsupported,
}

impl StrenumError {
	/// Static description of the error, usable in `const` panics.
	///
	/// The `Display` output starts with this text and appends any fields.
	pub const fn message(&self) -> &'static str {
		match self {
			Self::UnrecognizedSignature => {
				"unrecognized signature: no enumerator delimiter found"
			}
			Self::ExceedsMaxSearchSize { .. } => {
				"scan width exceeds the maximum search size; raise `max_search_size` for this enum or set STRENUM_MAX_SEARCH_SIZE"
			}
			Self::EmptyRange { .. } => "the end value must be larger than begin",
			Self::MissingBegin => {
				"no begin bound: pass `begin` or mark a variant with #[strenum(begin)]"
			}
			Self::MissingEnd => "no end bound: pass `end` or mark a variant with #[strenum(end)]",
			Self::OutOfRepr { .. } => "bound does not fit the enum's representation",
			Self::ShapeMismatch { .. } => {
				"searcher result does not match the counted table length"
			}
			Self::BitflagUnsupported => "the bitflag searcher is not implemented",
		}
	}

	/// Aborts constant evaluation with this error's message.
	#[track_caller]
	pub const fn raise(self) -> ! {
		panic!("{}", self.message())
	}
}

/// Result type for name table operations.
pub type Result<T> = std::result::Result<T, StrenumError>;
