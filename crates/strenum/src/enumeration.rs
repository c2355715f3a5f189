//! Declared facts about an enumeration and its per-type options.

use crate::bounds::Bound;
use crate::search::Searcher;

/// Integer representation backing an enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Repr {
	I8,
	I16,
	I32,
	I64,
	I128,
	Isize,
	U8,
	U16,
	U32,
	U64,
	Usize,
}

impl Repr {
	/// Smallest representable value.
	pub const fn min(self) -> i128 {
		match self {
			Self::I8 => i8::MIN as i128,
			Self::I16 => i16::MIN as i128,
			Self::I32 => i32::MIN as i128,
			Self::I64 => i64::MIN as i128,
			Self::I128 => i128::MIN,
			Self::Isize => isize::MIN as i128,
			Self::U8 | Self::U16 | Self::U32 | Self::U64 | Self::Usize => 0,
		}
	}

	/// Largest representable value.
	pub const fn max(self) -> i128 {
		match self {
			Self::I8 => i8::MAX as i128,
			Self::I16 => i16::MAX as i128,
			Self::I32 => i32::MAX as i128,
			Self::I64 => i64::MAX as i128,
			Self::I128 => i128::MAX,
			Self::Isize => isize::MAX as i128,
			Self::U8 => u8::MAX as i128,
			Self::U16 => u16::MAX as i128,
			Self::U32 => u32::MAX as i128,
			Self::U64 => u64::MAX as i128,
			Self::Usize => usize::MAX as i128,
		}
	}

	/// Returns true if `value` fits this representation.
	pub const fn contains(self, value: i128) -> bool {
		value >= self.min() && value <= self.max()
	}
}

/// One declared enumerator: its underlying value and rendered signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enumerator {
	/// Underlying value, widened to `i128`.
	pub value: i128,
	/// Signature text rendered for this enumerator, see [`render_signature!`].
	///
	/// [`render_signature!`]: crate::render_signature
	pub signature: &'static str,
}

impl Enumerator {
	/// Creates an enumerator entry.
	pub const fn new(value: i128, signature: &'static str) -> Self {
		Self { value, signature }
	}
}

/// An integral-backed enumeration whose enumerators can be probed by value.
///
/// Usually implemented with `#[derive(Strenum)]`. A manual implementation may
/// list several enumerators with the same value; the first one listed is the
/// one that surfaces.
pub trait Enumeration: Copy + 'static {
	/// Type name used when rendering integer signatures. A path such as
	/// `paint::Color` is accepted; only its last segment is rendered.
	const NAME: &'static str;
	/// Underlying representation.
	const REPR: Repr;
	/// Declared enumerators in declaration order.
	const ENUMERATORS: &'static [Enumerator];
	/// Value of the variant marked as the start of the scan range.
	const BEGIN_MARKER: Option<i128> = None;
	/// Value of the variant marked as the end of the scan range.
	const END_MARKER: Option<i128> = None;
}

/// Per-type options for building a name table.
///
/// Every option has a default, so an empty impl is valid:
///
/// * `BEGIN` and `END` come from the sentinel markers, or stay
///   [`Bound::Unset`] (an error when resolved) if the type has none.
/// * `SEARCHER` is [`Searcher::Sequential`].
/// * `MAX_SEARCH_SIZE` is the global [`MAX_SEARCH_SIZE`].
///
/// [`MAX_SEARCH_SIZE`]: crate::config::MAX_SEARCH_SIZE
pub trait EnumInformation: Enumeration {
	/// First value to probe.
	const BEGIN: Bound = match Self::BEGIN_MARKER {
		Some(value) => Bound::Enumerator(value),
		None => Bound::Unset,
	};
	/// Last value to probe. An enumerator bound is inclusive, an underlying
	/// bound exclusive.
	const END: Bound = match Self::END_MARKER {
		Some(value) => Bound::Enumerator(value),
		None => Bound::Unset,
	};
	/// Strategy used to walk the range.
	const SEARCHER: Searcher = Searcher::Sequential;
	/// Ceiling on the number of probed values.
	const MAX_SEARCH_SIZE: usize = crate::config::MAX_SEARCH_SIZE;
}

/// Finds the first declared enumerator with underlying `value`.
pub const fn find_enumerator<E: Enumeration>(value: i128) -> Option<&'static Enumerator> {
	let enumerators = E::ENUMERATORS;
	let mut i = 0;
	while i < enumerators.len() {
		if enumerators[i].value == value {
			return Some(&enumerators[i]);
		}
		i += 1;
	}
	None
}
