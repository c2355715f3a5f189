//! Resolution of the underlying-value range a table scans.

use crate::enumeration::Enumeration;
use crate::error::{Result, StrenumError};

/// One end of a scan range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
	/// The underlying value of an enumerator. Inclusive when used as an end.
	Enumerator(i128),
	/// A raw underlying value. Exclusive when used as an end.
	Underlying(i128),
	/// No bound was supplied and none could be derived.
	Unset,
}

/// Half-open range `[begin, end)` of underlying values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanRange {
	/// First probed value.
	pub begin: i128,
	/// One past the last probed value.
	pub end: i128,
}

impl ScanRange {
	/// Number of probed values.
	pub const fn width(&self) -> u128 {
		self.end.abs_diff(self.begin)
	}

	/// Returns true if `value` is probed.
	pub const fn contains(&self, value: i128) -> bool {
		value >= self.begin && value < self.end
	}
}

/// Resolves `begin` and `end` for `E` into a non-empty range.
pub const fn try_resolve<E: Enumeration>(begin: Bound, end: Bound) -> Result<ScanRange> {
	let begin = match begin {
		Bound::Enumerator(value) | Bound::Underlying(value) => value,
		Bound::Unset => return Err(StrenumError::MissingBegin),
	};
	let end = match end {
		Bound::Enumerator(value) => match value.checked_add(1) {
			Some(end) => end,
			None => return Err(StrenumError::OutOfRepr { value }),
		},
		Bound::Underlying(value) => value,
		Bound::Unset => return Err(StrenumError::MissingEnd),
	};

	if begin >= end {
		return Err(StrenumError::EmptyRange { begin, end });
	}
	if !E::REPR.contains(begin) {
		return Err(StrenumError::OutOfRepr { value: begin });
	}
	if !E::REPR.contains(end - 1) {
		return Err(StrenumError::OutOfRepr { value: end - 1 });
	}
	Ok(ScanRange { begin, end })
}

/// Resolves the range, failing constant evaluation on error.
pub const fn resolve<E: Enumeration>(begin: Bound, end: Bound) -> ScanRange {
	match try_resolve::<E>(begin, end) {
		Ok(range) => range,
		Err(err) => err.raise(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::enumeration::{Enumerator, Repr};

	#[derive(Clone, Copy)]
	struct Small;

	impl Enumeration for Small {
		const NAME: &'static str = "Small";
		const REPR: Repr = Repr::U8;
		const ENUMERATORS: &'static [Enumerator] = &[];
	}

	#[test]
	fn enumerator_end_is_inclusive() {
		let range = try_resolve::<Small>(Bound::Enumerator(0), Bound::Enumerator(2)).unwrap();
		assert_eq!(range, ScanRange { begin: 0, end: 3 });
		assert_eq!(range.width(), 3);
	}

	#[test]
	fn underlying_end_is_exclusive() {
		let range = try_resolve::<Small>(Bound::Underlying(1), Bound::Underlying(2)).unwrap();
		assert_eq!(range, ScanRange { begin: 1, end: 2 });
		assert!(range.contains(1));
		assert!(!range.contains(2));
	}

	#[test]
	fn unset_bounds_fail() {
		assert_eq!(
			try_resolve::<Small>(Bound::Unset, Bound::Underlying(4)),
			Err(StrenumError::MissingBegin)
		);
		assert_eq!(
			try_resolve::<Small>(Bound::Underlying(0), Bound::Unset),
			Err(StrenumError::MissingEnd)
		);
	}

	#[test]
	fn empty_range_fails() {
		assert_eq!(
			try_resolve::<Small>(Bound::Underlying(3), Bound::Underlying(3)),
			Err(StrenumError::EmptyRange { begin: 3, end: 3 })
		);
		assert_eq!(
			try_resolve::<Small>(Bound::Enumerator(5), Bound::Enumerator(3)),
			Err(StrenumError::EmptyRange { begin: 5, end: 4 })
		);
	}

	#[test]
	fn bounds_must_fit_repr() {
		assert_eq!(
			try_resolve::<Small>(Bound::Underlying(-1), Bound::Underlying(3)),
			Err(StrenumError::OutOfRepr { value: -1 })
		);
		assert_eq!(
			try_resolve::<Small>(Bound::Enumerator(250), Bound::Enumerator(255)),
			Ok(ScanRange { begin: 250, end: 256 })
		);
		assert_eq!(
			try_resolve::<Small>(Bound::Enumerator(250), Bound::Underlying(257)),
			Err(StrenumError::OutOfRepr { value: 256 })
		);
	}

	#[test]
	#[should_panic(expected = "no end bound")]
	fn resolve_panics() {
		resolve::<Small>(Bound::Underlying(0), Bound::Unset);
	}
}
