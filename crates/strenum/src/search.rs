//! Walking a scan range and assembling the name table.
//!
//! A `const` array's length has to be known before the array exists, so the
//! table is built in two passes: [`count`] sizes it and [`search`] fills it.
//! Both passes probe the same values in the same order.

use crate::bounds::ScanRange;
use crate::enumeration::Enumeration;
use crate::error::{Result, StrenumError};
use crate::stringify::stringify;

/// Ordered enumerator names, ascending by underlying value.
pub type NameTable<const N: usize> = [&'static str; N];

/// Strategy for walking a scan range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Searcher {
	/// Probe every value in `[begin, end)` in ascending order.
	#[default]
	Sequential,
	/// Reserved for power-of-two flag enumerations. Not implemented: any use
	/// fails with [`StrenumError::BitflagUnsupported`].
	Bitflag,
}

/// First pass: number of values in `range` that name an enumerator.
pub const fn try_count<E: Enumeration>(searcher: Searcher, range: ScanRange) -> Result<usize> {
	match searcher {
		Searcher::Sequential => {
			let mut count = 0;
			let mut value = range.begin;
			while value < range.end {
				if !stringify::<E>(value).is_empty() {
					count += 1;
				}
				value += 1;
			}
			Ok(count)
		}
		Searcher::Bitflag => Err(StrenumError::BitflagUnsupported),
	}
}

/// Second pass: fills a table of exactly `N` names from `range`.
pub const fn try_search<E: Enumeration, const N: usize>(
	searcher: Searcher,
	range: ScanRange,
) -> Result<NameTable<N>> {
	match searcher {
		Searcher::Sequential => {
			let mut table: NameTable<N> = [""; N];
			let mut filled = 0;
			let mut value = range.begin;
			while value < range.end {
				let name = stringify::<E>(value);
				if !name.is_empty() {
					if filled == N {
						return Err(StrenumError::ShapeMismatch {
							expected: N,
							found: N + 1,
						});
					}
					table[filled] = name.as_str();
					filled += 1;
				}
				value += 1;
			}
			if filled != N {
				return Err(StrenumError::ShapeMismatch {
					expected: N,
					found: filled,
				});
			}
			Ok(table)
		}
		Searcher::Bitflag => Err(StrenumError::BitflagUnsupported),
	}
}

/// [`try_count`], failing constant evaluation on error.
pub const fn count<E: Enumeration>(searcher: Searcher, range: ScanRange) -> usize {
	match try_count::<E>(searcher, range) {
		Ok(count) => count,
		Err(err) => err.raise(),
	}
}

/// [`try_search`], failing constant evaluation on error.
pub const fn search<E: Enumeration, const N: usize>(
	searcher: Searcher,
	range: ScanRange,
) -> NameTable<N> {
	match try_search::<E, N>(searcher, range) {
		Ok(table) => table,
		Err(err) => err.raise(),
	}
}
