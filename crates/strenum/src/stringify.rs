//! Public entry points wiring bounds, search and the signature parser.

use crate::bounds::{Bound, ScanRange, try_resolve};
use crate::enumeration::{EnumInformation, Enumeration, find_enumerator};
use crate::error::{Result, StrenumError};
use crate::fixed_string::FixedString;
use crate::signature::{SignatureStyle, parse, render_integer};

/// Name of the enumerator of `E` whose underlying value is `value`, or an
/// empty string if no enumerator has that value.
///
/// ```
/// use strenum::Strenum;
///
/// #[derive(Clone, Copy, Strenum)]
/// #[repr(u8)]
/// enum Level {
/// 	Low = 1,
/// 	High = 4,
/// }
///
/// const HIGH: strenum::FixedString<'static> = strenum::stringify::<Level>(4);
/// assert_eq!(HIGH, "High");
/// assert!(strenum::stringify::<Level>(2).is_empty());
/// ```
pub const fn stringify<E: Enumeration>(value: i128) -> FixedString<'static> {
	match find_enumerator::<E>(value) {
		Some(enumerator) => parse(FixedString::new(enumerator.signature), SignatureStyle::ACTIVE),
		None => {
			let rendered = render_integer(E::NAME, value, SignatureStyle::ACTIVE);
			if !parse(rendered.as_fixed(), SignatureStyle::ACTIVE).is_empty() {
				panic!("an integer rendering parsed as an enumerator name");
			}
			FixedString::EMPTY
		}
	}
}

/// Resolves `begin`/`end` for `E` and checks the width against
/// [`EnumInformation::MAX_SEARCH_SIZE`].
pub const fn try_checked_range<E: EnumInformation>(begin: Bound, end: Bound) -> Result<ScanRange> {
	let range = match try_resolve::<E>(begin, end) {
		Ok(range) => range,
		Err(err) => return Err(err),
	};
	let width = range.width();
	if width > E::MAX_SEARCH_SIZE as u128 {
		return Err(StrenumError::ExceedsMaxSearchSize {
			width,
			max: E::MAX_SEARCH_SIZE,
		});
	}
	Ok(range)
}

/// [`try_checked_range`], failing constant evaluation on error.
pub const fn checked_range<E: EnumInformation>(begin: Bound, end: Bound) -> ScanRange {
	match try_checked_range::<E>(begin, end) {
		Ok(range) => range,
		Err(err) => err.raise(),
	}
}

/// Builds the name table for `E`.
///
/// Expands to a `const` block of type [`NameTable<N>`](crate::NameTable),
/// where `N` is the number of enumerators in the range. Without options the
/// range and searcher come from [`EnumInformation`]. Options override them:
///
/// * `begin = Variant` or `begin = 3`: first probed value.
/// * `end = Variant` (inclusive) or `end = 7` (exclusive).
/// * `searcher = Sequential`: any [`Searcher`](crate::Searcher) variant.
///
/// ```
/// use strenum::Strenum;
///
/// #[derive(Clone, Copy, Strenum)]
/// enum Abc {
/// 	#[strenum(begin)]
/// 	A,
/// 	B,
/// 	#[strenum(end)]
/// 	C,
/// }
///
/// assert_eq!(strenum::names!(Abc), ["A", "B", "C"]);
/// assert_eq!(strenum::names!(Abc, begin = A, end = B), ["A", "B"]);
/// assert_eq!(strenum::names!(Abc, begin = 1, end = 3), ["B", "C"]);
/// ```
///
/// A range wider than the enumeration's ceiling does not compile:
///
/// ```compile_fail
/// use strenum::Strenum;
///
/// #[derive(Clone, Copy, Strenum)]
/// #[strenum(max_search_size = 8)]
/// enum Sparse {
/// 	A = 0,
/// 	B = 100,
/// }
///
/// let names = strenum::names!(Sparse, begin = A, end = B);
/// ```
///
/// Neither does a type without bounds:
///
/// ```compile_fail
/// use strenum::Strenum;
///
/// #[derive(Clone, Copy, Strenum)]
/// enum Unbounded {
/// 	A,
/// 	B,
/// }
///
/// let names = strenum::names!(Unbounded);
/// ```
#[macro_export]
macro_rules! names {
	($ty:ty $(, $($options:tt)*)?) => {
		$crate::__names!(
			@options $ty;
			<$ty as $crate::EnumInformation>::BEGIN;
			<$ty as $crate::EnumInformation>::END;
			<$ty as $crate::EnumInformation>::SEARCHER;
			$($($options)*)?
		)
	};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __names {
	(@options $ty:ty; $begin:expr; $end:expr; $searcher:expr; $(,)?) => {
		const {
			$crate::search::search::<
				$ty,
				{
					$crate::search::count::<$ty>(
						$searcher,
						$crate::checked_range::<$ty>($begin, $end),
					)
				},
			>($searcher, $crate::checked_range::<$ty>($begin, $end))
		}
	};
	(@options $ty:ty; $begin:expr; $end:expr; $searcher:expr; begin = $v:ident $(, $($rest:tt)*)?) => {
		$crate::__names!(@options $ty; $crate::__bound!($ty, $v); $end; $searcher; $($($rest)*)?)
	};
	(@options $ty:ty; $begin:expr; $end:expr; $searcher:expr; begin = $v:literal $(, $($rest:tt)*)?) => {
		$crate::__names!(@options $ty; $crate::__bound!($ty, $v); $end; $searcher; $($($rest)*)?)
	};
	(@options $ty:ty; $begin:expr; $end:expr; $searcher:expr; end = $v:ident $(, $($rest:tt)*)?) => {
		$crate::__names!(@options $ty; $begin; $crate::__bound!($ty, $v); $searcher; $($($rest)*)?)
	};
	(@options $ty:ty; $begin:expr; $end:expr; $searcher:expr; end = $v:literal $(, $($rest:tt)*)?) => {
		$crate::__names!(@options $ty; $begin; $crate::__bound!($ty, $v); $searcher; $($($rest)*)?)
	};
	(@options $ty:ty; $begin:expr; $end:expr; $searcher:expr; searcher = $s:ident $(, $($rest:tt)*)?) => {
		$crate::__names!(@options $ty; $begin; $end; $crate::Searcher::$s; $($($rest)*)?)
	};
}

/// Name of a single value of `E`, evaluated at compile time.
///
/// `name!(Type, Variant)` names an enumerator, `name!(Type, 7)` probes a raw
/// underlying value. Yields a [`FixedString<'static>`](crate::FixedString).
#[macro_export]
macro_rules! name {
	($ty:ty, $v:ident) => {
		const { $crate::stringify::<$ty>(<$ty>::$v as i128) }
	};
	($ty:ty, $v:literal) => {
		const { $crate::stringify::<$ty>($v as i128) }
	};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __bound {
	($ty:ty, $v:ident) => {
		$crate::Bound::Enumerator(<$ty>::$v as i128)
	};
	($ty:ty, $v:literal) => {
		$crate::Bound::Underlying($v as i128)
	};
}
