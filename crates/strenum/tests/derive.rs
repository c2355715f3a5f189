//! Name tables built from `#[derive(Strenum)]` enums.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use strenum::{Bound, EnumInformation, Enumeration, Repr, ScanRange, Searcher, Strenum, StrenumError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Strenum)]
enum Abc {
	#[strenum(begin)]
	A = 0,
	B = 1,
	#[strenum(end)]
	C = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Strenum)]
#[repr(u8)]
enum Gappy {
	#[strenum(begin)]
	First = 3,
	Second = 5,
	Third = 6,
	#[strenum(end)]
	Last = 10,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Strenum)]
#[repr(i32)]
#[strenum(begin = -3, end = 4, max_search_size = 16)]
enum Signed {
	MinusThree = -3,
	Zero = 0,
	Two = 2,
	Outside = 9,
}

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Strenum)]
#[strenum(begin = Start, end = Stop)]
enum Keywords {
	Start = 1,
	r#type = 2,
	r#match = 3,
	Stop = 4,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Strenum)]
#[repr(u16)]
enum Unbounded {
	Alpha = 100,
	Beta = 200,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Strenum)]
#[strenum(searcher = Bitflag)]
enum Flags {
	#[strenum(begin)]
	Read = 1,
	Write = 2,
	#[strenum(end)]
	Exec = 4,
}

#[test]
fn markers_bound_the_default_table() {
	assert_eq!(Abc::NAMES, ["A", "B", "C"]);
	assert_eq!(strenum::names!(Abc), ["A", "B", "C"]);
}

#[test]
fn enumerator_end_override_is_inclusive() {
	assert_eq!(strenum::names!(Abc, begin = A, end = B), ["A", "B"]);
	assert_eq!(strenum::names!(Abc, end = B), ["A", "B"]);
}

#[test]
fn underlying_end_override_is_exclusive() {
	assert_eq!(strenum::names!(Abc, begin = 0, end = 1), ["A"]);
	assert_eq!(strenum::names!(Abc, begin = 1, end = 3), ["B", "C"]);
}

#[test]
fn undeclared_integer_is_empty_and_skipped() {
	assert!(strenum::name!(Gappy, 4).is_empty());
	assert!(strenum::stringify::<Gappy>(7).is_empty());
	assert_eq!(Gappy::NAMES, ["First", "Second", "Third", "Last"]);
	assert!(!Gappy::NAMES.contains(&""));
}

#[test]
fn single_value_query_spells_enumerators() {
	assert_eq!(strenum::name!(Abc, C), "C");
	assert_eq!(strenum::name!(Gappy, Third), "Third");
	assert_eq!(strenum::name!(Signed, MinusThree), "MinusThree");
	assert_eq!(strenum::name!(Signed, -3), "MinusThree");
}

#[test]
fn enum_level_bounds_and_negative_values() {
	assert_eq!(Signed::NAMES, ["MinusThree", "Zero", "Two"]);
	assert_eq!(Signed::BEGIN, Bound::Underlying(-3));
	assert_eq!(Signed::END, Bound::Underlying(4));
	assert_eq!(Signed::MAX_SEARCH_SIZE, 16);
	assert_eq!(Signed::REPR, Repr::I32);
}

#[test]
fn raw_identifiers_are_unraw_in_names() {
	assert_eq!(Keywords::NAMES, ["Start", "type", "match", "Stop"]);
	assert_eq!(Keywords::NAME, "Keywords");
}

#[test]
fn unbounded_enum_needs_explicit_bounds() {
	assert_eq!(Unbounded::BEGIN_MARKER, None);
	assert_eq!(Unbounded::BEGIN, Bound::Unset);
	assert_eq!(
		strenum::try_checked_range::<Unbounded>(Unbounded::BEGIN, Unbounded::END),
		Err(StrenumError::MissingBegin)
	);
	assert_eq!(strenum::names!(Unbounded, begin = Alpha, end = Beta), ["Alpha", "Beta"]);
	assert_eq!(Unbounded::REPR, Repr::U16);
}

#[test]
fn range_wider_than_ceiling_is_rejected() {
	assert_eq!(
		strenum::try_checked_range::<Unbounded>(Bound::Underlying(0), Bound::Underlying(5000)),
		Err(StrenumError::ExceedsMaxSearchSize {
			width: 5000,
			max: strenum::MAX_SEARCH_SIZE
		})
	);
}

#[test]
fn bitflag_searcher_is_recorded_but_unsupported() {
	assert_eq!(Flags::SEARCHER, Searcher::Bitflag);
	let range = strenum::checked_range::<Flags>(Flags::BEGIN, Flags::END);
	assert_eq!(
		strenum::search::try_count::<Flags>(Flags::SEARCHER, range),
		Err(StrenumError::BitflagUnsupported)
	);
	assert_eq!(
		strenum::names!(Flags, searcher = Sequential),
		["Read", "Write", "Exec"]
	);
}

#[test]
fn enumerators_follow_declaration_order() {
	let values: Vec<i128> = Gappy::ENUMERATORS.iter().map(|e| e.value).collect();
	assert_eq!(values, [3, 5, 6, 10]);
	assert_eq!(Gappy::BEGIN_MARKER, Some(3));
	assert_eq!(Gappy::END_MARKER, Some(10));
}

#[test]
fn tables_are_deterministic() {
	const FIRST: [&str; 4] = strenum::names!(Gappy);
	const SECOND: [&str; 4] = strenum::names!(Gappy);
	assert_eq!(FIRST, SECOND);
	assert_eq!(FIRST.as_slice(), Gappy::NAMES);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Strenum)]
#[repr(u16, align(4))]
enum Aligned {
	#[strenum(begin)]
	Low = 1,
	#[strenum(end)]
	High = 3,
}

#[test]
fn repr_with_alignment_is_accepted() {
	assert_eq!(Aligned::REPR, Repr::U16);
	assert_eq!(Aligned::NAMES, ["Low", "High"]);
}

/// Runs the filling pass for `Signed` with a table length picked at run time.
fn search_sized(range: ScanRange, len: usize) -> Result<Vec<&'static str>, StrenumError> {
	use strenum::search::try_search;

	let sequential = Searcher::Sequential;
	match len {
		0 => try_search::<Signed, 0>(sequential, range).map(Vec::from),
		1 => try_search::<Signed, 1>(sequential, range).map(Vec::from),
		2 => try_search::<Signed, 2>(sequential, range).map(Vec::from),
		3 => try_search::<Signed, 3>(sequential, range).map(Vec::from),
		_ => panic!("`Signed` declares three enumerators in range, got {len}"),
	}
}

proptest! {
	#[test]
	fn probes_agree_with_declarations(value in 0i128..=12) {
		let name = strenum::stringify::<Gappy>(value);
		let declared = Gappy::ENUMERATORS.iter().position(|e| e.value == value);
		match declared {
			Some(index) => {
				prop_assert_eq!(name.as_str(), Gappy::NAMES[index]);
			}
			None => {
				prop_assert!(name.is_empty());
			}
		}
	}

	#[test]
	fn table_is_ascending_and_sized_by_declarations(begin in -3i128..=2, len in 1i128..=6) {
		let range = strenum::checked_range::<Signed>(Bound::Underlying(begin), Bound::Underlying(begin + len));
		let count = strenum::search::try_count::<Signed>(Searcher::Sequential, range).unwrap();
		let expected: Vec<&str> = Signed::ENUMERATORS
			.iter()
			.filter(|e| range.contains(e.value))
			.map(|e| strenum::stringify::<Signed>(e.value).as_str())
			.collect();
		prop_assert_eq!(count, expected.len());
		prop_assert_eq!(search_sized(range, count), Ok(expected));
	}
}
