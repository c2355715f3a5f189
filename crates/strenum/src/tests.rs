use pretty_assertions::assert_eq;

use crate::search::{try_count, try_search};
use crate::*;

/// Hand-written description with an alias: `Medium` and `Mid` share 2.
#[derive(Clone, Copy)]
struct Level;

impl Enumeration for Level {
	const NAME: &'static str = "Level";
	const REPR: Repr = Repr::U8;
	const ENUMERATORS: &'static [Enumerator] = &[
		Enumerator::new(1, render_signature!("Level", "Low")),
		Enumerator::new(2, render_signature!("Level", "Medium")),
		Enumerator::new(2, render_signature!("Level", "Mid")),
		Enumerator::new(5, render_signature!("Level", "High")),
	];
	const BEGIN_MARKER: Option<i128> = Some(1);
	const END_MARKER: Option<i128> = Some(5);
}

impl EnumInformation for Level {}

#[test]
fn first_alias_wins() {
	assert_eq!(stringify::<Level>(2), "Medium");
}

#[test]
fn undeclared_values_are_empty() {
	for value in [0, 3, 4, 6, 255, -1] {
		assert!(stringify::<Level>(value).is_empty(), "value {value}");
	}
}

#[test]
fn table_from_markers() {
	let range = checked_range::<Level>(Level::BEGIN, Level::END);
	assert_eq!(range, ScanRange { begin: 1, end: 6 });
	assert_eq!(try_count::<Level>(Searcher::Sequential, range), Ok(3));
	assert_eq!(
		try_search::<Level, 3>(Searcher::Sequential, range),
		Ok(["Low", "Medium", "High"])
	);
}

#[test]
fn names_macro_matches_manual_passes() {
	const TABLE: NameTable<3> = names!(Level);
	assert_eq!(TABLE, ["Low", "Medium", "High"]);
	assert_eq!(names!(Level, begin = 2, end = 5), ["Medium"]);
	assert_eq!(names!(Level, end = 2), ["Low"]);
}

#[test]
fn wrong_table_length_is_a_shape_mismatch() {
	let range = ScanRange { begin: 1, end: 6 };
	assert_eq!(
		try_search::<Level, 2>(Searcher::Sequential, range),
		Err(StrenumError::ShapeMismatch {
			expected: 2,
			found: 3
		})
	);
	assert_eq!(
		try_search::<Level, 4>(Searcher::Sequential, range),
		Err(StrenumError::ShapeMismatch {
			expected: 4,
			found: 3
		})
	);
}

#[test]
fn bitflag_searcher_is_unsupported() {
	let range = ScanRange { begin: 1, end: 6 };
	assert_eq!(
		try_count::<Level>(Searcher::Bitflag, range),
		Err(StrenumError::BitflagUnsupported)
	);
	assert_eq!(
		try_search::<Level, 3>(Searcher::Bitflag, range),
		Err(StrenumError::BitflagUnsupported)
	);
}

#[derive(Clone, Copy)]
struct Narrow;

impl Enumeration for Narrow {
	const NAME: &'static str = "Narrow";
	const REPR: Repr = Repr::I16;
	const ENUMERATORS: &'static [Enumerator] = &[
		Enumerator::new(-40, render_signature!("Narrow", "Cold")),
		Enumerator::new(40, render_signature!("Narrow", "Hot")),
	];
}

impl EnumInformation for Narrow {
	const MAX_SEARCH_SIZE: usize = 16;
}

#[test]
fn per_type_ceiling_applies() {
	assert_eq!(
		try_checked_range::<Narrow>(Bound::Enumerator(-40), Bound::Enumerator(40)),
		Err(StrenumError::ExceedsMaxSearchSize { width: 81, max: 16 })
	);
	assert_eq!(
		try_checked_range::<Narrow>(Bound::Underlying(-8), Bound::Underlying(8)),
		Ok(ScanRange { begin: -8, end: 8 })
	);
}

#[test]
fn defaults_without_markers_are_unset() {
	assert_eq!(Narrow::BEGIN, Bound::Unset);
	assert_eq!(Narrow::END, Bound::Unset);
	assert_eq!(Narrow::SEARCHER, Searcher::Sequential);
	assert_eq!(
		try_checked_range::<Narrow>(Narrow::BEGIN, Narrow::END),
		Err(StrenumError::MissingBegin)
	);
}

#[test]
fn negative_values_resolve() {
	assert_eq!(stringify::<Narrow>(-40), "Cold");
	assert_eq!(names!(Narrow, begin = -40, end = -39), ["Cold"]);
}

/// Hand-written description whose type name is a path.
#[derive(Clone, Copy)]
struct Paint;

impl Enumeration for Paint {
	const NAME: &'static str = "paint::Color";
	const REPR: Repr = Repr::U8;
	const ENUMERATORS: &'static [Enumerator] = &[
		Enumerator::new(0, render_signature!("paint::Color", "Red")),
		Enumerator::new(2, render_signature!("paint::Color", "Blue")),
	];
}

impl EnumInformation for Paint {}

#[test]
fn path_type_name_probes_undeclared_values() {
	assert_eq!(stringify::<Paint>(0), "Red");
	assert!(stringify::<Paint>(1).is_empty());
	assert_eq!(names!(Paint, begin = 0, end = 3), ["Red", "Blue"]);
}
