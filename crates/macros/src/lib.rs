//! Procedural macros for strenum.
//!
//! Provides `#[derive(Strenum)]`, which records the rendered signature of
//! every variant so `strenum` can build name tables during constant
//! evaluation.

use proc_macro::TokenStream;

/// Attribute parsing for `#[strenum(...)]`.
mod attrs;
/// Strenum derive macro implementation.
mod derive;

/// Derives `strenum::Enumeration` and `strenum::EnumInformation`.
///
/// ```ignore
/// #[derive(Clone, Copy, Strenum)]
/// #[repr(u8)]
/// #[strenum(max_search_size = 64)]
/// enum Color {
///     #[strenum(begin)]
///     Red = 1,
///     Green = 2,
///     #[strenum(end)]
///     Blue = 4,
/// }
///
/// assert_eq!(Color::NAMES, ["Red", "Green", "Blue"]);
/// ```
///
/// Enum attributes, all optional:
///
/// - `begin = Variant | int` - First probed value
/// - `end = Variant | int` - Last probed value (inclusive for a variant, exclusive for an int)
/// - `searcher = Sequential | Bitflag` - Range search strategy
/// - `max_search_size = N` - Per-type scan width ceiling
///
/// Variant attributes:
///
/// - `#[strenum(begin)]` / `#[strenum(end)]` - Sentinel markers for the default range
///
/// When both ends of the range are known from the declaration, an inherent
/// `NAMES: &'static [&'static str]` constant is generated as well.
#[proc_macro_derive(Strenum, attributes(strenum))]
pub fn derive_strenum(input: TokenStream) -> TokenStream {
	derive::derive_strenum(input)
}
