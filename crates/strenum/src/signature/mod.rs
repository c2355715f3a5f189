//! Recovering enumerator names from rendered signatures.
//!
//! A signature is the full text rendered for one probe parameterized by a
//! single enumeration value. When the value is a declared enumerator the text
//! ends in its qualified name (`Color::Red`); otherwise it ends in an integer
//! rendering such as `(enum Color)0x5` or `(Color)5`. The parser locates that
//! trailing segment and classifies it.

mod render;

pub use render::{SIGNATURE_CAPACITY, SignatureBuf, render_integer};

use crate::error::{Result, StrenumError};
use crate::fixed_string::FixedString;

/// Textual convention of a rendered signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureStyle {
	/// The value sits inside the last top-level `<...>` pair,
	/// e.g. `auto __cdecl strenum::stringify<Color::Red>(void)`.
	Bracketed,
	/// The value follows the last `::` or ` (` and runs to a trailing
	/// delimiter, e.g. `consteval auto strenum::stringify() [with auto Value = Color::Red]`.
	Qualified,
}

impl SignatureStyle {
	/// Style selected for this build.
	pub const ACTIVE: Self = crate::config::SIGNATURE_STYLE;
}

/// Byte range `start..end` of the candidate inside a signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
	/// First byte of the candidate.
	pub start: usize,
	/// One past the last byte of the candidate.
	pub end: usize,
}

/// Finds the candidate segment of `signature`.
///
/// Scans from the end toward the start. An empty signature yields an empty
/// span.
pub const fn locate(signature: FixedString<'_>, style: SignatureStyle) -> Result<Span> {
	if signature.is_empty() {
		return Ok(Span { start: 0, end: 0 });
	}
	match style {
		SignatureStyle::Bracketed => locate_bracketed(signature),
		SignatureStyle::Qualified => locate_qualified(signature),
	}
}

/// Outermost trailing `<...>` pair, or a `::` directly inside it.
const fn locate_bracketed(signature: FixedString<'_>) -> Result<Span> {
	let len = signature.len();
	let mut depth: usize = 0;
	let mut end = 0;
	let mut i = 0;
	while i != len {
		let index = len - 1 - i;
		let c = signature.byte(index);
		if c == b'>' {
			if depth == 0 {
				end = index;
			}
			depth += 1;
		} else if c == b'<' {
			// An unmatched `<` (e.g. from an operator name) carries no structure.
			if depth != 0 {
				depth -= 1;
				if depth == 0 {
					return Ok(Span { start: index + 1, end });
				}
			}
		} else if index > 0 && depth == 1 && c == b':' && signature.byte(index - 1) == b':' {
			return Ok(Span { start: index + 1, end });
		}
		i += 1;
	}
	Err(StrenumError::UnrecognizedSignature)
}

/// Last `::` qualifier or ` (` opening, running to the final delimiter.
const fn locate_qualified(signature: FixedString<'_>) -> Result<Span> {
	let len = signature.len();
	let mut i = 0;
	while i != len {
		let index = len - 1 - i;
		let c = signature.byte(index);
		let qualifier = index > 0 && c == b':' && signature.byte(index - 1) == b':';
		let argument_list = index + 1 < len && c == b' ' && signature.byte(index + 1) == b'(';
		if qualifier || argument_list {
			let start = index + 1;
			let end = len - 1;
			if start > end {
				return Err(StrenumError::UnrecognizedSignature);
			}
			return Ok(Span { start, end });
		}
		i += 1;
	}
	Err(StrenumError::UnrecognizedSignature)
}

/// Returns true if `candidate` is how an integer (not an enumerator) renders.
///
/// Empty text, a leading digit, or a leading `(` cast all count.
pub const fn is_integer_rendering(candidate: FixedString<'_>) -> bool {
	candidate.is_empty() || candidate.starts_with_digit() || candidate.byte(0) == b'('
}

/// Parses `signature`, returning the enumerator name or an empty string.
pub const fn try_parse<'a>(
	signature: FixedString<'a>,
	style: SignatureStyle,
) -> Result<FixedString<'a>> {
	let span = match locate(signature, style) {
		Ok(span) => span,
		Err(err) => return Err(err),
	};
	let candidate = signature.substr(span.start, span.end);
	if is_integer_rendering(candidate) {
		Ok(FixedString::EMPTY)
	} else {
		Ok(candidate)
	}
}

/// Parses `signature`, failing constant evaluation on unrecognized text.
pub const fn parse<'a>(signature: FixedString<'a>, style: SignatureStyle) -> FixedString<'a> {
	match try_parse(signature, style) {
		Ok(name) => name,
		Err(err) => err.raise(),
	}
}
