//! Build-time configuration.

use crate::signature::SignatureStyle;

/// Scan width used when an enumeration does not set its own.
pub const DEFAULT_MAX_SEARCH_SIZE: usize = 1024;

/// Global ceiling on how many underlying values a single table may probe.
///
/// Taken from the `STRENUM_MAX_SEARCH_SIZE` environment variable when this
/// crate is compiled, otherwise [`DEFAULT_MAX_SEARCH_SIZE`]. Per-type
/// overrides go through [`EnumInformation::MAX_SEARCH_SIZE`].
///
/// [`EnumInformation::MAX_SEARCH_SIZE`]: crate::EnumInformation::MAX_SEARCH_SIZE
pub const MAX_SEARCH_SIZE: usize = match option_env!("STRENUM_MAX_SEARCH_SIZE") {
	Some(value) => match parse_usize(value) {
		Some(size) => size,
		None => panic!("STRENUM_MAX_SEARCH_SIZE must be a decimal integer"),
	},
	None => DEFAULT_MAX_SEARCH_SIZE,
};

/// Convention used when rendering signatures.
pub const SIGNATURE_STYLE: SignatureStyle = if cfg!(feature = "qualified-signature") {
	SignatureStyle::Qualified
} else {
	SignatureStyle::Bracketed
};

/// Parses an unsigned decimal, ignoring surrounding ASCII whitespace.
pub(crate) const fn parse_usize(text: &str) -> Option<usize> {
	let bytes = text.as_bytes();
	let mut start = 0;
	let mut end = bytes.len();
	while start < end && bytes[start].is_ascii_whitespace() {
		start += 1;
	}
	while end > start && bytes[end - 1].is_ascii_whitespace() {
		end -= 1;
	}
	if start == end {
		return None;
	}

	let mut value: usize = 0;
	let mut i = start;
	while i < end {
		let b = bytes[i];
		if !b.is_ascii_digit() {
			return None;
		}
		value = match value.checked_mul(10) {
			Some(v) => match v.checked_add((b - b'0') as usize) {
				Some(v) => v,
				None => return None,
			},
			None => return None,
		};
		i += 1;
	}
	Some(value)
}
