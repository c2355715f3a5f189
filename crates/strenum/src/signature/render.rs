use super::SignatureStyle;
use crate::fixed_string::FixedString;

/// Maximum length of a signature rendered for an undeclared value.
pub const SIGNATURE_CAPACITY: usize = 256;

const BRACKETED_PREFIX: &str = "auto __cdecl strenum::stringify<";
const BRACKETED_SUFFIX: &str = ">(void)";
const QUALIFIED_PREFIX: &str = "consteval auto strenum::stringify() [with auto Value = ";
const QUALIFIED_SUFFIX: &str = "]";

/// Renders the signature text of a declared enumerator.
///
/// Takes the type name and the variant name as string literals and expands to
/// a `&'static str` in the convention this crate was built with.
///
/// ```
/// let signature = strenum::render_signature!("Color", "Red");
/// assert!(signature.contains("Color::Red"));
/// ```
#[cfg(not(feature = "qualified-signature"))]
#[macro_export]
macro_rules! render_signature {
	($ty:literal, $variant:literal) => {
		::core::concat!("auto __cdecl strenum::stringify<", $ty, "::", $variant, ">(void)")
	};
}

/// Renders the signature text of a declared enumerator.
///
/// Takes the type name and the variant name as string literals and expands to
/// a `&'static str` in the convention this crate was built with.
///
/// ```
/// let signature = strenum::render_signature!("Color", "Red");
/// assert!(signature.contains("Color::Red"));
/// ```
#[cfg(feature = "qualified-signature")]
#[macro_export]
macro_rules! render_signature {
	($ty:literal, $variant:literal) => {
		::core::concat!(
			"consteval auto strenum::stringify() [with auto Value = ",
			$ty,
			"::",
			$variant,
			"]"
		)
	};
}

/// Fixed-capacity buffer holding a signature built during constant evaluation.
#[derive(Clone, Copy)]
pub struct SignatureBuf {
	bytes: [u8; SIGNATURE_CAPACITY],
	len: usize,
}

impl SignatureBuf {
	const fn new() -> Self {
		Self {
			bytes: [0; SIGNATURE_CAPACITY],
			len: 0,
		}
	}

	const fn push_byte(&mut self, b: u8) {
		assert!(self.len < SIGNATURE_CAPACITY, "rendered signature exceeds its capacity");
		self.bytes[self.len] = b;
		self.len += 1;
	}

	const fn push_str(&mut self, text: &str) {
		let bytes = text.as_bytes();
		let mut i = 0;
		while i < bytes.len() {
			self.push_byte(bytes[i]);
			i += 1;
		}
	}

	const fn push_magnitude(&mut self, mut magnitude: u128, radix: u128) {
		let mut digits = [0u8; 40];
		let mut count = 0;
		loop {
			let digit = (magnitude % radix) as u8;
			digits[count] = if digit < 10 { b'0' + digit } else { b'a' + digit - 10 };
			count += 1;
			magnitude /= radix;
			if magnitude == 0 {
				break;
			}
		}
		while count > 0 {
			count -= 1;
			self.push_byte(digits[count]);
		}
	}

	/// Length of the rendered text in bytes.
	pub const fn len(&self) -> usize {
		self.len
	}

	/// Returns true if nothing has been rendered.
	pub const fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Borrows the rendered text.
	pub const fn as_fixed(&self) -> FixedString<'_> {
		let (bytes, _) = self.bytes.split_at(self.len);
		match std::str::from_utf8(bytes) {
			Ok(text) => FixedString::new(text),
			Err(_) => panic!("rendered signature is not valid UTF-8"),
		}
	}
}

/// Last `::`-separated segment of `path`.
const fn last_segment(path: &str) -> &str {
	let text = FixedString::new(path);
	let mut i = text.len();
	while i > 1 {
		if text.byte(i - 1) == b':' && text.byte(i - 2) == b':' {
			return text.substr(i, text.len()).as_str();
		}
		i -= 1;
	}
	path
}

/// Renders the signature of an integer value of `type_name` that matches no
/// declared enumerator.
///
/// The bracketed convention renders a hexadecimal cast (`(enum Color)0x5`),
/// the qualified one a decimal cast (`(Color)5`). A path such as
/// `paint::Color` is cast with its last segment only, so the cast never
/// contains a qualifier.
pub const fn render_integer(type_name: &str, value: i128, style: SignatureStyle) -> SignatureBuf {
	let type_name = last_segment(type_name);
	let mut buf = SignatureBuf::new();
	match style {
		SignatureStyle::Bracketed => {
			buf.push_str(BRACKETED_PREFIX);
			buf.push_str("(enum ");
			buf.push_str(type_name);
			buf.push_byte(b')');
			if value < 0 {
				buf.push_byte(b'-');
			}
			buf.push_str("0x");
			buf.push_magnitude(value.unsigned_abs(), 16);
			buf.push_str(BRACKETED_SUFFIX);
		}
		SignatureStyle::Qualified => {
			buf.push_str(QUALIFIED_PREFIX);
			buf.push_byte(b'(');
			buf.push_str(type_name);
			buf.push_byte(b')');
			if value < 0 {
				buf.push_byte(b'-');
			}
			buf.push_magnitude(value.unsigned_abs(), 10);
			buf.push_str(QUALIFIED_SUFFIX);
		}
	}
	buf
}
