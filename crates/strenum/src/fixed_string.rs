//! Immutable text values usable inside constant evaluation.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;

/// A text value whose length is fixed once constructed.
///
/// Every operation is a `const fn` so signatures and names can be sliced and
/// compared while a table is being built. Out-of-bounds slicing panics, which
/// inside a `const` context is a compile error.
#[derive(Clone, Copy, Default)]
pub struct FixedString<'a> {
	text: &'a str,
}

impl<'a> FixedString<'a> {
	/// The empty string, returned for values that are not enumerators.
	pub const EMPTY: FixedString<'static> = FixedString { text: "" };

	/// Wraps `text`.
	pub const fn new(text: &'a str) -> Self {
		Self { text }
	}

	/// Length in bytes.
	#[inline]
	pub const fn len(&self) -> usize {
		self.text.len()
	}

	/// Returns true if the string has no bytes.
	#[inline]
	pub const fn is_empty(&self) -> bool {
		self.text.is_empty()
	}

	/// Byte at `index`.
	///
	/// # Panics
	///
	/// Panics if `index >= len()`.
	#[inline]
	pub const fn byte(&self, index: usize) -> u8 {
		self.text.as_bytes()[index]
	}

	/// Returns the bytes in `start..end` as a new string.
	///
	/// # Panics
	///
	/// Panics if `start > end`, `end > len()`, or either index splits a
	/// UTF-8 sequence.
	pub const fn substr(&self, start: usize, end: usize) -> FixedString<'a> {
		assert!(start <= end, "substr start is past its end");
		assert!(end <= self.len(), "substr end is out of bounds");
		let (_, tail) = self.text.as_bytes().split_at(start);
		let (bytes, _) = tail.split_at(end - start);
		match std::str::from_utf8(bytes) {
			Ok(text) => FixedString { text },
			Err(_) => panic!("substr bounds split a UTF-8 sequence"),
		}
	}

	/// Borrows the text as a `&str`.
	#[inline]
	pub const fn as_str(&self) -> &'a str {
		self.text
	}

	/// Returns true if the first byte is an ASCII digit.
	pub const fn starts_with_digit(&self) -> bool {
		!self.is_empty() && self.byte(0).is_ascii_digit()
	}

	/// Byte-wise equality usable in `const` contexts.
	pub const fn const_eq(&self, other: &FixedString<'_>) -> bool {
		matches!(self.const_cmp(other), Ordering::Equal)
	}

	/// Lexicographic byte ordering usable in `const` contexts.
	pub const fn const_cmp(&self, other: &FixedString<'_>) -> Ordering {
		let lhs = self.text.as_bytes();
		let rhs = other.text.as_bytes();
		let mut i = 0;
		while i < lhs.len() && i < rhs.len() {
			if lhs[i] < rhs[i] {
				return Ordering::Less;
			}
			if lhs[i] > rhs[i] {
				return Ordering::Greater;
			}
			i += 1;
		}
		if lhs.len() < rhs.len() {
			Ordering::Less
		} else if lhs.len() > rhs.len() {
			Ordering::Greater
		} else {
			Ordering::Equal
		}
	}
}

impl Deref for FixedString<'_> {
	type Target = str;

	fn deref(&self) -> &str {
		self.text
	}
}

impl AsRef<str> for FixedString<'_> {
	fn as_ref(&self) -> &str {
		self.text
	}
}

impl<'a> From<&'a str> for FixedString<'a> {
	fn from(text: &'a str) -> Self {
		Self::new(text)
	}
}

impl PartialEq for FixedString<'_> {
	fn eq(&self, other: &Self) -> bool {
		self.text == other.text
	}
}

impl Eq for FixedString<'_> {}

impl PartialEq<str> for FixedString<'_> {
	fn eq(&self, other: &str) -> bool {
		self.text == other
	}
}

impl PartialEq<&str> for FixedString<'_> {
	fn eq(&self, other: &&str) -> bool {
		self.text == *other
	}
}

impl PartialOrd for FixedString<'_> {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for FixedString<'_> {
	fn cmp(&self, other: &Self) -> Ordering {
		self.const_cmp(other)
	}
}

impl std::hash::Hash for FixedString<'_> {
	fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
		self.text.hash(state);
	}
}

impl fmt::Display for FixedString<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.text)
	}
}

impl fmt::Debug for FixedString<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(self.text, f)
	}
}
