use std::fmt;

/// One-byte discriminator identifying a tag's concrete variant.
///
/// `0` is the terminator, `1..=11` are the built-in variants, `12..=19` are
/// held back, and `20..=255` are free for custom registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeId(pub u8);

impl TypeId {
	/// Terminator marking the end of an open-ended sequence.
	pub const END: Self = Self(0);
	/// Signed 8-bit integer.
	pub const BYTE: Self = Self(1);
	/// Signed 16-bit integer.
	pub const SHORT: Self = Self(2);
	/// Signed 32-bit integer.
	pub const INT: Self = Self(3);
	/// Signed 64-bit integer.
	pub const LONG: Self = Self(4);
	/// 32-bit float.
	pub const FLOAT: Self = Self(5);
	/// 64-bit float.
	pub const DOUBLE: Self = Self(6);
	/// Length-prefixed signed bytes.
	pub const BYTE_ARRAY: Self = Self(7);
	/// Length-prefixed UTF-8 text.
	pub const STRING: Self = Self(8);
	/// Homogeneous list.
	pub const LIST: Self = Self(9);
	/// Named-entry map closed by a terminator.
	pub const COMPOUND: Self = Self(10);
	/// Length-prefixed signed 32-bit integers.
	pub const INT_ARRAY: Self = Self(11);

	/// First identifier available for custom registration.
	pub const FIRST_CUSTOM: u8 = 20;

	/// Raw byte value.
	pub const fn raw(self) -> u8 {
		self.0
	}

	/// `true` for the terminator identifier.
	pub const fn is_end(self) -> bool {
		self.0 == Self::END.0
	}

	/// `true` for identifiers of the built-in variant set.
	pub const fn is_builtin(self) -> bool {
		self.0 >= Self::BYTE.0 && self.0 <= Self::INT_ARRAY.0
	}

	/// `true` for the terminator and the held-back range below custom ids.
	pub const fn is_reserved(self) -> bool {
		self.is_end() || (self.0 > Self::INT_ARRAY.0 && self.0 < Self::FIRST_CUSTOM)
	}

	/// `true` for identifiers open to custom registration.
	pub const fn is_custom(self) -> bool {
		self.0 >= Self::FIRST_CUSTOM
	}

	/// Stable lowercase label for the terminator and built-in variants.
	pub fn builtin_label(self) -> Option<&'static str> {
		let label = match self {
			Self::END => "end",
			Self::BYTE => "byte",
			Self::SHORT => "short",
			Self::INT => "int",
			Self::LONG => "long",
			Self::FLOAT => "float",
			Self::DOUBLE => "double",
			Self::BYTE_ARRAY => "byte_array",
			Self::STRING => "string",
			Self::LIST => "list",
			Self::COMPOUND => "compound",
			Self::INT_ARRAY => "int_array",
			_ => return None,
		};
		Some(label)
	}
}

impl From<u8> for TypeId {
	fn from(raw: u8) -> Self {
		Self(raw)
	}
}

impl fmt::Display for TypeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.builtin_label() {
			Some(label) => write!(f, "{label}({})", self.0),
			None => write!(f, "custom({})", self.0),
		}
	}
}
