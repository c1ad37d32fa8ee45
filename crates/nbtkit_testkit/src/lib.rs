//! Shared test helpers for workspace crates.
//!
//! The builders here write wire bytes by hand so tests can feed the decoder
//! input the encoder would never produce.

/// Terminator identifier byte.
pub const END: u8 = 0;
/// Int identifier byte.
pub const INT: u8 = 3;
/// Byte array identifier byte.
pub const BYTE_ARRAY: u8 = 7;
/// String identifier byte.
pub const STRING: u8 = 8;
/// List identifier byte.
pub const LIST: u8 = 9;
/// Compound identifier byte.
pub const COMPOUND: u8 = 10;
/// Struct identifier byte.
pub const STRUCT: u8 = 20;

/// Big-endian byte writer for hand-built NBT streams.
#[derive(Debug, Default, Clone)]
pub struct WireBuilder {
	bytes: Vec<u8>,
}

impl WireBuilder {
	/// Empty builder.
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a type identifier byte.
	pub fn id(mut self, id: u8) -> Self {
		self.bytes.push(id);
		self
	}

	/// Append a `u16`-length-prefixed name or string payload.
	pub fn string(mut self, text: &str) -> Self {
		let len = u16::try_from(text.len()).unwrap_or(u16::MAX);
		self.bytes.extend_from_slice(&len.to_be_bytes());
		self.bytes.extend_from_slice(&text.as_bytes()[..usize::from(len)]);
		self
	}

	/// Append a node header: identifier plus name.
	pub fn header(self, id: u8, name: &str) -> Self {
		self.id(id).string(name)
	}

	/// Append a big-endian `i32`.
	pub fn i32(mut self, value: i32) -> Self {
		self.bytes.extend_from_slice(&value.to_be_bytes());
		self
	}

	/// Append raw bytes.
	pub fn raw(mut self, bytes: &[u8]) -> Self {
		self.bytes.extend_from_slice(bytes);
		self
	}

	/// Finished byte stream.
	pub fn finish(self) -> Vec<u8> {
		self.bytes
	}
}

/// Root list nested `levels` deep, each level holding one list, innermost empty.
pub fn nested_list_chain(levels: usize) -> Vec<u8> {
	let mut builder = WireBuilder::new().header(LIST, "");
	for _ in 1..levels {
		builder = builder.id(LIST).i32(1);
	}
	builder.id(END).i32(0).finish()
}

/// Root struct nested `levels` deep, each level holding one struct, innermost empty.
pub fn nested_struct_chain(levels: usize) -> Vec<u8> {
	let mut builder = WireBuilder::new().header(STRUCT, "");
	for _ in 1..levels {
		builder = builder.i32(1).header(STRUCT, "");
	}
	builder.i32(0).finish()
}
