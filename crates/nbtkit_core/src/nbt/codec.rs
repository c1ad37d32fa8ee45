use std::io::{Read, Write};

use crate::nbt::{NbtError, ReadNbt, Result, Tag, TypeId, TypeRegistry, Value, WriteNbt};

/// Upper bound on storage reserved from a decoded length prefix.
///
/// Counts come from untrusted input; containers grow past this as elements
/// actually decode.
pub const PREALLOC_LIMIT: usize = 4096;

/// Runtime limits for encoding and decoding.
#[derive(Debug, Clone)]
pub struct CodecOptions {
	/// Maximum container nesting depth.
	pub max_depth: u32,
	/// Maximum element count for arrays, lists, and structs.
	pub max_len: usize,
}

impl Default for CodecOptions {
	fn default() -> Self {
		Self {
			max_depth: 512,
			max_len: 16 * 1024 * 1024,
		}
	}
}

/// Recursive encode/decode driver over a frozen [`TypeRegistry`].
///
/// The codec owns node framing (identifier and name) and depth bookkeeping.
/// Variants only read and write their payload. A root node's payload sits at
/// depth 1 and every container passes its children one level deeper; a
/// container payload deeper than `max_depth` fails with
/// [`NbtError::DepthExceeded`].
#[derive(Debug, Clone)]
pub struct Codec<'r> {
	registry: &'r TypeRegistry,
	options: CodecOptions,
}

impl<'r> Codec<'r> {
	/// Codec with default limits.
	pub fn new(registry: &'r TypeRegistry) -> Self {
		Self::with_options(registry, CodecOptions::default())
	}

	/// Codec with explicit limits.
	pub fn with_options(registry: &'r TypeRegistry, options: CodecOptions) -> Self {
		Self { registry, options }
	}

	/// Registry used to resolve identifiers.
	pub fn registry(&self) -> &'r TypeRegistry {
		self.registry
	}

	/// Active limits.
	pub fn options(&self) -> &CodecOptions {
		&self.options
	}

	/// Encode one named node: identifier, name, then payload at `depth + 1`.
	pub fn write_named(&self, writer: &mut dyn Write, name: &str, value: &Value, depth: u32) -> Result<()> {
		writer.write_type_id(value.tag_type())?;
		writer.write_string(name)?;
		self.write_payload(writer, value, depth + 1)
	}

	/// Encode one named node from a [`Tag`].
	pub fn write_tag(&self, writer: &mut dyn Write, tag: &Tag, depth: u32) -> Result<()> {
		self.write_named(writer, tag.name(), tag.value(), depth)
	}

	/// Encode a payload without framing, as used for list elements.
	pub fn write_payload(&self, writer: &mut dyn Write, value: &Value, depth: u32) -> Result<()> {
		if value.is_container() {
			self.check_depth(depth)?;
		}
		value.encode(self, writer, depth)
	}

	/// Decode one named node.
	///
	/// Returns `None` when the identifier is the terminator; the caller
	/// decides whether that ends its sequence or is malformed.
	pub fn read_named(&self, reader: &mut dyn Read, depth: u32) -> Result<Option<Tag>> {
		let id = reader.read_type_id()?;
		if id.is_end() {
			return Ok(None);
		}

		let mut value = self.registry.instantiate(id)?;
		let name = reader.read_string()?;
		self.read_into(reader, &mut value, depth + 1)?;
		Ok(Some(Tag::new(name, value)))
	}

	/// Decode an unframed payload of type `id`, as used for list elements.
	pub fn read_payload(&self, reader: &mut dyn Read, id: TypeId, depth: u32) -> Result<Value> {
		let mut value = self.registry.instantiate(id)?;
		self.read_into(reader, &mut value, depth)?;
		Ok(value)
	}

	fn read_into(&self, reader: &mut dyn Read, value: &mut Value, depth: u32) -> Result<()> {
		if value.is_container() {
			self.check_depth(depth)?;
		}
		value.decode(self, reader, depth)
	}

	/// Fail when a container payload at `depth` is past the ceiling.
	pub fn check_depth(&self, depth: u32) -> Result<()> {
		if depth > self.options.max_depth {
			return Err(NbtError::DepthExceeded {
				max_depth: self.options.max_depth,
			});
		}
		Ok(())
	}

	/// Validate a decoded signed length prefix.
	pub fn decode_len(&self, kind: &'static str, len: i32) -> Result<usize> {
		let len = usize::try_from(len).map_err(|_| NbtError::NegativeLength { kind, len })?;
		if len > self.options.max_len {
			return Err(NbtError::LengthTooLarge {
				kind,
				len,
				max: self.options.max_len,
			});
		}
		Ok(len)
	}

	/// Capacity to reserve for `len` decoded elements.
	pub fn prealloc(&self, len: usize) -> usize {
		len.min(PREALLOC_LIMIT)
	}

	/// Convert an in-memory length to its signed prefix.
	pub fn encode_len(&self, kind: &'static str, len: usize) -> Result<i32> {
		i32::try_from(len).map_err(|_| NbtError::LengthTooLarge {
			kind,
			len,
			max: i32::MAX as usize,
		})
	}

	/// Read the named root tag of a stream.
	pub fn read_root(&self, reader: &mut dyn Read) -> Result<Tag> {
		self.read_named(reader, 0)?.ok_or(NbtError::UnexpectedEnd)
	}

	/// Write `tag` as the named root of a stream.
	pub fn write_root(&self, writer: &mut dyn Write, tag: &Tag) -> Result<()> {
		self.write_tag(writer, tag, 0)
	}

	/// Decode the root tag from an in-memory buffer.
	pub fn decode_slice(&self, bytes: &[u8]) -> Result<Tag> {
		let mut reader = bytes;
		self.read_root(&mut reader)
	}

	/// Encode `tag` as a root into a fresh buffer.
	pub fn encode_to_vec(&self, tag: &Tag) -> Result<Vec<u8>> {
		let mut out = Vec::new();
		self.write_root(&mut out, tag)?;
		Ok(out)
	}
}
