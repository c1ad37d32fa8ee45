use std::io::{Read, Write};

use tracing::trace;

use crate::nbt::{Codec, NbtError, ReadNbt, Result, TypeId, Value, WriteNbt};

/// Homogeneous list of unnamed values sharing one element type.
#[derive(Debug, Clone, PartialEq)]
pub struct ListTag {
	element_type: TypeId,
	items: Vec<Value>,
}

impl Default for ListTag {
	fn default() -> Self {
		Self::new(TypeId::END)
	}
}

impl ListTag {
	/// Empty list declaring `element_type`.
	pub fn new(element_type: TypeId) -> Self {
		Self {
			element_type,
			items: Vec::new(),
		}
	}

	/// List from `items`, all of which must have `element_type`.
	pub fn with_items(element_type: TypeId, items: Vec<Value>) -> Result<Self> {
		if let Some(bad) = items.iter().find(|item| item.tag_type() != element_type) {
			return Err(NbtError::ListTypeMismatch {
				expected: element_type,
				got: bad.tag_type(),
			});
		}
		Ok(Self { element_type, items })
	}

	/// Declared element type.
	pub fn element_type(&self) -> TypeId {
		self.element_type
	}

	/// Number of elements.
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// `true` when the list holds no elements.
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Element at `index`.
	pub fn get(&self, index: usize) -> Option<&Value> {
		self.items.get(index)
	}

	/// Iterate elements in order.
	pub fn iter(&self) -> std::slice::Iter<'_, Value> {
		self.items.iter()
	}

	/// Append `value`. An empty `END`-typed list adopts the first element's type.
	pub fn push(&mut self, value: impl Into<Value>) -> Result<()> {
		let value = value.into();
		let got = value.tag_type();
		if self.items.is_empty() && self.element_type.is_end() {
			self.element_type = got;
		} else if got != self.element_type {
			return Err(NbtError::ListTypeMismatch {
				expected: self.element_type,
				got,
			});
		}
		self.items.push(value);
		Ok(())
	}

	/// Remove and return the element at `index`.
	pub fn remove(&mut self, index: usize) -> Option<Value> {
		(index < self.items.len()).then(|| self.items.remove(index))
	}

	pub(crate) fn encode(&self, codec: &Codec<'_>, writer: &mut dyn Write, depth: u32) -> Result<()> {
		writer.write_type_id(self.element_type)?;
		writer.write_i32(codec.encode_len("list", self.items.len())?)?;
		for item in &self.items {
			codec.write_payload(writer, item, depth + 1)?;
		}
		Ok(())
	}

	pub(crate) fn decode(&mut self, codec: &Codec<'_>, reader: &mut dyn Read, depth: u32) -> Result<()> {
		let element_type = reader.read_type_id()?;
		let count = codec.decode_len("list", reader.read_i32()?)?;
		if element_type.is_end() && count > 0 {
			return Err(NbtError::InvalidListType { id: element_type, count });
		}
		trace!(element_type = %element_type, count, depth, "decode list");

		self.element_type = element_type;
		self.items.clear();
		self.items.reserve(codec.prealloc(count));
		for _ in 0..count {
			self.items.push(codec.read_payload(reader, element_type, depth + 1)?);
		}
		Ok(())
	}
}

impl<'a> IntoIterator for &'a ListTag {
	type Item = &'a Value;
	type IntoIter = std::slice::Iter<'a, Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
