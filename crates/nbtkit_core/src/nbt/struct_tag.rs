use std::any::Any;
use std::borrow::Cow;
use std::io::{Read, Write};

use tracing::trace;

use crate::nbt::display::join_block;
use crate::nbt::{Codec, CompoundTag, CustomTag, ListTag, NbtError, Number, ReadNbt, Result, Tag, TypeId, TypeRegistry, Value, WriteNbt};

/// Ordered, fixed-length, heterogeneous sequence of tags.
///
/// Elements keep their order, may repeat, and are owned exclusively by the
/// struct. On the wire the payload is an `i32` element count followed by that
/// many full named nodes; a terminator among them is malformed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StructTag {
	elements: Vec<Tag>,
}

impl StructTag {
	/// Identifier the struct variant registers under.
	pub const TYPE_ID: TypeId = TypeId(20);

	/// Bind the struct factory in `registry`.
	pub fn register(registry: &mut TypeRegistry) -> Result<()> {
		registry.register(Self::TYPE_ID, || Box::new(Self::new()))
	}

	/// Empty struct.
	pub fn new() -> Self {
		Self::default()
	}

	/// Struct owning `elements` in order.
	pub fn with_elements(elements: Vec<Tag>) -> Self {
		Self { elements }
	}

	/// Named tag wrapping a struct; `None` starts it empty.
	pub fn tag(name: impl Into<String>, elements: Option<Vec<Tag>>) -> Tag {
		Tag::new(name, Self::with_elements(elements.unwrap_or_default()))
	}

	/// Number of elements.
	pub fn len(&self) -> usize {
		self.elements.len()
	}

	/// `true` when the struct holds no elements.
	pub fn is_empty(&self) -> bool {
		self.elements.is_empty()
	}

	/// Iterate elements in order.
	pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
		self.elements.iter()
	}

	/// Drop every element.
	pub fn clear(&mut self) {
		self.elements = Vec::new();
	}

	/// Drop every element and pre-size storage for `capacity` more.
	pub fn clear_with_capacity(&mut self, capacity: usize) {
		self.elements = Vec::with_capacity(capacity);
	}

	/// Append a deep copy of `tag`; later changes to `tag` do not reach the struct.
	pub fn append(&mut self, tag: &Tag) {
		self.elements.push(tag.deep_copy());
	}

	/// Append `tag`, taking ownership.
	pub fn push(&mut self, tag: Tag) {
		self.elements.push(tag);
	}

	/// Append a boolean as a byte element.
	pub fn append_boolean(&mut self, value: bool) {
		self.push(Tag::unnamed(value));
	}

	/// Append a byte element.
	pub fn append_byte(&mut self, value: i8) {
		self.push(Tag::unnamed(value));
	}

	/// Append a short element.
	pub fn append_short(&mut self, value: i16) {
		self.push(Tag::unnamed(value));
	}

	/// Append an int element.
	pub fn append_int(&mut self, value: i32) {
		self.push(Tag::unnamed(value));
	}

	/// Append a long element.
	pub fn append_long(&mut self, value: i64) {
		self.push(Tag::unnamed(value));
	}

	/// Append a float element.
	pub fn append_float(&mut self, value: f32) {
		self.push(Tag::unnamed(value));
	}

	/// Append a double element.
	pub fn append_double(&mut self, value: f64) {
		self.push(Tag::unnamed(value));
	}

	/// Append a string element.
	pub fn append_string(&mut self, value: impl Into<String>) {
		self.push(Tag::unnamed(value.into()));
	}

	/// Append a byte array element.
	pub fn append_byte_array(&mut self, value: Vec<i8>) {
		self.push(Tag::unnamed(value));
	}

	/// Append an int array element.
	pub fn append_int_array(&mut self, value: Vec<i32>) {
		self.push(Tag::unnamed(value));
	}

	/// Append a list element; every item must have `element_type`.
	pub fn append_list(&mut self, element_type: TypeId, items: Vec<Value>) -> Result<()> {
		let list = ListTag::with_items(element_type, items)?;
		self.push(Tag::unnamed(list));
		Ok(())
	}

	/// Element at `index`, `None` when out of range.
	pub fn get(&self, index: usize) -> Option<&Tag> {
		if index >= self.elements.len() {
			return None;
		}
		Some(&self.elements[index])
	}

	/// Mutable element at `index`, `None` when out of range.
	pub fn get_mut(&mut self, index: usize) -> Option<&mut Tag> {
		self.elements.get_mut(index)
	}

	fn value_at(&self, index: usize) -> Option<&Value> {
		self.get(index).map(Tag::value)
	}

	fn number_at(&self, index: usize) -> Number {
		self.value_at(index).and_then(Value::to_number).unwrap_or_default()
	}

	/// Byte element at `index` read as a boolean; `false` on mismatch.
	pub fn get_boolean(&self, index: usize) -> bool {
		self.get_byte(index) > 0
	}

	/// Byte element at `index`; `0` on type mismatch or out of range.
	pub fn get_byte(&self, index: usize) -> i8 {
		self.value_at(index).and_then(Value::as_i8).unwrap_or(0)
	}

	/// Short element at `index`; `0` on type mismatch or out of range.
	pub fn get_short(&self, index: usize) -> i16 {
		self.value_at(index).and_then(Value::as_i16).unwrap_or(0)
	}

	/// Int element at `index`; `0` on type mismatch or out of range.
	pub fn get_int(&self, index: usize) -> i32 {
		self.value_at(index).and_then(Value::as_i32).unwrap_or(0)
	}

	/// Long element at `index`; `0` on type mismatch or out of range.
	pub fn get_long(&self, index: usize) -> i64 {
		self.value_at(index).and_then(Value::as_i64).unwrap_or(0)
	}

	/// Float element at `index`; `0.0` on type mismatch or out of range.
	pub fn get_float(&self, index: usize) -> f32 {
		self.value_at(index).and_then(Value::as_f32).unwrap_or(0.0)
	}

	/// Double element at `index`; `0.0` on type mismatch or out of range.
	pub fn get_double(&self, index: usize) -> f64 {
		self.value_at(index).and_then(Value::as_f64).unwrap_or(0.0)
	}

	/// String element at `index`; empty on type mismatch or out of range.
	pub fn get_string(&self, index: usize) -> &str {
		self.value_at(index).and_then(Value::as_str).unwrap_or("")
	}

	/// Byte array element at `index`; empty on type mismatch or out of range.
	pub fn get_byte_array(&self, index: usize) -> &[i8] {
		self.value_at(index).and_then(Value::as_byte_array).unwrap_or(&[])
	}

	/// Int array element at `index`; empty on type mismatch or out of range.
	pub fn get_int_array(&self, index: usize) -> &[i32] {
		self.value_at(index).and_then(Value::as_int_array).unwrap_or(&[])
	}

	/// Element at `index` coerced to a boolean.
	pub fn as_boolean(&self, index: usize) -> bool {
		self.value_at(index).is_some_and(Value::to_boolean)
	}

	/// Element at `index` coerced to `i8`.
	pub fn as_byte(&self, index: usize) -> i8 {
		self.number_at(index).to_i8()
	}

	/// Element at `index` coerced to `i16`.
	pub fn as_short(&self, index: usize) -> i16 {
		self.number_at(index).to_i16()
	}

	/// Element at `index` coerced to `i32`.
	pub fn as_int(&self, index: usize) -> i32 {
		self.number_at(index).to_i32()
	}

	/// Element at `index` coerced to `i64`.
	pub fn as_long(&self, index: usize) -> i64 {
		self.number_at(index).to_i64()
	}

	/// Element at `index` coerced to `f32`.
	pub fn as_float(&self, index: usize) -> f32 {
		self.number_at(index).to_f32()
	}

	/// Element at `index` coerced to `f64`.
	pub fn as_double(&self, index: usize) -> f64 {
		self.number_at(index).to_f64()
	}

	/// Compound element at `index`, or a fresh empty compound that is not
	/// part of this struct.
	pub fn get_compound(&self, index: usize) -> Cow<'_, CompoundTag> {
		match self.value_at(index).and_then(Value::as_compound) {
			Some(compound) => Cow::Borrowed(compound),
			None => Cow::Owned(CompoundTag::new()),
		}
	}

	/// List element at `index`, or a fresh empty string list that is not
	/// part of this struct.
	pub fn get_list(&self, index: usize) -> Cow<'_, ListTag> {
		match self.value_at(index).and_then(Value::as_list) {
			Some(list) => Cow::Borrowed(list),
			None => Cow::Owned(ListTag::new(TypeId::STRING)),
		}
	}
}

impl CustomTag for StructTag {
	fn tag_type(&self) -> TypeId {
		Self::TYPE_ID
	}

	fn encode(&self, codec: &Codec<'_>, writer: &mut dyn Write, depth: u32) -> Result<()> {
		if let Some(index) = self.elements.iter().position(|tag| tag.tag_type().is_end()) {
			return Err(NbtError::InvalidStructure { index });
		}
		writer.write_i32(codec.encode_len("struct", self.elements.len())?)?;
		for tag in &self.elements {
			codec.write_tag(writer, tag, depth)?;
		}
		Ok(())
	}

	fn decode(&mut self, codec: &Codec<'_>, reader: &mut dyn Read, depth: u32) -> Result<()> {
		let count = codec.decode_len("struct", reader.read_i32()?)?;
		trace!(count, depth, "decode struct");

		self.clear_with_capacity(codec.prealloc(count));
		for index in 0..count {
			let tag = codec.read_named(reader, depth)?.ok_or(NbtError::InvalidStructure { index })?;
			self.elements.push(tag);
		}
		Ok(())
	}

	fn deep_copy(&self) -> Box<dyn CustomTag> {
		Box::new(Self {
			elements: self.elements.iter().map(Tag::deep_copy).collect(),
		})
	}

	fn display_string(&self, depth: u32) -> String {
		let items = self.elements.iter().map(|tag| tag.display_string(depth + 1)).collect();
		join_block("[", "]", items, depth)
	}

	fn eq_tag(&self, other: &dyn CustomTag) -> bool {
		other.as_any().downcast_ref::<Self>().is_some_and(|other| other == self)
	}

	fn children(&self) -> Box<dyn Iterator<Item = &Value> + '_> {
		Box::new(self.elements.iter().map(Tag::value))
	}

	fn as_any(&self) -> &dyn Any {
		self
	}

	fn as_any_mut(&mut self) -> &mut dyn Any {
		self
	}
}

impl From<Vec<Tag>> for StructTag {
	fn from(elements: Vec<Tag>) -> Self {
		Self::with_elements(elements)
	}
}

impl<'a> IntoIterator for &'a StructTag {
	type Item = &'a Tag;
	type IntoIter = std::slice::Iter<'a, Tag>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
