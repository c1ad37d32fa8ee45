use std::fmt;

use crate::nbt::display::name_prefix;
use crate::nbt::{CompoundTag, CustomTag, ListTag, NbtError, Result, TypeId, Value};

/// A named, typed node in the value graph.
///
/// The identity follows the payload variant and is fixed at construction:
/// [`Tag::set_value`] refuses a value of another type, and the mutable
/// accessors only hand out payloads that cannot change variant.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
	name: String,
	value: Value,
}

impl Tag {
	/// Tag named `name` holding `value`.
	pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
		Self {
			name: name.into(),
			value: value.into(),
		}
	}

	/// Tag with the empty name, as used for struct elements.
	pub fn unnamed(value: impl Into<Value>) -> Self {
		Self::new(String::new(), value)
	}

	/// Identifier of the payload variant.
	pub fn tag_type(&self) -> TypeId {
		self.value.tag_type()
	}

	/// Tag name, empty for unnamed tags.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Replace the tag name.
	pub fn set_name(&mut self, name: impl Into<String>) {
		self.name = name.into();
	}

	/// Payload.
	pub fn value(&self) -> &Value {
		&self.value
	}

	/// Replace the payload with a value of the same type, returning the old one.
	pub fn set_value(&mut self, value: impl Into<Value>) -> Result<Value> {
		let value = value.into();
		if value.tag_type() != self.tag_type() {
			return Err(NbtError::TypeMismatch {
				expected: self.tag_type(),
				got: value.tag_type(),
			});
		}
		Ok(std::mem::replace(&mut self.value, value))
	}

	/// Mutable list payload.
	pub fn as_list_mut(&mut self) -> Option<&mut ListTag> {
		self.value.as_list_mut()
	}

	/// Mutable compound payload.
	pub fn as_compound_mut(&mut self) -> Option<&mut CompoundTag> {
		self.value.as_compound_mut()
	}

	/// Mutable custom payload of concrete type `T`.
	pub fn as_custom_mut<T: CustomTag>(&mut self) -> Option<&mut T> {
		self.value.as_custom_mut::<T>()
	}

	/// Copy with the same identity and name and an independent payload.
	pub fn deep_copy(&self) -> Self {
		self.clone()
	}

	/// Split into name and payload.
	pub fn into_parts(self) -> (String, Value) {
		(self.name, self.value)
	}

	/// SNBT-like rendering, prefixed with the name when one is set.
	pub fn display_string(&self, depth: u32) -> String {
		format!("{}{}", name_prefix(&self.name), self.value.display_string(depth))
	}
}

impl fmt::Display for Tag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.display_string(0))
	}
}
