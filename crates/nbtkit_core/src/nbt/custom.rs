use std::any::Any;
use std::fmt;
use std::io::{Read, Write};

use crate::nbt::{Codec, Result, TypeId, Value};

/// Contract a registered custom variant implements to take part in the codec.
///
/// `encode` and `decode` handle the payload only. The codec writes and reads
/// the identifier and name, and passes the current depth so nested children
/// can be handed to [`Codec::write_named`] and [`Codec::read_named`].
pub trait CustomTag: fmt::Debug + Any + Send + Sync {
	/// Identifier this variant is registered under. Constant per type.
	fn tag_type(&self) -> TypeId;

	/// Write the payload.
	fn encode(&self, codec: &Codec<'_>, writer: &mut dyn Write, depth: u32) -> Result<()>;

	/// Populate this empty instance from the payload bytes.
	fn decode(&mut self, codec: &Codec<'_>, reader: &mut dyn Read, depth: u32) -> Result<()>;

	/// Recursively independent copy.
	fn deep_copy(&self) -> Box<dyn CustomTag>;

	/// SNBT-like rendering, indenting nested children by `depth`.
	fn display_string(&self, depth: u32) -> String;

	/// Structural equality against another custom tag.
	fn eq_tag(&self, other: &dyn CustomTag) -> bool;

	/// Whether this variant nests other values.
	fn is_container(&self) -> bool {
		true
	}

	/// Direct child values, used by tree walkers.
	fn children(&self) -> Box<dyn Iterator<Item = &Value> + '_> {
		Box::new(std::iter::empty())
	}

	/// Upcast for downcasting to the concrete type.
	fn as_any(&self) -> &dyn Any;

	/// Mutable upcast for downcasting to the concrete type.
	fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl dyn CustomTag {
	/// Borrow as the concrete type `T`.
	pub fn downcast_ref<T: CustomTag>(&self) -> Option<&T> {
		self.as_any().downcast_ref::<T>()
	}

	/// Mutably borrow as the concrete type `T`.
	pub fn downcast_mut<T: CustomTag>(&mut self) -> Option<&mut T> {
		self.as_any_mut().downcast_mut::<T>()
	}
}

impl Clone for Box<dyn CustomTag> {
	fn clone(&self) -> Self {
		self.deep_copy()
	}
}

impl PartialEq for dyn CustomTag {
	fn eq(&self, other: &Self) -> bool {
		self.tag_type() == other.tag_type() && self.eq_tag(other)
	}
}
