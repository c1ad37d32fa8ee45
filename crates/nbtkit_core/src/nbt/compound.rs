use std::collections::BTreeMap;
use std::io::{Read, Write};

use tracing::trace;

use crate::nbt::{Codec, Result, TypeId, Value, WriteNbt};

/// Map of names to values, encoded as named nodes closed by a terminator.
///
/// Entries iterate in key order so encoding is deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompoundTag {
	entries: BTreeMap<String, Value>,
}

impl CompoundTag {
	/// Empty compound.
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// `true` when the compound holds no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Value stored under `name`.
	pub fn get(&self, name: &str) -> Option<&Value> {
		self.entries.get(name)
	}

	/// Mutable value stored under `name`.
	pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
		self.entries.get_mut(name)
	}

	/// `true` when an entry named `name` exists.
	pub fn contains_key(&self, name: &str) -> bool {
		self.entries.contains_key(name)
	}

	/// Insert or replace an entry, returning the previous value.
	pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
		self.entries.insert(name.into(), value.into())
	}

	/// Remove the entry named `name`.
	pub fn remove(&mut self, name: &str) -> Option<Value> {
		self.entries.remove(name)
	}

	/// Iterate entries in key order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.entries.iter().map(|(name, value)| (name.as_str(), value))
	}

	pub(crate) fn encode(&self, codec: &Codec<'_>, writer: &mut dyn Write, depth: u32) -> Result<()> {
		for (name, value) in &self.entries {
			codec.write_named(writer, name, value, depth)?;
		}
		writer.write_type_id(TypeId::END)
	}

	pub(crate) fn decode(&mut self, codec: &Codec<'_>, reader: &mut dyn Read, depth: u32) -> Result<()> {
		trace!(depth, "decode compound");
		self.entries.clear();
		while let Some(tag) = codec.read_named(reader, depth)? {
			let (name, value) = tag.into_parts();
			self.entries.insert(name, value);
		}
		Ok(())
	}
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for CompoundTag {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			entries: iter.into_iter().map(|(name, value)| (name.into(), value.into())).collect(),
		}
	}
}

#[cfg(test)]
mod tests;
