use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::nbt::{CustomTag, NbtError, Result, StructTag, TypeId, Value};

/// Constructor producing an empty instance of one variant.
#[derive(Clone)]
pub struct Factory(Arc<dyn Fn() -> Value + Send + Sync>);

impl Factory {
	fn new(build: impl Fn() -> Value + Send + Sync + 'static) -> Self {
		Self(Arc::new(build))
	}

	/// Build a fresh empty instance.
	pub fn create(&self) -> Value {
		(self.0)()
	}
}

impl fmt::Debug for Factory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Factory")
	}
}

/// Mapping from type identifiers to factories.
///
/// Built-in identifiers are bound on construction. Custom identifiers are
/// bound once through [`TypeRegistry::register`], which needs `&mut self`,
/// while lookups only need `&self`: finish registration before handing out
/// shared references (or an `Arc`) to decoders.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
	bindings: BTreeMap<TypeId, Factory>,
}

impl Default for TypeRegistry {
	fn default() -> Self {
		Self::new()
	}
}

impl TypeRegistry {
	/// Registry with only the built-in variants bound.
	pub fn new() -> Self {
		let builtins = [
			TypeId::BYTE,
			TypeId::SHORT,
			TypeId::INT,
			TypeId::LONG,
			TypeId::FLOAT,
			TypeId::DOUBLE,
			TypeId::BYTE_ARRAY,
			TypeId::STRING,
			TypeId::LIST,
			TypeId::COMPOUND,
			TypeId::INT_ARRAY,
		];

		let mut bindings = BTreeMap::new();
		for id in builtins {
			if let Some(empty) = Value::empty_builtin(id) {
				bindings.insert(id, Factory::new(move || empty.clone()));
			}
		}
		Self { bindings }
	}

	/// Built-in variants plus the struct variant.
	pub fn with_struct() -> Result<Self> {
		let mut registry = Self::new();
		StructTag::register(&mut registry)?;
		Ok(registry)
	}

	/// Bind `factory` to the custom identifier `id`.
	///
	/// Fails with [`NbtError::DuplicateTypeId`] when `id` is already bound,
	/// leaving the existing binding untouched.
	pub fn register<F>(&mut self, id: TypeId, factory: F) -> Result<()>
	where
		F: Fn() -> Box<dyn CustomTag> + Send + Sync + 'static,
	{
		if self.bindings.contains_key(&id) {
			return Err(NbtError::DuplicateTypeId { id });
		}
		if id.is_reserved() {
			return Err(NbtError::ReservedTypeId { id });
		}

		let produced = factory().tag_type();
		if produced != id {
			return Err(NbtError::FactoryTypeMismatch { id, produced });
		}

		self.bindings.insert(id, Factory::new(move || Value::Custom(factory())));
		debug!(id = id.raw(), "registered custom tag type");
		Ok(())
	}

	/// Factory bound to `id`.
	pub fn lookup(&self, id: TypeId) -> Result<&Factory> {
		self.bindings.get(&id).ok_or(NbtError::UnknownTypeId { id })
	}

	/// Fresh empty instance for `id`.
	pub fn instantiate(&self, id: TypeId) -> Result<Value> {
		Ok(self.lookup(id)?.create())
	}

	/// `true` when `id` has a factory.
	pub fn is_bound(&self, id: TypeId) -> bool {
		self.bindings.contains_key(&id)
	}

	/// Custom identifiers bound so far, ascending.
	pub fn custom_ids(&self) -> impl Iterator<Item = TypeId> + '_ {
		self.bindings.keys().copied().filter(|id| id.is_custom())
	}
}
