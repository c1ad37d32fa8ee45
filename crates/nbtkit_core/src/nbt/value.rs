use std::io::{Read, Write};

use crate::nbt::{Codec, CompoundTag, CustomTag, ListTag, ReadNbt, Result, StructTag, TypeId, WriteNbt};

/// Payload of a tag: the built-in variants plus registered custom ones.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Signed 8-bit integer, also used for booleans.
	Byte(i8),
	/// Signed 16-bit integer.
	Short(i16),
	/// Signed 32-bit integer.
	Int(i32),
	/// Signed 64-bit integer.
	Long(i64),
	/// 32-bit float.
	Float(f32),
	/// 64-bit float.
	Double(f64),
	/// Signed byte array.
	ByteArray(Vec<i8>),
	/// UTF-8 text.
	String(String),
	/// Homogeneous list.
	List(ListTag),
	/// Named-entry map.
	Compound(CompoundTag),
	/// Signed 32-bit integer array.
	IntArray(Vec<i32>),
	/// Registered custom variant.
	Custom(Box<dyn CustomTag>),
}

impl Value {
	/// Empty instance for a built-in identifier.
	pub fn empty_builtin(id: TypeId) -> Option<Self> {
		let value = match id {
			TypeId::BYTE => Self::Byte(0),
			TypeId::SHORT => Self::Short(0),
			TypeId::INT => Self::Int(0),
			TypeId::LONG => Self::Long(0),
			TypeId::FLOAT => Self::Float(0.0),
			TypeId::DOUBLE => Self::Double(0.0),
			TypeId::BYTE_ARRAY => Self::ByteArray(Vec::new()),
			TypeId::STRING => Self::String(String::new()),
			TypeId::LIST => Self::List(ListTag::default()),
			TypeId::COMPOUND => Self::Compound(CompoundTag::new()),
			TypeId::INT_ARRAY => Self::IntArray(Vec::new()),
			_ => return None,
		};
		Some(value)
	}

	/// Identifier of this variant.
	pub fn tag_type(&self) -> TypeId {
		match self {
			Self::Byte(_) => TypeId::BYTE,
			Self::Short(_) => TypeId::SHORT,
			Self::Int(_) => TypeId::INT,
			Self::Long(_) => TypeId::LONG,
			Self::Float(_) => TypeId::FLOAT,
			Self::Double(_) => TypeId::DOUBLE,
			Self::ByteArray(_) => TypeId::BYTE_ARRAY,
			Self::String(_) => TypeId::STRING,
			Self::List(_) => TypeId::LIST,
			Self::Compound(_) => TypeId::COMPOUND,
			Self::IntArray(_) => TypeId::INT_ARRAY,
			Self::Custom(custom) => custom.tag_type(),
		}
	}

	/// `true` when this variant nests other values and counts toward depth.
	pub fn is_container(&self) -> bool {
		match self {
			Self::List(_) | Self::Compound(_) => true,
			Self::Custom(custom) => custom.is_container(),
			_ => false,
		}
	}

	/// Direct child values of a container, empty for scalars and arrays.
	pub fn children(&self) -> Box<dyn Iterator<Item = &Value> + '_> {
		match self {
			Self::List(list) => Box::new(list.iter()),
			Self::Compound(compound) => Box::new(compound.iter().map(|(_, value)| value)),
			Self::Custom(custom) => custom.children(),
			_ => Box::new(std::iter::empty()),
		}
	}

	/// Write the payload only; header framing is the codec's job.
	pub fn encode(&self, codec: &Codec<'_>, writer: &mut dyn Write, depth: u32) -> Result<()> {
		match self {
			Self::Byte(value) => writer.write_i8(*value),
			Self::Short(value) => writer.write_i16(*value),
			Self::Int(value) => writer.write_i32(*value),
			Self::Long(value) => writer.write_i64(*value),
			Self::Float(value) => writer.write_f32(*value),
			Self::Double(value) => writer.write_f64(*value),
			Self::ByteArray(values) => {
				writer.write_i32(codec.encode_len("byte array", values.len())?)?;
				let bytes: Vec<u8> = values.iter().map(|value| *value as u8).collect();
				writer.write_all(&bytes)?;
				Ok(())
			}
			Self::String(value) => writer.write_string(value),
			Self::List(list) => list.encode(codec, writer, depth),
			Self::Compound(compound) => compound.encode(codec, writer, depth),
			Self::IntArray(values) => {
				writer.write_i32(codec.encode_len("int array", values.len())?)?;
				for value in values {
					writer.write_i32(*value)?;
				}
				Ok(())
			}
			Self::Custom(custom) => custom.encode(codec, writer, depth),
		}
	}

	/// Populate this already-empty instance from the payload bytes.
	pub fn decode(&mut self, codec: &Codec<'_>, reader: &mut dyn Read, depth: u32) -> Result<()> {
		match self {
			Self::Byte(value) => *value = reader.read_i8()?,
			Self::Short(value) => *value = reader.read_i16()?,
			Self::Int(value) => *value = reader.read_i32()?,
			Self::Long(value) => *value = reader.read_i64()?,
			Self::Float(value) => *value = reader.read_f32()?,
			Self::Double(value) => *value = reader.read_f64()?,
			Self::ByteArray(values) => {
				let len = codec.decode_len("byte array", reader.read_i32()?)?;
				let mut bytes = Vec::with_capacity(codec.prealloc(len));
				(&mut *reader).take(len as u64).read_to_end(&mut bytes)?;
				if bytes.len() < len {
					return Err(std::io::Error::from(std::io::ErrorKind::UnexpectedEof).into());
				}
				*values = bytes.into_iter().map(|byte| byte as i8).collect();
			}
			Self::String(value) => *value = reader.read_string()?,
			Self::List(list) => list.decode(codec, reader, depth)?,
			Self::Compound(compound) => compound.decode(codec, reader, depth)?,
			Self::IntArray(values) => {
				let len = codec.decode_len("int array", reader.read_i32()?)?;
				values.clear();
				values.reserve(codec.prealloc(len));
				for _ in 0..len {
					values.push(reader.read_i32()?);
				}
			}
			Self::Custom(custom) => custom.decode(codec, reader, depth)?,
		}
		Ok(())
	}

	/// Exact `Byte` payload.
	pub fn as_i8(&self) -> Option<i8> {
		match self {
			Self::Byte(value) => Some(*value),
			_ => None,
		}
	}

	/// Exact `Short` payload.
	pub fn as_i16(&self) -> Option<i16> {
		match self {
			Self::Short(value) => Some(*value),
			_ => None,
		}
	}

	/// Exact `Int` payload.
	pub fn as_i32(&self) -> Option<i32> {
		match self {
			Self::Int(value) => Some(*value),
			_ => None,
		}
	}

	/// Exact `Long` payload.
	pub fn as_i64(&self) -> Option<i64> {
		match self {
			Self::Long(value) => Some(*value),
			_ => None,
		}
	}

	/// Exact `Float` payload.
	pub fn as_f32(&self) -> Option<f32> {
		match self {
			Self::Float(value) => Some(*value),
			_ => None,
		}
	}

	/// Exact `Double` payload.
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Self::Double(value) => Some(*value),
			_ => None,
		}
	}

	/// Exact `String` payload.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(value) => Some(value),
			_ => None,
		}
	}

	/// Exact `ByteArray` payload.
	pub fn as_byte_array(&self) -> Option<&[i8]> {
		match self {
			Self::ByteArray(values) => Some(values),
			_ => None,
		}
	}

	/// Exact `IntArray` payload.
	pub fn as_int_array(&self) -> Option<&[i32]> {
		match self {
			Self::IntArray(values) => Some(values),
			_ => None,
		}
	}

	/// Exact `List` payload.
	pub fn as_list(&self) -> Option<&ListTag> {
		match self {
			Self::List(list) => Some(list),
			_ => None,
		}
	}

	/// Exact `List` payload, mutable.
	pub fn as_list_mut(&mut self) -> Option<&mut ListTag> {
		match self {
			Self::List(list) => Some(list),
			_ => None,
		}
	}

	/// Exact `Compound` payload.
	pub fn as_compound(&self) -> Option<&CompoundTag> {
		match self {
			Self::Compound(compound) => Some(compound),
			_ => None,
		}
	}

	/// Exact `Compound` payload, mutable.
	pub fn as_compound_mut(&mut self) -> Option<&mut CompoundTag> {
		match self {
			Self::Compound(compound) => Some(compound),
			_ => None,
		}
	}

	/// Custom payload downcast to its concrete type.
	pub fn as_custom<T: CustomTag>(&self) -> Option<&T> {
		match self {
			Self::Custom(custom) => custom.downcast_ref::<T>(),
			_ => None,
		}
	}

	/// Custom payload downcast to its concrete type, mutable.
	pub fn as_custom_mut<T: CustomTag>(&mut self) -> Option<&mut T> {
		match self {
			Self::Custom(custom) => custom.downcast_mut::<T>(),
			_ => None,
		}
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Self::Byte(i8::from(value))
	}
}

impl From<i8> for Value {
	fn from(value: i8) -> Self {
		Self::Byte(value)
	}
}

impl From<i16> for Value {
	fn from(value: i16) -> Self {
		Self::Short(value)
	}
}

impl From<i32> for Value {
	fn from(value: i32) -> Self {
		Self::Int(value)
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Self::Long(value)
	}
}

impl From<f32> for Value {
	fn from(value: f32) -> Self {
		Self::Float(value)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Self::Double(value)
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Self::String(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::String(value.to_owned())
	}
}

impl From<Vec<i8>> for Value {
	fn from(value: Vec<i8>) -> Self {
		Self::ByteArray(value)
	}
}

impl From<Vec<i32>> for Value {
	fn from(value: Vec<i32>) -> Self {
		Self::IntArray(value)
	}
}

impl From<ListTag> for Value {
	fn from(value: ListTag) -> Self {
		Self::List(value)
	}
}

impl From<CompoundTag> for Value {
	fn from(value: CompoundTag) -> Self {
		Self::Compound(value)
	}
}

impl From<StructTag> for Value {
	fn from(value: StructTag) -> Self {
		Self::Custom(Box::new(value))
	}
}

impl From<Box<dyn CustomTag>> for Value {
	fn from(value: Box<dyn CustomTag>) -> Self {
		Self::Custom(value)
	}
}
