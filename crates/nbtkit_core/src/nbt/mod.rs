mod codec;
mod compound;
mod compression;
mod convert;
mod custom;
mod display;
mod error;
mod file;
mod list;
mod registry;
mod stream;
mod struct_tag;
mod tag;
mod type_id;
mod value;

/// Codec engine and its runtime limits.
pub use codec::{Codec, CodecOptions, PREALLOC_LIMIT};
/// Named-entry map container.
pub use compound::CompoundTag;
/// Compression detection and stream wrapping.
pub use compression::{Compression, decode_bytes, encode_bytes};
/// Lenient numeric conversion helpers.
pub use convert::Number;
/// Extension contract for registered custom variants.
pub use custom::CustomTag;
/// Error and result aliases.
pub use error::{NbtError, Result};
/// File abstraction over a compressed or raw root tag.
pub use file::NbtFile;
/// Homogeneous list container.
pub use list::ListTag;
/// Type registry and factory types.
pub use registry::{Factory, TypeRegistry};
/// Big-endian stream helpers.
pub use stream::{ReadNbt, WriteNbt};
/// Ordered heterogeneous sequence container.
pub use struct_tag::StructTag;
/// Named tag instance.
pub use tag::Tag;
/// One-byte type discriminator.
pub use type_id::TypeId;
/// Tag payload enum.
pub use value::Value;
