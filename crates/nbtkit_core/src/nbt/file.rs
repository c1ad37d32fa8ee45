use std::fs;
use std::path::Path;

use tracing::debug;

use crate::nbt::compression::{decode_bytes, encode_bytes};
use crate::nbt::{Codec, Compression, Result, Tag};

/// Root tag loaded from, or destined for, a possibly compressed file.
#[derive(Debug, Clone, PartialEq)]
pub struct NbtFile {
	/// Compression the file used, reused on save.
	pub compression: Compression,
	/// Decoded root tag.
	pub root: Tag,
}

impl NbtFile {
	/// Wrap `root` for saving with `compression`.
	pub fn new(root: Tag, compression: Compression) -> Self {
		Self { compression, root }
	}

	/// Read, decompress, and decode the file at `path`.
	pub fn open(path: impl AsRef<Path>, codec: &Codec<'_>) -> Result<Self> {
		let path = path.as_ref();
		let raw = fs::read(path)?;
		let file = Self::from_raw(raw, codec)?;
		debug!(path = %path.display(), compression = file.compression.as_str(), root = %file.root.tag_type(), "opened nbt file");
		Ok(file)
	}

	/// Decompress and decode raw file contents.
	pub fn from_raw(raw: Vec<u8>, codec: &Codec<'_>) -> Result<Self> {
		let (compression, bytes) = decode_bytes(raw)?;
		let root = codec.decode_slice(&bytes)?;
		Ok(Self { compression, root })
	}

	/// Encode and compress to raw file contents.
	pub fn to_raw(&self, codec: &Codec<'_>) -> Result<Vec<u8>> {
		let bytes = codec.encode_to_vec(&self.root)?;
		encode_bytes(&bytes, self.compression)
	}

	/// Encode, compress, and write to `path`.
	pub fn save(&self, path: impl AsRef<Path>, codec: &Codec<'_>) -> Result<()> {
		fs::write(path, self.to_raw(codec)?)?;
		Ok(())
	}
}

#[cfg(test)]
mod tests;
