use std::io::{Read, Write};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;

use crate::nbt::{NbtError, Result};

const MAX_DECOMPRESSED_BYTES: usize = 512 * 1024 * 1024;
/// gzip member magic, the usual wrapping for NBT files.
pub const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];
/// zstd frame magic.
pub const ZSTD_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];

/// Compression mode detected for a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
	/// Raw uncompressed stream.
	None,
	/// gzip-compressed stream.
	Gzip,
	/// zstd-compressed stream.
	Zstd,
}

impl Compression {
	/// Render compression mode as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Gzip => "gzip",
			Self::Zstd => "zstd",
		}
	}

	/// Detect the mode from leading magic bytes; anything else is raw.
	pub fn detect(raw: &[u8]) -> Self {
		if raw.starts_with(&GZIP_MAGIC) {
			Self::Gzip
		} else if raw.starts_with(&ZSTD_MAGIC) {
			Self::Zstd
		} else {
			Self::None
		}
	}
}

/// Detect and decode compression, returning `(mode, decoded_bytes)`.
pub fn decode_bytes(raw: Vec<u8>) -> Result<(Compression, Vec<u8>)> {
	let compression = Compression::detect(&raw);
	let out = match compression {
		Compression::None => raw,
		Compression::Gzip => read_limited(GzDecoder::new(raw.as_slice()))?,
		Compression::Zstd => read_limited(zstd::stream::read::Decoder::new(raw.as_slice())?)?,
	};
	Ok((compression, out))
}

/// Compress `raw` with `compression`.
pub fn encode_bytes(raw: &[u8], compression: Compression) -> Result<Vec<u8>> {
	match compression {
		Compression::None => Ok(raw.to_vec()),
		Compression::Gzip => {
			let mut encoder = GzEncoder::new(Vec::new(), flate2::Compression::default());
			encoder.write_all(raw)?;
			Ok(encoder.finish()?)
		}
		Compression::Zstd => Ok(zstd::stream::encode_all(raw, 0)?),
	}
}

fn read_limited(mut decoder: impl Read) -> Result<Vec<u8>> {
	let mut out = Vec::new();
	let mut buf = [0_u8; 8192];

	loop {
		let read = decoder.read(&mut buf)?;
		if read == 0 {
			break;
		}

		if out.len() + read > MAX_DECOMPRESSED_BYTES {
			return Err(NbtError::DecompressedTooLarge { limit: MAX_DECOMPRESSED_BYTES });
		}

		out.extend_from_slice(&buf[..read]);
	}

	Ok(out)
}
