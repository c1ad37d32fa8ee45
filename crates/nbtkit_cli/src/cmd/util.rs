use std::path::Path;

use nbtkit::nbt::{Codec, CodecOptions, NbtFile, Result, TypeRegistry};

/// Codec limits shared by every command.
#[derive(clap::Args, Debug, Clone)]
pub struct LimitArgs {
	/// Maximum container nesting depth.
	#[arg(long, default_value_t = CodecOptions::default().max_depth)]
	pub max_depth: u32,
	/// Maximum element count for arrays, lists, and structs.
	#[arg(long, default_value_t = CodecOptions::default().max_len)]
	pub max_len: usize,
}

impl LimitArgs {
	pub(crate) fn options(&self) -> CodecOptions {
		CodecOptions {
			max_depth: self.max_depth,
			max_len: self.max_len,
		}
	}
}

/// Registry with the struct variant bound, as every command expects.
pub(crate) fn registry() -> Result<TypeRegistry> {
	TypeRegistry::with_struct()
}

/// Open `path` with the struct-aware registry and `limits`.
pub(crate) fn open_file(path: &Path, limits: &LimitArgs) -> Result<NbtFile> {
	let registry = registry()?;
	let codec = Codec::with_options(&registry, limits.options());
	NbtFile::open(path, &codec)
}

/// Serialize `payload` as pretty JSON on stdout.
pub(crate) fn emit_json(payload: &impl serde::Serialize) {
	match serde_json::to_string_pretty(payload) {
		Ok(text) => println!("{text}"),
		Err(err) => eprintln!("error: failed to render json: {err}"),
	}
}
