use std::path::PathBuf;

use nbtkit::nbt::{Codec, Compression, NbtFile, Result};
use tracing::debug;

use crate::cmd::util::{LimitArgs, registry};

/// Output compression accepted on the command line.
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
pub enum CompressionArg {
	None,
	Gzip,
	Zstd,
}

impl From<CompressionArg> for Compression {
	fn from(value: CompressionArg) -> Self {
		match value {
			CompressionArg::None => Self::None,
			CompressionArg::Gzip => Self::Gzip,
			CompressionArg::Zstd => Self::Zstd,
		}
	}
}

#[derive(clap::Args)]
pub struct Args {
	pub input: PathBuf,
	pub output: PathBuf,
	/// Compression for the output; defaults to the input's.
	#[arg(long, value_enum)]
	pub compression: Option<CompressionArg>,
	#[command(flatten)]
	pub limits: LimitArgs,
}

/// Decode `input` and re-encode it to `output`.
pub fn run(args: Args) -> Result<()> {
	let Args {
		input,
		output,
		compression,
		limits,
	} = args;

	let registry = registry()?;
	let codec = Codec::with_options(&registry, limits.options());
	let mut file = NbtFile::open(&input, &codec)?;
	if let Some(compression) = compression {
		file.compression = compression.into();
	}

	debug!(input = %input.display(), output = %output.display(), compression = file.compression.as_str(), "converting");
	file.save(&output, &codec)?;
	println!("wrote {} ({})", output.display(), file.compression.as_str());
	Ok(())
}
