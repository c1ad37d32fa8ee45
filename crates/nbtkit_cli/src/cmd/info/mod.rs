use std::path::PathBuf;

use nbtkit::nbt::{Result, Value};

use crate::cmd::util::{LimitArgs, emit_json, open_file};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[command(flatten)]
	pub limits: LimitArgs,
	#[arg(long)]
	pub json: bool,
}

/// Print compression, root header, and tree shape statistics.
pub fn run(args: Args) -> Result<()> {
	let Args { path, limits, json } = args;

	let file = open_file(&path, &limits)?;
	let stats = TreeStats::scan(file.root.value());

	if json {
		emit_json(&InfoJson {
			path: path.display().to_string(),
			compression: file.compression.as_str().to_owned(),
			root_name: file.root.name().to_owned(),
			root_type: file.root.tag_type().to_string(),
			node_count: stats.node_count,
			max_depth: stats.max_depth,
		});
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("compression: {}", file.compression.as_str());
	println!("root_name: {}", file.root.name());
	println!("root_type: {}", file.root.tag_type());
	println!("node_count: {}", stats.node_count);
	println!("max_depth: {}", stats.max_depth);

	Ok(())
}

/// Node count and deepest level of a value tree; the root counts as depth 1.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TreeStats {
	pub node_count: usize,
	pub max_depth: u32,
}

impl TreeStats {
	pub(crate) fn scan(root: &Value) -> Self {
		let mut stats = Self::default();
		let mut stack = vec![(root, 1_u32)];
		while let Some((value, depth)) = stack.pop() {
			stats.node_count += 1;
			stats.max_depth = stats.max_depth.max(depth);
			stack.extend(value.children().map(|child| (child, depth + 1)));
		}
		stats
	}
}

#[derive(serde::Serialize)]
struct InfoJson {
	path: String,
	compression: String,
	root_name: String,
	root_type: String,
	node_count: usize,
	max_depth: u32,
}

#[cfg(test)]
mod tests;
