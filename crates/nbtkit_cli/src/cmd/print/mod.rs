use std::path::PathBuf;

use nbtkit::nbt::{Result, StructTag, Tag, Value};
use serde_json::{Map, Number, json};

use crate::cmd::util::{LimitArgs, emit_json, open_file};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[command(flatten)]
	pub limits: LimitArgs,
	#[arg(long)]
	pub json: bool,
}

/// Decode a file and print its root tag as text or JSON.
pub fn run(args: Args) -> Result<()> {
	let Args { path, limits, json } = args;

	let file = open_file(&path, &limits)?;
	if json {
		emit_json(&tag_to_json(&file.root));
	} else {
		println!("{}", file.root);
	}
	Ok(())
}

/// Named tag as `{name, type, value}`.
pub(crate) fn tag_to_json(tag: &Tag) -> serde_json::Value {
	json!({
		"name": tag.name(),
		"type": tag.tag_type().to_string(),
		"value": value_to_json(tag.value()),
	})
}

/// Payload rendered as plain JSON; struct elements keep their names and types.
pub(crate) fn value_to_json(value: &Value) -> serde_json::Value {
	match value {
		Value::Byte(v) => json!(v),
		Value::Short(v) => json!(v),
		Value::Int(v) => json!(v),
		Value::Long(v) => json!(v),
		Value::Float(v) => float_json(f64::from(*v)),
		Value::Double(v) => float_json(*v),
		Value::ByteArray(items) => json!(items),
		Value::String(v) => json!(v),
		Value::IntArray(items) => json!(items),
		Value::List(list) => serde_json::Value::Array(list.iter().map(value_to_json).collect()),
		Value::Compound(compound) => {
			let entries: Map<String, serde_json::Value> = compound.iter().map(|(name, value)| (name.to_owned(), value_to_json(value))).collect();
			serde_json::Value::Object(entries)
		}
		Value::Custom(custom) => {
			let elements: Vec<serde_json::Value> = match custom.downcast_ref::<StructTag>() {
				Some(items) => items.iter().map(tag_to_json).collect(),
				None => custom.children().map(value_to_json).collect(),
			};
			json!({
				"type_id": custom.tag_type().raw(),
				"elements": elements,
			})
		}
	}
}

fn float_json(value: f64) -> serde_json::Value {
	Number::from_f64(value).map_or(serde_json::Value::Null, serde_json::Value::Number)
}
