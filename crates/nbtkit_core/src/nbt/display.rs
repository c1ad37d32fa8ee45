//! SNBT-like rendering with depth-threaded indentation.

use crate::nbt::Value;

const INDENT: &str = "  ";

impl Value {
	/// Render this payload. Non-empty containers put one child per line,
	/// indented one level deeper than `depth`.
	pub fn display_string(&self, depth: u32) -> String {
		match self {
			Self::Byte(value) => format!("{value}b"),
			Self::Short(value) => format!("{value}s"),
			Self::Int(value) => value.to_string(),
			Self::Long(value) => format!("{value}L"),
			Self::Float(value) => format!("{value:?}f"),
			Self::Double(value) => format!("{value:?}d"),
			Self::ByteArray(values) => {
				let items: Vec<String> = values.iter().map(|value| format!("{value}b")).collect();
				format!("[B;{}]", items.join(","))
			}
			Self::String(value) => quote(value),
			Self::IntArray(values) => {
				let items: Vec<String> = values.iter().map(i32::to_string).collect();
				format!("[I;{}]", items.join(","))
			}
			Self::List(list) => {
				let items = list.iter().map(|item| item.display_string(depth + 1)).collect();
				join_block("[", "]", items, depth)
			}
			Self::Compound(compound) => {
				let items = compound
					.iter()
					.map(|(name, value)| format!("{}:{}", render_key(name), value.display_string(depth + 1)))
					.collect();
				join_block("{", "}", items, depth)
			}
			Self::Custom(custom) => custom.display_string(depth),
		}
	}
}

/// Wrap rendered children in `open`/`close`, one per line at `depth + 1`.
pub(crate) fn join_block(open: &str, close: &str, items: Vec<String>, depth: u32) -> String {
	if items.is_empty() {
		return format!("{open}{close}");
	}

	let outer = INDENT.repeat(depth as usize);
	let inner = INDENT.repeat(depth as usize + 1);
	let separator = format!(",\n{inner}");
	format!("{open}\n{inner}{}\n{outer}{close}", items.join(&separator))
}

/// `name:` for named tags, empty for unnamed ones.
pub(crate) fn name_prefix(name: &str) -> String {
	if name.is_empty() { String::new() } else { format!("{}:", render_key(name)) }
}

fn render_key(name: &str) -> String {
	let plain = !name.is_empty() && name.chars().all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '_' | '-' | '.' | '+'));
	if plain { name.to_owned() } else { quote(name) }
}

fn quote(text: &str) -> String {
	let mut out = String::with_capacity(text.len() + 2);
	out.push('"');
	for ch in text.chars() {
		match ch {
			'"' => out.push_str("\\\""),
			'\\' => out.push_str("\\\\"),
			'\n' => out.push_str("\\n"),
			c => out.push(c),
		}
	}
	out.push('"');
	out
}

#[cfg(test)]
mod tests;
