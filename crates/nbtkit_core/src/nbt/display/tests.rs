use crate::nbt::{CompoundTag, ListTag, StructTag, Tag, TypeId, Value};

#[test]
fn scalars_render_with_suffixes() {
	assert_eq!(Value::Byte(1).display_string(0), "1b");
	assert_eq!(Value::Short(2).display_string(0), "2s");
	assert_eq!(Value::Int(3).display_string(0), "3");
	assert_eq!(Value::Long(4).display_string(0), "4L");
	assert_eq!(Value::Float(5.0).display_string(0), "5.0f");
	assert_eq!(Value::Double(6.5).display_string(0), "6.5d");
	assert_eq!(Value::from("a\"b").display_string(0), "\"a\\\"b\"");
	assert_eq!(Value::ByteArray(vec![1, -2]).display_string(0), "[B;1b,-2b]");
	assert_eq!(Value::IntArray(vec![7, 8]).display_string(0), "[I;7,8]");
}

#[test]
fn containers_indent_by_depth() {
	let list = ListTag::with_items(TypeId::INT, vec![Value::Int(1), Value::Int(2)]).expect("int list");
	let mut compound = CompoundTag::new();
	compound.insert("xs", list);

	assert_eq!(Value::Compound(compound).display_string(0), "{\n  xs:[\n    1,\n    2\n  ]\n}");
}

#[test]
fn nested_depth_is_threaded_not_reset() {
	let inner = StructTag::with_elements(vec![Tag::unnamed(1_i8)]);
	let outer = StructTag::with_elements(vec![Tag::new("in", inner)]);

	assert_eq!(Value::from(outer).display_string(1), "[\n    in:[\n      1b\n    ]\n  ]");
}

#[test]
fn empty_containers_stay_inline() {
	assert_eq!(Value::List(ListTag::default()).display_string(3), "[]");
	assert_eq!(Value::Compound(CompoundTag::new()).display_string(3), "{}");
}
