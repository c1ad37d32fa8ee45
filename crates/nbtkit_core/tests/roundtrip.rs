//! Property-based round trips through the public codec API.

use nbtkit::nbt::{Codec, CompoundTag, Compression, ListTag, NbtFile, StructTag, Tag, TypeId, TypeRegistry, Value};
use proptest::prelude::*;

fn arb_name() -> impl Strategy<Value = String> {
	"[a-zA-Z_ ]{0,8}"
}

fn arb_value() -> impl Strategy<Value = Value> {
	let leaf = prop_oneof![
		any::<i8>().prop_map(Value::Byte),
		any::<i16>().prop_map(Value::Short),
		any::<i32>().prop_map(Value::Int),
		any::<i64>().prop_map(Value::Long),
		any::<f32>().prop_filter("not NaN", |f| !f.is_nan()).prop_map(Value::Float),
		any::<f64>().prop_filter("not NaN", |f| !f.is_nan()).prop_map(Value::Double),
		".{0,16}".prop_map(Value::String),
		prop::collection::vec(any::<i8>(), 0..32).prop_map(Value::ByteArray),
		prop::collection::vec(any::<i32>(), 0..16).prop_map(Value::IntArray),
	];

	leaf.prop_recursive(4, 64, 6, |inner| {
		prop_oneof![
			prop::collection::vec((arb_name(), inner.clone()), 0..6)
				.prop_map(|elements| Value::from(StructTag::with_elements(elements.into_iter().map(|(name, value)| Tag::new(name, value)).collect()))),
			prop::collection::vec((arb_name(), inner.clone()), 0..6).prop_map(|entries| Value::from(entries.into_iter().collect::<CompoundTag>())),
			prop::collection::vec(inner, 0..4).prop_map(|items| {
				let structs = items.into_iter().map(|value| Value::from(StructTag::with_elements(vec![Tag::unnamed(value)]))).collect();
				Value::from(ListTag::with_items(StructTag::TYPE_ID, structs).expect("homogeneous struct list"))
			}),
			prop::collection::vec(".{0,8}", 0..4).prop_map(|items| {
				let strings = items.into_iter().map(Value::String).collect();
				Value::from(ListTag::with_items(TypeId::STRING, strings).expect("homogeneous string list"))
			}),
		]
	})
}

fn arb_struct_root() -> impl Strategy<Value = Tag> {
	(arb_name(), prop::collection::vec((arb_name(), arb_value()), 0..8))
		.prop_map(|(name, elements)| StructTag::tag(name, Some(elements.into_iter().map(|(name, value)| Tag::new(name, value)).collect())))
}

proptest! {
	#[test]
	fn struct_roots_round_trip(root in arb_struct_root()) {
		let registry = TypeRegistry::with_struct().expect("struct registers");
		let codec = Codec::new(&registry);
		let bytes = codec.encode_to_vec(&root).expect("encoding should succeed");
		let decoded = codec.decode_slice(&bytes).expect("decoding should succeed");
		prop_assert_eq!(decoded, root);
	}

	#[test]
	fn deep_copy_equals_source(root in arb_struct_root()) {
		let copy = root.deep_copy();
		prop_assert_eq!(copy, root);
	}

	#[test]
	fn compressed_files_round_trip(root in arb_struct_root()) {
		let registry = TypeRegistry::with_struct().expect("struct registers");
		let codec = Codec::new(&registry);
		let file = NbtFile::new(root, Compression::Gzip);
		let raw = file.to_raw(&codec).expect("encoding should succeed");
		prop_assert_eq!(NbtFile::from_raw(raw, &codec).expect("decoding should succeed"), file);
	}
}
