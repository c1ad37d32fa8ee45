use crate::nbt::{Codec, CompoundTag, NbtError, StructTag, Tag, TypeId, TypeRegistry, Value};

#[test]
fn entries_round_trip_with_terminator() {
	let registry = TypeRegistry::with_struct().expect("struct registers");
	let codec = Codec::new(&registry);

	let mut nested = CompoundTag::new();
	nested.insert("level", 3_i32);

	let mut compound = CompoundTag::new();
	compound.insert("name", "steve");
	compound.insert("pos", vec![1_i32, 64, -2]);
	compound.insert("nested", nested);
	compound.insert("slots", StructTag::with_elements(vec![Tag::unnamed(2_i8)]));

	let root = Tag::new("player", compound);
	let bytes = codec.encode_to_vec(&root).expect("encode compound");
	assert_eq!(bytes.last(), Some(&TypeId::END.raw()));

	let decoded = codec.decode_slice(&bytes).expect("decode compound");
	assert_eq!(decoded, root);
}

#[test]
fn iteration_is_key_ordered() {
	let compound: CompoundTag = [("b", 2_i32), ("a", 1_i32), ("c", 3_i32)].into_iter().collect();
	let keys: Vec<&str> = compound.iter().map(|(name, _)| name).collect();
	assert_eq!(keys, ["a", "b", "c"]);
}

#[test]
fn insert_replaces_and_returns_previous() {
	let mut compound = CompoundTag::new();
	assert_eq!(compound.insert("k", 1_i8), None);
	assert_eq!(compound.insert("k", "v"), Some(Value::Byte(1)));
	assert_eq!(compound.get("k").and_then(Value::as_str), Some("v"));
	assert_eq!(compound.remove("k"), Some(Value::from("v")));
	assert!(compound.is_empty());
}

#[test]
fn missing_terminator_is_an_io_error() {
	let registry = TypeRegistry::new();
	let codec = Codec::new(&registry);
	let bytes = [TypeId::BYTE.raw(), 0x00, 0x01, b'x', 0x05];

	let err = codec.read_payload(&mut &bytes[..], TypeId::COMPOUND, 1).expect_err("unterminated compound");
	assert!(matches!(err, NbtError::Io(_)));
}
