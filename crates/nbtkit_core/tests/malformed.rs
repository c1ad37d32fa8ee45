//! Decoder behavior on hand-built malformed input.

use std::io::ErrorKind;

use nbtkit::nbt::{Codec, CodecOptions, NbtError, StructTag, TypeId, TypeRegistry};
use nbtkit_testkit::{BYTE_ARRAY, COMPOUND, END, INT, LIST, STRING, STRUCT, WireBuilder, nested_list_chain, nested_struct_chain};

fn registry() -> TypeRegistry {
	TypeRegistry::with_struct().expect("struct registers")
}

#[test]
fn struct_without_registration_is_unknown() {
	let registry = TypeRegistry::new();
	let codec = Codec::new(&registry);
	let bytes = WireBuilder::new().header(STRUCT, "s").i32(0).finish();

	let err = codec.decode_slice(&bytes).expect_err("struct is not bound");
	assert!(matches!(err, NbtError::UnknownTypeId { id } if id == StructTag::TYPE_ID));
}

#[test]
fn struct_count_past_input_is_io_error() {
	let registry = registry();
	let codec = Codec::new(&registry);
	let bytes = WireBuilder::new().header(STRUCT, "").i32(3).header(INT, "a").i32(1).finish();

	let err = codec.decode_slice(&bytes).expect_err("two elements missing");
	assert!(matches!(err, NbtError::Io(ref io) if io.kind() == std::io::ErrorKind::UnexpectedEof));
}

#[test]
fn struct_count_over_limit_is_rejected() {
	let registry = registry();
	let codec = Codec::with_options(&registry, CodecOptions { max_len: 4, ..CodecOptions::default() });
	let bytes = WireBuilder::new().header(STRUCT, "").i32(5).finish();

	let err = codec.decode_slice(&bytes).expect_err("count over limit");
	assert!(matches!(err, NbtError::LengthTooLarge { kind: "struct", .. }));
}

#[test]
fn compound_missing_terminator_is_io_error() {
	let registry = registry();
	let codec = Codec::new(&registry);
	let bytes = WireBuilder::new().header(COMPOUND, "").header(STRING, "k").string("v").finish();

	let err = codec.decode_slice(&bytes).expect_err("no terminator");
	assert!(matches!(err, NbtError::Io(_)));
}

#[test]
fn terminator_list_with_items_is_rejected() {
	let registry = registry();
	let codec = Codec::new(&registry);
	let bytes = WireBuilder::new().header(LIST, "").id(END).i32(2).finish();

	let err = codec.decode_slice(&bytes).expect_err("end-typed list with items");
	assert!(matches!(err, NbtError::InvalidListType { .. }));
}

#[test]
fn list_of_unknown_type_is_rejected() {
	let registry = registry();
	let codec = Codec::new(&registry);
	let bytes = WireBuilder::new().header(LIST, "").id(99).i32(1).raw(&[0; 4]).finish();

	let err = codec.decode_slice(&bytes).expect_err("unknown element type");
	assert!(matches!(err, NbtError::UnknownTypeId { id: TypeId(99) }));
}

#[test]
fn depth_limit_applies_across_container_kinds() {
	let registry = registry();
	let codec = Codec::with_options(&registry, CodecOptions { max_depth: 8, ..CodecOptions::default() });

	assert!(codec.decode_slice(&nested_list_chain(8)).is_ok());
	assert!(codec.decode_slice(&nested_struct_chain(8)).is_ok());
	assert!(matches!(codec.decode_slice(&nested_list_chain(9)), Err(NbtError::DepthExceeded { .. })));
	assert!(matches!(codec.decode_slice(&nested_struct_chain(9)), Err(NbtError::DepthExceeded { .. })));
}

#[test]
fn default_depth_limit_stops_hostile_nesting() {
	let registry = registry();
	let codec = Codec::new(&registry);

	let err = codec.decode_slice(&nested_struct_chain(10_000)).expect_err("hostile nesting");
	assert!(matches!(err, NbtError::DepthExceeded { max_depth: 512 }));
}

fn is_eof(err: &NbtError) -> bool {
	matches!(err, NbtError::Io(io) if io.kind() == ErrorKind::UnexpectedEof)
}

#[test]
fn nested_structs_with_huge_counts_fail_without_reserving() {
	let registry = registry();
	let codec = Codec::new(&registry);
	let max = i32::try_from(codec.options().max_len).expect("default limit fits i32");

	let mut builder = WireBuilder::new().header(STRUCT, "");
	for _ in 0..40 {
		builder = builder.i32(max).header(STRUCT, "");
	}
	let bytes = builder.i32(max).finish();

	let err = codec.decode_slice(&bytes).expect_err("counts far exceed input");
	assert!(is_eof(&err));
}

#[test]
fn list_with_huge_count_fails_without_reserving() {
	let registry = registry();
	let codec = Codec::new(&registry);
	let max = i32::try_from(codec.options().max_len).expect("default limit fits i32");
	let bytes = WireBuilder::new().header(LIST, "").id(INT).i32(max).i32(1).finish();

	let err = codec.decode_slice(&bytes).expect_err("count far exceeds input");
	assert!(is_eof(&err));
}

#[test]
fn byte_array_shorter_than_prefix_is_io_error() {
	let registry = registry();
	let codec = Codec::new(&registry);
	let max = i32::try_from(codec.options().max_len).expect("default limit fits i32");
	let bytes = WireBuilder::new().header(BYTE_ARRAY, "").i32(max).raw(&[1, 2, 3]).finish();

	let err = codec.decode_slice(&bytes).expect_err("length far exceeds input");
	assert!(is_eof(&err));
}
