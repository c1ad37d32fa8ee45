use crate::nbt::{NbtError, ReadNbt, TypeId, WriteNbt};

#[test]
fn primitives_are_big_endian() {
	let mut out = Vec::new();
	out.write_i16(0x0102).expect("write short");
	out.write_i32(-2).expect("write int");
	out.write_type_id(TypeId::COMPOUND).expect("write id");
	assert_eq!(out, [0x01, 0x02, 0xFF, 0xFF, 0xFF, 0xFE, 0x0A]);

	let mut input = out.as_slice();
	assert_eq!(input.read_i16().expect("read short"), 0x0102);
	assert_eq!(input.read_i32().expect("read int"), -2);
	assert_eq!(input.read_type_id().expect("read id"), TypeId::COMPOUND);
}

#[test]
fn string_carries_u16_length_prefix() {
	let mut out = Vec::new();
	out.write_string("sword").expect("write string");
	assert_eq!(&out[..2], &[0x00, 0x05]);
	assert_eq!(&out[2..], b"sword");
}

#[test]
fn oversized_string_is_rejected() {
	let text = "x".repeat(usize::from(u16::MAX) + 1);
	let err = Vec::<u8>::new().write_string(&text).expect_err("string should not fit");
	assert!(matches!(err, NbtError::StringTooLong { len } if len == text.len()));
}

#[test]
fn invalid_utf8_is_reported() {
	let bytes = [0x00, 0x02, 0xC3, 0x28];
	let err = (&bytes[..]).read_string().expect_err("invalid utf-8");
	assert!(matches!(err, NbtError::InvalidUtf8(_)));
}

#[test]
fn short_input_surfaces_io_error() {
	let bytes = [0x00, 0x01];
	let err = (&bytes[..]).read_i32().expect_err("truncated int");
	assert!(matches!(err, NbtError::Io(ref io) if io.kind() == std::io::ErrorKind::UnexpectedEof));
}
