use crate::nbt::{Codec, Compression, NbtFile, StructTag, Tag, TypeRegistry};

fn sample_root() -> Tag {
	let mut items = StructTag::new();
	items.append_int(5);
	items.append_string("sword");
	Tag::new("inventory", items)
}

#[test]
fn save_and_open_keep_compression() {
	let registry = TypeRegistry::with_struct().expect("struct registers");
	let codec = Codec::new(&registry);
	let dir = tempfile::tempdir().expect("temp dir");

	for compression in [Compression::None, Compression::Gzip, Compression::Zstd] {
		let path = dir.path().join(format!("inventory.{}.nbt", compression.as_str()));
		NbtFile::new(sample_root(), compression).save(&path, &codec).expect("save");

		let opened = NbtFile::open(&path, &codec).expect("open");
		assert_eq!(opened.compression, compression);
		assert_eq!(opened.root, sample_root());
	}
}

#[test]
fn missing_file_is_io_error() {
	let registry = TypeRegistry::new();
	let codec = Codec::new(&registry);
	let dir = tempfile::tempdir().expect("temp dir");

	let err = NbtFile::open(dir.path().join("absent.nbt"), &codec).expect_err("missing file");
	assert!(matches!(err, crate::nbt::NbtError::Io(_)));
}
