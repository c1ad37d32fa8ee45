use nbtkit::nbt::{CompoundTag, ListTag, StructTag, TypeId, Value};

use super::TreeStats;

#[test]
fn scalar_root_is_one_node() {
	let stats = TreeStats::scan(&Value::Int(7));
	assert_eq!(stats, TreeStats { node_count: 1, max_depth: 1 });
}

#[test]
fn nested_containers_count_every_node() {
	let mut list = ListTag::new(TypeId::INT);
	list.push(1_i32).expect("int element");
	list.push(2_i32).expect("int element");

	let mut items = StructTag::new();
	items.append_string("a");

	let mut root = CompoundTag::new();
	root.insert("list", list);
	root.insert("items", items);

	let stats = TreeStats::scan(&Value::from(root));
	assert_eq!(stats, TreeStats { node_count: 6, max_depth: 3 });
}
