use crate::nbt::{Number, Value};

#[test]
fn numeric_variants_convert() {
	assert_eq!(Value::Byte(-2).to_number(), Some(Number::Int(-2)));
	assert_eq!(Value::Long(9).to_number(), Some(Number::Int(9)));
	assert_eq!(Value::Float(2.5).to_number(), Some(Number::Float(2.5)));
	assert_eq!(Value::ByteArray(vec![1]).to_number(), None);
}

#[test]
fn strings_parse_leniently() {
	assert_eq!(Value::from(" 12 ").to_number(), Some(Number::Int(12)));
	assert_eq!(Value::from("1.75").to_number(), Some(Number::Float(1.75)));
	assert_eq!(Value::from("sword").to_number(), None);
}

#[test]
fn narrowing_follows_primitive_cast_rules() {
	assert_eq!(Number::Float(3.9).to_i32(), 3);
	assert_eq!(Number::Float(-3.9).to_i64(), -3);
	assert_eq!(Number::Float(f64::NAN).to_i32(), 0);
	assert_eq!(Number::Float(1e12).to_i32(), i32::MAX);
	assert_eq!(Number::Int(300).to_i8(), 44);
	assert_eq!(Number::Int(70_000).to_i16(), 4464);
	assert_eq!(Number::Int(3).to_f64(), 3.0);
}

#[test]
fn booleans_are_positive_bytes() {
	assert!(Value::Byte(1).to_boolean());
	assert!(!Value::Byte(0).to_boolean());
	assert!(!Value::Byte(-1).to_boolean());
	assert!(Value::Double(2.0).to_boolean());
	assert!(!Value::from("yes").to_boolean());
}
