use super::{encode, encode_value, encode_with};
use crate::codec::{ArrayData, CodecError, CodecOptions, Collection, Native, NumericArray, Record, TextEncoding, Value};

#[test]
fn scalar_layout_matches_reference_reader() {
	let bytes = encode(&Native::from(1.0)).expect("encodes");
	let mut expected = vec![0, 2, 1, 0, 0, 0, 1, 0, 0, 0];
	expected.extend_from_slice(&1.0_f64.to_le_bytes());
	assert_eq!(bytes, expected);
}

#[test]
fn text_layout_is_tag_three_with_one_by_n_shape() {
	let bytes = encode(&Native::from("hi")).expect("encodes");
	assert_eq!(bytes, vec![3, 2, 1, 0, 0, 0, 2, 0, 0, 0, b'h', b'i']);
}

#[test]
fn record_layout_has_fixed_unit_shape() {
	let native = Native::map([("a", Native::from(true))]);
	let bytes = encode(&native).expect("encodes");
	let expected = vec![
		255, // record tag
		1, 1, 0, 0, 0, b'a', // field names
		1, 1, 0, 0, 0, // shape [1]
		2, 2, 1, 0, 0, 0, 1, 0, 0, 0, 1, // bool 1x1
	];
	assert_eq!(bytes, expected);
}

#[test]
fn empty_map_is_record_without_fields() {
	let bytes = encode(&Native::map(Vec::<(String, Native)>::new())).expect("encodes");
	assert_eq!(bytes, vec![255, 0, 1, 1, 0, 0, 0]);
}

#[test]
fn empty_list_is_zero_length_collection() {
	let bytes = encode(&Native::List(vec![])).expect("encodes");
	assert_eq!(bytes, vec![254, 1, 0, 0, 0, 0]);
}

#[test]
fn collection_elements_follow_row_major_order() {
	let items = (0..4_u8)
		.map(|i| Value::Numeric(NumericArray::row(ArrayData::U8(vec![i]))))
		.collect();
	let collection = Collection::new(vec![2, 2], items).expect("four items");
	let bytes = encode_value(&Value::Collection(collection)).expect("encodes");
	assert_eq!(bytes[0], 254);
	assert_eq!(&bytes[1..10], &[2, 2, 0, 0, 0, 2, 0, 0, 0]);
	// each element: tag, shape [1, 1], one byte
	let elements: Vec<u8> = bytes[10..].chunks(11).map(|chunk| chunk[10]).collect();
	assert_eq!(elements, vec![0, 1, 2, 3]);
	assert!(bytes[10..].chunks(11).all(|chunk| chunk[0] == 5), "uint8 tags");
}

#[test]
fn field_name_outside_encoding_is_unsupported() {
	let mut record = Record::new();
	record.push("\u{2122}", Value::Numeric(NumericArray::row(ArrayData::U8(vec![])))).expect("unique name");
	let err = encode_value_with_latin1(&Value::Record(record));
	assert!(matches!(err, CodecError::UnsupportedType { .. }));
}

#[test]
fn deep_lists_hit_depth_limit() {
	let mut native = Native::from(0.0);
	for _ in 0..10 {
		native = Native::List(vec![native, Native::from("pad")]);
	}
	let opt = CodecOptions {
		max_depth: 3,
		..CodecOptions::default()
	};
	let err = encode_with(&native, &opt).expect_err("ten levels exceed three");
	assert!(matches!(err, CodecError::EncodingLimitExceeded { what: "nesting depth", .. }));
}

fn encode_value_with_latin1(value: &Value) -> CodecError {
	super::encode_value_with(value, &CodecOptions::with_encoding(TextEncoding::Latin1)).expect_err("encoding fails")
}
