use super::{collapse, normalize};
use crate::codec::{ArrayData, CharArray, CodecError, CodecOptions, Collection, ElementType, Native, NumericArray, Scalar, TextEncoding, Value};

fn opt() -> CodecOptions {
	CodecOptions::default()
}

#[test]
fn scalar_becomes_one_by_one_array() {
	let Value::Numeric(array) = normalize(&Native::from(3.5), &opt()).expect("normalizes") else {
		panic!("expected numeric array");
	};
	assert_eq!(array.shape(), &[1, 1]);
	assert_eq!(array.element_type(), ElementType::F64);
}

#[test]
fn text_becomes_single_row_char_array() {
	let Value::Char(chars) = normalize(&Native::from("hi"), &opt()).expect("normalizes") else {
		panic!("expected char array");
	};
	assert_eq!(chars.shape(), &[1, 2]);
	assert_eq!(chars.bytes(), b"hi");
}

#[test]
fn text_outside_declared_encoding_is_unsupported() {
	let err = normalize(&Native::from("\u{2122}"), &CodecOptions::with_encoding(TextEncoding::Latin1)).expect_err("not latin1");
	assert!(matches!(err, CodecError::UnsupportedType { .. }));
}

#[test]
fn map_keeps_insertion_order() {
	let native = Native::map([("z", Native::from(1.0)), ("a", Native::from(2.0))]);
	let Value::Record(record) = normalize(&native, &opt()).expect("normalizes") else {
		panic!("expected record");
	};
	let names: Vec<&str> = record.fields().iter().map(|(name, _)| name.as_str()).collect();
	assert_eq!(names, vec!["z", "a"]);
}

#[test]
fn duplicate_map_keys_are_unsupported() {
	let native = Native::map([("a", Native::from(1.0)), ("a", Native::from(2.0))]);
	let err = normalize(&native, &opt()).expect_err("duplicate key");
	assert!(matches!(err, CodecError::UnsupportedType { .. }));
}

#[test]
fn map_with_256_keys_exceeds_limit() {
	let native = Native::map((0..256).map(|i| (i.to_string(), Native::from(true))));
	let err = normalize(&native, &opt()).expect_err("too many fields");
	assert!(matches!(err, CodecError::EncodingLimitExceeded { what: "field names", .. }));
}

#[test]
fn equal_length_nested_lists_fold_into_matrix() {
	let native = Native::List(vec![
		Native::List(vec!["foo".into(), "bar".into()]),
		Native::List(vec!["bar".into(), "baz".into()]),
	]);
	let Value::Collection(collection) = normalize(&native, &opt()).expect("normalizes") else {
		panic!("expected collection");
	};
	assert_eq!(collection.shape(), &[2, 2]);
	assert_eq!(collection.items().len(), 4);
}

#[test]
fn ragged_lists_stay_one_dimensional() {
	let native = Native::List(vec![Native::List(vec![1.0.into()]), Native::List(vec![])]);
	let Value::Collection(collection) = normalize(&native, &opt()).expect("normalizes") else {
		panic!("expected collection");
	};
	assert_eq!(collection.shape(), &[2]);
	assert!(matches!(collection.items()[1], Value::Collection(_)));
}

#[test]
fn empty_lists_keep_their_dimensions() {
	let empty = normalize(&Native::List(vec![]), &opt()).expect("normalizes");
	assert!(matches!(&empty, Value::Collection(c) if c.shape() == [0]));

	let pair = normalize(&Native::List(vec![Native::List(vec![]), Native::List(vec![])]), &opt()).expect("normalizes");
	assert!(matches!(&pair, Value::Collection(c) if c.shape() == [2, 0]));
	assert_eq!(collapse(pair, &opt()).expect("collapses"), Native::List(vec![Native::List(vec![]), Native::List(vec![])]));
}

#[test]
fn arrays_inside_lists_are_not_exploded() {
	let row = NumericArray::row(ArrayData::F64(vec![1.0, 2.0]));
	let native = Native::List(vec![row.clone().into(), row.into()]);
	let Value::Collection(collection) = normalize(&native, &opt()).expect("normalizes") else {
		panic!("expected collection");
	};
	assert_eq!(collection.shape(), &[2]);
}

#[test]
fn nesting_beyond_max_depth_fails() {
	let mut native = Native::from(1.0);
	for _ in 0..5 {
		native = Native::map([("inner", native)]);
	}
	let shallow = CodecOptions {
		max_depth: 4,
		..CodecOptions::default()
	};
	let err = normalize(&native, &shallow).expect_err("five records exceed depth four");
	assert!(matches!(err, CodecError::EncodingLimitExceeded { what: "nesting depth", .. }));
}

#[test]
fn single_element_array_collapses_to_scalar() {
	let array = NumericArray::new(vec![1, 1, 1], ArrayData::U16(vec![9])).expect("shape matches");
	assert_eq!(collapse(Value::Numeric(array), &opt()).expect("collapses"), Native::Scalar(Scalar::U16(9)));
}

#[test]
fn multi_row_chars_stay_raw() {
	let chars = CharArray::new(vec![2, 3], b"foobar".to_vec()).expect("shape matches");
	assert_eq!(collapse(Value::Char(chars.clone()), &opt()).expect("collapses"), Native::Chars(chars));
}

#[test]
fn invalid_utf8_row_fails_to_collapse() {
	let chars = CharArray::row(vec![0xc3]);
	let err = collapse(Value::Char(chars), &opt()).expect_err("dangling utf8 lead byte");
	assert!(matches!(err, CodecError::InvalidText { what: "char array", .. }));
}

#[test]
fn zero_dimensional_collection_collapses_to_its_element() {
	let collection = Collection::new(vec![], vec![Value::Numeric(NumericArray::from_scalar(Scalar::I8(-3)))]).expect("one element");
	assert_eq!(collapse(Value::Collection(collection), &opt()).expect("collapses"), Native::Scalar(Scalar::I8(-3)));
}

#[test]
fn empty_wide_collection_is_bounded() {
	let collection = Collection::new(vec![u32::MAX as usize, 0], vec![]).expect("zero elements");
	let err = collapse(Value::Collection(collection), &opt()).expect_err("billions of empty rows");
	assert!(matches!(err, CodecError::EncodingLimitExceeded { what: "list nodes", .. }));
}

#[test]
fn folded_dimensions_share_the_depth_budget() {
	let shallow = CodecOptions {
		max_depth: 2,
		..CodecOptions::default()
	};
	let square = Native::List(vec![Native::List(vec![1.0.into(), 2.0.into()]), Native::List(vec![3.0.into(), 4.0.into()])]);
	let value = normalize(&square, &shallow).expect("two list levels fit");
	assert_eq!(collapse(value, &shallow).expect("collapses"), square);

	let cube = Native::List(vec![square]);
	let err = normalize(&cube, &shallow).expect_err("three list levels");
	assert!(matches!(err, CodecError::EncodingLimitExceeded { what: "nesting depth", .. }));

	let collection = Collection::new(vec![1, 1, 1], vec![Value::Numeric(NumericArray::from_scalar(Scalar::F64(1.0)))]).expect("one element");
	let err = collapse(Value::Collection(collection), &shallow).expect_err("three dimensions");
	assert!(matches!(err, CodecError::EncodingLimitExceeded { what: "nesting depth", .. }));
}
