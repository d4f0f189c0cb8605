use super::{pack_array, pack_fields, pack_shape, pack_string, unpack_array, unpack_chars, unpack_fields, unpack_shape, unpack_string};
use crate::codec::{ArrayData, CodecError, CodecOptions, Cursor, ElementType, NumericArray, TextEncoding};

#[test]
fn shape_header_layout() {
	let mut out = Vec::new();
	pack_shape(&[2, 3], &mut out).expect("shape packs");
	assert_eq!(out, vec![2, 2, 0, 0, 0, 3, 0, 0, 0]);
}

#[test]
fn shape_with_255_dimensions_round_trips() {
	let shape: Vec<usize> = (0..255).collect();
	let mut out = Vec::new();
	pack_shape(&shape, &mut out).expect("255 dims fit");
	assert_eq!(out.len(), 1 + 255 * 4);

	let mut cursor = Cursor::new(&out);
	assert_eq!(unpack_shape(&mut cursor).expect("shape unpacks"), shape);
	assert_eq!(cursor.remaining(), 0);
}

#[test]
fn shape_with_256_dimensions_is_rejected() {
	let mut out = Vec::new();
	let err = pack_shape(&[129; 256], &mut out).expect_err("256 dims exceed u8 count");
	assert!(matches!(
		err,
		CodecError::EncodingLimitExceeded {
			what: "shape dimensions",
			count: 256,
			max: 255
		}
	));
	assert!(out.is_empty(), "nothing written on failure");
}

#[cfg(target_pointer_width = "64")]
#[test]
fn dimension_wider_than_u32_is_rejected() {
	let wide = usize::try_from(u64::from(u32::MAX) + 1).expect("fits on 64-bit");
	let err = pack_shape(&[1, wide], &mut Vec::new()).expect_err("dimension exceeds u32");
	assert!(matches!(err, CodecError::EncodingLimitExceeded { what: "shape dimension", .. }));
}

#[test]
fn truncated_shape_dimensions_fail() {
	let mut cursor = Cursor::new(&[2, 1, 0, 0, 0, 9]);
	let err = unpack_shape(&mut cursor).expect_err("second dimension is cut short");
	assert!(matches!(err, CodecError::TruncatedInput { at: 1, need: 8, rem: 5 }));
}

#[test]
fn string_has_no_terminator_or_padding() {
	let mut out = Vec::new();
	pack_string(b"hi", &mut out).expect("string packs");
	assert_eq!(out, vec![2, 0, 0, 0, b'h', b'i']);

	let mut cursor = Cursor::new(&out);
	assert_eq!(unpack_string(&mut cursor).expect("string unpacks"), b"hi");
}

#[test]
fn oversized_string_length_is_truncated_input() {
	let mut cursor = Cursor::new(&[0xff, 0xff, 0xff, 0x7f, b'x']);
	let err = unpack_string(&mut cursor).expect_err("declared length exceeds buffer");
	assert!(matches!(err, CodecError::TruncatedInput { at: 4, rem: 1, .. }));
}

#[test]
fn field_list_of_255_round_trips() {
	let names: Vec<String> = (0..255).map(|i| i.to_string()).collect();
	let mut out = Vec::new();
	pack_fields(&names, TextEncoding::Utf8, &mut out).expect("255 names fit");

	let mut cursor = Cursor::new(&out);
	assert_eq!(unpack_fields(&mut cursor, TextEncoding::Utf8).expect("names unpack"), names);
}

#[test]
fn field_list_of_256_is_rejected() {
	let names: Vec<String> = (0..256).map(|i| i.to_string()).collect();
	let err = pack_fields(&names, TextEncoding::Utf8, &mut Vec::new()).expect_err("256 names exceed u8 count");
	assert!(matches!(err, CodecError::EncodingLimitExceeded { what: "field names", count: 256, .. }));
}

#[test]
fn field_name_outside_latin1_is_unsupported() {
	let err = pack_fields(&["\u{2122}"], TextEncoding::Latin1, &mut Vec::new()).expect_err("trademark sign is not latin1");
	assert!(matches!(err, CodecError::UnsupportedType { .. }));
}

#[test]
fn invalid_utf8_field_name_fails() {
	let mut cursor = Cursor::new(&[1, 1, 0, 0, 0, 0xff]);
	let err = unpack_fields(&mut cursor, TextEncoding::Utf8).expect_err("0xff is not utf8");
	assert!(matches!(err, CodecError::InvalidText { what: "field name", .. }));
}

#[test]
fn float32_matrix_is_bit_exact() {
	let values: Vec<f32> = (0..6).map(|i| i as f32).collect();
	let array = NumericArray::new(vec![2, 3], ArrayData::F32(values.clone())).expect("shape matches");
	let mut out = Vec::new();
	pack_array(&array, &mut out).expect("array packs");
	assert_eq!(out.len(), 1 + 2 * 4 + 6 * 4);

	let mut cursor = Cursor::new(&out);
	let decoded = unpack_array(&mut cursor, ElementType::F32, &CodecOptions::default()).expect("array unpacks");
	assert_eq!(decoded.shape(), &[2, 3]);
	let ArrayData::F32(got) = decoded.data() else {
		panic!("expected f32 storage");
	};
	let bits = |v: &[f32]| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
	assert_eq!(bits(got), bits(&values));
}

#[test]
fn every_integer_type_round_trips() {
	let cases = [
		ArrayData::Bool(vec![true, false, true]),
		ArrayData::I8(vec![-128, 0, 127]),
		ArrayData::U8(vec![0, 1, 255]),
		ArrayData::I16(vec![i16::MIN, -1, i16::MAX]),
		ArrayData::U16(vec![0, 512, u16::MAX]),
		ArrayData::I32(vec![i32::MIN, 0, i32::MAX]),
		ArrayData::U32(vec![0, 7, u32::MAX]),
		ArrayData::I64(vec![i64::MIN, 42, i64::MAX]),
		ArrayData::U64(vec![0, 1 << 40, u64::MAX]),
		ArrayData::F64(vec![-0.5, 0.0, f64::MAX]),
	];
	for data in cases {
		let ty = data.element_type();
		let array = NumericArray::new(vec![3], data).expect("shape matches");
		let mut out = Vec::new();
		pack_array(&array, &mut out).expect("array packs");
		let decoded = unpack_array(&mut Cursor::new(&out), ty, &CodecOptions::default()).expect("array unpacks");
		assert_eq!(decoded, array, "{}", ty.as_str());
	}
}

#[test]
fn element_ceiling_is_checked_before_reading() {
	let mut out = Vec::new();
	pack_shape(&[1000, 1000], &mut out).expect("shape packs");
	let opt = CodecOptions {
		max_elements: 1000,
		..CodecOptions::default()
	};
	let err = unpack_array(&mut Cursor::new(&out), ElementType::F64, &opt).expect_err("million elements exceed ceiling");
	assert!(matches!(err, CodecError::EncodingLimitExceeded { what: "element count", .. }));
}

#[test]
fn short_char_body_is_truncated() {
	let mut out = Vec::new();
	pack_shape(&[1, 4], &mut out).expect("shape packs");
	out.extend_from_slice(b"abc");
	let err = unpack_chars(&mut Cursor::new(&out), &CodecOptions::default()).expect_err("one byte missing");
	assert!(matches!(err, CodecError::TruncatedInput { need: 4, rem: 3, .. }));
}
