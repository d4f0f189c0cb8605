use matwire::codec::{ArrayData, CharArray, CodecOptions, Native, NumericArray, Scalar, check_nested_nodes};
use serde_json::{Map, Number, Value as JsonValue};

use crate::cmd::{CliError, Result};

/// Convert a JSON document into caller data.
///
/// Integers that fit `i64` become `int64` scalars, other numbers `double`.
/// `null` has no payload representation.
pub(crate) fn native_from_json(value: &JsonValue) -> Result<Native> {
	from_json_at(value, "")
}

fn from_json_at(value: &JsonValue, path: &str) -> Result<Native> {
	match value {
		JsonValue::Null => Err(CliError::UnsupportedJson {
			path: pointer(path),
			detail: "null".to_owned(),
		}),
		JsonValue::Bool(v) => Ok(Native::Scalar(Scalar::Bool(*v))),
		JsonValue::Number(number) => number_to_scalar(number).map(Native::Scalar).ok_or_else(|| CliError::UnsupportedJson {
			path: pointer(path),
			detail: format!("number {number}"),
		}),
		JsonValue::String(text) => Ok(Native::Text(text.clone())),
		JsonValue::Array(items) => items
			.iter()
			.enumerate()
			.map(|(index, item)| from_json_at(item, &format!("{path}/{index}")))
			.collect::<Result<Vec<_>>>()
			.map(Native::List),
		JsonValue::Object(entries) => entries
			.iter()
			.map(|(key, item)| Ok((key.clone(), from_json_at(item, &format!("{path}/{}", escape_pointer(key)))?)))
			.collect::<Result<Vec<_>>>()
			.map(Native::Map),
	}
}

fn number_to_scalar(number: &Number) -> Option<Scalar> {
	if let Some(v) = number.as_i64() {
		return Some(Scalar::I64(v));
	}
	if let Some(v) = number.as_u64() {
		return Some(Scalar::U64(v));
	}
	number.as_f64().map(Scalar::F64)
}

fn pointer(path: &str) -> String {
	if path.is_empty() { "/".to_owned() } else { path.to_owned() }
}

fn escape_pointer(key: &str) -> String {
	key.replace('~', "~0").replace('/', "~1")
}

/// Render caller data as JSON. Arrays nest one level per dimension.
///
/// Fails when an array shape would expand into more nodes than
/// `opt.max_elements`.
pub(crate) fn native_to_json(native: &Native, opt: &CodecOptions) -> Result<JsonValue> {
	Ok(match native {
		Native::Scalar(scalar) => scalar_to_json(*scalar),
		Native::Text(text) => JsonValue::String(text.clone()),
		Native::Array(array) => array_to_json(array, opt)?,
		Native::Chars(chars) => chars_to_json(chars, opt)?,
		Native::Map(entries) => {
			let mut out = Map::new();
			for (key, value) in entries {
				out.insert(key.clone(), native_to_json(value, opt)?);
			}
			JsonValue::Object(out)
		}
		Native::List(items) => JsonValue::Array(items.iter().map(|item| native_to_json(item, opt)).collect::<Result<_>>()?),
	})
}

pub(crate) fn scalar_to_json(scalar: Scalar) -> JsonValue {
	match scalar {
		Scalar::Bool(v) => JsonValue::Bool(v),
		Scalar::F64(v) => Number::from_f64(v).map_or(JsonValue::Null, JsonValue::Number),
		Scalar::F32(v) => Number::from_f64(f64::from(v)).map_or(JsonValue::Null, JsonValue::Number),
		Scalar::U64(v) => JsonValue::from(v),
		other => other.as_i64().map_or(JsonValue::Null, JsonValue::from),
	}
}

fn array_to_json(array: &NumericArray, opt: &CodecOptions) -> Result<JsonValue> {
	check_nested_nodes(array.shape(), opt)?;
	let data: &ArrayData = array.data();
	let mut leaves = (0..array.len()).filter_map(|index| data.get(index)).map(scalar_to_json);
	Ok(nest(array.shape(), &mut leaves))
}

fn chars_to_json(chars: &CharArray, opt: &CodecOptions) -> Result<JsonValue> {
	let head = chars.shape().split_last().map_or(&[][..], |(_, head)| head);
	check_nested_nodes(head, opt)?;
	let mut rows = chars.rows().map(|row| JsonValue::String(String::from_utf8_lossy(row).into_owned()));
	Ok(nest(head, &mut rows))
}

fn nest(shape: &[usize], leaves: &mut impl Iterator<Item = JsonValue>) -> JsonValue {
	match shape.split_first() {
		None => leaves.next().unwrap_or(JsonValue::Null),
		Some((dim, rest)) => JsonValue::Array((0..*dim).map(|_| nest(rest, leaves)).collect()),
	}
}
