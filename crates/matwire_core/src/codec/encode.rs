use tracing::{debug, trace};

use crate::codec::normalize::check_depth;
use crate::codec::pack::{pack_array, pack_chars, pack_fields, pack_shape};
use crate::codec::{COLLECTION_TAG, CodecOptions, ElementType, Native, RECORD_TAG, Result, Value, normalize};

/// Encode caller data with default options.
pub fn encode(native: &Native) -> Result<Vec<u8>> {
	encode_with(native, &CodecOptions::default())
}

/// Normalize and encode caller data.
pub fn encode_with(native: &Native, opt: &CodecOptions) -> Result<Vec<u8>> {
	let value = normalize(native, opt)?;
	encode_value_with(&value, opt)
}

/// Encode a canonical wire value with default options.
pub fn encode_value(value: &Value) -> Result<Vec<u8>> {
	encode_value_with(value, &CodecOptions::default())
}

/// Encode a canonical wire value.
pub fn encode_value_with(value: &Value, opt: &CodecOptions) -> Result<Vec<u8>> {
	let mut out = Vec::new();
	encode_into(value, opt, 0, &mut out)?;
	debug!(kind = value.kind(), bytes = out.len(), "encoded value");
	Ok(out)
}

fn encode_into(value: &Value, opt: &CodecOptions, depth: u32, out: &mut Vec<u8>) -> Result<()> {
	match value {
		Value::Numeric(array) => {
			out.push(array.element_type().tag());
			pack_array(array, out)
		}
		Value::Char(chars) => {
			out.push(ElementType::Char.tag());
			pack_chars(chars, out)
		}
		Value::Record(record) => {
			check_depth(depth, opt)?;
			trace!(fields = record.len(), depth, "encoding record");
			let names: Vec<&str> = record.fields().iter().map(|(name, _)| name.as_str()).collect();
			out.push(RECORD_TAG);
			pack_fields(&names, opt.encoding, out)?;
			// Always a 1x1 struct on the wire; record arrays are not supported.
			pack_shape(&[1], out)?;
			for (_, field) in record.fields() {
				encode_into(field, opt, depth + 1, out)?;
			}
			Ok(())
		}
		Value::Collection(collection) => {
			check_depth(depth, opt)?;
			trace!(shape = ?collection.shape(), depth, "encoding collection");
			out.push(COLLECTION_TAG);
			pack_shape(collection.shape(), out)?;
			for item in collection.items() {
				encode_into(item, opt, depth + 1, out)?;
			}
			Ok(())
		}
	}
}

#[cfg(test)]
mod tests;
