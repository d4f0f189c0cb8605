use tracing::{debug, trace};

use crate::codec::normalize::check_depth;
use crate::codec::pack::{declared_count, unpack_array, unpack_chars, unpack_fields, unpack_shape};
use crate::codec::{CodecError, CodecOptions, Collection, Cursor, ElementType, Native, Record, Result, Tag, Value, collapse};

/// Decode one value starting at `offset` with default options.
///
/// Returns the collapsed value and the offset just past its last byte.
pub fn decode(bytes: &[u8], offset: usize) -> Result<(Native, usize)> {
	decode_with(bytes, offset, &CodecOptions::default())
}

/// Decode and collapse one value starting at `offset`.
pub fn decode_with(bytes: &[u8], offset: usize, opt: &CodecOptions) -> Result<(Native, usize)> {
	let (value, end) = decode_value_with(bytes, offset, opt)?;
	Ok((collapse(value, opt)?, end))
}

/// Decode one canonical wire value starting at `offset` with default options.
pub fn decode_value(bytes: &[u8], offset: usize) -> Result<(Value, usize)> {
	decode_value_with(bytes, offset, &CodecOptions::default())
}

/// Decode one canonical wire value starting at `offset`.
pub fn decode_value_with(bytes: &[u8], offset: usize, opt: &CodecOptions) -> Result<(Value, usize)> {
	let mut cursor = Cursor::at(bytes, offset)?;
	let value = decode_impl(&mut cursor, opt, 0)?;
	debug!(kind = value.kind(), offset, end = cursor.pos(), "decoded value");
	Ok((value, cursor.pos()))
}

/// Decode consecutive values until the buffer is exhausted.
pub fn decode_all(bytes: &[u8], opt: &CodecOptions) -> Result<Vec<Native>> {
	let mut out = Vec::new();
	let mut offset = 0;
	while offset < bytes.len() {
		let (value, end) = decode_with(bytes, offset, opt)?;
		out.push(value);
		offset = end;
	}
	Ok(out)
}

fn decode_impl(cursor: &mut Cursor<'_>, opt: &CodecOptions, depth: u32) -> Result<Value> {
	let at = cursor.pos();
	let byte = cursor.read_u8()?;
	let tag = Tag::from_byte(byte).ok_or(CodecError::UnknownTag { tag: byte, at })?;

	match tag {
		Tag::Record => {
			check_depth(depth, opt)?;
			let names = unpack_fields(cursor, opt.encoding)?;
			let shape = unpack_shape(cursor)?;
			// Writers always emit [1]; MATLAB's [1, 1] is accepted too.
			if declared_count(&shape, opt)? != 1 {
				return Err(CodecError::UnsupportedType {
					detail: format!("record array with shape {shape:?}"),
				});
			}
			trace!(fields = names.len(), at, depth, "decoding record");

			let mut record = Record::new();
			for name in names {
				let value = decode_impl(cursor, opt, depth + 1)?;
				record.push(name, value)?;
			}
			Ok(Value::Record(record))
		}
		Tag::Collection => {
			check_depth(depth, opt)?;
			let shape = unpack_shape(cursor)?;
			let count = declared_count(&shape, opt)?;
			// Every element needs at least its tag byte.
			cursor.require(count)?;
			trace!(?shape, at, depth, "decoding collection");

			let mut items = Vec::with_capacity(count);
			for _ in 0..count {
				items.push(decode_impl(cursor, opt, depth + 1)?);
			}
			Collection::new(shape, items).map(Value::Collection)
		}
		Tag::Primitive(ElementType::Char) => unpack_chars(cursor, opt).map(Value::Char),
		Tag::Primitive(ty) => unpack_array(cursor, ty, opt).map(Value::Numeric),
	}
}
