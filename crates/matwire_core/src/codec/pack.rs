use crate::codec::array::element_count;
use crate::codec::{ArrayData, CharArray, CodecError, CodecOptions, Cursor, ElementType, NumericArray, Result, TextEncoding};

/// Largest entry count of a shape header or field-name list.
pub const MAX_LIST_ENTRIES: usize = u8::MAX as usize;

fn limit(what: &'static str, count: usize, max: u64) -> CodecError {
	CodecError::EncodingLimitExceeded {
		what,
		count: count as u64,
		max,
	}
}

/// Write a shape header: `count:u8` then `count` little-endian `u32` dimensions.
pub fn pack_shape(shape: &[usize], out: &mut Vec<u8>) -> Result<()> {
	let count = u8::try_from(shape.len()).map_err(|_| limit("shape dimensions", shape.len(), MAX_LIST_ENTRIES as u64))?;
	let mut dims = Vec::with_capacity(shape.len());
	for dim in shape {
		dims.push(u32::try_from(*dim).map_err(|_| limit("shape dimension", *dim, u64::from(u32::MAX)))?);
	}

	out.push(count);
	for dim in dims {
		out.extend_from_slice(&dim.to_le_bytes());
	}
	Ok(())
}

/// Read a shape header.
pub fn unpack_shape(cursor: &mut Cursor<'_>) -> Result<Vec<usize>> {
	let count = usize::from(cursor.read_u8()?);
	let raw = cursor.read_exact(count * 4)?;
	Ok(raw
		.chunks_exact(4)
		.map(|chunk| {
			let mut buf = [0_u8; 4];
			buf.copy_from_slice(chunk);
			u32::from_le_bytes(buf) as usize
		})
		.collect())
}

/// Write a length-prefixed byte string: `len:u32` then the raw bytes.
pub fn pack_string(bytes: &[u8], out: &mut Vec<u8>) -> Result<()> {
	let len = u32::try_from(bytes.len()).map_err(|_| limit("string length", bytes.len(), u64::from(u32::MAX)))?;
	out.extend_from_slice(&len.to_le_bytes());
	out.extend_from_slice(bytes);
	Ok(())
}

/// Read a length-prefixed byte string.
pub fn unpack_string<'a>(cursor: &mut Cursor<'a>) -> Result<&'a [u8]> {
	let len = cursor.read_u32_le()? as usize;
	cursor.read_exact(len)
}

/// Write a field-name list: `count:u8` then one length-prefixed string per name.
pub fn pack_fields<S: AsRef<str>>(names: &[S], encoding: TextEncoding, out: &mut Vec<u8>) -> Result<()> {
	let count = u8::try_from(names.len()).map_err(|_| limit("field names", names.len(), MAX_LIST_ENTRIES as u64))?;
	let mut encoded = Vec::with_capacity(names.len());
	for name in names {
		let name = name.as_ref();
		let bytes = encoding.encode(name).ok_or_else(|| CodecError::UnsupportedType {
			detail: format!("field name {name:?} is not representable as {encoding}"),
		})?;
		encoded.push(bytes);
	}

	out.push(count);
	for bytes in &encoded {
		pack_string(bytes, out)?;
	}
	Ok(())
}

/// Read a field-name list.
pub fn unpack_fields(cursor: &mut Cursor<'_>, encoding: TextEncoding) -> Result<Vec<String>> {
	let count = usize::from(cursor.read_u8()?);
	let mut names = Vec::with_capacity(count);
	for _ in 0..count {
		let raw = unpack_string(cursor)?;
		let name = encoding.decode(raw).ok_or(CodecError::InvalidText { encoding, what: "field name" })?;
		names.push(name);
	}
	Ok(names)
}

/// Write a numeric array body: shape header then packed elements.
pub fn pack_array(array: &NumericArray, out: &mut Vec<u8>) -> Result<()> {
	pack_shape(array.shape(), out)?;
	array.data().write_le(out);
	Ok(())
}

/// Write a char array body: shape header then raw bytes.
pub fn pack_chars(array: &CharArray, out: &mut Vec<u8>) -> Result<()> {
	pack_shape(array.shape(), out)?;
	out.extend_from_slice(array.bytes());
	Ok(())
}

/// Element count declared by `shape`, bounded by the configured ceiling.
pub(crate) fn declared_count(shape: &[usize], opt: &CodecOptions) -> Result<usize> {
	let max = opt.max_elements as u64;
	let count = element_count(shape).ok_or(CodecError::EncodingLimitExceeded {
		what: "element count",
		count: u64::MAX,
		max,
	})?;
	if count > opt.max_elements {
		return Err(limit("element count", count, max));
	}
	Ok(count)
}

fn read_elements<'a>(cursor: &mut Cursor<'a>, count: usize, width: usize) -> Result<&'a [u8]> {
	let need = count.checked_mul(width).ok_or(CodecError::TruncatedInput {
		at: cursor.pos(),
		need: usize::MAX,
		rem: cursor.remaining(),
	})?;
	cursor.read_exact(need)
}

/// Read a numeric array body of element type `ty`.
pub fn unpack_array(cursor: &mut Cursor<'_>, ty: ElementType, opt: &CodecOptions) -> Result<NumericArray> {
	let shape = unpack_shape(cursor)?;
	let count = declared_count(&shape, opt)?;
	let bytes = read_elements(cursor, count, ty.width())?;
	let data = ArrayData::read_le(ty, bytes).ok_or_else(|| CodecError::UnsupportedType {
		detail: format!("{} is not a numeric element type", ty.as_str()),
	})?;
	NumericArray::new(shape, data)
}

/// Read a char array body.
pub fn unpack_chars(cursor: &mut Cursor<'_>, opt: &CodecOptions) -> Result<CharArray> {
	let shape = unpack_shape(cursor)?;
	let count = declared_count(&shape, opt)?;
	let bytes = read_elements(cursor, count, ElementType::Char.width())?;
	CharArray::new(shape, bytes.to_vec())
}

#[cfg(test)]
mod tests;
