use crate::codec::{CodecError, ElementType, Result};

/// One bare number or boolean.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
	/// `double`.
	F64(f64),
	/// `single`.
	F32(f32),
	/// `logical`.
	Bool(bool),
	/// `int8`.
	I8(i8),
	/// `uint8`.
	U8(u8),
	/// `int16`.
	I16(i16),
	/// `uint16`.
	U16(u16),
	/// `int32`.
	I32(i32),
	/// `uint32`.
	U32(u32),
	/// `int64`.
	I64(i64),
	/// `uint64`.
	U64(u64),
}

impl Scalar {
	/// Element type this scalar is packed as.
	pub fn element_type(self) -> ElementType {
		match self {
			Self::F64(_) => ElementType::F64,
			Self::F32(_) => ElementType::F32,
			Self::Bool(_) => ElementType::Bool,
			Self::I8(_) => ElementType::I8,
			Self::U8(_) => ElementType::U8,
			Self::I16(_) => ElementType::I16,
			Self::U16(_) => ElementType::U16,
			Self::I32(_) => ElementType::I32,
			Self::U32(_) => ElementType::U32,
			Self::I64(_) => ElementType::I64,
			Self::U64(_) => ElementType::U64,
		}
	}

	/// Widen to `f64`. Large 64-bit integers lose precision.
	pub fn as_f64(self) -> f64 {
		match self {
			Self::F64(v) => v,
			Self::F32(v) => f64::from(v),
			Self::Bool(v) => f64::from(u8::from(v)),
			Self::I8(v) => f64::from(v),
			Self::U8(v) => f64::from(v),
			Self::I16(v) => f64::from(v),
			Self::U16(v) => f64::from(v),
			Self::I32(v) => f64::from(v),
			Self::U32(v) => f64::from(v),
			Self::I64(v) => v as f64,
			Self::U64(v) => v as f64,
		}
	}

	/// Integer value when the scalar is an integer type that fits `i64`.
	pub fn as_i64(self) -> Option<i64> {
		match self {
			Self::I8(v) => Some(i64::from(v)),
			Self::U8(v) => Some(i64::from(v)),
			Self::I16(v) => Some(i64::from(v)),
			Self::U16(v) => Some(i64::from(v)),
			Self::I32(v) => Some(i64::from(v)),
			Self::U32(v) => Some(i64::from(v)),
			Self::I64(v) => Some(v),
			Self::U64(v) => i64::try_from(v).ok(),
			Self::F64(_) | Self::F32(_) | Self::Bool(_) => None,
		}
	}
}

/// Typed, row-major element storage for a numeric array.
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayData {
	/// `double` elements.
	F64(Vec<f64>),
	/// `single` elements.
	F32(Vec<f32>),
	/// `logical` elements.
	Bool(Vec<bool>),
	/// `int8` elements.
	I8(Vec<i8>),
	/// `uint8` elements.
	U8(Vec<u8>),
	/// `int16` elements.
	I16(Vec<i16>),
	/// `uint16` elements.
	U16(Vec<u16>),
	/// `int32` elements.
	I32(Vec<i32>),
	/// `uint32` elements.
	U32(Vec<u32>),
	/// `int64` elements.
	I64(Vec<i64>),
	/// `uint64` elements.
	U64(Vec<u64>),
}

impl ArrayData {
	/// Element type of the storage.
	pub fn element_type(&self) -> ElementType {
		match self {
			Self::F64(_) => ElementType::F64,
			Self::F32(_) => ElementType::F32,
			Self::Bool(_) => ElementType::Bool,
			Self::I8(_) => ElementType::I8,
			Self::U8(_) => ElementType::U8,
			Self::I16(_) => ElementType::I16,
			Self::U16(_) => ElementType::U16,
			Self::I32(_) => ElementType::I32,
			Self::U32(_) => ElementType::U32,
			Self::I64(_) => ElementType::I64,
			Self::U64(_) => ElementType::U64,
		}
	}

	/// Number of stored elements.
	pub fn len(&self) -> usize {
		match self {
			Self::F64(v) => v.len(),
			Self::F32(v) => v.len(),
			Self::Bool(v) => v.len(),
			Self::I8(v) => v.len(),
			Self::U8(v) => v.len(),
			Self::I16(v) => v.len(),
			Self::U16(v) => v.len(),
			Self::I32(v) => v.len(),
			Self::U32(v) => v.len(),
			Self::I64(v) => v.len(),
			Self::U64(v) => v.len(),
		}
	}

	/// Whether no elements are stored.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Element at a flat row-major index.
	pub fn get(&self, index: usize) -> Option<Scalar> {
		match self {
			Self::F64(v) => v.get(index).copied().map(Scalar::F64),
			Self::F32(v) => v.get(index).copied().map(Scalar::F32),
			Self::Bool(v) => v.get(index).copied().map(Scalar::Bool),
			Self::I8(v) => v.get(index).copied().map(Scalar::I8),
			Self::U8(v) => v.get(index).copied().map(Scalar::U8),
			Self::I16(v) => v.get(index).copied().map(Scalar::I16),
			Self::U16(v) => v.get(index).copied().map(Scalar::U16),
			Self::I32(v) => v.get(index).copied().map(Scalar::I32),
			Self::U32(v) => v.get(index).copied().map(Scalar::U32),
			Self::I64(v) => v.get(index).copied().map(Scalar::I64),
			Self::U64(v) => v.get(index).copied().map(Scalar::U64),
		}
	}

	/// Single-element storage for a scalar.
	pub fn from_scalar(scalar: Scalar) -> Self {
		match scalar {
			Scalar::F64(v) => Self::F64(vec![v]),
			Scalar::F32(v) => Self::F32(vec![v]),
			Scalar::Bool(v) => Self::Bool(vec![v]),
			Scalar::I8(v) => Self::I8(vec![v]),
			Scalar::U8(v) => Self::U8(vec![v]),
			Scalar::I16(v) => Self::I16(vec![v]),
			Scalar::U16(v) => Self::U16(vec![v]),
			Scalar::I32(v) => Self::I32(vec![v]),
			Scalar::U32(v) => Self::U32(vec![v]),
			Scalar::I64(v) => Self::I64(vec![v]),
			Scalar::U64(v) => Self::U64(vec![v]),
		}
	}

	/// Append every element little-endian at its fixed width.
	pub(crate) fn write_le(&self, out: &mut Vec<u8>) {
		match self {
			Self::F64(v) => v.iter().for_each(|x| out.extend_from_slice(&x.to_le_bytes())),
			Self::F32(v) => v.iter().for_each(|x| out.extend_from_slice(&x.to_le_bytes())),
			Self::Bool(v) => out.extend(v.iter().map(|x| u8::from(*x))),
			Self::I8(v) => out.extend(v.iter().map(|x| x.to_le_bytes()[0])),
			Self::U8(v) => out.extend_from_slice(v),
			Self::I16(v) => v.iter().for_each(|x| out.extend_from_slice(&x.to_le_bytes())),
			Self::U16(v) => v.iter().for_each(|x| out.extend_from_slice(&x.to_le_bytes())),
			Self::I32(v) => v.iter().for_each(|x| out.extend_from_slice(&x.to_le_bytes())),
			Self::U32(v) => v.iter().for_each(|x| out.extend_from_slice(&x.to_le_bytes())),
			Self::I64(v) => v.iter().for_each(|x| out.extend_from_slice(&x.to_le_bytes())),
			Self::U64(v) => v.iter().for_each(|x| out.extend_from_slice(&x.to_le_bytes())),
		}
	}

	/// Rebuild storage from packed little-endian bytes.
	///
	/// `bytes.len()` must be a multiple of `ty.width()`; returns `None` for the
	/// char type, which is stored as a [`CharArray`].
	pub(crate) fn read_le(ty: ElementType, bytes: &[u8]) -> Option<Self> {
		Some(match ty {
			ElementType::F64 => Self::F64(bytes.chunks_exact(8).map(|c| f64::from_le_bytes(le(c))).collect()),
			ElementType::F32 => Self::F32(bytes.chunks_exact(4).map(|c| f32::from_le_bytes(le(c))).collect()),
			ElementType::Bool => Self::Bool(bytes.iter().map(|b| *b != 0).collect()),
			ElementType::Char => return None,
			ElementType::I8 => Self::I8(bytes.iter().map(|b| i8::from_le_bytes([*b])).collect()),
			ElementType::U8 => Self::U8(bytes.to_vec()),
			ElementType::I16 => Self::I16(bytes.chunks_exact(2).map(|c| i16::from_le_bytes(le(c))).collect()),
			ElementType::U16 => Self::U16(bytes.chunks_exact(2).map(|c| u16::from_le_bytes(le(c))).collect()),
			ElementType::I32 => Self::I32(bytes.chunks_exact(4).map(|c| i32::from_le_bytes(le(c))).collect()),
			ElementType::U32 => Self::U32(bytes.chunks_exact(4).map(|c| u32::from_le_bytes(le(c))).collect()),
			ElementType::I64 => Self::I64(bytes.chunks_exact(8).map(|c| i64::from_le_bytes(le(c))).collect()),
			ElementType::U64 => Self::U64(bytes.chunks_exact(8).map(|c| u64::from_le_bytes(le(c))).collect()),
		})
	}
}

fn le<const N: usize>(chunk: &[u8]) -> [u8; N] {
	let mut buf = [0_u8; N];
	buf.copy_from_slice(chunk);
	buf
}

/// Product of dimensions, or `None` on overflow. An empty shape holds one element.
pub fn element_count(shape: &[usize]) -> Option<usize> {
	shape.iter().try_fold(1_usize, |acc, dim| acc.checked_mul(*dim))
}

fn check_shape(shape: &[usize], actual: usize) -> Result<()> {
	let expected = element_count(shape).ok_or_else(|| CodecError::ShapeMismatch {
		shape: shape.to_vec(),
		expected: usize::MAX,
		actual,
	})?;
	if expected != actual {
		return Err(CodecError::ShapeMismatch {
			shape: shape.to_vec(),
			expected,
			actual,
		});
	}
	Ok(())
}

/// N-dimensional homogeneous numeric array in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericArray {
	shape: Vec<usize>,
	data: ArrayData,
}

impl NumericArray {
	/// Build an array, checking that `shape` holds exactly `data.len()` elements.
	pub fn new(shape: Vec<usize>, data: ArrayData) -> Result<Self> {
		check_shape(&shape, data.len())?;
		Ok(Self { shape, data })
	}

	/// 1x1 array holding a single scalar.
	pub fn from_scalar(scalar: Scalar) -> Self {
		Self {
			shape: vec![1, 1],
			data: ArrayData::from_scalar(scalar),
		}
	}

	/// 1xN row vector.
	pub fn row(data: ArrayData) -> Self {
		Self {
			shape: vec![1, data.len()],
			data,
		}
	}

	/// Dimensions.
	pub fn shape(&self) -> &[usize] {
		&self.shape
	}

	/// Element storage.
	pub fn data(&self) -> &ArrayData {
		&self.data
	}

	/// Element type.
	pub fn element_type(&self) -> ElementType {
		self.data.element_type()
	}

	/// Number of elements.
	pub fn len(&self) -> usize {
		self.data.len()
	}

	/// Whether the array holds no elements.
	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	/// Split into shape and storage.
	pub fn into_parts(self) -> (Vec<usize>, ArrayData) {
		(self.shape, self.data)
	}
}

/// N-dimensional array of raw text bytes.
///
/// The last dimension is the byte length of each row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharArray {
	shape: Vec<usize>,
	bytes: Vec<u8>,
}

impl CharArray {
	/// Build a char array, checking that `shape` holds exactly `bytes.len()` elements.
	pub fn new(shape: Vec<usize>, bytes: Vec<u8>) -> Result<Self> {
		check_shape(&shape, bytes.len())?;
		Ok(Self { shape, bytes })
	}

	/// 1xN row of already-encoded text.
	pub fn row(bytes: Vec<u8>) -> Self {
		Self {
			shape: vec![1, bytes.len()],
			bytes,
		}
	}

	/// Dimensions.
	pub fn shape(&self) -> &[usize] {
		&self.shape
	}

	/// Raw row-major bytes.
	pub fn bytes(&self) -> &[u8] {
		&self.bytes
	}

	/// Byte length of one row (the trailing dimension).
	pub fn row_len(&self) -> usize {
		self.shape.last().copied().unwrap_or(1)
	}

	/// Number of rows (product of the leading dimensions).
	///
	/// Saturates for a leading product that does not fit `usize`; `new`
	/// already rejects such shapes.
	pub fn row_count(&self) -> usize {
		match self.shape.split_last() {
			Some((_, head)) => element_count(head).unwrap_or(usize::MAX),
			None => 1,
		}
	}

	/// Iterate rows as byte slices.
	pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
		let row_len = self.row_len();
		let rows = self.row_count();
		(0..rows).map(move |row| &self.bytes[row * row_len..(row + 1) * row_len])
	}
}
