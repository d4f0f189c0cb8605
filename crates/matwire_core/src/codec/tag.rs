/// Reserved tag for a single named-field record.
pub const RECORD_TAG: u8 = 255;
/// Reserved tag for an N-dimensional heterogeneous collection.
pub const COLLECTION_TAG: u8 = 254;

/// Primitive element types, declared in wire order.
///
/// A primitive tag is the position of its type in [`PRIMITIVE_TYPES`]. The order
/// matches the MATLAB reference reader and must never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
	/// IEEE-754 binary64 (`double`).
	F64,
	/// IEEE-754 binary32 (`single`).
	F32,
	/// One-byte boolean (`logical`).
	Bool,
	/// One-byte character (`char`), stored as raw encoded text.
	Char,
	/// Signed 8-bit integer.
	I8,
	/// Unsigned 8-bit integer.
	U8,
	/// Signed 16-bit integer.
	I16,
	/// Unsigned 16-bit integer.
	U16,
	/// Signed 32-bit integer.
	I32,
	/// Unsigned 32-bit integer.
	U32,
	/// Signed 64-bit integer.
	I64,
	/// Unsigned 64-bit integer.
	U64,
}

/// The fixed, ordered primitive table. Index == tag byte.
pub const PRIMITIVE_TYPES: [ElementType; 12] = [
	ElementType::F64,
	ElementType::F32,
	ElementType::Bool,
	ElementType::Char,
	ElementType::I8,
	ElementType::U8,
	ElementType::I16,
	ElementType::U16,
	ElementType::I32,
	ElementType::U32,
	ElementType::I64,
	ElementType::U64,
];

/// Numeric interpretation of an element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
	/// Floating point.
	Float,
	/// Boolean.
	Bool,
	/// Text byte.
	Char,
	/// Two's complement integer.
	Signed,
	/// Unsigned integer.
	Unsigned,
}

impl ElementType {
	/// Wire tag of this element type.
	pub fn tag(self) -> u8 {
		self as u8
	}

	/// Look up the element type for a primitive tag.
	pub fn from_tag(tag: u8) -> Option<Self> {
		PRIMITIVE_TYPES.get(usize::from(tag)).copied()
	}

	/// Packed element width in bytes.
	pub fn width(self) -> usize {
		match self {
			Self::Bool | Self::Char | Self::I8 | Self::U8 => 1,
			Self::I16 | Self::U16 => 2,
			Self::F32 | Self::I32 | Self::U32 => 4,
			Self::F64 | Self::I64 | Self::U64 => 8,
		}
	}

	/// Numeric kind of the element.
	pub fn kind(self) -> ElementKind {
		match self {
			Self::F64 | Self::F32 => ElementKind::Float,
			Self::Bool => ElementKind::Bool,
			Self::Char => ElementKind::Char,
			Self::I8 | Self::I16 | Self::I32 | Self::I64 => ElementKind::Signed,
			Self::U8 | Self::U16 | Self::U32 | Self::U64 => ElementKind::Unsigned,
		}
	}

	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::F64 => "float64",
			Self::F32 => "float32",
			Self::Bool => "bool",
			Self::Char => "char",
			Self::I8 => "int8",
			Self::U8 => "uint8",
			Self::I16 => "int16",
			Self::U16 => "uint16",
			Self::I32 => "int32",
			Self::U32 => "uint32",
			Self::I64 => "int64",
			Self::U64 => "uint64",
		}
	}
}

/// Decoded meaning of a leading tag byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
	/// Homogeneous array of a primitive element type.
	Primitive(ElementType),
	/// Single named-field record.
	Record,
	/// Heterogeneous collection.
	Collection,
}

impl Tag {
	/// Classify a tag byte, or `None` when it is not part of the format.
	pub fn from_byte(byte: u8) -> Option<Self> {
		match byte {
			RECORD_TAG => Some(Self::Record),
			COLLECTION_TAG => Some(Self::Collection),
			_ => ElementType::from_tag(byte).map(Self::Primitive),
		}
	}

	/// Wire byte for this tag.
	pub fn byte(self) -> u8 {
		match self {
			Self::Primitive(ty) => ty.tag(),
			Self::Record => RECORD_TAG,
			Self::Collection => COLLECTION_TAG,
		}
	}
}
