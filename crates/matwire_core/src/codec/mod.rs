mod array;
mod bytes;
mod decode;
mod encode;
mod error;
mod frame;
mod normalize;
mod options;
mod pack;
mod tag;
mod value;
mod weblab;

/// Numeric and char array storage.
pub use array::{ArrayData, CharArray, NumericArray, Scalar, element_count};
/// Bounded byte cursor used by all decode paths.
pub use bytes::Cursor;
/// Decode entry points.
pub use decode::{decode, decode_all, decode_value, decode_value_with, decode_with};
/// Encode entry points.
pub use encode::{encode, encode_value, encode_value_with, encode_with};
/// Error and result aliases.
pub use error::{CodecError, Result};
/// Digest framing.
pub use frame::{DIGEST_LEN, checksum, digest, validate};
/// Conversions between caller data and wire values.
pub use normalize::{check_nested_nodes, collapse, nested_nodes, normalize};
/// Codec limits and text encodings.
pub use options::{CodecOptions, TextEncoding};
/// Primitive pack/unpack helpers.
pub use pack::{
	MAX_LIST_ENTRIES, pack_array, pack_chars, pack_fields, pack_shape, pack_string, unpack_array, unpack_chars, unpack_fields, unpack_shape,
	unpack_string,
};
/// Tag table.
pub use tag::{COLLECTION_TAG, ElementKind, ElementType, PRIMITIVE_TYPES, RECORD_TAG, Tag};
/// Wire and caller value models.
pub use value::{Collection, Native, Record, Value};
/// Measurement service request and status helpers.
pub use weblab::{CLIENT_VERSION, DEFAULT_OP_MODE, MeasurementRequest, Status};
