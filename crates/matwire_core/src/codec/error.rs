use thiserror::Error;

use crate::codec::TextEncoding;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, CodecError>;

/// Errors produced while normalizing, encoding, decoding, and validating payloads.
#[derive(Debug, Error)]
pub enum CodecError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Input value has no wire representation.
	#[error("unsupported type: {detail}")]
	UnsupportedType {
		/// Human-readable description of the rejected input.
		detail: String,
	},
	/// A count, dimension, or nesting depth exceeds a format or configured limit.
	#[error("encoding limit exceeded for {what}: {count} > {max}")]
	EncodingLimitExceeded {
		/// Which limit was hit.
		what: &'static str,
		/// Offending count.
		count: u64,
		/// Largest permitted count.
		max: u64,
	},
	/// Leading tag byte matches neither a primitive type nor a composite kind.
	#[error("unknown tag {tag} at offset {at}")]
	UnknownTag {
		/// Tag byte read from the buffer.
		tag: u8,
		/// Offset of the tag byte.
		at: usize,
	},
	/// Not enough bytes remained for a declared length or shape.
	#[error("truncated input at offset {at}, need {need} bytes, remaining {rem}")]
	TruncatedInput {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Framed digest does not match the payload.
	#[error("integrity check failed: expected {expected}, got {actual}")]
	IntegrityError {
		/// Hex digest carried in the frame.
		expected: String,
		/// Hex digest recomputed over the payload.
		actual: String,
	},
	/// Element count implied by a shape differs from the data length.
	#[error("shape {shape:?} holds {expected} elements, got {actual}")]
	ShapeMismatch {
		/// Declared dimensions.
		shape: Vec<usize>,
		/// Product of the declared dimensions.
		expected: usize,
		/// Number of elements supplied.
		actual: usize,
	},
	/// Char array bytes are not valid under the declared text encoding.
	#[error("invalid {encoding} text in {what}")]
	InvalidText {
		/// Declared text encoding.
		encoding: TextEncoding,
		/// Where the text was found (`field name` or `char array`).
		what: &'static str,
	},
}
