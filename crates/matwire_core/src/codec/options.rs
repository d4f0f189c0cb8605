use std::fmt;

/// Text encoding declared for char arrays and field names.
///
/// Decoding never sniffs the encoding; bytes are interpreted exactly as declared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextEncoding {
	/// UTF-8.
	#[default]
	Utf8,
	/// ISO-8859-1, one byte per code point below U+0100.
	Latin1,
}

impl TextEncoding {
	/// Render the encoding as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Utf8 => "utf8",
			Self::Latin1 => "latin1",
		}
	}

	/// Parse a label accepted by [`TextEncoding::as_str`] (plus common aliases).
	pub fn from_label(label: &str) -> Option<Self> {
		match label.to_ascii_lowercase().as_str() {
			"utf8" | "utf-8" => Some(Self::Utf8),
			"latin1" | "latin-1" | "iso-8859-1" => Some(Self::Latin1),
			_ => None,
		}
	}

	/// Encode text, or `None` when a character has no representation.
	pub fn encode(self, text: &str) -> Option<Vec<u8>> {
		match self {
			Self::Utf8 => Some(text.as_bytes().to_vec()),
			Self::Latin1 => text.chars().map(|ch| u8::try_from(u32::from(ch)).ok()).collect(),
		}
	}

	/// Decode bytes, or `None` when they are invalid for this encoding.
	pub fn decode(self, bytes: &[u8]) -> Option<String> {
		match self {
			Self::Utf8 => std::str::from_utf8(bytes).ok().map(str::to_owned),
			Self::Latin1 => Some(bytes.iter().map(|byte| char::from(*byte)).collect()),
		}
	}
}

impl fmt::Display for TextEncoding {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Runtime limits and text handling for encode and decode.
#[derive(Debug, Clone)]
pub struct CodecOptions {
	/// Maximum composite nesting depth (records and collections).
	pub max_depth: u32,
	/// Maximum element count accepted from a single decoded shape header.
	pub max_elements: usize,
	/// Encoding for char arrays and record field names.
	pub encoding: TextEncoding,
}

impl Default for CodecOptions {
	fn default() -> Self {
		Self {
			max_depth: 64,
			max_elements: 1 << 28,
			encoding: TextEncoding::Utf8,
		}
	}
}

impl CodecOptions {
	/// Default limits with a different text encoding.
	pub fn with_encoding(encoding: TextEncoding) -> Self {
		Self {
			encoding,
			..Self::default()
		}
	}
}
