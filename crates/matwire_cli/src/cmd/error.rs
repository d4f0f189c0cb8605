use matwire::codec::CodecError;
use thiserror::Error;

/// Command result type.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
	/// Codec failure.
	#[error(transparent)]
	Codec(#[from] CodecError),
	/// Filesystem failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Malformed JSON input or output failure.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// JSON value without a payload representation.
	#[error("unsupported JSON value at {path}: {detail}")]
	UnsupportedJson {
		/// JSON pointer of the offending value.
		path: String,
		/// What was rejected.
		detail: String,
	},
	/// Unknown `--encoding` label.
	#[error("unknown text encoding: {label}")]
	UnknownEncoding {
		/// User-provided label.
		label: String,
	},
	/// Decompression output exceeded the safety limit.
	#[error("decompressed output exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
}
