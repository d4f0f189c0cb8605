use std::fs;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::cmd::{CliError, Result};

const MAX_DECOMPRESSED_BYTES: usize = 512 * 1024 * 1024;
/// zstd frame magic used by compressed payload files.
pub(crate) const ZSTD_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];

/// Compression mode detected for a payload file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Compression {
	/// Raw payload bytes.
	None,
	/// zstd-compressed payload.
	Zstd,
}

impl Compression {
	/// Render compression mode as a stable lowercase label.
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Zstd => "zstd",
		}
	}
}

/// Read a payload file, transparently decompressing zstd input.
pub(crate) fn read_payload(path: &Path) -> Result<(Compression, Vec<u8>)> {
	let raw = fs::read(path)?;
	let decoded = decode_bytes(raw)?;
	debug!(path = %path.display(), compression = decoded.0.as_str(), bytes = decoded.1.len(), "read payload");
	Ok(decoded)
}

/// Write payload bytes, optionally zstd-compressed.
pub(crate) fn write_payload(path: &Path, bytes: &[u8], compress: bool) -> Result<usize> {
	let out = if compress { zstd::encode_all(bytes, 0)? } else { bytes.to_vec() };
	fs::write(path, &out)?;
	Ok(out.len())
}

/// Detect and undo compression.
pub(crate) fn decode_bytes(raw: Vec<u8>) -> Result<(Compression, Vec<u8>)> {
	if raw.starts_with(&ZSTD_MAGIC) {
		let out = decode_zstd(&raw)?;
		return Ok((Compression::Zstd, out));
	}
	Ok((Compression::None, raw))
}

fn decode_zstd(raw: &[u8]) -> Result<Vec<u8>> {
	let mut decoder = zstd::stream::read::Decoder::new(raw)?;
	let mut out = Vec::new();
	let mut buf = [0_u8; 8192];

	loop {
		let read = decoder.read(&mut buf)?;
		if read == 0 {
			break;
		}

		if out.len() + read > MAX_DECOMPRESSED_BYTES {
			return Err(CliError::DecompressedTooLarge { limit: MAX_DECOMPRESSED_BYTES });
		}

		out.extend_from_slice(&buf[..read]);
	}

	Ok(out)
}
