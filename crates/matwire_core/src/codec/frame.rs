use tracing::{debug, warn};

use crate::codec::{CodecError, Result};

/// Width of the leading digest in a framed message.
pub const DIGEST_LEN: usize = 16;

/// MD5 digest of exactly the payload bytes.
///
/// Integrity only; no collision resistance is implied.
pub fn digest(payload: &[u8]) -> [u8; DIGEST_LEN] {
	md5::compute(payload).0
}

/// Prepend the payload digest, producing the bytes actually transmitted.
pub fn checksum(payload: &[u8]) -> Vec<u8> {
	let mut framed = Vec::with_capacity(DIGEST_LEN + payload.len());
	framed.extend_from_slice(&digest(payload));
	framed.extend_from_slice(payload);
	debug!(payload = payload.len(), "framed payload");
	framed
}

/// Split off and verify the leading digest, returning the payload unchanged.
pub fn validate(framed: &[u8]) -> Result<&[u8]> {
	let Some((expected, payload)) = framed.split_first_chunk::<DIGEST_LEN>() else {
		return Err(CodecError::TruncatedInput {
			at: 0,
			need: DIGEST_LEN,
			rem: framed.len(),
		});
	};

	let actual = digest(payload);
	if actual != *expected {
		warn!(payload = payload.len(), "payload digest mismatch");
		return Err(CodecError::IntegrityError {
			expected: hex(expected),
			actual: hex(&actual),
		});
	}
	Ok(payload)
}

fn hex(bytes: &[u8]) -> String {
	bytes.iter().map(|byte| format!("{byte:02x}")).collect()
}
