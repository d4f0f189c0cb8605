use crate::codec::{CodecError, Result};

/// Bounded cursor over an immutable byte slice.
///
/// Every read checks the remaining length before consuming anything, so a
/// malformed length field surfaces as [`CodecError::TruncatedInput`] instead of
/// an out-of-bounds access.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Create a cursor starting at `offset`.
	pub fn at(bytes: &'a [u8], offset: usize) -> Result<Self> {
		if offset > bytes.len() {
			return Err(CodecError::TruncatedInput {
				at: bytes.len(),
				need: offset - bytes.len(),
				rem: 0,
			});
		}
		Ok(Self { bytes, pos: offset })
	}

	/// Return current byte offset.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Read exactly `n` bytes and advance cursor.
	pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
		if n > self.remaining() {
			return Err(CodecError::TruncatedInput {
				at: self.pos,
				need: n,
				rem: self.remaining(),
			});
		}

		let start = self.pos;
		self.pos += n;
		Ok(&self.bytes[start..self.pos])
	}

	/// Read one byte.
	pub fn read_u8(&mut self) -> Result<u8> {
		Ok(self.read_exact(1)?[0])
	}

	/// Read a little-endian `u32`.
	pub fn read_u32_le(&mut self) -> Result<u32> {
		let raw = self.read_exact(4)?;
		let mut buf = [0_u8; 4];
		buf.copy_from_slice(raw);
		Ok(u32::from_le_bytes(buf))
	}

	/// Fail unless at least `n` bytes remain, without consuming anything.
	pub fn require(&self, n: usize) -> Result<()> {
		if n > self.remaining() {
			return Err(CodecError::TruncatedInput {
				at: self.pos,
				need: n,
				rem: self.remaining(),
			});
		}
		Ok(())
	}
}
