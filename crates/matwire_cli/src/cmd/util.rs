use matwire::codec::{CodecOptions, TextEncoding};

use crate::cmd::{CliError, Result};

/// Codec settings shared by every payload command.
#[derive(clap::Args, Debug, Clone)]
pub struct CodecArgs {
	/// Text encoding for char arrays and field names (`utf8` or `latin1`).
	#[arg(long, default_value = "utf8")]
	pub encoding: String,
	/// Maximum record/collection nesting depth.
	#[arg(long, default_value_t = 64)]
	pub max_depth: u32,
}

impl CodecArgs {
	/// Resolve into codec options.
	pub(crate) fn options(&self) -> Result<CodecOptions> {
		let encoding = TextEncoding::from_label(&self.encoding).ok_or_else(|| CliError::UnknownEncoding {
			label: self.encoding.clone(),
		})?;
		Ok(CodecOptions {
			max_depth: self.max_depth,
			encoding,
			..CodecOptions::default()
		})
	}
}

/// Render bytes as lowercase hex.
pub(crate) fn hex(bytes: &[u8]) -> String {
	bytes.iter().map(|byte| format!("{byte:02x}")).collect()
}
