use std::path::PathBuf;

use matwire::codec::{DIGEST_LEN, decode_value_with, digest, validate};
use serde::Serialize;

use crate::cmd::input::read_payload;
use crate::cmd::util::{CodecArgs, hex};

#[derive(clap::Args)]
pub struct Args {
	/// Framed payload file.
	pub path: PathBuf,
	/// Print the report as JSON.
	#[arg(long)]
	pub json: bool,
	#[command(flatten)]
	pub codec: CodecArgs,
}

/// Integrity and structure summary of a framed payload.
#[derive(Debug, Serialize)]
pub struct VerifyReport {
	/// Input file path.
	pub path: String,
	/// Detected file compression.
	pub compression: &'static str,
	/// Hex digest of the payload.
	pub digest: String,
	/// Payload length without the digest.
	pub payload_len: usize,
	/// Wire kind of the first value.
	pub kind: &'static str,
	/// Bytes left after the first value.
	pub trailing: usize,
}

/// Validate the digest and structure of a framed payload file.
pub fn run(args: Args) -> crate::cmd::Result<()> {
	let opt = args.codec.options()?;
	let (compression, bytes) = read_payload(&args.path)?;
	let payload = validate(&bytes)?;
	let (value, end) = decode_value_with(payload, 0, &opt)?;

	let report = VerifyReport {
		path: args.path.display().to_string(),
		compression: compression.as_str(),
		digest: hex(&digest(payload)),
		payload_len: payload.len(),
		kind: value.kind(),
		trailing: payload.len() - end,
	};

	if args.json {
		println!("{}", serde_json::to_string_pretty(&report)?);
		return Ok(());
	}

	println!("path: {}", report.path);
	println!("compression: {}", report.compression);
	println!("digest: {} ({} bytes)", report.digest, DIGEST_LEN);
	println!("payload_len: {}", report.payload_len);
	println!("kind: {}", report.kind);
	println!("trailing: {}", report.trailing);
	Ok(())
}
