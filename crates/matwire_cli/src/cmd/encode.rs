use std::fs;
use std::path::PathBuf;

use matwire::codec::{checksum, encode_with};

use crate::cmd::input::write_payload;
use crate::cmd::json::native_from_json;
use crate::cmd::util::CodecArgs;

#[derive(clap::Args)]
pub struct Args {
	/// JSON document to encode.
	pub path: PathBuf,
	/// Output payload file.
	#[arg(long, short)]
	pub output: PathBuf,
	/// Skip the leading digest.
	#[arg(long)]
	pub raw: bool,
	/// zstd-compress the output file.
	#[arg(long)]
	pub compress: bool,
	#[command(flatten)]
	pub codec: CodecArgs,
}

/// Encode a JSON document into a payload file.
pub fn run(args: Args) -> crate::cmd::Result<()> {
	let opt = args.codec.options()?;
	let document: serde_json::Value = serde_json::from_slice(&fs::read(&args.path)?)?;
	let native = native_from_json(&document)?;

	let payload = encode_with(&native, &opt)?;
	let bytes = if args.raw { payload } else { checksum(&payload) };
	let written = write_payload(&args.output, &bytes, args.compress)?;

	println!("wrote {written} bytes to {}", args.output.display());
	Ok(())
}
