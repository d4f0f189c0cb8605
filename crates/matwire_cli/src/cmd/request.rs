use std::fs;
use std::path::PathBuf;

use matwire::codec::{CLIENT_VERSION, DEFAULT_OP_MODE, MeasurementRequest};
use serde::Deserialize;
use tracing::info;

use crate::cmd::input::write_payload;
use crate::cmd::util::CodecArgs;

#[derive(clap::Args)]
pub struct Args {
	/// JSON file with `re` and `im` sample arrays.
	pub samples: PathBuf,
	/// Output framed request file.
	#[arg(long, short)]
	pub output: PathBuf,
	/// Requested output power level.
	#[arg(long, default_value_t = 1.0)]
	pub power_level: f64,
	/// Operating mode token.
	#[arg(long, default_value = DEFAULT_OP_MODE)]
	pub op_mode: String,
	#[command(flatten)]
	pub codec: CodecArgs,
}

/// In-phase and quadrature sample file.
#[derive(Debug, Deserialize)]
struct Samples {
	re: Vec<f64>,
	im: Vec<f64>,
}

/// Build a framed measurement request from a sample file.
pub fn run(args: Args) -> crate::cmd::Result<()> {
	let opt = args.codec.options()?;
	let samples: Samples = serde_json::from_slice(&fs::read(&args.samples)?)?;

	let request = MeasurementRequest {
		client_version: CLIENT_VERSION,
		op_mode: args.op_mode,
		power_level: args.power_level,
		re: samples.re,
		im: samples.im,
	};
	let framed = request.to_framed(&opt)?;
	info!(samples = request.sample_count(), "built measurement request");
	let written = write_payload(&args.output, &framed, false)?;

	println!("wrote {written} bytes to {}", args.output.display());
	Ok(())
}
