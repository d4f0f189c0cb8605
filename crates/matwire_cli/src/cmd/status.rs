use matwire::codec::Status;
use serde::Serialize;

#[derive(clap::Args)]
pub struct Args {
	/// Numeric status code reported by the measurement service.
	#[arg(allow_hyphen_values = true)]
	pub code: i64,
	/// Print the result as JSON.
	#[arg(long)]
	pub json: bool,
}

#[derive(Serialize)]
struct StatusReport {
	code: i64,
	ok: bool,
	message: &'static str,
}

/// Print the meaning of a status code.
pub fn run(args: Args) -> crate::cmd::Result<()> {
	let status = Status::from_code(args.code);
	if args.json {
		let report = StatusReport {
			code: status.code(),
			ok: status.is_ok(),
			message: status.message(),
		};
		println!("{}", serde_json::to_string(&report)?);
	} else {
		println!("{status}");
	}
	Ok(())
}
