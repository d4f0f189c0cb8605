#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "matwire", about = "MATLAB-compatible payload codec tools")]
struct Cli {
	/// Log codec activity at debug level on stderr.
	#[arg(long, short, global = true)]
	verbose: bool,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Encode a JSON document into a (framed) payload file.
	Encode(cmd::encode::Args),
	/// Decode a payload file and print its contents.
	Decode(cmd::decode::Args),
	/// Check the digest of a framed payload file.
	Verify(cmd::verify::Args),
	/// Build a framed measurement request from I/Q samples.
	Request(cmd::request::Args),
	/// Explain a measurement service status code.
	Status(cmd::status::Args),
}

fn main() {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	if let Err(err) = run(cli.command) {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn init_tracing(verbose: bool) {
	let filter = if verbose {
		EnvFilter::new("debug")
	} else {
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
	};
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}

fn run(command: Commands) -> cmd::Result<()> {
	match command {
		Commands::Encode(args) => cmd::encode::run(args),
		Commands::Decode(args) => cmd::decode::run(args),
		Commands::Verify(args) => cmd::verify::run(args),
		Commands::Request(args) => cmd::request::run(args),
		Commands::Status(args) => cmd::status::run(args),
	}
}
