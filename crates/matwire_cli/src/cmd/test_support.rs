use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::OnceLock;

use matwire_testkit::{scratch_path, target_dir as workspace_target_dir};

static MATWIRE_BIN: OnceLock<PathBuf> = OnceLock::new();

pub(crate) fn write_scratch(test: &str, name: &str, contents: &[u8]) -> PathBuf {
	let path = scratch_path(test, name);
	std::fs::write(&path, contents).expect("scratch write");
	path
}

pub(crate) fn run_matwire(args: &[&str]) -> Output {
	Command::new(matwire_bin()).args(args).output().expect("matwire command executes")
}

fn matwire_bin() -> &'static PathBuf {
	MATWIRE_BIN.get_or_init(resolve_matwire_bin)
}

fn resolve_matwire_bin() -> PathBuf {
	if let Ok(path) = std::env::var("CARGO_BIN_EXE_matwire") {
		return PathBuf::from(path);
	}

	let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	let target_dir = workspace_target_dir();

	let mut bin = target_dir.join("debug");
	bin.push(if cfg!(windows) { "matwire.exe" } else { "matwire" });

	let status = Command::new("cargo")
		.current_dir(&manifest_dir)
		.args(["build", "--quiet", "--bin", "matwire"])
		.status()
		.expect("cargo build executes");
	assert!(status.success(), "failed to build matwire binary at {}", bin.display());

	bin
}
