//! Shared test helpers for workspace crates.

use std::path::{Path, PathBuf};

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve the workspace target directory.
pub fn target_dir() -> PathBuf {
	std::env::var_os("CARGO_TARGET_DIR")
		.map(PathBuf::from)
		.unwrap_or_else(|| workspace_root().join("target"))
}

/// Fresh path for a test artifact under `<target>/matwire-scratch/<test>/`.
///
/// The directory is created; any previous file at the returned path is removed.
pub fn scratch_path(test: &str, name: &str) -> PathBuf {
	let dir = target_dir().join("matwire-scratch").join(test);
	std::fs::create_dir_all(&dir).unwrap_or_else(|err| panic!("create scratch dir {}: {err}", dir.display()));
	let path = dir.join(name);
	let _ = std::fs::remove_file(&path);
	path
}
