/// Payload encode command.
pub mod encode;
/// Payload decode command.
pub mod decode;
/// Digest verification command.
pub mod verify;
/// Measurement request builder command.
pub mod request;
/// Status code lookup command.
pub mod status;

mod error;
mod input;
mod json;
mod util;

#[cfg(test)]
mod test_support;

pub use error::{CliError, Result};
