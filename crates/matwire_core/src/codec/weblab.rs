use std::fmt;

use crate::codec::{ArrayData, CodecError, CodecOptions, Native, NumericArray, Result, Scalar, checksum, encode_with};

/// Client version the measurement service currently accepts.
pub const CLIENT_VERSION: f32 = 1.1;
/// Operating mode token sent with every measurement.
pub const DEFAULT_OP_MODE: &str = "A5Z6UNud";

/// One complex baseband measurement request.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementRequest {
	/// Reported client version.
	pub client_version: f32,
	/// Operating mode token.
	pub op_mode: String,
	/// Requested output power level.
	pub power_level: f64,
	/// In-phase samples.
	pub re: Vec<f64>,
	/// Quadrature samples.
	pub im: Vec<f64>,
}

impl MeasurementRequest {
	/// Request with default version, mode, and unit power.
	pub fn new(re: Vec<f64>, im: Vec<f64>) -> Self {
		Self {
			client_version: CLIENT_VERSION,
			op_mode: DEFAULT_OP_MODE.to_owned(),
			power_level: 1.0,
			re,
			im,
		}
	}

	/// Number of complex samples.
	pub fn sample_count(&self) -> usize {
		self.re.len()
	}

	/// Build the record the measurement service expects, in field order.
	pub fn to_native(&self) -> Result<Native> {
		if self.re.len() != self.im.len() {
			return Err(CodecError::ShapeMismatch {
				shape: vec![1, self.re.len()],
				expected: self.re.len(),
				actual: self.im.len(),
			});
		}

		Ok(Native::map([
			("Client_version", Native::Scalar(Scalar::F32(self.client_version))),
			("OpMode", Native::Text(self.op_mode.clone())),
			("PowerLevel", Native::Scalar(Scalar::F64(self.power_level))),
			("SA_Samples", Native::Scalar(Scalar::I64(self.sample_count() as i64))),
			("Re_data", Native::Array(NumericArray::row(ArrayData::F64(self.re.clone())))),
			("Im_data", Native::Array(NumericArray::row(ArrayData::F64(self.im.clone())))),
		]))
	}

	/// Encode and frame the request for submission.
	pub fn to_framed(&self, opt: &CodecOptions) -> Result<Vec<u8>> {
		let payload = encode_with(&self.to_native()?, opt)?;
		Ok(checksum(&payload))
	}
}

/// Result status reported by the measurement service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
	/// Measurement succeeded.
	Ok,
	/// Instrument failure; repeat the measurement.
	SystemFailure,
	/// Request rejected as invalid.
	InvalidInput,
	/// Client version too old.
	OutdatedClient,
	/// Payload corrupted in transfer.
	CorruptedTransfer,
	/// Code not known to this client.
	Unknown(i64),
}

impl Status {
	/// Classify a numeric status code.
	pub fn from_code(code: i64) -> Self {
		match code {
			-999_000 => Self::Ok,
			-999_001 => Self::SystemFailure,
			-999_002 => Self::InvalidInput,
			-999_003 => Self::OutdatedClient,
			-999_004 => Self::CorruptedTransfer,
			other => Self::Unknown(other),
		}
	}

	/// Numeric status code.
	pub fn code(self) -> i64 {
		match self {
			Self::Ok => -999_000,
			Self::SystemFailure => -999_001,
			Self::InvalidInput => -999_002,
			Self::OutdatedClient => -999_003,
			Self::CorruptedTransfer => -999_004,
			Self::Unknown(code) => code,
		}
	}

	/// Human-readable explanation.
	pub fn message(self) -> &'static str {
		match self {
			Self::Ok => "OK",
			Self::SystemFailure => "Measurement System failure. Please repeat the measurement.",
			Self::InvalidInput => "Invalid input data. Please verify your settings.",
			Self::OutdatedClient => "You are using an old Client version. Please update.",
			Self::CorruptedTransfer => "Corrupted data transfer. Please repeat the measurement.",
			Self::Unknown(_) => "Unknown status code.",
		}
	}

	/// Whether the measurement result can be used.
	pub fn is_ok(self) -> bool {
		self == Self::Ok
	}
}

impl fmt::Display for Status {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} ({})", self.message(), self.code())
	}
}
