//! Public library API for the MATLAB-compatible tagged binary payload format.

/// Value model, tag table, recursive encode/decode, and checksum framing.
pub mod codec;
