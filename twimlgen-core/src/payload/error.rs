use thiserror::Error;

/// Input-validation failures of the payload generator.
///
/// These are the only errors the core can produce: generation itself is
/// total once the inputs are valid, and the trim search always terminates
/// (the empty prefix fits any budget). Errors are returned to the caller
/// untouched; the core neither logs nor retries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
	/// A mode name outside the closed enumeration was supplied.
	#[error("invalid compressibility mode: '{0}'")]
	InvalidMode(String),

	/// A negative byte target was supplied.
	#[error("byte target must be non-negative, got {0}")]
	InvalidTarget(i64),
}
