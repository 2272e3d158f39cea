use thiserror::Error;

use twimlgen_core::{Compressibility, PayloadError, byte_length, generate};

/// Fixed markup surrounding the payload. The generated text is inserted
/// verbatim (already escaped) at the single substitution point between
/// these two constants.
const DOCUMENT_PREFIX: &str =
	"<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<Response>\n\t<Say>";
const DOCUMENT_SUFFIX: &str = "</Say>\n</Response>\n";

/// Failures while rendering a full TwiML document.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TwimlError {
	#[error(transparent)]
	Payload(#[from] PayloadError),

	/// The requested total cannot hold even an empty payload.
	#[error("total of {total} bytes is below the {overhead}-byte template overhead")]
	BudgetTooSmall { total: i64, overhead: usize },
}

/// Byte cost of the markup around the payload, measured with the same
/// oracle used for generation.
pub fn template_overhead() -> usize {
	byte_length(DOCUMENT_PREFIX) + byte_length(DOCUMENT_SUFFIX)
}

/// Renders a TwiML document whose total size is exactly `total_bytes`.
///
/// The payload budget is the total minus the fixed template overhead;
/// `generate` is called exactly once per document.
///
/// # Errors
/// - `BudgetTooSmall` if the total cannot cover the template itself.
/// - Propagates the core's input-validation errors.
pub fn render_document(total_bytes: i64, mode: Compressibility) -> Result<String, TwimlError> {
	let overhead = template_overhead();
	if total_bytes < overhead as i64 {
		return Err(TwimlError::BudgetTooSmall { total: total_bytes, overhead });
	}

	let payload = generate(total_bytes - overhead as i64, mode)?;
	Ok(format!("{DOCUMENT_PREFIX}{payload}{DOCUMENT_SUFFIX}"))
}
