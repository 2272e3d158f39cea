use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::payload::error::PayloadError;

/// Content-shape strategy controlling the entropy/repetition
/// characteristics of the generated payload.
///
/// The set is closed on purpose: dispatch is an exhaustive `match`, and an
/// unrecognized wire name is a [`PayloadError::InvalidMode`], never a
/// silent fallback to some default shape.
///
/// # Variants
/// - `Incompressible`: independent draws from a 64-symbol single-byte
///   alphabet; maximal entropy, resists general-purpose compression.
/// - `MaximallyCompressible`: one repeated character; the degenerate
///   opposite extreme.
/// - `StructuredMixed`: weighted mix of prose and commerce-like templated
///   lines with moderate entropy.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Compressibility {
	Incompressible,
	MaximallyCompressible,
	StructuredMixed,
}

impl Compressibility {
	/// All modes, in wire order. Used by hosts listing what they accept.
	pub const ALL: [Compressibility; 3] = [
		Compressibility::Incompressible,
		Compressibility::MaximallyCompressible,
		Compressibility::StructuredMixed,
	];

	/// The kebab-case wire name of the mode.
	pub fn as_str(&self) -> &'static str {
		match self {
			Compressibility::Incompressible => "incompressible",
			Compressibility::MaximallyCompressible => "maximally-compressible",
			Compressibility::StructuredMixed => "structured-mixed",
		}
	}
}

impl fmt::Display for Compressibility {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Compressibility {
	type Err = PayloadError;

	/// Parses the canonical kebab-case wire names.
	///
	/// # Errors
	/// Any other spelling (including the draft names "random", "maximally"
	/// and "lipsum" of an earlier iteration) is an `InvalidMode` error.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"incompressible" => Ok(Compressibility::Incompressible),
			"maximally-compressible" => Ok(Compressibility::MaximallyCompressible),
			"structured-mixed" => Ok(Compressibility::StructuredMixed),
			other => Err(PayloadError::InvalidMode(other.to_owned())),
		}
	}
}
