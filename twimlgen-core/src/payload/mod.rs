//! Top-level module for the payload generation system.
//!
//! This module groups:
//! - The closed set of compressibility modes (`Compressibility`)
//! - The input-validation error taxonomy (`PayloadError`)
//! - The lexicon backing the structured mixed-content strategy
//! - The generation strategies and the exact-trim loop (`generator`)

/// Closed enumeration of compressibility modes with wire-name parsing.
pub mod compressibility;

/// Input-validation errors returned by the generator.
pub mod error;

/// Static word banks and templated chunk builders.
///
/// Internal to the crate; only the generator samples from it.
pub(crate) mod lexicon;

/// Mode dispatch, the three strategies and the byte-exact trim.
pub mod generator;
