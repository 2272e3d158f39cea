//! Byte-exact synthetic payload generation.
//!
//! This crate produces text blobs whose UTF-8 size in bytes matches a
//! caller-supplied target exactly, under one of three compressibility
//! shapes:
//! - Incompressible (high-entropy, single-byte alphabet)
//! - Maximally compressible (one repeated character)
//! - Structured mixed content (prose/commerce-like templated chunks)
//!
//! All size accounting goes through a single byte-length oracle, and every
//! chunk is XML-escaped before it is measured, so the output can be embedded
//! verbatim in a host markup document without changing its size.

/// Payload generation: compressibility modes, strategies and exact trimming.
pub mod payload;

/// Byte measurement and XML escaping primitives.
pub mod text;

pub use payload::compressibility::Compressibility;
pub use payload::error::PayloadError;
pub use payload::generator::{generate, generate_with};
pub use text::{byte_length, escape_xml};
