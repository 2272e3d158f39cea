use rand::Rng;

use crate::payload::compressibility::Compressibility;
use crate::payload::error::PayloadError;
use crate::payload::lexicon;
use crate::text::{byte_length, escape_xml};

/// Alphabet of the incompressible strategy: 64 symbols, each a single byte
/// in UTF-8, none of them XML-reserved. Draws therefore never need escaping
/// and the output byte count equals the number of draws.
const ALPHABET: &[u8; 64] =
	b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Character repeated by the maximally-compressible strategy.
const FILLER: char = 'A';

/// Generates a payload of exactly `byte_target` UTF-8 bytes.
///
/// Output is already XML-escaped and can be embedded verbatim in a host
/// markup document. Draws randomness from the process-wide [`rand::rng`],
/// which is safe under concurrent use; see [`generate_with`] for an
/// injectable source.
///
/// # Parameters
/// - `byte_target`: target output size in encoded bytes.
/// - `mode`: content-shape strategy (see [`Compressibility`]).
///
/// # Errors
/// - [`PayloadError::InvalidTarget`] if `byte_target` is negative.
///
/// An unrecognized mode name cannot reach this function: the enumeration
/// is closed and parsing rejects unknown spellings upstream.
pub fn generate(byte_target: i64, mode: Compressibility) -> Result<String, PayloadError> {
	let mut rng = rand::rng();
	generate_with(&mut rng, byte_target, mode)
}

/// [`generate`] with an explicit randomness source.
///
/// Passing a seeded `StdRng` makes the output reproducible, which the
/// process-wide generator deliberately is not.
pub fn generate_with<R: Rng + ?Sized>(
	rng: &mut R,
	byte_target: i64,
	mode: Compressibility,
) -> Result<String, PayloadError> {
	let target =
		usize::try_from(byte_target).map_err(|_| PayloadError::InvalidTarget(byte_target))?;

	Ok(match mode {
		Compressibility::Incompressible => make_incompressible(rng, target),
		Compressibility::MaximallyCompressible => make_maximally(target),
		Compressibility::StructuredMixed => make_structured(rng, target),
	})
}

/// High-entropy payload: `target` independent draws from [`ALPHABET`].
///
/// Byte-exact by construction, no trim pass needed.
fn make_incompressible<R: Rng + ?Sized>(rng: &mut R, target: usize) -> String {
	let mut out = String::with_capacity(target);
	for _ in 0..target {
		out.push(ALPHABET[rng.random_range(0..ALPHABET.len())] as char);
	}
	out
}

/// Degenerate payload: `target` repetitions of a single character.
fn make_maximally(target: usize) -> String {
	FILLER.to_string().repeat(target)
}

/// Structured mixed content: templated chunks appended until the budget is
/// reached, with a byte-exact trim of the final chunk.
///
/// # Behavior
/// - Each chunk is escaped immediately after generation and measured with
///   [`byte_length`]; raw chunk sizes are never compared to the budget.
/// - A chunk that would overshoot is cut at the largest boundary that fits
///   the remaining budget (see [`trim_to_budget`]). When that boundary
///   lands short of the remainder (the exact cut would fall inside a
///   multi-byte character or an entity), the loop keeps generating against
///   the smaller remainder instead of returning an undersized payload.
/// - A zero target returns the empty string without generating anything.
///
/// Sentence chunks are pure single-byte ASCII, so any positive remainder
/// is eventually filled exactly and the loop terminates.
fn make_structured<R: Rng + ?Sized>(rng: &mut R, target: usize) -> String {
	let mut out = String::with_capacity(target);
	let mut current = 0;

	while current < target {
		let chunk = escape_xml(&random_chunk(rng));
		let chunk_bytes = byte_length(&chunk);

		if current + chunk_bytes <= target {
			out.push_str(&chunk);
			current += chunk_bytes;
		} else {
			let prefix = trim_to_budget(&chunk, target - current);
			out.push_str(prefix);
			current += byte_length(prefix);
		}
	}

	out
}

/// Picks one chunk shape with fixed relative weights:
/// 0.3 sentence, 0.2 product line, 0.2 person line, 0.3 company line.
fn random_chunk<R: Rng + ?Sized>(rng: &mut R) -> String {
	let roll: f64 = rng.random();
	if roll < 0.3 {
		lexicon::sentence(rng)
	} else if roll < 0.5 {
		lexicon::product_line(rng)
	} else if roll < 0.7 {
		lexicon::person_line(rng)
	} else {
		lexicon::company_line(rng)
	}
}

/// Returns the longest prefix of an escaped chunk that fits `remaining`
/// bytes without splitting a multi-byte character or a `&...;` entity.
///
/// A prefix of a `&str` taken at a char boundary has a byte length equal
/// to its end index, so a single forward scan over `char_indices` finds
/// the largest safe cut at most `remaining`. Positions strictly inside an
/// entity are unsafe: a partial entity would corrupt the host markup and
/// its byte count could not be verified.
///
/// The empty prefix always fits, so the search is total.
fn trim_to_budget(chunk: &str, remaining: usize) -> &str {
	let mut best = 0;
	let mut in_entity = false;

	for (i, c) in chunk.char_indices() {
		if !in_entity && i <= remaining {
			best = i;
		}
		match c {
			'&' => in_entity = true,
			';' if in_entity => in_entity = false,
			_ => (),
		}
	}
	if !in_entity && chunk.len() <= remaining {
		best = chunk.len();
	}

	&chunk[..best]
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	/// Every `&` in escaped output must start a complete named entity.
	fn has_partial_entity(text: &str) -> bool {
		let mut rest = text;
		while let Some(pos) = rest.find('&') {
			let tail = &rest[pos + 1..];
			let complete = ["amp;", "lt;", "gt;", "quot;", "apos;"]
				.iter()
				.any(|entity| tail.starts_with(entity));
			if !complete {
				return true;
			}
			rest = tail;
		}
		false
	}

	#[test]
	fn exactness_for_all_modes_and_targets() {
		let mut rng = StdRng::seed_from_u64(42);
		for mode in Compressibility::ALL {
			for target in [0, 1, 2, 3, 5, 7, 10, 63, 64, 100, 255, 1000, 4097] {
				let payload = generate_with(&mut rng, target, mode).unwrap();
				assert_eq!(
					byte_length(&payload) as i64,
					target,
					"mode {mode} target {target}"
				);
			}
		}
	}

	#[test]
	fn zero_budget_returns_empty_for_every_mode() {
		let mut rng = StdRng::seed_from_u64(1);
		for mode in Compressibility::ALL {
			assert_eq!(generate_with(&mut rng, 0, mode).unwrap(), "");
		}
	}

	#[test]
	fn incompressible_stays_within_the_alphabet() {
		let mut rng = StdRng::seed_from_u64(9);
		let payload = generate_with(&mut rng, 4096, Compressibility::Incompressible).unwrap();
		assert!(payload.chars().all(|c| ALPHABET.contains(&(c as u8))));
	}

	#[test]
	fn alphabet_is_64_single_byte_non_reserved_symbols() {
		assert_eq!(ALPHABET.len(), 64);
		for &b in ALPHABET.iter() {
			assert!(b.is_ascii());
			assert!(!b"&<>\"'".contains(&b));
		}
	}

	#[test]
	fn maximally_compressible_repeats_one_character() {
		let mut rng = StdRng::seed_from_u64(3);
		let payload =
			generate_with(&mut rng, 3, Compressibility::MaximallyCompressible).unwrap();
		assert_eq!(payload, "AAA");

		let long = generate_with(&mut rng, 512, Compressibility::MaximallyCompressible).unwrap();
		assert!(long.chars().all(|c| c == FILLER));
		assert_eq!(byte_length(&long), 512);
	}

	#[test]
	fn structured_trim_never_leaves_a_partial_entity() {
		// Small targets force a trim inside the very first chunk, which is
		// where a naive cut would split a code point or an entity.
		for seed in 0..40 {
			let mut rng = StdRng::seed_from_u64(seed);
			for target in 1..=80 {
				let payload =
					generate_with(&mut rng, target, Compressibility::StructuredMixed).unwrap();
				assert_eq!(byte_length(&payload) as i64, target);
				assert!(
					!has_partial_entity(&payload),
					"seed {seed} target {target}: {payload:?}"
				);
			}
		}
	}

	#[test]
	fn structured_output_is_reproducible_with_a_seeded_source() {
		let mut a = StdRng::seed_from_u64(1234);
		let mut b = StdRng::seed_from_u64(1234);
		let first = generate_with(&mut a, 2000, Compressibility::StructuredMixed).unwrap();
		let second = generate_with(&mut b, 2000, Compressibility::StructuredMixed).unwrap();
		assert_eq!(first, second);
	}

	#[test]
	fn negative_targets_are_rejected() {
		for mode in Compressibility::ALL {
			assert_eq!(generate(-1, mode), Err(PayloadError::InvalidTarget(-1)));
		}
	}

	#[test]
	fn spec_worked_examples() {
		let payload = generate(5, Compressibility::Incompressible).unwrap();
		assert_eq!(payload.chars().count(), 5);
		assert_eq!(byte_length(&payload), 5);

		assert_eq!(generate(3, Compressibility::MaximallyCompressible).unwrap(), "AAA");
		assert_eq!(generate(0, Compressibility::StructuredMixed).unwrap(), "");
	}

	#[test]
	fn trim_respects_char_boundaries() {
		// "Zürich" is Z(1) ü(2) r(1)...; a 2-byte budget cannot cut inside ü.
		assert_eq!(trim_to_budget("Zürich", 0), "");
		assert_eq!(trim_to_budget("Zürich", 1), "Z");
		assert_eq!(trim_to_budget("Zürich", 2), "Z");
		assert_eq!(trim_to_budget("Zürich", 3), "Zü");
		assert_eq!(trim_to_budget("Zürich", 99), "Zürich");
	}

	#[test]
	fn trim_treats_entities_as_atomic() {
		let escaped = "a &amp; b";
		assert_eq!(trim_to_budget(escaped, 2), "a ");
		for budget in 3..7 {
			// Inside "&amp;": fall back to the boundary before it.
			assert_eq!(trim_to_budget(escaped, budget), "a ", "budget {budget}");
		}
		assert_eq!(trim_to_budget(escaped, 7), "a &amp;");
		assert_eq!(trim_to_budget(escaped, 8), "a &amp; ");
	}
}
