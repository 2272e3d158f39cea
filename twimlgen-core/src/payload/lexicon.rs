use chrono::{Days, Local};
use rand::Rng;

/// Static word banks and the four templated chunk builders used by the
/// structured mixed-content strategy.
///
/// The banks intentionally contain multi-byte entries (accented names and
/// cities) and reserved-character entries (`&` in company and job names,
/// `'` in country names) so that escaping and boundary-safe trimming are
/// exercised by ordinary generation, not only by hand-crafted tests.

const WORDS: &[&str] = &[
	"lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing",
	"elit", "sed", "do", "eiusmod", "tempor", "incididunt", "labore",
	"dolore", "magna", "aliqua", "enim", "minim", "veniam", "quis",
	"nostrud", "exercitation", "ullamco", "laboris", "nisi", "aliquip",
	"commodo", "consequat", "duis", "aute", "irure", "reprehenderit",
	"voluptate", "velit", "esse", "cillum", "fugiat", "nulla", "pariatur",
];

const PRODUCTS: &[&str] = &[
	"Laptop", "Smartphone", "Headphones", "Camera",
	"Tablet", "Watch", "Speaker", "Monitor",
];

const ADJECTIVES: &[&str] = &[
	"premium", "affordable", "innovative", "reliable",
	"sleek", "powerful", "compact", "professional",
];

const FIRST_NAMES: &[&str] = &[
	"Alice", "Bruno", "Chloé", "David", "Émile", "François",
	"Ingrid", "José", "Katarzyna", "Liam", "Søren", "Zoë",
];

const LAST_NAMES: &[&str] = &[
	"Anderson", "Bouchard", "Dupont", "García", "Johnson", "Kowalski",
	"Lefèvre", "Müller", "Nowak", "Okafor", "Silva", "Tanaka",
];

const CITIES: &[&str] = &[
	"Austin", "Kraków", "Lyon", "Malmö", "Montréal", "Nairobi",
	"Osaka", "Porto", "Reykjavík", "São Paulo", "Seattle", "Zürich",
];

const COUNTRIES: &[&str] = &[
	"Brazil", "Canada", "Côte d'Ivoire", "France", "Iceland",
	"Japan", "Kenya", "Poland", "Sweden", "Türkiye",
];

const JOBS: &[&str] = &[
	"civil engineer", "data analyst", "graphic designer",
	"logistics coordinator", "nurse", "pastry chef",
	"research & development manager", "sales & marketing lead",
	"software developer", "teacher",
];

const COMPANIES: &[&str] = &[
	"Acme Corp", "Brown & Sons", "Globex", "Initech",
	"Lefèvre & Fils", "Northwind Traders", "O'Connor Ltd",
	"Soylent Industries", "Umbrella Logistics", "Wayne Enterprises",
];

/// Picks one entry of a bank uniformly at random.
fn pick<'a, R: Rng + ?Sized>(rng: &mut R, bank: &'a [&'a str]) -> &'a str {
	bank[rng.random_range(0..bank.len())]
}

/// Uppercases the first character of a word.
fn capitalize(word: &str) -> String {
	let mut chars = word.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

/// A short free-form filler sentence of 4 to 9 lorem words.
///
/// Ends with `". "` like every chunk, so consecutive chunks read as prose.
pub(crate) fn sentence<R: Rng + ?Sized>(rng: &mut R) -> String {
	let count = rng.random_range(4..=9);
	let mut out = capitalize(pick(rng, WORDS));
	for _ in 1..count {
		out.push(' ');
		out.push_str(pick(rng, WORDS));
	}
	out.push_str(". ");
	out
}

/// A product-announcement line with a synthetic price.
pub(crate) fn product_line<R: Rng + ?Sized>(rng: &mut R) -> String {
	let product = pick(rng, PRODUCTS);
	let adjective = pick(rng, ADJECTIVES);
	let dollars = rng.random_range(50..=2000);
	let cents = rng.random_range(0..=99);
	format!("{product} is {adjective} and costs ${dollars}.{cents:02}. ")
}

/// A person-profile line with a synthetic name, city, country and job.
pub(crate) fn person_line<R: Rng + ?Sized>(rng: &mut R) -> String {
	let first = pick(rng, FIRST_NAMES);
	let last = pick(rng, LAST_NAMES);
	let city = pick(rng, CITIES);
	let country = pick(rng, COUNTRIES);
	let job = pick(rng, JOBS);
	format!("{first} {last} from {city}, {country} works as a {job}. ")
}

/// A company-announcement line dated within the last 30 days.
pub(crate) fn company_line<R: Rng + ?Sized>(rng: &mut R) -> String {
	let date = Local::now().date_naive() - Days::new(rng.random_range(0..=30));
	let company = pick(rng, COMPANIES);
	let mut words = pick(rng, WORDS).to_owned();
	for _ in 1..5 {
		words.push(' ');
		words.push_str(pick(rng, WORDS));
	}
	format!("On {}, {company} announced {words}. ", date.format("%a %b %d %Y"))
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	#[test]
	fn every_chunk_builder_emits_a_trailing_separator() {
		let mut rng = StdRng::seed_from_u64(7);
		for _ in 0..50 {
			for chunk in [
				sentence(&mut rng),
				product_line(&mut rng),
				person_line(&mut rng),
				company_line(&mut rng),
			] {
				assert!(chunk.ends_with(". "), "chunk {chunk:?} lacks separator");
				assert!(chunk.len() > 2);
			}
		}
	}

	#[test]
	fn banks_cover_the_escaping_and_multibyte_paths() {
		assert!(COMPANIES.iter().any(|c| c.contains('&')));
		assert!(JOBS.iter().any(|j| j.contains('&')));
		assert!(COUNTRIES.iter().any(|c| c.contains('\'')));
		assert!(CITIES.iter().any(|c| c.chars().any(|ch| !ch.is_ascii())));
		assert!(FIRST_NAMES.iter().any(|n| n.chars().any(|ch| !ch.is_ascii())));
	}

	#[test]
	fn capitalize_handles_multibyte_first_characters() {
		assert_eq!(capitalize("élan"), "Élan");
		assert_eq!(capitalize("word"), "Word");
		assert_eq!(capitalize(""), "");
	}
}
