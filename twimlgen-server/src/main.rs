use std::env;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, post, web};

use serde::Deserialize;
use twimlgen_core::{Compressibility, generate};

mod twiml;

/// Query parameters shared by the payload and TwiML endpoints.
#[derive(Deserialize)]
struct PayloadParams {
	bytes: Option<i64>,
	compressibility: Option<String>,
}

#[derive(Deserialize)]
struct TwimlParams {
	total_bytes: Option<i64>,
	compressibility: Option<String>,
}

/// Parses a `compressibility` query value through the core's closed
/// enumeration; missing and unknown names are both client errors.
fn parse_mode(raw: &Option<String>) -> Result<Compressibility, String> {
	match raw {
		None => Err("Missing 'compressibility' query parameter".to_owned()),
		Some(s) => s.parse().map_err(|e: twimlgen_core::PayloadError| e.to_string()),
	}
}

/// HTTP GET endpoint `/v1/payload`
///
/// Returns a raw payload of exactly `bytes` UTF-8 bytes in the requested
/// compressibility mode, as plain text.
#[get("/v1/payload")]
async fn get_payload(query: web::Query<PayloadParams>) -> impl Responder {
	let mode = match parse_mode(&query.compressibility) {
		Ok(m) => m,
		Err(e) => return HttpResponse::BadRequest().body(e),
	};
	let bytes = match query.bytes {
		Some(b) => b,
		None => return HttpResponse::BadRequest().body("Missing 'bytes' query parameter"),
	};

	match generate(bytes, mode) {
		Ok(payload) => HttpResponse::Ok().body(payload),
		Err(e) => HttpResponse::BadRequest().body(e.to_string()),
	}
}

/// HTTP GET endpoint `/v1/modes`
///
/// Lists the accepted compressibility wire names as JSON.
#[get("/v1/modes")]
async fn get_modes() -> impl Responder {
	HttpResponse::Ok().json(Compressibility::ALL)
}

/// HTTP POST endpoint `/twiml/voice`
///
/// Telephony webhook: answers with a TwiML document whose total size is
/// exactly `total_bytes`, the payload budget being the total minus the
/// fixed template overhead.
#[post("/twiml/voice")]
async fn post_twiml(query: web::Query<TwimlParams>) -> impl Responder {
	let mode = match parse_mode(&query.compressibility) {
		Ok(m) => m,
		Err(e) => return HttpResponse::BadRequest().body(e),
	};
	let total_bytes = match query.total_bytes {
		Some(b) => b,
		None => return HttpResponse::BadRequest().body("Missing 'total_bytes' query parameter"),
	};

	match twiml::render_document(total_bytes, mode) {
		Ok(document) => HttpResponse::Ok().content_type("text/xml").body(document),
		Err(e) => HttpResponse::BadRequest().body(e.to_string()),
	}
}

/// Main entry point for the server.
///
/// The core is stateless per call, so no shared state is registered; each
/// request generates independently off the process-wide random source.
///
/// # Notes
/// - Bind address and port come from `TWIMLGEN_HOST` / `TWIMLGEN_PORT`,
///   defaulting to 127.0.0.1:5000.
/// - Request logging goes through the `Logger` middleware; configure with
///   the usual `RUST_LOG` variable.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let host = env::var("TWIMLGEN_HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
	let port = env::var("TWIMLGEN_PORT")
		.ok()
		.and_then(|p| p.parse::<u16>().ok())
		.unwrap_or(5000);

	log::info!("listening on {host}:{port}");

	HttpServer::new(|| {
		App::new()
			.wrap(Logger::default())
			.wrap(Cors::permissive())
			.service(get_payload)
			.service(get_modes)
			.service(post_twiml)
	})
		.bind((host, port))?
		.run()
		.await
}
