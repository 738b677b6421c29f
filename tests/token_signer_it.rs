// std
use std::sync::Arc;
// crates.io
use serde::{Deserialize, Serialize};
use time::{Duration, macros};
// self
use link_guard::{
	clock::ManualClock,
	config::{Environment, SigningConfig},
	token::TokenSigner,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct RoiPdfRequest {
	company: String,
	facilities: u32,
	annual_savings: f64,
	tags: Vec<String>,
}

fn fixture() -> RoiPdfRequest {
	RoiPdfRequest {
		company: "Acme Freight".into(),
		facilities: 12,
		annual_savings: 1_250_000.5,
		tags: vec!["roi".into(), "yard".into()],
	}
}

fn signer(secret: &str, clock: &ManualClock) -> TokenSigner {
	let config = SigningConfig::resolve(Some(secret.into()), Environment::Production)
		.expect("Explicit secret fixture should resolve for signer tests.");

	TokenSigner::new(&config)
		.expect("Signer should build from a resolved config.")
		.with_clock(Arc::new(clock.clone()))
}

fn start_clock() -> ManualClock {
	ManualClock::new(macros::datetime!(2025-11-10 12:00 UTC))
}

fn flip(c: char) -> char {
	if c == 'A' { 'B' } else { 'A' }
}

fn mutate_at(token: &str, index: usize) -> String {
	token.char_indices().map(|(i, c)| if i == index { flip(c) } else { c }).collect()
}

#[test]
fn round_trip_returns_original_payload() -> color_eyre::Result<()> {
	let clock = start_clock();
	let signer = signer("it-secret", &clock);
	let payload = fixture();
	let token = signer.issue(&payload, Duration::minutes(15))?;

	assert_eq!(signer.verify::<RoiPdfRequest>(&token), Some(payload));

	let token = signer.issue(&serde_json::json!(null), Duration::seconds(1))?;

	assert_eq!(signer.verify::<serde_json::Value>(&token), Some(serde_json::Value::Null));

	Ok(())
}

#[test]
fn token_expires_after_ttl() -> color_eyre::Result<()> {
	let clock = start_clock();
	let signer = signer("it-secret", &clock);
	let token = signer.issue(&fixture(), Duration::seconds(1))?;

	clock.advance(Duration::seconds(1));

	assert!(signer.verify::<RoiPdfRequest>(&token).is_some(), "Valid through the expiry second.");

	clock.advance(Duration::seconds(1));

	assert_eq!(signer.verify::<RoiPdfRequest>(&token), None);

	Ok(())
}

#[test]
fn any_signature_flip_is_rejected() -> color_eyre::Result<()> {
	let clock = start_clock();
	let signer = signer("it-secret", &clock);
	let token = signer.issue(&fixture(), Duration::minutes(5))?;
	let dot = token.find('.').expect("Issued token should contain a separator.");

	for index in dot + 1..token.len() {
		let tampered = mutate_at(&token, index);

		assert_eq!(signer.verify::<RoiPdfRequest>(&tampered), None, "index {index}");
	}

	Ok(())
}

#[test]
fn any_body_flip_is_rejected() -> color_eyre::Result<()> {
	let clock = start_clock();
	let signer = signer("it-secret", &clock);
	let token = signer.issue(&fixture(), Duration::minutes(5))?;
	let dot = token.find('.').expect("Issued token should contain a separator.");

	for index in 0..dot {
		let tampered = mutate_at(&token, index);

		assert_eq!(signer.verify::<RoiPdfRequest>(&tampered), None, "index {index}");
	}

	Ok(())
}

#[test]
fn tokens_from_another_secret_are_rejected() -> color_eyre::Result<()> {
	let clock = start_clock();
	let issuer = signer("issuer-secret", &clock);
	let verifier = signer("other-secret", &clock);
	let token = issuer.issue(&fixture(), Duration::minutes(5))?;

	assert!(issuer.verify::<RoiPdfRequest>(&token).is_some());
	assert_eq!(verifier.verify::<RoiPdfRequest>(&token), None);

	Ok(())
}

#[test]
fn malformed_input_is_invalid_without_panicking() {
	let clock = start_clock();
	let signer = signer("it-secret", &clock);

	for input in ["", ".", "no-delimiter", "body.", ".signature", "%%%.###", "a.b.c"] {
		assert_eq!(signer.verify::<serde_json::Value>(input), None, "input {input:?}");
	}
}

#[test]
fn payload_type_mismatch_is_invalid() -> color_eyre::Result<()> {
	let clock = start_clock();
	let signer = signer("it-secret", &clock);
	let token = signer.issue(&"plain text", Duration::minutes(5))?;

	assert_eq!(signer.verify::<RoiPdfRequest>(&token), None);
	assert_eq!(signer.verify::<String>(&token).as_deref(), Some("plain text"));

	Ok(())
}
