//! Payload-plus-expiry envelope embedded in every token body.

// crates.io
use serde_json::Value;
// self
use crate::{_prelude::*, token::Rejection};

/// Structured body carried inside a signed token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
	/// Application data; opaque to the signer.
	pub payload: T,
	/// Absolute Unix timestamp (seconds) after which the token is invalid.
	pub exp: i64,
}

/// Loosely typed envelope used while verifying, so the expiry can be checked before the payload
/// is bound to a concrete type.
#[derive(Debug, Deserialize)]
pub(crate) struct RawEnvelope {
	#[serde(default)]
	payload: Value,
	#[serde(default)]
	exp: Value,
}
impl RawEnvelope {
	/// Parses decoded body bytes.
	pub(crate) fn parse(bytes: &[u8]) -> Result<Self, (Rejection, String)> {
		let mut de = serde_json::Deserializer::from_slice(bytes);
		let raw = serde_path_to_error::deserialize(&mut de)
			.map_err(|e| (Rejection::Envelope, format!("{} at {}", e.inner(), e.path())))?;

		de.end().map_err(|e| (Rejection::Envelope, e.to_string()))?;

		Ok(raw)
	}

	/// Returns the numeric expiry. Missing, non-numeric, and zero values count as absent.
	pub(crate) fn expiry(&self) -> Option<f64> {
		self.exp.as_f64().filter(|exp| *exp != 0.0)
	}

	/// Binds the payload to `T`.
	pub(crate) fn into_payload<T>(self) -> Result<T, (Rejection, String)>
	where
		T: DeserializeOwned,
	{
		serde_path_to_error::deserialize(self.payload)
			.map_err(|e| (Rejection::Envelope, format!("payload: {} at {}", e.inner(), e.path())))
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn envelope_serializes_payload_then_exp() {
		let envelope = Envelope { payload: serde_json::json!({ "facility": 3 }), exp: 1_700_000_000 };
		let json = serde_json::to_string(&envelope).expect("Envelope fixture should serialize.");

		assert_eq!(json, r#"{"payload":{"facility":3},"exp":1700000000}"#);
	}

	#[test]
	fn raw_envelope_expiry_rules() {
		let parse = |json: &str| RawEnvelope::parse(json.as_bytes()).ok();

		assert_eq!(parse(r#"{"payload":1,"exp":10}"#).and_then(|e| e.expiry()), Some(10.0));
		assert_eq!(parse(r#"{"payload":1,"exp":10.5}"#).and_then(|e| e.expiry()), Some(10.5));
		assert_eq!(parse(r#"{"payload":1,"exp":0}"#).and_then(|e| e.expiry()), None);
		assert_eq!(parse(r#"{"payload":1,"exp":"10"}"#).and_then(|e| e.expiry()), None);
		assert_eq!(parse(r#"{"payload":1}"#).and_then(|e| e.expiry()), None);
		assert!(parse("42").is_none());
		assert!(parse(r#"{"payload":1,"exp":10} trailing"#).is_none());
		assert!(parse("not json").is_none());
	}

	#[test]
	fn payload_binding_reports_mismatch() {
		let raw = RawEnvelope::parse(br#"{"payload":"text","exp":10}"#)
			.expect("Raw envelope fixture should parse.");
		let (reason, _) =
			raw.into_payload::<u32>().expect_err("A string payload should not bind to u32.");

		assert_eq!(reason, Rejection::Envelope);
	}
}
