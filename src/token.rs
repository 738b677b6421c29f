//! Compact signed tokens: `base64url(envelope).base64url(hmac_sha256(body))`.

pub mod envelope;
pub mod signer;

pub use envelope::Envelope;
pub use signer::TokenSigner;

/// Separator between the encoded body and its signature.
pub const SEPARATOR: char = '.';

/// Internal reason a token failed verification.
///
/// Callers only ever see `None`; the reason feeds logs and metrics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Rejection {
	/// Missing body or signature segment.
	Format,
	/// Signature does not match the body.
	Signature,
	/// Body is not a decodable envelope with a usable expiry and payload.
	Envelope,
	/// Expiry lies in the past.
	Expired,
}
impl Rejection {
	pub(crate) const fn as_str(self) -> &'static str {
		match self {
			Rejection::Format => "format",
			Rejection::Signature => "signature",
			Rejection::Envelope => "envelope",
			Rejection::Expired => "expired",
		}
	}
}
