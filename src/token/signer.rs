//! Token issuance and verification.

// crates.io
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;
// self
use crate::{
	_prelude::*,
	clock::{Clock, SystemClock},
	config::SigningConfig,
	error::ConfigError,
	obs::{self, GuardOp, OpOutcome, OpSpan},
	token::{Envelope, Rejection, SEPARATOR, envelope::RawEnvelope},
};

type HmacSha256 = Hmac<Sha256>;

/// Issues and verifies expiring, tamper-evident tokens.
///
/// The signer is stateless beyond its key: tokens are never stored, and anything that verifies
/// was produced by a signer holding the same secret.
#[derive(Clone)]
pub struct TokenSigner {
	mac: HmacSha256,
	clock: Arc<dyn Clock>,
}
impl TokenSigner {
	/// Builds a signer for the resolved configuration, reading time from the system clock.
	pub fn new(config: &SigningConfig) -> Result<Self> {
		let mac = HmacSha256::new_from_slice(config.secret().expose())
			.map_err(|source| ConfigError::InvalidSigningKey { source })?;

		Ok(Self { mac, clock: Arc::new(SystemClock) })
	}

	/// Replaces the time source used for expiry calculations.
	pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
		self.clock = clock;

		self
	}

	/// Issues a token carrying `payload` that expires `ttl` from now.
	///
	/// Sub-second precision is dropped; the lifetime must contain at least one whole second.
	pub fn issue<P>(&self, payload: &P, ttl: Duration) -> Result<String>
	where
		P: ?Sized + Serialize,
	{
		let _span = OpSpan::new(GuardOp::Issue, "issue").entered();
		let result = self.issue_inner(payload, ttl);

		obs::record_op_outcome(
			GuardOp::Issue,
			if result.is_ok() { OpOutcome::Success } else { OpOutcome::Failure },
		);

		result
	}

	/// Returns the payload if `token` is authentic and unexpired, `None` otherwise.
	///
	/// Malformed input, signature mismatches, unreadable envelopes, and expired tokens are
	/// indistinguishable to the caller.
	pub fn verify<T>(&self, token: &str) -> Option<T>
	where
		T: DeserializeOwned,
	{
		let _span = OpSpan::new(GuardOp::Verify, "verify").entered();

		match self.check(token) {
			Ok(payload) => {
				obs::record_op_outcome(GuardOp::Verify, OpOutcome::Success);

				Some(payload)
			},
			Err((reason, detail)) => {
				obs::trace_rejection(reason, &detail);
				obs::record_rejection(reason);
				obs::record_op_outcome(GuardOp::Verify, OpOutcome::Failure);

				None
			},
		}
	}

	fn issue_inner<P>(&self, payload: &P, ttl: Duration) -> Result<String>
	where
		P: ?Sized + Serialize,
	{
		let ttl_seconds = ttl.whole_seconds();

		if ttl_seconds < 1 {
			return Err(Error::InvalidTtl { seconds: ttl_seconds });
		}

		let exp = self.clock.now().unix_timestamp().saturating_add(ttl_seconds);
		let json = serde_json::to_vec(&Envelope { payload, exp })
			.map_err(|source| Error::Encode { source })?;
		let body = URL_SAFE_NO_PAD.encode(json);
		let signature = self.sign(&body);

		Ok(format!("{body}{SEPARATOR}{signature}"))
	}

	fn check<T>(&self, token: &str) -> Result<T, (Rejection, String)>
	where
		T: DeserializeOwned,
	{
		let mut parts = token.split(SEPARATOR);
		let (body, signature) = match (parts.next(), parts.next()) {
			(Some(body), Some(signature)) if !body.is_empty() && !signature.is_empty() =>
				(body, signature),
			_ => return Err((Rejection::Format, "expected `body.signature`".into())),
		};
		let expected = self.sign(body);

		if !bool::from(expected.as_bytes().ct_eq(signature.as_bytes())) {
			return Err((Rejection::Signature, "signature mismatch".into()));
		}

		let bytes = URL_SAFE_NO_PAD
			.decode(body)
			.map_err(|e| (Rejection::Envelope, format!("body is not base64url: {e}")))?;
		let raw = RawEnvelope::parse(&bytes)?;
		let exp = raw
			.expiry()
			.ok_or_else(|| (Rejection::Envelope, "missing numeric expiry".to_owned()))?;
		let now = self.clock.now().unix_timestamp();

		if now as f64 > exp {
			return Err((Rejection::Expired, format!("expired at {exp}, now {now}")));
		}

		raw.into_payload()
	}

	fn sign(&self, body: &str) -> String {
		let mut mac = self.mac.clone();

		mac.update(body.as_bytes());

		URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes())
	}
}
impl Debug for TokenSigner {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenSigner").field("key", &"<redacted>").finish_non_exhaustive()
	}
}
