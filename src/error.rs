//! Crate-level error types shared by the token signer and configuration layer.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical error exposed by public APIs.
///
/// Token verification never surfaces this type; it reports every failure as `None`.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),

	/// Requested lifetime is shorter than one whole second.
	#[error("Token lifetime must be at least one second, got {seconds}s.")]
	InvalidTtl {
		/// Whole seconds contained in the rejected lifetime.
		seconds: i64,
	},
	/// Payload could not be serialized into a token envelope.
	#[error("Token payload could not be serialized.")]
	Encode {
		/// Underlying serialization failure.
		#[source]
		source: serde_json::Error,
	},
}

/// Configuration failures raised while resolving signing material.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Production deployments must provide a signing secret.
	#[error("Missing {var}; a signing secret is required in production.")]
	MissingSigningSecret {
		/// Environment variable that was expected to carry the secret.
		var: &'static str,
	},
	/// The MAC implementation rejected the configured key material.
	#[error("Signing secret cannot be used as an HMAC key.")]
	InvalidSigningKey {
		/// Underlying key-length failure.
		#[source]
		source: hmac::digest::InvalidLength,
	},
}
