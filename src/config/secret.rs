//! Signing secret wrapper that redacts key material.

// self
use crate::_prelude::*;

/// Redacted signing secret wrapper keeping key material out of logs.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningSecret(String);
impl SigningSecret {
	/// Wraps a new secret string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the raw key bytes. Callers must avoid logging them.
	pub fn expose(&self) -> &[u8] {
		self.0.as_bytes()
	}
}
impl Debug for SigningSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("SigningSecret").field(&"<redacted>").finish()
	}
}
impl Display for SigningSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn secret_formatters_redact() {
		let secret = SigningSecret::new("super-secret");

		assert_eq!(format!("{secret:?}"), "SigningSecret(\"<redacted>\")");
		assert_eq!(format!("{secret}"), "<redacted>");
		assert_eq!(secret.expose(), b"super-secret");
	}
}
