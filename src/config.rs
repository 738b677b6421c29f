//! Signing configuration resolved once at startup.
//!
//! Outside production an unset secret falls back to a fixed development value so local runs and
//! CI work without setup. In production the same condition is a hard error. Building with the
//! `production` feature removes the fallback entirely.

pub mod secret;

pub use secret::SigningSecret;

// self
use crate::{_prelude::*, error::ConfigError};

/// Environment variable carrying the signing secret.
pub const SECRET_VAR: &str = "PDF_SIGNING_SECRET";
/// Environment variable selecting the deployment environment.
pub const ENVIRONMENT_VAR: &str = "LINK_GUARD_ENV";

#[cfg(not(feature = "production"))]
const INSECURE_DEV_SECRET: &str = "dev-pdf-secret";

/// Deployment environment controlling the fallback-secret policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Environment {
	/// Local development, CI, previews.
	#[default]
	Development,
	/// Live deployment; a real secret is mandatory.
	Production,
}
impl Environment {
	/// Interprets an environment flag. Anything other than `production`/`prod` is development.
	pub fn from_flag(flag: Option<&str>) -> Self {
		match flag.map(str::trim) {
			Some(value)
				if value.eq_ignore_ascii_case("production") || value.eq_ignore_ascii_case("prod") =>
				Self::Production,
			_ => Self::Development,
		}
	}

	/// Returns `true` for [`Environment::Production`].
	pub const fn is_production(self) -> bool {
		matches!(self, Self::Production)
	}

	/// Returns a stable label.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Development => "development",
			Self::Production => "production",
		}
	}
}
impl Display for Environment {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Resolved signing configuration handed to [`TokenSigner`](crate::token::TokenSigner).
#[derive(Clone, Debug)]
pub struct SigningConfig {
	secret: SigningSecret,
	environment: Environment,
	insecure_default: bool,
}
impl SigningConfig {
	/// Reads [`SECRET_VAR`] and [`ENVIRONMENT_VAR`] from the process environment.
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(|name| std::env::var(name).ok())
	}

	/// Resolves the configuration through a caller-supplied variable lookup.
	pub fn from_lookup<F>(mut lookup: F) -> Result<Self, ConfigError>
	where
		F: FnMut(&str) -> Option<String>,
	{
		let environment = Environment::from_flag(lookup(ENVIRONMENT_VAR).as_deref());

		Self::resolve(lookup(SECRET_VAR), environment)
	}

	/// Applies the fallback policy to an optional secret. Empty strings count as unset.
	pub fn resolve(secret: Option<String>, environment: Environment) -> Result<Self, ConfigError> {
		match secret.filter(|value| !value.is_empty()) {
			Some(value) =>
				Ok(Self { secret: SigningSecret::new(value), environment, insecure_default: false }),
			None => Self::fallback(environment),
		}
	}

	#[cfg(not(feature = "production"))]
	fn fallback(environment: Environment) -> Result<Self, ConfigError> {
		if environment.is_production() {
			return Err(ConfigError::MissingSigningSecret { var: SECRET_VAR });
		}

		crate::obs::warn_insecure_secret(SECRET_VAR);

		Ok(Self {
			secret: SigningSecret::new(INSECURE_DEV_SECRET),
			environment,
			insecure_default: true,
		})
	}

	#[cfg(feature = "production")]
	fn fallback(environment: Environment) -> Result<Self, ConfigError> {
		let _ = environment;

		Err(ConfigError::MissingSigningSecret { var: SECRET_VAR })
	}

	/// Key material used for signing.
	pub fn secret(&self) -> &SigningSecret {
		&self.secret
	}

	/// Environment the configuration was resolved for.
	pub fn environment(&self) -> Environment {
		self.environment
	}

	/// Returns `true` when the development fallback secret is in use.
	pub fn is_insecure_default(&self) -> bool {
		self.insecure_default
	}
}
