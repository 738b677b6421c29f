//! Signed, expiring link tokens and fixed-window throttling for the lead, PDF, and email routes.
//!
//! Two independent leaf utilities live here:
//!
//! - [`token::TokenSigner`] issues and verifies compact `body.signature` tokens carrying an
//!   arbitrary serde payload plus an expiry.
//! - [`rate_limit::RateLimiter`] decides, per key, whether a request falls over a fixed-window
//!   budget.
//!
//! Both take an injectable [`clock::Clock`] so callers and tests can control time.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod client_ip;
pub mod clock;
pub mod config;
pub mod error;
pub mod obs;
pub mod rate_limit;
pub mod token;

mod _prelude {
	pub use std::{
		collections::HashMap,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		sync::Arc,
	};

	pub use parking_lot::Mutex;
	pub use serde::{Deserialize, Serialize, de::DeserializeOwned};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};

	pub use crate::error::{Error, Result};
}

#[cfg(test)] use color_eyre as _;
