//! Optional observability helpers for the signer and the rate limiter.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `link_guard.op` with the `op` and `stage`
//!   fields, plus debug events for rejected tokens and throttled keys.
//! - Enable `metrics` to increment the `link_guard_op_total` counter for every success, failure,
//!   or throttle, labeled by `op` + `outcome`, and `link_guard_token_rejected_total` labeled by
//!   `reason`.

mod metrics;
mod tracing;

pub use self::{metrics::*, tracing::*};

pub(crate) use self::{
	metrics::record_rejection,
	tracing::{trace_limited, trace_rejection, warn_insecure_secret},
};

// self
use crate::_prelude::*;

/// Operations observed by the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GuardOp {
	/// Token issuance.
	Issue,
	/// Token verification.
	Verify,
	/// Rate-limit check-and-increment.
	RateCheck,
}
impl GuardOp {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			GuardOp::Issue => "issue",
			GuardOp::Verify => "verify",
			GuardOp::RateCheck => "rate_check",
		}
	}
}
impl Display for GuardOp {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpOutcome {
	/// The operation completed and the caller may proceed.
	Success,
	/// The operation failed or the token was rejected.
	Failure,
	/// The key exceeded its window budget.
	Limited,
}
impl OpOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			OpOutcome::Success => "success",
			OpOutcome::Failure => "failure",
			OpOutcome::Limited => "limited",
		}
	}
}
impl Display for OpOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
