// self
use crate::{_prelude::*, obs::GuardOp, token::Rejection};

/// A span builder used around signer and limiter operations.
#[derive(Clone, Debug)]
pub struct OpSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl OpSpan {
	/// Creates a new span tagged with the provided operation + stage.
	pub fn new(op: GuardOp, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::debug_span!("link_guard.op", op = op.as_str(), stage);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (op, stage);

			Self {}
		}
	}

	/// Enters the span for the rest of the enclosing scope.
	pub fn entered(self) -> OpSpanGuard {
		#[cfg(feature = "tracing")]
		{
			OpSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			OpSpanGuard {}
		}
	}
}

/// RAII guard returned by [`OpSpan::entered`].
pub struct OpSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for OpSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("OpSpanGuard(..)")
	}
}

pub(crate) fn trace_rejection(reason: Rejection, detail: &dyn Display) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(reason = reason.as_str(), %detail, "token rejected");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (reason, detail);
	}
}

pub(crate) fn trace_limited(key: &str, count: u32, max_requests: u32) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(key, count, max_requests, "rate limit exceeded");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (key, count, max_requests);
	}
}

pub(crate) fn warn_insecure_secret(var: &'static str) {
	#[cfg(feature = "tracing")]
	{
		tracing::warn!(var, "signing secret unset; using the insecure development default");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = var;
	}
}
