// self
use crate::{
	obs::{GuardOp, OpOutcome},
	token::Rejection,
};

/// Records an operation outcome via the global metrics recorder (when enabled).
pub fn record_op_outcome(op: GuardOp, outcome: OpOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"link_guard_op_total",
			"op" => op.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (op, outcome);
	}
}

pub(crate) fn record_rejection(reason: Rejection) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!("link_guard_token_rejected_total", "reason" => reason.as_str())
			.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = reason;
	}
}
