//! Fixed-window request throttling with an injectable counter store.
//!
//! A fixed window resets its counter at discrete boundaries, so a client can land up to
//! `2 × max_requests` calls around a boundary. Limits are only as global as the store: the
//! bundled [`MemoryCounterStore`] counts per process.

pub mod memory;

pub use memory::MemoryCounterStore;

// self
use crate::{
	_prelude::*,
	clock::{Clock, SystemClock},
	obs::{self, GuardOp, OpOutcome, OpSpan},
};

/// Counter backend consulted by [`RateLimiter`].
pub trait CounterStore
where
	Self: Send + Sync,
{
	/// Applies one hit for `key` at `now` and returns the count for the current window.
	///
	/// Implementations must perform the reset-or-increment step atomically per key.
	fn hit(&self, key: &str, now: OffsetDateTime, window: Duration) -> u32;
}

/// Per-key counting state for one fixed window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowCounter {
	/// Instant the current window opened.
	pub window_start: OffsetDateTime,
	/// Requests observed since `window_start`.
	pub count: u32,
}
impl WindowCounter {
	/// Opens a new window at `now` holding a single request.
	pub fn open(now: OffsetDateTime) -> Self {
		Self { window_start: now, count: 1 }
	}

	/// Returns `true` once strictly more than `window` has passed since the window opened.
	pub fn has_elapsed(&self, now: OffsetDateTime, window: Duration) -> bool {
		now - self.window_start > window
	}

	/// Records one request, reopening the window if it elapsed, and returns the new count.
	pub fn record(&mut self, now: OffsetDateTime, window: Duration) -> u32 {
		if self.has_elapsed(now, window) {
			*self = Self::open(now);
		} else {
			self.count = self.count.saturating_add(1);
		}

		self.count
	}
}

/// Window length and request budget for one class of route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RateRule {
	/// Length of each counting window.
	pub window: Duration,
	/// Requests allowed per window before callers are limited.
	pub max_requests: u32,
}
impl RateRule {
	/// Lead and contact form submissions.
	pub const LEAD_SUBMISSION: Self = Self::new(Duration::seconds(60), 10);
	/// On-demand PDF rendering.
	pub const PDF_GENERATION: Self = Self::new(Duration::seconds(60), 6);
	/// Emailing a rendered report to a recipient.
	pub const EMAIL_DELIVERY: Self = Self::new(Duration::seconds(60), 4);

	/// Creates a rule.
	pub const fn new(window: Duration, max_requests: u32) -> Self {
		Self { window, max_requests }
	}
}

/// Joins a route scope and a client identifier into a limiter key (`scope:client`).
pub fn rate_key(scope: &str, client: &str) -> String {
	format!("{scope}:{client}")
}

/// Fixed-window limiter over a shared [`CounterStore`].
#[derive(Clone)]
pub struct RateLimiter {
	store: Arc<dyn CounterStore>,
	clock: Arc<dyn Clock>,
}
impl RateLimiter {
	/// Creates a limiter over `store`, reading time from the system clock.
	pub fn new(store: Arc<dyn CounterStore>) -> Self {
		Self { store, clock: Arc::new(SystemClock) }
	}

	/// Creates a limiter backed by a fresh process-local [`MemoryCounterStore`].
	pub fn in_memory() -> Self {
		Self::new(Arc::new(MemoryCounterStore::default()))
	}

	/// Replaces the time source used for window bookkeeping.
	pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
		self.clock = clock;

		self
	}

	/// Counts a request for `key` and returns `true` when it exceeds `rule`.
	///
	/// The request is counted even when limited.
	pub fn check_and_increment(&self, key: &str, rule: &RateRule) -> bool {
		let _span = OpSpan::new(GuardOp::RateCheck, "check_and_increment").entered();
		let count = self.store.hit(key, self.clock.now(), rule.window);
		// A freshly opened window never limits, even for a zero budget.
		let limited = count > 1 && count > rule.max_requests;

		if limited {
			obs::trace_limited(key, count, rule.max_requests);
			obs::record_op_outcome(GuardOp::RateCheck, OpOutcome::Limited);
		} else {
			obs::record_op_outcome(GuardOp::RateCheck, OpOutcome::Success);
		}

		limited
	}
}
impl Debug for RateLimiter {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("RateLimiter").finish_non_exhaustive()
	}
}
