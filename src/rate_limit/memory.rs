//! Thread-safe in-memory [`CounterStore`] implementation.

// self
use crate::{
	_prelude::*,
	rate_limit::{CounterStore, WindowCounter},
};

type CounterMap = Arc<Mutex<HashMap<String, WindowCounter>>>;

/// Process-local counter store.
///
/// Keys are created on first sight and never evicted by the limiter itself; long-running
/// processes that see many distinct clients should call [`MemoryCounterStore::purge_elapsed`]
/// periodically. Each process keeps its own view, so limits are per instance.
#[derive(Clone, Debug, Default)]
pub struct MemoryCounterStore(CounterMap);
impl MemoryCounterStore {
	/// Number of tracked keys.
	pub fn len(&self) -> usize {
		self.0.lock().len()
	}

	/// Returns `true` when no key has been seen.
	pub fn is_empty(&self) -> bool {
		self.0.lock().is_empty()
	}

	/// Snapshot of the counter for `key`, if any.
	pub fn counter(&self, key: &str) -> Option<WindowCounter> {
		self.0.lock().get(key).copied()
	}

	/// Drops counters whose window has elapsed at `now`; returns how many were removed.
	pub fn purge_elapsed(&self, now: OffsetDateTime, window: Duration) -> usize {
		let mut guard = self.0.lock();
		let before = guard.len();

		guard.retain(|_, counter| !counter.has_elapsed(now, window));

		before - guard.len()
	}
}
impl CounterStore for MemoryCounterStore {
	fn hit(&self, key: &str, now: OffsetDateTime, window: Duration) -> u32 {
		let mut guard = self.0.lock();

		match guard.get_mut(key) {
			Some(counter) => counter.record(now, window),
			None => {
				guard.insert(key.to_owned(), WindowCounter::open(now));

				1
			},
		}
	}
}
