use std::time::{Duration, Instant};

/// Settling window used when none is configured.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Single-timer debounce: holds at most one pending query and releases it
/// once it has stayed unchanged for the settling window.
#[derive(Debug, Clone)]
pub struct Debouncer {
	window: Duration,
	pending: Option<Pending>,
}

#[derive(Debug, Clone)]
struct Pending {
	query: String,
	deadline: Instant,
}

impl Default for Debouncer {
	fn default() -> Self {
		Self::new(DEFAULT_DEBOUNCE)
	}
}

impl Debouncer {
	pub fn new(window: Duration) -> Self {
		Self {
			window,
			pending: None,
		}
	}

	pub fn window(&self) -> Duration {
		self.window
	}

	/// Replace any pending trigger with `query`, due one window after `now`.
	pub fn schedule(&mut self, query: impl Into<String>, now: Instant) {
		self.pending = Some(Pending {
			query: query.into(),
			deadline: now + self.window,
		});
	}

	/// Release the pending query if its deadline has passed.
	pub fn poll(&mut self, now: Instant) -> Option<String> {
		match &self.pending {
			Some(pending) if now >= pending.deadline => {
				self.pending.take().map(|pending| pending.query)
			}
			_ => None,
		}
	}

	pub fn cancel(&mut self) {
		self.pending = None;
	}

	pub fn is_pending(&self) -> bool {
		self.pending.is_some()
	}

	/// Deadline of the pending trigger, if any.
	pub fn deadline(&self) -> Option<Instant> {
		self.pending.as_ref().map(|pending| pending.deadline)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn releases_only_after_window() {
		let start = Instant::now();
		let mut debouncer = Debouncer::default();
		debouncer.schedule("cat", start);

		assert_eq!(debouncer.poll(start + Duration::from_millis(299)), None);
		assert_eq!(
			debouncer.poll(start + Duration::from_millis(300)),
			Some("cat".to_string())
		);
		assert!(!debouncer.is_pending());
		assert_eq!(debouncer.poll(start + Duration::from_secs(5)), None);
	}

	#[test]
	fn new_keystroke_restarts_the_timer() {
		let start = Instant::now();
		let mut debouncer = Debouncer::new(Duration::from_millis(100));
		debouncer.schedule("c", start);
		debouncer.schedule("ca", start + Duration::from_millis(80));

		assert_eq!(debouncer.poll(start + Duration::from_millis(120)), None);
		assert_eq!(
			debouncer.poll(start + Duration::from_millis(180)),
			Some("ca".to_string())
		);
	}

	#[test]
	fn cancel_drops_pending_trigger() {
		let start = Instant::now();
		let mut debouncer = Debouncer::default();
		debouncer.schedule("cat", start);
		debouncer.cancel();
		assert_eq!(debouncer.poll(start + Duration::from_secs(1)), None);
	}
}
