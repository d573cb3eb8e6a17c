use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use super::commands::{SearchCommand, SearchResult};
use super::worker;
use crate::option::OptionValue;
use crate::source::SearchProvider;

/// UI-side handle to the search worker.
///
/// Every issued query gets a fresh id; only the result carrying the latest id
/// is ever handed back to the caller.
pub struct SearchRuntime<V> {
	tx: Sender<SearchCommand>,
	rx: Receiver<SearchResult<V>>,
	latest_query_id: Arc<AtomicU64>,
	next_query_id: u64,
	current_query_id: Option<u64>,
	in_flight: bool,
}

impl<V: OptionValue> SearchRuntime<V> {
	pub fn new(provider: Arc<dyn SearchProvider<V>>) -> Self {
		let (tx, rx, latest_query_id) = worker::spawn(provider);
		Self {
			tx,
			rx,
			latest_query_id,
			next_query_id: 0,
			current_query_id: None,
			in_flight: false,
		}
	}

	/// Send `query` to the worker and make it the only authoritative search.
	pub fn issue_search(&mut self, query: String) -> u64 {
		let id = self.bump_id();
		self.current_query_id = Some(id);
		self.in_flight = true;
		tracing::debug!(id, %query, "issuing dynamic search");
		if self.tx.send(SearchCommand::Query { id, query }).is_err() {
			tracing::warn!(id, "search worker is gone");
			self.in_flight = false;
		}
		id
	}

	/// Forget the current query so that its late result is dropped.
	pub fn invalidate(&mut self) {
		self.bump_id();
		self.current_query_id = None;
		self.in_flight = false;
	}

	pub fn matches_latest(&self, result_id: u64) -> bool {
		Some(result_id) == self.current_query_id
	}

	pub fn is_in_flight(&self) -> bool {
		self.in_flight
	}

	/// Drain the result channel and return the newest authoritative result,
	/// if one arrived.
	pub fn pump(&mut self) -> Option<SearchResult<V>> {
		let mut latest = None;
		loop {
			match self.rx.try_recv() {
				Ok(result) => {
					if self.matches_latest(result.id) {
						self.in_flight = false;
						latest = Some(result);
					} else {
						tracing::debug!(id = result.id, "dropping stale search result");
					}
				}
				Err(TryRecvError::Empty) => break,
				Err(TryRecvError::Disconnected) => {
					self.in_flight = false;
					break;
				}
			}
		}
		latest
	}

	fn bump_id(&mut self) -> u64 {
		self.next_query_id = self.next_query_id.saturating_add(1);
		let id = self.next_query_id;
		self.latest_query_id.store(id, AtomicOrdering::Release);
		id
	}
}

impl<V> Drop for SearchRuntime<V> {
	fn drop(&mut self) {
		let _ = self.tx.send(SearchCommand::Shutdown);
	}
}

#[cfg(test)]
mod tests {
	use std::sync::mpsc;
	use std::thread;
	use std::time::{Duration, Instant};

	use anyhow::Result;

	use super::*;
	use crate::option::SelectOption;

	fn pump_until_idle(runtime: &mut SearchRuntime<u64>) -> Option<SearchResult<u64>> {
		let deadline = Instant::now() + Duration::from_secs(2);
		while Instant::now() < deadline {
			if let Some(result) = runtime.pump() {
				return Some(result);
			}
			if !runtime.is_in_flight() {
				return None;
			}
			thread::sleep(Duration::from_millis(5));
		}
		None
	}

	#[test]
	fn later_search_wins_even_when_earlier_resolves_last() {
		// The first query blocks until the test releases it, after the second
		// query has already been answered.
		let (release_tx, release_rx) = mpsc::channel::<()>();
		let release_rx = std::sync::Mutex::new(release_rx);
		let provider = move |query: &str| -> Result<Vec<SelectOption<u64>>> {
			if query == "slow" {
				let _ = release_rx.lock().unwrap().recv_timeout(Duration::from_secs(2));
			}
			Ok(vec![SelectOption::new(1, query)])
		};
		let mut runtime = SearchRuntime::<u64>::new(Arc::new(provider));

		runtime.issue_search("slow".into());
		thread::sleep(Duration::from_millis(20));
		let fast = runtime.issue_search("fast".into());
		release_tx.send(()).unwrap();

		let result = pump_until_idle(&mut runtime).expect("result");
		assert_eq!(result.id, fast);
		assert_eq!(result.query, "fast");
		assert!(!runtime.is_in_flight());
	}

	#[test]
	fn invalidated_results_are_dropped() {
		let provider = |query: &str| -> Result<Vec<SelectOption<u64>>> {
			thread::sleep(Duration::from_millis(30));
			Ok(vec![SelectOption::new(1, query)])
		};
		let mut runtime = SearchRuntime::<u64>::new(Arc::new(provider));
		runtime.issue_search("late".into());
		runtime.invalidate();
		assert!(!runtime.is_in_flight());

		thread::sleep(Duration::from_millis(100));
		assert!(runtime.pump().is_none());
	}
}
