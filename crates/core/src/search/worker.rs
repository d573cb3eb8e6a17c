use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use super::commands::{SearchCommand, SearchResult};
use crate::option::OptionValue;
use crate::source::SearchProvider;

/// Launches the background search worker thread and returns communication channels.
pub fn spawn<V: OptionValue>(
	provider: Arc<dyn SearchProvider<V>>,
) -> (
	Sender<SearchCommand>,
	Receiver<SearchResult<V>>,
	Arc<AtomicU64>,
) {
	let (command_tx, command_rx) = mpsc::channel();
	let (result_tx, result_rx) = mpsc::channel();
	let latest_query_id = Arc::new(AtomicU64::new(0));
	let thread_latest = Arc::clone(&latest_query_id);

	thread::spawn(move || worker_loop(provider.as_ref(), command_rx, result_tx, thread_latest));

	(command_tx, result_rx, latest_query_id)
}

fn worker_loop<V: OptionValue>(
	provider: &dyn SearchProvider<V>,
	command_rx: Receiver<SearchCommand>,
	result_tx: Sender<SearchResult<V>>,
	latest_query_id: Arc<AtomicU64>,
) {
	while let Ok(command) = command_rx.recv() {
		if !handle_command(provider, &result_tx, &latest_query_id, command) {
			break;
		}
	}
}

fn handle_command<V: OptionValue>(
	provider: &dyn SearchProvider<V>,
	result_tx: &Sender<SearchResult<V>>,
	latest_query_id: &AtomicU64,
	command: SearchCommand,
) -> bool {
	match command {
		SearchCommand::Query { id, query } => {
			if latest_query_id.load(Ordering::Acquire) != id {
				tracing::debug!(id, %query, "skipping superseded search");
				return true;
			}
			let result = run_search(provider, id, query);
			result_tx.send(result).is_ok()
		}
		SearchCommand::Shutdown => false,
	}
}

fn run_search<V: OptionValue>(
	provider: &dyn SearchProvider<V>,
	id: u64,
	query: String,
) -> SearchResult<V> {
	let outcome = panic::catch_unwind(AssertUnwindSafe(|| provider.search(&query)));
	let (options, failed) = match outcome {
		Ok(Ok(options)) => (options, false),
		Ok(Err(err)) => {
			tracing::warn!(%query, error = %err, "dynamic search failed");
			(Vec::new(), true)
		}
		Err(_) => {
			tracing::warn!(%query, "dynamic search provider panicked");
			(Vec::new(), true)
		}
	};
	SearchResult {
		id,
		query,
		options,
		failed,
	}
}
