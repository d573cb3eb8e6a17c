use crate::option::SelectOption;

/// Commands understood by the background search worker.
#[derive(Debug)]
pub enum SearchCommand {
	/// Run the provider for `query`.
	Query {
		/// Identifier that allows the UI to correlate responses with the originating query.
		id: u64,
		/// Trimmed, non-empty query text.
		query: String,
	},
	/// Stop the background worker thread.
	Shutdown,
}

/// Response to a [`SearchCommand::Query`].
#[derive(Debug)]
pub struct SearchResult<V> {
	pub id: u64,
	pub query: String,
	pub options: Vec<SelectOption<V>>,
	/// The provider failed; `options` is empty.
	pub failed: bool,
}
