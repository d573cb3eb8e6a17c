//! The searchable select state machine.
//!
//! [`Select`] owns the open/closed state, the typed query, the debounce timer,
//! the dynamic result cache and the keyboard highlight. It never owns the
//! selected value: a pick is reported through `on_change` and the owner feeds
//! the new value back with [`Select::set_value`].
//!
//! Time is passed in explicitly. Front ends call [`Select::tick`] with
//! `Instant::now()` on every frame; tests drive it with synthetic instants.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::debounce::Debouncer;
use crate::option::{OptionValue, SelectOption, same_value};
use crate::reconcile::{ReconcileInput, ResultView, reconcile};
use crate::search::SearchRuntime;
use crate::source::SearchProvider;

mod builder;
mod emitter;

pub use builder::{DEFAULT_INPUT_PLACEHOLDER, DEFAULT_PLACEHOLDER, SelectBuilder};
pub use emitter::{ChangeCallback, QueryCallback};

use emitter::Emitter;

/// Interaction state of one select instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectState {
	Closed,
	OpenIdle,
	OpenSearching,
}

/// Headless searchable select.
///
/// Dropping the select cancels any pending debounce trigger and shuts down
/// its search worker; results that resolve afterwards go nowhere.
pub struct Select<V: OptionValue> {
	options: Vec<SelectOption<V>>,
	value: Option<V>,
	disabled: bool,
	external_loading: bool,
	placeholder: String,
	input_placeholder: String,
	dynamic_enabled: bool,
	provider: Option<Arc<dyn SearchProvider<V>>>,
	search: Option<SearchRuntime<V>>,
	debounce: Debouncer,
	query: String,
	dynamic_results: Vec<SelectOption<V>>,
	open: bool,
	highlighted: usize,
	last_selected: Option<SelectOption<V>>,
	emitter: Emitter<V>,
}

impl<V: OptionValue> Select<V> {
	pub fn builder() -> SelectBuilder<V> {
		SelectBuilder::default()
	}

	/// A static select over `options` with default settings.
	pub fn new(options: Vec<SelectOption<V>>) -> Self {
		Self::builder().options(options).build()
	}

	pub fn state(&self) -> SelectState {
		match (self.open, self.is_searching()) {
			(false, _) => SelectState::Closed,
			(true, false) => SelectState::OpenIdle,
			(true, true) => SelectState::OpenSearching,
		}
	}

	pub fn is_open(&self) -> bool {
		self.open
	}

	pub fn is_disabled(&self) -> bool {
		self.disabled
	}

	pub fn query(&self) -> &str {
		&self.query
	}

	pub fn value(&self) -> Option<&V> {
		self.value.as_ref()
	}

	pub fn options(&self) -> &[SelectOption<V>] {
		&self.options
	}

	pub fn dynamic_results(&self) -> &[SelectOption<V>] {
		&self.dynamic_results
	}

	pub fn placeholder(&self) -> &str {
		&self.placeholder
	}

	pub fn input_placeholder(&self) -> &str {
		&self.input_placeholder
	}

	pub fn debounce_window(&self) -> Duration {
		self.debounce.window()
	}

	/// Dynamic search is enabled and something can actually answer it.
	pub fn is_dynamic(&self) -> bool {
		self.dynamic_enabled && self.provider.is_some()
	}

	pub fn is_searching(&self) -> bool {
		self.search.as_ref().is_some_and(SearchRuntime::is_in_flight)
	}

	pub fn is_loading(&self) -> bool {
		self.external_loading || self.is_searching()
	}

	pub fn set_options(&mut self, options: Vec<SelectOption<V>>) {
		self.options = options;
		self.highlighted = 0;
	}

	/// Feed back the controlled value.
	pub fn set_value(&mut self, value: Option<V>) {
		self.value = value;
	}

	/// Disabling only affects whether the trigger opens the dropdown.
	pub fn set_disabled(&mut self, disabled: bool) {
		self.disabled = disabled;
	}

	pub fn set_loading(&mut self, loading: bool) {
		self.external_loading = loading;
	}

	pub fn set_on_change(&mut self, callback: impl FnMut(V) + 'static) {
		self.emitter.set_on_change(Box::new(callback));
	}

	pub fn set_on_query_change(&mut self, callback: impl FnMut(&str) + 'static) {
		self.emitter.set_on_query_change(Box::new(callback));
	}

	/// Trigger click: open when closed, close when open. A disabled select
	/// ignores the click.
	pub fn toggle(&mut self, now: Instant) {
		if self.open {
			self.dismiss();
		} else {
			self.open(now);
		}
	}

	pub fn open(&mut self, now: Instant) {
		if self.disabled || self.open {
			return;
		}
		self.open = true;
		self.highlighted = 0;
		// A query kept from an earlier dismissal gets its results back.
		if self.dynamic_enabled && !self.query.trim().is_empty() {
			self.debounce.schedule(self.query.clone(), now);
		}
	}

	/// Close because the user interacted elsewhere. The typed query survives;
	/// dynamic results and any pending or running search do not.
	pub fn dismiss(&mut self) {
		if !self.open {
			return;
		}
		self.open = false;
		self.reset_search();
	}

	/// Keystroke handler: replace the query text. The text updates
	/// immediately; a dynamic search follows once it has settled.
	pub fn set_query(&mut self, query: impl Into<String>, now: Instant) {
		if !self.open {
			return;
		}
		let query = query.into();
		if query == self.query {
			return;
		}
		self.query = query;
		self.highlighted = 0;
		if self.dynamic_enabled {
			self.debounce.schedule(self.query.clone(), now);
		}
	}

	/// Advance timers and pick up finished searches.
	pub fn tick(&mut self, now: Instant) {
		self.pump_results();
		if let Some(query) = self.debounce.poll(now) {
			self.fire_search(&query);
		}
	}

	/// Block until no search is in flight or `timeout` elapses. Returns
	/// whether the select settled.
	pub fn wait_for_search(&mut self, timeout: Duration) -> bool {
		let deadline = Instant::now() + timeout;
		loop {
			self.pump_results();
			if !self.is_searching() {
				return true;
			}
			if Instant::now() >= deadline {
				return false;
			}
			thread::sleep(Duration::from_millis(5));
		}
	}

	/// The list to render right now.
	pub fn visible(&self) -> ResultView<'_, V> {
		reconcile(ReconcileInput {
			options: &self.options,
			dynamic_results: &self.dynamic_results,
			query: &self.query,
			dynamic: self.is_dynamic(),
			searching: self.is_searching(),
			external_loading: self.external_loading,
		})
	}

	/// Index of the highlighted row within [`visible`](Self::visible).
	pub fn highlighted(&self) -> Option<usize> {
		let len = self.visible().len();
		(len > 0).then(|| self.highlighted.min(len - 1))
	}

	pub fn highlighted_option(&self) -> Option<&SelectOption<V>> {
		let index = self.highlighted()?;
		self.visible().options.get(index).copied()
	}

	pub fn move_highlight(&mut self, delta: isize) {
		let len = self.visible().len();
		if len == 0 {
			self.highlighted = 0;
			return;
		}
		let current = self.highlighted.min(len - 1);
		self.highlighted = current.saturating_add_signed(delta).min(len - 1);
	}

	pub fn set_highlight(&mut self, index: usize) {
		self.highlighted = index;
	}

	/// Select the highlighted row. Returns false when nothing is visible.
	pub fn commit_highlighted(&mut self) -> bool {
		let Some(value) = self.highlighted_option().map(|option| option.value.clone()) else {
			return false;
		};
		self.select(value);
		true
	}

	/// Commit `value`: notify the owner once, then close and clear the query
	/// and search state.
	pub fn select(&mut self, value: V) {
		self.last_selected = self.find_option(&value).cloned();
		self.emitter.change(value);
		self.open = false;
		self.query.clear();
		self.reset_search();
	}

	/// Label for the controlled value, looked up in the static options and
	/// then in the most recent pick.
	pub fn selected_label(&self) -> Option<&str> {
		let value = self.value.as_ref()?;
		self.options
			.iter()
			.chain(self.last_selected.iter())
			.find(|option| same_value(&option.value, value))
			.map(|option| option.label.as_str())
	}

	fn find_option(&self, value: &V) -> Option<&SelectOption<V>> {
		self.dynamic_results
			.iter()
			.chain(self.options.iter())
			.find(|option| same_value(&option.value, value))
	}

	fn fire_search(&mut self, query: &str) {
		if !self.dynamic_enabled {
			return;
		}
		let trimmed = query.trim();
		if trimmed.is_empty() {
			self.dynamic_results.clear();
			if let Some(search) = self.search.as_mut() {
				search.invalidate();
			}
			return;
		}

		self.emitter.query(query);

		let Some(provider) = self.provider.as_ref() else {
			tracing::debug!(%query, "dynamic search enabled without a provider");
			return;
		};
		let search = self
			.search
			.get_or_insert_with(|| SearchRuntime::new(Arc::clone(provider)));
		search.issue_search(trimmed.to_string());
	}

	fn pump_results(&mut self) {
		let Some(result) = self.search.as_mut().and_then(SearchRuntime::pump) else {
			return;
		};
		if result.failed {
			tracing::debug!(query = %result.query, "falling back to static options");
		}
		self.dynamic_results = result.options;
		self.highlighted = 0;
	}

	fn reset_search(&mut self) {
		self.debounce.cancel();
		self.dynamic_results.clear();
		self.highlighted = 0;
		if let Some(search) = self.search.as_mut() {
			search.invalidate();
		}
	}
}

impl<V: OptionValue> Drop for Select<V> {
	fn drop(&mut self) {
		self.debounce.cancel();
		if let Some(search) = self.search.as_mut() {
			search.invalidate();
		}
	}
}

#[cfg(test)]
mod tests;
