use std::sync::Arc;
use std::time::Duration;

use super::Select;
use super::emitter::{ChangeCallback, Emitter, QueryCallback};
use crate::debounce::{DEFAULT_DEBOUNCE, Debouncer};
use crate::option::{OptionValue, SelectOption};
use crate::source::SearchProvider;

pub const DEFAULT_PLACEHOLDER: &str = "Select an option";
pub const DEFAULT_INPUT_PLACEHOLDER: &str = "Search...";

/// Fluent configuration for a [`Select`].
pub struct SelectBuilder<V: OptionValue> {
	options: Vec<SelectOption<V>>,
	value: Option<V>,
	disabled: bool,
	loading: bool,
	placeholder: String,
	input_placeholder: String,
	dynamic_enabled: bool,
	provider: Option<Arc<dyn SearchProvider<V>>>,
	debounce: Duration,
	on_change: Option<ChangeCallback<V>>,
	on_query_change: Option<QueryCallback>,
}

impl<V: OptionValue> Default for SelectBuilder<V> {
	fn default() -> Self {
		Self {
			options: Vec::new(),
			value: None,
			disabled: false,
			loading: false,
			placeholder: DEFAULT_PLACEHOLDER.to_string(),
			input_placeholder: DEFAULT_INPUT_PLACEHOLDER.to_string(),
			dynamic_enabled: false,
			provider: None,
			debounce: DEFAULT_DEBOUNCE,
			on_change: None,
			on_query_change: None,
		}
	}
}

impl<V: OptionValue> SelectBuilder<V> {
	pub fn options(mut self, options: Vec<SelectOption<V>>) -> Self {
		self.options = options;
		self
	}

	pub fn value(mut self, value: Option<V>) -> Self {
		self.value = value;
		self
	}

	pub fn disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}

	/// Externally driven loading flag, e.g. while the option list itself is
	/// being fetched.
	pub fn loading(mut self, loading: bool) -> Self {
		self.loading = loading;
		self
	}

	pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = placeholder.into();
		self
	}

	pub fn input_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.input_placeholder = placeholder.into();
		self
	}

	/// Back dynamic search with `provider` and enable it.
	pub fn dynamic_search(mut self, provider: impl SearchProvider<V> + 'static) -> Self {
		self.provider = Some(Arc::new(provider));
		self.dynamic_enabled = true;
		self
	}

	/// Same as [`dynamic_search`](Self::dynamic_search) for an already shared provider.
	pub fn shared_dynamic_search(mut self, provider: Arc<dyn SearchProvider<V>>) -> Self {
		self.provider = Some(provider);
		self.dynamic_enabled = true;
		self
	}

	/// Toggle dynamic search without touching the provider. Enabled without a
	/// provider, the select behaves as a static filterable select.
	pub fn enable_dynamic_search(mut self, enabled: bool) -> Self {
		self.dynamic_enabled = enabled;
		self
	}

	pub fn debounce(mut self, window: Duration) -> Self {
		self.debounce = window;
		self
	}

	pub fn on_change(mut self, callback: impl FnMut(V) + 'static) -> Self {
		self.on_change = Some(Box::new(callback));
		self
	}

	pub fn on_query_change(mut self, callback: impl FnMut(&str) + 'static) -> Self {
		self.on_query_change = Some(Box::new(callback));
		self
	}

	pub fn build(self) -> Select<V> {
		Select {
			options: self.options,
			value: self.value,
			disabled: self.disabled,
			external_loading: self.loading,
			placeholder: self.placeholder,
			input_placeholder: self.input_placeholder,
			dynamic_enabled: self.dynamic_enabled,
			provider: self.provider,
			search: None,
			debounce: Debouncer::new(self.debounce),
			query: String::new(),
			dynamic_results: Vec::new(),
			open: false,
			highlighted: 0,
			last_selected: None,
			emitter: Emitter::new(self.on_change, self.on_query_change),
		}
	}
}
