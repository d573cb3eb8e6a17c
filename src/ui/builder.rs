use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use sift_core::{DEFAULT_DEBOUNCE, Identifier, SearchProvider, Select, SelectOption};

use super::App;
use super::app::SelectOutcome;
use super::config::UiConfig;
use super::theme::{self, Theme};

/// A small builder for configuring the interactive select before running it.
pub struct SelectUi {
	options: Vec<SelectOption>,
	value: Option<Identifier>,
	placeholder: Option<String>,
	input_placeholder: Option<String>,
	disabled: bool,
	dynamic_search: bool,
	provider: Option<Arc<dyn SearchProvider<Identifier>>>,
	debounce: Duration,
	allow_freeform: bool,
	ui_config: UiConfig,
	theme: Option<Theme>,
}

impl SelectUi {
	/// Create a select over a static option list.
	pub fn new(options: Vec<SelectOption>) -> Self {
		Self {
			options,
			value: None,
			placeholder: None,
			input_placeholder: None,
			disabled: false,
			dynamic_search: false,
			provider: None,
			debounce: DEFAULT_DEBOUNCE,
			allow_freeform: false,
			ui_config: UiConfig::default(),
			theme: None,
		}
	}

	pub fn with_value(mut self, value: Option<Identifier>) -> Self {
		self.value = value;
		self
	}

	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = Some(placeholder.into());
		self
	}

	pub fn with_input_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.input_placeholder = Some(placeholder.into());
		self
	}

	pub fn with_disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}

	/// Enable dynamic search. Without a provider the select keeps filtering
	/// its static options.
	pub fn with_dynamic_search(mut self, enabled: bool) -> Self {
		self.dynamic_search = enabled;
		self
	}

	pub fn with_search_provider(mut self, provider: Arc<dyn SearchProvider<Identifier>>) -> Self {
		self.provider = Some(provider);
		self
	}

	pub fn with_debounce(mut self, window: Duration) -> Self {
		self.debounce = window;
		self
	}

	pub fn with_freeform(mut self, allow: bool) -> Self {
		self.allow_freeform = allow;
		self
	}

	pub fn with_ui_config(mut self, config: UiConfig) -> Self {
		self.ui_config = config;
		self
	}

	pub fn with_theme_name(mut self, name: &str) -> Self {
		match theme::by_name(name) {
			Some(theme) => self.theme = Some(theme),
			None => tracing::warn!(theme = name, "unknown theme, keeping the default"),
		}
		self
	}

	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	/// Assemble the [`App`] without running it.
	pub fn build<'a>(self) -> App<'a> {
		let mut builder = Select::builder()
			.options(self.options)
			.value(self.value)
			.disabled(self.disabled)
			.debounce(self.debounce);
		if let Some(placeholder) = self.placeholder {
			builder = builder.placeholder(placeholder);
		}
		if let Some(placeholder) = self.input_placeholder {
			builder = builder.input_placeholder(placeholder);
		}
		if let Some(provider) = self.provider {
			builder = builder.shared_dynamic_search(provider);
		}
		let select = builder.enable_dynamic_search(self.dynamic_search).build();

		App::new(select, self.ui_config, self.theme.unwrap_or_default()).with_freeform(self.allow_freeform)
	}

	/// Run the interactive select with the configured options.
	pub fn run(self) -> Result<SelectOutcome> {
		let mut app = self.build();
		app.run()
	}
}
