use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use sift::search_command::CommandSearch;
use sift::{Identifier, SelectOption, SelectOutcome, SelectUi, UiConfig};

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive select.
pub(crate) struct SelectWorkflow {
	select_ui: SelectUi,
}

impl SelectWorkflow {
	pub(crate) fn from_config(
		config: ResolvedConfig,
		options: Vec<SelectOption>,
		value: Option<Identifier>,
	) -> Self {
		Self {
			select_ui: SelectUiFactory::build(config, options, value),
		}
	}

	pub(crate) fn run(self) -> Result<SelectOutcome> {
		self.select_ui.run()
	}
}

/// Translates resolved configuration into a configured [`SelectUi`].
struct SelectUiFactory {
	select_ui: SelectUi,
}

impl SelectUiFactory {
	fn build(config: ResolvedConfig, options: Vec<SelectOption>, value: Option<Identifier>) -> SelectUi {
		let ResolvedConfig {
			placeholder,
			input_placeholder,
			debounce,
			dynamic_search,
			search_command,
			allow_freeform,
			disabled,
			title,
			theme,
			max_visible,
		} = config;

		let mut ui = UiConfig::default().with_max_visible(max_visible);
		if let Some(title) = title {
			ui = ui.with_title(title);
		}

		Self::new(options, value)
			.with_placeholders(placeholder, input_placeholder)
			.with_search(dynamic_search, search_command, debounce)
			.with_flags(disabled, allow_freeform)
			.with_ui_config(ui)
			.with_theme(theme)
			.finish()
	}

	fn new(options: Vec<SelectOption>, value: Option<Identifier>) -> Self {
		Self {
			select_ui: SelectUi::new(options).with_value(value),
		}
	}

	fn with_placeholders(mut self, trigger: Option<String>, input: Option<String>) -> Self {
		if let Some(text) = trigger {
			self.select_ui = self.select_ui.with_placeholder(text);
		}
		if let Some(text) = input {
			self.select_ui = self.select_ui.with_input_placeholder(text);
		}
		self
	}

	fn with_search(
		mut self,
		dynamic: bool,
		command: Option<String>,
		debounce: Duration,
	) -> Self {
		self.select_ui = self
			.select_ui
			.with_dynamic_search(dynamic)
			.with_debounce(debounce);
		if let Some(command) = command {
			tracing::debug!(%command, "using search command");
			self.select_ui = self
				.select_ui
				.with_search_provider(Arc::new(CommandSearch::new(command)));
		}
		self
	}

	fn with_flags(mut self, disabled: bool, allow_freeform: bool) -> Self {
		self.select_ui = self
			.select_ui
			.with_disabled(disabled)
			.with_freeform(allow_freeform);
		self
	}

	fn with_ui_config(mut self, config: UiConfig) -> Self {
		self.select_ui = self.select_ui.with_ui_config(config);
		self
	}

	fn with_theme(mut self, theme: Option<String>) -> Self {
		if let Some(theme) = theme {
			self.select_ui = self.select_ui.with_theme_name(&theme);
		}
		self
	}

	fn finish(self) -> SelectUi {
		self.select_ui
	}
}
