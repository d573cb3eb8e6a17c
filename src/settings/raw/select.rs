use std::time::Duration;

use serde::Deserialize;
use sift::DEFAULT_DEBOUNCE;

use crate::cli::CliArgs;

/// `[select]` values as they are read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SelectSection {
	pub(super) placeholder: Option<String>,
	pub(super) input_placeholder: Option<String>,
	pub(super) debounce_ms: Option<u64>,
	pub(super) dynamic_search: Option<bool>,
	pub(super) search_command: Option<String>,
	pub(super) allow_freeform: Option<bool>,
	pub(super) disabled: Option<bool>,
}

pub(super) struct SelectResolution {
	pub(super) placeholder: Option<String>,
	pub(super) input_placeholder: Option<String>,
	pub(super) debounce: Duration,
	pub(super) dynamic_search: bool,
	pub(super) search_command: Option<String>,
	pub(super) allow_freeform: bool,
	pub(super) disabled: bool,
}

impl SelectSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(text) = cli.placeholder.clone() {
			self.placeholder = Some(text);
		}
		if let Some(text) = cli.input_placeholder.clone() {
			self.input_placeholder = Some(text);
		}
		if let Some(ms) = cli.debounce_ms {
			self.debounce_ms = Some(ms);
		}
		if let Some(enabled) = cli.dynamic_search {
			self.dynamic_search = Some(enabled);
		}
		if let Some(command) = cli.search_command.clone() {
			self.search_command = Some(command);
		}
		if cli.allow_freeform {
			self.allow_freeform = Some(true);
		}
		if cli.disabled {
			self.disabled = Some(true);
		}
	}

	/// A search command turns dynamic search on unless it was set explicitly.
	pub(super) fn resolve(self) -> SelectResolution {
		let search_command = self
			.search_command
			.map(|command| command.trim().to_string())
			.filter(|command| !command.is_empty());
		let dynamic_search = self.dynamic_search.unwrap_or(search_command.is_some());
		let debounce = self
			.debounce_ms
			.map(Duration::from_millis)
			.unwrap_or(DEFAULT_DEBOUNCE);

		SelectResolution {
			placeholder: self.placeholder,
			input_placeholder: self.input_placeholder,
			debounce,
			dynamic_search,
			search_command,
			allow_freeform: self.allow_freeform.unwrap_or(false),
			disabled: self.disabled.unwrap_or(false),
		}
	}
}
