use std::time::Duration;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
	pub placeholder: Option<String>,
	pub input_placeholder: Option<String>,
	pub debounce: Duration,
	pub dynamic_search: bool,
	pub search_command: Option<String>,
	pub allow_freeform: bool,
	pub disabled: bool,
	pub title: Option<String>,
	pub theme: Option<String>,
	pub max_visible: usize,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		print!("{}", summary::render_summary(self));
	}
}

#[cfg(test)]
impl Default for ResolvedConfig {
	fn default() -> Self {
		Self {
			placeholder: None,
			input_placeholder: None,
			debounce: sift::DEFAULT_DEBOUNCE,
			dynamic_search: false,
			search_command: None,
			allow_freeform: false,
			disabled: false,
			title: None,
			theme: None,
			max_visible: sift::ui::DEFAULT_MAX_VISIBLE,
		}
	}
}
