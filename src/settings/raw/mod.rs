use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};
use super::sources::env_var_for;

mod select;
mod ui;

use select::SelectSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	select: SelectSection,
	ui: UiSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.select.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			debounce_ms: detect_source(
				cli.debounce_ms.is_some(),
				self.select.debounce_ms.is_some(),
				"--debounce-ms",
				"select.debounce_ms",
			),
			max_visible: detect_source(
				cli.max_visible.is_some(),
				self.ui.max_visible.is_some(),
				"--max-visible",
				"ui.max_visible",
			),
		};

		let select = self.select.resolve();
		let ui = self.ui.resolve();

		let config = ResolvedConfig {
			placeholder: select.placeholder,
			input_placeholder: select.input_placeholder,
			debounce: select.debounce,
			dynamic_search: select.dynamic_search,
			search_command: select.search_command,
			allow_freeform: select.allow_freeform,
			disabled: select.disabled,
			title: ui.title,
			theme: ui.theme,
			max_visible: ui.max_visible,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	let env_var = env_var_for(key);
	if env::var_os(&env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
