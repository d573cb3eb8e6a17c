use std::fmt;

/// Where an offending setting came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(String),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) debounce_ms: Option<SettingSource>,
	pub(crate) max_visible: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_debounce(&self) -> SettingSource {
		self.debounce_ms
			.clone()
			.unwrap_or(SettingSource::ConfigKey("select.debounce_ms"))
	}

	pub(crate) fn source_for_max_visible(&self) -> SettingSource {
		self.max_visible
			.clone()
			.unwrap_or(SettingSource::ConfigKey("ui.max_visible"))
	}
}
