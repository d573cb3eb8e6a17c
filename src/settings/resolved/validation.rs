use std::time::Duration;

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) const MAX_DEBOUNCE: Duration = Duration::from_secs(10);

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.debounce > MAX_DEBOUNCE {
		return Err(ConfigError::invalid(
			"select.debounce_ms",
			config.debounce.as_millis().to_string(),
			sources.source_for_debounce(),
			format!("must be at most {}", MAX_DEBOUNCE.as_millis()),
		));
	}

	if config.max_visible == 0 {
		return Err(ConfigError::invalid(
			"ui.max_visible",
			config.max_visible.to_string(),
			sources.source_for_max_visible(),
			"must be at least 1",
		));
	}

	Ok(())
}
