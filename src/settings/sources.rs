use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, File};
use sift::app_dirs;

use crate::cli::CliArgs;

/// Prefix of configuration environment variables, e.g. `SIFT__SELECT__DEBOUNCE_MS`.
pub(super) const ENV_PREFIX: &str = "SIFT";
pub(super) const ENV_SEPARATOR: &str = "__";

/// Build a [`Config`] instance by combining default locations with CLI overrides.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix(ENV_PREFIX)
			.prefix_separator(ENV_SEPARATOR)
			.separator(ENV_SEPARATOR)
			.try_parsing(true),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// Name of the environment variable overriding `section.key`.
pub(super) fn env_var_for(key: &str) -> String {
	let mut name = String::from(ENV_PREFIX);
	for part in key.split('.') {
		name.push_str(ENV_SEPARATOR);
		name.push_str(&part.to_ascii_uppercase());
	}
	name
}

/// Discover the default configuration file locations that should be consulted.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".sift.toml"));
		files.push(current_dir.join("sift.toml"));
	}

	files
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_files_include_current_directory_variants() {
		let files = default_config_files();
		assert!(files.iter().any(|path| path.ends_with(".sift.toml")));
		assert!(files.iter().any(|path| path.ends_with("sift.toml")));
	}

	#[test]
	fn env_names_follow_section_and_key() {
		assert_eq!(env_var_for("select.debounce_ms"), "SIFT__SELECT__DEBOUNCE_MS");
	}
}
