use anyhow::{Result, anyhow};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli)
}

#[cfg(test)]
mod tests {
	use std::io::Write;
	use std::time::Duration;

	use clap::Parser;

	use super::*;

	fn config_file(contents: &str) -> tempfile::NamedTempFile {
		let mut file = tempfile::Builder::new()
			.suffix(".toml")
			.tempfile()
			.expect("temp file");
		file.write_all(contents.as_bytes()).expect("write config");
		file
	}

	#[test]
	fn explicit_config_file_is_merged() {
		let file = config_file(
			"[select]\ndebounce_ms = 150\nplaceholder = \"Pick a lot\"\n\n[ui]\nmax_visible = 4\n",
		);
		let path = file.path().to_str().expect("utf-8 path");
		let cli = CliArgs::parse_from(["sift", "--no-config", "--config", path]);

		let resolved = load(&cli).expect("load");
		assert_eq!(resolved.debounce, Duration::from_millis(150));
		assert_eq!(resolved.placeholder.as_deref(), Some("Pick a lot"));
		assert_eq!(resolved.max_visible, 4);
	}

	#[test]
	fn cli_flags_override_config_files() {
		let file = config_file("[select]\ndebounce_ms = 150\n");
		let path = file.path().to_str().expect("utf-8 path");
		let cli = CliArgs::parse_from([
			"sift",
			"--no-config",
			"--config",
			path,
			"--debounce-ms",
			"50",
		]);

		let resolved = load(&cli).expect("load");
		assert_eq!(resolved.debounce, Duration::from_millis(50));
	}

	#[test]
	fn invalid_values_name_their_origin() {
		let file = config_file("[ui]\nmax_visible = 0\n");
		let path = file.path().to_str().expect("utf-8 path");
		let cli = CliArgs::parse_from(["sift", "--no-config", "--config", path]);

		let message = load(&cli).unwrap_err().to_string();
		assert!(message.contains("ui.max_visible"));
		assert!(message.contains("configuration key"));
	}

	#[test]
	fn missing_explicit_config_file_is_an_error() {
		let dir = tempfile::tempdir().expect("temp dir");
		let path = dir.path().join("missing.toml");
		let path = path.to_str().expect("utf-8 path");
		let cli = CliArgs::parse_from(["sift", "--no-config", "--config", path]);
		assert!(load(&cli).is_err());
	}
}
