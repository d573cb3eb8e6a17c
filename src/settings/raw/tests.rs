use std::time::Duration;

use clap::Parser;

use super::RawConfig;
use crate::cli::CliArgs;

#[test]
fn cli_overrides_take_precedence() {
	let cli = CliArgs::parse_from([
		"sift",
		"--placeholder",
		"Pick",
		"--input-placeholder",
		"Find",
		"--debounce-ms",
		"120",
		"--search-command",
		"lookup \"$1\"",
		"--allow-freeform",
		"--title",
		"Lots",
		"--theme",
		"solarized",
		"--max-visible",
		"5",
	]);

	let mut config = RawConfig::default();
	config.select.debounce_ms = Some(900);
	config.ui.title = Some("from file".into());
	config.apply_cli_overrides(&cli);

	assert_eq!(config.select.placeholder.as_deref(), Some("Pick"));
	assert_eq!(config.select.input_placeholder.as_deref(), Some("Find"));
	assert_eq!(config.select.debounce_ms, Some(120));
	assert_eq!(config.select.allow_freeform, Some(true));
	assert_eq!(config.ui.title.as_deref(), Some("Lots"));
	assert_eq!(config.ui.theme.as_deref(), Some("solarized"));
	assert_eq!(config.ui.max_visible, Some(5));
}

#[test]
fn unset_flags_keep_file_values() {
	let cli = CliArgs::parse_from(["sift"]);
	let mut config = RawConfig::default();
	config.select.disabled = Some(true);
	config.select.allow_freeform = Some(true);
	config.apply_cli_overrides(&cli);

	assert_eq!(config.select.disabled, Some(true));
	assert_eq!(config.select.allow_freeform, Some(true));
}

#[test]
fn defaults_resolve_to_static_select() {
	let cli = CliArgs::parse_from(["sift"]);
	let resolved = RawConfig::default().resolve(&cli).expect("resolve");

	assert_eq!(resolved.debounce, Duration::from_millis(300));
	assert!(!resolved.dynamic_search);
	assert_eq!(resolved.search_command, None);
	assert_eq!(resolved.max_visible, 8);
}

#[test]
fn search_command_enables_dynamic_search() {
	let cli = CliArgs::parse_from(["sift", "--search-command", "lookup"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);
	let resolved = config.resolve(&cli).expect("resolve");
	assert!(resolved.dynamic_search);

	let cli = CliArgs::parse_from(["sift", "--search-command", "lookup", "--dynamic", "false"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);
	let resolved = config.resolve(&cli).expect("resolve");
	assert!(!resolved.dynamic_search);
	assert_eq!(resolved.search_command.as_deref(), Some("lookup"));
}

#[test]
fn oversized_debounce_from_cli_is_rejected() {
	let cli = CliArgs::parse_from(["sift", "--debounce-ms", "60000"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);

	let message = config.resolve(&cli).unwrap_err().to_string();
	assert!(message.contains("select.debounce_ms"));
	assert!(message.contains("CLI flag `--debounce-ms`"));
}
