use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, ColorChoice, Parser, ValueEnum};
use sift::Identifier;
use sift::logging::LogArgs;

use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `sift` binary.
#[derive(Parser, Debug)]
#[command(
	name = "sift",
	version,
	long_version = long_version(),
	about = "Searchable select for the terminal",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "SIFT_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'f',
		long,
		value_name = "FILE",
		help = "Read options from FILE, or `-` for stdin (default: piped stdin)"
	)]
	pub(crate) options: Option<PathBuf>,
	#[arg(
		short = 'v',
		long,
		value_name = "ID",
		value_parser = parse_identifier,
		help = "Initially selected option value (default: none)"
	)]
	pub(crate) value: Option<Identifier>,
	#[arg(
		long,
		value_name = "TEXT",
		help = "Trigger text shown when nothing is selected (default: \"Select an option\")"
	)]
	pub(crate) placeholder: Option<String>,
	#[arg(
		long = "input-placeholder",
		value_name = "TEXT",
		help = "Placeholder of the search input (default: \"Search...\")"
	)]
	pub(crate) input_placeholder: Option<String>,
	#[arg(
		long = "debounce-ms",
		value_name = "MS",
		help = "Quiet period before a dynamic search fires (default: 300)"
	)]
	pub(crate) debounce_ms: Option<u64>,
	#[arg(
		long = "dynamic",
		value_parser = BoolishValueParser::new(),
		num_args = 0..=1,
		default_missing_value = "true",
		help = "Search through the search command instead of filtering (default: disabled)"
	)]
	pub(crate) dynamic_search: Option<bool>,
	#[arg(
		short = 's',
		long = "search-command",
		value_name = "CMD",
		help = "Shell command producing options for a query; enables dynamic search (default: none)"
	)]
	pub(crate) search_command: Option<String>,
	#[arg(
		long = "allow-freeform",
		help = "Accept the typed query as a value when nothing was picked (default: disabled)"
	)]
	pub(crate) allow_freeform: bool,
	#[arg(long, help = "Render the select disabled (default: disabled)")]
	pub(crate) disabled: bool,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Title drawn on the trigger border (default: none)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: library theme)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "max-visible",
		value_name = "ROWS",
		help = "Maximum option rows shown at once (default: 8)"
	)]
	pub(crate) max_visible: Option<usize>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Plain, help = "Choose how to print the result")]
	pub(crate) output: OutputFormat,
	#[command(flatten)]
	pub(crate) log: LogArgs,
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}

/// Integers become numeric identifiers, anything else is kept as text.
fn parse_identifier(raw: &str) -> Result<Identifier, String> {
	if raw.is_empty() {
		return Err("value must not be empty".to_string());
	}
	Ok(match raw.parse::<i64>() {
		Ok(number) => Identifier::Number(number),
		Err(_) => Identifier::Text(raw.to_string()),
	})
}
