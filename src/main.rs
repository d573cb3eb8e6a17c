mod cli;
mod settings;
mod workflow;

use anyhow::{Context, Result};
use cli::{CliArgs, OutputFormat, parse_cli, print_json, print_plain};
use settings::ResolvedConfig;
use sift::{logging, options_input};
use workflow::SelectWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in sift::ui::theme::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let log_path = logging::initialize(&cli.log)?;
	tracing::info!(log = %log_path.display(), "sift starting");

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	run_select(&cli, resolved)
}

/// Load options, run the select and print output in the chosen format.
fn run_select(cli: &CliArgs, settings: ResolvedConfig) -> Result<()> {
	let options =
		options_input::load_options(cli.options.as_deref()).context("failed to load options")?;
	let workflow = SelectWorkflow::from_config(settings, options, cli.value.clone());
	let outcome = workflow.run()?;

	match cli.output {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
