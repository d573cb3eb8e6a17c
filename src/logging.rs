//! Tracing setup for the `sift` binary.
//!
//! The terminal belongs to the UI while a session runs, so events are written
//! to a log file instead of stderr.

use std::env;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use clap::Args;
use tracing_subscriber::EnvFilter;

use crate::app_dirs;

/// Environment variable holding a filter directive used when no flag is given.
pub const LOG_ENV: &str = "SIFT_LOG";

const DEFAULT_LEVEL: &str = "warn";
const LOG_FILE_NAME: &str = "sift.log";

/// Logging controls for the CLI.
#[derive(Debug, Clone, Default, Args)]
pub struct LogArgs {
	/// Set log level to trace (our crates only)
	#[arg(long, conflicts_with_all = ["debug", "log_level", "log_filter"])]
	pub trace: bool,

	/// Set log level to debug (our crates only)
	#[arg(long, conflicts_with_all = ["trace", "log_level", "log_filter"])]
	pub debug: bool,

	/// Set a single log level for our crates (error|warn|info|debug|trace)
	#[arg(long, value_name = "LEVEL")]
	pub log_level: Option<String>,

	/// Set an explicit tracing filter directive (overrides other flags),
	/// e.g. "sift_core=trace,sift=debug"
	#[arg(long, value_name = "DIRECTIVE")]
	pub log_filter: Option<String>,

	/// Write logs to this file (default: sift.log in the data directory)
	#[arg(long, value_name = "FILE")]
	pub log_file: Option<PathBuf>,
}

impl LogArgs {
	/// Level requested through flags, if any.
	fn flag_level(&self) -> Option<&str> {
		if self.trace {
			Some("trace")
		} else if self.debug {
			Some("debug")
		} else {
			self.log_level.as_deref()
		}
	}

	/// Filter directive from flags. `None` means no flag was given.
	pub fn filter_directive(&self) -> Option<String> {
		if let Some(filter) = &self.log_filter {
			return Some(filter.clone());
		}
		self.flag_level().map(level_directive)
	}

	fn env_filter(&self) -> Result<EnvFilter> {
		if let Some(directive) = self.filter_directive() {
			return EnvFilter::try_new(&directive)
				.with_context(|| format!("invalid log filter `{directive}`"));
		}
		match env::var(LOG_ENV) {
			Ok(directive) if !directive.trim().is_empty() => EnvFilter::try_new(&directive)
				.with_context(|| format!("invalid {LOG_ENV} value `{directive}`")),
			_ => Ok(EnvFilter::new(level_directive(DEFAULT_LEVEL))),
		}
	}

	fn log_path(&self) -> Result<PathBuf> {
		match &self.log_file {
			Some(path) => Ok(path.clone()),
			None => Ok(app_dirs::get_data_dir()?.join(LOG_FILE_NAME)),
		}
	}
}

/// List of crate targets that constitute "our" logs.
pub fn our_crates() -> &'static [&'static str] {
	&["sift", "sift_core"]
}

fn level_directive(level: &str) -> String {
	our_crates()
		.iter()
		.map(|target| format!("{target}={level}"))
		.collect::<Vec<_>>()
		.join(",")
}

/// Install the global subscriber. Returns the log file path.
pub fn initialize(args: &LogArgs) -> Result<PathBuf> {
	let filter = args.env_filter()?;
	let path = args.log_path()?;
	if let Some(parent) = path.parent()
		&& !parent.as_os_str().is_empty()
	{
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(&path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(Mutex::new(file))
		.with_ansi(false)
		.try_init()
		.map_err(|err| anyhow!("failed to install log subscriber: {err}"))?;

	Ok(path)
}
