//! Dynamic search backed by an external shell command.
//!
//! The command runs through `sh -c` once per settled query. The query is passed
//! as `$1` and in `SIFT_QUERY`; stdout must be a JSON array of options.

use std::io;
use std::process::{Command, ExitStatus, Stdio};

use anyhow::Result;
use sift_core::{Identifier, SearchProvider, SelectOption};
use thiserror::Error;

/// Environment variable carrying the query to the search command.
pub const QUERY_ENV: &str = "SIFT_QUERY";

const ARG0: &str = "sift-search";

#[derive(Debug, Error)]
pub enum CommandSearchError {
	#[error("failed to run search command `{command}`")]
	Spawn {
		command: String,
		#[source]
		source: io::Error,
	},
	#[error("search command exited with {status}: {stderr}")]
	Status { status: ExitStatus, stderr: String },
	#[error("search command printed invalid options")]
	Decode(#[from] serde_json::Error),
}

/// [`SearchProvider`] that shells out for every query.
#[derive(Debug, Clone)]
pub struct CommandSearch {
	command: String,
}

impl CommandSearch {
	pub fn new(command: impl Into<String>) -> Self {
		Self {
			command: command.into(),
		}
	}

	pub fn command(&self) -> &str {
		&self.command
	}

	fn run(&self, query: &str) -> Result<Vec<SelectOption>, CommandSearchError> {
		let output = Command::new("sh")
			.arg("-c")
			.arg(&self.command)
			.arg(ARG0)
			.arg(query)
			.env(QUERY_ENV, query)
			.stdin(Stdio::null())
			.stdout(Stdio::piped())
			.stderr(Stdio::piped())
			.output()
			.map_err(|source| CommandSearchError::Spawn {
				command: self.command.clone(),
				source,
			})?;

		if !output.status.success() {
			return Err(CommandSearchError::Status {
				status: output.status,
				stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
			});
		}

		let options: Vec<SelectOption> = serde_json::from_slice(&output.stdout)?;
		tracing::debug!(query, count = options.len(), "search command returned");
		Ok(options)
	}
}

impl SearchProvider<Identifier> for CommandSearch {
	fn search(&self, query: &str) -> Result<Vec<SelectOption>> {
		Ok(self.run(query)?)
	}
}
