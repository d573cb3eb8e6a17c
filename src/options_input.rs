//! Loading the static option list from a file or standard input.
//!
//! Input is either a JSON array of options or plain text with one label per
//! line. Plain-text options take their 1-based line number as value.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use sift_core::{Identifier, SelectOption};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OptionsError {
	#[error("failed to read options from {path}")]
	Read {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("failed to read options from standard input")]
	Stdin(#[source] io::Error),
	#[error("options are not a valid JSON array")]
	Decode(#[from] serde_json::Error),
}

/// Load options from `path`, where `-` means standard input.
///
/// Without a path, standard input is read only when it is not a terminal;
/// otherwise the list is empty.
pub fn load_options(path: Option<&Path>) -> Result<Vec<SelectOption>, OptionsError> {
	let text = match path {
		Some(path) if path == Path::new("-") => read_stdin()?,
		Some(path) => fs::read_to_string(path).map_err(|source| OptionsError::Read {
			path: path.to_path_buf(),
			source,
		})?,
		None if !io::stdin().is_terminal() => read_stdin()?,
		None => return Ok(Vec::new()),
	};
	let options = parse_options(&text)?;
	tracing::debug!(count = options.len(), "loaded options");
	Ok(options)
}

fn read_stdin() -> Result<String, OptionsError> {
	let mut text = String::new();
	io::stdin()
		.lock()
		.read_to_string(&mut text)
		.map_err(OptionsError::Stdin)?;
	Ok(text)
}

/// Parse option text. Blank lines are skipped but still count toward line
/// numbers.
pub fn parse_options(text: &str) -> Result<Vec<SelectOption>, OptionsError> {
	if text.trim_start().starts_with('[') {
		return Ok(serde_json::from_str(text)?);
	}

	Ok(text
		.lines()
		.enumerate()
		.filter_map(|(index, line)| {
			let label = line.trim();
			(!label.is_empty()).then(|| {
				let number = i64::try_from(index + 1).unwrap_or(i64::MAX);
				SelectOption::new(Identifier::Number(number), label)
			})
		})
		.collect())
}
