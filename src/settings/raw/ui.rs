use serde::Deserialize;
use sift::ui::DEFAULT_MAX_VISIBLE;

use crate::cli::CliArgs;

/// `[ui]` values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) title: Option<String>,
	pub(super) theme: Option<String>,
	pub(super) max_visible: Option<usize>,
}

pub(super) struct UiResolution {
	pub(super) title: Option<String>,
	pub(super) theme: Option<String>,
	pub(super) max_visible: usize,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(title) = cli.title.clone() {
			self.title = Some(title);
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(rows) = cli.max_visible {
			self.max_visible = Some(rows);
		}
	}

	pub(super) fn resolve(self) -> UiResolution {
		UiResolution {
			title: self.title.filter(|title| !title.trim().is_empty()),
			theme: self.theme,
			max_visible: self.max_visible.unwrap_or(DEFAULT_MAX_VISIBLE),
		}
	}
}
