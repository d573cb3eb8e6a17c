use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy)]
pub struct Theme {
	pub border: Style,
	pub prompt: Style,
	pub muted: Style,
	pub row_highlight: Style,
	pub selected: Style,
}

impl Theme {
	#[must_use]
	pub fn border_style(&self) -> Style {
		self.border
	}

	#[must_use]
	pub fn prompt_style(&self) -> Style {
		self.prompt
	}

	#[must_use]
	pub fn muted_style(&self) -> Style {
		self.muted
	}

	#[must_use]
	pub fn row_highlight_style(&self) -> Style {
		self.row_highlight
	}

	#[must_use]
	pub fn selected_style(&self) -> Style {
		self.selected
	}

	/// Style for the trigger and its border while the select is disabled.
	#[must_use]
	pub fn disabled_style(&self) -> Style {
		self.muted.add_modifier(Modifier::DIM)
	}

	#[must_use]
	pub fn open_border_style(&self) -> Style {
		Style::new().fg(self.prompt.fg.unwrap_or(Color::Reset))
	}
}

/// Definition for a built-in theme bundled with the application.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	pub name: &'static str,
	pub theme: Theme,
	pub aliases: &'static [&'static str],
}

impl ThemeDefinition {
	pub const fn new(name: &'static str, theme: Theme) -> Self {
		Self {
			name,
			theme,
			aliases: &[],
		}
	}

	pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
		self.aliases = aliases;
		self
	}

	pub(super) fn answers_to(&self, normalized: &str) -> bool {
		self.name == normalized || self.aliases.iter().any(|alias| *alias == normalized)
	}
}
