use crate::ui::theme::{Theme, ThemeDefinition};
use ratatui::style::{Color, Modifier, Style};

pub const NAME: &str = "slate";

pub const SLATE: Theme = Theme {
	border: Style::new().fg(Color::Rgb(71, 85, 105)),
	prompt: Style::new().fg(Color::LightCyan),
	muted: Style::new().fg(Color::DarkGray),
	row_highlight: Style::new()
		.bg(Color::Rgb(30, 41, 59))
		.fg(Color::Rgb(250, 204, 21)),
	selected: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.add_modifier(Modifier::BOLD),
};

pub const DEFINITION: ThemeDefinition = ThemeDefinition::new(NAME, SLATE).with_aliases(&["default", "dark"]);
