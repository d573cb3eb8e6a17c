use crate::ui::theme::{Theme, ThemeDefinition};
use ratatui::style::{Color, Modifier, Style};

pub const NAME: &str = "solarized";

pub const SOLARIZED: Theme = Theme {
	border: Style::new().fg(Color::Rgb(7, 54, 66)),
	prompt: Style::new().fg(Color::Rgb(38, 139, 210)),
	muted: Style::new().fg(Color::Rgb(88, 110, 117)),
	row_highlight: Style::new()
		.bg(Color::Rgb(0, 43, 54))
		.fg(Color::Rgb(181, 137, 0)),
	selected: Style::new()
		.fg(Color::Rgb(253, 246, 227))
		.add_modifier(Modifier::BOLD),
};

pub const DEFINITION: ThemeDefinition = ThemeDefinition::new(NAME, SOLARIZED);
