use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::TextArea;

/// Single-line text input backing the select's search field.
pub struct SearchInput<'a> {
	textarea: TextArea<'a>,
	placeholder: String,
	placeholder_style: Style,
}

impl<'a> SearchInput<'a> {
	pub fn new(placeholder: impl Into<String>) -> Self {
		let placeholder = placeholder.into();
		let placeholder_style = Style::default();
		Self {
			textarea: build_textarea("", &placeholder, placeholder_style),
			placeholder,
			placeholder_style,
		}
	}

	pub fn with_placeholder_style(mut self, style: Style) -> Self {
		self.placeholder_style = style;
		self.textarea.set_placeholder_style(style);
		self
	}

	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Feed a key press to the field. Returns true when the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		// The field is one line; newlines would split the query.
		if key.code == KeyCode::Enter
			|| (key.code == KeyCode::Char('m') && key.modifiers.contains(KeyModifiers::CONTROL))
		{
			return false;
		}
		let before = self.text().to_string();
		self.textarea.input(key);
		self.text() != before
	}

	/// Replace the text, leaving the cursor at the end.
	pub fn set_text(&mut self, text: &str) {
		if self.text() == text {
			return;
		}
		self.textarea = build_textarea(text, &self.placeholder, self.placeholder_style);
	}

	pub fn render(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

fn build_textarea<'a>(text: &str, placeholder: &str, placeholder_style: Style) -> TextArea<'a> {
	let mut textarea = TextArea::new(vec![text.to_string()]);
	textarea.set_cursor_line_style(Style::default());
	textarea.set_placeholder_text(placeholder.to_string());
	textarea.set_placeholder_style(placeholder_style);
	textarea.move_cursor(tui_textarea::CursorMove::End);
	textarea
}
