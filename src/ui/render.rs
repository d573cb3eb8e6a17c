use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph};
use throbber_widgets_tui::Throbber;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::App;

const TRIGGER_HEIGHT: u16 = 3;
const PROMPT: &str = "> ";

/// Rendered option rows and the highlighted index among them.
struct ListRows {
	items: Vec<ListItem<'static>>,
	highlighted: Option<usize>,
}

impl<'a> App<'a> {
	pub fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area();
		let sections = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(TRIGGER_HEIGHT),
				Constraint::Min(0),
				Constraint::Length(1),
			])
			.split(area);

		self.layout.trigger = sections[0];
		self.render_trigger(frame, sections[0]);

		if self.select.is_open() {
			self.render_dropdown(frame, sections[1]);
			self.outside_click
				.attach([self.layout.trigger, self.layout.dropdown]);
		} else {
			self.layout.dropdown = Rect::default();
			self.layout.list = Rect::default();
		}

		self.render_help(frame, sections[2]);
	}

	fn render_trigger(&self, frame: &mut Frame, area: Rect) {
		let border_style = if self.select.is_disabled() {
			self.theme.disabled_style()
		} else if self.select.is_open() {
			self.theme.open_border_style()
		} else {
			self.theme.border_style()
		};
		let mut block = Block::default()
			.borders(Borders::ALL)
			.border_style(border_style);
		if let Some(title) = &self.ui.title {
			block = block.title(format!(" {title} "));
		}
		let inner = block.inner(area);
		frame.render_widget(block, area);

		let arrow = if self.select.is_open() { " ▴" } else { " ▾" };
		let available = usize::from(inner.width).saturating_sub(arrow.width());
		let text = match self.trigger_label() {
			Some(label) if !self.select.is_disabled() => {
				Span::styled(fit(&label, available), self.theme.selected_style())
			}
			Some(label) => Span::styled(fit(&label, available), self.theme.disabled_style()),
			None => Span::styled(
				fit(self.select.placeholder(), available),
				self.theme.muted_style(),
			),
		};
		let padding = available.saturating_sub(text.width());
		let line = Line::from(vec![
			text,
			Span::raw(" ".repeat(padding)),
			Span::styled(arrow, self.theme.muted_style()),
		]);
		frame.render_widget(Paragraph::new(line), inner);
	}

	fn render_dropdown(&mut self, frame: &mut Frame, space: Rect) {
		let rows = self.list_rows(usize::from(space.width.saturating_sub(2)));
		let visible_rows = rows
			.items
			.len()
			.clamp(1, self.ui.max_visible)
			.min(usize::from(space.height));
		// Borders, input row, option rows.
		let height = u16::try_from(visible_rows)
			.unwrap_or(u16::MAX)
			.saturating_add(3)
			.min(space.height);
		let area = Rect {
			height,
			..space
		};
		self.layout.dropdown = area;

		let block = Block::default()
			.borders(Borders::ALL)
			.border_style(self.theme.open_border_style());
		let inner = block.inner(area);
		frame.render_widget(Clear, area);
		frame.render_widget(block, area);

		let parts = Layout::default()
			.direction(Direction::Vertical)
			.constraints([Constraint::Length(1), Constraint::Min(0)])
			.split(inner);

		let input_parts = Layout::default()
			.direction(Direction::Horizontal)
			.constraints([Constraint::Length(PROMPT.width() as u16), Constraint::Min(1)])
			.split(parts[0]);
		frame.render_widget(
			Paragraph::new(PROMPT).style(self.theme.prompt_style()),
			input_parts[0],
		);
		self.input.render(frame, input_parts[1]);

		self.layout.list = parts[1];
		self.list_state.select(rows.highlighted);
		let list = List::new(rows.items).highlight_style(self.theme.row_highlight_style());
		frame.render_stateful_widget(list, parts[1], &mut self.list_state);
	}

	fn list_rows(&self, width: usize) -> ListRows {
		let view = self.select.visible();
		let muted = self.theme.muted_style();
		let mut items: Vec<ListItem<'static>> = view
			.options
			.iter()
			.map(|option| {
				let label = fit(&option.label, width);
				let remaining = width.saturating_sub(label.width() + 2);
				let mut spans = vec![Span::raw(label)];
				if let Some(description) = option.description.as_deref()
					&& remaining > 0
				{
					spans.push(Span::raw("  "));
					spans.push(Span::styled(fit(description, remaining), muted));
				}
				ListItem::new(Line::from(spans))
			})
			.collect();

		if view.loading {
			let spinner = Throbber::default()
				.style(muted)
				.throbber_style(muted)
				.to_symbol_span(&self.throbber_state);
			items.push(ListItem::new(Line::from(vec![
				spinner,
				Span::styled(self.ui.loading_label.clone(), muted),
			])));
		} else if view.is_empty() {
			items.push(ListItem::new(Line::from(Span::styled(
				self.ui.empty_label.clone(),
				muted,
			))));
		}

		ListRows {
			items,
			highlighted: self.select.highlighted(),
		}
	}

	fn render_help(&self, frame: &mut Frame, area: Rect) {
		let hint = if self.select.is_open() {
			"↑/↓ move · enter select · esc close"
		} else if self.select.is_disabled() {
			"disabled · enter accept · esc cancel"
		} else {
			"space open · enter accept · esc cancel"
		};
		frame.render_widget(
			Paragraph::new(hint).style(self.theme.muted_style()),
			area,
		);
	}
}

/// Truncate `text` to at most `width` terminal columns, marking the cut with
/// an ellipsis.
fn fit(text: &str, width: usize) -> String {
	if text.width() <= width {
		return text.to_string();
	}
	if width == 0 {
		return String::new();
	}
	let mut out = String::new();
	let mut used = 0;
	for ch in text.chars() {
		let ch_width = ch.width().unwrap_or(0);
		if used + ch_width + 1 > width {
			break;
		}
		out.push(ch);
		used += ch_width;
	}
	out.push('…');
	out
}
