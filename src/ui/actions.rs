use std::time::Instant;

use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use super::App;
use super::app::SelectOutcome;

impl<'a> App<'a> {
	pub(crate) fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Result<Option<SelectOutcome>> {
		if self.select.is_open() {
			self.handle_open_key(key, now);
		} else {
			match key.code {
				KeyCode::Esc => return Ok(Some(self.outcome(false))),
				KeyCode::Enter => return Ok(Some(self.outcome(true))),
				KeyCode::Char(' ') | KeyCode::Down | KeyCode::Tab => self.select.toggle(now),
				_ => {}
			}
		}
		self.pump_notifications();
		self.sync_input();
		Ok(None)
	}

	fn handle_open_key(&mut self, key: KeyEvent, now: Instant) {
		match key.code {
			KeyCode::Esc => self.select.dismiss(),
			KeyCode::Enter => {
				self.select.commit_highlighted();
			}
			KeyCode::Up => self.select.move_highlight(-1),
			KeyCode::Down => self.select.move_highlight(1),
			KeyCode::PageUp => self.select.move_highlight(-(self.ui.max_visible as isize)),
			KeyCode::PageDown => self.select.move_highlight(self.ui.max_visible as isize),
			KeyCode::Tab => {}
			_ => {
				if self.input.input(key) {
					let text = self.input.text().to_string();
					self.select.set_query(text, now);
				}
			}
		}
	}

	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
		let position = Position::new(mouse.column, mouse.row);
		match mouse.kind {
			MouseEventKind::Down(MouseButton::Left) => self.handle_pointer_down(position, now),
			MouseEventKind::ScrollUp if self.select.is_open() => self.select.move_highlight(-1),
			MouseEventKind::ScrollDown if self.select.is_open() => self.select.move_highlight(1),
			_ => {}
		}
		self.pump_notifications();
		self.sync_input();
	}

	fn handle_pointer_down(&mut self, position: Position, now: Instant) {
		if self.outside_click.is_outside(position) {
			self.select.dismiss();
			return;
		}
		if self.layout.trigger.contains(position) {
			self.select.toggle(now);
			return;
		}
		if self.select.is_open()
			&& self.layout.list.contains(position)
			&& let Some(row) = self.row_at(position)
		{
			self.select.set_highlight(row);
			self.select.commit_highlighted();
		}
	}

	/// Index into the visible options for a click inside the list area.
	fn row_at(&self, position: Position) -> Option<usize> {
		let offset = usize::from(position.y.saturating_sub(self.layout.list.y));
		let row = self.list_state.offset() + offset;
		(row < self.select.visible().len()).then_some(row)
	}
}
