use std::sync::mpsc::{self, Receiver};
use std::time::Instant;

use ratatui::layout::Rect;
use ratatui::widgets::ListState;
use serde::Serialize;
use sift_core::{Identifier, OptionValue, Select};
use throbber_widgets_tui::ThrobberState;

use super::config::UiConfig;
use super::dismiss::OutsideClick;
use super::input::SearchInput;
use super::theme::Theme;

/// Result of an interactive session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOutcome {
	pub accepted: bool,
	pub value: Option<Identifier>,
	pub label: Option<String>,
	pub query: String,
}

/// Screen regions from the most recent frame, used for mouse hit testing.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct LayoutRegions {
	pub(crate) trigger: Rect,
	pub(crate) dropdown: Rect,
	pub(crate) list: Rect,
}

/// Terminal host for a [`Select`]: owns the controlled value, the input field
/// and everything needed to draw and hit-test the widget.
pub struct App<'a> {
	pub(crate) select: Select<Identifier>,
	pub(crate) input: SearchInput<'a>,
	pub(crate) ui: UiConfig,
	pub theme: Theme,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) list_state: ListState,
	pub(crate) layout: LayoutRegions,
	pub(crate) outside_click: OutsideClick,
	pub(crate) allow_freeform: bool,
	changes: Receiver<Identifier>,
}

impl<'a> App<'a> {
	pub fn new(mut select: Select<Identifier>, ui: UiConfig, theme: Theme) -> Self {
		let (change_tx, changes) = mpsc::channel();
		select.set_on_change(move |value| {
			let _ = change_tx.send(value);
		});
		select.set_on_query_change(|query| tracing::debug!(query, "query settled"));
		let input =
			SearchInput::new(select.input_placeholder()).with_placeholder_style(theme.muted_style());

		Self {
			select,
			input,
			ui,
			theme,
			throbber_state: ThrobberState::default(),
			list_state: ListState::default(),
			layout: LayoutRegions::default(),
			outside_click: OutsideClick::default(),
			allow_freeform: false,
			changes,
		}
	}

	/// Accept the text left in the input as a value when no option was picked.
	pub fn with_freeform(mut self, allow: bool) -> Self {
		self.allow_freeform = allow;
		self
	}

	pub fn select(&self) -> &Select<Identifier> {
		&self.select
	}

	/// Advance the select and apply any notifications it emitted.
	pub(crate) fn tick(&mut self, now: Instant) {
		self.select.tick(now);
		self.pump_notifications();
		self.sync_input();
	}

	/// Feed committed values back into the select.
	pub(crate) fn pump_notifications(&mut self) {
		while let Ok(value) = self.changes.try_recv() {
			tracing::info!(value = %value, "option selected");
			self.select.set_value(Some(value));
		}
	}

	/// Keep the input field showing the select's query and the outside-click
	/// listener attached exactly while the dropdown is open.
	pub(crate) fn sync_input(&mut self) {
		self.input.set_text(self.select.query());
		if self.select.is_open() {
			if !self.outside_click.is_attached() {
				self.outside_click
					.attach([self.layout.trigger, self.layout.dropdown]);
			}
		} else {
			self.outside_click.detach();
		}
	}

	/// Label shown on the trigger for the controlled value.
	pub(crate) fn trigger_label(&self) -> Option<String> {
		let value = self.select.value()?;
		Some(
			self.select
				.selected_label()
				.map(str::to_string)
				.unwrap_or_else(|| value.identity().into_owned()),
		)
	}

	pub(crate) fn outcome(&self, accepted: bool) -> SelectOutcome {
		let query = self.select.query().to_string();

		if !accepted {
			return SelectOutcome {
				accepted,
				value: None,
				label: None,
				query,
			};
		}

		match self.select.value() {
			Some(value) => SelectOutcome {
				accepted,
				value: Some(value.clone()),
				label: self.trigger_label(),
				query,
			},
			None if self.allow_freeform && !query.trim().is_empty() => SelectOutcome {
				accepted,
				value: Some(Identifier::Text(query.trim().to_string())),
				label: None,
				query,
			},
			None => SelectOutcome {
				accepted,
				value: None,
				label: None,
				query,
			},
		}
	}
}
