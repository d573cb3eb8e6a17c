/// Text and sizing used when rendering the select.
#[derive(Debug, Clone)]
pub struct UiConfig {
	pub title: Option<String>,
	pub loading_label: String,
	pub empty_label: String,
	/// Maximum number of option rows shown at once.
	pub max_visible: usize,
}

pub const DEFAULT_MAX_VISIBLE: usize = 8;

impl Default for UiConfig {
	fn default() -> Self {
		Self {
			title: None,
			loading_label: "Loading...".to_string(),
			empty_label: "No options".to_string(),
			max_visible: DEFAULT_MAX_VISIBLE,
		}
	}
}

impl UiConfig {
	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	#[must_use]
	pub fn with_max_visible(mut self, rows: usize) -> Self {
		self.max_visible = rows.max(1);
		self
	}
}
