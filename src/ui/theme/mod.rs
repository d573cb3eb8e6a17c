mod builtins;
mod types;

pub use builtins::default_theme;
pub use types::{Theme, ThemeDefinition};

use builtins::BUILT_IN_DEFINITIONS;

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

/// Look up a built-in theme by name or alias, ignoring case and surrounding
/// whitespace.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let normalized = normalize_name(name);
	BUILT_IN_DEFINITIONS
		.iter()
		.find(|definition| definition.answers_to(&normalized))
		.map(|definition| definition.theme)
}

/// Canonical names of the built-in themes.
#[must_use]
pub fn names() -> Vec<&'static str> {
	BUILT_IN_DEFINITIONS
		.iter()
		.map(|definition| definition.name)
		.collect()
}

fn normalize_name(name: &str) -> String {
	name.trim().to_ascii_lowercase()
}
