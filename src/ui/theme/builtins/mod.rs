mod slate;
mod solarized;

use super::types::{Theme, ThemeDefinition};

pub(super) const BUILT_IN_DEFINITIONS: &[ThemeDefinition] =
	&[slate::DEFINITION, solarized::DEFINITION];

pub fn default_theme() -> Theme {
	slate::SLATE
}
