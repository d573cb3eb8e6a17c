use std::fmt::Write;

use super::ResolvedConfig;

pub(super) fn render_summary(config: &ResolvedConfig) -> String {
	let mut out = String::new();
	let _ = writeln!(out, "Effective configuration:");
	let _ = writeln!(
		out,
		"  Placeholder: {}",
		config.placeholder.as_deref().unwrap_or("(default)")
	);
	let _ = writeln!(
		out,
		"  Input placeholder: {}",
		config.input_placeholder.as_deref().unwrap_or("(default)")
	);
	let _ = writeln!(out, "  Debounce: {} ms", config.debounce.as_millis());
	let _ = writeln!(out, "  Dynamic search: {}", bool_to_word(config.dynamic_search));
	match (&config.search_command, config.dynamic_search) {
		(Some(command), _) => {
			let _ = writeln!(out, "  Search command: {command}");
		}
		(None, true) => {
			let _ = writeln!(out, "  Search command: (none, static options are filtered)");
		}
		(None, false) => {}
	}
	let _ = writeln!(out, "  Free-form values: {}", bool_to_word(config.allow_freeform));
	let _ = writeln!(out, "  Disabled: {}", bool_to_word(config.disabled));
	if let Some(title) = &config.title {
		let _ = writeln!(out, "  Title: {title}");
	}
	let _ = writeln!(
		out,
		"  UI theme: {}",
		config
			.theme
			.as_deref()
			.unwrap_or("(use the library default)")
	);
	let _ = writeln!(out, "  Visible rows: {}", config.max_visible);
	out
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}
