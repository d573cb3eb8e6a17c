use anyhow::Result;
use sift::SelectOutcome;

/// Print a plain-text representation of the outcome.
pub(crate) fn print_plain(outcome: &SelectOutcome) {
	println!("{}", format_plain(outcome));
}

fn format_plain(outcome: &SelectOutcome) -> String {
	if !outcome.accepted {
		return "Selection cancelled".to_string();
	}
	match &outcome.value {
		Some(value) => value.to_string(),
		None => "No selection".to_string(),
	}
}

/// Format the outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SelectOutcome) -> Result<String> {
	Ok(serde_json::to_string_pretty(outcome)?)
}

/// Print the JSON representation of the outcome.
pub(crate) fn print_json(outcome: &SelectOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use serde_json::Value;
	use sift::Identifier;

	use super::*;

	fn accepted(value: Option<Identifier>) -> SelectOutcome {
		SelectOutcome {
			accepted: true,
			value,
			label: Some("Banana".into()),
			query: String::new(),
		}
	}

	#[test]
	fn json_format_includes_value_and_label() {
		let json = format_outcome_json(&accepted(Some(Identifier::Number(2)))).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["accepted"], true);
		assert_eq!(value["value"], 2);
		assert_eq!(value["label"], "Banana");
	}

	#[test]
	fn plain_format_prints_the_value() {
		assert_eq!(
			format_plain(&accepted(Some(Identifier::Text("b".into())))),
			"b"
		);
		assert_eq!(format_plain(&accepted(None)), "No selection");

		let cancelled = SelectOutcome {
			accepted: false,
			..accepted(None)
		};
		assert_eq!(format_plain(&cancelled), "Selection cancelled");
	}
}
