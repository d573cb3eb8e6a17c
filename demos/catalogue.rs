use std::sync::Arc;
use std::thread;
use std::time::Duration;

use sift::{Identifier, SelectOption, SelectUi, UiConfig};

fn catalogue() -> Vec<SelectOption> {
	[
		(101, "Lot 101", "Bronze figure, 19th century"),
		(102, "Lot 102", "Oil on canvas, harbour scene"),
		(103, "Lot 103", "Silver tea service"),
		(104, "Lot 104", "Oak writing desk"),
	]
	.into_iter()
	.map(|(id, label, description)| {
		SelectOption::new(Identifier::Number(id), label).with_description(description)
	})
	.collect()
}

fn main() -> anyhow::Result<()> {
	// A slow lookup standing in for a remote catalogue service.
	let search = |query: &str| -> anyhow::Result<Vec<SelectOption>> {
		thread::sleep(Duration::from_millis(400));
		Ok(catalogue()
			.into_iter()
			.filter(|option| option.matches(query))
			.collect())
	};

	let outcome = SelectUi::new(catalogue())
		.with_placeholder("Choose a lot")
		.with_dynamic_search(true)
		.with_search_provider(Arc::new(search))
		.with_ui_config(UiConfig::default().with_title("Catalogue"))
		.run()?;

	println!("Accepted? {}", outcome.accepted);
	match (outcome.value, outcome.label) {
		(Some(value), Some(label)) => println!("Selected {label} ({value})"),
		(Some(value), None) => println!("Selected {value}"),
		_ => println!("No selection"),
	}
	Ok(())
}
