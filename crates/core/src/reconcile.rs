//! Decide which option list is shown for the current query.

use crate::option::SelectOption;
use crate::source::filter_static;

/// Which candidate list a [`ResultView`] was drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultSource {
	/// The latest resolved dynamic search results.
	Dynamic,
	/// Dynamic search came back empty, so the static list is filtered instead.
	StaticFallback,
	/// A dynamic search is running and nothing has resolved yet.
	Pending,
	/// Plain static filtering.
	Static,
}

/// Everything the reconciler looks at.
#[derive(Debug)]
pub struct ReconcileInput<'a, V> {
	pub options: &'a [SelectOption<V>],
	pub dynamic_results: &'a [SelectOption<V>],
	pub query: &'a str,
	/// Dynamic search enabled and a provider is present.
	pub dynamic: bool,
	pub searching: bool,
	pub external_loading: bool,
}

/// The reconciled, renderable result list.
#[derive(Debug)]
pub struct ResultView<'a, V> {
	pub source: ResultSource,
	pub options: Vec<&'a SelectOption<V>>,
	pub loading: bool,
}

impl<V> ResultView<'_, V> {
	pub fn is_empty(&self) -> bool {
		self.options.is_empty()
	}

	pub fn len(&self) -> usize {
		self.options.len()
	}
}

pub fn reconcile<'a, V>(input: ReconcileInput<'a, V>) -> ResultView<'a, V> {
	let ReconcileInput {
		options,
		dynamic_results,
		query,
		dynamic,
		searching,
		external_loading,
	} = input;
	let loading = searching || external_loading;
	let has_query = !query.trim().is_empty();

	let (source, options) = if dynamic && has_query {
		if !dynamic_results.is_empty() {
			(ResultSource::Dynamic, dynamic_results.iter().collect())
		} else if searching {
			(ResultSource::Pending, Vec::new())
		} else {
			(ResultSource::StaticFallback, filter_static(options, query))
		}
	} else {
		(ResultSource::Static, filter_static(options, query))
	};

	ResultView {
		source,
		options,
		loading,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn statics() -> Vec<SelectOption<i64>> {
		vec![
			SelectOption::new(1, "Category B"),
			SelectOption::new(2, "Catalogue"),
			SelectOption::new(3, "Dog"),
		]
	}

	fn input<'a>(
		options: &'a [SelectOption<i64>],
		dynamic_results: &'a [SelectOption<i64>],
		query: &'a str,
	) -> ReconcileInput<'a, i64> {
		ReconcileInput {
			options,
			dynamic_results,
			query,
			dynamic: true,
			searching: false,
			external_loading: false,
		}
	}

	#[test]
	fn dynamic_results_replace_static_view() {
		let options = statics();
		let dynamic = vec![SelectOption::new(9, "Category A")];
		let view = reconcile(input(&options, &dynamic, "cat"));
		assert_eq!(view.source, ResultSource::Dynamic);
		assert_eq!(view.len(), 1);
		assert_eq!(view.options[0].value, 9);
	}

	#[test]
	fn empty_dynamic_results_fall_back_to_static_filter() {
		let options = statics();
		let view = reconcile(input(&options, &[], "cat"));
		assert_eq!(view.source, ResultSource::StaticFallback);
		let values: Vec<i64> = view.options.iter().map(|option| option.value).collect();
		assert_eq!(values, vec![1, 2]);
	}

	#[test]
	fn in_flight_search_without_results_shows_loading_only() {
		let options = statics();
		let mut pending = input(&options, &[], "cat");
		pending.searching = true;
		let view = reconcile(pending);
		assert_eq!(view.source, ResultSource::Pending);
		assert!(view.is_empty());
		assert!(view.loading);
	}

	#[test]
	fn empty_query_ignores_stale_dynamic_results() {
		let options = statics();
		let dynamic = vec![SelectOption::new(9, "Category A")];
		let view = reconcile(input(&options, &dynamic, "  "));
		assert_eq!(view.source, ResultSource::Static);
		assert_eq!(view.len(), 0);

		let view = reconcile(input(&options, &dynamic, ""));
		assert_eq!(view.len(), 3);
	}

	#[test]
	fn disabled_dynamic_search_filters_statically() {
		let options = statics();
		let dynamic = vec![SelectOption::new(9, "Category A")];
		let mut plain = input(&options, &dynamic, "dog");
		plain.dynamic = false;
		let view = reconcile(plain);
		assert_eq!(view.source, ResultSource::Static);
		assert_eq!(view.options[0].value, 3);
	}

	#[test]
	fn external_loading_flag_shows_loading_row() {
		let options = statics();
		let mut external = input(&options, &[], "");
		external.dynamic = false;
		external.external_loading = true;
		let view = reconcile(external);
		assert!(view.loading);
		assert_eq!(view.len(), 3);
	}
}
