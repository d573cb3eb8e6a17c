//! Where candidate options come from: a static list filtered in place, or an
//! external search function.

use anyhow::Result;

use crate::option::SelectOption;

/// Filter a static option list by case-insensitive substring over label and
/// description, preserving the original order.
pub fn filter_static<'a, V>(options: &'a [SelectOption<V>], query: &str) -> Vec<&'a SelectOption<V>> {
	options.iter().filter(|option| option.matches(query)).collect()
}

/// External asynchronous lookup backing dynamic search.
///
/// Implementations run on a background worker thread and may block. They are
/// only called with a non-empty, trimmed query and their results are shown
/// verbatim. An `Err` is logged and treated as an empty result set.
pub trait SearchProvider<V>: Send + Sync {
	fn search(&self, query: &str) -> Result<Vec<SelectOption<V>>>;
}

impl<V, F> SearchProvider<V> for F
where
	F: Fn(&str) -> Result<Vec<SelectOption<V>>> + Send + Sync,
{
	fn search(&self, query: &str) -> Result<Vec<SelectOption<V>>> {
		self(query)
	}
}
