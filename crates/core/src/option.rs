use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque option identifier as it arrives from JSON: either a string or an
/// integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
	Number(i64),
	Text(String),
}

impl fmt::Display for Identifier {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Number(value) => write!(f, "{value}"),
			Self::Text(value) => f.write_str(value),
		}
	}
}

impl From<i64> for Identifier {
	fn from(value: i64) -> Self {
		Self::Number(value)
	}
}

impl From<&str> for Identifier {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

impl From<String> for Identifier {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

/// A value type that can back a select option.
///
/// Two values are considered the same when their [`identity`](Self::identity)
/// strings are equal, so `Identifier::Number(2)` and `Identifier::Text("2")`
/// refer to the same option.
pub trait OptionValue: Clone + Send + 'static {
	fn identity(&self) -> Cow<'_, str>;
}

impl OptionValue for Identifier {
	fn identity(&self) -> Cow<'_, str> {
		match self {
			Self::Number(value) => Cow::Owned(value.to_string()),
			Self::Text(value) => Cow::Borrowed(value),
		}
	}
}

impl OptionValue for String {
	fn identity(&self) -> Cow<'_, str> {
		Cow::Borrowed(self)
	}
}

impl OptionValue for &'static str {
	fn identity(&self) -> Cow<'_, str> {
		Cow::Borrowed(self)
	}
}

macro_rules! numeric_option_value {
	($($ty:ty),*) => {
		$(
			impl OptionValue for $ty {
				fn identity(&self) -> Cow<'_, str> {
					Cow::Owned(self.to_string())
				}
			}
		)*
	};
}

numeric_option_value!(i32, i64, u32, u64, usize);

/// Compare two option values by identity.
pub fn same_value<V: OptionValue>(a: &V, b: &V) -> bool {
	a.identity() == b.identity()
}

/// One selectable entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption<V = Identifier> {
	pub value: V,
	pub label: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
}

impl<V> SelectOption<V> {
	pub fn new(value: V, label: impl Into<String>) -> Self {
		Self {
			value,
			label: label.into(),
			description: None,
		}
	}

	#[must_use]
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	/// Case-insensitive substring match against the label or description.
	///
	/// An empty query matches every option.
	pub fn matches(&self, query: &str) -> bool {
		if query.is_empty() {
			return true;
		}
		let needle = query.to_lowercase();
		self.label.to_lowercase().contains(&needle)
			|| self
				.description
				.as_deref()
				.is_some_and(|description| description.to_lowercase().contains(&needle))
	}
}
