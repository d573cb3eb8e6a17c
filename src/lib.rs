//! Terminal searchable select built on [`sift_core`].
//!
//! The root module re-exports the headless core alongside the terminal front
//! end so that embedders can configure and run a picker without digging
//! through the module hierarchy.

pub mod app_dirs;
pub mod logging;
pub mod options_input;
pub mod search_command;
pub mod ui;

pub use sift_core::{
	DEFAULT_DEBOUNCE, Identifier, OptionValue, SearchProvider, Select, SelectBuilder, SelectOption,
	SelectState,
};
pub use ui::{App, SelectOutcome, SelectUi, Theme, UiConfig};
