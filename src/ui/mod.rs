//! Terminal front end for the searchable select.
//!
//! [`SelectUi`] configures and runs the picker. [`App`] hosts a
//! [`sift_core::Select`], owns its controlled value and routes crossterm key
//! and mouse events into it; the remaining submodules implement the event
//! loop, rendering, the input field, the outside-click listener and themes.

mod actions;
mod app;
mod builder;
mod config;
pub mod dismiss;
pub mod input;
mod render;
mod runtime;
pub mod theme;

pub use app::{App, SelectOutcome};
pub use builder::SelectUi;
pub use config::{DEFAULT_MAX_VISIBLE, UiConfig};
pub use theme::Theme;
