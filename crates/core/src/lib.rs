//! Headless core of the searchable select.
//!
//! The crate knows nothing about terminals or rendering. It models the option
//! list, static filtering, debounced dynamic search on a background worker,
//! reconciliation of static and dynamic results, and the open/closed state
//! machine with its selection notifications. Front ends route input into a
//! [`Select`] and render [`Select::visible`].

pub mod debounce;
pub mod option;
pub mod reconcile;
pub mod search;
pub mod select;
pub mod source;

pub use debounce::{DEFAULT_DEBOUNCE, Debouncer};
pub use option::{Identifier, OptionValue, SelectOption, same_value};
pub use reconcile::{ReconcileInput, ResultSource, ResultView, reconcile};
pub use select::{Select, SelectBuilder, SelectState};
pub use source::{SearchProvider, filter_static};
