//! Background execution of dynamic searches.
//!
//! A worker thread owns the [`SearchProvider`](crate::source::SearchProvider)
//! and answers tagged queries; [`SearchRuntime`] lives on the UI side and only
//! lets the result of the most recently issued query through.

mod commands;
mod runtime;
mod worker;

pub use commands::{SearchCommand, SearchResult};
pub use runtime::SearchRuntime;
pub use worker::spawn;
