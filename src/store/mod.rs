//! The observable state container.
//!
//! Stores hold a single value behind a change-detecting update path and
//! notify selector-scoped subscriptions when the parts they project out
//! actually change.

mod actions;
mod store;

pub use actions::Actions;
pub use store::{create_store, Store};
