//! Update inputs and merge strategies.
//!
//! This module defines how new state reaches a store:
//! - `Update<T>`: the explicit sum of literal replacements and updater functions
//! - `Merge`: opt-in partial-update semantics for composite state types

mod update;

pub use update::{EqualityFn, Merge, MergeFn, Update, Updater};
