//! # Canister
//!
//! A minimal observable state container for Rust.
//!
//! Canister holds one application-defined value per store and tells you when
//! it changes, and only when it changes:
//!
//! ## Store (the container)
//!
//! - `Store<T>` - a single mutable value cell with change notification
//! - Pluggable equality: updates judged equal to the current value are no-ops
//! - Selector-scoped subscriptions: listeners fire only when their projection
//!   of the state actually changed
//! - Opt-in partial-update semantics via the `Merge` trait
//!
//! ## Helpers
//!
//! - `Update<T>` - explicit literal-vs-updater inputs to `set`
//! - `Actions<T>` - named zero-argument operations bound to a store
//! - `Subscription` - explicit, idempotent release of a registration

pub mod store;
pub mod subscribe;
pub mod update;

// Re-export main types for convenience
pub use store::{create_store, Actions, Store};
pub use subscribe::{Subscription, SubscriptionId};
pub use update::{EqualityFn, Merge, MergeFn, Update, Updater};
