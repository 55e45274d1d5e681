use std::sync::Arc;

use log::trace;

use crate::store::Store;

type Reducer<T> = Arc<dyn Fn(&T) -> T + Send + Sync>;

/// Named zero-argument operations bound to a store.
///
/// An action binder pairs a store handle with a registry of pure reducers.
/// Dispatching a name feeds the matching reducer through the store's normal
/// update path, so no-op detection, merging, and selector-scoped broadcast
/// all behave exactly as a direct [`Store::update`] call.
///
/// # Examples
///
/// ```
/// use canister::{Actions, Store};
///
/// let store = Store::new(0);
/// let actions = Actions::new(&store)
///     .with("increment", |n: &i32| n + 1)
///     .with("decrement", |n: &i32| n - 1);
///
/// actions.dispatch("increment");
/// actions.dispatch("increment");
/// actions.dispatch("decrement");
/// assert_eq!(store.get(), 1);
/// ```
pub struct Actions<T> {
    store: Store<T>,
    reducers: Vec<(String, Reducer<T>)>,
}

impl<T: Clone + Send + Sync + 'static> Actions<T> {
    /// Create an empty binder over the given store.
    pub fn new(store: &Store<T>) -> Self {
        Self {
            store: store.clone(),
            reducers: Vec::new(),
        }
    }

    /// Register a named reducer.
    ///
    /// Re-registering an existing name replaces the earlier reducer.
    pub fn with<F>(mut self, name: impl Into<String>, reducer: F) -> Self
    where
        F: Fn(&T) -> T + Send + Sync + 'static,
    {
        let name = name.into();
        let reducer: Reducer<T> = Arc::new(reducer);
        match self.reducers.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = reducer,
            None => self.reducers.push((name, reducer)),
        }
        self
    }

    /// Run the named reducer through the store.
    ///
    /// Returns whether the name was known; dispatching an unknown name is a
    /// no-op.
    pub fn dispatch(&self, name: &str) -> bool {
        match self.reducers.iter().find(|(n, _)| n == name) {
            Some((_, reducer)) => {
                let reducer = Arc::clone(reducer);
                self.store.update(move |state| reducer(state));
                true
            }
            None => {
                trace!("dispatch of unknown action {name:?} ignored");
                false
            }
        }
    }

    /// Registered action names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.reducers.iter().map(|(name, _)| name.as_str())
    }
}
