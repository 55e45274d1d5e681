use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use log::trace;

use crate::subscribe::{SubscriberEntry, Subscription, SubscriptionId};
use crate::update::{EqualityFn, Merge, MergeFn, Update};

/// Current value plus the shadow copy taken just before the last commit.
/// Both live under one lock so broadcast always sees a consistent pair.
struct StateCell<T> {
    current: T,
    previous: T,
}

/// An observable state container.
///
/// A store owns a single value, an equality predicate deciding what counts
/// as a change, and a set of selector-scoped subscriptions. Updates that the
/// predicate judges equal to the current value are rejected without touching
/// anything; accepted updates commit and then notify exactly the
/// subscriptions whose selected projection differs between the old and new
/// value, in registration order.
///
/// Cloning a `Store` clones the handle, not the state: both handles share
/// the same cell and subscription set.
///
/// # Examples
///
/// ```
/// use canister::Store;
///
/// let store = Store::new(0);
/// let _sub = store.subscribe(|n: &i32| println!("now {n}"));
///
/// store.set(1); // prints "now 1"
/// store.set(1); // no-op, nothing printed
/// assert_eq!(store.get(), 1);
/// ```
pub struct Store<T> {
    cell: Arc<RwLock<StateCell<T>>>,
    subscribers: Arc<RwLock<Vec<SubscriberEntry<T>>>>,
    equality: EqualityFn<T>,
    merge: MergeFn<T>,
    next_id: Arc<AtomicU64>,
}

impl<T: Clone + Send + Sync + 'static> Store<T> {
    /// Create a new store with the given initial state.
    ///
    /// Change detection uses `PartialEq`; use [`Store::with_equality`] to
    /// supply a different predicate.
    pub fn new(initial: T) -> Self
    where
        T: PartialEq,
    {
        Self::with_equality(initial, |a: &T, b: &T| a == b)
    }

    /// Create a new store with a custom equality predicate.
    ///
    /// The predicate decides both whether an update is a no-op and whether
    /// a whole-state subscription fires.
    pub fn with_equality<E>(initial: T, equality: E) -> Self
    where
        E: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        Self {
            cell: Arc::new(RwLock::new(StateCell {
                current: initial.clone(),
                previous: initial,
            })),
            subscribers: Arc::new(RwLock::new(Vec::new())),
            equality: Arc::new(equality),
            merge: Arc::new(|_current: &T, incoming| incoming),
            next_id: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Switch this store to partial-update semantics via [`Merge`].
    ///
    /// Every candidate value is folded over the current value with
    /// `T::merge` before the equality check: candidate fields win,
    /// unspecified fields survive.
    pub fn merging(self) -> Self
    where
        T: Merge,
    {
        self.merge_with(T::merge)
    }

    /// Switch this store to an ad-hoc merge strategy.
    ///
    /// The strategy folds every update candidate over the current value.
    /// Meant to be called before the handle is shared.
    pub fn merge_with<M>(mut self, strategy: M) -> Self
    where
        M: Fn(&T, T) -> T + Send + Sync + 'static,
    {
        self.merge = Arc::new(strategy);
        self
    }

    /// Get a clone of the current state.
    pub fn get(&self) -> T {
        self.cell.read().unwrap().current.clone()
    }

    /// Read the current state without cloning.
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        let cell = self.cell.read().unwrap();
        f(&cell.current)
    }

    /// Replace the state with a literal value.
    pub fn set(&self, next: T) {
        self.apply(Update::Replace(next));
    }

    /// Update the state with a pure function of the current value.
    pub fn update<F>(&self, updater: F)
    where
        F: FnOnce(&T) -> T + Send + Sync + 'static,
    {
        self.apply(Update::apply(updater));
    }

    /// Apply an [`Update`], the common entry point behind [`set`](Store::set)
    /// and [`update`](Store::update).
    ///
    /// The candidate is resolved against the current value, folded through
    /// the store's merge strategy, and committed only if the equality
    /// predicate judges it different from the current value. Rejected
    /// candidates mutate nothing and notify nobody.
    pub fn apply(&self, update: Update<T>) {
        let current = self.cell.read().unwrap().current.clone();
        let candidate = (self.merge)(&current, update.resolve(&current));

        if (self.equality)(&current, &candidate) {
            trace!("update rejected: candidate equals current state");
            return;
        }

        {
            let mut cell = self.cell.write().unwrap();
            cell.previous = std::mem::replace(&mut cell.current, candidate);
        }
        trace!("state committed");

        self.broadcast();
    }

    /// Subscribe to every accepted state change.
    ///
    /// The listener receives the new state; whether it fires is decided by
    /// the store's equality predicate over the whole state. Returns a handle
    /// whose [`unsubscribe`](Subscription::unsubscribe) removes exactly this
    /// registration.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let equality = Arc::clone(&self.equality);
        self.register(Arc::new(move |previous: &T, current: &T| {
            if !equality(previous, current) {
                listener(current);
            }
        }))
    }

    /// Subscribe to changes of a selected projection of the state.
    ///
    /// The selector runs against the previous and current state on every
    /// accepted update; the listener fires only when the two projections
    /// differ, so a transition that leaves the projection untouched never
    /// invokes it.
    pub fn subscribe_with<O, S, F>(&self, listener: F, selector: S) -> Subscription
    where
        O: PartialEq,
        S: Fn(&T) -> O + Send + Sync + 'static,
        F: Fn(&O) + Send + Sync + 'static,
    {
        self.subscribe_with_eq(listener, selector, |a: &O, b: &O| a == b)
    }

    /// Subscribe to a selected projection with an explicit projection
    /// equality predicate, for projection types where `PartialEq` is not
    /// the right notion of "changed".
    pub fn subscribe_with_eq<O, S, F, E>(&self, listener: F, selector: S, equality: E) -> Subscription
    where
        S: Fn(&T) -> O + Send + Sync + 'static,
        F: Fn(&O) + Send + Sync + 'static,
        E: Fn(&O, &O) -> bool + Send + Sync + 'static,
    {
        self.register(Arc::new(move |previous: &T, current: &T| {
            let before = selector(previous);
            let after = selector(current);
            if !equality(&before, &after) {
                listener(&after);
            }
        }))
    }

    /// Remove the subscription keyed by `id`, if present.
    ///
    /// Unknown or already-removed tokens are a silent no-op.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        let mut subscribers = self.subscribers.write().unwrap();
        let before = subscribers.len();
        subscribers.retain(|entry| entry.id != id);
        if subscribers.len() < before {
            trace!("subscription {id:?} removed");
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().unwrap().len()
    }

    fn register(&self, notify: Arc<dyn Fn(&T, &T) + Send + Sync>) -> Subscription {
        let id = SubscriptionId::from_raw(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.subscribers
            .write()
            .unwrap()
            .push(SubscriberEntry { id, notify });
        trace!("subscription {id:?} registered");

        let subscribers = Arc::downgrade(&self.subscribers);
        Subscription::new(
            id,
            Arc::new(move || {
                if let Some(subscribers) = subscribers.upgrade() {
                    subscribers.write().unwrap().retain(|entry| entry.id != id);
                }
            }),
        )
    }

    /// Notify subscriptions whose selected projection changed.
    ///
    /// Works from a snapshot of the state pair and of the subscription list,
    /// with no lock held while listeners run. Listeners may therefore set,
    /// subscribe, or unsubscribe re-entrantly; a nested `set` runs to
    /// completion (nested broadcast included) before this pass resumes, and
    /// subscriptions added or removed mid-pass do not affect it.
    fn broadcast(&self) {
        let (previous, current) = {
            let cell = self.cell.read().unwrap();
            (cell.previous.clone(), cell.current.clone())
        };
        let entries: Vec<SubscriberEntry<T>> = self.subscribers.read().unwrap().clone();

        for entry in &entries {
            (entry.notify)(&previous, &current);
        }
    }
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Arc::clone(&self.cell),
            subscribers: Arc::clone(&self.subscribers),
            equality: Arc::clone(&self.equality),
            merge: Arc::clone(&self.merge),
            next_id: Arc::clone(&self.next_id),
        }
    }
}

/// Create a new store with the given initial state.
pub fn create_store<T>(initial: T) -> Store<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    Store::new(initial)
}
