use std::sync::Arc;

/// Opaque token identifying a single registration with a store.
///
/// Tokens are minted fresh for every `subscribe` call, so the same listener
/// registered twice yields two distinct tokens and two independent entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub(crate) fn from_raw(raw: u64) -> Self {
        SubscriptionId(raw)
    }
}

/// A registered subscription as the store's broadcast loop sees it: the
/// token plus a closure that diffs the selected projection between the
/// previous and current state and invokes the listener when it changed.
pub(crate) struct SubscriberEntry<T> {
    pub(crate) id: SubscriptionId,
    pub(crate) notify: Arc<dyn Fn(&T, &T) + Send + Sync>,
}

impl<T> Clone for SubscriberEntry<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            notify: Arc::clone(&self.notify),
        }
    }
}

/// Handle for releasing a subscription.
///
/// Returned by the `subscribe` family on [`Store`](crate::Store). Calling
/// [`unsubscribe`](Subscription::unsubscribe) removes exactly the entry this
/// handle was minted for; calling it again, or after the store has already
/// dropped the entry, is a no-op. Dropping the handle does *not* release the
/// subscription; release is always an explicit call.
#[must_use = "dropping a Subscription does not release it; call unsubscribe()"]
pub struct Subscription {
    id: SubscriptionId,
    cancel: Arc<dyn Fn() + Send + Sync>,
}

impl Subscription {
    pub(crate) fn new(id: SubscriptionId, cancel: Arc<dyn Fn() + Send + Sync>) -> Self {
        Self { id, cancel }
    }

    /// The token this handle was minted for.
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Remove the subscription from its store. Idempotent.
    pub fn unsubscribe(&self) {
        (self.cancel)();
    }
}
