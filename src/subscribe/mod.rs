//! Subscription bookkeeping.
//!
//! Subscriptions are keyed by opaque tokens rather than listener identity,
//! so the same listener can be registered any number of times under
//! different selectors. Release is explicit and idempotent.

mod subscription;

pub use subscription::{Subscription, SubscriptionId};

pub(crate) use subscription::SubscriberEntry;
