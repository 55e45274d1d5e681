use std::sync::Arc;

/// A pure state transition: computes the next value from the current one.
pub type Updater<T> = Box<dyn FnOnce(&T) -> T + Send + Sync>;

/// Comparison deciding whether two state values count as equal.
pub type EqualityFn<T> = Arc<dyn Fn(&T, &T) -> bool + Send + Sync>;

/// Strategy folding an update candidate over the current value.
pub type MergeFn<T> = Arc<dyn Fn(&T, T) -> T + Send + Sync>;

/// An input to [`Store::apply`](crate::Store::apply).
///
/// Updates are an explicit sum of the two ways to produce a candidate value:
/// a literal replacement, or an updater computed from the current state.
/// There is no runtime inspection to tell the two apart, so a store whose
/// state type is itself callable behaves the same as any other.
pub enum Update<T> {
    /// Replace the current value with the given candidate.
    Replace(T),
    /// Compute the candidate by applying an updater to the current value.
    Apply(Updater<T>),
}

impl<T> Update<T> {
    /// Wrap a literal replacement candidate.
    pub fn replace(value: T) -> Self {
        Update::Replace(value)
    }

    /// Wrap a pure updater function.
    pub fn apply<F>(updater: F) -> Self
    where
        F: FnOnce(&T) -> T + Send + Sync + 'static,
    {
        Update::Apply(Box::new(updater))
    }

    /// Resolve this update against the current value, yielding the candidate.
    pub(crate) fn resolve(self, current: &T) -> T {
        match self {
            Update::Replace(value) => value,
            Update::Apply(updater) => updater(current),
        }
    }
}

impl<T> From<T> for Update<T> {
    fn from(value: T) -> Self {
        Update::Replace(value)
    }
}

/// Partial-update semantics for composite state types.
///
/// A merging store folds every candidate over the current value with
/// [`Merge::merge`]: fields the candidate specifies win, fields it leaves
/// unspecified survive from the current value. What "unspecified" means is
/// up to the state type; `None` optionals are the usual encoding.
///
/// # Examples
///
/// ```
/// use canister::Merge;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Profile {
///     name: String,
///     email: Option<String>,
/// }
///
/// impl Merge for Profile {
///     fn merge(current: &Self, incoming: Self) -> Self {
///         Profile {
///             name: incoming.name,
///             email: incoming.email.or_else(|| current.email.clone()),
///         }
///     }
/// }
/// ```
pub trait Merge: Sized {
    /// Fold `incoming` over `current`; incoming fields win.
    fn merge(current: &Self, incoming: Self) -> Self;
}
