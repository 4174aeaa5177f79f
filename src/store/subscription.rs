//! Observer registry.

/// Callback invoked after every committed transition.
///
/// Observers receive the state that was just committed.
pub type Observer<S> = Box<dyn FnMut(&S)>;

/// Handle identifying one registration made by
/// [`Store::subscribe`](super::Store::subscribe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "a Subscription is the only way to unsubscribe"]
pub struct Subscription(u64);

/// Ordered list of observers. Each registration gets its own handle,
/// so registering the same callback twice yields two entries.
pub(crate) struct Observers<S> {
    next_id: u64,
    entries: Vec<(Subscription, Observer<S>)>,
}

impl<S> Observers<S> {
    pub(crate) fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    pub(crate) fn insert(&mut self, observer: Observer<S>) -> Subscription {
        let subscription = Subscription(self.next_id);
        self.next_id += 1;
        self.entries.push((subscription, observer));
        subscription
    }

    /// Returns false if the handle was already removed.
    pub(crate) fn remove(&mut self, subscription: Subscription) -> bool {
        match self.entries.iter().position(|(s, _)| *s == subscription) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Invoke every observer in registration order.
    pub(crate) fn notify(&mut self, state: &S) {
        for (_, observer) in self.entries.iter_mut() {
            observer(state);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
