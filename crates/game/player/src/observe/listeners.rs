use std::fmt;

/// Handle returned by [`Watch::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub u64);

type Listener<T> = Box<dyn FnMut(&T)>;

/// Ordered listener registry for values of type `T`.
pub struct Listeners<T: ?Sized> {
    next_id: u64,
    entries: Vec<(SubscriptionId, Listener<T>)>,
}

impl<T: ?Sized> Listeners<T> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    /// Returns false when `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Calls every listener in subscription order.
    pub fn notify(&mut self, value: &T) {
        for (_, listener) in &mut self.entries {
            listener(value);
        }
    }
}

impl<T: ?Sized> Default for Listeners<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for Listeners<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}

/// Subscribe-only view of an observable.
///
/// Holds the current value for reading and the listener registry for
/// (un)subscribing. There is no way to write through a `Watch`.
pub struct Watch<'a, T: ?Sized> {
    value: &'a T,
    listeners: &'a mut Listeners<T>,
}

impl<'a, T: ?Sized> Watch<'a, T> {
    pub(crate) fn new(value: &'a T, listeners: &'a mut Listeners<T>) -> Self {
        Self { value, listeners }
    }

    pub fn get(&self) -> &T {
        self.value
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&T) + 'static) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }
}
