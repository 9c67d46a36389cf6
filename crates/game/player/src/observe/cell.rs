use super::listeners::{Listeners, Watch};

/// Single observable value.
#[derive(Debug)]
pub struct Observable<T> {
    value: T,
    version: u64,
    listeners: Listeners<T>,
}

impl<T> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            version: 0,
            listeners: Listeners::new(),
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Incremented on every effective write.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn watch(&mut self) -> Watch<'_, T> {
        Watch::new(&self.value, &mut self.listeners)
    }
}

impl<T: PartialEq> Observable<T> {
    /// Replaces the value and notifies listeners.
    ///
    /// Returns false (and stays silent) when the new value equals the old one.
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        self.version += 1;
        self.listeners.notify(&self.value);
        true
    }
}

impl<T: Copy + PartialEq> Observable<T> {
    /// Reads, transforms and writes back in one step.
    pub fn update(&mut self, f: impl FnOnce(T) -> T) -> bool {
        let next = f(self.value);
        self.set(next)
    }
}

impl<T: Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
