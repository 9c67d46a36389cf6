use super::listeners::{Listeners, Watch};

/// Observable ordered sequence.
///
/// Appends, in-place updates and whole replacement each notify once with the
/// full contents.
#[derive(Debug)]
pub struct ObservableList<T> {
    items: Vec<T>,
    version: u64,
    listeners: Listeners<[T]>,
}

impl<T> ObservableList<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            version: 0,
            listeners: Listeners::new(),
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.changed();
    }

    /// Replaces the whole sequence atomically.
    pub fn replace(&mut self, items: Vec<T>) {
        self.items = items;
        self.changed();
    }

    /// Mutates every element, notifying once if `f` reported a change for any.
    pub fn update_each(&mut self, mut f: impl FnMut(&mut T) -> bool) -> bool {
        let mut any = false;
        for item in &mut self.items {
            any |= f(item);
        }
        if any {
            self.changed();
        }
        any
    }

    pub fn watch(&mut self) -> Watch<'_, [T]> {
        Watch::new(&self.items, &mut self.listeners)
    }

    fn changed(&mut self) {
        self.version += 1;
        self.listeners.notify(&self.items);
    }
}

impl<T: PartialEq> ObservableList<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }
}

impl<T> Default for ObservableList<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn push_and_update_notify_with_contents() {
        let lengths = Rc::new(RefCell::new(Vec::new()));
        let mut list = ObservableList::new(vec![1u32]);
        {
            let lengths = Rc::clone(&lengths);
            list.watch()
                .subscribe(move |items: &[u32]| lengths.borrow_mut().push(items.to_vec()));
        }

        list.push(2);
        assert!(!list.update_each(|_| false));
        assert!(list.update_each(|v| {
            *v *= 10;
            true
        }));

        assert_eq!(list.as_slice(), &[10, 20]);
        assert_eq!(list.version(), 2);
        assert_eq!(*lengths.borrow(), vec![vec![1, 2], vec![10, 20]]);
    }
}
