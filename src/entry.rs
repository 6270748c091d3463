use std::any::Any;

/// How an entry was registered
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum EntryKey {
    Unkeyed,
    Index(usize),
    Name(String),
}

/// A type-erased registered value together with its key
#[derive(Debug)]
pub(crate) struct Entry {
    pub(crate) key: EntryKey,
    /// Registration order across the whole container.
    seq: u64,
    value: Box<dyn Any>,
}

impl Entry {
    pub(crate) fn new<T: Any>(key: EntryKey, seq: u64, value: T) -> Self {
        Self {
            key,
            seq,
            value: Box::new(value),
        }
    }

    /// Swap in a new value, keeping key and registration position
    pub(crate) fn replace<T: Any>(&mut self, value: T) {
        self.value = Box::new(value);
    }

    /// Get a reference to the contained value if it is of type T
    pub(crate) fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    /// Sort key for listing: indexed entries by index, then the rest by
    /// registration order.
    pub(crate) fn merge_order(&self) -> (bool, usize, u64) {
        match self.key {
            EntryKey::Index(index) => (false, index, self.seq),
            _ => (true, 0, self.seq),
        }
    }
}
