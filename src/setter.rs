use crate::container::StateContainer;
use crate::entry::EntryKey;
use std::any::Any;
use std::marker::PhantomData;

/// Builder returned by [`StateContainer::set`]
///
/// Call [`to`](Setter::to) to register an unkeyed value, or pick a key first
/// with [`at_index`](Setter::at_index) or [`named`](Setter::named). A
/// registration carries at most one key.
#[must_use = "nothing is stored until `to` is called"]
pub struct Setter<'a, T> {
    state: &'a mut StateContainer,
    _marker: PhantomData<fn(T)>,
}

impl<'a, T: Any> Setter<'a, T> {
    pub(crate) fn new(state: &'a mut StateContainer) -> Self {
        Self {
            state,
            _marker: PhantomData,
        }
    }

    /// Registers the value under an explicit position among entries of `T`
    pub fn at_index(self, index: usize) -> KeyedSetter<'a, T> {
        KeyedSetter {
            state: self.state,
            key: EntryKey::Index(index),
            _marker: PhantomData,
        }
    }

    /// Registers the value under a name
    pub fn named(self, name: impl Into<String>) -> KeyedSetter<'a, T> {
        KeyedSetter {
            state: self.state,
            key: EntryKey::Name(name.into()),
            _marker: PhantomData,
        }
    }

    /// Stores `value` without a key, after any unkeyed values of `T`
    /// registered before it
    pub fn to(self, value: T) -> &'a mut StateContainer {
        self.state.insert(EntryKey::Unkeyed, value)
    }
}

/// A [`Setter`] with its key chosen
#[must_use = "nothing is stored until `to` is called"]
pub struct KeyedSetter<'a, T> {
    state: &'a mut StateContainer,
    key: EntryKey,
    _marker: PhantomData<fn(T)>,
}

impl<'a, T: Any> KeyedSetter<'a, T> {
    /// Stores `value` under the chosen key, replacing whatever was there
    pub fn to(self, value: T) -> &'a mut StateContainer {
        self.state.insert(self.key, value)
    }
}
