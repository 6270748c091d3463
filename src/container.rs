use crate::entry::{Entry, EntryKey};
use crate::error::{LookupKey, Result, StateError};
use crate::setter::Setter;
use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use tracing::{debug, trace};

/// A per-test store of values keyed by their type
///
/// Several values of the same type can live side by side, told apart by an
/// optional index or name. Create one container per test and let it drop at
/// the end; nothing is shared between containers.
///
/// # Examples
///
/// ```
/// use gwt_state::{StateContainer, StateError};
///
/// #[derive(Debug, PartialEq)]
/// struct Account { owner: String }
///
/// let mut state = StateContainer::new();
/// state
///     .set::<Account>().at_index(1).to(Account { owner: "bob".into() })
///     .set::<Account>().at_index(0).to(Account { owner: "alice".into() })
///     .set::<Account>().named("admin").to(Account { owner: "root".into() });
///
/// assert_eq!(state.get_at::<Account>(0)?.owner, "alice");
/// assert_eq!(state.get_named::<Account>("admin")?.owner, "root");
///
/// let owners: Vec<&str> = state
///     .get_all::<Account>()
///     .into_iter()
///     .map(|account| account.owner.as_str())
///     .collect();
/// assert_eq!(owners, ["alice", "bob", "root"]);
/// # Ok::<(), StateError>(())
/// ```
#[derive(Debug, Default)]
pub struct StateContainer {
    items: HashMap<TypeId, Vec<Entry>>,
    next_seq: u64,
}

impl StateContainer {
    /// Creates a new, empty container
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a registration for type `T`
    ///
    /// # Examples
    ///
    /// ```
    /// use gwt_state::StateContainer;
    ///
    /// let mut state = StateContainer::new();
    /// state.set::<u32>().to(7);
    /// state.set::<u32>().named("limit").to(100);
    ///
    /// assert_eq!(state.get::<u32>(), Ok(&7));
    /// assert_eq!(state.get_named::<u32>("limit"), Ok(&100));
    /// ```
    pub fn set<T: Any>(&mut self) -> Setter<'_, T> {
        Setter::new(self)
    }

    /// Registers `value` without a key, inferring its type
    ///
    /// Same as `set::<T>().to(value)`.
    pub fn use_value<T: Any>(&mut self, value: T) -> &mut Self {
        self.insert(EntryKey::Unkeyed, value)
    }

    pub(crate) fn insert<T: Any>(&mut self, key: EntryKey, value: T) -> &mut Self {
        let entries = self.items.entry(TypeId::of::<T>()).or_default();

        let existing = match key {
            EntryKey::Unkeyed => None,
            ref keyed => entries.iter_mut().find(|entry| entry.key == *keyed),
        };

        match existing {
            Some(entry) => {
                trace!(type_name = type_name::<T>(), key = ?key, "replaced state entry");
                entry.replace(value);
            }
            None => {
                trace!(type_name = type_name::<T>(), key = ?key, "registered state entry");
                entries.push(Entry::new(key, self.next_seq, value));
                self.next_seq += 1;
            }
        }
        self
    }

    fn entries_of<T: Any>(&self) -> impl Iterator<Item = (&Entry, &T)> + '_ {
        self.items
            .get(&TypeId::of::<T>())
            .into_iter()
            .flatten()
            .filter_map(|entry| entry.downcast_ref::<T>().map(|value| (entry, value)))
    }

    /// Retrieves the single unkeyed value of type `T`
    ///
    /// # Errors
    ///
    /// Returns `StateError::AmbiguousOrNotFound` if there is no unkeyed value
    /// of type `T`, or more than one. Indexed and named values are never
    /// candidates here.
    pub fn get<T: Any>(&self) -> Result<&T> {
        let candidates: Vec<&T> = self
            .entries_of::<T>()
            .filter(|(entry, _)| entry.key == EntryKey::Unkeyed)
            .map(|(_, value)| value)
            .collect();

        match candidates.as_slice() {
            [only] => Ok(*only),
            _ => {
                debug!(
                    type_name = type_name::<T>(),
                    candidates = candidates.len(),
                    "unkeyed state lookup failed"
                );
                Err(StateError::AmbiguousOrNotFound {
                    type_name: type_name::<T>(),
                    candidates: candidates.len(),
                })
            }
        }
    }

    /// Retrieves the value of type `T` registered at `index`
    ///
    /// # Errors
    ///
    /// Returns `StateError::NotFound` if no value of type `T` has that index.
    pub fn get_at<T: Any>(&self, index: usize) -> Result<&T> {
        self.find_keyed(&EntryKey::Index(index))
            .ok_or_else(|| Self::not_found::<T>(LookupKey::Index(index)))
    }

    /// Retrieves the value of type `T` registered under `name`
    ///
    /// # Errors
    ///
    /// Returns `StateError::NotFound` if no value of type `T` has that name.
    pub fn get_named<T: Any>(&self, name: &str) -> Result<&T> {
        self.find_keyed(&EntryKey::Name(name.to_string()))
            .ok_or_else(|| Self::not_found::<T>(LookupKey::Name(name.to_string())))
    }

    fn find_keyed<T: Any>(&self, key: &EntryKey) -> Option<&T> {
        self.entries_of::<T>()
            .find(|(entry, _)| entry.key == *key)
            .map(|(_, value)| value)
    }

    fn not_found<T: Any>(key: LookupKey) -> StateError {
        debug!(type_name = type_name::<T>(), key = %key, "keyed state lookup failed");
        StateError::NotFound {
            type_name: type_name::<T>(),
            key,
        }
    }

    /// Retrieves a clone of the single unkeyed value of type `T`
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub fn get_cloned<T: Any + Clone>(&self) -> Result<T> {
        self.get::<T>().cloned()
    }

    /// Runs a closure against the single unkeyed value of type `T`
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub fn with<T: Any, F, R>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&T) -> R,
    {
        self.get::<T>().map(f)
    }

    /// Returns every value of type `T`
    ///
    /// Indexed values come first in ascending index order, followed by all
    /// other values (unkeyed and named) in the order they were registered.
    /// Returns an empty vector if nothing of type `T` was registered.
    pub fn get_all<T: Any>(&self) -> Vec<&T> {
        let mut entries: Vec<(&Entry, &T)> = self.entries_of::<T>().collect();
        entries.sort_by_key(|(entry, _)| entry.merge_order());
        entries.into_iter().map(|(_, value)| value).collect()
    }

    /// Returns true if at least one value of type `T` is registered
    pub fn contains<T: Any>(&self) -> bool {
        self.count::<T>() > 0
    }

    /// Returns the number of values of type `T`, keyed or not
    pub fn count<T: Any>(&self) -> usize {
        self.items.get(&TypeId::of::<T>()).map_or(0, Vec::len)
    }

    /// Returns the number of values across all types
    pub fn len(&self) -> usize {
        self.items.values().map(Vec::len).sum()
    }

    /// Returns true if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every value from the container
    pub fn clear(&mut self) {
        self.items.clear();
    }
}
