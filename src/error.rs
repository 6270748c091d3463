use std::fmt;

/// The key a lookup was made with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupKey {
    Index(usize),
    Name(String),
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LookupKey::Index(index) => write!(f, "index {}", index),
            LookupKey::Name(name) => write!(f, "name {:?}", name),
        }
    }
}

/// Errors that can occur when reading from a `StateContainer`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// A lookup by index or name matched no entry of the requested type
    #[error("no {type_name} registered under {key}")]
    NotFound {
        type_name: &'static str,
        key: LookupKey,
    },

    /// A lookup without a key found zero or several unkeyed entries
    #[error("expected exactly one unkeyed {type_name}, found {candidates}")]
    AmbiguousOrNotFound {
        type_name: &'static str,
        candidates: usize,
    },
}

pub type Result<T> = std::result::Result<T, StateError>;
