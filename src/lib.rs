//! # gwt-state
//!
//! A typed state container for Given/When/Then style tests.
//!
//! `gwt-state` lets a test register arbitrary values during its *given* and
//! *when* steps and look them up again by type in its *then* step. Several
//! values of one type can be told apart by an index or a name.
//!
//! ## Key Features
//!
//! - **Type-keyed**: Values are stored and retrieved by their static type
//! - **Keyed or not**: Register plainly, at an index, or under a name
//! - **Deterministic listing**: `get_all` orders indexed values by index, then
//!   everything else by registration order
//! - **Per-test**: A container belongs to one test; there is no global state
//!
//! ## Usage Examples
//!
//! ### Basic Usage
//!
//! ```rust
//! use gwt_state::{StateContainer, StateError};
//!
//! #[derive(Debug, PartialEq)]
//! struct User { name: String }
//!
//! fn main() -> Result<(), StateError> {
//!     let mut state = StateContainer::new();
//!
//!     // Register directly, or through the builder
//!     state.use_value(User { name: "alice".to_string() });
//!     state.set::<User>().at_index(0).to(User { name: "bob".to_string() });
//!     state.set::<User>().named("admin").to(User { name: "root".to_string() });
//!
//!     assert_eq!(state.get::<User>()?.name, "alice");
//!     assert_eq!(state.get_at::<User>(0)?.name, "bob");
//!     assert_eq!(state.get_named::<User>("admin")?.name, "root");
//!     assert_eq!(state.get_all::<User>().len(), 3);
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Error Handling
//!
//! ```rust
//! use gwt_state::{LookupKey, StateContainer, StateError};
//!
//! let mut state = StateContainer::new();
//! state.use_value(1u8).use_value(2u8);
//!
//! match state.get::<u8>() {
//!     Ok(value) => println!("Value: {}", value),
//!     Err(StateError::AmbiguousOrNotFound { candidates, .. }) => {
//!         println!("{} unkeyed candidates", candidates)
//!     }
//!     Err(e) => println!("Other error: {}", e),
//! }
//!
//! match state.get_named::<u8>("missing") {
//!     Err(StateError::NotFound { key: LookupKey::Name(name), .. }) => {
//!         println!("Nothing named {}", name)
//!     }
//!     other => println!("{:?}", other),
//! }
//! ```

mod container;
mod entry;
mod error;
mod scenario;
mod setter;

pub use container::StateContainer;
pub use error::{LookupKey, Result, StateError};
pub use scenario::{Phase, Scenario};
pub use setter::{KeyedSetter, Setter};
