//! Storage Adapters
//!
//! Implementations of the `SessionStore` port for partial wizard state.
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::InMemorySessionStore;
//!
//! let store = InMemorySessionStore::new();
//! ```

mod in_memory_session_store;

pub use in_memory_session_store::InMemorySessionStore;
