//! In-memory document store for the Heartline exporter.
//!
//! This crate provides an in-memory implementation of the `ClinicalStore`
//! trait from `heartline-storage`, using papaya lock-free HashMap for
//! concurrent access. It backs the test suites and the CLI, which seeds it
//! from a JSON [`Fixture`].
//!
//! # Example
//!
//! ```ignore
//! use heartline_db_memory::InMemoryStore;
//! use heartline_storage::{Selector, UserCollection};
//!
//! let store = InMemoryStore::new();
//! store.insert(&Selector::Users, "patient-1", json!({"type": "patient"}))?;
//! store.insert(
//!     &Selector::user_collection("patient-1", UserCollection::Messages),
//!     "message-1",
//!     json!({"type": "Vitals", "title": "Measure vitals", "creationDate": "2024-01-01T00:00:00Z"}),
//! )?;
//! ```

mod fixture;
mod storage;

pub use fixture::{Fixture, FixtureUser};
pub use heartline_storage::{ClinicalStore, StorageError, StoredDocument};
pub use storage::{InMemoryStore, StorageKey};
