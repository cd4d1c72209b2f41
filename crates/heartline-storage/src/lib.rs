//! # heartline-storage
//!
//! Storage abstraction for the Heartline exporter.
//!
//! The exporter reads from a document store shaped like the ENGAGE-HF
//! Firestore layout: a `users` collection holding patient profiles, a
//! top-level `questionnaires` collection, and per-user sub-collections
//! (`users/{id}/appointments`, `users/{id}/bloodPressureObservations`, ...).
//!
//! This crate only defines the contract. Backends live in separate crates
//! (see `heartline-db-memory`).
//!
//! ## Example
//!
//! ```ignore
//! use heartline_core::Appointment;
//! use heartline_storage::{query_as, ClinicalStore, Selector, UserCollection};
//!
//! async fn appointments(store: &dyn ClinicalStore, user_id: &str) -> StorageResult<usize> {
//!     let selector = Selector::user_collection(user_id, UserCollection::Appointments);
//!     let records = query_as::<Appointment>(store, &selector).await?;
//!     Ok(records.len())
//! }
//! ```

mod error;
mod traits;
mod types;

pub use error::{ErrorCategory, StorageError};
pub use traits::{ClinicalStore, query_as};
pub use types::{ClinicalRecord, Selector, StoredDocument, UserCollection};

/// Type alias for a storage result.
pub type StorageResult<T> = Result<T, StorageError>;

/// Type alias for a shareable store trait object.
pub type DynStore = std::sync::Arc<dyn ClinicalStore>;
