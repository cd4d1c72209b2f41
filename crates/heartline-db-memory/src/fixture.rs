//! JSON fixture format for seeding an [`InMemoryStore`].
//!
//! ```json
//! {
//!   "questionnaires": { "kccq": { "url": "...", "item": [] } },
//!   "users": {
//!     "patient-1": {
//!       "profile": { "type": "patient", "organization": "stanford" },
//!       "collections": {
//!         "appointments": { "a1": { "status": "booked", "start": "...", "end": "..." } }
//!       }
//!     }
//!   }
//! }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use heartline_storage::{Selector, StorageError, UserCollection};

use crate::storage::InMemoryStore;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub questionnaires: IndexMap<String, Value>,
    #[serde(default)]
    pub users: IndexMap<String, FixtureUser>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FixtureUser {
    pub profile: Value,
    /// Collection name -> document ID -> document.
    #[serde(default)]
    pub collections: IndexMap<String, IndexMap<String, Value>>,
}

impl Fixture {
    pub fn from_json(json: &str) -> Result<Self, StorageError> {
        serde_json::from_str(json)
            .map_err(|e| StorageError::internal(format!("Invalid fixture: {e}")))
    }
}

impl InMemoryStore {
    /// Creates a store holding every document of `fixture`, in fixture order.
    ///
    /// # Errors
    ///
    /// Fails on unknown collection names or invalid document IDs.
    pub fn from_fixture(fixture: Fixture) -> Result<Self, StorageError> {
        let store = Self::new();

        for (id, questionnaire) in fixture.questionnaires {
            store.insert(&Selector::Questionnaires, &id, questionnaire)?;
        }

        for (user_id, user) in fixture.users {
            store.insert(&Selector::Users, &user_id, user.profile)?;

            for (name, documents) in user.collections {
                let collection = UserCollection::from_name(&name).ok_or_else(|| {
                    StorageError::internal(format!(
                        "Unknown collection '{name}' for user {user_id}"
                    ))
                })?;
                let selector = Selector::user_collection(user_id.as_str(), collection);
                for (id, document) in documents {
                    store.insert(&selector, &id, document)?;
                }
            }
        }

        tracing::debug!(documents = store.len(), "Loaded fixture into in-memory store");
        Ok(store)
    }
}
