//! Storage types: selectors, raw documents and typed records.

use std::fmt;

use heartline_core::ObservationCategory;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::StorageError;

/// A document as returned by the store: its ID and raw JSON content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredDocument {
    pub id: String,
    pub content: Value,
}

impl StoredDocument {
    #[must_use]
    pub fn new(id: impl Into<String>, content: Value) -> Self {
        Self {
            id: id.into(),
            content,
        }
    }

    /// Decodes the content into `T`.
    ///
    /// `path` is only used to give the error some context.
    pub fn decode<T: DeserializeOwned>(self, path: &str) -> Result<ClinicalRecord<T>, StorageError> {
        let content = serde_json::from_value(self.content)
            .map_err(|e| StorageError::invalid_document(path, &self.id, e.to_string()))?;
        Ok(ClinicalRecord {
            id: self.id,
            content,
        })
    }
}

/// A typed, immutable snapshot of one stored document.
#[derive(Debug, Clone, PartialEq)]
pub struct ClinicalRecord<T> {
    pub id: String,
    pub content: T,
}

impl<T> ClinicalRecord<T> {
    #[must_use]
    pub fn new(id: impl Into<String>, content: T) -> Self {
        Self {
            id: id.into(),
            content,
        }
    }
}

/// Per-user sub-collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserCollection {
    Appointments,
    MedicationRequests,
    Messages,
    Observations(ObservationCategory),
    QuestionnaireResponses,
    SymptomScores,
}

impl UserCollection {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Appointments => "appointments",
            Self::MedicationRequests => "medicationRequests",
            Self::Messages => "messages",
            Self::Observations(category) => category.collection_name(),
            Self::QuestionnaireResponses => "questionnaireResponses",
            Self::SymptomScores => "symptomScores",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "appointments" => Some(Self::Appointments),
            "medicationRequests" => Some(Self::MedicationRequests),
            "messages" => Some(Self::Messages),
            "questionnaireResponses" => Some(Self::QuestionnaireResponses),
            "symptomScores" => Some(Self::SymptomScores),
            other => ObservationCategory::from_collection_name(other).map(Self::Observations),
        }
    }
}

impl fmt::Display for UserCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identifies one collection to query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    /// The `users` collection (patient profiles).
    Users,
    /// The top-level `questionnaires` collection.
    Questionnaires,
    /// A sub-collection of one user.
    UserCollection {
        user_id: String,
        collection: UserCollection,
    },
}

impl Selector {
    #[must_use]
    pub fn user_collection(user_id: impl Into<String>, collection: UserCollection) -> Self {
        Self::UserCollection {
            user_id: user_id.into(),
            collection,
        }
    }

    /// Slash-separated collection path, e.g. `users/u1/messages`.
    pub fn path(&self) -> String {
        match self {
            Self::Users => "users".to_string(),
            Self::Questionnaires => "questionnaires".to_string(),
            Self::UserCollection {
                user_id,
                collection,
            } => format!("users/{user_id}/{}", collection.name()),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
