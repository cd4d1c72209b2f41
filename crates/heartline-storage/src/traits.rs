//! The store contract consumed by the exporter.

use async_trait::async_trait;
use heartline_core::PatientProfile;
use serde::de::DeserializeOwned;

use crate::error::StorageError;
use crate::types::{ClinicalRecord, Selector, StoredDocument};

/// Read access to a clinical document store.
///
/// Each call is expected to return a complete, consistent snapshot of the
/// selected collection; the exporter opens no transaction of its own.
/// Implementations must be thread-safe (`Send + Sync`).
#[async_trait]
pub trait ClinicalStore: Send + Sync {
    /// Returns every document of the selected collection, in the store's
    /// natural order. An empty or unknown collection yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns an error only for infrastructure issues.
    async fn query(&self, selector: &Selector) -> Result<Vec<StoredDocument>, StorageError>;

    /// Reads one user profile by ID.
    ///
    /// Returns `None` if the user does not exist.
    async fn get_user(
        &self,
        user_id: &str,
    ) -> Result<Option<ClinicalRecord<PatientProfile>>, StorageError>;

    /// Returns all users whose profile type is `patient`.
    async fn get_all_patients(&self) -> Result<Vec<ClinicalRecord<PatientProfile>>, StorageError>;

    /// Returns the name of this storage backend for logging/debugging.
    fn backend_name(&self) -> &'static str;
}

/// Queries `selector` and decodes every document into `T`.
///
/// # Errors
///
/// Propagates query errors; a document that does not decode fails the whole
/// query with [`StorageError::InvalidDocument`].
pub async fn query_as<T: DeserializeOwned>(
    store: &dyn ClinicalStore,
    selector: &Selector,
) -> Result<Vec<ClinicalRecord<T>>, StorageError> {
    let documents = store.query(selector).await?;
    let path = selector.path();
    tracing::trace!(path = %path, count = documents.len(), "Decoding documents");
    documents
        .into_iter()
        .map(|document| document.decode(&path))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UserCollection;
    use heartline_core::SymptomScore;
    use serde_json::json;

    // Compile-time test that ClinicalStore is object-safe
    fn _assert_store_object_safe(_: &dyn ClinicalStore) {}

    struct FixedStore(Vec<StoredDocument>);

    #[async_trait]
    impl ClinicalStore for FixedStore {
        async fn query(&self, _selector: &Selector) -> Result<Vec<StoredDocument>, StorageError> {
            Ok(self.0.clone())
        }

        async fn get_user(
            &self,
            _user_id: &str,
        ) -> Result<Option<ClinicalRecord<PatientProfile>>, StorageError> {
            Ok(None)
        }

        async fn get_all_patients(
            &self,
        ) -> Result<Vec<ClinicalRecord<PatientProfile>>, StorageError> {
            Ok(Vec::new())
        }

        fn backend_name(&self) -> &'static str {
            "fixed"
        }
    }

    #[tokio::test]
    async fn test_query_as_preserves_order() {
        let store = FixedStore(vec![
            StoredDocument::new(
                "s2",
                json!({"date": "2024-01-02T00:00:00Z", "overallScore": 50, "dizzinessScore": 1}),
            ),
            StoredDocument::new(
                "s1",
                json!({"date": "2024-01-01T00:00:00Z", "overallScore": 40, "dizzinessScore": 2}),
            ),
        ]);
        let selector = Selector::user_collection("u1", UserCollection::SymptomScores);

        let records = query_as::<SymptomScore>(&store, &selector).await.unwrap();
        let ids: Vec<_> = records.iter().map(|record| record.id.as_str()).collect();
        assert_eq!(ids, vec!["s2", "s1"]);
        assert_eq!(records[0].content.overall_score, 50.0);
    }

    #[tokio::test]
    async fn test_query_as_rejects_invalid_document() {
        let store = FixedStore(vec![StoredDocument::new("s1", json!({"overallScore": 40}))]);
        let selector = Selector::user_collection("u1", UserCollection::SymptomScores);

        let err = query_as::<SymptomScore>(&store, &selector)
            .await
            .unwrap_err();
        assert!(err.is_invalid_document());
        assert!(err.to_string().contains("users/u1/symptomScores/s1"));
    }
}
