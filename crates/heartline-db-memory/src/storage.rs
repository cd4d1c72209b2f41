use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use heartline_core::PatientProfile;
use heartline_storage::{ClinicalRecord, ClinicalStore, Selector, StorageError, StoredDocument};
use papaya::HashMap as PapayaHashMap;
use serde_json::Value;

pub type StorageKey = String; // Format: "collection/path/id"

fn make_storage_key(path: &str, id: &str) -> StorageKey {
    format!("{path}/{id}")
}

#[derive(Debug, Clone)]
struct Entry {
    /// Insertion sequence; queries return documents in this order.
    sequence: u64,
    path: String,
    document: StoredDocument,
}

/// In-memory document store using papaya lock-free HashMap.
///
/// Documents are addressed by collection path and ID. Queries return a
/// collection in insertion order; re-inserting an existing ID replaces the
/// document and moves it to the end.
#[derive(Debug)]
pub struct InMemoryStore {
    data: Arc<PapayaHashMap<StorageKey, Entry>>,
    sequence: AtomicU64,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    /// Creates a new, empty store.
    pub fn new() -> Self {
        Self {
            data: Arc::new(PapayaHashMap::new()),
            sequence: AtomicU64::new(1),
        }
    }

    fn next_sequence(&self) -> u64 {
        self.sequence.fetch_add(1, Ordering::SeqCst)
    }

    /// Inserts or replaces the document `id` in the selected collection.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::InvalidDocument` if the ID is empty or contains `/`.
    pub fn insert(
        &self,
        selector: &Selector,
        id: &str,
        content: Value,
    ) -> Result<(), StorageError> {
        let path = selector.path();
        if id.is_empty() || id.contains('/') {
            return Err(StorageError::invalid_document(
                path,
                id,
                "document IDs must be non-empty and must not contain '/'",
            ));
        }

        let entry = Entry {
            sequence: self.next_sequence(),
            path: path.clone(),
            document: StoredDocument::new(id, content),
        };
        let guard = self.data.pin();
        guard.insert(make_storage_key(&path, id), entry);
        Ok(())
    }

    /// Number of documents across all collections.
    pub fn len(&self) -> usize {
        self.data.pin().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn collection(&self, path: &str) -> Vec<StoredDocument> {
        let guard = self.data.pin();
        let mut entries: Vec<&Entry> = guard
            .iter()
            .filter(|(_, entry)| entry.path == path)
            .map(|(_, entry)| entry)
            .collect();
        entries.sort_by_key(|entry| entry.sequence);
        entries
            .into_iter()
            .map(|entry| entry.document.clone())
            .collect()
    }
}

#[async_trait]
impl ClinicalStore for InMemoryStore {
    async fn query(&self, selector: &Selector) -> Result<Vec<StoredDocument>, StorageError> {
        Ok(self.collection(&selector.path()))
    }

    async fn get_user(
        &self,
        user_id: &str,
    ) -> Result<Option<ClinicalRecord<PatientProfile>>, StorageError> {
        let path = Selector::Users.path();
        let document = {
            let guard = self.data.pin();
            guard
                .get(&make_storage_key(&path, user_id))
                .map(|entry| entry.document.clone())
        };
        document.map(|document| document.decode(&path)).transpose()
    }

    async fn get_all_patients(&self) -> Result<Vec<ClinicalRecord<PatientProfile>>, StorageError> {
        let path = Selector::Users.path();
        let mut patients = Vec::new();
        for document in self.collection(&path) {
            let record = document.decode::<PatientProfile>(&path)?;
            if record.content.is_patient() {
                patients.push(record);
            }
        }
        Ok(patients)
    }

    fn backend_name(&self) -> &'static str {
        "in-memory-papaya"
    }
}
