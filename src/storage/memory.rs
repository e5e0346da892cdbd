use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

use crate::service::{ActivationRecord, StoredActivation};

use super::{ActivationStore, StorageError};

/// In-process store, used in place of Firebase in tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    records: Arc<DashMap<String, StoredActivation>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> Vec<(String, StoredActivation)> {
        self.records
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    /// Puts a record as-is, bypassing `ActivationRecord` typing.
    pub fn insert_raw(&self, user_id: &str, stored: StoredActivation) {
        self.records.insert(user_id.to_string(), stored);
    }
}

#[async_trait]
impl ActivationStore for MemoryStore {
    async fn set(&self, user_id: &str, record: &ActivationRecord) -> Result<(), StorageError> {
        self.records.insert(user_id.to_string(), StoredActivation::from(record));
        Ok(())
    }

    async fn get(&self, user_id: &str) -> Result<Option<StoredActivation>, StorageError> {
        Ok(self.records.get(user_id).map(|entry| entry.value().clone()))
    }
}
