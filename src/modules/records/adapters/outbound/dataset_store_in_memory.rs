// In memory implementation of the DatasetStore port.
//
// Purpose
// - Support record service tests and local development without touching the disk.
//
// Responsibilities
// - Keep one dataset snapshot behind a lock.
// - Simulate an unwritable medium when switched to read-only.

use crate::modules::records::adapters::outbound::dataset_store::{DatasetStore, StoreError};
use crate::modules::records::core::dataset::Dataset;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryDatasetStore {
    inner: RwLock<Dataset>,
    saves: RwLock<usize>,
    is_read_only: bool,
}

impl InMemoryDatasetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dataset(dataset: Dataset) -> Self {
        Self {
            inner: RwLock::new(dataset),
            ..Self::default()
        }
    }

    pub fn toggle_read_only(&mut self) {
        self.is_read_only = !self.is_read_only;
    }

    pub async fn snapshot(&self) -> Dataset {
        self.inner.read().await.clone()
    }

    pub async fn save_count(&self) -> usize {
        *self.saves.read().await
    }
}

#[async_trait::async_trait]
impl DatasetStore for InMemoryDatasetStore {
    async fn load(&self) -> Dataset {
        self.inner.read().await.clone()
    }

    async fn save(&self, dataset: &Dataset) -> Result<(), StoreError> {
        if self.is_read_only {
            return Err(StoreError::ReadOnly);
        }
        *self.inner.write().await = dataset.clone();
        *self.saves.write().await += 1;
        Ok(())
    }
}
