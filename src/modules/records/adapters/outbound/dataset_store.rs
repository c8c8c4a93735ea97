// Port for durable storage of the dataset.
//
// The dataset is loaded and saved as a whole; there is no partial access and no locking here.
// Serialising writers is the job of the record service.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::records::core::dataset::Dataset;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("store is read-only")]
    ReadOnly,
}

#[async_trait]
pub trait DatasetStore: Send + Sync {
    /// Returns the persisted dataset, or an empty one when nothing usable is stored.
    async fn load(&self) -> Dataset;

    /// Replaces the persisted dataset. Either all of it is written or none of it.
    async fn save(&self, dataset: &Dataset) -> Result<(), StoreError>;
}
