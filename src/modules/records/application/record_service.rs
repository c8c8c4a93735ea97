// Record service orchestrates every read and write against the dataset store.
//
// Responsibilities
// - Own the single-writer lock. A write holds it for the whole load, decide, mutate and save
//   sequence, so two writers can never both start from the same snapshot.
// - Let readers share the lock so they never observe a write in progress.
// - Hand out "now" from the injected clock.
//
// The operations themselves live next to their use case, in each `handler.rs`.

use std::sync::Arc;

use chrono::{DateTime, Local};
use tokio::sync::RwLock;

use crate::modules::records::adapters::outbound::dataset_store::DatasetStore;
use crate::modules::records::application::errors::RecordError;
use crate::modules::records::core::dataset::Dataset;
use crate::shared::core::clock::Clock;

pub struct RecordService {
    store: Arc<dyn DatasetStore>,
    clock: Arc<dyn Clock>,
    lock: RwLock<()>,
}

impl RecordService {
    pub fn new(store: Arc<dyn DatasetStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            lock: RwLock::new(()),
        }
    }

    pub(crate) fn now(&self) -> DateTime<Local> {
        self.clock.now()
    }

    pub(crate) async fn read<T>(&self, query: impl FnOnce(&Dataset) -> T) -> T {
        let _guard = self.lock.read().await;
        let dataset = self.store.load().await;
        query(&dataset)
    }

    /// Runs `mutation` on a fresh snapshot and persists the result.
    ///
    /// When `mutation` fails nothing is saved.
    pub(crate) async fn write<T>(
        &self,
        mutation: impl FnOnce(&mut Dataset) -> Result<T, RecordError>,
    ) -> Result<T, RecordError> {
        let _guard = self.lock.write().await;
        let mut dataset = self.store.load().await;
        let outcome = mutation(&mut dataset)?;
        self.store.save(&dataset).await?;
        Ok(outcome)
    }
}
