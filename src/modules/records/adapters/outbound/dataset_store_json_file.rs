// JSON file implementation of the DatasetStore port.
//
// Purpose
// - Persist the dataset as a single JSON document on local disk.
//
// Responsibilities
// - Treat a missing, unreadable or corrupt file as an empty dataset, logging the recovery.
// - Move an unreadable or corrupt file aside to `<name>.corrupt-<timestamp>` so the next save
//   cannot overwrite the only copy.
// - Write and sync a sibling temporary file, then rename it over the target, so neither a
//   reader nor a crash ever leaves half a document in place.

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use tokio::io::AsyncWriteExt;
use tracing::{debug, error, warn};

use crate::modules::records::adapters::outbound::dataset_store::{DatasetStore, StoreError};
use crate::modules::records::core::dataset::Dataset;

#[derive(Debug, Clone)]
pub struct JsonFileDatasetStore {
    path: PathBuf,
}

impl JsonFileDatasetStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn sibling_path(&self, suffix: &str) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("data.json"));
        name.push(suffix);
        self.path.with_file_name(name)
    }

    fn staging_path(&self) -> PathBuf {
        self.sibling_path(".tmp")
    }

    async fn set_aside(&self) {
        let stamp = Utc::now().format("%Y%m%dT%H%M%S%.6fZ");
        let target = self.sibling_path(&format!(".corrupt-{stamp}"));
        match tokio::fs::rename(&self.path, &target).await {
            Ok(()) => warn!(
                path = %self.path.display(),
                moved_to = %target.display(),
                "unusable data file moved aside"
            ),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => error!(
                path = %self.path.display(),
                error = %e,
                "could not move unusable data file aside, next save will replace it"
            ),
        }
    }
}

#[async_trait]
impl DatasetStore for JsonFileDatasetStore {
    async fn load(&self) -> Dataset {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no data file yet, starting empty");
                return Dataset::default();
            }
            Err(error) => {
                warn!(path = %self.path.display(), %error, "data file unreadable, starting empty");
                self.set_aside().await;
                return Dataset::default();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(dataset) => dataset,
            Err(error) => {
                warn!(path = %self.path.display(), %error, "data file corrupt, starting empty");
                self.set_aside().await;
                Dataset::default()
            }
        }
    }

    async fn save(&self, dataset: &Dataset) -> Result<(), StoreError> {
        let json = serde_json::to_vec(dataset)?;
        let staging = self.staging_path();
        let mut file = tokio::fs::File::create(&staging).await?;
        file.write_all(&json).await?;
        file.sync_all().await?;
        drop(file);
        tokio::fs::rename(&staging, &self.path).await?;
        debug!(
            path = %self.path.display(),
            projects = dataset.projects.len(),
            employees = dataset.employees.len(),
            time_entries = dataset.time_entries.len(),
            "dataset saved"
        );
        Ok(())
    }
}
