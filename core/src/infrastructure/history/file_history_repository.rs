use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_uuid_v7},
    history::{entities::HistoryItem, ports::HistoryRepository, services::HISTORY_KEY},
};

/// Keeps the history entry as one JSON document in a data directory.
#[derive(Debug, Clone)]
pub struct FileHistoryRepository {
    path: PathBuf,
}

impl FileHistoryRepository {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(format!("{}.json", HISTORY_KEY)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Unique per write so concurrent stores never share a temporary file.
    fn temp_path(&self) -> PathBuf {
        self.path.with_extension(format!("json.{}.tmp", generate_uuid_v7().simple()))
    }
}

fn storage_error(action: &str, path: &Path, e: impl std::fmt::Display) -> CoreError {
    CoreError::StorageError(format!("failed to {} {}: {}", action, path.display(), e))
}

impl HistoryRepository for FileHistoryRepository {
    async fn load(&self) -> Result<Option<Vec<HistoryItem>>, CoreError> {
        let contents = match tokio::fs::read(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(storage_error("read", &self.path, e)),
        };

        let items: Vec<HistoryItem> = serde_json::from_slice(&contents)
            .map_err(|e| storage_error("parse", &self.path, e))?;

        debug!(items = items.len(), path = %self.path.display(), "Loaded history");
        Ok(Some(items))
    }

    async fn store(&self, items: Vec<HistoryItem>) -> Result<(), CoreError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| storage_error("create", parent, e))?;
        }

        let contents =
            serde_json::to_vec(&items).map_err(|e| storage_error("serialize", &self.path, e))?;

        // Atomic replace via rename
        let temp_path = self.temp_path();
        tokio::fs::write(&temp_path, contents)
            .await
            .map_err(|e| storage_error("write", &temp_path, e))?;
        if let Err(e) = tokio::fs::rename(&temp_path, &self.path).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(storage_error("replace", &self.path, e));
        }

        debug!(items = items.len(), path = %self.path.display(), "Stored history");
        Ok(())
    }

    async fn remove(&self) -> Result<(), CoreError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(storage_error("remove", &self.path, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::label_analysis::entities::LabelAnalysis;

    #[tokio::test]
    async fn test_missing_file_reads_as_no_entry() {
        let dir = tempfile::tempdir().unwrap();
        let repository = FileHistoryRepository::new(dir.path());

        assert_eq!(repository.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_store_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let repository = FileHistoryRepository::new(dir.path().join("nested"));
        let item = HistoryItem::new(LabelAnalysis::label_fallback(), None);

        repository.store(vec![item.clone()]).await.unwrap();

        assert!(repository.path().ends_with("label_slayer_history.json"));
        assert_eq!(repository.load().await.unwrap(), Some(vec![item]));
    }

    #[tokio::test]
    async fn test_remove_deletes_entry() {
        let dir = tempfile::tempdir().unwrap();
        let repository = FileHistoryRepository::new(dir.path());
        repository.store(Vec::new()).await.unwrap();

        repository.remove().await.unwrap();
        repository.remove().await.unwrap();

        assert_eq!(repository.load().await.unwrap(), None);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_stores_never_corrupt_the_entry() {
        let dir = tempfile::tempdir().unwrap();
        let repository = FileHistoryRepository::new(dir.path());

        for round in 0..20 {
            let mut writers = Vec::new();
            for writer in 0..8 {
                let repository = repository.clone();
                writers.push(tokio::spawn(async move {
                    let name = format!("Round {} writer {}", round, writer);
                    let items = (0..=writer)
                        .map(|_| HistoryItem::new(LabelAnalysis::product_fallback(&name), None))
                        .collect::<Vec<_>>();
                    repository.store(items).await
                }));
            }

            for writer in writers {
                writer.await.unwrap().unwrap();
            }

            let stored = repository.load().await.unwrap().unwrap();
            assert!(!stored.is_empty());
            let name = &stored[0].analysis.product_name;
            assert!(stored.iter().all(|item| &item.analysis.product_name == name));
        }

        let mut leftovers = tokio::fs::read_dir(dir.path()).await.unwrap();
        let mut files = Vec::new();
        while let Some(entry) = leftovers.next_entry().await.unwrap() {
            files.push(entry.file_name());
        }
        assert_eq!(files, vec![std::ffi::OsString::from("label_slayer_history.json")]);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let repository = FileHistoryRepository::new(dir.path());
        tokio::fs::write(repository.path(), b"{not json").await.unwrap();

        let err = repository.load().await.unwrap_err();
        assert!(matches!(err, CoreError::StorageError(_)));
    }
}
