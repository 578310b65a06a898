//! Object storage boundary.
//!
//! Collections are persisted as whole JSON documents behind the
//! `ObjectStorage` trait; the rest of the crate never touches the
//! filesystem directly. The default backend writes to a local data
//! directory, which is all a single-barangay deployment needs.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Read a named object; `Ok(None)` when it has never been written.
    async fn read(&self, name: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Write a named object, replacing any previous content.
    async fn write(&self, name: &str, data: &[u8]) -> Result<(), StorageError>;
}

/// Filesystem-backed storage rooted at a data directory.
pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root comes from `BARANGAY_DATA_DIR`, defaulting to `./data`.
    pub fn from_env() -> Self {
        let root = std::env::var("BARANGAY_DATA_DIR").unwrap_or_else(|_| "./data".to_string());
        Self::new(root)
    }

    fn object_path(&self, name: &str) -> PathBuf {
        // keep objects inside the root even if a caller passes a path
        let filename = Path::new(name)
            .file_name()
            .map(|f| f.to_os_string())
            .unwrap_or_else(|| name.replace('/', "_").into());
        self.root.join(filename)
    }
}

#[async_trait]
impl ObjectStorage for LocalStorage {
    async fn read(&self, name: &str) -> Result<Option<Vec<u8>>, StorageError> {
        match tokio::fs::read(self.object_path(name)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn write(&self, name: &str, data: &[u8]) -> Result<(), StorageError> {
        tokio::fs::create_dir_all(&self.root).await?;
        tokio::fs::write(self.object_path(name), data).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path());

        storage.write("residents.json", b"[]").await.unwrap();
        let bytes = storage.read("residents.json").await.unwrap();
        assert_eq!(bytes.as_deref(), Some(&b"[]"[..]));
    }

    #[tokio::test]
    async fn test_missing_object_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path());
        assert!(storage.read("nothing.json").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_object_names_cannot_escape_the_root() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path());

        storage.write("../escape.json", b"{}").await.unwrap();
        assert!(dir.path().join("escape.json").exists());
        assert!(!dir.path().parent().unwrap().join("escape.json").exists());
    }

    #[tokio::test]
    async fn test_write_replaces_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path());

        storage.write("settings.json", b"{\"a\":1}").await.unwrap();
        storage.write("settings.json", b"{\"a\":2}").await.unwrap();
        let bytes = storage.read("settings.json").await.unwrap().unwrap();
        assert_eq!(bytes, b"{\"a\":2}");
    }
}
