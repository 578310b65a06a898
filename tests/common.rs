use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use barangay_registry_server::storage::{ObjectStorage, StorageError};
use barangay_registry_server::AppState;

/// In-memory ObjectStorage used by the integration tests.
pub struct MockObjectStorage {
    files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MockObjectStorage {
    pub fn new() -> Self {
        Self {
            files: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    #[allow(dead_code)]
    pub async fn file(&self, name: &str) -> Option<Vec<u8>> {
        let files = self.files.lock().await;
        files.get(name).cloned()
    }

    #[allow(dead_code)]
    pub async fn seed(&self, name: &str, data: &[u8]) {
        let mut files = self.files.lock().await;
        files.insert(name.to_string(), data.to_vec());
    }
}

#[async_trait]
impl ObjectStorage for MockObjectStorage {
    async fn read(&self, name: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let files = self.files.lock().await;
        Ok(files.get(name).cloned())
    }

    async fn write(&self, name: &str, data: &[u8]) -> Result<(), StorageError> {
        let mut files = self.files.lock().await;
        files.insert(name.to_string(), data.to_vec());
        Ok(())
    }
}

/// AppState over a fresh mock storage; also returns a handle to the mock.
#[allow(dead_code)]
pub fn test_state() -> (AppState, Arc<MockObjectStorage>) {
    let storage = Arc::new(MockObjectStorage::new());
    let state = AppState::with_storage(storage.clone());
    (state, storage)
}
