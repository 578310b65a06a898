//! Shared application state: one cache-backed data layer for every
//! collection.
//!
//! Reads go through a TTL cache keyed by object name, so concurrent
//! requests for the same collection hit storage once per window. Writes
//! are write-through: the cache is updated immediately and the raw bytes
//! are queued to a background worker that debounces bursts before touching
//! storage.

use moka::future::Cache;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Mutex};

use crate::documents::DocumentContext;
use crate::storage::{LocalStorage, ObjectStorage};

pub const SETTINGS_OBJECT: &str = "settings";
pub const RESIDENTS_OBJECT: &str = "residents";
pub const HOUSEHOLDS_OBJECT: &str = "households";
pub const OFFICIALS_OBJECT: &str = "officials";
pub const CERTIFICATES_OBJECT: &str = "certificates";
pub const BLOTTERS_OBJECT: &str = "blotters";
pub const INCOMES_OBJECT: &str = "incomes";
pub const EXPENSES_OBJECT: &str = "expenses";
pub const EVENTS_OBJECT: &str = "events";
pub const YOUTH_OBJECT: &str = "youth";
pub const GOV_DOCS_OBJECT: &str = "gov_docs";
pub const PROGRAMS_PROJECTS_OBJECT: &str = "programs_projects";
pub const LOGBOOK_OBJECT: &str = "logbook";

const CACHE_TTL_SECS: u64 = 10 * 60;
const DEBOUNCE_MS: u64 = 500;

/// One queued write: the storage object name plus its serialized bytes.
#[derive(Debug, Clone)]
pub struct PersistJob {
    pub object: String,
    pub data: Vec<u8>,
}

#[derive(Clone)]
pub struct AppState {
    pub cache: Cache<String, Arc<Value>>,
    pub storage: Arc<dyn ObjectStorage>,
    pub persist_sender: mpsc::Sender<PersistJob>,
    write_locks: Arc<Mutex<HashMap<String, Arc<Mutex<()>>>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_storage(Arc::new(LocalStorage::from_env()))
    }

    /// Build state over any storage backend; tests inject an in-memory one.
    pub fn with_storage(storage: Arc<dyn ObjectStorage>) -> Self {
        let cache = Cache::builder()
            .time_to_live(Duration::from_secs(CACHE_TTL_SECS))
            .max_capacity(100)
            .build();

        let (persist_sender, receiver) = mpsc::channel(100);
        let worker_storage = storage.clone();
        tokio::spawn(async move {
            persistence_worker(receiver, worker_storage).await;
        });

        Self {
            cache,
            storage,
            persist_sender,
            write_locks: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Per-object write lock; mutations of the same collection serialize on
    /// it so concurrent read-modify-write cycles cannot overwrite each other.
    async fn write_lock(&self, name: &str) -> Arc<Mutex<()>> {
        let mut locks = self.write_locks.lock().await;
        locks.entry(name.to_string()).or_default().clone()
    }

    /// Load a named object, served from cache when warm.
    ///
    /// Per the read-failure policy, missing or unreadable objects degrade to
    /// the type's default (an empty collection) instead of failing the
    /// request; the error is logged.
    pub async fn get_object<T>(&self, name: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        if let Some(cached) = self.cache.get(name).await {
            match serde_json::from_value(cached.as_ref().clone()) {
                Ok(value) => return value,
                Err(e) => log::warn!("cached object '{}' has unexpected shape: {}", name, e),
            }
        }

        let raw = match self.storage.read(&format!("{name}.json")).await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return T::default(),
            Err(e) => {
                log::error!("failed to read object '{}': {}", name, e);
                return T::default();
            }
        };

        match serde_json::from_slice::<Value>(&raw) {
            Ok(value) => {
                self.cache
                    .insert(name.to_string(), Arc::new(value.clone()))
                    .await;
                serde_json::from_value(value).unwrap_or_else(|e| {
                    log::error!("object '{}' does not match its schema: {}", name, e);
                    T::default()
                })
            }
            Err(e) => {
                log::error!("object '{}' is not valid JSON: {}", name, e);
                T::default()
            }
        }
    }

    /// Write-through: update the cache now, queue the storage write.
    pub async fn put_object<T: Serialize>(&self, name: &str, value: &T) -> Result<(), String> {
        let json = serde_json::to_value(value).map_err(|e| e.to_string())?;
        let bytes = serde_json::to_vec_pretty(&json).map_err(|e| e.to_string())?;
        self.cache.insert(name.to_string(), Arc::new(json)).await;

        if let Err(e) = self
            .persist_sender
            .send(PersistJob {
                object: format!("{name}.json"),
                data: bytes,
            })
            .await
        {
            // Cache is already current; data survives until the next restart.
            log::error!("failed to queue object '{}' for persistence: {}", name, e);
        } else {
            log::debug!("object '{}' queued for background persistence", name);
        }
        Ok(())
    }

    /// Serialized read-modify-write of a named object.
    ///
    /// The object's write lock is held across the load, the closure, and the
    /// write-back, so two concurrent mutations of the same collection never
    /// act on the same snapshot (and never mint duplicate ids).
    pub async fn modify_object<T, R>(
        &self,
        name: &str,
        mutate: impl FnOnce(&mut T) -> R,
    ) -> Result<R, String>
    where
        T: DeserializeOwned + Serialize + Default,
    {
        let lock = self.write_lock(name).await;
        let _guard = lock.lock().await;
        let mut value: T = self.get_object(name).await;
        let result = mutate(&mut value);
        self.put_object(name, &value).await?;
        Ok(result)
    }

    /// Like [`modify_object`](Self::modify_object), but the closure may
    /// decline: returning `None` (a lookup miss) skips the write-back.
    pub async fn update_object<T, R>(
        &self,
        name: &str,
        mutate: impl FnOnce(&mut T) -> Option<R>,
    ) -> Result<Option<R>, String>
    where
        T: DeserializeOwned + Serialize + Default,
    {
        let lock = self.write_lock(name).await;
        let _guard = lock.lock().await;
        let mut value: T = self.get_object(name).await;
        let Some(result) = mutate(&mut value) else {
            return Ok(None);
        };
        self.put_object(name, &value).await?;
        Ok(Some(result))
    }

    /// Everything the document templates need, loaded in one call.
    pub async fn document_context(&self) -> DocumentContext {
        DocumentContext {
            settings: self.get_object(SETTINGS_OBJECT).await,
            officials: self.get_object(OFFICIALS_OBJECT).await,
            residents: self.get_object(RESIDENTS_OBJECT).await,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Background persistence worker.
///
/// Debounces bursts: pending jobs are drained before and after a short
/// delay, keeping only the latest bytes per object, then written out.
async fn persistence_worker(
    mut receiver: mpsc::Receiver<PersistJob>,
    storage: Arc<dyn ObjectStorage>,
) {
    log::info!("persistence worker started");

    while let Some(job) = receiver.recv().await {
        let mut pending: HashMap<String, Vec<u8>> = HashMap::new();
        pending.insert(job.object, job.data);
        while let Ok(newer) = receiver.try_recv() {
            pending.insert(newer.object, newer.data);
        }

        tokio::time::sleep(Duration::from_millis(DEBOUNCE_MS)).await;

        while let Ok(newer) = receiver.try_recv() {
            pending.insert(newer.object, newer.data);
        }

        for (object, data) in pending {
            let size = data.len();
            match storage.write(&object, &data).await {
                Ok(()) => log::info!("persisted '{}' ({} bytes)", object, size),
                Err(e) => log::error!("failed to persist '{}': {}", object, e),
            }
        }
    }

    log::info!("persistence worker stopped");
}
