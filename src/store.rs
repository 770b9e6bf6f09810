//! file: store.rs
//! author: Jacob Xie
//! date: 2026/10/19 21:08:44 Monday
//! brief: string key-value storage for team scores

use std::{
    cell::RefCell,
    collections::{BTreeMap, HashMap},
    fs,
    future::Future,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    thread,
};

use futures::channel::oneshot;
use log::debug;

use crate::error::StoreError;

pub trait KeyValueStore {
    /// `Ok(None)` when nothing was ever stored under `key`.
    fn get_item(&self, key: &str) -> impl Future<Output = Result<Option<String>, StoreError>>;

    fn set_item(&self, key: &str, value: &str) -> impl Future<Output = Result<(), StoreError>>;
}

/// Keeps every key in one JSON object on disk. File access runs on a worker
/// thread; clones share one lock so read-modify-write cycles never interleave.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
    file_lock: Arc<Mutex<()>>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(err) => return Err(self.io_error(err)),
        };
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    fn write_all(&self, items: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(items)?;
        fs::write(&self.path, raw).map_err(|err| self.io_error(err))
    }

    fn lock_file(&self) -> MutexGuard<'_, ()> {
        self.file_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `work` on its own thread and resolves once it has answered.
    async fn off_thread<T, F>(&self, work: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(&FileStore) -> Result<T, StoreError> + Send + 'static,
    {
        let store = self.clone();
        let (tx, rx) = oneshot::channel();
        thread::spawn(move || {
            let _guard = store.lock_file();
            let _ = tx.send(work(&store));
        });
        rx.await.unwrap_or_else(|_| {
            Err(StoreError::WorkerGone {
                path: self.path.clone(),
            })
        })
    }
}

impl KeyValueStore for FileStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        let key = key.to_owned();
        self.off_thread(move |store| {
            let mut items = store.read_all()?;
            Ok(items.remove(&key))
        })
        .await
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let key = key.to_owned();
        let value = value.to_owned();
        self.off_thread(move |store| {
            let mut items = store.read_all()?;
            items.insert(key.clone(), value.clone());
            store.write_all(&items)?;
            debug!("stored {key} = {value} in {}", store.path.display());
            Ok(())
        })
        .await
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.items
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
