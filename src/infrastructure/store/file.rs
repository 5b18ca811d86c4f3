use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Context;
use dashmap::DashMap;
use parking_lot::RwLock;
use serde_json::Value;

use crate::repositories::store::{Observer, ObserverId, SlotStore};

/// Durable slot store backed by a single JSON file. Every replace rewrites
/// the file (write a sibling temp file, then rename), so an interrupted
/// write leaves either the previous or the new content, never a torn file.
///
/// I/O failures are logged and swallowed: the store contract is infallible
/// for callers, matching a client persistence layer that is assumed always
/// available.
pub struct FileStore {
    path: PathBuf,
    slots: RwLock<HashMap<String, Value>>,
    observers: DashMap<u64, (String, Observer)>,
    next_observer: AtomicU64,
}

impl FileStore {
    /// Opens the store at `path`, loading any previously persisted slots.
    /// A missing or unreadable file starts the store empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let slots = match Self::load(&path) {
            Ok(slots) => slots,
            Err(e) => {
                tracing::warn!(
                    "Starting with an empty store, could not load {}: {:#}",
                    path.display(),
                    e
                );
                HashMap::new()
            }
        };

        FileStore {
            path,
            slots: RwLock::new(slots),
            observers: DashMap::new(),
            next_observer: AtomicU64::new(0),
        }
    }

    fn load(path: &Path) -> anyhow::Result<HashMap<String, Value>> {
        if !path.exists() {
            return Ok(HashMap::new());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("decoding {}", path.display()))
    }

    fn persist(&self, slots: &HashMap<String, Value>) {
        if let Err(e) = self.try_persist(slots) {
            tracing::error!(
                "Failed to persist store to {}: {:#}",
                self.path.display(),
                e
            );
        }
    }

    fn try_persist(&self, slots: &HashMap<String, Value>) -> anyhow::Result<()> {
        let raw = serde_json::to_string_pretty(slots).context("encoding store")?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, raw).with_context(|| format!("writing {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("replacing {}", self.path.display()))?;
        Ok(())
    }

    fn notify(&self, key: &str, value: &Value) {
        for entry in self.observers.iter() {
            let (observed_key, observer) = entry.value();
            if observed_key == key {
                observer(value);
            }
        }
    }
}

impl SlotStore for FileStore {
    fn read(&self, key: &str) -> Option<Value> {
        self.slots.read().get(key).cloned()
    }

    fn replace(&self, key: &str, update: &mut dyn FnMut(Option<Value>) -> Value) {
        let next = {
            let mut slots = self.slots.write();
            let next = update(slots.get(key).cloned());
            slots.insert(key.to_string(), next.clone());
            // Persisted under the write lock so file contents follow the
            // same order as the writes.
            self.persist(&slots);
            next
        };
        self.notify(key, &next);
    }

    fn subscribe(&self, key: &str, observer: Observer) -> ObserverId {
        let id = self.next_observer.fetch_add(1, Ordering::Relaxed);
        self.observers.insert(id, (key.to_string(), observer));
        ObserverId(id)
    }

    fn unsubscribe(&self, id: ObserverId) {
        self.observers.remove(&id.0);
    }
}
