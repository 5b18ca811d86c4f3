use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use parking_lot::RwLock;
use serde_json::Value;

use crate::repositories::store::{Observer, ObserverId, SlotStore};

/// Volatile slot store with the same contract as the file store. Used by
/// tests and demos; nothing survives the process.
#[derive(Default)]
pub struct MemoryStore {
    slots: RwLock<HashMap<String, Value>>,
    observers: DashMap<u64, (String, Observer)>,
    next_observer: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
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

impl SlotStore for MemoryStore {
    fn read(&self, key: &str) -> Option<Value> {
        self.slots.read().get(key).cloned()
    }

    fn replace(&self, key: &str, update: &mut dyn FnMut(Option<Value>) -> Value) {
        let next = {
            let mut slots = self.slots.write();
            let next = update(slots.get(key).cloned());
            slots.insert(key.to_string(), next.clone());
            next
        };
        // Delivered after the write lock is released, so observers can read
        // the store again.
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
