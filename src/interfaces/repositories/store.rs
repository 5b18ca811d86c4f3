use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

/// Handle returned by [`SlotStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(pub u64);

pub type Observer = Box<dyn Fn(&Value) + Send + Sync>;

/// Named-slot persistence contract: get/set/subscribe over JSON values.
///
/// Implementations are infallible from the caller's perspective; a durable
/// backend that fails to persist logs the failure and keeps serving the
/// in-memory value. Each slot has a single logical writer (the repository
/// that owns it) and any number of readers.
pub trait SlotStore: Send + Sync {
    /// Current value of the slot, if any.
    fn read(&self, key: &str) -> Option<Value>;

    /// Atomically replaces the slot value. The updater receives the current
    /// value and returns the full replacement, so read-modify-write never
    /// loses a concurrent update. Subscribers of the slot are notified with
    /// the new value after the write settles.
    fn replace(&self, key: &str, update: &mut dyn FnMut(Option<Value>) -> Value);

    /// Registers an observer invoked with the new value on every write to
    /// `key`.
    fn subscribe(&self, key: &str, observer: Observer) -> ObserverId;

    fn unsubscribe(&self, id: ObserverId);
}

/// Typed access over the JSON slot contract. A stored value that no longer
/// decodes as `T` is treated as absent and logged, never surfaced as an
/// error.
pub trait SlotStoreExt: SlotStore {
    fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.read(key)?;
        match serde_json::from_value(value) {
            Ok(typed) => Some(typed),
            Err(e) => {
                tracing::warn!("Stored value under '{}' is not decodable: {}", key, e);
                None
            }
        }
    }

    fn update<T>(&self, key: &str, mut update: impl FnMut(Option<T>) -> T)
    where
        T: Serialize + DeserializeOwned,
    {
        let mut apply = |current: Option<Value>| -> Value {
            let typed = current.and_then(|value| match serde_json::from_value(value) {
                Ok(typed) => Some(typed),
                Err(e) => {
                    tracing::warn!("Replacing undecodable value under '{}': {}", key, e);
                    None
                }
            });
            match serde_json::to_value(update(typed)) {
                Ok(next) => next,
                Err(e) => {
                    tracing::error!("Could not encode value for '{}': {}", key, e);
                    Value::Null
                }
            }
        };
        self.replace(key, &mut apply);
    }
}

impl<S: SlotStore + ?Sized> SlotStoreExt for S {}
