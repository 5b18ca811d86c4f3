use std::sync::Arc;

use crate::constants::AUTH_TOKEN_SLOT;

use super::store::{SlotStore, SlotStoreExt};

/// The session token slot: holds the last-accepted checksum, or the
/// open-access sentinel when login succeeded with no password configured.
pub trait SessionRepository: Send + Sync {
    fn token(&self) -> Option<String>;

    fn set_token(&self, token: Option<String>);
}

/// Store-backed session over the `admin-auth-token` slot.
pub struct StoreSessionRepo {
    store: Arc<dyn SlotStore>,
}

impl StoreSessionRepo {
    pub fn new(store: Arc<dyn SlotStore>) -> Self {
        StoreSessionRepo { store }
    }
}

impl SessionRepository for StoreSessionRepo {
    fn token(&self) -> Option<String> {
        self.store.get::<Option<String>>(AUTH_TOKEN_SLOT).flatten()
    }

    fn set_token(&self, token: Option<String>) {
        self.store
            .update::<Option<String>>(AUTH_TOKEN_SLOT, |_| token.clone());
    }
}
