use std::sync::Arc;

use crate::constants::SITE_CONFIG_SLOT;
use crate::entities::site_config::{SiteConfig, SiteConfigPatch};

use super::store::{SlotStore, SlotStoreExt};

/// Access to the single site-configuration record.
pub trait SiteConfigRepository: Send + Sync {
    /// Effective configuration: the stored record resolved over the
    /// documented defaults.
    fn get(&self) -> SiteConfig;

    /// Applies a partial update over the stored record and returns the
    /// result.
    fn update(&self, patch: SiteConfigPatch) -> SiteConfig;

    /// Replaces the stored admin password checksum; `None` removes it,
    /// leaving the editing surface open.
    fn set_password_checksum(&self, checksum: Option<String>) -> SiteConfig;
}

/// Store-backed repository over the `admin-site-config` slot.
pub struct StoreSiteConfigRepo {
    store: Arc<dyn SlotStore>,
}

impl StoreSiteConfigRepo {
    pub fn new(store: Arc<dyn SlotStore>) -> Self {
        StoreSiteConfigRepo { store }
    }
}

impl SiteConfigRepository for StoreSiteConfigRepo {
    fn get(&self) -> SiteConfig {
        SiteConfig::resolve(self.store.get(SITE_CONFIG_SLOT))
    }

    fn update(&self, patch: SiteConfigPatch) -> SiteConfig {
        let mut updated = SiteConfig::default();
        self.store.update::<SiteConfig>(SITE_CONFIG_SLOT, |current| {
            let mut config = SiteConfig::resolve(current);
            patch.clone().apply(&mut config);
            updated = config.clone();
            config
        });
        updated
    }

    fn set_password_checksum(&self, checksum: Option<String>) -> SiteConfig {
        let mut updated = SiteConfig::default();
        self.store.update::<SiteConfig>(SITE_CONFIG_SLOT, |current| {
            let mut config = SiteConfig::resolve(current);
            config.admin_password = checksum.clone();
            updated = config.clone();
            config
        });
        updated
    }
}
