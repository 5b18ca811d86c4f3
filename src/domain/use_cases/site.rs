use crate::entities::site_config::{SiteConfig, SiteConfigPatch};
use crate::repositories::site_config::SiteConfigRepository;

/// Reads and patches the single site-configuration record.
pub struct SiteHandler<R>
where
    R: SiteConfigRepository,
{
    pub repo: R,
}

impl<R> SiteHandler<R>
where
    R: SiteConfigRepository,
{
    pub fn new(repo: R) -> Self {
        SiteHandler { repo }
    }

    /// Effective configuration, resolved over the defaults.
    pub fn get(&self) -> SiteConfig {
        self.repo.get()
    }

    pub fn update(&self, patch: SiteConfigPatch) -> SiteConfig {
        let config = self.repo.update(patch);
        tracing::info!("Site configuration saved");
        config
    }
}
