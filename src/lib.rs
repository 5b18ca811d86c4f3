mod domain;
mod infrastructure;
mod interfaces;
pub mod constants;
pub mod errors;
pub mod settings;

pub use domain::{entities, use_cases};
pub use infrastructure::{auth, store};
pub use interfaces::repositories;

use std::sync::Arc;

use repositories::projects::StoreProjectRepo;
use repositories::session::StoreSessionRepo;
use repositories::site_config::StoreSiteConfigRepo;
use repositories::skills::StoreSkillRepo;
use repositories::store::SlotStore;
use store::file::FileStore;
use use_cases::auth::AuthHandler;
use use_cases::projects::ProjectsHandler;
use use_cases::site::SiteHandler;
use use_cases::skills::SkillsHandler;

pub type AppAuthHandler = AuthHandler<StoreSiteConfigRepo, StoreSessionRepo>;

/// Composition root: the persisted store plus the handlers the admin panel
/// drives. The presentation layer reads through the handlers and the store
/// subscription; it never writes to the store directly.
pub struct AppState {
    pub store: Arc<dyn SlotStore>,
    pub auth: AppAuthHandler,
    pub projects: ProjectsHandler<StoreProjectRepo>,
    pub skills: SkillsHandler<StoreSkillRepo>,
    pub site: SiteHandler<StoreSiteConfigRepo>,
}

impl AppState {
    pub fn new(config: &settings::AppConfig) -> Self {
        let store: Arc<dyn SlotStore> = Arc::new(FileStore::open(config.store_path.clone()));
        Self::with_store(store)
    }

    /// Builds the handlers over any store implementation; tests use the
    /// in-memory store.
    pub fn with_store(store: Arc<dyn SlotStore>) -> Self {
        let auth = AuthHandler::new(
            StoreSiteConfigRepo::new(store.clone()),
            StoreSessionRepo::new(store.clone()),
        );
        let projects = ProjectsHandler::new(StoreProjectRepo::new(store.clone()));
        let skills = SkillsHandler::new(StoreSkillRepo::new(store.clone()));
        let site = SiteHandler::new(StoreSiteConfigRepo::new(store.clone()));

        AppState {
            store,
            auth,
            projects,
            skills,
            site,
        }
    }
}
