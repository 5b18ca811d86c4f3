use std::sync::Arc;

use portfolio_admin::AppState;
use portfolio_admin::entities::project::Project;
use portfolio_admin::entities::skill::Skill;
use portfolio_admin::store::memory::MemoryStore;

/// Fresh app over a volatile store, mirroring a clean client install.
pub fn test_app() -> AppState {
    AppState::with_store(Arc::new(MemoryStore::new()))
}

pub fn sample_project(title: &str) -> Project {
    Project {
        title: title.to_string(),
        description: "Short blurb".to_string(),
        full_description: "Longer write-up".to_string(),
        stack: vec!["Rust".to_string()],
        image: "🦀".to_string(),
        ..Project::default()
    }
}

pub fn sample_skill(name: &str, level: u8) -> Skill {
    Skill {
        name: name.to_string(),
        level,
        ..Skill::default()
    }
}
