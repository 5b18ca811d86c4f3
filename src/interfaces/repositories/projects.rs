use std::sync::Arc;

use crate::constants::PROJECTS_SLOT;
use crate::entities::project::Project;

use super::store::{SlotStore, SlotStoreExt};

/// Collection rules for the project portfolio.
pub trait ProjectRepository: Send + Sync {
    /// All projects in display order (append order).
    fn list(&self) -> Vec<Project>;

    /// Upserts by surrogate id: an unsaved project (id 0) gets a fresh id
    /// and is appended; otherwise the element with a matching id is replaced
    /// in place. Saving an unknown nonzero id leaves the collection
    /// unchanged. Returns the project as persisted.
    fn save(&self, project: Project) -> Project;

    /// Removes the project with the given id; unknown ids are a no-op.
    fn delete(&self, id: i64);
}

/// Store-backed repository over the `admin-projects` slot.
pub struct StoreProjectRepo {
    store: Arc<dyn SlotStore>,
}

impl StoreProjectRepo {
    pub fn new(store: Arc<dyn SlotStore>) -> Self {
        StoreProjectRepo { store }
    }
}

impl ProjectRepository for StoreProjectRepo {
    fn list(&self) -> Vec<Project> {
        self.store.get(PROJECTS_SLOT).unwrap_or_default()
    }

    fn save(&self, project: Project) -> Project {
        let mut saved = project.clone();
        self.store.update::<Vec<Project>>(PROJECTS_SLOT, |current| {
            let mut projects = current.unwrap_or_default();
            if project.is_unsaved() {
                saved.id = Project::fresh_id(&projects);
                projects.push(saved.clone());
            } else if let Some(slot) = projects.iter_mut().find(|p| p.id == project.id) {
                *slot = project.clone();
            }
            projects
        });
        tracing::debug!("Saved project {} ('{}')", saved.id, saved.title);
        saved
    }

    fn delete(&self, id: i64) {
        self.store.update::<Vec<Project>>(PROJECTS_SLOT, |current| {
            let mut projects = current.unwrap_or_default();
            projects.retain(|p| p.id != id);
            projects
        });
        tracing::debug!("Deleted project {}", id);
    }
}
