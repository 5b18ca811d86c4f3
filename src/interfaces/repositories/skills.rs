use std::sync::Arc;

use crate::constants::SKILLS_SLOT;
use crate::entities::skill::Skill;

use super::store::{SlotStore, SlotStoreExt};

/// Collection rules for the skill list.
pub trait SkillRepository: Send + Sync {
    /// All skills in display order (append order).
    fn list(&self) -> Vec<Skill>;

    /// Natural-key upsert: a skill whose name matches an existing one
    /// replaces it at its current position, otherwise it is appended.
    fn save(&self, skill: Skill) -> Skill;

    /// Removes the skill with the given name; unknown names are a no-op.
    fn delete(&self, name: &str);
}

/// Store-backed repository over the `admin-skills` slot.
pub struct StoreSkillRepo {
    store: Arc<dyn SlotStore>,
}

impl StoreSkillRepo {
    pub fn new(store: Arc<dyn SlotStore>) -> Self {
        StoreSkillRepo { store }
    }
}

impl SkillRepository for StoreSkillRepo {
    fn list(&self) -> Vec<Skill> {
        self.store.get(SKILLS_SLOT).unwrap_or_default()
    }

    fn save(&self, skill: Skill) -> Skill {
        self.store.update::<Vec<Skill>>(SKILLS_SLOT, |current| {
            let mut skills = current.unwrap_or_default();
            match skills.iter_mut().find(|s| s.name == skill.name) {
                Some(slot) => *slot = skill.clone(),
                None => skills.push(skill.clone()),
            }
            skills
        });
        tracing::debug!("Saved skill '{}'", skill.name);
        skill
    }

    fn delete(&self, name: &str) {
        self.store.update::<Vec<Skill>>(SKILLS_SLOT, |current| {
            let mut skills = current.unwrap_or_default();
            skills.retain(|s| s.name != name);
            skills
        });
        tracing::debug!("Deleted skill '{}'", name);
    }
}
