use validator::Validate;

use crate::entities::skill::Skill;
use crate::errors::AppError;
use crate::repositories::skills::SkillRepository;

use super::session::EditSession;

/// Drives the skill tab of the admin panel.
pub struct SkillsHandler<R>
where
    R: SkillRepository,
{
    pub repo: R,
    session: EditSession<Skill>,
}

impl<R> SkillsHandler<R>
where
    R: SkillRepository,
{
    pub fn new(repo: R) -> Self {
        SkillsHandler {
            repo,
            session: EditSession::default(),
        }
    }

    pub fn list(&self) -> Vec<Skill> {
        self.repo.list()
    }

    /// Opens a blank draft for a new skill.
    pub fn start_create(&mut self) -> Result<(), AppError> {
        self.session.start_create(Skill::default())
    }

    /// Opens a draft copying an existing skill.
    pub fn start_edit(&mut self, skill: Skill) -> Result<(), AppError> {
        self.session.start_edit(skill)
    }

    pub fn draft(&self) -> Option<&Skill> {
        self.session.draft()
    }

    pub fn draft_mut(&mut self) -> Option<&mut Skill> {
        self.session.draft_mut()
    }

    pub fn cancel(&mut self) {
        self.session.cancel();
    }

    /// Validates and commits the open draft. A draft whose name matches an
    /// existing skill replaces it in place (the repository's natural-key
    /// upsert), otherwise it is appended.
    pub fn confirm(&mut self) -> Result<Skill, AppError> {
        let draft = self
            .session
            .draft()
            .cloned()
            .ok_or_else(|| AppError::NotFound("no draft open".into()))?;
        draft.validate()?;

        let saved = self.repo.save(draft);
        self.session.cancel();
        tracing::info!("Skill '{}' saved", saved.name);
        Ok(saved)
    }

    /// Deletes by name; unknown names are a no-op.
    pub fn delete(&mut self, name: &str) {
        self.repo.delete(name);
    }
}
