use validator::Validate;

use crate::entities::project::Project;
use crate::errors::AppError;
use crate::repositories::projects::ProjectRepository;

use super::session::EditSession;

/// Drives the project tab of the admin panel: listing, draft lifecycle and
/// commits through the repository.
pub struct ProjectsHandler<R>
where
    R: ProjectRepository,
{
    pub repo: R,
    session: EditSession<Project>,
}

impl<R> ProjectsHandler<R>
where
    R: ProjectRepository,
{
    pub fn new(repo: R) -> Self {
        ProjectsHandler {
            repo,
            session: EditSession::default(),
        }
    }

    pub fn list(&self) -> Vec<Project> {
        self.repo.list()
    }

    /// Opens a blank draft for a new project.
    pub fn start_create(&mut self) -> Result<(), AppError> {
        self.session.start_create(Project::default())
    }

    /// Opens a draft copying an existing project.
    pub fn start_edit(&mut self, project: Project) -> Result<(), AppError> {
        self.session.start_edit(project)
    }

    pub fn draft(&self) -> Option<&Project> {
        self.session.draft()
    }

    pub fn draft_mut(&mut self) -> Option<&mut Project> {
        self.session.draft_mut()
    }

    /// Appends a technology tag to the open draft. Blank input is ignored;
    /// duplicates are allowed.
    pub fn add_tag(&mut self, tag: &str) {
        if let Some(draft) = self.session.draft_mut() {
            draft.add_tag(tag);
        }
    }

    /// Removes the tag at `index` from the open draft.
    pub fn remove_tag(&mut self, index: usize) {
        if let Some(draft) = self.session.draft_mut() {
            draft.remove_tag(index);
        }
    }

    /// Discards the open draft without persisting anything.
    pub fn cancel(&mut self) {
        self.session.cancel();
    }

    /// Validates and commits the open draft, then returns to idle. Nothing
    /// is persisted when validation fails, and the draft stays open so the
    /// form can be corrected.
    pub fn confirm(&mut self) -> Result<Project, AppError> {
        let draft = self
            .session
            .draft()
            .cloned()
            .ok_or_else(|| AppError::NotFound("no draft open".into()))?;
        draft.validate()?;

        let saved = self.repo.save(draft);
        self.session.cancel();
        tracing::info!("Project '{}' saved", saved.title);
        Ok(saved)
    }

    /// Deletes by id; unknown ids are a no-op.
    pub fn delete(&mut self, id: i64) {
        self.repo.delete(id);
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;

    mock! {
        ProjectRepo {}

        impl ProjectRepository for ProjectRepo {
            fn list(&self) -> Vec<Project>;
            fn save(&self, project: Project) -> Project;
            fn delete(&self, id: i64);
        }
    }

    #[test]
    fn confirm_commits_exactly_once() {
        let mut repo = MockProjectRepo::new();
        repo.expect_save().times(1).returning(|mut project| {
            project.id = 42;
            project
        });

        let mut handler = ProjectsHandler::new(repo);
        handler.start_create().unwrap();
        handler.draft_mut().unwrap().title = "Weather bot".to_string();

        let saved = handler.confirm().unwrap();
        assert_eq!(saved.id, 42);
        assert!(handler.draft().is_none());
    }

    #[test]
    fn cancel_never_touches_the_repository() {
        let mut repo = MockProjectRepo::new();
        repo.expect_save().times(0);

        let mut handler = ProjectsHandler::new(repo);
        handler.start_create().unwrap();
        handler.add_tag("Rust");
        handler.cancel();
        assert!(handler.draft().is_none());
    }

    #[test]
    fn invalid_drafts_are_not_committed() {
        let mut repo = MockProjectRepo::new();
        repo.expect_save().times(0);

        let mut handler = ProjectsHandler::new(repo);
        handler.start_create().unwrap();

        // Blank title fails validation; the draft stays open.
        assert!(matches!(
            handler.confirm(),
            Err(AppError::ValidationError(_))
        ));
        assert!(handler.draft().is_some());
    }
}
