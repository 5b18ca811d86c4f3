use crate::errors::AppError;

/// Draft lifecycle for one entity type. At most one draft is open at a
/// time; a draft is either committed whole through a repository or
/// discarded, never partially.
#[derive(Debug, Clone, PartialEq)]
pub enum EditSession<T> {
    Idle,
    Creating(T),
    Editing(T),
}

impl<T> Default for EditSession<T> {
    fn default() -> Self {
        EditSession::Idle
    }
}

impl<T> EditSession<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, EditSession::Idle)
    }

    /// Opens a draft for a new entity. Fails when a draft is already open,
    /// so unsaved edits are never silently discarded.
    pub fn start_create(&mut self, blank: T) -> Result<(), AppError> {
        if !self.is_idle() {
            return Err(AppError::Conflict("another draft is already open".into()));
        }
        *self = EditSession::Creating(blank);
        Ok(())
    }

    /// Opens a draft copying an existing entity. The original is not
    /// touched until the draft is confirmed.
    pub fn start_edit(&mut self, existing: T) -> Result<(), AppError> {
        if !self.is_idle() {
            return Err(AppError::Conflict("another draft is already open".into()));
        }
        *self = EditSession::Editing(existing);
        Ok(())
    }

    /// Discards the open draft, if any. Never touches the store.
    pub fn cancel(&mut self) {
        *self = EditSession::Idle;
    }

    pub fn draft(&self) -> Option<&T> {
        match self {
            EditSession::Idle => None,
            EditSession::Creating(draft) | EditSession::Editing(draft) => Some(draft),
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut T> {
        match self {
            EditSession::Idle => None,
            EditSession::Creating(draft) | EditSession::Editing(draft) => Some(draft),
        }
    }

    /// Takes the open draft out, returning the session to idle.
    pub fn take(&mut self) -> Option<T> {
        match std::mem::take(self) {
            EditSession::Idle => None,
            EditSession::Creating(draft) | EditSession::Editing(draft) => Some(draft),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_draft_at_a_time() {
        let mut session = EditSession::default();
        session.start_create(1).unwrap();
        assert!(session.start_create(2).is_err());
        assert!(session.start_edit(3).is_err());
        assert_eq!(session.draft(), Some(&1));
    }

    #[test]
    fn cancel_returns_to_idle() {
        let mut session = EditSession::default();
        session.start_edit("draft").unwrap();
        session.cancel();
        assert!(session.is_idle());
        assert!(session.draft().is_none());
    }

    #[test]
    fn take_empties_the_session() {
        let mut session = EditSession::default();
        session.start_create(7).unwrap();
        assert_eq!(session.take(), Some(7));
        assert!(session.is_idle());
        assert_eq!(session.take(), None);
    }
}
