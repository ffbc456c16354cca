use crate::model::TaskId;
use crate::ops::notify::NotificationSink;
use crate::ops::task_store::{StoreError, TaskStore};

/// Which task is being renamed, and the working copy of its title
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditSession {
    active: Option<TaskId>,
    draft: String,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start renaming `id`, seeding the draft with its current title.
    /// Any unsaved draft for another task is dropped.
    pub fn begin(&mut self, id: TaskId, current_title: &str) {
        if let Some(prev) = self.active
            && prev != id
        {
            tracing::debug!(%prev, next = %id, "abandoning unsaved edit");
        }
        self.active = Some(id);
        self.draft = current_title.to_string();
    }

    pub fn update_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Write the draft back to `id` and end the session.
    ///
    /// The session ends even if the task is gone. Empty drafts are written as-is.
    pub fn commit(
        &mut self,
        id: TaskId,
        store: &mut TaskStore,
        sink: &mut dyn NotificationSink,
    ) -> Result<(), StoreError> {
        let result = store.update(id, &self.draft, sink);
        self.active = None;
        self.draft.clear();
        result
    }

    pub fn active(&self) -> Option<TaskId> {
        self.active
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_editing(&self, id: TaskId) -> bool {
        self.active == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Notification, NotificationKind, UPDATED_MESSAGE};

    #[test]
    fn begin_seeds_draft() {
        let mut session = EditSession::new();
        assert_eq!(session.active(), None);
        session.begin(TaskId(2), "Schedule team sync meeting");
        assert_eq!(session.active(), Some(TaskId(2)));
        assert_eq!(session.draft(), "Schedule team sync meeting");
        assert!(session.is_editing(TaskId(2)));
        assert!(!session.is_editing(TaskId(1)));
    }

    #[test]
    fn switching_target_discards_draft() {
        let mut store = TaskStore::seeded();
        let first = store.tasks()[0].id;
        let second = store.tasks()[1].id;
        let mut session = EditSession::new();
        session.begin(first, "Review quarterly reports");
        session.update_draft("Unsaved change");
        session.begin(second, "Schedule team sync meeting");
        assert_eq!(session.draft(), "Schedule team sync meeting");
        assert_eq!(store.get(first).unwrap().title, "Review quarterly reports");

        let mut sink: Vec<Notification> = Vec::new();
        session.commit(second, &mut store, &mut sink).unwrap();
        assert_eq!(store.get(first).unwrap().title, "Review quarterly reports");
    }

    #[test]
    fn commit_writes_draft_and_clears() {
        let mut store = TaskStore::seeded();
        let id = store.tasks()[0].id;
        let mut session = EditSession::new();
        let mut sink: Vec<Notification> = Vec::new();

        session.begin(id, "X");
        session.update_draft("Y");
        session.commit(id, &mut store, &mut sink).unwrap();

        assert_eq!(store.get(id).unwrap().title, "Y");
        assert_eq!(session.active(), None);
        assert_eq!(session.draft(), "");
        assert_eq!(
            sink,
            vec![Notification::new(UPDATED_MESSAGE, NotificationKind::Update)]
        );
    }

    #[test]
    fn commit_empty_draft_is_allowed() {
        let mut store = TaskStore::seeded();
        let id = store.tasks()[2].id;
        let mut session = EditSession::new();
        session.begin(id, "Approve vendor contracts");
        session.update_draft("");
        session.commit(id, &mut store, &mut Vec::<Notification>::new()).unwrap();
        assert_eq!(store.get(id).unwrap().title, "");
    }

    #[test]
    fn commit_on_missing_task_still_ends_session() {
        let mut store = TaskStore::seeded();
        let mut session = EditSession::new();
        let mut sink: Vec<Notification> = Vec::new();
        session.begin(TaskId(404), "ghost");
        let err = session.commit(TaskId(404), &mut store, &mut sink).unwrap_err();
        assert_eq!(err, StoreError::TaskNotFound(TaskId(404)));
        assert_eq!(session.active(), None);
        assert!(sink.is_empty());
    }

    #[test]
    fn rebegin_resets_draft_but_keeps_session() {
        let mut session = EditSession::new();
        session.begin(TaskId(1), "Original");
        session.update_draft("Half-typed");
        session.begin(TaskId(1), "Original");
        assert_eq!(session.active(), Some(TaskId(1)));
        assert_eq!(session.draft(), "Original");
    }
}
