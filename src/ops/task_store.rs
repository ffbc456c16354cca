use crate::model::notification::{
    COMPLETED_MESSAGE, CREATED_MESSAGE, DELETED_MESSAGE, UPDATED_MESSAGE,
};
use crate::model::{NotificationKind, Task, TaskId, ToggleWording};
use crate::ops::notify::NotificationSink;

/// Error type for task store operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("task title is empty")]
    EmptyTitle,
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
}

/// The ordered, in-memory list of tasks.
///
/// Every successful mutation emits exactly one notification to the sink
/// passed in. Failed operations leave the list untouched and emit nothing.
#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u64,
    toggle_wording: ToggleWording,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    /// An empty store
    pub fn new() -> Self {
        TaskStore {
            tasks: Vec::new(),
            next_id: 1,
            toggle_wording: ToggleWording::default(),
        }
    }

    /// The three example tasks shown on a fresh start
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for (title, completed) in [
            ("Review quarterly reports", false),
            ("Schedule team sync meeting", true),
            ("Approve vendor contracts", false),
        ] {
            let id = store.allocate_id();
            store.tasks.push(Task {
                id,
                title: title.to_string(),
                completed,
            });
        }
        store
    }

    pub fn with_toggle_wording(mut self, wording: ToggleWording) -> Self {
        self.toggle_wording = wording;
        self
    }

    pub fn toggle_wording(&self) -> ToggleWording {
        self.toggle_wording
    }

    fn allocate_id(&mut self) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        id
    }

    fn find_mut(&mut self, id: TaskId) -> Result<&mut Task, StoreError> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::TaskNotFound(id))
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Index of a task in display order
    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    pub fn total(&self) -> usize {
        self.tasks.len()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Append a new incomplete task. Blank titles are rejected.
    pub fn add(
        &mut self,
        title: &str,
        sink: &mut dyn NotificationSink,
    ) -> Result<TaskId, StoreError> {
        if title.trim().is_empty() {
            return Err(StoreError::EmptyTitle);
        }
        let id = self.allocate_id();
        self.tasks.push(Task::new(id, title));
        tracing::debug!(%id, title, "task added");
        sink.show(CREATED_MESSAGE, NotificationKind::Create);
        Ok(id)
    }

    /// Flip a task's completion flag. Returns the new value.
    pub fn toggle(
        &mut self,
        id: TaskId,
        sink: &mut dyn NotificationSink,
    ) -> Result<bool, StoreError> {
        let wording = self.toggle_wording;
        let task = self.find_mut(id)?;
        let was_completed = task.completed;
        task.completed = !was_completed;
        let now_completed = task.completed;
        tracing::debug!(%id, completed = now_completed, "task toggled");

        let announce_completed = match wording {
            ToggleWording::Resulting => now_completed,
            ToggleWording::PreToggle => was_completed,
        };
        if announce_completed {
            sink.show(COMPLETED_MESSAGE, NotificationKind::Complete);
        } else {
            sink.show(CREATED_MESSAGE, NotificationKind::Create);
        }
        Ok(now_completed)
    }

    /// Remove a task, returning it
    pub fn remove(
        &mut self,
        id: TaskId,
        sink: &mut dyn NotificationSink,
    ) -> Result<Task, StoreError> {
        let idx = self.position(id).ok_or(StoreError::TaskNotFound(id))?;
        let task = self.tasks.remove(idx);
        tracing::debug!(%id, "task removed");
        sink.show(DELETED_MESSAGE, NotificationKind::Delete);
        Ok(task)
    }

    /// Overwrite a task's title. No emptiness check at this layer.
    pub fn update(
        &mut self,
        id: TaskId,
        title: &str,
        sink: &mut dyn NotificationSink,
    ) -> Result<(), StoreError> {
        let task = self.find_mut(id)?;
        task.title = title.to_string();
        tracing::debug!(%id, title, "task renamed");
        sink.show(UPDATED_MESSAGE, NotificationKind::Update);
        Ok(())
    }
}
