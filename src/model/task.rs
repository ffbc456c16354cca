use std::fmt;

/// Opaque task identifier, assigned by the store and never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    /// Display text. Non-empty when created through `TaskStore::add`,
    /// but renames are stored as given.
    pub title: String,
    pub completed: bool,
}

impl Task {
    /// Create a new, incomplete task
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Task {
            id,
            title: title.into(),
            completed: false,
        }
    }

    /// The checkbox shown for this task in the list
    pub fn checkbox(&self) -> &'static str {
        if self.completed { "[x]" } else { "[ ]" }
    }
}
