pub mod edit_session;
pub mod notify;
pub mod task_store;
pub mod timer;

pub use edit_session::EditSession;
pub use notify::{Clock, ManualClock, NotificationSink, Notifier, SystemClock};
pub use task_store::{StoreError, TaskStore};
pub use timer::{TimerQueue, TimerToken};
