use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::{Config, Notification, Task, TaskId};
use crate::ops::{EditSession, Notifier, StoreError, TaskStore};

use super::input;
use super::render;
use super::text_input::TextInput;
use super::theme::Theme;

/// Upper bound on how long the event loop sleeps waiting for input
const MAX_POLL: Duration = Duration::from_millis(250);

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Moving the cursor over the list
    Navigate,
    /// Typing into the new-task box
    Input,
    /// Renaming the task in the edit session
    Edit,
}

/// Main application state.
///
/// The three controllers each own their slice of state; the App only adds
/// cursor, mode and the new-task text box.
pub struct App {
    pub store: TaskStore,
    pub notifier: Notifier,
    pub edit: EditSession,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    pub show_key_hints: bool,
    /// Help overlay visible
    pub show_help: bool,
    /// Index of the selected task
    pub cursor: usize,
    /// First visible row of the task list
    pub scroll_offset: usize,
    /// New-task input box
    pub new_task: TextInput,
    /// Byte cursor into the edit session's draft
    pub edit_cursor: usize,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let store = if config.tasks.seed {
            TaskStore::seeded()
        } else {
            TaskStore::new()
        }
        .with_toggle_wording(config.notifications.toggle_wording);

        App {
            store,
            notifier: Notifier::new(Duration::from_millis(config.notifications.duration_ms)),
            edit: EditSession::new(),
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            show_key_hints: config.ui.show_key_hints,
            show_help: false,
            cursor: 0,
            scroll_offset: 0,
            new_task: TextInput::new(),
            edit_cursor: 0,
        }
    }

    /// The task under the cursor
    pub fn cursor_task(&self) -> Option<&Task> {
        self.store.tasks().get(self.cursor)
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notifier.current()
    }

    /// Keep the cursor inside the list after removals
    pub fn clamp_cursor(&mut self) {
        let total = self.store.total();
        if total == 0 {
            self.cursor = 0;
        } else if self.cursor >= total {
            self.cursor = total - 1;
        }
    }

    // -----------------------------------------------------------------------
    // Operations forwarded to the controllers
    // -----------------------------------------------------------------------

    /// Add a task from raw input. Input is trimmed; blank input does nothing.
    pub fn add_task(&mut self, raw: &str) -> Option<TaskId> {
        let id = ignore_store_error(self.store.add(raw.trim(), &mut self.notifier))?;
        self.cursor = self.store.total() - 1;
        Some(id)
    }

    pub fn toggle_task(&mut self, id: TaskId) {
        ignore_store_error(self.store.toggle(id, &mut self.notifier));
    }

    pub fn remove_task(&mut self, id: TaskId) {
        ignore_store_error(self.store.remove(id, &mut self.notifier));
        self.clamp_cursor();
    }

    pub fn update_task(&mut self, id: TaskId, title: &str) {
        ignore_store_error(self.store.update(id, title, &mut self.notifier));
    }

    /// Start renaming `id` and switch to Edit mode
    pub fn begin_edit(&mut self, id: TaskId, title: &str) {
        self.edit.begin(id, title);
        self.edit_cursor = self.edit.draft().len();
        self.mode = Mode::Edit;
    }

    pub fn update_draft(&mut self, text: &str) {
        self.edit.update_draft(text);
        self.edit_cursor = self.edit.draft().len();
    }

    /// Save the draft into `id` and return to Navigate
    pub fn commit_edit(&mut self, id: TaskId) {
        ignore_store_error(self.edit.commit(id, &mut self.store, &mut self.notifier));
        self.edit_cursor = 0;
        self.mode = Mode::Navigate;
    }

    /// Reset the draft to the stored title. The session stays open.
    pub fn reseed_edit(&mut self) {
        let Some(id) = self.edit.active() else {
            return;
        };
        match self.store.get(id).map(|t| t.title.clone()) {
            Some(title) => self.begin_edit(id, &title),
            None => tracing::warn!(%id, "edited task disappeared"),
        }
    }

    /// Fire due notification timers. Returns true if the screen changed.
    pub fn tick(&mut self) -> bool {
        self.notifier.tick()
    }

    /// How long the event loop may wait before the next timer is due
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        match self.notifier.next_deadline() {
            Some(deadline) => deadline.saturating_duration_since(now).min(MAX_POLL),
            None => MAX_POLL,
        }
    }
}

/// Store errors never surface to the user; log and carry on
fn ignore_store_error<T>(result: Result<T, StoreError>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!(error = %e, "ignored task operation");
            None
        }
    }
}

/// Run the TUI application
pub fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(config);
    tracing::info!(tasks = app.store.total(), "starting tui");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!(
        tasks = app.store.total(),
        completed = app.store.completed_count(),
        "tui exited"
    );
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        let timeout = app.poll_timeout(Instant::now());
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }
        app.tick();

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
