use std::io;
use std::time::Duration;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
    MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;

use crate::model::{Task, TaskId, TimeOfDay, UiConfig};
use crate::ops::grouping::group_by_time_of_day;
use crate::ops::modal::ModalController;
use crate::ops::store::{PendingDelete, TaskStore};

use super::hit::HitMap;
use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode, derived from which overlay is up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Board with no overlay
    Navigate,
    /// Add/edit/view modal open
    Modal,
    /// Delete confirmation prompt
    Confirm,
    /// Blocking notice (validation failure)
    Notice,
}

/// Focusable parts of the add/edit form, in tab order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormField {
    #[default]
    Title,
    TimeOfDay,
    Priority,
    Description,
    Save,
}

impl FormField {
    const ORDER: [FormField; 5] = [
        FormField::Title,
        FormField::TimeOfDay,
        FormField::Priority,
        FormField::Description,
        FormField::Save,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn is_text(self) -> bool {
        matches!(self, FormField::Title | FormField::Description)
    }
}

/// Focus and text cursor inside the open form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormState {
    pub focus: FormField,
    /// Byte offset into the focused text field
    pub cursor: usize,
}

/// Selected card on the board: a column and a position within it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub group: TimeOfDay,
    pub index: usize,
}

/// Main application state
pub struct App {
    pub store: TaskStore,
    pub modal: ModalController,
    pub form: FormState,
    pub selection: Selection,
    /// First visible card per column
    pub scroll: [usize; 3],
    /// Delete waiting for y/n
    pub confirm: Option<PendingDelete>,
    /// Blocking notice text
    pub notice: Option<String>,
    /// One-shot message for the status row
    pub status_message: Option<String>,
    pub show_help: bool,
    pub show_key_hints: bool,
    pub should_quit: bool,
    pub theme: Theme,
    /// Clickable regions from the last draw
    pub hit_map: HitMap,
}

impl App {
    pub fn new(store: TaskStore, ui: &UiConfig) -> Self {
        App {
            store,
            modal: ModalController::new(),
            form: FormState::default(),
            selection: Selection::default(),
            scroll: [0; 3],
            confirm: None,
            notice: None,
            status_message: None,
            show_help: false,
            show_key_hints: ui.show_key_hints,
            should_quit: false,
            theme: Theme::from_config(ui),
            hit_map: HitMap::default(),
        }
    }

    pub fn mode(&self) -> Mode {
        if self.notice.is_some() {
            Mode::Notice
        } else if self.confirm.is_some() {
            Mode::Confirm
        } else if self.modal.is_open() {
            Mode::Modal
        } else {
            Mode::Navigate
        }
    }

    /// Number of tasks in a column right now
    pub fn group_len(&self, group: TimeOfDay) -> usize {
        self.store
            .tasks()
            .iter()
            .filter(|t| t.time_of_day == group)
            .count()
    }

    /// The task under the board cursor, if the column has any
    pub fn selected_task(&self) -> Option<&Task> {
        let groups = group_by_time_of_day(self.store.tasks());
        let group = groups.get(self.selection.group);
        let idx = self.selection.index.min(group.len().checked_sub(1)?);
        Some(group.tasks[idx])
    }

    /// Keep the cursor inside its column after the collection changes
    pub fn clamp_selection(&mut self) {
        let len = self.group_len(self.selection.group);
        self.selection.index = self.selection.index.min(len.saturating_sub(1));
    }

    /// Move the cursor onto task `id`, wherever it lives
    pub fn select_task(&mut self, id: TaskId) {
        let groups = group_by_time_of_day(self.store.tasks());
        for group in groups.iter() {
            if let Some(index) = group.tasks.iter().position(|t| t.id == id) {
                self.selection = Selection {
                    group: group.time_of_day,
                    index,
                };
                return;
            }
        }
    }
}

/// Run the board until the user quits
pub fn run(store: TaskStore, ui: &UiConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(store, ui);
    info!(tasks = app.store.len(), "session started");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if ui.mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    if ui.mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!(tasks = app.store.len(), "session ended");
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Mouse(mouse)
                    if mouse.kind == MouseEventKind::Down(MouseButton::Left) =>
                {
                    input::handle_click(app, mouse.column, mouse.row);
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
