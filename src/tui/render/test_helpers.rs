use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::UiConfig;
use crate::ops::store::TaskStore;
use crate::tui::app::App;

/// Wide enough that seed titles are never truncated
pub const TERM_W: u16 = 120;
pub const TERM_H: u16 = 30;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Draw the whole screen for `app`, filling its hit map
pub fn draw(app: &mut App) -> String {
    render_to_string(TERM_W, TERM_H, |frame, _| super::render(frame, app))
}

/// Board with the three seed tasks
pub fn app_seeded() -> App {
    App::new(TaskStore::seeded(), &UiConfig::default())
}

/// Board with no tasks
pub fn app_empty() -> App {
    App::new(TaskStore::new(), &UiConfig::default())
}
