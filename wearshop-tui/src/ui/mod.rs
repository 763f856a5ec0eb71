//! Top-level UI layout — one screen at a time, status bar, overlays.

pub mod detail_screen;
pub mod list_screen;
pub mod menu_screen;
pub mod overlays;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use wearshop_core::route::Route;

use crate::app::{AppState, Overlay};
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    // Split: main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    let main_area = chunks[0];
    let status_area = chunks[1];

    draw_screen(f, main_area, app);
    status_bar::render(f, status_area, app);

    // Overlays on top: the modal dialog, then the notice history.
    if app.dialog.is_visible() {
        overlays::render_dialog(f, main_area);
    }
    if app.overlay == Overlay::NoticeHistory {
        overlays::render_notice_history(f, main_area, app);
    }
}

/// Draw whichever screen the navigator says is current.
fn draw_screen(f: &mut Frame, area: Rect, app: &AppState) {
    let route = app.nav.current().clone();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::screen_border())
        .title(format!(" {} ", route.label()))
        .title_style(theme::screen_title());

    let inner = block.inner(area);
    f.render_widget(block, area);

    match route {
        Route::Menu => menu_screen::render(f, inner),
        Route::List => list_screen::render(f, inner, app),
        Route::Detail { app_name, file_url } => {
            detail_screen::render(f, inner, app, &app_name, &file_url)
        }
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
