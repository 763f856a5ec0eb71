//! Keyboard input dispatch — overlay and dialog first, then global keys,
//! then the handler for whichever screen is current.
//!
//! Transition triggers don't need explicit disabling here: the navigator
//! serializes requests itself while a transition is in flight.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use wearshop_core::nav::BackAction;
use wearshop_core::route::Route;

use crate::app::{AppState, Overlay};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. The notice history overlay consumes input first.
    if app.overlay == Overlay::NoticeHistory {
        handle_history_overlay(app, key);
        return;
    }

    // 2. A visible dialog is modal.
    if app.dialog.is_visible() {
        handle_dialog(app, key);
        return;
    }

    // 3. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('e') => {
            app.overlay = Overlay::NoticeHistory;
            app.notice_scroll = 0;
            return;
        }
        // The swipe-dismiss gesture of the watch maps to Esc/Backspace.
        KeyCode::Esc | KeyCode::Backspace => {
            if app.nav.dismiss() == BackAction::Exit {
                app.running = false;
            }
            return;
        }
        _ => {}
    }

    // 4. Screen-specific keys.
    match app.nav.current().clone() {
        Route::Menu => handle_menu_key(app, key),
        Route::List => handle_list_key(app, key),
        Route::Detail { app_name, file_url } => {
            handle_detail_key(app, key, &app_name, &file_url)
        }
    }
}

fn handle_history_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('e') => {
            app.overlay = Overlay::None;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if app.notice_scroll + 1 < app.notice_history.len() {
                app.notice_scroll += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.notice_scroll = app.notice_scroll.saturating_sub(1);
        }
        _ => {}
    }
}

fn handle_dialog(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char('y') => app.dialog.confirm(),
        KeyCode::Char('n') | KeyCode::Char('c') => app.dialog.cancel(),
        // Backdrop tap: close without firing a callback.
        KeyCode::Esc => app.dialog.dismiss(),
        _ => {}
    }
}

fn handle_menu_key(app: &mut AppState, key: KeyEvent) {
    if let KeyCode::Enter | KeyCode::Char('l') = key.code {
        app.nav.navigate(Route::List);
    }
}

fn handle_list_key(app: &mut AppState, key: KeyEvent) {
    let card_count = app.catalog.len();

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if card_count > 0 && app.list_cursor + 1 < card_count {
                app.list_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.list_cursor = app.list_cursor.saturating_sub(1);
        }
        KeyCode::Enter => {
            // Same flow as the original app: encode the destination into a
            // path string and hand it to the navigation layer.
            if let Some(entry) = app.selected_entry() {
                let path = Route::detail(&entry.app_name, &entry.file_url).to_path();
                if let Some(route) = Route::parse(&path) {
                    app.detail_scroll = 0;
                    app.nav.navigate(route);
                }
            }
        }
        KeyCode::Char('a') => {
            app.dialog.open();
        }
        _ => {}
    }
}

fn handle_detail_key(app: &mut AppState, key: KeyEvent, app_name: &str, file_url: &str) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.detail_scroll = app.detail_scroll.saturating_add(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.detail_scroll = app.detail_scroll.saturating_sub(1);
        }
        KeyCode::Char('d') | KeyCode::Enter => {
            app.request_download(app_name, file_url);
        }
        _ => {}
    }
}
