//! UI state persistence — JSON save/load across restarts.
//!
//! The last visited route is stored as its encoded path string, so this is
//! the one place in the shell that leans on the route codec the same way
//! the original app did.

use std::path::Path;

use serde::{Deserialize, Serialize};

use wearshop_core::route::Route;

use crate::app::AppState;

/// Serializable subset of app state that persists across restarts.
#[derive(Debug, Serialize, Deserialize)]
pub struct PersistedState {
    /// Encoded path of the last visited route, e.g. `appDetail/App%206/...`.
    pub last_route: String,
    pub list_cursor: usize,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            last_route: Route::Menu.to_path(),
            list_cursor: 0,
        }
    }
}

/// Load persisted state from disk. Returns defaults if the file is missing
/// or corrupt.
pub fn load(path: &Path) -> PersistedState {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => PersistedState::default(),
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Extract persisted state from the app.
pub fn extract(app: &AppState) -> PersistedState {
    PersistedState {
        last_route: app.nav.current().to_path(),
        list_cursor: app.list_cursor,
    }
}

/// Apply persisted state, replaying navigation so the back-stack matches
/// what organic navigation to that route would have produced.
pub fn apply(app: &mut AppState, state: PersistedState) {
    let route = Route::parse(&state.last_route).unwrap_or(Route::Menu);
    match route {
        Route::Menu => {}
        Route::List => {
            replay(app, Route::List);
        }
        detail @ Route::Detail { .. } => {
            replay(app, Route::List);
            replay(app, detail);
        }
    }
    if !app.catalog.is_empty() {
        app.list_cursor = state.list_cursor.min(app.catalog.len() - 1);
    }
}

fn replay(app: &mut AppState, route: Route) {
    app.nav.navigate(route);
    app.nav.transition_complete();
}
