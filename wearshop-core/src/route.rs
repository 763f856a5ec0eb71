//! Route table — typed destinations and the path-string codec.
//!
//! Destinations are a sum type rather than bare strings, so a screen can
//! only receive the parameters its route actually declares. The path-string
//! form exists for the persistence layer and for anything else that needs a
//! flat representation; parameter values are percent-encoded so reserved
//! path characters (`/`, `?`, `%`) survive the round trip.

use std::fmt;

use urlencoding::{decode, encode};

/// Substituted when the detail route is missing its app-name segment.
///
/// Missing parameters resolve to a default instead of failing. This is a
/// deliberate permissive-UI choice carried over from the app this demo is
/// based on: a half-formed route renders a placeholder screen rather than
/// refusing to navigate.
pub const DEFAULT_APP_NAME: &str = "Unknown App";

/// A named, parameterized UI destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Greeting screen (start destination).
    Menu,
    /// Scrollable list of app cards.
    List,
    /// Detail screen for a single app.
    Detail { app_name: String, file_url: String },
}

impl Route {
    /// Convenience constructor for the detail route.
    pub fn detail(app_name: impl Into<String>, file_url: impl Into<String>) -> Self {
        Route::Detail {
            app_name: app_name.into(),
            file_url: file_url.into(),
        }
    }

    /// Encode this route as a concrete path string.
    ///
    /// Parameter values are percent-encoded, so the segment separator `/`
    /// never appears inside a value.
    pub fn to_path(&self) -> String {
        match self {
            Route::Menu => "menu".to_string(),
            Route::List => "list".to_string(),
            Route::Detail { app_name, file_url } => {
                format!("appDetail/{}/{}", encode(app_name), encode(file_url))
            }
        }
    }

    /// Parse a concrete path string back into a route.
    ///
    /// Returns `None` for unknown route names. Missing `appDetail` segments
    /// fall back to [`DEFAULT_APP_NAME`] / the empty URL (see the constant's
    /// docs); a segment that fails to decode is treated the same way.
    pub fn parse(path: &str) -> Option<Route> {
        let mut segments = path.split('/');
        match segments.next()? {
            "menu" => Some(Route::Menu),
            "list" => Some(Route::List),
            "appDetail" => {
                let app_name = segments
                    .next()
                    .map(decode_segment)
                    .unwrap_or_else(|| DEFAULT_APP_NAME.to_string());
                let file_url = segments.next().map(decode_segment).unwrap_or_default();
                Some(Route::Detail { app_name, file_url })
            }
            _ => None,
        }
    }

    /// Short human-readable name of the destination.
    pub fn label(&self) -> &'static str {
        match self {
            Route::Menu => "Menu",
            Route::List => "App Cards",
            Route::Detail { .. } => "Detail",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}

fn decode_segment(segment: &str) -> String {
    match decode(segment) {
        Ok(value) => value.into_owned(),
        // Undecodable bytes get the same permissive treatment as a
        // missing segment: show something rather than fail navigation.
        Err(_) => segment.to_string(),
    }
}
