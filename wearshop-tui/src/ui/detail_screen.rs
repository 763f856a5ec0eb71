//! Detail screen — app header, scrollable description, download action.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState, app_name: &str, file_url: &str) {
    // Description comes from the catalog when the app is known; a route
    // with a default-substituted name still renders.
    let description = app
        .catalog
        .iter()
        .find(|entry| entry.app_name == app_name)
        .map(|entry| entry.description.clone())
        .unwrap_or_else(|| format!("No description available for {app_name}."));

    let download_hint = if file_url.is_empty() {
        Span::styled("Download unavailable", theme::warning())
    } else {
        Span::styled(format!("[d] Download from {file_url}"), theme::positive())
    };

    let text = vec![
        Line::from(Span::styled(app_name.to_string(), theme::accent_bold())),
        Line::from(""),
        Line::from(Span::raw(description)),
        Line::from(""),
        Line::from(download_hint),
        Line::from(Span::styled("[j/k] scroll  [Esc] back", theme::muted())),
    ];

    let para = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .scroll((app.detail_scroll as u16, 0));
    f.render_widget(para, area);
}
