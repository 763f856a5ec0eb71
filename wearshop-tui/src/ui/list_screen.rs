//! Card list screen — scrollable app cards from the catalog.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let items: Vec<ListItem> = app
        .catalog
        .iter()
        .map(|entry| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!("{:<8}", entry.app_name), theme::accent()),
                    Span::styled(&entry.card_title, theme::neutral()),
                    Span::styled("  Now", theme::muted()),
                ]),
                Line::from(Span::styled(format!("  {}", entry.card_body), theme::muted())),
            ])
        })
        .collect();

    let list = List::new(items).highlight_style(theme::card_selected());

    let mut state = ListState::default();
    state.select(Some(app.list_cursor));
    f.render_stateful_widget(list, area, &mut state);
}
