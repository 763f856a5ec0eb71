//! Greeting screen — the start destination.

use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::theme;

pub fn render(f: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled("Hello, Android!", theme::accent_bold())),
        Line::from(""),
        Line::from(Span::styled(
            "A demo third-party app store for your wrist.",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "Availability of listed apps is not guaranteed.",
            theme::muted(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Enter] ", theme::accent()),
            Span::styled("Show List", theme::neutral()),
        ]),
    ];

    let para = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(para, area);
}
