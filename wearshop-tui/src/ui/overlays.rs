//! Overlay widgets — the modal dialog and the notice history.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;
use crate::ui::centered_rect;

/// The single modal dialog.
pub fn render_dialog(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 40, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Title ")
        .title_style(theme::accent_bold());

    let text = vec![
        Line::from(""),
        Line::from(Span::raw(
            "An unknown error occurred during the request.",
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Enter] ", theme::positive()),
            Span::styled("Ok   ", theme::muted()),
            Span::styled("[c] ", theme::negative()),
            Span::styled("Cancel   ", theme::muted()),
            Span::styled("[Esc] ", theme::neutral()),
            Span::styled("dismiss", theme::muted()),
        ]),
    ];

    let para = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}

/// Notice history overlay.
pub fn render_notice_history(f: &mut Frame, area: Rect, app: &AppState) {
    let popup = centered_rect(80, 70, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::neutral())
        .title(format!(
            " Notices ({}) [Esc]close [j/k]scroll ",
            app.notice_history.len()
        ))
        .title_style(theme::neutral());

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    if app.notice_history.is_empty() {
        let text = Paragraph::new(Span::styled("No notices recorded.", theme::muted()));
        f.render_widget(text, inner);
        return;
    }

    let visible_height = inner.height as usize;
    let start = app.notice_scroll;
    let end = (start + visible_height).min(app.notice_history.len());

    let mut lines: Vec<Line> = Vec::new();
    for i in start..end {
        let record = &app.notice_history[i];
        let style = if i == app.notice_scroll {
            theme::accent().add_modifier(Modifier::BOLD)
        } else {
            theme::muted()
        };

        lines.push(Line::from(vec![
            Span::styled(
                format!("[{}] ", record.timestamp.format("%H:%M:%S")),
                theme::muted(),
            ),
            Span::styled(format!("[{}] ", record.level.label()), theme::warning()),
            Span::styled(&record.message, style),
        ]));
    }

    let para = Paragraph::new(lines);
    f.render_widget(para, inner);
}
