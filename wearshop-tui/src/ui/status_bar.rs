//! Bottom status bar — key hints for the current screen, active toast.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use wearshop_core::notice::NoticeLevel;
use wearshop_core::route::Route;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let hints = match app.nav.current() {
        Route::Menu => " Enter:list  e:notices  q:quit",
        Route::List => " j/k:move  Enter:open  a:alert  Esc:back  q:quit",
        Route::Detail { .. } => " d:download  j/k:scroll  Esc:back  q:quit",
    };

    let mut spans: Vec<Span> = vec![Span::styled(hints, theme::muted())];

    if let Some((notice, _)) = &app.active_notice {
        let style = match notice.level {
            NoticeLevel::Info => theme::accent(),
            NoticeLevel::Warning => theme::warning(),
            NoticeLevel::Error => theme::negative(),
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(notice.message.as_str(), style));
    }

    let line = Line::from(spans);
    let para = Paragraph::new(line);
    f.render_widget(para, area);
}
