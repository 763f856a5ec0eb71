//! Application state — single-owner, main-thread only.
//!
//! The navigator is the single source of truth for which screen renders.
//! The download worker thread communicates via channels; dialog callbacks
//! report through an internal notice channel so they never need a mutable
//! borrow of this struct.

use std::collections::VecDeque;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use chrono::NaiveDateTime;

use wearshop_core::catalog::{demo_catalog, CatalogEntry};
use wearshop_core::dialog::DialogState;
use wearshop_core::download::DownloadRequest;
use wearshop_core::nav::Navigator;
use wearshop_core::notice::{Notice, NoticeLevel};
use wearshop_core::route::Route;

use crate::worker::{WorkerCommand, WorkerResponse};

/// How long a toast stays in the status bar.
pub const NOTICE_LIFETIME: Duration = Duration::from_millis(2500);

const NOTICE_HISTORY_CAP: usize = 50;

/// Which overlay (if any) is shown on top of the current screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    NoticeHistory,
}

/// A notice kept for the history overlay.
#[derive(Debug, Clone)]
pub struct NoticeRecord {
    pub timestamp: NaiveDateTime,
    pub level: NoticeLevel,
    pub message: String,
}

/// Top-level application state.
pub struct AppState {
    // Navigation
    pub nav: Navigator,
    pub running: bool,

    // Screen state
    pub catalog: Vec<CatalogEntry>,
    pub list_cursor: usize,
    pub detail_scroll: usize,
    pub dialog: DialogState,

    // Notices
    pub active_notice: Option<(Notice, Instant)>,
    pub notice_history: VecDeque<NoticeRecord>,
    pub overlay: Overlay,
    pub notice_scroll: usize,
    notice_tx: Sender<Notice>,
    notice_rx: Receiver<Notice>,

    // Worker communication
    pub worker_tx: Sender<WorkerCommand>,
    pub worker_rx: Receiver<WorkerResponse>,
}

impl AppState {
    pub fn new(worker_tx: Sender<WorkerCommand>, worker_rx: Receiver<WorkerResponse>) -> Self {
        let (notice_tx, notice_rx) = mpsc::channel();

        let mut dialog = DialogState::new();
        let tx = notice_tx.clone();
        dialog.set_on_ok(move || {
            let _ = tx.send(Notice::info("Dialog confirmed"));
        });
        let tx = notice_tx.clone();
        dialog.set_on_cancel(move || {
            let _ = tx.send(Notice::info("Dialog cancelled"));
        });

        Self {
            nav: Navigator::new(Route::Menu),
            running: true,
            catalog: demo_catalog(),
            list_cursor: 0,
            detail_scroll: 0,
            dialog,
            active_notice: None,
            notice_history: VecDeque::with_capacity(NOTICE_HISTORY_CAP),
            overlay: Overlay::None,
            notice_scroll: 0,
            notice_tx,
            notice_rx,
            worker_tx,
            worker_rx,
        }
    }

    /// The catalog entry under the list cursor.
    pub fn selected_entry(&self) -> Option<&CatalogEntry> {
        self.catalog.get(self.list_cursor)
    }

    /// Show a toast and append it to the history ring.
    pub fn post_notice(&mut self, notice: Notice) {
        self.notice_history.push_front(NoticeRecord {
            timestamp: chrono::Local::now().naive_local(),
            level: notice.level,
            message: notice.message.clone(),
        });
        if self.notice_history.len() > NOTICE_HISTORY_CAP {
            self.notice_history.pop_back();
        }
        self.active_notice = Some((notice, Instant::now()));
    }

    /// Pull notices posted by dialog callbacks.
    pub fn drain_notices(&mut self) {
        while let Ok(notice) = self.notice_rx.try_recv() {
            self.post_notice(notice);
        }
    }

    /// Expire the active toast once its lifetime has passed.
    pub fn tick(&mut self) {
        if let Some((_, shown_at)) = &self.active_notice {
            if shown_at.elapsed() >= NOTICE_LIFETIME {
                self.active_notice = None;
            }
        }
    }

    /// Detail screen download action, caught at the screen boundary.
    ///
    /// An empty URL never reaches the service; everything else is handed
    /// to the worker fire-and-forget, and the submission outcome comes
    /// back as a [`WorkerResponse`].
    pub fn request_download(&mut self, app_name: &str, file_url: &str) {
        if file_url.is_empty() {
            self.post_notice(Notice::warning(format!(
                "Download URL is not available for {app_name}"
            )));
            return;
        }
        let request = DownloadRequest::for_app(app_name, file_url);
        let _ = self.worker_tx.send(WorkerCommand::Submit {
            app_name: app_name.to_string(),
            request,
        });
    }

    /// Apply a worker response. Navigation state is never touched here.
    pub fn handle_worker_response(&mut self, response: WorkerResponse) {
        match response {
            WorkerResponse::Submitted { app_name, handle: _ } => {
                self.post_notice(Notice::info(format!("Download started for {app_name}")));
            }
            WorkerResponse::SubmitFailed { app_name: _, error } => {
                self.post_notice(Notice::error(format!("Failed to start download: {error}")));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wearshop_core::download::DownloadHandle;

    fn test_app() -> (AppState, Receiver<WorkerCommand>, Sender<WorkerResponse>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();
        (AppState::new(cmd_tx, resp_rx), cmd_rx, resp_tx)
    }

    #[test]
    fn notice_history_caps_at_50() {
        let (mut app, _cmd, _resp) = test_app();
        for i in 0..60 {
            app.post_notice(Notice::info(format!("notice {i}")));
        }
        assert_eq!(app.notice_history.len(), 50);
        assert!(app.notice_history[0].message.contains("59"));
    }

    #[test]
    fn dialog_callbacks_surface_as_notices() {
        let (mut app, _cmd, _resp) = test_app();
        app.dialog.open();
        app.dialog.cancel();
        app.drain_notices();
        let (notice, _) = app.active_notice.as_ref().expect("cancel posts a notice");
        assert_eq!(notice.message, "Dialog cancelled");
    }

    #[test]
    fn empty_url_download_posts_unavailable_and_skips_service() {
        let (mut app, cmd_rx, _resp) = test_app();
        app.request_download("App 6", "");

        assert!(cmd_rx.try_recv().is_err(), "no command may reach the worker");
        let (notice, _) = app.active_notice.as_ref().expect("warning posted");
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert!(notice.message.contains("not available for App 6"));
    }

    #[test]
    fn valid_url_download_sends_one_command() {
        let (mut app, cmd_rx, _resp) = test_app();
        app.request_download("App 6", "https://example.com/files/app6.apk");

        match cmd_rx.try_recv().expect("one command sent") {
            WorkerCommand::Submit { app_name, request } => {
                assert_eq!(app_name, "App 6");
                assert_eq!(request.destination, "App_6.apk");
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert!(cmd_rx.try_recv().is_err());
        assert!(app.active_notice.is_none(), "no notice until the worker answers");
    }

    #[test]
    fn submit_fault_posts_one_error_and_leaves_navigation_alone() {
        let (mut app, _cmd, _resp) = test_app();
        app.nav.navigate(Route::detail("App 6", "https://example.com/files/app6.apk"));
        app.nav.transition_complete();
        let before = app.nav.current().clone();

        app.handle_worker_response(WorkerResponse::SubmitFailed {
            app_name: "App 6".into(),
            error: "download service unavailable: device busy".into(),
        });

        let (notice, _) = app.active_notice.as_ref().expect("error posted");
        assert_eq!(notice.level, NoticeLevel::Error);
        assert!(notice.message.starts_with("Failed to start download"));
        assert_eq!(app.notice_history.len(), 1);
        assert_eq!(app.nav.current(), &before);
    }

    #[test]
    fn successful_submission_posts_started_notice() {
        let (mut app, _cmd, _resp) = test_app();
        app.handle_worker_response(WorkerResponse::Submitted {
            app_name: "App 3".into(),
            handle: DownloadHandle(7),
        });
        let (notice, _) = app.active_notice.as_ref().unwrap();
        assert_eq!(notice.message, "Download started for App 3");
        assert_eq!(notice.level, NoticeLevel::Info);
    }

    #[test]
    fn tick_expires_stale_notice() {
        let (mut app, _cmd, _resp) = test_app();
        app.post_notice(Notice::info("hello"));
        // Backdate the toast past its lifetime.
        if let Some((_, shown_at)) = &mut app.active_notice {
            *shown_at = Instant::now()
                .checked_sub(NOTICE_LIFETIME + Duration::from_millis(1))
                .expect("monotonic clock is past the notice lifetime");
        }
        app.tick();
        assert!(app.active_notice.is_none());
    }
}
