//! Download service boundary — request type, structured errors, trait.
//!
//! The device download manager is an external collaborator: the core only
//! ever submits a request and observes whether submission was accepted.
//! Completion, progress, and cancellation are entirely the service's
//! business (fire-and-forget). The trait exists so tests can substitute a
//! scripted fake for deterministic fault injection.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use thiserror::Error;

/// A download submission, built from a detail screen's route parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub source_url: String,
    pub title: String,
    pub description: String,
    /// File name under the device's downloads directory.
    pub destination: String,
    /// Whether the device should show a notification when the download
    /// completes.
    pub notify_on_complete: bool,
}

impl DownloadRequest {
    /// Build the standard request for an app: titled after the app, saved
    /// as `<App_Name>.apk` with spaces replaced by underscores.
    pub fn for_app(app_name: &str, file_url: &str) -> Self {
        Self {
            source_url: file_url.to_string(),
            title: format!("Downloading {app_name}"),
            description: format!("Downloading file for {app_name}"),
            destination: format!("{}.apk", app_name.replace(' ', "_")),
            notify_on_complete: true,
        }
    }
}

/// Structured submission faults.
///
/// Displayable in the status bar as-is; none of these are fatal to the
/// caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DownloadError {
    #[error("download URL is empty")]
    EmptyUrl,

    #[error("unsupported URL scheme in '{0}'")]
    UnsupportedScheme(String),

    #[error("download service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("request rejected: {0}")]
    Rejected(String),
}

/// Opaque handle to an enqueued download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DownloadHandle(pub u64);

/// Trait for the device download manager.
///
/// Implementations own the actual transfer; callers only need submission
/// success or failure.
pub trait DownloadService: Send + Sync {
    /// Human-readable name of this service.
    fn name(&self) -> &str;

    /// Submit a request. Returns an opaque handle on acceptance.
    fn submit(&self, request: &DownloadRequest) -> Result<DownloadHandle, DownloadError>;
}

/// In-process stand-in for the device download manager.
///
/// Validates the request, records it, and hands out sequential handles.
/// Used by the demo shell and as the happy-path service in tests.
pub struct InMemoryDownloadService {
    next_handle: AtomicU64,
    accepted: Mutex<Vec<DownloadRequest>>,
}

impl InMemoryDownloadService {
    pub fn new() -> Self {
        Self {
            next_handle: AtomicU64::new(1),
            accepted: Mutex::new(Vec::new()),
        }
    }

    /// Requests accepted so far, in submission order.
    pub fn accepted(&self) -> Vec<DownloadRequest> {
        self.accepted.lock().expect("accepted lock poisoned").clone()
    }
}

impl Default for InMemoryDownloadService {
    fn default() -> Self {
        Self::new()
    }
}

impl DownloadService for InMemoryDownloadService {
    fn name(&self) -> &str {
        "in-memory download manager"
    }

    fn submit(&self, request: &DownloadRequest) -> Result<DownloadHandle, DownloadError> {
        if request.source_url.is_empty() {
            return Err(DownloadError::EmptyUrl);
        }
        if !request.source_url.starts_with("http://") && !request.source_url.starts_with("https://")
        {
            return Err(DownloadError::UnsupportedScheme(request.source_url.clone()));
        }
        self.accepted
            .lock()
            .expect("accepted lock poisoned")
            .push(request.clone());
        let id = self.next_handle.fetch_add(1, Ordering::Relaxed);
        Ok(DownloadHandle(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_app_derives_destination_from_name() {
        let request = DownloadRequest::for_app("App 6", "https://example.com/files/app6.apk");
        assert_eq!(request.destination, "App_6.apk");
        assert_eq!(request.title, "Downloading App 6");
        assert!(request.notify_on_complete);
    }

    #[test]
    fn submit_hands_out_sequential_handles() {
        let service = InMemoryDownloadService::new();
        let request = DownloadRequest::for_app("App 1", "https://example.com/files/app1.apk");
        assert_eq!(service.submit(&request), Ok(DownloadHandle(1)));
        assert_eq!(service.submit(&request), Ok(DownloadHandle(2)));
        assert_eq!(service.accepted().len(), 2);
    }

    #[test]
    fn empty_url_is_rejected_without_recording() {
        let service = InMemoryDownloadService::new();
        let request = DownloadRequest::for_app("App 1", "");
        assert_eq!(service.submit(&request), Err(DownloadError::EmptyUrl));
        assert!(service.accepted().is_empty());
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        let service = InMemoryDownloadService::new();
        let request = DownloadRequest::for_app("App 1", "ftp://example.com/app1.apk");
        assert!(matches!(
            service.submit(&request),
            Err(DownloadError::UnsupportedScheme(_))
        ));
    }
}
