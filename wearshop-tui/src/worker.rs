//! Background submission thread — keeps the download service off the UI
//! thread.
//!
//! Communication with the main thread is via `mpsc` channels. The worker
//! owns the service behind the trait object, so tests script faults by
//! handing it a fake.

use std::sync::mpsc::{Receiver, Sender};
use std::thread::{self, JoinHandle};

use wearshop_core::download::{DownloadHandle, DownloadRequest, DownloadService};

/// Commands sent from the UI to the worker.
#[derive(Debug)]
pub enum WorkerCommand {
    Submit {
        app_name: String,
        request: DownloadRequest,
    },
    Shutdown,
}

/// Responses sent from the worker back to the UI.
///
/// Only submission outcomes exist; download completion belongs to the
/// service and never comes back here.
#[derive(Debug, Clone)]
pub enum WorkerResponse {
    Submitted {
        app_name: String,
        handle: DownloadHandle,
    },
    SubmitFailed {
        app_name: String,
        error: String,
    },
}

/// Spawn the download worker thread.
pub fn spawn_worker(
    service: Box<dyn DownloadService>,
    rx: Receiver<WorkerCommand>,
    tx: Sender<WorkerResponse>,
) -> JoinHandle<()> {
    thread::Builder::new()
        .name("wearshop-downloads".into())
        .spawn(move || worker_loop(service, rx, tx))
        .expect("failed to spawn download worker thread")
}

fn worker_loop(
    service: Box<dyn DownloadService>,
    rx: Receiver<WorkerCommand>,
    tx: Sender<WorkerResponse>,
) {
    loop {
        match rx.recv() {
            Ok(WorkerCommand::Shutdown) | Err(_) => break,
            Ok(WorkerCommand::Submit { app_name, request }) => {
                let response = match service.submit(&request) {
                    Ok(handle) => WorkerResponse::Submitted { app_name, handle },
                    Err(error) => WorkerResponse::SubmitFailed {
                        app_name,
                        error: error.to_string(),
                    },
                };
                let _ = tx.send(response);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use wearshop_core::download::{DownloadError, InMemoryDownloadService};

    /// Service that faults on every submission.
    struct RefusingService;

    impl DownloadService for RefusingService {
        fn name(&self) -> &str {
            "refusing service"
        }

        fn submit(&self, _request: &DownloadRequest) -> Result<DownloadHandle, DownloadError> {
            Err(DownloadError::ServiceUnavailable("device busy".into()))
        }
    }

    #[test]
    fn worker_shutdown_joins_cleanly() {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, _resp_rx) = mpsc::channel();
        let handle = spawn_worker(Box::new(InMemoryDownloadService::new()), cmd_rx, resp_tx);
        cmd_tx.send(WorkerCommand::Shutdown).unwrap();
        handle.join().expect("worker should join cleanly");
    }

    #[test]
    fn accepted_submission_reports_a_handle() {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();
        let handle = spawn_worker(Box::new(InMemoryDownloadService::new()), cmd_rx, resp_tx);

        cmd_tx
            .send(WorkerCommand::Submit {
                app_name: "App 6".into(),
                request: DownloadRequest::for_app("App 6", "https://example.com/files/app6.apk"),
            })
            .unwrap();

        match resp_rx.recv().unwrap() {
            WorkerResponse::Submitted { app_name, handle } => {
                assert_eq!(app_name, "App 6");
                assert_eq!(handle, DownloadHandle(1));
            }
            other => panic!("unexpected response {other:?}"),
        }

        cmd_tx.send(WorkerCommand::Shutdown).unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn faulting_service_reports_exactly_one_failure() {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();
        let handle = spawn_worker(Box::new(RefusingService), cmd_rx, resp_tx);

        cmd_tx
            .send(WorkerCommand::Submit {
                app_name: "App 2".into(),
                request: DownloadRequest::for_app("App 2", "https://example.com/files/app2.apk"),
            })
            .unwrap();
        cmd_tx.send(WorkerCommand::Shutdown).unwrap();
        handle.join().unwrap();

        match resp_rx.try_recv().unwrap() {
            WorkerResponse::SubmitFailed { error, .. } => {
                assert!(error.contains("device busy"));
            }
            other => panic!("unexpected response {other:?}"),
        }
        assert!(resp_rx.try_recv().is_err(), "exactly one response");
    }
}
