//! Background execution of one browser session.
//!
//! The UI thread never blocks on the browser: each run gets its own worker
//! thread, which builds its own tokio runtime, drives the session to
//! completion, and reports back over an mpsc channel. The UI drains the
//! channel on its next frame; a repaint is requested so that frame happens
//! promptly.

use eframe::egui;
use skylark_browser::{Error, SessionRunner};
use skylark_core::RunRequest;
use std::sync::mpsc::Sender;
use std::thread::JoinHandle;
use std::time::Duration;

/// Terminal result of one run, delivered back to the UI thread
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    Finished,
    /// The underlying error message, unmodified
    Failed(String),
}

/// Run one session on a fresh worker thread
pub fn spawn_run(
    runner: SessionRunner,
    request: RunRequest,
    tx: Sender<RunOutcome>,
    ctx: egui::Context,
) -> JoinHandle<()> {
    std::thread::spawn(move || {
        let outcome = match run_blocking(&runner, &request) {
            Ok(()) => RunOutcome::Finished,
            Err(e) => {
                tracing::error!("browser session failed: {e}");
                RunOutcome::Failed(e.to_string())
            }
        };

        // The UI may already be gone on shutdown; nothing to do then
        let _ = tx.send(outcome);
        ctx.request_repaint();
    })
}

fn run_blocking(runner: &SessionRunner, request: &RunRequest) -> Result<(), Error> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| Error::Execution(format!("failed to start async runtime: {e}")))?;

    let result = runtime.block_on(runner.run(request)).map(|report| {
        tracing::debug!(title = ?report.title, "session report");
    });

    // Don't let a straggling CDP task keep the worker thread alive
    runtime.shutdown_timeout(Duration::from_millis(100));

    result
}
