//! GUI application: the profile form and the run trigger.
//!
//! One window, one form. The Start button is disabled from the moment a run
//! is triggered until its outcome arrives back over the worker channel, so
//! at most one browser session exists at a time by construction. Parameter
//! edits live only in the form; they are snapshotted into the run request
//! and never written back to the config file.

use crate::worker::{self, RunOutcome};
use eframe::egui;
use skylark_browser::{BrowserLocator, SessionRunner};
use skylark_core::{MobilePlatform, ProfileParams, ProfileSet, RunRequest};
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender};

/// Default window width in pixels
const DEFAULT_WIDTH: f32 = 720.0;

/// Default window height in pixels
const DEFAULT_HEIGHT: f32 = 560.0;

/// Minimum window size in pixels
const MIN_WIDTH: f32 = 480.0;
const MIN_HEIGHT: f32 = 400.0;

/// Height cap for the scrollable parameter list
const PARAMS_MAX_HEIGHT: f32 = 280.0;

/// Default browser auto-close time in seconds
const DEFAULT_WAIT_SECS: u64 = 10;

pub struct LauncherApp {
    /// Profiles as loaded at startup; never mutated
    profiles: ProfileSet,
    /// Currently selected mobile platform
    platform: MobilePlatform,
    /// Editable (key, value) rows for the selected platform
    rows: Vec<(String, String)>,
    /// Launch the browser with a visible window
    show_browser: bool,
    /// Seconds to keep the browser open after navigation
    wait_secs: u64,
    /// A run is in progress; the trigger stays disabled until it reports
    running: bool,
    /// Error of the last run, shown in a modal dialog until dismissed
    last_error: Option<String>,
    /// Optional override for the Chromium executable
    browser_path: Option<PathBuf>,
    /// Receiver for outcomes from worker threads
    outcome_rx: Receiver<RunOutcome>,
    /// Sender side, cloned into each worker thread
    outcome_tx: Sender<RunOutcome>,
}

impl LauncherApp {
    pub fn new(profiles: ProfileSet, browser_path: Option<PathBuf>) -> Self {
        let (outcome_tx, outcome_rx) = std::sync::mpsc::channel();
        let platform = MobilePlatform::ALL[0];

        let mut app = Self {
            profiles,
            platform,
            rows: Vec::new(),
            show_browser: false,
            wait_secs: DEFAULT_WAIT_SECS,
            running: false,
            last_error: None,
            browser_path,
            outcome_rx,
            outcome_tx,
        };
        app.rebuild_rows();
        app
    }

    /// Replace the editable rows with the stored parameters of the
    /// selected platform, discarding any edits made for another one
    fn rebuild_rows(&mut self) {
        self.rows = self
            .profiles
            .params(self.platform)
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
    }

    fn select_platform(&mut self, platform: MobilePlatform) {
        if self.platform != platform {
            self.platform = platform;
            self.rebuild_rows();
        }
    }

    /// Snapshot of the form's current parameter values
    fn collect_params(&self) -> ProfileParams {
        self.rows
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Mark a run as started and capture everything it needs.
    /// Returns `None` while another run is still in progress.
    fn begin_run(&mut self) -> Option<RunRequest> {
        if self.running {
            return None;
        }
        self.running = true;
        Some(RunRequest::new(
            self.platform,
            self.collect_params(),
            self.show_browser,
            self.wait_secs,
        ))
    }

    fn start_run(&mut self, ctx: &egui::Context) {
        let Some(request) = self.begin_run() else {
            return;
        };

        tracing::info!(platform = %request.platform, "run triggered");
        let runner = SessionRunner::new(BrowserLocator::new(self.browser_path.clone()));
        worker::spawn_run(runner, request, self.outcome_tx.clone(), ctx.clone());
    }

    fn handle_outcome(&mut self, outcome: RunOutcome) {
        self.running = false;
        match outcome {
            RunOutcome::Finished => {
                tracing::info!("run finished");
            }
            RunOutcome::Failed(message) => {
                self.last_error = Some(message);
            }
        }
    }

    /// Drain outcomes delivered by worker threads since the last frame
    fn poll_outcomes(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.handle_outcome(outcome);
        }
    }

    fn show_form(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.horizontal(|ui| {
            ui.label("Test mobile system:");
            egui::ComboBox::from_id_salt("platform-select")
                .selected_text(self.platform.as_str())
                .show_ui(ui, |ui| {
                    let mut selected = self.platform;
                    for platform in MobilePlatform::ALL {
                        ui.selectable_value(&mut selected, platform, platform.as_str());
                    }
                    self.select_platform(selected);
                });
        });

        ui.checkbox(&mut self.show_browser, "Display browser");

        ui.add_space(8.0);
        ui.label("Parameters:");
        egui::ScrollArea::vertical()
            .max_height(PARAMS_MAX_HEIGHT)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                if self.rows.is_empty() {
                    ui.label("No configuration");
                    return;
                }
                egui::Grid::new("params-grid")
                    .num_columns(2)
                    .spacing([12.0, 6.0])
                    .show(ui, |ui| {
                        for (key, value) in &mut self.rows {
                            ui.label(key.as_str());
                            ui.add(
                                egui::TextEdit::singleline(value).desired_width(f32::INFINITY),
                            );
                            ui.end_row();
                        }
                    });
            });

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label("Browser auto close time (seconds):");
            ui.add(egui::DragValue::new(&mut self.wait_secs).range(0..=86_400));
        });

        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            let start = ui.add_enabled(!self.running, egui::Button::new("Start"));
            if start.clicked() {
                self.start_run(ctx);
            }
            if self.running {
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Session running...");
                });
            }
        });
    }

    /// Blocking error dialog; the rest of the window stays inert behind it
    fn show_error_dialog(&mut self, ctx: &egui::Context) {
        let Some(message) = self.last_error.clone() else {
            return;
        };

        egui::Window::new("Error")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        self.last_error = None;
                    }
                });
            });
    }
}

impl eframe::App for LauncherApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_outcomes();

        let dialog_open = self.last_error.is_some();
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!dialog_open, |ui| {
                self.show_form(ui, ctx);
            });
        });

        self.show_error_dialog(ctx);
    }
}

fn build_viewport() -> egui::ViewportBuilder {
    egui::ViewportBuilder::default()
        .with_title("Skylark")
        .with_inner_size([DEFAULT_WIDTH, DEFAULT_HEIGHT])
        .with_min_inner_size([MIN_WIDTH, MIN_HEIGHT])
}

/// Open the native window and run the form until the user closes it
pub fn run_gui(profiles: ProfileSet, browser_path: Option<PathBuf>) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: build_viewport(),
        ..Default::default()
    };

    eframe::run_native(
        "skylark",
        options,
        Box::new(move |_cc| Ok(Box::new(LauncherApp::new(profiles, browser_path)))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use skylark_core::ProfileStore;
    use std::fs;

    fn load_fixture(contents: &str) -> (tempfile::TempDir, ProfileSet, ProfileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path().join("config.ini"));
        fs::write(store.path(), contents).unwrap();
        let profiles = store.load_or_init().unwrap();
        (dir, profiles, store)
    }

    const FIXTURE: &str = "[ios]\ndevice=iPhone 15\nlocale=en-US\n\n[aos]\ndevice=Pixel 8\n";

    #[test]
    fn test_new_app_starts_idle_with_defaults() {
        let (_dir, profiles, _store) = load_fixture(FIXTURE);
        let app = LauncherApp::new(profiles, None);

        assert!(!app.running);
        assert!(app.last_error.is_none());
        assert!(!app.show_browser);
        assert_eq!(app.wait_secs, DEFAULT_WAIT_SECS);
        assert_eq!(app.platform, MobilePlatform::Ios);
        assert_eq!(
            app.rows,
            vec![
                ("device".to_string(), "iPhone 15".to_string()),
                ("locale".to_string(), "en-US".to_string()),
            ]
        );
    }

    #[test]
    fn test_switching_platform_rebuilds_rows() {
        let (_dir, profiles, _store) = load_fixture(FIXTURE);
        let mut app = LauncherApp::new(profiles, None);

        app.rows[0].1 = "edited".to_string();
        app.select_platform(MobilePlatform::Aos);

        assert_eq!(app.rows, vec![("device".to_string(), "Pixel 8".to_string())]);

        // Coming back shows the stored value again, not the discarded edit
        app.select_platform(MobilePlatform::Ios);
        assert_eq!(app.rows[0].1, "iPhone 15");
    }

    #[test]
    fn test_begin_run_snapshots_edits_without_touching_disk() {
        let (_dir, profiles, store) = load_fixture(FIXTURE);
        let mut app = LauncherApp::new(profiles, None);

        app.rows[0].1 = "iPhone 16".to_string();
        app.show_browser = true;
        app.wait_secs = 0;

        let request = app.begin_run().unwrap();

        assert!(app.running);
        assert_eq!(request.platform, MobilePlatform::Ios);
        assert!(request.show_browser);
        assert!(request.wait.is_zero());
        assert_eq!(
            request.params.get("device").map(String::as_str),
            Some("iPhone 16")
        );

        // The edit lives only in the form; the file still has the old value
        let on_disk = store.load_or_init().unwrap();
        assert_eq!(
            on_disk.params(MobilePlatform::Ios).get("device").map(String::as_str),
            Some("iPhone 15")
        );
    }

    #[test]
    fn test_trigger_is_blocked_while_running() {
        let (_dir, profiles, _store) = load_fixture(FIXTURE);
        let mut app = LauncherApp::new(profiles, None);

        assert!(app.begin_run().is_some());
        assert!(app.begin_run().is_none());
    }

    #[test]
    fn test_failure_re_enables_trigger_and_keeps_message_verbatim() {
        let (_dir, profiles, _store) = load_fixture(FIXTURE);
        let mut app = LauncherApp::new(profiles, None);

        app.begin_run().unwrap();
        app.handle_outcome(RunOutcome::Failed("Execution error: boom".to_string()));

        assert!(!app.running);
        assert_eq!(app.last_error.as_deref(), Some("Execution error: boom"));
        assert!(app.begin_run().is_some());
    }

    #[test]
    fn test_success_re_enables_trigger_without_error() {
        let (_dir, profiles, _store) = load_fixture(FIXTURE);
        let mut app = LauncherApp::new(profiles, None);

        app.begin_run().unwrap();
        app.handle_outcome(RunOutcome::Finished);

        assert!(!app.running);
        assert!(app.last_error.is_none());
    }
}
