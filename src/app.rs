// src/app.rs

use crate::core::errors::{SelectionError, SubmitError};
use crate::core::models::{AnalysisResult, HeartRateTone, SelectedFile};
use crate::ui::chart::ChartCanvas;
use chrono::{DateTime, Local};
use std::time::Instant;
use strum::Display;
use tracing::{error, info, warn};

pub const SPINNER_CHARS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum UiState {
    Idle,
    #[strum(to_string = "File selected")]
    FileSelected,
    #[strum(to_string = "Analyzing")]
    Submitting,
    #[strum(to_string = "Results")]
    ResultsShown,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Warning,
    Error,
}

/// A blocking message. While one is open, input only dismisses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

/// The analysis currently shown in the results panel.
#[derive(Debug, Clone)]
pub struct DisplayedResult {
    pub result: AnalysisResult,
    pub tone: HeartRateTone,
    pub received_at: DateTime<Local>,
}

pub struct App {
    pub should_quit: bool,
    pub state: UiState,
    /// Path typed into the drop zone, confirmed with Enter.
    pub input: String,
    pub selected_file: Option<SelectedFile>,
    pub displayed: Option<DisplayedResult>,
    pub chart: ChartCanvas,
    pub notification: Option<Notification>,
    pub results_scroll: u16,
    pub spinner_frame: usize,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            state: UiState::Idle,
            input: String::new(),
            selected_file: None,
            displayed: None,
            chart: ChartCanvas::new(),
            notification: None,
            results_scroll: 0,
            spinner_frame: 0,
        }
    }

    // --- File Selection ---

    /// Makes `file` the current selection, replacing any previous one.
    ///
    /// Non-images are rejected with a blocking notification and leave every
    /// other field untouched.
    pub fn select_file(&mut self, file: SelectedFile) -> Result<(), SelectionError> {
        if !file.is_image() {
            let err = SelectionError::InvalidFileType { name: file.name, mime: file.mime };
            self.report_selection_error(&err);
            return Err(err);
        }

        info!(name = %file.name, path = %file.path.display(), "Selected file.");
        self.selected_file = Some(file);
        if self.state != UiState::Submitting {
            self.state = UiState::FileSelected;
        }
        Ok(())
    }

    pub fn report_selection_error(&mut self, err: &SelectionError) {
        warn!(error = %err, "File selection rejected.");
        let message = match err {
            SelectionError::InvalidFileType { .. } => "Please select an image file".to_string(),
            SelectionError::Unreadable { .. } => err.to_string(),
        };
        self.notify(NotificationKind::Warning, message);
    }

    pub fn selected_name(&self) -> Option<&str> {
        self.selected_file.as_ref().map(|f| f.name.as_str())
    }

    /// Whether the drop zone shows the accepted-file accent.
    pub fn has_accepted_file(&self) -> bool {
        self.selected_file.is_some()
    }

    // --- Submission ---

    /// The analyze trigger is enabled only with a file and no request in flight.
    pub fn can_submit(&self) -> bool {
        self.selected_file.is_some() && self.state != UiState::Submitting
    }

    pub fn is_submitting(&self) -> bool {
        self.state == UiState::Submitting
    }

    /// Enters `Submitting` and returns the file to send, or `None` if the
    /// trigger is disabled.
    pub fn begin_submission(&mut self) -> Option<SelectedFile> {
        if !self.can_submit() {
            return None;
        }
        let file = self.selected_file.clone()?;
        self.state = UiState::Submitting;
        self.spinner_frame = 0;
        Some(file)
    }

    /// Applies the outcome of a request started by [`App::begin_submission`].
    ///
    /// Returns `false` without touching anything if no request was in flight.
    pub fn finish_submission(&mut self, outcome: Result<AnalysisResult, SubmitError>) -> bool {
        if !self.is_submitting() {
            warn!("Ignoring a submission outcome with no request in flight.");
            return false;
        }
        self.restore_affordances();

        match outcome {
            Ok(result) => self.display_results(result),
            Err(err) => {
                if err.is_server_reported() {
                    warn!(error = %err, "Server rejected the image.");
                } else {
                    error!(error = %err, "Submission failed.");
                }
                self.notify(NotificationKind::Error, err.user_message());
                self.state = UiState::Error;
            }
        }
        true
    }

    /// Ends the `Submitting` state: hides the spinner, undims the drop zone
    /// and re-enables the trigger.
    fn restore_affordances(&mut self) {
        self.state = if self.selected_file.is_some() { UiState::FileSelected } else { UiState::Idle };
    }

    // --- Result Rendering ---

    pub fn display_results(&mut self, result: AnalysisResult) {
        self.display_results_at(result, Instant::now());
    }

    pub fn display_results_at(&mut self, result: AnalysisResult, now: Instant) {
        info!(
            heart_rate = result.heart_rate,
            abnormality = %result.abnormality,
            samples = result.waveform.len(),
            "Displaying analysis."
        );
        self.chart.render(&result.waveform, now);
        self.displayed = Some(DisplayedResult {
            tone: result.heart_rate_tone(),
            received_at: Local::now(),
            result,
        });
        self.results_scroll = 0;
        self.state = UiState::ResultsShown;
    }

    pub fn results_visible(&self) -> bool {
        self.displayed.is_some()
    }

    // --- Notifications ---

    pub fn notify(&mut self, kind: NotificationKind, message: String) {
        self.notification = Some(Notification { kind, message });
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    // --- Misc ---

    pub fn scroll_up(&mut self) {
        self.results_scroll = self.results_scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        if self.results_visible() {
            self.results_scroll = self.results_scroll.saturating_add(1);
        }
    }

    /// Whether the UI needs frequent redraws (spinner or chart animation).
    pub fn is_animating(&self, now: Instant) -> bool {
        self.is_submitting()
            || (self.results_visible() && self.chart.current().is_some_and(|c| c.is_animating(now)))
    }

    pub fn on_tick(&mut self) {
        if self.is_submitting() {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_CHARS.len();
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
