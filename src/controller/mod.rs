//! Page controller: owns the analysis state machine, the theme manager and
//! the page model, and turns UI events into side-effect commands.
//!
//! The controller never performs I/O itself. Handlers return [`Command`]s,
//! the runtime executes them off the main loop and reports back through
//! [`PageController::complete`].

pub mod commands;
pub mod events;
pub mod model;

use std::path::PathBuf;

use chrono::Local;

use crate::api::{ApiResult, HealthStatus, PredictionResult};
use crate::intake::{self, FileCandidate, IntakeResult, UploadedFile};
use crate::notification::{self, ToastKind};
use crate::results::render_results;
use crate::state::{AppEvent, AppState, StateMachine};
use crate::stats::StatisticsPayload;
use crate::theme::{ThemeManager, ThemeMode};

pub use commands::run_command;
pub use events::{EventTable, UiEvent, UiInput};
pub use model::{PageModel, PreviewImage};

const BUSY_MESSAGE: &str = "An analysis is already running. Please wait for it to finish.";
const INTERRUPTED_MESSAGE: &str = "Analysis was interrupted. Please try again.";
const MODEL_MISSING_MESSAGE: &str =
    "The server has no trained model loaded; predictions will not be meaningful.";

/// Identifies one accepted file's trip through read, preview and upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnalysisTicket(pub u64);

#[derive(Debug)]
pub enum Command {
    ReadFile {
        ticket: AnalysisTicket,
        candidate: FileCandidate,
    },
    Predict {
        ticket: AnalysisTicket,
        file: UploadedFile,
    },
    FetchStatistics,
    CheckHealth,
}

#[derive(Debug)]
pub enum Completion {
    FileRead {
        ticket: AnalysisTicket,
        result: IntakeResult<UploadedFile>,
    },
    Prediction {
        ticket: AnalysisTicket,
        result: ApiResult<PredictionResult>,
    },
    Statistics(ApiResult<StatisticsPayload>),
    Health(ApiResult<HealthStatus>),
}

#[derive(Debug)]
pub struct PageController {
    machine: StateMachine,
    theme: ThemeManager,
    model: PageModel,
    events: EventTable,
    in_flight: Option<AnalysisTicket>,
    last_ticket: u64,
    desktop_notifications: bool,
}

impl PageController {
    pub fn new(theme: ThemeManager, desktop_notifications: bool) -> Self {
        let model = PageModel {
            theme: theme.mode(),
            ..PageModel::default()
        };
        Self {
            machine: StateMachine::new(),
            theme,
            model,
            events: EventTable::standard(),
            in_flight: None,
            last_ticket: 0,
            desktop_notifications,
        }
    }

    pub fn state(&self) -> AppState {
        self.machine.state()
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme.mode()
    }

    pub fn model(&self) -> &PageModel {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut PageModel {
        &mut self.model
    }

    pub fn in_flight(&self) -> Option<AnalysisTicket> {
        self.in_flight
    }

    pub fn dispatch(&mut self, event: UiEvent, input: UiInput) -> Vec<Command> {
        let Some(handler) = self.events.handler(event) else {
            tracing::warn!(?event, "no handler subscribed for event");
            return Vec::new();
        };
        tracing::trace!(?event, "dispatching ui event");
        handler(self, input)
    }

    /// Apply the outcome of a command the runtime executed.
    pub fn complete(&mut self, completion: Completion) -> Vec<Command> {
        match completion {
            Completion::FileRead { ticket, result } => self.on_file_read(ticket, result),
            Completion::Prediction { ticket, result } => self.on_prediction(ticket, result),
            Completion::Statistics(result) => {
                self.on_statistics(result);
                Vec::new()
            }
            Completion::Health(result) => {
                self.on_health(result);
                Vec::new()
            }
        }
    }

    /// The worker for `ticket` vanished without reporting back.
    pub fn abandon(&mut self, ticket: AnalysisTicket) {
        if !self.is_current(ticket) {
            return;
        }
        tracing::warn!(ticket = ticket.0, "analysis worker exited without a result");
        self.model.loading = false;
        self.in_flight = None;
        let event = match self.machine.state() {
            AppState::Previewing => AppEvent::PreviewFailed,
            _ => AppEvent::Fail,
        };
        self.advance(event);
        self.notify(ToastKind::Error, INTERRUPTED_MESSAGE);
    }

    pub(crate) fn on_page_loaded(&mut self, _input: UiInput) -> Vec<Command> {
        vec![Command::CheckHealth, Command::FetchStatistics]
    }

    pub(crate) fn on_toggle_theme(&mut self, _input: UiInput) -> Vec<Command> {
        self.model.theme = self.theme.toggle();
        Vec::new()
    }

    pub(crate) fn on_drag_enter(&mut self, _input: UiInput) -> Vec<Command> {
        self.model.drop_highlight = true;
        Vec::new()
    }

    pub(crate) fn on_drag_leave(&mut self, _input: UiInput) -> Vec<Command> {
        self.model.drop_highlight = false;
        Vec::new()
    }

    pub(crate) fn on_refresh_statistics(&mut self, _input: UiInput) -> Vec<Command> {
        vec![Command::FetchStatistics]
    }

    pub(crate) fn on_analyze_again(&mut self, _input: UiInput) -> Vec<Command> {
        if self.machine.state() != AppState::ResultsShown {
            tracing::debug!(state = ?self.machine.state(), "analyze-again ignored");
            return Vec::new();
        }
        self.advance(AppEvent::AnalyzeAgain);
        self.model.clear_results();
        Vec::new()
    }

    /// Only the first path of a drop or pick is analyzed.
    pub(crate) fn on_files(&mut self, input: UiInput) -> Vec<Command> {
        self.model.drop_highlight = false;
        let UiInput::Files(paths) = input else {
            return Vec::new();
        };
        let Some(path) = paths.into_iter().next() else {
            return Vec::new();
        };

        if self.machine.state().analysis_in_flight() {
            tracing::info!(path = %path.display(), "file ignored while an analysis is running");
            self.notify(ToastKind::Warning, BUSY_MESSAGE);
            return Vec::new();
        }

        self.begin_analysis(path)
    }

    fn begin_analysis(&mut self, path: PathBuf) -> Vec<Command> {
        let replacing_results = self.machine.state() == AppState::ResultsShown;
        if !self.advance(AppEvent::SelectFile) || !self.advance(AppEvent::Validate) {
            return Vec::new();
        }
        // The previous results go away with the state that showed them.
        if replacing_results {
            self.model.clear_results();
        }

        let checked = intake::inspect_path(&path)
            .and_then(|candidate| intake::validate_candidate(&candidate).map(|()| candidate));
        let candidate = match checked {
            Ok(candidate) => candidate,
            Err(err) => {
                tracing::info!(path = %path.display(), %err, "file rejected");
                self.advance(AppEvent::Reject);
                self.notify(ToastKind::Error, err.user_message());
                return Vec::new();
            }
        };

        self.advance(AppEvent::Accept);
        self.last_ticket = self.last_ticket.wrapping_add(1);
        let ticket = AnalysisTicket(self.last_ticket);
        self.in_flight = Some(ticket);
        tracing::info!(
            ticket = ticket.0,
            file = %candidate.filename,
            mime = %candidate.mime,
            size = candidate.size,
            "file accepted"
        );
        vec![Command::ReadFile { ticket, candidate }]
    }

    fn on_file_read(
        &mut self,
        ticket: AnalysisTicket,
        result: IntakeResult<UploadedFile>,
    ) -> Vec<Command> {
        if !self.is_current(ticket) {
            tracing::debug!(ticket = ticket.0, "dropping stale file read");
            return Vec::new();
        }

        let file = match result {
            Ok(file) => file,
            Err(err) => {
                tracing::warn!(ticket = ticket.0, %err, "failed to read accepted file");
                self.in_flight = None;
                self.advance(AppEvent::PreviewFailed);
                self.notify(ToastKind::Error, err.user_message());
                return Vec::new();
            }
        };

        self.model.preview = Some(PreviewImage {
            ticket,
            filename: file.filename.clone(),
            mime: file.mime.clone(),
            bytes: file.bytes.clone(),
        });
        self.advance(AppEvent::PreviewReady);
        self.advance(AppEvent::RequestSent);
        self.model.loading = true;
        vec![Command::Predict { ticket, file }]
    }

    fn on_prediction(
        &mut self,
        ticket: AnalysisTicket,
        result: ApiResult<PredictionResult>,
    ) -> Vec<Command> {
        if !self.is_current(ticket) {
            tracing::debug!(ticket = ticket.0, "dropping stale prediction");
            return Vec::new();
        }
        self.model.loading = false;
        self.in_flight = None;

        let prediction = match result {
            Ok(prediction) => prediction,
            Err(err) => {
                tracing::warn!(ticket = ticket.0, %err, "prediction failed");
                self.advance(AppEvent::Fail);
                self.notify(ToastKind::Error, err.user_message());
                return Vec::new();
            }
        };

        self.advance(AppEvent::Succeed);
        let view = render_results(&prediction, Local::now());
        self.model.chart.replace(&view.chart_inputs());
        let summary = format!(
            "Analysis complete: {} ({})",
            view.header.title, view.confidence_text
        );
        tracing::info!(
            ticket = ticket.0,
            class = prediction.predicted_class.as_deref().unwrap_or("-"),
            confidence = prediction.confidence,
            "prediction rendered"
        );
        self.model.results = Some(view);
        self.model.results_revealed = true;
        self.model.request_scroll_to_results();
        if let Some(stats) = prediction.stats {
            self.model.statistics = stats.into();
        }
        self.notify(ToastKind::Success, summary);
        vec![Command::FetchStatistics]
    }

    fn on_statistics(&mut self, result: ApiResult<StatisticsPayload>) {
        match result {
            Ok(payload) => self.model.statistics = payload.into(),
            Err(err) => tracing::warn!(%err, "statistics refresh failed"),
        }
    }

    fn on_health(&mut self, result: ApiResult<HealthStatus>) {
        match result {
            Ok(health) if !health.model_loaded => {
                tracing::warn!(status = %health.status, "server reports no model loaded");
                self.notify(ToastKind::Warning, MODEL_MISSING_MESSAGE);
            }
            Ok(health) => tracing::info!(status = %health.status, "server healthy"),
            Err(err) => tracing::warn!(%err, "health check failed"),
        }
    }

    fn is_current(&self, ticket: AnalysisTicket) -> bool {
        self.in_flight == Some(ticket)
    }

    fn advance(&mut self, event: AppEvent) -> bool {
        self.machine.transition(event).is_ok()
    }

    fn notify(&mut self, kind: ToastKind, message: impl Into<String>) {
        let message = message.into();
        if self.desktop_notifications && matches!(kind, ToastKind::Success | ToastKind::Error) {
            notification::send_desktop(kind, message.clone());
        }
        self.model.toasts.push(kind, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::payload::{fixtures::PREDICTION_BODY, parse_prediction};
    use crate::api::{ApiError, PayloadError};
    use crate::intake::MAX_UPLOAD_BYTES;
    use crate::theme::MemoryThemeStore;
    use std::fs;
    use std::rc::Rc;

    fn fixture_dir(name: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::SystemTime::UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        let pid = std::process::id();
        let dir = std::env::temp_dir().join(format!("mriscope-controller-{name}-{pid}-{nanos}"));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn controller() -> PageController {
        let theme = ThemeManager::load(Box::new(MemoryThemeStore::default()));
        PageController::new(theme, false)
    }

    fn pick(controller: &mut PageController, path: PathBuf) -> Vec<Command> {
        controller.dispatch(UiEvent::FileChosen, UiInput::Files(vec![path]))
    }

    fn png(dir: &std::path::Path) -> PathBuf {
        let path = dir.join("scan.png");
        fs::write(&path, b"\x89PNG\r\n\x1a\nfake").unwrap();
        path
    }

    /// Drive a picked file up to the point where the upload is in flight.
    fn start_upload(controller: &mut PageController, path: PathBuf) -> AnalysisTicket {
        let commands = pick(controller, path);
        let Some(Command::ReadFile { ticket, candidate }) = commands.into_iter().next() else {
            panic!("expected a read command");
        };
        let read = intake::read_upload(&candidate);
        let commands = controller.complete(Completion::FileRead {
            ticket,
            result: read,
        });
        assert!(matches!(commands.as_slice(), [Command::Predict { .. }]));
        ticket
    }

    fn prediction() -> PredictionResult {
        parse_prediction(PREDICTION_BODY.as_bytes()).unwrap()
    }

    fn last_toast(controller: &mut PageController) -> (ToastKind, String) {
        let toast = controller.model_mut().toasts.drain().pop().unwrap();
        (toast.kind, toast.message)
    }

    #[test]
    fn page_load_checks_health_and_fetches_statistics() {
        let mut controller = controller();
        let commands = controller.dispatch(UiEvent::PageLoaded, UiInput::None);
        assert!(matches!(
            commands.as_slice(),
            [Command::CheckHealth, Command::FetchStatistics]
        ));
    }

    #[test]
    fn non_image_file_is_rejected_without_any_request() {
        let dir = fixture_dir("text");
        let path = dir.join("notes.txt");
        fs::write(&path, "hello").unwrap();
        let mut controller = controller();

        let commands = pick(&mut controller, path);

        assert!(commands.is_empty());
        assert_eq!(controller.state(), AppState::Idle);
        assert!(controller.in_flight().is_none());
        let (kind, message) = last_toast(&mut controller);
        assert_eq!(kind, ToastKind::Error);
        assert!(message.contains("image file"));
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn oversized_image_is_rejected_without_any_request() {
        let dir = fixture_dir("large");
        let path = dir.join("huge.png");
        let file = fs::File::create(&path).unwrap();
        file.set_len(MAX_UPLOAD_BYTES + 1).unwrap();
        drop(file);
        let mut controller = controller();

        let commands = pick(&mut controller, path);

        assert!(commands.is_empty());
        assert_eq!(controller.state(), AppState::Idle);
        let (kind, message) = last_toast(&mut controller);
        assert_eq!(kind, ToastKind::Error);
        assert!(message.contains("16MB"));
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn accepted_file_is_previewed_then_uploaded() {
        let dir = fixture_dir("accept");
        let mut controller = controller();

        let commands = pick(&mut controller, png(&dir));
        assert_eq!(controller.state(), AppState::Previewing);
        let Some(Command::ReadFile { ticket, candidate }) = commands.into_iter().next() else {
            panic!("expected a read command");
        };
        assert_eq!(candidate.mime, "image/png");

        let commands = controller.complete(Completion::FileRead {
            ticket,
            result: intake::read_upload(&candidate),
        });
        assert_eq!(controller.state(), AppState::AwaitingResponse);
        assert!(controller.model().loading);
        let preview = controller.model().preview.as_ref().unwrap();
        assert_eq!(preview.filename, "scan.png");
        match commands.as_slice() {
            [Command::Predict { file, .. }] => {
                assert_eq!(file.filename, "scan.png");
                assert_eq!(file.bytes, preview.bytes);
            }
            other => panic!("unexpected commands {other:?}"),
        }
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn successful_prediction_renders_results_and_refreshes_statistics() {
        let dir = fixture_dir("success");
        let mut controller = controller();
        let ticket = start_upload(&mut controller, png(&dir));

        let commands = controller.complete(Completion::Prediction {
            ticket,
            result: Ok(prediction()),
        });

        assert!(matches!(commands.as_slice(), [Command::FetchStatistics]));
        assert_eq!(controller.state(), AppState::ResultsShown);
        let model = controller.model_mut();
        assert!(!model.loading);
        assert!(model.results_revealed);
        assert!(model.take_scroll_request());
        assert_eq!(model.results.as_ref().unwrap().confidence_text, "92.4%");
        assert_eq!(model.chart.attached_count(), 1);
        assert_eq!(model.statistics.total_predictions, 12);
        assert_eq!(model.statistics.predictions_today, 3);
        let (kind, message) = last_toast(&mut controller);
        assert_eq!(kind, ToastKind::Success);
        assert_eq!(message, "Analysis complete: Glioma (92.4%)");
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn failed_prediction_clears_loading_and_shows_server_message() {
        let dir = fixture_dir("failure");
        let mut controller = controller();
        let ticket = start_upload(&mut controller, png(&dir));

        controller.complete(Completion::Prediction {
            ticket,
            result: Err(ApiError::Server {
                status: 500,
                message: "Prediction failed: model crashed".to_string(),
            }),
        });

        assert!(!controller.model().loading);
        assert_eq!(controller.state(), AppState::Idle);
        assert!(controller.model().results.is_none());
        let (kind, message) = last_toast(&mut controller);
        assert_eq!(kind, ToastKind::Error);
        assert_eq!(message, "Prediction failed: model crashed");
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn malformed_payload_clears_loading_with_generic_message() {
        let dir = fixture_dir("malformed");
        let mut controller = controller();
        let ticket = start_upload(&mut controller, png(&dir));

        controller.complete(Completion::Prediction {
            ticket,
            result: Err(ApiError::Payload(PayloadError::EmptyBreakdown)),
        });

        assert!(!controller.model().loading);
        assert_eq!(controller.model().chart.attached_count(), 0);
        let (_, message) = last_toast(&mut controller);
        assert_eq!(message, "Analysis failed. Please try again.");
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn lost_worker_clears_loading_and_ignores_late_results() {
        let dir = fixture_dir("lost");
        let mut controller = controller();
        let ticket = start_upload(&mut controller, png(&dir));

        controller.abandon(ticket);
        assert!(!controller.model().loading);
        assert_eq!(controller.state(), AppState::Idle);

        let commands = controller.complete(Completion::Prediction {
            ticket,
            result: Ok(prediction()),
        });
        assert!(commands.is_empty());
        assert!(controller.model().results.is_none());
        assert_eq!(controller.state(), AppState::Idle);
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn second_file_is_refused_while_analysis_is_in_flight() {
        let dir = fixture_dir("busy");
        let other = dir.join("other.jpg");
        fs::write(&other, b"jpeg").unwrap();
        let mut controller = controller();
        let ticket = start_upload(&mut controller, png(&dir));
        controller.model_mut().toasts.drain();

        let commands = pick(&mut controller, other);

        assert!(commands.is_empty());
        assert_eq!(controller.in_flight(), Some(ticket));
        assert_eq!(controller.state(), AppState::AwaitingResponse);
        let (kind, _) = last_toast(&mut controller);
        assert_eq!(kind, ToastKind::Warning);
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn repeated_analyses_keep_a_single_chart() {
        let dir = fixture_dir("repeat");
        let path = png(&dir);
        let mut controller = controller();

        for _ in 0..3 {
            let ticket = start_upload(&mut controller, path.clone());
            controller.complete(Completion::Prediction {
                ticket,
                result: Ok(prediction()),
            });
            assert_eq!(controller.model().chart.attached_count(), 1);
        }
        assert_eq!(controller.model().chart.disposed_count(), 2);
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn analyze_again_resets_the_page() {
        let dir = fixture_dir("again");
        let mut controller = controller();
        let ticket = start_upload(&mut controller, png(&dir));
        controller.complete(Completion::Prediction {
            ticket,
            result: Ok(prediction()),
        });

        controller.dispatch(UiEvent::AnalyzeAgain, UiInput::None);

        assert_eq!(controller.state(), AppState::Idle);
        let model = controller.model();
        assert!(model.results.is_none());
        assert!(!model.results_revealed);
        assert!(model.preview.is_none());
        assert_eq!(model.chart.attached_count(), 0);
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn rejected_file_after_results_hides_the_old_results() {
        let dir = fixture_dir("reject-after-results");
        let notes = dir.join("notes.txt");
        fs::write(&notes, "hello").unwrap();
        let mut controller = controller();
        let ticket = start_upload(&mut controller, png(&dir));
        controller.complete(Completion::Prediction {
            ticket,
            result: Ok(prediction()),
        });
        assert_eq!(controller.state(), AppState::ResultsShown);

        let commands = pick(&mut controller, notes);

        assert!(commands.is_empty());
        assert_eq!(controller.state(), AppState::Idle);
        let model = controller.model();
        assert!(model.results.is_none());
        assert!(!model.results_revealed);
        assert_eq!(model.chart.attached_count(), 0);
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn failed_reanalysis_leaves_no_stale_results() {
        let dir = fixture_dir("fail-after-results");
        let path = png(&dir);
        let mut controller = controller();
        let ticket = start_upload(&mut controller, path.clone());
        controller.complete(Completion::Prediction {
            ticket,
            result: Ok(prediction()),
        });

        let ticket = start_upload(&mut controller, path);
        assert!(!controller.model().results_revealed);
        controller.complete(Completion::Prediction {
            ticket,
            result: Err(ApiError::Server {
                status: 500,
                message: "Internal server error".to_string(),
            }),
        });

        assert_eq!(controller.state(), AppState::Idle);
        assert!(controller.model().results.is_none());
        assert!(!controller.model().results_revealed);
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn refresh_button_fetches_statistics() {
        let mut controller = controller();
        let commands = controller.dispatch(UiEvent::RefreshStatistics, UiInput::None);
        assert!(matches!(commands.as_slice(), [Command::FetchStatistics]));
        assert_eq!(controller.state(), AppState::Idle);
    }

    #[test]
    fn statistics_failures_are_silent() {
        let mut controller = controller();
        controller.complete(Completion::Statistics(Err(ApiError::Server {
            status: 500,
            message: "db down".to_string(),
        })));
        assert!(controller.model().toasts.is_empty());

        controller.complete(Completion::Statistics(Ok(StatisticsPayload {
            total_predictions: 9,
            predictions_today: 2,
        })));
        assert_eq!(controller.model().statistics.total_predictions, 9);
    }

    #[test]
    fn health_warns_when_model_is_missing() {
        let mut controller = controller();
        controller.complete(Completion::Health(Ok(HealthStatus {
            status: "healthy".to_string(),
            model_loaded: true,
        })));
        assert!(controller.model().toasts.is_empty());

        controller.complete(Completion::Health(Ok(HealthStatus {
            status: "healthy".to_string(),
            model_loaded: false,
        })));
        let (kind, _) = last_toast(&mut controller);
        assert_eq!(kind, ToastKind::Warning);
    }

    #[test]
    fn theme_toggle_twice_returns_to_persisted_mode() {
        let store = Rc::new(MemoryThemeStore::with_mode(ThemeMode::Dark));
        let theme = ThemeManager::load(Box::new(Rc::clone(&store)));
        let mut controller = PageController::new(theme, false);
        assert_eq!(controller.model().theme, ThemeMode::Dark);

        controller.dispatch(UiEvent::ToggleTheme, UiInput::None);
        assert_eq!(controller.theme_mode(), ThemeMode::Light);
        assert_eq!(store.stored(), Some(ThemeMode::Light));

        controller.dispatch(UiEvent::ToggleTheme, UiInput::None);
        assert_eq!(controller.model().theme, ThemeMode::Dark);
        assert_eq!(store.stored(), Some(ThemeMode::Dark));
    }

    #[test]
    fn drag_highlight_follows_enter_leave_and_drop() {
        let mut controller = controller();
        controller.dispatch(UiEvent::DragEnter, UiInput::None);
        assert!(controller.model().drop_highlight);
        controller.dispatch(UiEvent::DragLeave, UiInput::None);
        assert!(!controller.model().drop_highlight);
        controller.dispatch(UiEvent::DragEnter, UiInput::None);
        controller.dispatch(UiEvent::FileDropped, UiInput::Files(Vec::new()));
        assert!(!controller.model().drop_highlight);
        assert_eq!(controller.state(), AppState::Idle);
    }
}
