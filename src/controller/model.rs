use crate::chart::ChartSlot;
use crate::notification::ToastQueue;
use crate::results::ResultsView;
use crate::stats::StatisticsSnapshot;
use crate::theme::ThemeMode;

use super::AnalysisTicket;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewImage {
    pub ticket: AnalysisTicket,
    pub filename: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Everything the widget layer renders; owned by the page controller.
#[derive(Debug, Default)]
pub struct PageModel {
    pub theme: ThemeMode,
    pub loading: bool,
    pub drop_highlight: bool,
    pub preview: Option<PreviewImage>,
    pub results: Option<ResultsView>,
    pub results_revealed: bool,
    pub chart: ChartSlot,
    pub statistics: StatisticsSnapshot,
    pub toasts: ToastQueue,
    pub(super) scroll_to_results: bool,
}

impl PageModel {
    pub fn request_scroll_to_results(&mut self) {
        self.scroll_to_results = true;
    }

    /// One-shot: true once after each newly revealed result.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_to_results)
    }

    pub fn clear_results(&mut self) {
        self.results = None;
        self.results_revealed = false;
        self.scroll_to_results = false;
        self.preview = None;
        self.chart.clear();
    }
}
