/// Phase of one analysis cycle, from file selection to rendered results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppState {
    #[default]
    Idle,
    FileSelected,
    Validating,
    Previewing,
    Uploading,
    AwaitingResponse,
    ResultsShown,
}

impl AppState {
    /// True while an accepted file is moving through preview and upload.
    pub fn analysis_in_flight(self) -> bool {
        matches!(
            self,
            AppState::FileSelected
                | AppState::Validating
                | AppState::Previewing
                | AppState::Uploading
                | AppState::AwaitingResponse
        )
    }
}
