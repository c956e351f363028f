use super::error::{StateError, StateResult};
use super::{event::StateTransition, AppEvent, AppState};

/// Caps the retained transition log; a long session cycles through many analyses.
const MAX_HISTORY: usize = 256;

#[derive(Debug)]
pub struct StateMachine {
    state: AppState,
    transition_history: Vec<StateTransition>,
}

impl StateMachine {
    pub fn new() -> Self {
        Self {
            state: AppState::default(),
            transition_history: Vec::new(),
        }
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn can_transition(&self, event: AppEvent) -> bool {
        self.next_state(event).is_some()
    }

    pub fn next_state(&self, event: AppEvent) -> Option<AppState> {
        use AppEvent::*;
        match (self.state, event) {
            (AppState::Idle | AppState::ResultsShown, SelectFile) => Some(AppState::FileSelected),
            (AppState::FileSelected, Validate) => Some(AppState::Validating),
            (AppState::Validating, Reject) => Some(AppState::Idle),
            (AppState::Validating, Accept) => Some(AppState::Previewing),
            (AppState::Previewing, PreviewReady) => Some(AppState::Uploading),
            (AppState::Previewing, PreviewFailed) => Some(AppState::Idle),
            (AppState::Uploading, RequestSent) => Some(AppState::AwaitingResponse),
            (AppState::AwaitingResponse, Succeed) => Some(AppState::ResultsShown),
            (AppState::AwaitingResponse, Fail) => Some(AppState::Idle),
            (AppState::ResultsShown, AnalyzeAgain) => Some(AppState::Idle),
            _ => None,
        }
    }

    pub fn transition(&mut self, event: AppEvent) -> StateResult<AppState> {
        tracing::debug!(from = ?self.state, event = ?event, "request state transition");
        let next = self.next_state(event).ok_or_else(|| {
            let from = self.state;
            tracing::warn!(from = ?from, event = ?event, "invalid state transition requested");
            StateError::InvalidStateTransition { from, event }
        })?;

        let record = StateTransition::new(Some(self.state), event, next);
        self.state = next;
        if self.transition_history.len() == MAX_HISTORY {
            self.transition_history.remove(0);
        }
        self.transition_history.push(record);

        Ok(self.state)
    }
}

#[cfg(test)]
impl StateMachine {
    fn history(&self) -> &[StateTransition] {
        &self.transition_history
    }
}

impl Default for StateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for StateMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AppState::{:?}", self.state)
    }
}
