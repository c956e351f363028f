use std::collections::HashMap;
use std::path::PathBuf;

use super::{Command, PageController};

/// Named UI events the widget layer can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiEvent {
    PageLoaded,
    ToggleTheme,
    DragEnter,
    DragLeave,
    FileDropped,
    FileChosen,
    AnalyzeAgain,
    RefreshStatistics,
}

impl UiEvent {
    pub const ALL: [UiEvent; 8] = [
        UiEvent::PageLoaded,
        UiEvent::ToggleTheme,
        UiEvent::DragEnter,
        UiEvent::DragLeave,
        UiEvent::FileDropped,
        UiEvent::FileChosen,
        UiEvent::AnalyzeAgain,
        UiEvent::RefreshStatistics,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UiInput {
    #[default]
    None,
    Files(Vec<PathBuf>),
}

pub type Handler = fn(&mut PageController, UiInput) -> Vec<Command>;

/// Event → handler table, built once when the controller is constructed.
pub struct EventTable {
    handlers: HashMap<UiEvent, Handler>,
}

impl EventTable {
    pub fn standard() -> Self {
        let mut handlers: HashMap<UiEvent, Handler> = HashMap::new();
        handlers.insert(UiEvent::PageLoaded, PageController::on_page_loaded);
        handlers.insert(UiEvent::ToggleTheme, PageController::on_toggle_theme);
        handlers.insert(UiEvent::DragEnter, PageController::on_drag_enter);
        handlers.insert(UiEvent::DragLeave, PageController::on_drag_leave);
        handlers.insert(UiEvent::FileDropped, PageController::on_files);
        handlers.insert(UiEvent::FileChosen, PageController::on_files);
        handlers.insert(UiEvent::AnalyzeAgain, PageController::on_analyze_again);
        handlers.insert(UiEvent::RefreshStatistics, PageController::on_refresh_statistics);
        Self { handlers }
    }

    pub fn handler(&self, event: UiEvent) -> Option<Handler> {
        self.handlers.get(&event).copied()
    }
}

impl std::fmt::Debug for EventTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventTable")
            .field("events", &self.handlers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_subscribes_every_event() {
        let table = EventTable::standard();
        for event in UiEvent::ALL {
            assert!(table.handler(event).is_some(), "{event:?} has no handler");
        }
    }
}
