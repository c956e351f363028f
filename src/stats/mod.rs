use serde::Deserialize;

/// Classes the reference model distinguishes; shown as a fixed card.
pub const CLASS_COUNT: u32 = 4;
/// Accuracy figure advertised for the reference model; shown as a fixed card.
pub const MODEL_ACCURACY_DISPLAY: &str = "94.5%";

/// Counters as the server reports them; extra keys are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct StatisticsPayload {
    #[serde(default)]
    pub total_predictions: u64,
    #[serde(default)]
    pub predictions_today: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatisticsSnapshot {
    pub total_predictions: u64,
    pub predictions_today: u64,
    pub class_count: u32,
    pub accuracy: &'static str,
}

impl From<StatisticsPayload> for StatisticsSnapshot {
    fn from(payload: StatisticsPayload) -> Self {
        Self {
            total_predictions: payload.total_predictions,
            predictions_today: payload.predictions_today,
            class_count: CLASS_COUNT,
            accuracy: MODEL_ACCURACY_DISPLAY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub icon_name: &'static str,
}

impl StatisticsSnapshot {
    /// The four cards in display order.
    pub fn cards(&self) -> [StatCard; 4] {
        [
            StatCard {
                title: "Total Analyses",
                value: self.total_predictions.to_string(),
                icon_name: "view-list-symbolic",
            },
            StatCard {
                title: "Today",
                value: self.predictions_today.to_string(),
                icon_name: "x-office-calendar-symbolic",
            },
            StatCard {
                title: "Tumor Classes",
                value: self.class_count.to_string(),
                icon_name: "view-grid-symbolic",
            },
            StatCard {
                title: "Model Accuracy",
                value: self.accuracy.to_string(),
                icon_name: "emblem-ok-symbolic",
            },
        ]
    }
}

impl Default for StatisticsSnapshot {
    fn default() -> Self {
        StatisticsPayload::default().into()
    }
}
