//! Maps a validated prediction into the results panel view model.

use std::time::Duration;

use chrono::{DateTime, Local, NaiveDateTime};

use crate::api::{PredictionResult, RgbColor, Severity};
use crate::chart::SliceInput;

/// Breakdown bars start empty and grow to their width after this delay.
pub const BAR_ANIMATION_DELAY: Duration = Duration::from_millis(100);
const BAR_STAGGER: Duration = Duration::from_millis(60);
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const FALLBACK_ICON: &str = "image-x-generic-symbolic";

pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

pub fn confidence_text(confidence: f64) -> String {
    format_percent(confidence * 100.0)
}

/// GTK icon for a server-side icon class such as `fas fa-brain`.
pub fn icon_name_for(server_icon: &str) -> &'static str {
    let icon = server_icon.to_ascii_lowercase();
    if icon.contains("check") {
        "emblem-ok-symbolic"
    } else if icon.contains("brain") || icon.contains("exclamation") {
        "dialog-warning-symbolic"
    } else if icon.contains("info") {
        "dialog-information-symbolic"
    } else {
        FALLBACK_ICON
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultsHeader {
    pub title: String,
    pub subtitle: String,
    pub icon_name: &'static str,
    pub color: RgbColor,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownRow {
    pub key: String,
    pub label: String,
    /// Exactly the server's value; never re-normalized.
    pub percentage: f64,
    pub text: String,
    pub fraction: f64,
    pub color: RgbColor,
    pub animation_delay: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailCard {
    pub severity: Severity,
    pub confidence_text: String,
    pub description: String,
    pub timestamp: String,
    pub filename: Option<String>,
    pub dimensions: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub header: ResultsHeader,
    pub confidence_text: String,
    pub confidence_fraction: f64,
    pub breakdown: Vec<BreakdownRow>,
    pub detail: DetailCard,
}

impl ResultsView {
    pub fn chart_inputs(&self) -> Vec<SliceInput<'_>> {
        self.breakdown
            .iter()
            .map(|row| SliceInput {
                key: &row.key,
                label: &row.label,
                percentage: row.percentage,
                color: row.color,
            })
            .collect()
    }
}

/// The server's analysis time when it parses, else the local render time.
/// Offset-less server times are shown as sent.
fn analysis_time(server: Option<&str>, rendered_at: DateTime<Local>) -> NaiveDateTime {
    let Some(raw) = server.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return rendered_at.naive_local();
    };
    if let Ok(stamped) = DateTime::parse_from_rfc3339(raw) {
        return stamped.with_timezone(&Local).naive_local();
    }
    raw.parse::<NaiveDateTime>().unwrap_or_else(|err| {
        tracing::debug!(raw, %err, "unparseable server timestamp; using local time");
        rendered_at.naive_local()
    })
}

pub fn render_results(result: &PredictionResult, rendered_at: DateTime<Local>) -> ResultsView {
    let confidence_text = confidence_text(result.confidence);

    let mut breakdown: Vec<BreakdownRow> = result
        .probabilities
        .iter()
        .map(|entry| BreakdownRow {
            key: entry.key.clone(),
            label: entry.info.name.clone(),
            percentage: entry.percentage,
            text: format_percent(entry.percentage),
            fraction: (entry.percentage / 100.0).clamp(0.0, 1.0),
            color: entry.info.color,
            animation_delay: BAR_ANIMATION_DELAY,
        })
        .collect();
    breakdown.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
    for (index, row) in breakdown.iter_mut().enumerate() {
        row.animation_delay = BAR_ANIMATION_DELAY + BAR_STAGGER * index as u32;
    }

    let info = &result.class_info;
    ResultsView {
        header: ResultsHeader {
            title: info.name.clone(),
            subtitle: info.description.clone(),
            icon_name: icon_name_for(&info.icon),
            color: info.color,
        },
        confidence_fraction: result.confidence.clamp(0.0, 1.0),
        detail: DetailCard {
            severity: info.severity.clone(),
            confidence_text: confidence_text.clone(),
            description: info.description.clone(),
            timestamp: analysis_time(result.timestamp.as_deref(), rendered_at)
                .format(TIMESTAMP_FORMAT)
                .to_string(),
            filename: result.filename.clone(),
            dimensions: result
                .original_size
                .map(|(width, height)| format!("{width} × {height} px")),
        },
        confidence_text,
        breakdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::payload::{fixtures::PREDICTION_BODY, parse_prediction};
    use chrono::TimeZone;

    fn fixture() -> PredictionResult {
        parse_prediction(PREDICTION_BODY.as_bytes()).unwrap()
    }

    fn at() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 10, 19, 9, 30, 5).unwrap()
    }

    #[test]
    fn confidence_renders_with_exactly_one_decimal() {
        assert_eq!(confidence_text(0.9237), "92.4%");
        assert_eq!(confidence_text(1.0), "100.0%");
        assert_eq!(confidence_text(0.0), "0.0%");
        assert_eq!(confidence_text(0.5), "50.0%");
        for confidence in [0.001, 0.12345, 0.66666, 0.99999] {
            let text = confidence_text(confidence);
            let digits = text.trim_end_matches('%').split('.').nth(1).unwrap();
            assert_eq!(digits.len(), 1, "{text}");
        }
    }

    #[test]
    fn breakdown_is_sorted_descending_and_keeps_raw_percentages() {
        let result = fixture();
        let view = render_results(&result, at());

        let keys: Vec<_> = view.breakdown.iter().map(|row| row.key.as_str()).collect();
        assert_eq!(keys, ["glioma", "meningioma", "notumor", "pituitary"]);

        let input_sum: f64 = result.probabilities.iter().map(|p| p.percentage).sum();
        let rendered_sum: f64 = view.breakdown.iter().map(|row| row.percentage).sum();
        assert_eq!(rendered_sum, input_sum);
        assert_eq!(view.breakdown[0].text, "92.4%");
        assert!((view.breakdown[0].fraction - 0.9237).abs() < 1e-12);
    }

    #[test]
    fn highest_percentage_comes_first_regardless_of_key_order() {
        let mut result = fixture();
        result.probabilities[3].percentage = 97.0;
        result.probabilities[0].percentage = 0.4;
        let view = render_results(&result, at());
        assert_eq!(view.breakdown[0].key, "pituitary");
        assert_eq!(view.breakdown.last().unwrap().key, "glioma");
    }

    #[test]
    fn ties_keep_server_key_order() {
        let mut result = fixture();
        for entry in &mut result.probabilities {
            entry.percentage = 25.0;
        }
        let view = render_results(&result, at());
        let keys: Vec<_> = view.breakdown.iter().map(|row| row.key.as_str()).collect();
        assert_eq!(keys, ["glioma", "meningioma", "notumor", "pituitary"]);
    }

    #[test]
    fn bars_animate_after_a_short_staggered_delay() {
        let view = render_results(&fixture(), at());
        assert_eq!(view.breakdown[0].animation_delay, BAR_ANIMATION_DELAY);
        assert!(view.breakdown[1].animation_delay > view.breakdown[0].animation_delay);
    }

    #[test]
    fn header_and_detail_follow_the_class_descriptor() {
        let view = render_results(&fixture(), at());
        assert_eq!(view.header.title, "Glioma");
        assert_eq!(view.header.icon_name, "dialog-warning-symbolic");
        assert_eq!(view.header.color, RgbColor::new(0xEF, 0x44, 0x44));
        assert_eq!(view.confidence_text, "92.4%");
        assert!((view.confidence_fraction - 0.9237).abs() < 1e-12);
        assert_eq!(view.detail.severity, Severity::High);
        assert_eq!(view.detail.confidence_text, "92.4%");
        assert_eq!(view.detail.timestamp, "2026-10-19 10:00:00");
        assert_eq!(view.detail.filename.as_deref(), Some("scan.png"));
        assert_eq!(view.detail.dimensions.as_deref(), Some("512 × 512 px"));
    }

    #[test]
    fn timestamp_falls_back_to_render_time() {
        let mut result = fixture();
        result.timestamp = Some("2026-10-19T10:00:00.654321".to_string());
        assert_eq!(
            render_results(&result, at()).detail.timestamp,
            "2026-10-19 10:00:00"
        );

        result.timestamp = Some("yesterday".to_string());
        assert_eq!(
            render_results(&result, at()).detail.timestamp,
            "2026-10-19 09:30:05"
        );

        result.timestamp = None;
        result.original_size = None;
        let view = render_results(&result, at());
        assert_eq!(view.detail.timestamp, "2026-10-19 09:30:05");
        assert!(view.detail.dimensions.is_none());
    }

    #[test]
    fn ties_follow_the_incoming_order_not_the_alphabet() {
        let mut result = fixture();
        result.probabilities.reverse();
        for entry in &mut result.probabilities {
            entry.percentage = 25.0;
        }
        let view = render_results(&result, at());
        let keys: Vec<_> = view.breakdown.iter().map(|row| row.key.as_str()).collect();
        assert_eq!(keys, ["pituitary", "notumor", "meningioma", "glioma"]);
    }

    #[test]
    fn chart_inputs_mirror_sorted_breakdown() {
        let view = render_results(&fixture(), at());
        let inputs = view.chart_inputs();
        assert_eq!(inputs.len(), 4);
        assert_eq!(inputs[0].key, "glioma");
        assert_eq!(inputs[3].color, RgbColor::new(0x3B, 0x82, 0xF6));
    }

    #[test]
    fn icon_mapping_falls_back_to_generic_image() {
        assert_eq!(icon_name_for("fas fa-check-circle"), "emblem-ok-symbolic");
        assert_eq!(icon_name_for("fas fa-dna"), FALLBACK_ICON);
    }
}
