//! Typed response bodies of the prediction server.
//!
//! Everything crossing the network boundary is validated here; the renderer
//! only ever sees values that passed these checks.

use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::stats::StatisticsPayload;

pub type PayloadResult<T> = std::result::Result<T, PayloadError>;

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("confidence {0} is outside 0..=1")]
    ConfidenceOutOfRange(f64),
    #[error("response has no class probabilities")]
    EmptyBreakdown,
    #[error("percentage {value} for class `{class}` is outside 0..=100")]
    PercentageOutOfRange { class: String, value: f64 },
    #[error("color `{value}` for class `{class}` is not #RRGGBB")]
    InvalidColor { class: String, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_cairo_rgb(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }
}

impl FromStr for RgbColor {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let hex = value.trim().strip_prefix('#').ok_or(())?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(());
        }
        let channel = |index: usize| u8::from_str_radix(&hex[index..index + 2], 16).map_err(|_| ());
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Severity {
    High,
    Medium,
    Low,
    Normal,
    Other(String),
}

impl Severity {
    fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "high" => Severity::High,
            "medium" => Severity::Medium,
            "low" => Severity::Low,
            "normal" => Severity::Normal,
            _ => Severity::Other(raw.trim().to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
            Severity::Normal => "Normal",
            Severity::Other(raw) if raw.is_empty() => "Unknown",
            Severity::Other(raw) => raw,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::High => "severity-high",
            Severity::Medium => "severity-medium",
            Severity::Low | Severity::Normal => "severity-normal",
            Severity::Other(_) => "severity-unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDescriptor {
    pub name: String,
    pub description: String,
    pub icon: String,
    pub color: RgbColor,
    pub severity: Severity,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassProbability {
    pub key: String,
    pub percentage: f64,
    pub info: ClassDescriptor,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    pub confidence: f64,
    pub class_info: ClassDescriptor,
    /// One entry per class in server key order.
    pub probabilities: Vec<ClassProbability>,
    pub stats: Option<StatisticsPayload>,
    pub predicted_class: Option<String>,
    pub filename: Option<String>,
    pub timestamp: Option<String>,
    pub original_size: Option<(u32, u32)>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub model_loaded: bool,
}

#[derive(Debug, Deserialize)]
struct RawClassInfo {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    icon: String,
    color: String,
    #[serde(default)]
    severity: String,
}

#[derive(Debug, Deserialize)]
struct RawProbability {
    percentage: f64,
    info: RawClassInfo,
}

#[derive(Debug, Deserialize)]
struct RawPrediction {
    confidence: f64,
    class_info: RawClassInfo,
    /// Kept as a map so iteration follows the body's key order.
    all_probabilities: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    stats: Option<StatisticsPayload>,
    #[serde(default)]
    predicted_class: Option<String>,
    #[serde(default)]
    filename: Option<String>,
    #[serde(default)]
    timestamp: Option<String>,
    #[serde(default)]
    original_size: Option<(u32, u32)>,
}

#[derive(Debug, Deserialize)]
struct RawErrorBody {
    error: String,
}

fn descriptor_from_raw(key: &str, raw: RawClassInfo) -> PayloadResult<ClassDescriptor> {
    let color = raw.color.parse::<RgbColor>().map_err(|()| PayloadError::InvalidColor {
        class: key.to_string(),
        value: raw.color.clone(),
    })?;
    Ok(ClassDescriptor {
        name: raw.name,
        description: raw.description,
        icon: raw.icon,
        color,
        severity: Severity::parse(&raw.severity),
    })
}

pub fn parse_prediction(body: &[u8]) -> PayloadResult<PredictionResult> {
    let raw: RawPrediction = serde_json::from_slice(body)?;

    if !raw.confidence.is_finite() || !(0.0..=1.0).contains(&raw.confidence) {
        return Err(PayloadError::ConfidenceOutOfRange(raw.confidence));
    }
    if raw.all_probabilities.is_empty() {
        return Err(PayloadError::EmptyBreakdown);
    }

    let class_key = raw
        .predicted_class
        .clone()
        .unwrap_or_else(|| raw.class_info.name.clone());
    let class_info = descriptor_from_raw(&class_key, raw.class_info)?;

    let mut probabilities = Vec::with_capacity(raw.all_probabilities.len());
    for (key, value) in raw.all_probabilities {
        let entry: RawProbability = serde_json::from_value(value)?;
        if !entry.percentage.is_finite() || !(0.0..=100.0).contains(&entry.percentage) {
            return Err(PayloadError::PercentageOutOfRange {
                class: key,
                value: entry.percentage,
            });
        }
        let info = descriptor_from_raw(&key, entry.info)?;
        probabilities.push(ClassProbability {
            key,
            percentage: entry.percentage,
            info,
        });
    }

    Ok(PredictionResult {
        confidence: raw.confidence,
        class_info,
        probabilities,
        stats: raw.stats,
        predicted_class: raw.predicted_class,
        filename: raw.filename,
        timestamp: raw.timestamp,
        original_size: raw.original_size,
    })
}

pub fn parse_statistics(body: &[u8]) -> PayloadResult<StatisticsPayload> {
    Ok(serde_json::from_slice(body)?)
}

pub fn parse_health(body: &[u8]) -> PayloadResult<HealthStatus> {
    Ok(serde_json::from_slice(body)?)
}

/// The `error` string of a failure body, if the server sent one.
pub fn parse_error_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<RawErrorBody>(body)
        .ok()
        .map(|raw| raw.error)
        .filter(|message| !message.trim().is_empty())
}

#[cfg(test)]
pub(crate) mod fixtures {
    pub(crate) const PREDICTION_BODY: &str = r##"{
        "predicted_class": "glioma",
        "confidence": 0.9237,
        "class_info": {
            "name": "Glioma",
            "description": "Tumor arising from glial cells in the brain or spinal cord.",
            "severity": "High",
            "color": "#ef4444",
            "icon": "fas fa-brain"
        },
        "all_probabilities": {
            "glioma": {
                "probability": 0.9237,
                "percentage": 92.37,
                "info": { "name": "Glioma", "color": "#ef4444", "severity": "High" }
            },
            "meningioma": {
                "probability": 0.0512,
                "percentage": 5.12,
                "info": { "name": "Meningioma", "color": "#f59e0b", "severity": "Medium" }
            },
            "notumor": {
                "probability": 0.0201,
                "percentage": 2.01,
                "info": { "name": "No Tumor", "color": "#10b981", "severity": "Normal" }
            },
            "pituitary": {
                "probability": 0.005,
                "percentage": 0.5,
                "info": { "name": "Pituitary", "color": "#3b82f6", "severity": "Medium" }
            }
        },
        "filename": "scan.png",
        "original_size": [512, 512],
        "timestamp": "2026-10-19T10:00:00",
        "stats": {
            "total_predictions": 12,
            "predictions_today": 3,
            "last_prediction_time": "Mon, 19 Oct 2026 10:00:00 GMT",
            "class_distribution": { "glioma": 5, "meningioma": 3, "notumor": 2, "pituitary": 2 }
        }
    }"##;
}
