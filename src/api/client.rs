use std::time::Duration;

use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::{Client, Response};

use super::payload::{
    parse_error_message, parse_health, parse_prediction, parse_statistics, HealthStatus,
    PredictionResult,
};
use super::{ApiError, ApiResult};
use crate::intake::UploadedFile;
use crate::stats::StatisticsPayload;

const PREDICT_PATH: &str = "/predict";
const STATISTICS_PATH: &str = "/api/statistics";
const HEALTH_PATH: &str = "/health";
const UPLOAD_FIELD: &str = "file";

/// Blocking calls; the runtime runs them on worker threads.
pub trait PredictionApi: Send + Sync {
    fn predict(&self, file: UploadedFile) -> ApiResult<PredictionResult>;
    fn statistics(&self) -> ApiResult<StatisticsPayload>;
    fn health(&self) -> ApiResult<HealthStatus>;
}

#[derive(Debug, Clone)]
pub struct HttpPredictionApi {
    client: Client,
    base_url: String,
}

impl HttpPredictionApi {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> ApiResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("mriscope/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn read_body(response: Response, failure_label: &str) -> ApiResult<Vec<u8>> {
        let status = response.status();
        let body = response.bytes()?.to_vec();
        if status.is_success() {
            return Ok(body);
        }

        let message = parse_error_message(&body)
            .unwrap_or_else(|| format!("{failure_label} (HTTP {})", status.as_u16()));
        tracing::warn!(status = status.as_u16(), message = message.as_str(), "server rejected request");
        Err(ApiError::Server {
            status: status.as_u16(),
            message,
        })
    }
}

impl PredictionApi for HttpPredictionApi {
    fn predict(&self, file: UploadedFile) -> ApiResult<PredictionResult> {
        let size = file.size();
        tracing::info!(
            filename = file.filename.as_str(),
            mime = file.mime.as_str(),
            size,
            "uploading image for prediction"
        );
        let part = Part::bytes(file.bytes)
            .file_name(file.filename)
            .mime_str(&file.mime)?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        let response = self.client.post(self.url(PREDICT_PATH)).multipart(form).send()?;
        let body = Self::read_body(response, "Prediction failed")?;
        Ok(parse_prediction(&body)?)
    }

    fn statistics(&self) -> ApiResult<StatisticsPayload> {
        let response = self.client.get(self.url(STATISTICS_PATH)).send()?;
        let body = Self::read_body(response, "Statistics unavailable")?;
        Ok(parse_statistics(&body)?)
    }

    fn health(&self) -> ApiResult<HealthStatus> {
        let response = self.client.get(self.url(HEALTH_PATH)).send()?;
        let body = Self::read_body(response, "Health check failed")?;
        Ok(parse_health(&body)?)
    }
}
