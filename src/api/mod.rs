pub mod client;
pub mod payload;

use thiserror::Error;

pub use client::{HttpPredictionApi, PredictionApi};
pub use payload::{
    ClassDescriptor, ClassProbability, HealthStatus, PayloadError, PredictionResult, RgbColor,
    Severity,
};

pub type ApiResult<T> = std::result::Result<T, ApiError>;

const GENERIC_FAILURE_MESSAGE: &str = "Analysis failed. Please try again.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned HTTP {status}: {message}")]
    Server { status: u16, message: String },
    #[error("invalid response: {0}")]
    Payload(#[from] PayloadError),
}

impl ApiError {
    /// Best message for the user: the server's own words when it sent any.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server { message, .. } => message.clone(),
            ApiError::Transport(_) | ApiError::Payload(_) => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_surface_their_own_message() {
        let err = ApiError::Server {
            status: 400,
            message: "File type not allowed".to_string(),
        };
        assert_eq!(err.user_message(), "File type not allowed");
        assert_eq!(
            err.to_string(),
            "server returned HTTP 400: File type not allowed"
        );
    }

    #[test]
    fn payload_errors_use_the_generic_message() {
        let err = ApiError::from(PayloadError::EmptyBreakdown);
        assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
    }
}
