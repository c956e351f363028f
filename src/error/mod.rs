use crate::api::ApiError;
use thiserror::Error;

pub type AppResult<T> = std::result::Result<T, AppError>;

/// Failures that abort startup. Everything after the window opens is
/// reported to the user through toasts instead.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("application already started")]
    AlreadyStarted,
}
