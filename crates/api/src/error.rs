use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use script_intake_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] and maps each domain failure to an HTTP status.
/// Every error renders as a `text/plain` body holding exactly the error
/// message, so callers can match on the text.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `script_intake_core`.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// HTTP status the error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Core(core) if core.is_client_error() => StatusCode::BAD_REQUEST,
            AppError::Core(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(error = %message, "Request failed");
        } else {
            tracing::debug!(error = %message, "Request rejected");
        }

        (status, message).into_response()
    }
}
