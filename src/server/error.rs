use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Failure of a request handler.
///
/// Responses carry only the status text; internal detail goes to the log.
#[derive(Debug)]
pub enum ServerError {
    /// The request could not be decoded.
    BadRequest(String),
    NotFound,
    Internal(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match self {
            ServerError::BadRequest(msg) => {
                tracing::debug!("bad request: {msg}");
                StatusCode::BAD_REQUEST
            }
            ServerError::NotFound => StatusCode::NOT_FOUND,
            ServerError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let text = status.canonical_reason().unwrap_or("Error");
        (status, text).into_response()
    }
}

impl From<crate::Error> for ServerError {
    fn from(e: crate::Error) -> Self {
        match e {
            crate::Error::NotFound => ServerError::NotFound,
            other => ServerError::Internal(other.to_string()),
        }
    }
}

impl From<axum::extract::rejection::FormRejection> for ServerError {
    fn from(e: axum::extract::rejection::FormRejection) -> Self {
        ServerError::BadRequest(e.body_text())
    }
}

impl From<tokio::task::JoinError> for ServerError {
    fn from(e: tokio::task::JoinError) -> Self {
        ServerError::Internal(format!("blocking task failed: {e}"))
    }
}
