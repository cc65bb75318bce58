use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;
use tracing::{error, warn};

#[derive(Debug, ThisError)]
pub enum BackendError {
    #[error("Supabase configuration missing")]
    SupabaseConfigMissing,

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("HTTP request error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Supabase returned {status}: {message}")]
    Upstream { status: StatusCode, message: String },

    #[error("{0}")]
    InvalidBody(String, StatusCode),
}

impl BackendError {
    pub fn status(&self) -> StatusCode {
        match self {
            BackendError::SupabaseConfigMissing | BackendError::UrlParse(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            BackendError::Reqwest(_) => StatusCode::BAD_GATEWAY,
            BackendError::Upstream { status, .. } if status.is_server_error() => *status,
            BackendError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            BackendError::InvalidBody(_, status) => *status,
        }
    }
}

impl IntoResponse for BackendError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status.is_server_error() {
            error!(status = %status, error = %self, "request failed");
        } else {
            warn!(status = %status, error = %self, "request rejected");
        }
        let body = ErrorDetail {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Error body shape shared by every failing endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}

/// PostgREST error payload; only `message` is surfaced.
#[derive(Deserialize, Debug)]
pub struct PostgrestError {
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
}

impl PostgrestError {
    /// Best-effort message extraction from a failed Supabase response body.
    pub fn message_from_body(body: &str) -> String {
        match serde_json::from_str::<PostgrestError>(body) {
            Ok(PostgrestError {
                message,
                code: Some(code),
            }) => format!("{message} ({code})"),
            Ok(err) => err.message,
            Err(_) if body.trim().is_empty() => "empty response body".to_string(),
            Err(_) => body.trim().to_string(),
        }
    }
}
