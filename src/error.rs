use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use derive_more::derive::Display;
use serde::Serialize;

/// Errors a handler can answer with.
///
/// `detail` is only filled in when the service runs in debug mode.
#[derive(Debug, Display)]
pub enum ApiError {
    #[display("Not Found")]
    NotFound,
    #[display("Internal Server Error")]
    Internal { detail: Option<String> },
}

impl ApiError {
    pub fn internal(err: &anyhow::Error, verbose: bool) -> Self {
        tracing::error!(error = ?err, "request failed");

        ApiError::Internal {
            detail: verbose.then(|| format!("{:#}", err)),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct JsonError {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = self.to_string();
        let detail = match self {
            ApiError::Internal { detail } => detail,
            ApiError::NotFound => None,
        };

        (status, Json(JsonError { error, detail })).into_response()
    }
}
