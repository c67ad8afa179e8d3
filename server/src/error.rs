//! API error type
//!
//! Every failure surfaces as a status code plus a JSON body with a stable
//! machine-readable code and a human-readable message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use engine::{EngineError, SnapshotError};

use crate::narration::NarrationError;

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ApiErrorBody,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            body: ApiErrorBody {
                code: "not_found",
                message: message.into(),
                details: None,
            },
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ApiErrorBody {
                code: "invalid_request",
                message: message.into(),
                details: None,
            },
        }
    }

    pub fn internal(message: impl Into<String>, details: Option<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: ApiErrorBody {
                code: "internal_error",
                message: message.into(),
                details,
            },
        }
    }

    pub fn session_not_found(id: u64) -> Self {
        Self::not_found(format!("session {id} not found"))
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::UnknownGame(_) => Self::not_found(err.to_string()),
            _ => Self::bad_request(err.to_string()),
        }
    }
}

impl From<SnapshotError> for ApiError {
    fn from(err: SnapshotError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl From<NarrationError> for ApiError {
    fn from(err: NarrationError) -> Self {
        match &err {
            NarrationError::UnknownVoice(_)
            | NarrationError::EmptyText
            | NarrationError::TextTooLong { .. } => Self::bad_request(err.to_string()),
            NarrationError::Upstream { status, message } => Self {
                status: StatusCode::BAD_GATEWAY,
                body: ApiErrorBody {
                    code: "speech_api_error",
                    message: format!("speech API returned status {status}"),
                    details: Some(message.clone()),
                },
            },
            NarrationError::Http(_) => Self {
                status: StatusCode::BAD_GATEWAY,
                body: ApiErrorBody {
                    code: "speech_api_unreachable",
                    message: err.to_string(),
                    details: None,
                },
            },
            NarrationError::Io(_) => Self::internal("narration cache failure", Some(err.to_string())),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
