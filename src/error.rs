use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use thiserror::Error as ThisError;

use crate::db::models::StudentId;

#[derive(Debug, ThisError)]
pub enum StudentError {
    #[error("student {0} not found")]
    NotFound(StudentId),

    #[error("student store unavailable: {0}")]
    StoreUnavailable(String),
}

impl IntoResponse for StudentError {
    fn into_response(self) -> axum::response::Response {
        match self {
            // Absence is reported by status code alone.
            StudentError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
            StudentError::StoreUnavailable(_) => {
                let body = ApiErrorBody {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                };
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiErrorResponse { error: body }),
                )
                    .into_response()
            }
        }
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}
