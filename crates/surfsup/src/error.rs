use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::error;
use serde_json::json;

use crate::db;

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("Invalid date '{value}', expected YYYY-MM-DD")]
    InvalidDate { value: String },
    #[error("Failed to read climate data: {0}")]
    Store(#[from] db::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::InvalidDate { .. } => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::Store(e) => {
                error!("error serving climate data: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    String::from("Internal server error"),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
