use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use crewvoucher_core::VoucherError;
use serde_json::json;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Conflict(String),
    Internal(anyhow::Error),
}

impl From<VoucherError> for ApiError {
    fn from(err: VoucherError) -> Self {
        match err {
            VoucherError::AlreadyIssued { .. } => ApiError::Conflict(err.to_string()),
            VoucherError::InvalidAircraftType(_) => ApiError::BadRequest(err.to_string()),
            VoucherError::InsufficientSeatCapacity { .. } | VoucherError::Storage(_) => {
                ApiError::Internal(err.into())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Internal(err) => {
                tracing::error!("Internal Server Error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "success": false,
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
