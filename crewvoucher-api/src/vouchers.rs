use axum::{
    extract::{Json, State},
    http::StatusCode,
    routing::post,
    Router,
};
use crewvoucher_core::VoucherRequest;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CheckRequest {
    flight_number: String,
    date: String,
}

#[derive(Debug, Serialize)]
struct CheckResponse {
    exists: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    name: String,
    id: String,
    flight_number: String,
    date: String,
    aircraft: String,
}

#[derive(Debug, Serialize)]
struct GenerateResponse {
    success: bool,
    seats: Vec<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/check", post(check_vouchers))
        .route("/api/generate", post(generate_vouchers))
}

async fn check_vouchers(
    State(state): State<AppState>,
    Json(req): Json<CheckRequest>,
) -> Result<Json<CheckResponse>, ApiError> {
    let exists = state.vouchers.check(&req.flight_number, &req.date).await?;

    info!(
        "CHECK: Flight {} on {} - exists: {}",
        req.flight_number, req.date, exists
    );
    Ok(Json(CheckResponse { exists }))
}

async fn generate_vouchers(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<(StatusCode, Json<GenerateResponse>), ApiError> {
    let flight_number = req.flight_number.clone();
    let request = VoucherRequest {
        crew_name: req.name,
        crew_id: req.id,
        flight_number: req.flight_number,
        flight_date: req.date,
        aircraft_type: req.aircraft,
    };

    let seats = state.vouchers.issue(request).await?;

    info!("GENERATE: Assigned seats {:?} for flight {}", seats, flight_number);
    Ok((
        StatusCode::CREATED,
        Json(GenerateResponse {
            success: true,
            seats,
        }),
    ))
}
