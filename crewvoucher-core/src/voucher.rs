use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request to issue a voucher batch for one crew member on one flight.
/// Flight date is treated as an opaque key component; no calendar
/// validation is performed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoucherRequest {
    pub crew_name: String,
    pub crew_id: String,
    pub flight_number: String,
    pub flight_date: String,
    pub aircraft_type: String,
}

/// A persisted voucher batch. Identity key is (flight_number, flight_date);
/// at most one voucher may exist per key. Vouchers are created once and
/// never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voucher {
    pub crew_name: String,
    pub crew_id: String,
    pub flight_number: String,
    pub flight_date: String,
    pub aircraft_type: String,
    pub seats: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Voucher {
    pub fn from_request(request: VoucherRequest, seats: Vec<String>) -> Self {
        Self {
            crew_name: request.crew_name,
            crew_id: request.crew_id,
            flight_number: request.flight_number,
            flight_date: request.flight_date,
            aircraft_type: request.aircraft_type,
            seats,
            created_at: Utc::now(),
        }
    }
}
