use std::sync::Arc;

use tracing::debug;

use crate::seatmap::SeatMap;
use crate::selector::assign_seats;
use crate::store::{StoreError, VoucherStore};
use crate::voucher::{Voucher, VoucherRequest};
use crate::VoucherError;

/// Issuance policy for crew voucher batches. Enforces the one-batch-per
/// (flight_number, flight_date) rule and derives the seat assignment.
///
/// The store is injected at construction; the service holds no other state
/// and is safe to share across request handlers.
pub struct VoucherService {
    store: Arc<dyn VoucherStore>,
}

impl VoucherService {
    pub fn new(store: Arc<dyn VoucherStore>) -> Self {
        Self { store }
    }

    /// Reports whether a voucher batch already exists for the key.
    pub async fn check(&self, flight_number: &str, flight_date: &str) -> Result<bool, VoucherError> {
        Ok(self.store.exists(flight_number, flight_date).await?)
    }

    /// Issues a voucher batch: existence check, seat map resolution, seat
    /// draw, then persistence. Every failure is terminal for the attempt;
    /// nothing is retried. Seats chosen before a failed save were never
    /// observably committed and are simply discarded.
    pub async fn issue(&self, request: VoucherRequest) -> Result<Vec<String>, VoucherError> {
        if self
            .store
            .exists(&request.flight_number, &request.flight_date)
            .await?
        {
            return Err(VoucherError::AlreadyIssued {
                flight_number: request.flight_number,
                flight_date: request.flight_date,
            });
        }

        let map = SeatMap::for_aircraft(&request.aircraft_type)?;
        let seats = assign_seats(&map, &mut rand::thread_rng())?;
        debug!(
            "Drew seats {:?} for flight {} on {}",
            seats, request.flight_number, request.flight_date
        );

        let voucher = Voucher::from_request(request, seats.clone());
        match self.store.save(&voucher).await {
            Ok(()) => Ok(seats),
            // A concurrent writer won the race between our existence check
            // and the insert; same outcome as the check firing.
            Err(StoreError::Conflict) => Err(VoucherError::AlreadyIssued {
                flight_number: voucher.flight_number,
                flight_date: voucher.flight_date,
            }),
            Err(err) => Err(err.into()),
        }
    }
}
