use rand::seq::index;
use rand::Rng;

use crate::seatmap::SeatMap;
use crate::VoucherError;

/// Every voucher batch carries exactly this many seats.
pub const SEATS_PER_VOUCHER: usize = 3;

/// Draws three distinct seat identifiers uniformly at random from the
/// full rows x letters grid, without replacement. Sampling distinct flat
/// indices bounds the work at O(capacity); returned order is whatever the
/// draw produced, not row order.
///
/// The RNG is injected so callers control seeding: production issues each
/// batch from the thread RNG, tests pass a seeded source.
pub fn assign_seats<R: Rng + ?Sized>(
    map: &SeatMap,
    rng: &mut R,
) -> Result<Vec<String>, VoucherError> {
    let capacity = map.capacity();
    if capacity < SEATS_PER_VOUCHER {
        return Err(VoucherError::InsufficientSeatCapacity {
            capacity,
            needed: SEATS_PER_VOUCHER,
        });
    }

    let picks = index::sample(rng, capacity, SEATS_PER_VOUCHER);
    Ok(picks.iter().map(|i| map.seat_at(i)).collect())
}
