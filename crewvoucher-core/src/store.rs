use async_trait::async_trait;

use crate::voucher::Voucher;

/// Errors surfaced by a voucher store implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A voucher with the same (flight_number, flight_date) key is already
    /// persisted. Raised by implementations that back the key with a unique
    /// constraint, so a concurrent writer losing the race still sees a
    /// conflict rather than a silent double insert.
    #[error("voucher already persisted for this flight/date")]
    Conflict,
    #[error("store backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Persistence contract the issuance policy depends on.
#[async_trait]
pub trait VoucherStore: Send + Sync {
    async fn exists(&self, flight_number: &str, flight_date: &str) -> Result<bool, StoreError>;

    /// Persists a voucher batch. The voucher must carry exactly three
    /// seats; implementations fail fast otherwise.
    async fn save(&self, voucher: &Voucher) -> Result<(), StoreError>;
}
