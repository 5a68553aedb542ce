pub mod seatmap;
pub mod selector;
pub mod service;
pub mod store;
pub mod voucher;

pub use seatmap::{AircraftType, SeatMap};
pub use selector::assign_seats;
pub use service::VoucherService;
pub use store::{StoreError, VoucherStore};
pub use voucher::{Voucher, VoucherRequest};

#[derive(Debug, thiserror::Error)]
pub enum VoucherError {
    #[error("vouchers already generated for flight {flight_number} on {flight_date}")]
    AlreadyIssued {
        flight_number: String,
        flight_date: String,
    },
    #[error("invalid aircraft type: {0}")]
    InvalidAircraftType(String),
    #[error("seat map holds {capacity} seats, {needed} required")]
    InsufficientSeatCapacity { capacity: usize, needed: usize },
    #[error("storage failure: {0}")]
    Storage(#[from] StoreError),
}

pub type VoucherResult<T> = Result<T, VoucherError>;
