use crewvoucher_core::VoucherService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub vouchers: Arc<VoucherService>,
}
