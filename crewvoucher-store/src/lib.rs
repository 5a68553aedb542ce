pub mod app_config;
pub mod database;
pub mod voucher_repo;

pub use database::DbClient;
pub use voucher_repo::SqliteVoucherStore;
