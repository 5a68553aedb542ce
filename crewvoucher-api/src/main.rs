use std::net::SocketAddr;
use std::sync::Arc;

use crewvoucher_api::{app, AppState};
use crewvoucher_core::VoucherService;
use crewvoucher_store::{DbClient, SqliteVoucherStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "crewvoucher_api=debug,tower_http=debug,axum::rejection=trace".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = crewvoucher_store::app_config::Config::load().expect("Failed to load config");
    tracing::info!("Starting crew voucher API on port {}", config.server.port);

    let db = DbClient::new(&config.database.url)
        .await
        .expect("Failed to open database");
    db.migrate().await.expect("Failed to run migrations");

    let store = Arc::new(SqliteVoucherStore::new(db.pool.clone()));
    let service = Arc::new(VoucherService::new(store));

    let app = app(AppState { vouchers: service });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
