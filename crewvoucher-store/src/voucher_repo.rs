use async_trait::async_trait;
use crewvoucher_core::selector::SEATS_PER_VOUCHER;
use crewvoucher_core::store::{StoreError, VoucherStore};
use crewvoucher_core::Voucher;
use sqlx::SqlitePool;

/// SQLite-backed voucher store. The (flight_number, flight_date) key is
/// guarded by a unique index; violations surface as `StoreError::Conflict`.
pub struct SqliteVoucherStore {
    pool: SqlitePool,
}

impl SqliteVoucherStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn backend(err: sqlx::Error) -> StoreError {
    StoreError::Backend(Box::new(err))
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

#[async_trait]
impl VoucherStore for SqliteVoucherStore {
    async fn exists(&self, flight_number: &str, flight_date: &str) -> Result<bool, StoreError> {
        let found: i64 = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM vouchers WHERE flight_number = ? AND flight_date = ?)",
        )
        .bind(flight_number)
        .bind(flight_date)
        .fetch_one(&self.pool)
        .await
        .map_err(backend)?;

        Ok(found != 0)
    }

    async fn save(&self, voucher: &Voucher) -> Result<(), StoreError> {
        // The selector guarantees three seats; anything else is a bug
        // upstream, so refuse rather than insert a partial row.
        if voucher.seats.len() != SEATS_PER_VOUCHER {
            return Err(StoreError::Backend(
                format!("expected {} seats, got {}", SEATS_PER_VOUCHER, voucher.seats.len())
                    .into(),
            ));
        }

        sqlx::query(
            r#"
            INSERT INTO vouchers
                (crew_name, crew_id, flight_number, flight_date, aircraft_type,
                 seat1, seat2, seat3, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&voucher.crew_name)
        .bind(&voucher.crew_id)
        .bind(&voucher.flight_number)
        .bind(&voucher.flight_date)
        .bind(&voucher.aircraft_type)
        .bind(&voucher.seats[0])
        .bind(&voucher.seats[1])
        .bind(&voucher.seats[2])
        .bind(voucher.created_at)
        .execute(&self.pool)
        .await
        .map_err(|err| {
            if is_unique_violation(&err) {
                StoreError::Conflict
            } else {
                backend(err)
            }
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crewvoucher_core::Voucher;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_store() -> SqliteVoucherStore {
        // Single connection so every query sees the same in-memory database.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::migrate!("../migrations").run(&pool).await.unwrap();
        SqliteVoucherStore::new(pool)
    }

    fn voucher(flight_number: &str, flight_date: &str) -> Voucher {
        Voucher {
            crew_name: "Sarah".to_string(),
            crew_id: "98123".to_string(),
            flight_number: flight_number.to_string(),
            flight_date: flight_date.to_string(),
            aircraft_type: "ATR".to_string(),
            seats: vec!["3B".to_string(), "7C".to_string(), "14D".to_string()],
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn exists_reflects_saved_vouchers() {
        let store = test_store().await;
        assert!(!store.exists("GA102", "2025-07-12").await.unwrap());

        store.save(&voucher("GA102", "2025-07-12")).await.unwrap();

        assert!(store.exists("GA102", "2025-07-12").await.unwrap());
        assert!(!store.exists("GA102", "2025-07-13").await.unwrap());
        assert!(!store.exists("GA103", "2025-07-12").await.unwrap());
    }

    #[tokio::test]
    async fn duplicate_key_hits_the_unique_index() {
        let store = test_store().await;
        store.save(&voucher("GA102", "2025-07-12")).await.unwrap();

        match store.save(&voucher("GA102", "2025-07-12")).await {
            Err(StoreError::Conflict) => {}
            other => panic!("expected Conflict, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn save_rejects_malformed_seat_counts() {
        let store = test_store().await;
        let mut short = voucher("GA102", "2025-07-12");
        short.seats.pop();

        match store.save(&short).await {
            Err(StoreError::Backend(_)) => {}
            other => panic!("expected Backend, got {:?}", other),
        }
        assert!(!store.exists("GA102", "2025-07-12").await.unwrap());
    }
}
