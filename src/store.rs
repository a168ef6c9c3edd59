use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::models::{NewReview, Review};

/// Single-table persistence for reviews. Rows are insert-only; the store is
/// the sole owner of persisted data.
#[derive(Clone)]
pub struct ReviewStore {
    pool: SqlitePool,
}

impl ReviewStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;
        Ok(Self { pool })
    }

    pub async fn init(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS reviews (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                product_name TEXT NOT NULL,
                review_text TEXT NOT NULL,
                sentiment TEXT NOT NULL,
                key_points TEXT NOT NULL,
                created_at DATETIME NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_reviews_created_at ON reviews (created_at)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Inserts the row, then re-reads it so the caller gets the id and
    /// timestamp exactly as stored.
    pub async fn insert(&self, new: NewReview) -> Result<Review, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO reviews (product_name, review_text, sentiment, key_points, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(&new.product_name)
        .bind(&new.review_text)
        .bind(&new.sentiment)
        .bind(&new.key_points)
        .bind(new.created_at)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();

        sqlx::query_as::<_, Review>(
            "SELECT id, product_name, review_text, sentiment, key_points, created_at \
             FROM reviews WHERE id = ?1",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
    }

    /// All reviews, newest first. The id tiebreak keeps same-instant inserts
    /// in a deterministic order.
    pub async fn list(&self) -> Result<Vec<Review>, sqlx::Error> {
        sqlx::query_as::<_, Review>(
            "SELECT id, product_name, review_text, sentiment, key_points, created_at \
             FROM reviews ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await
    }
}
