//! Pin seeding over a single database connection.

use sqlx::{Connection, PgConnection};
use thiserror::Error;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::pin::PinRow;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Database seeder owning the one connection used for a run.
///
/// The connection is released whenever the seeder goes out of scope, on
/// success and error paths alike; [`close`](Seeder::close) is the graceful
/// variant for the success path.
pub struct Seeder {
    conn: PgConnection,
}

impl Seeder {
    /// Opens the single database connection. One attempt, no retry.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, SeedError> {
        let options = config.connect_options()?;
        let conn = PgConnection::connect_with(&options).await?;
        Ok(Self { conn })
    }

    /// Inserts one pin row inside its own transaction.
    ///
    /// The statement text is fixed; the eleven values are bound positionally
    /// in column order. If the execute or the commit is rejected, the guard
    /// rolls the transaction back on drop, so no partial row becomes
    /// visible. No rollback-and-retry.
    pub async fn insert_pin(&mut self, pin: &PinRow) -> Result<(), SeedError> {
        info!("Inserting pin {} ({} image bytes)...", pin.id, pin.image.len());

        let mut tx = self.conn.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO public."Pins"
                ("ID", "UserId", "Longitude", "Latitude", "PostTypeId",
                 "CategoryId", "Title", "Description", "LikesUp", "LikesDown",
                 "Zdjecia")
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(pin.id)
        .bind(pin.user_id)
        .bind(pin.longitude)
        .bind(pin.latitude)
        .bind(pin.post_type_id)
        .bind(pin.category_id)
        .bind(&pin.title)
        .bind(&pin.description)
        .bind(pin.likes_up)
        .bind(pin.likes_down)
        .bind(&pin.image)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        info!("Inserted pin {}", pin.id);
        Ok(())
    }

    /// Fetches one pin row by identifier, mainly to verify a seed run.
    pub async fn fetch_pin(&mut self, id: i32) -> Result<Option<PinRow>, SeedError> {
        let pin = sqlx::query_as(
            r#"
            SELECT "ID", "UserId", "Longitude", "Latitude", "PostTypeId",
                   "CategoryId", "Title", "Description", "LikesUp", "LikesDown",
                   "Zdjecia"
            FROM public."Pins"
            WHERE "ID" = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut self.conn)
        .await?;

        Ok(pin)
    }

    /// Deletes every row from `public."Pins"`, returning the count.
    ///
    /// Resets a development database so the seed can be re-run without
    /// tripping the identifier-uniqueness constraint.
    pub async fn clear_pins(&mut self) -> Result<u64, SeedError> {
        let result = sqlx::query(r#"DELETE FROM public."Pins""#)
            .execute(&mut self.conn)
            .await?;

        info!("Cleared {} pins", result.rows_affected());
        Ok(result.rows_affected())
    }

    /// Gracefully closes the connection (protocol Terminate).
    ///
    /// Dropping a [`Seeder`] also releases the connection; this is the
    /// polite version for the success path.
    pub async fn close(self) -> Result<(), SeedError> {
        self.conn.close().await?;
        Ok(())
    }

    /// Returns the underlying connection for advanced usage.
    pub fn connection(&mut self) -> &mut PgConnection {
        &mut self.conn
    }
}
