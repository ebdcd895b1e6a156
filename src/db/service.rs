// Database service for destination operations
//
// Provides direct database access for the destinations table

use crate::db::queries;
use crate::error::AppError;
use crate::models::Destination;
use deadpool_postgres::Pool;
use tokio_postgres::Row;

// Destination service for database operations
pub struct DestinationService {
    pool: Pool,
}

impl DestinationService {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    // List every destination, newest id first
    pub async fn list(&self) -> Result<Vec<Destination>, AppError> {
        let client = self.pool.get().await?;

        let rows = client.query(queries::LIST_DESTINATIONS, &[]).await?;

        Ok(rows.iter().map(destination_from_row).collect())
    }

    // Insert one destination; the database assigns the id
    pub async fn insert(
        &self,
        country: &str,
        capital: &str,
        population: i32,
        region: &str,
    ) -> Result<Destination, AppError> {
        let client = self.pool.get().await?;

        let row = client
            .query_one(
                queries::INSERT_DESTINATION,
                &[&country, &capital, &population, &region],
            )
            .await?;

        Ok(destination_from_row(&row))
    }

    // Delete a destination by its raw path id. The identifier arrives
    // unvalidated; a malformed value fails here like any other
    // persistence error. Deleting an id that does not exist is not an
    // error - zero rows affected is not distinguished from one.
    pub async fn delete_by_id(&self, raw_id: &str) -> Result<(), AppError> {
        let id: i32 = raw_id
            .parse()
            .map_err(|_| AppError::Internal(format!("invalid destination id '{raw_id}'")))?;

        let client = self.pool.get().await?;

        client.execute(queries::DELETE_DESTINATION, &[&id]).await?;

        Ok(())
    }
}

fn destination_from_row(row: &Row) -> Destination {
    Destination {
        id: row.get(0),
        country: row.get(1),
        capital: row.get(2),
        population: row.get(3),
        region: row.get(4),
    }
}
