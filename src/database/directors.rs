use sqlx::SqlitePool;

use crate::database::record::{row_to_record, Record};
use crate::database::store::DatabaseError;

/// Read-only access to the `director` table
pub struct DirectorRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> DirectorRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Every director row with all of its columns
    pub async fn list(&self) -> Result<Vec<Record>, DatabaseError> {
        let rows = sqlx::query("SELECT * FROM director")
            .fetch_all(self.pool)
            .await?;
        let records = rows.iter().map(row_to_record).collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }
}
