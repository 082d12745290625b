use sqlx::SqlitePool;

use crate::database::models::{MovieFields, MovieName};
use crate::database::record::{row_to_record, Record};
use crate::database::store::DatabaseError;
use crate::database::value::{BindValue, SqlValue};

/// Single-statement access to the `movie` table
pub struct MovieRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> MovieRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Name of every movie, in the store's natural row order
    pub async fn list_names(&self) -> Result<Vec<MovieName>, DatabaseError> {
        let names = sqlx::query_as::<_, MovieName>("SELECT movie_name FROM movie")
            .fetch_all(self.pool)
            .await?;
        Ok(names)
    }

    /// Inserts a movie and returns the store-generated `movie_id`
    pub async fn insert(&self, fields: &MovieFields) -> Result<i64, DatabaseError> {
        let result = sqlx::query(
            "INSERT INTO movie (director_id, movie_name, lead_actor) VALUES (?, ?, ?)",
        )
        .bind_value(&fields.director_id)
        .bind_value(&fields.movie_name)
        .bind_value(&fields.lead_actor)
        .execute(self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn find(&self, movie_id: &SqlValue) -> Result<Option<Record>, DatabaseError> {
        let row = sqlx::query("SELECT * FROM movie WHERE movie_id = ?")
            .bind_value(movie_id)
            .fetch_optional(self.pool)
            .await?;
        Ok(row.as_ref().map(row_to_record).transpose()?)
    }

    /// Overwrites all writable columns; returns the affected row count
    pub async fn update(
        &self,
        movie_id: &SqlValue,
        fields: &MovieFields,
    ) -> Result<u64, DatabaseError> {
        let result = sqlx::query(
            "UPDATE movie SET director_id = ?, movie_name = ?, lead_actor = ? WHERE movie_id = ?",
        )
        .bind_value(&fields.director_id)
        .bind_value(&fields.movie_name)
        .bind_value(&fields.lead_actor)
        .bind_value(movie_id)
        .execute(self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete(&self, movie_id: &SqlValue) -> Result<u64, DatabaseError> {
        let result = sqlx::query("DELETE FROM movie WHERE movie_id = ?")
            .bind_value(movie_id)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn list_names_by_director(
        &self,
        director_id: &SqlValue,
    ) -> Result<Vec<MovieName>, DatabaseError> {
        let sql = "SELECT movie_name FROM movie WHERE director_id = ?";
        let names = sqlx::query_as::<_, MovieName>(sql)
            .bind_value(director_id)
            .fetch_all(self.pool)
            .await?;
        Ok(names)
    }
}
