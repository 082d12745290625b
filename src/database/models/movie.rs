use serde::Serialize;
use sqlx::FromRow;

use crate::database::value::SqlValue;

/// Projection used by the list endpoints, serialized as `{ "movieName": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MovieName {
    pub movie_name: Option<String>,
}

/// Writable movie columns, bound in `director_id, movie_name, lead_actor` order.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieFields {
    pub director_id: SqlValue,
    pub movie_name: SqlValue,
    pub lead_actor: SqlValue,
}

impl MovieFields {
    pub fn empty() -> Self {
        Self {
            director_id: SqlValue::Null,
            movie_name: SqlValue::Null,
            lead_actor: SqlValue::Null,
        }
    }
}
