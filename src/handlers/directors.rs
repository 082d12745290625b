use axum::{
    extract::{Path, State},
    Json,
};

use crate::database::models::MovieName;
use crate::database::{Record, SqlValue, Store};
use crate::error::{ApiResult, StoreResultExt};

/// GET /directors/ - every director row
pub async fn list(State(store): State<Store>) -> ApiResult<Json<Vec<Record>>> {
    let directors = store
        .directors()
        .list()
        .await
        .or_store_error("Error fetching directors")?;
    Ok(Json(directors))
}

/// GET /directors/:directorId/movies/ - names of the director's movies
///
/// An unknown director is an empty list, not a 404.
pub async fn movies(
    State(store): State<Store>,
    Path(director_id): Path<String>,
) -> ApiResult<Json<Vec<MovieName>>> {
    let names = store
        .movies()
        .list_names_by_director(&SqlValue::from_path(&director_id))
        .await
        .or_store_error("Error fetching movie names")?;
    Ok(Json(names))
}
