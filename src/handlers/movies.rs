use axum::{
    extract::{Path, State},
    Json,
};
use tracing::debug;

use crate::api::MoviePayload;
use crate::database::models::MovieName;
use crate::database::{Record, SqlValue, Store};
use crate::error::{ApiError, ApiResult, StoreResultExt};

/// GET /movies/ - name of every movie
pub async fn list(State(store): State<Store>) -> ApiResult<Json<Vec<MovieName>>> {
    let names = store
        .movies()
        .list_names()
        .await
        .or_store_error("Error fetching movie names")?;
    Ok(Json(names))
}

/// POST /movies/ - insert a movie
pub async fn create(
    State(store): State<Store>,
    MoviePayload(fields): MoviePayload,
) -> ApiResult<&'static str> {
    let movie_id = store
        .movies()
        .insert(&fields)
        .await
        .or_store_error("Error creating movie")?;
    debug!(movie_id, "movie created");
    Ok("Movie Successfully Added")
}

/// GET /movies/:movieId/ - full movie row
pub async fn get(
    State(store): State<Store>,
    Path(movie_id): Path<String>,
) -> ApiResult<Json<Record>> {
    store
        .movies()
        .find(&SqlValue::from_path(&movie_id))
        .await
        .or_store_error("Error fetching movie details")?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Movie not found"))
}

/// PUT /movies/:movieId/ - overwrite director, name and lead actor
///
/// Succeeds whether or not a row matched.
pub async fn update(
    State(store): State<Store>,
    Path(movie_id): Path<String>,
    MoviePayload(fields): MoviePayload,
) -> ApiResult<&'static str> {
    let affected = store
        .movies()
        .update(&SqlValue::from_path(&movie_id), &fields)
        .await
        .or_store_error("Error updating movie details")?;
    debug!(%movie_id, affected, "movie updated");
    Ok("Movie Details Updated")
}

/// DELETE /movies/:movieId/ - succeeds whether or not a row matched
pub async fn delete(
    State(store): State<Store>,
    Path(movie_id): Path<String>,
) -> ApiResult<&'static str> {
    let affected = store
        .movies()
        .delete(&SqlValue::from_path(&movie_id))
        .await
        .or_store_error("Error deleting movie")?;
    debug!(%movie_id, affected, "movie removed");
    Ok("Movie Removed")
}
