use axum::{
    routing::{get, MethodRouter},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ApiConfig;
use crate::database::Store;
use crate::handlers::{directors, health, movies};

/// Build the full application router around an opened store.
pub fn app(store: Store, api: &ApiConfig) -> Router {
    let router = Router::new()
        .route("/health", get(health))
        .merge(movie_routes())
        .merge(director_routes())
        .with_state(store);

    let router = if api.enable_cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    if api.enable_request_logging {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

fn movie_routes() -> Router<Store> {
    Router::new()
        .merge(either_slash(
            "/movies",
            get(movies::list).post(movies::create),
        ))
        .merge(either_slash(
            "/movies/:movieId",
            get(movies::get).put(movies::update).delete(movies::delete),
        ))
}

fn director_routes() -> Router<Store> {
    Router::new()
        .merge(either_slash("/directors", get(directors::list)))
        .merge(either_slash("/directors/:directorId/movies", get(directors::movies)))
}

/// Serve `path` with and without a trailing slash.
fn either_slash(path: &str, handler: MethodRouter<Store>) -> Router<Store> {
    Router::new()
        .route(path, handler.clone())
        .route(&format!("{path}/"), handler)
}
