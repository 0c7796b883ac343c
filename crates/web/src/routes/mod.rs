use axum::Router;
use storage::Database;

use crate::features::{health, movies, producers};

pub fn api_routes() -> Router<Database> {
    Router::new()
        .nest(
            "/api/movies",
            movies::routes::routes().merge(producers::routes::routes()),
        )
        .merge(health::routes())
}
