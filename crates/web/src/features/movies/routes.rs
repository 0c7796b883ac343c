use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{create_movie, delete_movie, get_movie, list_movies, update_movie};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_movies).post(create_movie))
        .route("/:id", get(get_movie).put(update_movie).delete(delete_movie))
}
