use axum::{Router, routing::get};
use storage::Database;

use super::handlers::get_prize_intervals;

pub fn routes() -> Router<Database> {
    Router::new().route("/producers/prize-intervals", get(get_prize_intervals))
}
