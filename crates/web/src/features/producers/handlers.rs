use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::{Database, dto::prize_interval::PrizeIntervalReport};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/movies/producers/prize-intervals",
    responses(
        (status = 200, description = "Producers with the smallest and largest gaps between wins; both lists are empty when nobody won twice", body = PrizeIntervalReport),
        (status = 422, description = "A winning record has a non-numeric year")
    ),
    tag = "producers"
)]
pub async fn get_prize_intervals(State(db): State<Database>) -> Result<Response, WebError> {
    let report = services::get_prize_intervals(db.pool()).await?;

    Ok(Json(report).into_response())
}
