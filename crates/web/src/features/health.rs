use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use storage::{Database, repository::award_record::AwardRecordRepository};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub records: usize,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health(State(db): State<Database>) -> Json<HealthResponse> {
    let records = AwardRecordRepository::new(db.pool()).count().await;

    Json(HealthResponse {
        status: "ok".to_string(),
        records,
    })
}

pub fn routes() -> Router<Database> {
    Router::new().route("/health", get(health))
}
