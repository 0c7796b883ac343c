use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::award_record::{AwardRecordResponse, CreateAwardRecordRequest, UpdateAwardRecordRequest},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/movies",
    responses(
        (status = 200, description = "List all award records successfully", body = Vec<AwardRecordResponse>)
    ),
    tag = "movies"
)]
pub async fn list_movies(State(db): State<Database>) -> Result<Response, WebError> {
    let records = services::list_records(db.pool()).await?;

    let response: Vec<AwardRecordResponse> =
        records.into_iter().map(AwardRecordResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/movies/{id}",
    params(
        ("id" = Uuid, Path, description = "Award record id")
    ),
    responses(
        (status = 200, description = "Award record found", body = AwardRecordResponse),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Award record not found")
    ),
    tag = "movies"
)]
pub async fn get_movie(
    State(db): State<Database>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Response, WebError> {
    let Path(id) = id?;
    let record = services::get_record(db.pool(), id).await?;

    Ok(Json(AwardRecordResponse::from(record)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/movies",
    request_body = CreateAwardRecordRequest,
    responses(
        (status = 201, description = "Award record created successfully", body = AwardRecordResponse),
        (status = 400, description = "Validation error")
    ),
    tag = "movies"
)]
pub async fn create_movie(
    State(db): State<Database>,
    payload: Result<Json<CreateAwardRecordRequest>, JsonRejection>,
) -> Result<Response, WebError> {
    let Json(req) = payload?;
    req.validate()?;

    let record = services::create_record(db.pool(), &req).await?;
    let location = format!("/api/movies/{}", record.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(AwardRecordResponse::from(record)),
    )
        .into_response())
}

#[utoipa::path(
    put,
    path = "/api/movies/{id}",
    params(
        ("id" = Uuid, Path, description = "Award record id")
    ),
    request_body = UpdateAwardRecordRequest,
    responses(
        (status = 200, description = "Award record updated successfully", body = AwardRecordResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Award record not found")
    ),
    tag = "movies"
)]
pub async fn update_movie(
    State(db): State<Database>,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<UpdateAwardRecordRequest>, JsonRejection>,
) -> Result<Response, WebError> {
    let Path(id) = id?;
    let Json(update_req) = payload?;
    update_req.validate()?;

    let updated = services::update_record(db.pool(), id, &update_req).await?;

    Ok(Json(AwardRecordResponse::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/movies/{id}",
    params(
        ("id" = Uuid, Path, description = "Award record id")
    ),
    responses(
        (status = 204, description = "Award record deleted successfully"),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Award record not found")
    ),
    tag = "movies"
)]
pub async fn delete_movie(
    State(db): State<Database>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Response, WebError> {
    let Path(id) = id?;
    services::delete_record(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
