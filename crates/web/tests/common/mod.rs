#![allow(dead_code)]

use awards_api::build_router;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, Response, header},
};
use serde_json::Value;
use storage::{Database, models::AwardRecord, repository::award_record::AwardRecordRepository};
use tower::ServiceExt;
use uuid::Uuid;

pub fn record(year: &str, title: &str, producers: &str, winner: &str) -> AwardRecord {
    AwardRecord {
        id: Uuid::new_v4(),
        year: year.to_string(),
        title: title.to_string(),
        studios: "Associated Film Distribution".to_string(),
        producers: producers.to_string(),
        winner: winner.to_string(),
    }
}

pub fn seed_records() -> Vec<AwardRecord> {
    vec![
        record("1980", "Can't Stop the Music", "Allan Carr", "yes"),
        record("1980", "Cruising", "Jerry Weintraub", ""),
        record("1984", "Bolero", "Bo Derek", "yes"),
        record("1990", "The Adventures of Ford Fairlane", "Steven Perry, Joel Silver", "yes"),
        record("1990", "Ghosts Can't Do It", "Bo Derek", "yes"),
        record("1991", "Hudson Hawk", "Joel Silver", "yes"),
    ]
}

/// App backed by a store holding `records`
pub async fn build_test_app(records: Vec<AwardRecord>) -> (Router, Database) {
    let db = Database::new();
    AwardRecordRepository::new(db.pool())
        .create_batch(records)
        .await
        .expect("seed store");

    (build_router(db.clone()), db)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}
