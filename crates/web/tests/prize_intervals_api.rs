//! Integration tests for the producer prize interval report.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, build_test_app, get, record, seed_records, send};
use serde_json::json;

const REPORT: &str = "/api/movies/producers/prize-intervals";

#[tokio::test]
async fn report_lists_smallest_and_largest_gaps() {
    let (app, _db) = build_test_app(seed_records()).await;

    let response = get(&app, REPORT).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        json["min"],
        json!([{
            "producer": "Joel Silver",
            "interval": 1,
            "previousWin": 1990,
            "followingWin": 1991
        }])
    );
    assert_eq!(
        json["max"],
        json!([{
            "producer": "Bo Derek",
            "interval": 6,
            "previousWin": 1984,
            "followingWin": 1990
        }])
    );
}

#[tokio::test]
async fn empty_store_gives_empty_lists() {
    let (app, _db) = build_test_app(Vec::new()).await;

    let response = get(&app, REPORT).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json, json!({ "min": [], "max": [] }));
}

#[tokio::test]
async fn single_win_producers_give_empty_lists() {
    let (app, _db) = build_test_app(vec![
        record("1980", "Can't Stop the Music", "Allan Carr", "yes"),
        record("1981", "Mommie Dearest", "Frank Yablans", "yes"),
    ])
    .await;

    let json = body_json(get(&app, REPORT).await).await;
    assert_eq!(json, json!({ "min": [], "max": [] }));
}

#[tokio::test]
async fn report_is_stable_between_calls() {
    let (app, _db) = build_test_app(seed_records()).await;

    let first = body_json(get(&app, REPORT).await).await;
    let second = body_json(get(&app, REPORT).await).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn new_non_winner_does_not_change_report() {
    let (app, _db) = build_test_app(seed_records()).await;
    let before = body_json(get(&app, REPORT).await).await;

    let response = send(
        &app,
        Method::POST,
        "/api/movies",
        Some(json!({
            "year": "1985",
            "title": "Rambo: First Blood Part II",
            "studios": "Columbia Pictures",
            "producers": "Joel Silver",
            "winner": "nominee"
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let after = body_json(get(&app, REPORT).await).await;
    assert_eq!(before, after);
}

#[tokio::test]
async fn new_winner_is_reflected_immediately() {
    let (app, _db) = build_test_app(seed_records()).await;

    let response = send(
        &app,
        Method::POST,
        "/api/movies",
        Some(json!({
            "year": "2000",
            "title": "Battlefield Earth",
            "studios": "Warner Bros.",
            "producers": "Allan Carr",
            "winner": "yes"
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(get(&app, REPORT).await).await;
    assert_eq!(json["max"][0]["producer"], "Allan Carr");
    assert_eq!(json["max"][0]["interval"], 20);
    assert_eq!(json["min"][0]["producer"], "Joel Silver");
}

#[tokio::test]
async fn multi_producer_field_is_never_a_producer() {
    let (app, _db) = build_test_app(seed_records()).await;

    let json = body_json(get(&app, REPORT).await).await;
    let producers: Vec<&str> = json["min"]
        .as_array()
        .unwrap()
        .iter()
        .chain(json["max"].as_array().unwrap())
        .map(|i| i["producer"].as_str().unwrap())
        .collect();

    assert!(producers.iter().all(|p| !p.contains(',')));
}

#[tokio::test]
async fn non_numeric_winning_year_is_unprocessable() {
    let mut records = seed_records();
    records.push(record("19x1", "Hudson Hawk II", "Joel Silver", "yes"));
    let (app, _db) = build_test_app(records).await;

    let response = get(&app, REPORT).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("19x1"));
}
