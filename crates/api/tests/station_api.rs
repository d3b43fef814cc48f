//! HTTP-level integration tests for the `/stations` resource.

mod common;

use axum::http::{header, StatusCode};
use common::{body_json, create_line, create_station, delete, get, post_json};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn create_station_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/stations", serde_json::json!({"name": "강남역"})).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(response.headers().contains_key(header::LOCATION));

    let json = body_json(response).await;
    assert_eq!(json["name"], "강남역");
    assert!(json["id"].is_number());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn blank_station_name_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/stations", serde_json::json!({"name": "  "})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_station_name_returns_400(pool: PgPool) {
    create_station(&pool, "강남역").await;

    let app = common::build_test_app(pool);
    let response = post_json(app, "/stations", serde_json::json!({"name": "강남역"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "CONSTRAINT_VIOLATION");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_and_get_stations(pool: PgPool) {
    let a = create_station(&pool, "강남역").await;
    let b = create_station(&pool, "양재역").await;

    let json = body_json(get(common::build_test_app(pool.clone()), "/stations").await).await;
    let ids: Vec<i64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![a, b]);

    let response = get(common::build_test_app(pool), &format!("/stations/{b}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "양재역");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_nonexistent_station_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/stations/999999").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_station_returns_204(pool: PgPool) {
    let a = create_station(&pool, "강남역").await;

    let response = delete(common::build_test_app(pool.clone()), &format!("/stations/{a}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(common::build_test_app(pool), &format!("/stations/{a}")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_station_on_a_line_returns_400(pool: PgPool) {
    let a = create_station(&pool, "강남역").await;
    let b = create_station(&pool, "양재역").await;
    create_line(&pool, "신분당선", "bg-red-600", a, b).await;

    let response = delete(common::build_test_app(pool), &format!("/stations/{a}")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "CONSTRAINT_VIOLATION");
}
