//! End-to-end API scenario against a real database.
//!
//! Run with: DATABASE_URL=postgres://... cargo test -p matchboard-server -- --ignored

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use sqlx::PgPool;
use tower::ServiceExt;

use matchboard_server::db::{create_pool, migrations, PlayerRepo};
use matchboard_server::http::{build_router, AppState};

async fn test_app() -> (axum::Router, PgPool) {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let pool = create_pool(&url).await.expect("pool");
    migrations::run(&pool).await.expect("migrations");

    let app = build_router(AppState { pool: pool.clone() }, false);
    (app, pool)
}

async fn fresh_player(pool: &PgPool) -> i32 {
    let name = format!("Scenario, the Tested {}", rand::random::<u64>());
    assert!(PlayerRepo::new(pool).insert_name(&name).await.expect("insert"));

    let (id,): (i32,) = sqlx::query_as("SELECT player_id FROM players WHERE player_name = $1")
        .bind(&name)
        .fetch_one(pool)
        .await
        .expect("id lookup");
    id
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
#[ignore = "requires database"]
async fn player2_win_is_visible_through_the_api() {
    let (app, pool) = test_app().await;
    let (p1, p2) = (fresh_player(&pool).await, fresh_player(&pool).await);

    // PUT /match: player2 wins
    let request = Request::builder()
        .method(Method::PUT)
        .uri("/match")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::json!({
                "player1_id": p1,
                "player2_id": p2,
                "match_result": 2
            })
            .to_string(),
        ))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // GET /players/{p1}: one loss, no points
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/players/{p1}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let stats = body_json(response).await;
    assert_eq!(stats["matches_lost"], 1);
    assert_eq!(stats["score"], 0);

    // GET /players/{p2}: one win, two points
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/players/{p2}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let stats = body_json(response).await;
    assert_eq!(stats["matches_won"], 1);
    assert_eq!(stats["score"], 2);
}

#[tokio::test]
#[ignore = "requires database"]
async fn unknown_player_lookup_is_404() {
    let (app, _pool) = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/players/{}", i32::MAX))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
#[ignore = "requires database"]
async fn invalid_result_code_is_400() {
    let (app, pool) = test_app().await;
    let (p1, p2) = (fresh_player(&pool).await, fresh_player(&pool).await);

    let request = Request::builder()
        .method(Method::PUT)
        .uri("/match")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::json!({
                "player1_id": p1,
                "player2_id": p2,
                "match_result": 7
            })
            .to_string(),
        ))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires database"]
async fn players_listing_contains_new_ids() {
    let (app, pool) = test_app().await;
    let id = fresh_player(&pool).await;

    let response = app
        .oneshot(Request::builder().uri("/players").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let ids: Vec<i32> = serde_json::from_value(body_json(response).await).expect("id array");
    assert!(ids.contains(&id));
}

#[tokio::test]
#[ignore = "requires database"]
async fn leaderboard_page_is_html() {
    let (app, _pool) = test_app().await;

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let page = String::from_utf8(bytes.to_vec()).expect("utf8");
    assert!(page.contains("<h1>Leaderboard</h1>"));
}
