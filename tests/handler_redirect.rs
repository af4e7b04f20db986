mod common;

use axum::http::{StatusCode, header};
use axum_test::TestServer;

#[tokio::test]
async fn test_redirect_returns_301_with_location() {
    let (state, repo) = common::create_test_state();
    repo.seed("abc123xyz0", "https://example.com/target");
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server.get("/api/shortUrl/abc123xyz0").await;

    response.assert_status(StatusCode::MOVED_PERMANENTLY);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "https://example.com/target"
    );
}

#[tokio::test]
async fn test_redirect_increments_clicks_once_per_call() {
    let (state, repo) = common::create_test_state();
    repo.seed("abc123xyz0", "https://example.com/target");
    let server = TestServer::new(common::test_app(state)).unwrap();

    for _ in 0..5 {
        let response = server.get("/api/shortUrl/abc123xyz0").await;
        response.assert_status(StatusCode::MOVED_PERMANENTLY);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "https://example.com/target"
        );
    }

    assert_eq!(repo.get_by_code("abc123xyz0").unwrap().clicks, 5);
}

#[tokio::test]
async fn test_redirect_is_case_insensitive_on_code() {
    let (state, repo) = common::create_test_state();
    repo.seed("abc123xyz0", "https://example.com/target");
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server.get("/api/shortUrl/ABC123xyz0").await;

    response.assert_status(StatusCode::MOVED_PERMANENTLY);
    assert_eq!(repo.get_by_code("abc123xyz0").unwrap().clicks, 1);
}

#[tokio::test]
async fn test_redirect_unknown_code_is_404_and_counts_nothing() {
    let (state, repo) = common::create_test_state();
    repo.seed("abc123xyz0", "https://example.com/target");
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server.get("/api/shortUrl/missing999").await;

    response.assert_status(StatusCode::NOT_FOUND);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "not_found");

    // No counter was touched on any record.
    assert_eq!(repo.total_clicks(), 0);
}
