use uuid::Uuid;

use crate::helpers::{TestApp, json_body};

#[tokio::test]
async fn a_created_user_can_be_fetched_by_id() {
    let app = TestApp::spawn().await;
    let created = json_body(app.post_user("Test User", "test@example.com").await).await;
    let id = created["id"].as_str().unwrap();

    let response = app.get(&format!("/users/{id}")).await;

    assert_eq!(response.status(), 200);
    let body = json_body(response).await;
    assert_eq!(body, created);
}

#[tokio::test]
async fn an_unknown_id_returns_not_found() {
    let app = TestApp::spawn().await;

    let response = app.get(&format!("/users/{}", Uuid::new_v4())).await;

    assert_eq!(response.status(), 404);
    let body = json_body(response).await;
    assert_eq!(body["code"], "User.NotFound");
}

#[tokio::test]
async fn a_malformed_id_returns_the_structured_error_body() {
    let app = TestApp::spawn().await;

    let response = app.get("/users/not-a-uuid").await;

    assert_eq!(response.status(), 400);
    let body = json_body(response).await;
    assert_eq!(body["code"], "User.InvalidId");
    assert_eq!(body["message"], "The user id must be a valid UUID.");
}

#[tokio::test]
async fn listing_starts_empty() {
    let app = TestApp::spawn().await;

    let response = app.get("/users").await;

    assert_eq!(response.status(), 200);
    let body = json_body(response).await;
    assert_eq!(body.as_array().map(Vec::len), Some(0));
}
