/// Router tests that never reach the database
///
/// Authentication and body validation run before any query, so these cases
/// are exercised against a lazy pool.

mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use common::{lazy_app, send, send_request, token_for, TEST_SECRET};
use serde_json::json;
use taskboard_shared::auth::jwt::{create_token, Claims};

#[tokio::test]
async fn test_protected_route_requires_token() {
    let app = lazy_app();

    let (status, body) = send(&app, Method::GET, "/api/v1/tasks/user", None, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "unauthorized");
    assert_eq!(body["message"], "Missing authorization header");
}

#[tokio::test]
async fn test_every_task_route_is_protected() {
    let app = lazy_app();

    for (method, uri) in [
        (Method::GET, "/api/v1/tasks/user"),
        (Method::POST, "/api/v1/tasks"),
        (Method::PUT, "/api/v1/tasks/1"),
        (Method::DELETE, "/api/v1/tasks/1"),
        (Method::DELETE, "/api/v1/users/account"),
    ] {
        let (status, _) = send(&app, method.clone(), uri, None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{} {}", method, uri);
    }
}

#[tokio::test]
async fn test_undecodable_token_is_unprocessable() {
    let app = lazy_app();

    let (status, body) =
        send(&app, Method::GET, "/api/v1/tasks/user", Some("invalid_token"), None).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "validation_error");
    assert_eq!(body["details"][0]["field"], "authorization");
}

#[tokio::test]
async fn test_non_bearer_scheme_is_rejected() {
    let app = lazy_app();

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/v1/tasks/user")
        .header(header::AUTHORIZATION, "Basic dXNlcjpwYXNz")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send_request(&app, request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let app = lazy_app();
    let expired = create_token(&Claims::new(1, chrono::Duration::minutes(-5)), TEST_SECRET).unwrap();

    let (status, body) = send(&app, Method::GET, "/api/v1/tasks/user", Some(&expired), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "unauthorized");
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_rejected() {
    let app = lazy_app();
    let forged = create_token(
        &Claims::new(1, chrono::Duration::minutes(5)),
        "some-other-secret-that-is-also-32-bytes",
    )
    .unwrap();

    let (status, _) = send(&app, Method::GET, "/api/v1/tasks/user", Some(&forged), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_register_with_missing_fields() {
    let app = lazy_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/users",
        None,
        Some(json!({ "username": "newuser" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"][0]["field"], "body");
}

#[tokio::test]
async fn test_register_with_invalid_email() {
    let app = lazy_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/users",
        None,
        Some(json!({
            "username": "newuser",
            "email": "not-an-email",
            "password": "password123",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"][0]["field"], "email");
}

#[tokio::test]
async fn test_sign_in_with_missing_password() {
    let app = lazy_app();

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/auth/sign-in",
        None,
        Some(json!({ "email": "test@example.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_tag_with_empty_name() {
    let app = lazy_app();

    let (status, body) =
        send(&app, Method::POST, "/api/v1/tags", None, Some(json!({ "name": "" }))).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"][0]["field"], "name");
}

#[tokio::test]
async fn test_create_task_with_missing_fields() {
    let app = lazy_app();
    let token = token_for(1);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/tasks",
        Some(&token),
        Some(json!({ "title": "New Task" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_task_with_unknown_status() {
    let app = lazy_app();
    let token = token_for(1);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/tasks",
        Some(&token),
        Some(json!({
            "title": "New Task",
            "content": "Task content",
            "status": "ARCHIVED",
            "tagId": 1,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_update_task_requires_status() {
    let app = lazy_app();
    let token = token_for(1);

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/v1/tasks/1",
        Some(&token),
        Some(json!({ "title": "Updated", "content": "Updated content" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = lazy_app();

    let (status, _) = send(&app, Method::GET, "/api/v1/projects", None, None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_numeric_user_id_is_unprocessable() {
    let app = lazy_app();

    let (status, body) = send(&app, Method::GET, "/api/v1/users/abc", None, None).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "validation_error");
    assert_eq!(body["details"][0]["field"], "id");
}

#[tokio::test]
async fn test_non_numeric_task_id_is_unprocessable() {
    let app = lazy_app();
    let token = token_for(1);

    let (status, body) =
        send(&app, Method::DELETE, "/api/v1/tasks/abc", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"][0]["field"], "id");

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/v1/tasks/abc",
        Some(&token),
        Some(json!({ "title": "t", "content": "c", "status": "PENDING" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"][0]["field"], "id");
}

#[tokio::test]
async fn test_register_rejects_nul_characters() {
    let app = lazy_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/users",
        None,
        Some(json!({
            "username": "bad\u{0}name",
            "email": "newuser@example.com",
            "password": "password123",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"][0]["field"], "username");
}

#[tokio::test]
async fn test_sign_in_rejects_nul_characters() {
    let app = lazy_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/auth/sign-in",
        None,
        Some(json!({ "email": "test@example.com", "password": "pass\u{0}word" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"][0]["field"], "password");
}

#[tokio::test]
async fn test_create_tag_rejects_nul_characters() {
    let app = lazy_app();

    let (status, body) =
        send(&app, Method::POST, "/api/v1/tags", None, Some(json!({ "name": "t\u{0}g" }))).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"][0]["field"], "name");
}

#[tokio::test]
async fn test_create_task_rejects_nul_characters() {
    let app = lazy_app();
    let token = token_for(1);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/tasks",
        Some(&token),
        Some(json!({ "title": "New\u{0}Task", "content": "Task content", "tagId": 1 })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"][0]["field"], "title");
}
