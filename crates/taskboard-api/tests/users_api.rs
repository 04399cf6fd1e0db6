mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::app;
use taskboard_core::Store;

#[tokio::test]
async fn test_create_user() {
    let app = app();

    let (status, body) = app
        .send(
            "POST",
            "/api/users",
            Some(json!({ "name": "Ana", "email": "ana@ex.com" })),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["name"], "Ana");
    assert_eq!(body["data"]["email"], "ana@ex.com");
    assert!(body["data"]["id"].is_string());
}

#[tokio::test]
async fn test_create_user_missing_email() {
    let app = app();

    let (status, body) = app
        .send("POST", "/api/users", Some(json!({ "name": "Incompleto" })))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "email is required");
    assert!(body.get("data").is_none());
    assert!(app.store.users.is_empty().await);
}

#[tokio::test]
async fn test_create_user_with_malformed_body() {
    let app = app();

    let (status, body) = app.send("POST", "/api/users", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_create_user_duplicate_email() {
    let app = app();
    app.seed_user("Ana", "ana@ex.com").await;

    let (status, body) = app
        .send(
            "POST",
            "/api/users",
            Some(json!({ "name": "Outra Ana", "email": "ANA@ex.com" })),
        )
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "User with this email already exists");
}

#[tokio::test]
async fn test_list_users() {
    let app = app();
    app.seed_user("Ana", "ana@ex.com").await;

    let (status, body) = app.send("GET", "/api/users", None).await;

    assert_eq!(status, StatusCode::OK);
    let users = body["data"].as_array().unwrap();
    assert!(!users.is_empty());
    assert!(users.iter().any(|u| u["email"] == "ana@ex.com"));
}

#[tokio::test]
async fn test_list_users_empty() {
    let app = app();

    let (status, body) = app.send("GET", "/api/users", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_get_user() {
    let app = app();
    let user = app.seed_user("Beto", "beto@ex.com").await;

    let (status, body) = app.send("GET", &format!("/api/users/{}", user.id), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], user.id);
    assert_eq!(body["data"]["name"], "Beto");
}

#[tokio::test]
async fn test_get_missing_user() {
    let app = app();

    let (status, body) = app.send("GET", "/api/users/999999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");
}

#[tokio::test]
async fn test_update_user() {
    let app = app();
    let user = app.seed_user("Ana", "ana@ex.com").await;

    let (status, body) = app
        .send(
            "PUT",
            &format!("/api/users/{}", user.id),
            Some(json!({ "name": "Ana Silva", "email": "ana.silva@ex.com" })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Ana Silva");
    assert_eq!(body["data"]["email"], "ana.silva@ex.com");

    let stored = app.store.users.find_unique(&user.id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Ana Silva");
    assert_eq!(stored.email, "ana.silva@ex.com");
}

#[tokio::test]
async fn test_update_missing_user() {
    let app = app();

    let (status, _) = app
        .send(
            "PUT",
            "/api/users/999999",
            Some(json!({ "name": "Fantasma", "email": "fantasma@ex.com" })),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(app.store.users.is_empty().await);
}

#[tokio::test]
async fn test_delete_user() {
    let app = app();
    let user = app.seed_user("Carlos", "carlos@ex.com").await;

    let (status, body) = app
        .send("DELETE", &format!("/api/users/{}", user.id), None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User deleted successfully");
    assert!(app.store.users.find_unique(&user.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_missing_user() {
    let app = app();

    let (status, _) = app.send("DELETE", "/api/users/999999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
