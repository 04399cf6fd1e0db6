mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{app, TestApp};
use taskboard_core::{Category, Store, Task, User};

async fn seeded() -> (TestApp, User, Category) {
    let app = app();
    let user = app.seed_user("João", "joao@ex.com").await;
    let category = app.seed_category("Trabalho").await;
    (app, user, category)
}

async fn seed_task(app: &TestApp, user: &User, category: &Category) -> Task {
    app.store
        .tasks
        .create(Task::new(
            "Tarefa".to_string(),
            "Desc".to_string(),
            user.id.clone(),
            category.id.clone(),
        ))
        .await
        .unwrap()
}

#[tokio::test]
async fn test_create_task() {
    let (app, user, category) = seeded().await;

    let (status, body) = app
        .send(
            "POST",
            "/api/tasks",
            Some(json!({
                "title": "Tarefa de teste",
                "description": "Descrição",
                "userId": user.id,
                "categoryId": category.id,
                "priority": "MEDIUM",
                "status": "PENDING"
            })),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["title"], "Tarefa de teste");
    assert_eq!(body["data"]["description"], "Descrição");
    assert_eq!(body["data"]["userId"], user.id);
    assert_eq!(body["data"]["status"], "PENDING");
}

#[tokio::test]
async fn test_create_task_missing_description() {
    let (app, user, category) = seeded().await;

    let (status, body) = app
        .send(
            "POST",
            "/api/tasks",
            Some(json!({ "title": "Sem descrição", "userId": user.id, "categoryId": category.id })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "description is required");
    assert!(app.store.tasks.is_empty().await);
}

#[tokio::test]
async fn test_create_task_with_unknown_category() {
    let (app, user, _) = seeded().await;

    let (status, body) = app
        .send(
            "POST",
            "/api/tasks",
            Some(json!({
                "title": "Tarefa",
                "description": "Desc",
                "userId": user.id,
                "categoryId": "999"
            })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "categoryId does not reference an existing Category");
}

#[tokio::test]
async fn test_create_task_with_invalid_priority() {
    let (app, user, category) = seeded().await;

    let (status, body) = app
        .send(
            "POST",
            "/api/tasks",
            Some(json!({
                "title": "Tarefa",
                "description": "Desc",
                "userId": user.id,
                "categoryId": category.id,
                "priority": "URGENT"
            })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_list_tasks() {
    let (app, user, category) = seeded().await;
    seed_task(&app, &user, &category).await;

    let (status, body) = app.send("GET", "/api/tasks", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_task() {
    let (app, user, category) = seeded().await;
    let task = seed_task(&app, &user, &category).await;

    let (status, body) = app
        .send(
            "PUT",
            &format!("/api/tasks/{}", task.id),
            Some(json!({ "title": "Tarefa atualizada", "description": "Nova desc" })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "Tarefa atualizada");
    assert_eq!(body["data"]["description"], "Nova desc");
    assert_eq!(body["data"]["categoryId"], category.id);
}

#[tokio::test]
async fn test_update_task_status_only() {
    let (app, user, category) = seeded().await;
    let task = seed_task(&app, &user, &category).await;

    let (status, body) = app
        .send(
            "PUT",
            &format!("/api/tasks/{}", task.id),
            Some(json!({ "status": "IN_PROGRESS" })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "IN_PROGRESS");
    assert_eq!(body["data"]["title"], "Tarefa");
}

#[tokio::test]
async fn test_update_missing_task() {
    let app = app();

    let (status, body) = app
        .send("PUT", "/api/tasks/999", Some(json!({ "title": "Teste" })))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Task not found");
    assert!(app.store.tasks.is_empty().await);
}

#[tokio::test]
async fn test_delete_task() {
    let (app, user, category) = seeded().await;
    let task = seed_task(&app, &user, &category).await;

    let (status, body) = app
        .send("DELETE", &format!("/api/tasks/{}", task.id), None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Task deleted successfully");
    assert!(app.store.tasks.find_unique(&task.id).await.unwrap().is_none());

    let (status, _) = app.send("GET", &format!("/api/tasks/{}", task.id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_task() {
    let app = app();

    let (status, body) = app.send("DELETE", "/api/tasks/999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Task not found");
}

#[tokio::test]
async fn test_delete_user_with_tasks_is_refused() {
    let (app, user, category) = seeded().await;
    seed_task(&app, &user, &category).await;

    let (status, body) = app
        .send("DELETE", &format!("/api/users/{}", user.id), None)
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "User is still referenced by existing tasks");
    assert_eq!(app.store.users.len().await, 1);
}
