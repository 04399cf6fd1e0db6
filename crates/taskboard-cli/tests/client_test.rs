use taskboard_api::{create_router, ApiState};
use taskboard_cli::{render, ApiClient, ClientError};
use taskboard_core::{NewCategory, NewTask, NewUser, TaskPatch, TaskStatus};

async fn spawn_server() -> ApiClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, create_router(ApiState::in_memory()))
            .await
            .unwrap();
    });

    ApiClient::new(format!("http://{}", addr))
}

fn category(name: &str) -> NewCategory {
    NewCategory {
        name: Some(name.to_string()),
    }
}

#[tokio::test]
async fn test_renders_categories_from_api() {
    let client = spawn_server().await;
    client.create_category(&category("Trabalho")).await.unwrap();
    client.create_category(&category("Estudo")).await.unwrap();

    let categories = client.list_categories().await.unwrap();
    let output = render::render_categories(&categories);

    assert!(output.contains("Trabalho"));
    assert!(output.contains("Estudo"));
}

#[tokio::test]
async fn test_task_flow_through_client() {
    let client = spawn_server().await;

    let user = client
        .create_user(&NewUser {
            name: Some("Ana".to_string()),
            email: Some("ana@ex.com".to_string()),
        })
        .await
        .unwrap();
    let work = client.create_category(&category("Trabalho")).await.unwrap();

    let task = client
        .create_task(&NewTask {
            title: Some("Tarefa".to_string()),
            description: Some("Desc".to_string()),
            user_id: Some(user.id.clone()),
            category_id: Some(work.id.clone()),
            ..Default::default()
        })
        .await
        .unwrap();

    let updated = client
        .update_task(
            &task.id,
            &TaskPatch {
                status: Some(TaskStatus::Done),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.status, TaskStatus::Done);

    let stats = client.stats().await.unwrap();
    assert_eq!(stats["tasksByStatus"]["DONE"], 1);

    let message = client.delete_task(&task.id).await.unwrap();
    assert_eq!(message, "Task deleted successfully");
    assert!(client.list_tasks().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_api_errors_carry_server_message() {
    let client = spawn_server().await;

    match client.delete_task("999").await {
        Err(ClientError::Api { status, message }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "Task not found");
        }
        other => panic!("expected API error, got {:?}", other),
    }

    let err = client
        .create_user(&NewUser {
            name: Some("Incompleto".to_string()),
            email: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 400, .. }));
}
