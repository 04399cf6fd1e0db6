use reqwest::{Client, Method, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use taskboard_core::{
    Category, NewCategory, NewTask, NewUser, Task, TaskPatch, User,
};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct MessageEnvelope {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: String,
}

/// Thin client for the Taskboard REST API.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    pub async fn list_users(&self) -> Result<Vec<User>> {
        self.data(Method::GET, "/api/users", None::<&()>).await
    }

    pub async fn create_user(&self, user: &NewUser) -> Result<User> {
        self.data(Method::POST, "/api/users", Some(user)).await
    }

    pub async fn delete_user(&self, id: &str) -> Result<String> {
        self.delete(&format!("/api/users/{}", id)).await
    }

    pub async fn list_tasks(&self) -> Result<Vec<Task>> {
        self.data(Method::GET, "/api/tasks", None::<&()>).await
    }

    pub async fn create_task(&self, task: &NewTask) -> Result<Task> {
        self.data(Method::POST, "/api/tasks", Some(task)).await
    }

    pub async fn update_task(&self, id: &str, patch: &TaskPatch) -> Result<Task> {
        self.data(Method::PUT, &format!("/api/tasks/{}", id), Some(patch))
            .await
    }

    pub async fn delete_task(&self, id: &str) -> Result<String> {
        self.delete(&format!("/api/tasks/{}", id)).await
    }

    /// Same list the web frontend renders.
    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        self.data(Method::GET, "/categories", None::<&()>).await
    }

    pub async fn create_category(&self, category: &NewCategory) -> Result<Category> {
        self.data(Method::POST, "/api/categories", Some(category))
            .await
    }

    pub async fn stats(&self) -> Result<Value> {
        self.data(Method::GET, "/api/stats", None::<&()>).await
    }

    async fn data<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.send(method, path, body).await?;
        let envelope: DataEnvelope<T> = response.json().await?;
        Ok(envelope.data)
    }

    async fn delete(&self, path: &str) -> Result<String> {
        let response = self.send(Method::DELETE, path, None::<&()>).await?;
        let envelope: MessageEnvelope = response.json().await?;
        Ok(envelope.message)
    }

    async fn send<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("{} {}", method, url);

        let mut request = self.http.request(method, url.as_str());
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let message = match response.json::<ErrorEnvelope>().await {
            Ok(envelope) => envelope.error,
            Err(_) => "unexpected response".to_string(),
        };
        Err(ClientError::Api { status, message })
    }
}
