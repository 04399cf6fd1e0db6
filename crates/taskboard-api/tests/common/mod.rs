#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use taskboard_api::{create_router, ApiState};
use taskboard_core::{Category, MemoryStore, Store, User};

pub struct TestApp {
    pub router: Router,
    pub store: MemoryStore,
}

pub fn app() -> TestApp {
    let store = MemoryStore::new();
    TestApp {
        router: create_router(ApiState::from_memory(store.clone())),
        store,
    }
}

impl TestApp {
    pub async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    pub async fn seed_user(&self, name: &str, email: &str) -> User {
        self.store
            .users
            .create(User::new(name.to_string(), email.to_string()))
            .await
            .unwrap()
    }

    pub async fn seed_category(&self, name: &str) -> Category {
        self.store
            .categories
            .create(Category::new(name.to_string()))
            .await
            .unwrap()
    }
}
