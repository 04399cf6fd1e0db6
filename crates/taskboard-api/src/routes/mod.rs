use axum::{extract::FromRef, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{handlers, handlers::resource, state::ApiState};
use taskboard_core::{Category, Resource, ResourceService, Task, User};

pub fn create_router(state: ApiState) -> Router {
    let router = Router::new()
        // Health check
        .route("/health", get(handlers::health::health_check))

        // Statistics
        .route("/api/stats", get(handlers::stats::get_statistics))

        // Category list consumed by the web frontend
        .route("/categories", get(resource::list::<Category>));

    let router = resource_routes::<User>(router, "/api/users");
    let router = resource_routes::<Task>(router, "/api/tasks");
    let router = resource_routes::<Category>(router, "/api/categories");

    router
        // Add state
        .with_state(state)

        // Add tracing and CORS
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Mounts the five CRUD routes for `R` under `base`.
fn resource_routes<R>(router: Router<ApiState>, base: &str) -> Router<ApiState>
where
    R: Resource,
    ResourceService<R>: FromRef<ApiState>,
{
    router
        .route(base, get(resource::list::<R>).post(resource::create::<R>))
        .route(
            &format!("{}/:id", base),
            get(resource::get::<R>)
                .put(resource::update::<R>)
                .delete(resource::delete::<R>),
        )
}
