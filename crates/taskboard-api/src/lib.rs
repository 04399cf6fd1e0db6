use std::sync::Arc;

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::Settings;
pub use routes::create_router;
pub use state::ApiState;

/// Picks PostgreSQL when a database URL is configured, memory otherwise.
pub async fn build_state(settings: &Settings) -> anyhow::Result<ApiState> {
    match settings.database_url {
        Some(ref db_url) => {
            let database =
                taskboard_db::Database::new(db_url, settings.db_max_connections).await?;
            database.init_schema().await?;
            Ok(ApiState::with_database(Arc::new(database)))
        }
        None => {
            tracing::warn!("No DATABASE_URL provided, running without persistence");
            Ok(ApiState::in_memory())
        }
    }
}

/// Run the HTTP server until the listener fails.
pub async fn serve(settings: Settings) -> anyhow::Result<()> {
    let state = build_state(&settings).await?;
    let app = create_router(state);

    let addr = settings.addr();
    tracing::info!("Taskboard API Server running on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
