use axum::{extract::State, Json};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::{error::ApiError, handlers::resource::DataResponse, state::ApiState};
use taskboard_core::TaskStatus;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub users: usize,
    pub tasks: usize,
    pub categories: usize,
    pub tasks_by_status: BTreeMap<&'static str, usize>,
}

pub async fn get_statistics(
    State(state): State<ApiState>,
) -> Result<Json<DataResponse<StatsResponse>>, ApiError> {
    let users = state.users.list().await?.len();
    let categories = state.categories.list().await?.len();
    let tasks = state.tasks.list().await?;

    let mut tasks_by_status: BTreeMap<&'static str, usize> =
        TaskStatus::ALL.iter().map(|s| (s.as_str(), 0)).collect();
    for task in &tasks {
        *tasks_by_status.entry(task.status.as_str()).or_insert(0) += 1;
    }

    Ok(Json(DataResponse {
        data: StatsResponse {
            users,
            tasks: tasks.len(),
            categories,
            tasks_by_status,
        },
    }))
}
