use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::{Error, Reference, Resource, ResourceKind, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Done,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
        }
    }
}

impl FromStr for Priority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "LOW" => Ok(Priority::Low),
            "MEDIUM" => Ok(Priority::Medium),
            "HIGH" => Ok(Priority::High),
            other => Err(Error::Validation(format!("Unknown priority: {}", other))),
        }
    }
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Pending, TaskStatus::InProgress, TaskStatus::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "PENDING",
            TaskStatus::InProgress => "IN_PROGRESS",
            TaskStatus::Done => "DONE",
        }
    }
}

impl FromStr for TaskStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "PENDING" => Ok(TaskStatus::Pending),
            "IN_PROGRESS" => Ok(TaskStatus::InProgress),
            "DONE" => Ok(TaskStatus::Done),
            other => Err(Error::Validation(format!("Unknown task status: {}", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub user_id: String,
    pub category_id: String,
    pub priority: Priority,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: Option<String>,
    pub description: Option<String>,
    pub user_id: Option<String>,
    pub category_id: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<TaskStatus>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub user_id: Option<String>,
    pub category_id: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<TaskStatus>,
}

impl Task {
    pub fn new(title: String, description: String, user_id: String, category_id: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            description,
            user_id,
            category_id,
            priority: Priority::default(),
            status: TaskStatus::default(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }
}

fn references(user_id: Option<&String>, category_id: Option<&String>) -> Vec<Reference> {
    let mut refs = Vec::new();
    if let Some(id) = user_id {
        refs.push(Reference::new("userId", ResourceKind::User, id.trim()));
    }
    if let Some(id) = category_id {
        refs.push(Reference::new("categoryId", ResourceKind::Category, id.trim()));
    }
    refs
}

impl Resource for Task {
    const KIND: ResourceKind = ResourceKind::Task;

    type Create = NewTask;
    type Update = TaskPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_payload(payload: NewTask) -> Result<Self> {
        let title = Error::required("title", payload.title)?;
        let description = Error::required("description", payload.description)?;
        let user_id = Error::required("userId", payload.user_id)?;
        let category_id = Error::required("categoryId", payload.category_id)?;

        Ok(Task::new(title, description, user_id, category_id)
            .with_priority(payload.priority.unwrap_or_default())
            .with_status(payload.status.unwrap_or_default()))
    }

    fn validate_patch(patch: &TaskPatch) -> Result<()> {
        Error::reject_blank("title", patch.title.as_ref())?;
        Error::reject_blank("description", patch.description.as_ref())?;
        Error::reject_blank("userId", patch.user_id.as_ref())?;
        Error::reject_blank("categoryId", patch.category_id.as_ref())
    }

    fn apply(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = title.trim().to_string();
        }
        if let Some(description) = patch.description {
            self.description = description.trim().to_string();
        }
        if let Some(user_id) = patch.user_id {
            self.user_id = user_id.trim().to_string();
        }
        if let Some(category_id) = patch.category_id {
            self.category_id = category_id.trim().to_string();
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        self.updated_at = Utc::now();
    }

    fn create_references(payload: &NewTask) -> Vec<Reference> {
        references(payload.user_id.as_ref(), payload.category_id.as_ref())
    }

    fn update_references(patch: &TaskPatch) -> Vec<Reference> {
        references(patch.user_id.as_ref(), patch.category_id.as_ref())
    }
}
