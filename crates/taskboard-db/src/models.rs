use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::{Error, Result};
use taskboard_core::{Category, Priority, Task, TaskStatus, User};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub email_key: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CategoryRecord {
    pub id: String,
    pub name: String,
    pub name_key: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TaskRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub user_id: String,
    pub category_id: String,
    pub priority: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        User {
            id: record.id,
            name: record.name,
            email: record.email,
            created_at: record.created_at,
        }
    }
}

impl From<CategoryRecord> for Category {
    fn from(record: CategoryRecord) -> Self {
        Category {
            id: record.id,
            name: record.name,
            created_at: record.created_at,
        }
    }
}

impl TryFrom<TaskRecord> for Task {
    type Error = Error;

    fn try_from(record: TaskRecord) -> Result<Self> {
        let priority: Priority = record
            .priority
            .parse()
            .map_err(|e| Error::CorruptRow(format!("task {}: {}", record.id, e)))?;
        let status: TaskStatus = record
            .status
            .parse()
            .map_err(|e| Error::CorruptRow(format!("task {}: {}", record.id, e)))?;

        Ok(Task {
            id: record.id,
            title: record.title,
            description: record.description,
            user_id: record.user_id,
            category_id: record.category_id,
            priority,
            status,
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(priority: &str, status: &str) -> TaskRecord {
        let now = Utc::now();
        TaskRecord {
            id: "t1".to_string(),
            title: "Tarefa".to_string(),
            description: "Desc".to_string(),
            user_id: "u1".to_string(),
            category_id: "c1".to_string(),
            priority: priority.to_string(),
            status: status.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_task_record_conversion() {
        let task = Task::try_from(record("HIGH", "IN_PROGRESS")).unwrap();
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.status, TaskStatus::InProgress);
    }

    #[test]
    fn test_task_record_with_unknown_status() {
        let err = Task::try_from(record("LOW", "ARCHIVED")).unwrap_err();
        assert!(matches!(err, Error::CorruptRow(_)));
    }

    #[test]
    fn test_user_record_drops_key() {
        let user: User = UserRecord {
            id: "u1".to_string(),
            name: "Ana".to_string(),
            email: "Ana@ex.com".to_string(),
            email_key: "ana@ex.com".to_string(),
            created_at: Utc::now(),
        }
        .into();
        assert_eq!(user.email, "Ana@ex.com");
    }
}
