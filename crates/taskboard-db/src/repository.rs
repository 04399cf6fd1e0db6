use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, Pool, Postgres};

use crate::{
    models::{CategoryRecord, TaskRecord, UserRecord},
    Error, Result,
};
use taskboard_core::{
    normalize_name, Category, CategoryPatch, ReferenceResolver, Resource, ResourceKind, Store,
    Task, TaskPatch, User, UserPatch,
};

#[derive(Clone)]
pub struct Database {
    pool: Pool<Postgres>,
}

impl Database {
    /// Create new database connection
    pub async fn new(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .map_err(|e| Error::Connection(e.to_string()))?;

        Ok(Self { pool })
    }

    /// Initialize database schema
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id VARCHAR(255) PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                email_key TEXT NOT NULL UNIQUE,
                created_at TIMESTAMPTZ NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS categories (
                id VARCHAR(255) PRIMARY KEY,
                name TEXT NOT NULL,
                name_key TEXT NOT NULL UNIQUE,
                created_at TIMESTAMPTZ NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS tasks (
                id VARCHAR(255) PRIMARY KEY,
                title TEXT NOT NULL,
                description TEXT NOT NULL,
                user_id VARCHAR(255) NOT NULL,
                category_id VARCHAR(255) NOT NULL,
                priority VARCHAR(50) NOT NULL,
                status VARCHAR(50) NOT NULL,
                created_at TIMESTAMPTZ NOT NULL,
                updated_at TIMESTAMPTZ NOT NULL,
                CONSTRAINT tasks_user_id_fkey
                    FOREIGN KEY (user_id) REFERENCES users(id),
                CONSTRAINT tasks_category_id_fkey
                    FOREIGN KEY (category_id) REFERENCES categories(id)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        // Create indexes
        sqlx::query("CREATE INDEX IF NOT EXISTS idx_tasks_user_id ON tasks(user_id)")
            .execute(&self.pool)
            .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_tasks_category_id ON tasks(category_id)")
            .execute(&self.pool)
            .await?;

        tracing::info!("Database schema ready");
        Ok(())
    }

    /// Remove every row, children first.
    pub async fn reset(&self) -> Result<()> {
        sqlx::query("DELETE FROM tasks").execute(&self.pool).await?;
        sqlx::query("DELETE FROM categories").execute(&self.pool).await?;
        sqlx::query("DELETE FROM users").execute(&self.pool).await?;
        Ok(())
    }

    async fn delete_by_id(&self, kind: ResourceKind, table: &str, id: &str) -> Result<bool> {
        let result = sqlx::query(&format!("DELETE FROM {} WHERE id = $1", table))
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| Error::on_delete(e, kind))?;

        Ok(result.rows_affected() > 0)
    }

    async fn exists_in(&self, table: &str, column: &str, id: &str) -> Result<bool> {
        let found: bool = sqlx::query_scalar(&format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE {} = $1)",
            table, column
        ))
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(found)
    }
}

// ============================================================================
// User Operations
// ============================================================================

#[async_trait]
impl Store<User> for Database {
    async fn create(&self, user: User) -> taskboard_core::Result<User> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (id, name, email, email_key, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(user.email_key())
        .bind(user.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| Error::on_unique(e, User::KIND, "email"))?;

        Ok(record.into())
    }

    async fn find_many(&self) -> taskboard_core::Result<Vec<User>> {
        let records = sqlx::query_as::<_, UserRecord>(
            "SELECT * FROM users ORDER BY created_at, id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(Error::from)?;

        Ok(records.into_iter().map(User::from).collect())
    }

    async fn find_unique(&self, id: &str) -> taskboard_core::Result<Option<User>> {
        let record = sqlx::query_as::<_, UserRecord>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(Error::from)?;

        Ok(record.map(User::from))
    }

    async fn update(&self, id: &str, patch: UserPatch) -> taskboard_core::Result<Option<User>> {
        let name = patch.name.map(|n| n.trim().to_string());
        let email = patch.email.map(|e| e.trim().to_string());
        let email_key = email.as_deref().map(normalize_name);

        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            UPDATE users SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                email_key = COALESCE($4, email_key)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(email)
        .bind(email_key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| Error::on_unique(e, User::KIND, "email"))?;

        Ok(record.map(User::from))
    }

    async fn delete(&self, id: &str) -> taskboard_core::Result<bool> {
        Ok(self.delete_by_id(ResourceKind::User, "users", id).await?)
    }
}

// ============================================================================
// Category Operations
// ============================================================================

#[async_trait]
impl Store<Category> for Database {
    async fn create(&self, category: Category) -> taskboard_core::Result<Category> {
        let record = sqlx::query_as::<_, CategoryRecord>(
            r#"
            INSERT INTO categories (id, name, name_key, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&category.id)
        .bind(&category.name)
        .bind(category.name_key())
        .bind(category.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| Error::on_unique(e, Category::KIND, "name"))?;

        Ok(record.into())
    }

    async fn find_many(&self) -> taskboard_core::Result<Vec<Category>> {
        let records = sqlx::query_as::<_, CategoryRecord>(
            "SELECT * FROM categories ORDER BY created_at, id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(Error::from)?;

        Ok(records.into_iter().map(Category::from).collect())
    }

    async fn find_unique(&self, id: &str) -> taskboard_core::Result<Option<Category>> {
        let record =
            sqlx::query_as::<_, CategoryRecord>("SELECT * FROM categories WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(Error::from)?;

        Ok(record.map(Category::from))
    }

    async fn update(
        &self,
        id: &str,
        patch: CategoryPatch,
    ) -> taskboard_core::Result<Option<Category>> {
        let name = patch.name.map(|n| n.trim().to_string());
        let name_key = name.as_deref().map(normalize_name);

        let record = sqlx::query_as::<_, CategoryRecord>(
            r#"
            UPDATE categories SET
                name = COALESCE($2, name),
                name_key = COALESCE($3, name_key)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(name_key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| Error::on_unique(e, Category::KIND, "name"))?;

        Ok(record.map(Category::from))
    }

    async fn delete(&self, id: &str) -> taskboard_core::Result<bool> {
        Ok(self.delete_by_id(ResourceKind::Category, "categories", id).await?)
    }
}

// ============================================================================
// Task Operations
// ============================================================================

#[async_trait]
impl Store<Task> for Database {
    async fn create(&self, task: Task) -> taskboard_core::Result<Task> {
        let record = sqlx::query_as::<_, TaskRecord>(
            r#"
            INSERT INTO tasks (
                id, title, description, user_id, category_id,
                priority, status, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(&task.id)
        .bind(&task.title)
        .bind(&task.description)
        .bind(&task.user_id)
        .bind(&task.category_id)
        .bind(task.priority.as_str())
        .bind(task.status.as_str())
        .bind(task.created_at)
        .bind(task.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(Error::on_task_write)?;

        Ok(Task::try_from(record)?)
    }

    async fn find_many(&self) -> taskboard_core::Result<Vec<Task>> {
        let records = sqlx::query_as::<_, TaskRecord>(
            "SELECT * FROM tasks ORDER BY created_at, id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(Error::from)?;

        let tasks = records
            .into_iter()
            .map(Task::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(tasks)
    }

    async fn find_unique(&self, id: &str) -> taskboard_core::Result<Option<Task>> {
        let record = sqlx::query_as::<_, TaskRecord>("SELECT * FROM tasks WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(Error::from)?;

        Ok(record.map(Task::try_from).transpose()?)
    }

    async fn update(&self, id: &str, patch: TaskPatch) -> taskboard_core::Result<Option<Task>> {
        let record = sqlx::query_as::<_, TaskRecord>(
            r#"
            UPDATE tasks SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                user_id = COALESCE($4, user_id),
                category_id = COALESCE($5, category_id),
                priority = COALESCE($6, priority),
                status = COALESCE($7, status),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(patch.title.map(|t| t.trim().to_string()))
        .bind(patch.description.map(|d| d.trim().to_string()))
        .bind(patch.user_id.map(|u| u.trim().to_string()))
        .bind(patch.category_id.map(|c| c.trim().to_string()))
        .bind(patch.priority.map(|p| p.as_str()))
        .bind(patch.status.map(|s| s.as_str()))
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::on_task_write)?;

        Ok(record.map(Task::try_from).transpose()?)
    }

    async fn delete(&self, id: &str) -> taskboard_core::Result<bool> {
        Ok(self.delete_by_id(ResourceKind::Task, "tasks", id).await?)
    }
}

#[async_trait]
impl ReferenceResolver for Database {
    async fn exists(&self, kind: ResourceKind, id: &str) -> taskboard_core::Result<bool> {
        let table = match kind {
            ResourceKind::User => "users",
            ResourceKind::Task => "tasks",
            ResourceKind::Category => "categories",
        };
        Ok(self.exists_in(table, "id", id).await?)
    }

    async fn is_referenced(&self, kind: ResourceKind, id: &str) -> taskboard_core::Result<bool> {
        let column = match kind {
            ResourceKind::User => "user_id",
            ResourceKind::Category => "category_id",
            ResourceKind::Task => return Ok(false),
        };
        Ok(self.exists_in("tasks", column, id).await?)
    }
}
