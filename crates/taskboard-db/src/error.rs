use thiserror::Error;

use taskboard_core::ResourceKind;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Corrupt row: {0}")]
    CorruptRow(String),

    #[error("Unique constraint violated on {kind}.{field}")]
    Duplicate {
        kind: ResourceKind,
        field: &'static str,
    },

    #[error("Foreign key on {field} points at a missing {kind}")]
    Unresolved {
        field: &'static str,
        kind: ResourceKind,
    },

    #[error("{0} row is still referenced by tasks")]
    Referenced(ResourceKind),

    #[error("SQLx error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Maps a unique-index violation to [`Error::Duplicate`].
    pub fn on_unique(err: sqlx::Error, kind: ResourceKind, field: &'static str) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                Error::Duplicate { kind, field }
            }
            _ => Error::Sqlx(err),
        }
    }

    /// Maps a foreign-key violation on a task insert or update to
    /// [`Error::Unresolved`], naming the column from the constraint.
    pub fn on_task_write(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                let (field, kind) = task_reference(db_err.constraint());
                Error::Unresolved { field, kind }
            }
            _ => Error::Sqlx(err),
        }
    }

    /// Maps a foreign-key violation on delete to [`Error::Referenced`].
    pub fn on_delete(err: sqlx::Error, kind: ResourceKind) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                Error::Referenced(kind)
            }
            _ => Error::Sqlx(err),
        }
    }
}

fn task_reference(constraint: Option<&str>) -> (&'static str, ResourceKind) {
    match constraint {
        Some(name) if name.contains("category_id") => ("categoryId", ResourceKind::Category),
        _ => ("userId", ResourceKind::User),
    }
}

impl From<Error> for taskboard_core::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Duplicate { kind, field } => taskboard_core::Error::duplicate(kind, field),
            Error::Unresolved { field, kind } => taskboard_core::Error::unresolved(field, kind),
            Error::Referenced(kind) => taskboard_core::Error::still_referenced(kind),
            Error::Other(e) => taskboard_core::Error::Other(e),
            other => taskboard_core::Error::Storage(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
