use thiserror::Error;

use crate::resource::ResourceKind;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Validation(String),

    #[error("{kind} not found")]
    NotFound { kind: ResourceKind, id: String },

    #[error("{0}")]
    Conflict(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub fn not_found(kind: ResourceKind, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub fn duplicate(kind: ResourceKind, field: &str) -> Self {
        Self::Conflict(format!("{} with this {} already exists", kind, field))
    }

    pub fn unresolved(field: &str, kind: ResourceKind) -> Self {
        Self::Validation(format!("{} does not reference an existing {}", field, kind))
    }

    pub fn still_referenced(kind: ResourceKind) -> Self {
        Self::Conflict(format!("{} is still referenced by existing tasks", kind))
    }

    /// Returns the trimmed value of a required text field.
    pub fn required(field: &str, value: Option<String>) -> Result<String> {
        match value {
            Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
            Some(_) => Err(Self::Validation(format!("{} must not be empty", field))),
            None => Err(Self::Validation(format!("{} is required", field))),
        }
    }

    /// Only checks fields that were supplied.
    pub fn reject_blank(field: &str, value: Option<&String>) -> Result<()> {
        match value {
            Some(v) if v.trim().is_empty() => {
                Err(Self::Validation(format!("{} must not be empty", field)))
            }
            _ => Ok(()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
