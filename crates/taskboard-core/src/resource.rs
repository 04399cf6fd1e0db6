use serde::{de::DeserializeOwned, Serialize};
use std::fmt;

use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ResourceKind {
    User,
    Task,
    Category,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::User => "User",
            ResourceKind::Task => "Task",
            ResourceKind::Category => "Category",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A payload field pointing at another entity that must exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub field: &'static str,
    pub kind: ResourceKind,
    pub id: String,
}

impl Reference {
    pub fn new(field: &'static str, kind: ResourceKind, id: impl Into<String>) -> Self {
        Self {
            field,
            kind,
            id: id.into(),
        }
    }
}

/// An entity type served through the generic CRUD contract.
///
/// Implementors describe how to build themselves from a creation payload and
/// how to merge a partial update. Everything else (lookups, not-found and
/// validation reporting, reference checks) lives in
/// [`ResourceService`](crate::ResourceService).
pub trait Resource: Clone + Serialize + Send + Sync + 'static {
    const KIND: ResourceKind;

    /// Field whose normalized value must be unique across the collection.
    const UNIQUE_FIELD: Option<&'static str> = None;

    type Create: DeserializeOwned + Send + Sync + 'static;
    type Update: DeserializeOwned + Send + Sync + 'static;

    fn id(&self) -> &str;

    /// Validates a creation payload and builds a fresh entity with a new id.
    fn from_payload(payload: Self::Create) -> Result<Self>;

    fn validate_patch(patch: &Self::Update) -> Result<()>;

    /// Merges the supplied fields; omitted fields keep their prior values.
    fn apply(&mut self, patch: Self::Update);

    fn create_references(_payload: &Self::Create) -> Vec<Reference> {
        Vec::new()
    }

    fn update_references(_patch: &Self::Update) -> Vec<Reference> {
        Vec::new()
    }

    fn unique_key(&self) -> Option<String> {
        None
    }
}
