use async_trait::async_trait;

use crate::{Resource, ResourceKind, Result};

/// Persistence collaborator for one entity collection, keyed by id.
///
/// Implementations own consistency of the collection, including uniqueness
/// of [`Resource::unique_key`], which they report as `Error::Conflict`.
/// Stores backing tasks also reject dangling task references
/// (`Error::Validation`) and deletes of still-referenced rows
/// (`Error::Conflict`) atomically with the write.
#[async_trait]
pub trait Store<R: Resource>: Send + Sync {
    async fn create(&self, entity: R) -> Result<R>;

    /// All entities in storage order.
    async fn find_many(&self) -> Result<Vec<R>>;

    async fn find_unique(&self, id: &str) -> Result<Option<R>>;

    /// Merges `patch` into the entity; `None` when no entity has that id.
    async fn update(&self, id: &str, patch: R::Update) -> Result<Option<R>>;

    /// Returns whether an entity was removed.
    async fn delete(&self, id: &str) -> Result<bool>;
}

/// Cross-collection lookups used to keep task references valid.
#[async_trait]
pub trait ReferenceResolver: Send + Sync {
    async fn exists(&self, kind: ResourceKind, id: &str) -> Result<bool>;

    /// Whether any task points at the given user or category.
    async fn is_referenced(&self, kind: ResourceKind, id: &str) -> Result<bool>;
}
