use std::sync::Arc;

use crate::{Error, Reference, ReferenceResolver, Resource, Result, Store};

/// CRUD contract shared by every resource.
///
/// Validation and not-found reporting happen here, before the store is
/// touched, so a rejected request never mutates state.
pub struct ResourceService<R: Resource> {
    store: Arc<dyn Store<R>>,
    references: Arc<dyn ReferenceResolver>,
}

impl<R: Resource> Clone for ResourceService<R> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            references: Arc::clone(&self.references),
        }
    }
}

impl<R: Resource> ResourceService<R> {
    pub fn new(store: Arc<dyn Store<R>>, references: Arc<dyn ReferenceResolver>) -> Self {
        Self { store, references }
    }

    pub async fn create(&self, payload: R::Create) -> Result<R> {
        let refs = R::create_references(&payload);
        let entity = R::from_payload(payload)?;
        self.resolve(&refs).await?;

        let created = self.store.create(entity).await?;
        tracing::info!("Created {}: {}", R::KIND, created.id());

        Ok(created)
    }

    pub async fn list(&self) -> Result<Vec<R>> {
        let items = self.store.find_many().await?;
        tracing::debug!("Listed {} {} records", items.len(), R::KIND);
        Ok(items)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<R> {
        self.store
            .find_unique(id)
            .await?
            .ok_or_else(|| Error::not_found(R::KIND, id))
    }

    pub async fn update(&self, id: &str, patch: R::Update) -> Result<R> {
        self.get_by_id(id).await?;

        R::validate_patch(&patch)?;
        self.resolve(&R::update_references(&patch)).await?;

        let updated = self
            .store
            .update(id, patch)
            .await?
            .ok_or_else(|| Error::not_found(R::KIND, id))?;
        tracing::info!("Updated {}: {}", R::KIND, id);

        Ok(updated)
    }

    /// Removes the entity and returns the confirmation message.
    pub async fn delete(&self, id: &str) -> Result<String> {
        self.get_by_id(id).await?;

        if self.references.is_referenced(R::KIND, id).await? {
            return Err(Error::still_referenced(R::KIND));
        }

        if !self.store.delete(id).await? {
            return Err(Error::not_found(R::KIND, id));
        }
        tracing::info!("Deleted {}: {}", R::KIND, id);

        Ok(format!("{} deleted successfully", R::KIND))
    }

    async fn resolve(&self, refs: &[Reference]) -> Result<()> {
        for reference in refs {
            if !self.references.exists(reference.kind, &reference.id).await? {
                tracing::debug!(
                    "Unresolved {} reference {} = {}",
                    reference.kind,
                    reference.field,
                    reference.id
                );
                return Err(Error::unresolved(reference.field, reference.kind));
            }
        }
        Ok(())
    }
}
