use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    Category, CategoryPatch, Error, ReferenceResolver, Resource, ResourceKind, Result, Store,
    Task, TaskPatch, User, UserPatch,
};

/// Insertion-ordered in-memory collection.
pub struct MemoryCollection<R> {
    items: RwLock<Vec<R>>,
}

impl<R: Resource> MemoryCollection<R> {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
        }
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }

    pub async fn any<F>(&self, predicate: F) -> bool
    where
        F: Fn(&R) -> bool,
    {
        self.items.read().await.iter().any(predicate)
    }

    fn check_unique(items: &[R], candidate: &R) -> Result<()> {
        let (Some(field), Some(key)) = (R::UNIQUE_FIELD, candidate.unique_key()) else {
            return Ok(());
        };

        let taken = items
            .iter()
            .filter(|existing| existing.id() != candidate.id())
            .any(|existing| existing.unique_key().as_deref() == Some(key.as_str()));

        if taken {
            return Err(Error::duplicate(R::KIND, field));
        }
        Ok(())
    }
}

impl<R: Resource> Default for MemoryCollection<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: Resource> Store<R> for MemoryCollection<R> {
    async fn create(&self, entity: R) -> Result<R> {
        insert(&mut *self.items.write().await, entity)
    }

    async fn find_many(&self) -> Result<Vec<R>> {
        Ok(self.items.read().await.clone())
    }

    async fn find_unique(&self, id: &str) -> Result<Option<R>> {
        let items = self.items.read().await;
        Ok(items.iter().find(|item| item.id() == id).cloned())
    }

    async fn update(&self, id: &str, patch: R::Update) -> Result<Option<R>> {
        let mut items = self.items.write().await;
        let Some(index) = items.iter().position(|item| item.id() == id) else {
            return Ok(None);
        };

        let mut updated = items[index].clone();
        updated.apply(patch);
        replace(&mut items, index, updated).map(Some)
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        Ok(remove(&mut *self.items.write().await, id))
    }
}

fn insert<R: Resource>(items: &mut Vec<R>, entity: R) -> Result<R> {
    MemoryCollection::check_unique(items, &entity)?;
    items.push(entity.clone());
    Ok(entity)
}

fn replace<R: Resource>(items: &mut [R], index: usize, updated: R) -> Result<R> {
    MemoryCollection::check_unique(items, &updated)?;
    items[index] = updated.clone();
    Ok(updated)
}

fn remove<R: Resource>(items: &mut Vec<R>, id: &str) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != id);
    items.len() != before
}

/// In-memory stand-in for the relational store.
///
/// As a [`Store`] it enforces task references the way foreign keys would.
/// Locks are always taken users, then categories, then tasks.
#[derive(Clone, Default)]
pub struct MemoryStore {
    pub users: Arc<MemoryCollection<User>>,
    pub tasks: Arc<MemoryCollection<Task>>,
    pub categories: Arc<MemoryCollection<Category>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn check_task_references(users: &[User], categories: &[Category], task: &Task) -> Result<()> {
    if !users.iter().any(|u| u.id == task.user_id) {
        return Err(Error::unresolved("userId", ResourceKind::User));
    }
    if !categories.iter().any(|c| c.id == task.category_id) {
        return Err(Error::unresolved("categoryId", ResourceKind::Category));
    }
    Ok(())
}

#[async_trait]
impl Store<User> for MemoryStore {
    async fn create(&self, entity: User) -> Result<User> {
        self.users.create(entity).await
    }

    async fn find_many(&self) -> Result<Vec<User>> {
        self.users.find_many().await
    }

    async fn find_unique(&self, id: &str) -> Result<Option<User>> {
        self.users.find_unique(id).await
    }

    async fn update(&self, id: &str, patch: UserPatch) -> Result<Option<User>> {
        self.users.update(id, patch).await
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let mut users = self.users.items.write().await;
        let tasks = self.tasks.items.read().await;
        if tasks.iter().any(|t| t.user_id == id) {
            return Err(Error::still_referenced(ResourceKind::User));
        }
        Ok(remove(&mut users, id))
    }
}

#[async_trait]
impl Store<Category> for MemoryStore {
    async fn create(&self, entity: Category) -> Result<Category> {
        self.categories.create(entity).await
    }

    async fn find_many(&self) -> Result<Vec<Category>> {
        self.categories.find_many().await
    }

    async fn find_unique(&self, id: &str) -> Result<Option<Category>> {
        self.categories.find_unique(id).await
    }

    async fn update(&self, id: &str, patch: CategoryPatch) -> Result<Option<Category>> {
        self.categories.update(id, patch).await
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let mut categories = self.categories.items.write().await;
        let tasks = self.tasks.items.read().await;
        if tasks.iter().any(|t| t.category_id == id) {
            return Err(Error::still_referenced(ResourceKind::Category));
        }
        Ok(remove(&mut categories, id))
    }
}

#[async_trait]
impl Store<Task> for MemoryStore {
    async fn create(&self, entity: Task) -> Result<Task> {
        let users = self.users.items.read().await;
        let categories = self.categories.items.read().await;
        let mut tasks = self.tasks.items.write().await;

        check_task_references(&users, &categories, &entity)?;
        insert(&mut tasks, entity)
    }

    async fn find_many(&self) -> Result<Vec<Task>> {
        self.tasks.find_many().await
    }

    async fn find_unique(&self, id: &str) -> Result<Option<Task>> {
        self.tasks.find_unique(id).await
    }

    async fn update(&self, id: &str, patch: TaskPatch) -> Result<Option<Task>> {
        let users = self.users.items.read().await;
        let categories = self.categories.items.read().await;
        let mut tasks = self.tasks.items.write().await;

        let Some(index) = tasks.iter().position(|t| t.id == id) else {
            return Ok(None);
        };
        let mut updated = tasks[index].clone();
        updated.apply(patch);

        check_task_references(&users, &categories, &updated)?;
        replace(&mut tasks, index, updated).map(Some)
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        self.tasks.delete(id).await
    }
}

#[async_trait]
impl ReferenceResolver for MemoryStore {
    async fn exists(&self, kind: ResourceKind, id: &str) -> Result<bool> {
        let found = match kind {
            ResourceKind::User => self.users.any(|u| u.id == id).await,
            ResourceKind::Task => self.tasks.any(|t| t.id == id).await,
            ResourceKind::Category => self.categories.any(|c| c.id == id).await,
        };
        Ok(found)
    }

    async fn is_referenced(&self, kind: ResourceKind, id: &str) -> Result<bool> {
        let referenced = match kind {
            ResourceKind::User => self.tasks.any(|t| t.user_id == id).await,
            ResourceKind::Category => self.tasks.any(|t| t.category_id == id).await,
            ResourceKind::Task => false,
        };
        Ok(referenced)
    }
}
