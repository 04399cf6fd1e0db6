use axum::extract::FromRef;
use std::sync::Arc;

use taskboard_core::{
    Category, MemoryStore, ReferenceResolver, ResourceService, Task, User,
};
use taskboard_db::Database;

#[derive(Clone)]
pub struct ApiState {
    pub users: ResourceService<User>,
    pub tasks: ResourceService<Task>,
    pub categories: ResourceService<Category>,
    pub storage: &'static str,
}

impl ApiState {
    pub fn in_memory() -> Self {
        Self::from_memory(MemoryStore::new())
    }

    /// Serves an existing store, so callers can seed or read it directly.
    pub fn from_memory(store: MemoryStore) -> Self {
        let store = Arc::new(store);
        let refs: Arc<dyn ReferenceResolver> = store.clone();

        Self {
            users: ResourceService::<User>::new(store.clone(), refs.clone()),
            tasks: ResourceService::<Task>::new(store.clone(), refs.clone()),
            categories: ResourceService::<Category>::new(store, refs),
            storage: "memory",
        }
    }

    pub fn with_database(db: Arc<Database>) -> Self {
        let refs: Arc<dyn ReferenceResolver> = db.clone();

        Self {
            users: ResourceService::<User>::new(db.clone(), refs.clone()),
            tasks: ResourceService::<Task>::new(db.clone(), refs.clone()),
            categories: ResourceService::<Category>::new(db, refs),
            storage: "postgres",
        }
    }
}

impl FromRef<ApiState> for ResourceService<User> {
    fn from_ref(state: &ApiState) -> Self {
        state.users.clone()
    }
}

impl FromRef<ApiState> for ResourceService<Task> {
    fn from_ref(state: &ApiState) -> Self {
        state.tasks.clone()
    }
}

impl FromRef<ApiState> for ResourceService<Category> {
    fn from_ref(state: &ApiState) -> Self {
        state.categories.clone()
    }
}
