pub mod category;
pub mod error;
pub mod memory;
pub mod normalize;
pub mod resource;
pub mod service;
pub mod store;
pub mod task;
pub mod user;

// Re-exports
pub use category::{Category, CategoryPatch, NewCategory};
pub use error::{Error, Result};
pub use memory::{MemoryCollection, MemoryStore};
pub use normalize::normalize_name;
pub use resource::{Reference, Resource, ResourceKind};
pub use service::ResourceService;
pub use store::{ReferenceResolver, Store};
pub use task::{NewTask, Priority, Task, TaskPatch, TaskStatus};
pub use user::{NewUser, User, UserPatch};
