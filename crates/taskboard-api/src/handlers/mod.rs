pub mod health;
pub mod resource;
pub mod stats;
