//! Storage domain - Generic document storage abstraction

mod entity;
mod repository;

pub use entity::{FieldPath, StorageEntity, StorageKey};
pub use repository::Storage;
