//! Storage entity traits and document field paths

use std::fmt::Debug;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

/// Trait for types that can be used as storage keys
pub trait StorageKey: Clone + Debug + Send + Sync + Eq + std::hash::Hash {
    /// Returns the key as a string for storage backends that require string keys
    fn as_str(&self) -> &str;
}

/// Trait for types that can be stored as JSON documents
pub trait StorageEntity: Clone + Debug + Send + Sync + Serialize + DeserializeOwned {
    /// The key type for this entity
    type Key: StorageKey;

    /// Returns the entity's key
    fn key(&self) -> &Self::Key;

    /// String fields no two stored entities may share; backends enforce these
    /// on create and update
    fn unique_fields() -> &'static [FieldPath<'static>] {
        &[]
    }
}

/// Dotted path into a stored document, e.g. `Genre.Name`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath<'a>(&'a str);

impl<'a> FieldPath<'a> {
    pub const fn new(path: &'a str) -> Self {
        Self(path)
    }

    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// Path segments, used by backends that address nested JSON
    pub fn segments(&self) -> Vec<&'a str> {
        self.0.split('.').collect()
    }

    /// Resolve the path against a serialized document, matching string leaves only
    pub fn lookup<'v>(&self, document: &'v Value) -> Option<&'v str> {
        let mut current = document;

        for segment in self.0.split('.') {
            current = current.get(segment)?;
        }

        current.as_str()
    }
}
