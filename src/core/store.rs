//! Store abstraction over the shared in-memory collections
//!
//! The chains never touch the collections directly; they go through a
//! [`Store`] handle injected via the app state. Tests get isolation by
//! constructing a fresh [`InMemoryStore`] per test.

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// An entity addressable by a string identifier
pub trait Keyed: Clone + Send + Sync + 'static {
    /// The entity's identifier
    fn key(&self) -> &str;
}

/// Repository interface for an insertion-ordered collection of entities
///
/// Implementations provide the operations the chains need: append, find,
/// in-place replace, and splice. The chains are agnostic to the underlying
/// collection.
#[async_trait]
pub trait Store<T: Keyed>: Send + Sync {
    /// All entities, in insertion order
    async fn list(&self) -> Result<Vec<T>>;

    /// Append an entity to the collection
    async fn append(&self, item: T) -> Result<T>;

    /// Find an entity by id
    async fn find(&self, id: &str) -> Result<Option<T>>;

    /// Find an entity by id along with its position in the collection
    async fn find_indexed(&self, id: &str) -> Result<Option<(usize, T)>>;

    /// Replace the entity with the given id, keeping its position
    ///
    /// Returns the replacement, or `None` when no entity has that id.
    async fn replace(&self, id: &str, item: T) -> Result<Option<T>>;

    /// Remove and return the entity at the given position
    async fn splice(&self, index: usize) -> Result<Option<T>>;
}

/// In-memory store over a process-wide ordered sequence
///
/// Uses RwLock for thread-safe access. Cloning shares the underlying
/// collection.
#[derive(Clone)]
pub struct InMemoryStore<T> {
    items: Arc<RwLock<Vec<T>>>,
}

impl<T: Keyed> InMemoryStore<T> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a store pre-seeded with the given entities
    pub fn with_items(items: Vec<T>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }
}

impl<T: Keyed> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Keyed> Store<T> for InMemoryStore<T> {
    async fn list(&self) -> Result<Vec<T>> {
        let items = self
            .items
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(items.clone())
    }

    async fn append(&self, item: T) -> Result<T> {
        let mut items = self
            .items
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        items.push(item.clone());

        Ok(item)
    }

    async fn find(&self, id: &str) -> Result<Option<T>> {
        let items = self
            .items
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(items.iter().find(|item| item.key() == id).cloned())
    }

    async fn find_indexed(&self, id: &str) -> Result<Option<(usize, T)>> {
        let items = self
            .items
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(items
            .iter()
            .position(|item| item.key() == id)
            .map(|index| (index, items[index].clone())))
    }

    async fn replace(&self, id: &str, item: T) -> Result<Option<T>> {
        let mut items = self
            .items
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        match items.iter().position(|existing| existing.key() == id) {
            Some(index) => {
                items[index] = item.clone();
                Ok(Some(item))
            }
            None => Ok(None),
        }
    }

    async fn splice(&self, index: usize) -> Result<Option<T>> {
        let mut items = self
            .items
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        if index < items.len() {
            Ok(Some(items.remove(index)))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct TestItem {
        id: String,
        label: String,
    }

    impl Keyed for TestItem {
        fn key(&self) -> &str {
            &self.id
        }
    }

    fn item(id: &str, label: &str) -> TestItem {
        TestItem {
            id: id.to_string(),
            label: label.to_string(),
        }
    }

    #[tokio::test]
    async fn test_append_and_list_preserve_insertion_order() {
        let store = InMemoryStore::new();

        store.append(item("a", "first")).await.unwrap();
        store.append(item("b", "second")).await.unwrap();
        store.append(item("c", "third")).await.unwrap();

        let items = store.list().await.unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].id, "a");
        assert_eq!(items[1].id, "b");
        assert_eq!(items[2].id, "c");
    }

    #[tokio::test]
    async fn test_find_hits_and_misses() {
        let store = InMemoryStore::new();
        store.append(item("a", "first")).await.unwrap();

        assert!(store.find("a").await.unwrap().is_some());
        assert!(store.find("zzz").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_indexed_returns_position() {
        let store = InMemoryStore::with_items(vec![item("a", "first"), item("b", "second")]);

        let (index, found) = store.find_indexed("b").await.unwrap().unwrap();
        assert_eq!(index, 1);
        assert_eq!(found.label, "second");
    }

    #[tokio::test]
    async fn test_replace_keeps_position() {
        let store = InMemoryStore::with_items(vec![item("a", "first"), item("b", "second")]);

        let replaced = store.replace("a", item("a", "updated")).await.unwrap();
        assert!(replaced.is_some());

        let items = store.list().await.unwrap();
        assert_eq!(items[0].label, "updated");
        assert_eq!(items[1].label, "second");
    }

    #[tokio::test]
    async fn test_replace_unknown_id_is_none() {
        let store = InMemoryStore::<TestItem>::new();
        let replaced = store.replace("zzz", item("zzz", "ghost")).await.unwrap();
        assert!(replaced.is_none());
    }

    #[tokio::test]
    async fn test_splice_removes_at_index() {
        let store = InMemoryStore::with_items(vec![item("a", "first"), item("b", "second")]);

        let removed = store.splice(0).await.unwrap().unwrap();
        assert_eq!(removed.id, "a");

        let items = store.list().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "b");
    }

    #[tokio::test]
    async fn test_splice_out_of_bounds_is_none() {
        let store = InMemoryStore::<TestItem>::new();
        assert!(store.splice(5).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_clone_shares_the_collection() {
        let store = InMemoryStore::new();
        let other = store.clone();

        store.append(item("a", "first")).await.unwrap();

        assert_eq!(other.list().await.unwrap().len(), 1);
    }
}
