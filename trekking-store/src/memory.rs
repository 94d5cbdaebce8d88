// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory persistence for groups.
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use trekking_core::Group;

use crate::{GroupStore, StoreError};

/// In-memory store.
///
/// This does not persist data permanently, all changes are lost when the process ends. Use this
/// only in development or test contexts.
///
/// All groups live behind one `Mutex` which every call holds for its whole duration, so calls are
/// strictly serialized. Cloned instances share the same groups.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    groups: Arc<Mutex<BTreeMap<String, Group>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Obtain exclusive access to all groups.
    ///
    /// No call panics while holding the lock, the map is always left in a consistent state. A
    /// poisoned lock is therefore safe to recover from.
    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, Group>> {
        self.groups.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl GroupStore for MemoryStore {
    async fn create(&self, group: &Group) -> Result<(), StoreError> {
        let mut groups = self.lock();
        if groups.contains_key(group.name()) {
            return Err(StoreError::AlreadyExists(group.name().to_string()));
        }
        groups.insert(group.name().to_string(), group.clone());
        Ok(())
    }

    async fn fetch(&self, name: &str) -> Result<Group, StoreError> {
        self.lock()
            .get(name)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    async fn update(&self, group: &Group) -> Result<(), StoreError> {
        self.lock().insert(group.name().to_string(), group.clone());
        Ok(())
    }

    async fn names(&self) -> Result<BTreeSet<String>, StoreError> {
        Ok(self.lock().keys().cloned().collect())
    }

    async fn summaries(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.lock().values().map(Group::summary).collect())
    }
}

#[cfg(test)]
mod tests {
    use trekking_core::Group;

    use crate::GroupStore;

    use super::MemoryStore;

    #[tokio::test]
    async fn clones_share_groups() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.create(&Group::new("family")).await.unwrap();
        assert!(other.fetch("family").await.is_ok());
    }

    #[tokio::test]
    async fn fetched_groups_are_copies() {
        let store = MemoryStore::new();
        store.create(&Group::new("family")).await.unwrap();

        let mut group = store.fetch("family").await.unwrap();
        group.add_participant("anna").unwrap();

        // Not written back yet.
        assert!(store.fetch("family").await.unwrap().participants().is_empty());

        store.update(&group).await.unwrap();
        assert_eq!(store.fetch("family").await.unwrap().participants(), ["anna"]);
    }
}
