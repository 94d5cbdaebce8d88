// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::BTreeSet;

use trekking_core::Group;

use crate::StoreError;

/// Trait defining a store API for persisting groups, keyed by their name.
///
/// Implementations need to make every single call atomic. Calls are not grouped into larger
/// transactions, a `fetch` followed by an `update` can race with other writers.
pub trait GroupStore {
    /// Insert a new group.
    ///
    /// Fails with [`StoreError::AlreadyExists`] when a group with the same name is already
    /// stored. Checking and inserting happen atomically.
    fn create(&self, group: &Group) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Get a copy of a group.
    ///
    /// Fails with [`StoreError::NotFound`] when no group with this name exists.
    fn fetch(&self, name: &str) -> impl Future<Output = Result<Group, StoreError>> + Send;

    /// Overwrite a group, keyed by its name.
    fn update(&self, group: &Group) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Names of all stored groups.
    fn names(&self) -> impl Future<Output = Result<BTreeSet<String>, StoreError>> + Send;

    /// One-line descriptions of all stored groups, ordered by name.
    fn summaries(&self) -> impl Future<Output = Result<Vec<String>, StoreError>> + Send;
}
