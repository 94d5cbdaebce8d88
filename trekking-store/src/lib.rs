// SPDX-License-Identifier: MIT OR Apache-2.0

//! Persistence layer for [`Group`](trekking_core::Group) values.
//!
//! All backends implement the [`GroupStore`] trait and behave identically towards callers:
//!
//! - `create` atomically checks that the name is free and inserts the group. When several
//!   callers race to create the same name exactly one of them succeeds, everybody else gets
//!   [`StoreError::AlreadyExists`].
//! - `fetch` returns an owned copy of the stored group. Changes to it are not visible to anyone
//!   else until they are written back with `update`.
//! - `update` overwrites the stored group. There is no check for concurrent modification, if two
//!   callers fetch, change and update the same group, the last write wins.
//! - `names` and `summaries` enumerate all groups in ascending name order.
//!
//! Every call is atomic on its own, there are no transactions spanning multiple calls.
//!
//! ## Store implementations
//!
//! An in-memory store is provided in form of [`MemoryStore`]. It keeps all groups behind a single
//! lock and loses everything when the process ends. The store is gated by the `memory` feature
//! flag and is enabled by default.
//!
//! A SQLite store is provided in form of [`SqliteStore`], created with a [`SqliteStoreBuilder`].
//! Every group is stored as a CBOR-encoded record in the `trekkingen` table, keyed by the raw
//! bytes of its name. Every call runs in its own database transaction.
mod error;
#[cfg(feature = "memory")]
pub mod memory;
pub mod record;
pub mod sqlite;
#[cfg(test)]
mod tests;
#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
mod traits;

pub use error::StoreError;
#[cfg(feature = "memory")]
pub use memory::MemoryStore;
pub use sqlite::{SqliteError, SqliteStore, SqliteStoreBuilder};
pub use traits::GroupStore;
