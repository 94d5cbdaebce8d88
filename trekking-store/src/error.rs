// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

use crate::sqlite::SqliteError;

#[derive(Debug, Error)]
pub enum StoreError {
    /// A group with this name was already created.
    #[error("group '{0}' already exists")]
    AlreadyExists(String),

    #[error("group '{0}' not found")]
    NotFound(String),

    /// Critical error of the SQLite backend, for example a failed transaction or a record which
    /// could not be decoded.
    #[error(transparent)]
    Sqlite(#[from] SqliteError),
}
