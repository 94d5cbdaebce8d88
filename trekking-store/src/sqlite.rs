// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite persistent storage.
use std::collections::BTreeSet;
use std::path::Path;
use std::string::FromUtf8Error;

use sqlx::migrate;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{query, query_as};
use thiserror::Error;
use trekking_core::{Group, GroupError};

use crate::record::{GroupRecord, RecordError};
use crate::{GroupStore, StoreError};

/// Run any pending database migrations from inside the application.
async fn run_pending_migrations(pool: &sqlx::SqlitePool) -> Result<(), SqliteError> {
    migrate!().run(pool).await?;
    Ok(())
}

/// Builds a [`SqliteStore`].
///
/// Without a database file the store lives in memory. Every connection of the pool then opens
/// its own database, use a single connection in that case.
pub struct SqliteStoreBuilder {
    options: SqliteConnectOptions,
    max_connections: u32,
}

impl Default for SqliteStoreBuilder {
    fn default() -> Self {
        Self {
            options: SqliteConnectOptions::new().in_memory(true),
            max_connections: 16,
        }
    }
}

impl SqliteStoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(any(test, feature = "test_utils"))]
    pub fn random_memory_database(mut self) -> Self {
        // Every temporary database gets a different, random name to keep tests isolated from
        // each other.
        //
        // See related issue: https://github.com/launchbadge/sqlx/issues/2510
        self.options = SqliteConnectOptions::new()
            .filename(format!("dbmem{}", rand::random::<u32>()))
            .in_memory(true)
            .shared_cache(false);
        self
    }

    /// Use the database file at the given path, it is created when missing.
    ///
    /// The path is handed to SQLite as is and never parsed as part of an URL.
    pub fn database_file(mut self, path: impl AsRef<Path>) -> Self {
        self.options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        self
    }

    pub fn max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    pub async fn build(self) -> Result<SqliteStore, SqliteError> {
        let pool: sqlx::SqlitePool = SqlitePoolOptions::new()
            .max_connections(self.max_connections)
            .connect_with(self.options)
            .await?;

        run_pending_migrations(&pool).await?;

        Ok(SqliteStore::new(pool))
    }
}

/// SQLite database with connection pool.
///
/// This struct can be cloned and used in multiple places in the application. Every cloned
/// instance re-uses the same connection pool.
///
/// Every store call runs inside its own transaction which is committed before the call returns.
/// SQLite serializes transactions with writes, so concurrent calls never observe each other's
/// partial state.
#[derive(Clone, Debug)]
pub struct SqliteStore {
    pool: sqlx::SqlitePool,
}

impl SqliteStore {
    pub(crate) fn new(pool: sqlx::SqlitePool) -> Self {
        Self { pool }
    }

    /// Shortcut building an in-memory SQLite database with a randomised name for testing purposes.
    #[cfg(any(test, feature = "test_utils"))]
    pub async fn temporary() -> Self {
        SqliteStoreBuilder::new()
            .random_memory_database()
            .max_connections(1)
            .build()
            .await
            .expect("migrations succeeded")
    }

    /// Close all connections of the pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn encode_group(group: &Group) -> Result<Vec<u8>, SqliteError> {
    GroupRecord::from(group)
        .to_bytes()
        .map_err(|err| SqliteError::Encode("group".into(), err))
}

fn decode_group(bytes: &[u8]) -> Result<Group, SqliteError> {
    let record = GroupRecord::from_bytes(bytes)
        .map_err(|err| SqliteError::Decode("group".into(), err.into()))?;
    Group::try_from(record).map_err(|err| SqliteError::Decode("group".into(), err.into()))
}

impl GroupStore for SqliteStore {
    async fn create(&self, group: &Group) -> Result<(), StoreError> {
        let value = encode_group(group)?;

        let mut tx = self.pool.begin().await?;

        // Ignore insertion when name already exists (PRIMARY KEY constraint). Checking and
        // inserting in one statement takes the write lock right away.
        let result = query(
            "
            INSERT OR IGNORE
            INTO
                trekkingen (
                    name,
                    value
                )
            VALUES
                (?, ?)
            ",
        )
        .bind(group.name().as_bytes())
        .bind(value)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(StoreError::AlreadyExists(group.name().to_string()));
        }

        tx.commit().await?;
        Ok(())
    }

    async fn fetch(&self, name: &str) -> Result<Group, StoreError> {
        let mut tx = self.pool.begin().await?;

        let row: Option<(Vec<u8>,)> = query_as(
            "
            SELECT
                value
            FROM
                trekkingen
            WHERE
                name = ?
            ",
        )
        .bind(name.as_bytes())
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await?;

        let Some((value,)) = row else {
            return Err(StoreError::NotFound(name.to_string()));
        };

        Ok(decode_group(&value)?)
    }

    async fn update(&self, group: &Group) -> Result<(), StoreError> {
        let value = encode_group(group)?;

        let mut tx = self.pool.begin().await?;

        query(
            "
            INSERT OR REPLACE
            INTO
                trekkingen (
                    name,
                    value
                )
            VALUES
                (?, ?)
            ",
        )
        .bind(group.name().as_bytes())
        .bind(value)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }

    async fn names(&self) -> Result<BTreeSet<String>, StoreError> {
        let mut tx = self.pool.begin().await?;

        let rows: Vec<(Vec<u8>,)> = query_as(
            "
            SELECT
                name
            FROM
                trekkingen
            ORDER BY
                name
            ",
        )
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        let mut names = BTreeSet::new();
        for (name,) in rows {
            let name = String::from_utf8(name)
                .map_err(|err| SqliteError::Decode("name".into(), err.into()))?;
            names.insert(name);
        }

        Ok(names)
    }

    async fn summaries(&self) -> Result<Vec<String>, StoreError> {
        let mut tx = self.pool.begin().await?;

        let rows: Vec<(Vec<u8>,)> = query_as(
            "
            SELECT
                value
            FROM
                trekkingen
            ORDER BY
                name
            ",
        )
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        let mut summaries = Vec::with_capacity(rows.len());
        for (value,) in rows {
            summaries.push(decode_group(&value)?.summary());
        }

        Ok(summaries)
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Sqlite(SqliteError::Sqlite(err))
    }
}

#[derive(Debug, Error)]
pub enum SqliteError {
    /// SQLite database and connection error.
    #[error(transparent)]
    Sqlite(#[from] sqlx::Error),

    /// SQL table schema migration error.
    #[error(transparent)]
    Migrate(#[from] sqlx::migrate::MigrateError),

    /// An error occurred while encoding bytes before storing them into the database. This is a
    /// critical error.
    #[error("failed encoding '{0}' value before storing to database: {1}")]
    Encode(String, RecordError),

    /// Invalid, corrupted data was found in the database. This is a critical error.
    #[error("could not decode corrupted '{0}' value from database: {1}")]
    Decode(String, DecodeError),
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    Utf8(#[from] FromUtf8Error),

    #[error(transparent)]
    Group(#[from] GroupError),
}
