//! Object store access for uploaded icons
//!
//! Icons live in an S3-compatible bucket, namespaced by usecase,
//! organization and project.

pub mod client;
pub mod mock;

pub use client::S3ObjectStore;
pub use mock::MockObjectStore;

use crate::models::ScopeKey;
use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use thiserror::Error;

/// Failure reported by an object store.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// The store answered with a non-success status.
    #[error("client error (status {status}): {message}")]
    Client { status: u16, message: String },

    /// Anything that did not come back as a status from the store.
    #[error("{0}")]
    Unexpected(String),
}

impl StoreError {
    pub fn not_found(key: &str) -> Self {
        StoreError::Client {
            status: 404,
            message: format!("Object not found: {}", key),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::Client { status: 404, .. })
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// An object fetched from the store, with its body not yet read.
pub struct StoredObject {
    pub payload: ByteStream,
}

impl StoredObject {
    pub fn new(payload: ByteStream) -> Self {
        Self { payload }
    }

    /// Buffer the whole payload in memory.
    pub async fn read_all(self) -> StoreResult<Bytes> {
        let aggregated = self
            .payload
            .collect()
            .await
            .map_err(|e| StoreError::Unexpected(format!("Failed to read body: {}", e)))?;
        Ok(aggregated.into_bytes())
    }
}

#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn get(&self, key: &str) -> StoreResult<StoredObject>;
}

/// View of an [`ObjectStore`] restricted to one usecase and project.
pub struct ScopedStore<'a> {
    store: &'a dyn ObjectStore,
    usecase: &'a str,
    scope: ScopeKey,
}

impl<'a> ScopedStore<'a> {
    pub fn new(store: &'a dyn ObjectStore, usecase: &'a str, scope: ScopeKey) -> Self {
        Self {
            store,
            usecase,
            scope,
        }
    }

    pub async fn get(&self, id: &str) -> StoreResult<StoredObject> {
        self.store.get(&self.scope.object_key(self.usecase, id)).await
    }
}
