//! Application wiring: object store, router and listener.

use crate::api::{router, AppState};
use crate::models::Config;
use crate::store::{ObjectStore, S3ObjectStore};
use crate::Result;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

/// Serves stored icons over HTTP.
pub struct App {
    store: Arc<dyn ObjectStore>,
    usecase: String,
    bind_addr: SocketAddr,
}

impl App {
    /// Build an app around an already constructed store.
    ///
    /// Integration tests use this to inject a mock store.
    pub fn with_store(store: Arc<dyn ObjectStore>, usecase: String, bind_addr: SocketAddr) -> Self {
        Self {
            store,
            usecase,
            bind_addr,
        }
    }

    /// Construct an app backed by the S3 store described in `config`.
    pub async fn new(config: Config) -> Self {
        info!(
            endpoint = %config.objectstore_endpoint,
            bucket = %config.objectstore_bucket,
            usecase = %config.usecase,
            "Configuring object store"
        );

        let store = S3ObjectStore::from_config(&config).await;

        Self::with_store(Arc::new(store), config.usecase, config.bind_addr)
    }

    pub fn router(&self) -> Router {
        router(AppState::new(self.store.clone(), self.usecase.clone()))
    }

    /// Bind the listener and serve until the process is stopped.
    pub async fn serve(self) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(self.bind_addr).await?;
        info!(address = %listener.local_addr()?, "Starting app icon server");

        axum::serve(listener, self.router()).await?;
        Ok(())
    }
}
