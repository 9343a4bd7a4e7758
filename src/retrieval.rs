//! Icon retrieval from the object store.
//!
//! Every store failure is caught here and folded into a [`RetrievalOutcome`];
//! nothing propagates past this boundary.

use crate::mime::{detect_content_type, ContentType};
use crate::models::ScopeKey;
use crate::store::{ObjectStore, ScopedStore, StoreError};
use bytes::Bytes;
use tracing::{error, info, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum RetrievalOutcome {
    Success {
        data: Bytes,
        content_type: ContentType,
    },
    NotFound,
    StoreError(String),
    UnexpectedError(String),
}

/// Fetch an icon for `scope` and classify the result.
///
/// No retries are attempted: a single failed fetch is a single failed outcome.
pub async fn retrieve_icon(
    store: &dyn ObjectStore,
    usecase: &str,
    scope: ScopeKey,
    icon_id: &str,
) -> RetrievalOutcome {
    let ScopeKey {
        organization_id,
        project_id,
    } = scope;

    info!(
        organization_id,
        project_id, icon_id, "Retrieving app icon from object store"
    );

    let client = ScopedStore::new(store, usecase, scope);
    let fetched = match client.get(icon_id).await {
        Ok(object) => object.read_all().await,
        Err(e) => Err(e),
    };

    match fetched {
        Ok(data) => {
            let content_type = detect_content_type(&data);
            info!(
                organization_id,
                project_id,
                icon_id,
                size_bytes = data.len(),
                content_type = %content_type,
                "Retrieved app icon from object store"
            );
            RetrievalOutcome::Success { data, content_type }
        }
        Err(e) if e.is_not_found() => {
            warn!(
                organization_id,
                project_id, icon_id, "App icon not found in object store"
            );
            RetrievalOutcome::NotFound
        }
        Err(StoreError::Client { status, message }) => {
            warn!(
                organization_id,
                project_id,
                icon_id,
                status,
                error = %message,
                "Failed to retrieve app icon from object store"
            );
            RetrievalOutcome::StoreError(format!("status {}: {}", status, message))
        }
        Err(StoreError::Unexpected(message)) => {
            error!(
                organization_id,
                project_id,
                icon_id,
                error = %message,
                "Unexpected error retrieving app icon"
            );
            RetrievalOutcome::UnexpectedError(message)
        }
    }
}
