use compute::production::ProductionTable;
use tracing::debug;

use crate::helpers::errors::upload_not_found;
use crate::schemas::{ApiError, AppState, CachedData};

/// Looks up an uploaded table. `None` means the generated table should be used.
pub async fn resolve_upload(
    state: &AppState,
    upload_id: Option<&str>,
) -> Result<Option<ProductionTable>, ApiError> {
    let Some(upload_id) = upload_id else {
        return Ok(None);
    };

    match state.cache.get(upload_id).await {
        Some(CachedData::Upload(table)) => {
            debug!("Using uploaded table '{}' with {} rows", upload_id, table.height());
            Ok(Some(table))
        }
        None => Err(upload_not_found(upload_id)),
    }
}

/// Stores an uploaded table and returns its id
pub async fn store_upload(state: &AppState, table: ProductionTable) -> String {
    let upload_id = state.next_upload_id();
    state
        .cache
        .insert(upload_id.clone(), CachedData::Upload(table))
        .await;
    debug!("Stored upload '{}'", upload_id);
    upload_id
}
