//! Matrix handlers
//!
//! Only [`SummaryView`] and [`CatalogMetadata`] leave these handlers; the
//! full per-layer result stays inside the process.

use crate::api::rest::state::AppState;
use crate::error::{ApiError, ApiResult};
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Json,
};
use destiny_types::{CatalogMetadata, SummaryView, TraitInput};
use serde::{Deserialize, Serialize};

/// Query parameters of the catalog endpoint
#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    pub locale: Option<String>,
}

/// Catalog metadata endpoint
pub async fn get_catalog(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> ApiResult<Json<CatalogMetadata>> {
    let locale = state.resolve_locale(query.locale.as_deref())?;
    Ok(Json(state.engine.metadata(locale)))
}

/// Compute request body
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputeRequest {
    #[serde(default)]
    pub locale: Option<String>,

    #[serde(default)]
    pub traits: TraitInput,
}

/// Compute endpoint
pub async fn compute_matrix(
    State(state): State<AppState>,
    payload: Result<Json<ComputeRequest>, JsonRejection>,
) -> ApiResult<Json<SummaryView>> {
    let outcome = match payload {
        Ok(Json(request)) => compute(&state, request).await,
        Err(rejection) => Err(ApiError::from(rejection)),
    };

    match outcome {
        Ok(summary) => {
            state.stats.record_served();
            Ok(Json(summary))
        }
        Err(err) => {
            state.stats.record_rejected();
            tracing::warn!(error = %err, "compute request rejected");
            Err(err)
        }
    }
}

async fn compute(state: &AppState, request: ComputeRequest) -> ApiResult<SummaryView> {
    let locale = state.resolve_locale(request.locale.as_deref())?;
    let engine = state.engine.clone();
    let traits = request.traits;

    let result = tokio::task::spawn_blocking(move || engine.compute(&traits, locale))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "compute task failed");
            ApiError::Internal(e.to_string())
        })??;

    tracing::info!(
        locale = %locale,
        matched_cells = result.matched_cells(),
        total_score = result.total_score(),
        "matrix computed"
    );

    Ok(SummaryView::project(&result))
}
