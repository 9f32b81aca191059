use std::sync::Arc;

use axum::{extract::State, Json};

use crate::{
    responses::{precipitation_records, PrecipitationRecord},
    ApiError, AppState,
};

/// Precipitation over the trailing year of the dataset (GET /api/v1.0/precipitation)
pub async fn precipitation(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PrecipitationRecord>>, ApiError> {
    let readings = state
        .climate
        .precipitation_since(state.snapshot.one_year_window)
        .await?;

    Ok(Json(precipitation_records(readings)))
}
