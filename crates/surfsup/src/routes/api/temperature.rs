use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use time::Date;

use crate::{dates::parse_date, responses::TemperatureSummary, ApiError, AppState};

/// Min/avg/max temperature from `start` onwards (GET /api/v1.0/{start})
pub async fn temperature_since(
    State(state): State<Arc<AppState>>,
    Path(start): Path<String>,
) -> Result<Json<TemperatureSummary>, ApiError> {
    let start = date_param(&start)?;
    let stats = state.climate.temperature_stats(start, None).await?;
    Ok(Json(stats.into()))
}

/// Min/avg/max temperature for `start..=end` (GET /api/v1.0/{start}/{end})
///
/// A reversed range matches nothing and yields null statistics.
pub async fn temperature_between(
    State(state): State<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<TemperatureSummary>, ApiError> {
    let start = date_param(&start)?;
    let end = date_param(&end)?;
    let stats = state.climate.temperature_stats(start, Some(end)).await?;
    Ok(Json(stats.into()))
}

fn date_param(value: &str) -> Result<Date, ApiError> {
    parse_date(value).map_err(|_| ApiError::InvalidDate {
        value: value.to_string(),
    })
}
