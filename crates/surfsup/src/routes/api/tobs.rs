use std::sync::Arc;

use axum::{extract::State, Json};
use log::debug;

use crate::{dates::trailing_year_start, responses::TemperatureRecord, ApiError, AppState};

/// Temperature observations for the most active station over its own trailing
/// year (GET /api/v1.0/tobs)
///
/// The window ends at that station's latest measurement, which may be earlier
/// than the dataset-wide most recent date.
pub async fn tobs(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TemperatureRecord>>, ApiError> {
    let station = &state.snapshot.most_active_station;
    let Some(last_date) = state.climate.most_recent_date_for_station(station).await? else {
        return Ok(Json(vec![]));
    };
    let since = trailing_year_start(last_date);
    debug!("tobs window for {}: {} to {}", station, since, last_date);

    let readings = state
        .climate
        .temperatures_for_station_since(station, since)
        .await?;

    Ok(Json(
        readings.into_iter().map(TemperatureRecord::from).collect(),
    ))
}
