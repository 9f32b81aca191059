use std::sync::Arc;

use axum::{extract::State, Json};

use crate::{responses::StationRecord, AppState};

/// Stations by descending measurement count, computed at startup (GET /api/v1.0/stations)
pub async fn stations(State(state): State<Arc<AppState>>) -> Json<Vec<StationRecord>> {
    Json(
        state
            .snapshot
            .station_activity
            .iter()
            .map(StationRecord::from)
            .collect(),
    )
}
