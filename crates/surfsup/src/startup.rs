use crate::{
    db::{self, ClimateData, ClimateStore},
    index_handler, precipitation,
    snapshot::Snapshot,
    stations, temperature_between, temperature_since, tobs,
};
use anyhow::anyhow;
use axum::{
    body::Body,
    extract::Request,
    middleware::{self, Next},
    response::IntoResponse,
    routing::get,
    Router,
};
use hyper::{header::ACCEPT, Method};
use log::info;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub climate: Arc<dyn ClimateData>,
    pub snapshot: Arc<Snapshot>,
}

impl AppState {
    /// Computes the startup snapshot once; every request reads it afterwards.
    pub async fn new(climate: Arc<dyn ClimateData>) -> Result<Self, db::Error> {
        let snapshot = Snapshot::load(climate.as_ref()).await?;
        Ok(Self {
            climate,
            snapshot: Arc::new(snapshot),
        })
    }
}

pub async fn build_app_state(db_path: &str) -> Result<AppState, anyhow::Error> {
    let climate = Arc::new(
        ClimateStore::connect(db_path)
            .await
            .map_err(|e| anyhow!("error opening climate dataset: {}", e))?,
    );

    AppState::new(climate)
        .await
        .map_err(|e| anyhow!("error computing startup snapshot: {}", e))
}

pub fn app(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers([ACCEPT])
        .allow_origin(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/api/v1.0/precipitation", get(precipitation))
        .route("/api/v1.0/stations", get(stations))
        .route("/api/v1.0/tobs", get(tobs))
        .route("/api/v1.0/{start}", get(temperature_since))
        .route("/api/v1.0/{start}/{end}", get(temperature_between))
        .with_state(Arc::new(app_state))
        .layer(middleware::from_fn(log_request))
        .layer(cors)
}

async fn log_request(request: Request<Body>, next: Next) -> impl IntoResponse {
    let now = time::OffsetDateTime::now_utc();
    let path = request
        .uri()
        .path_and_query()
        .map(|p| p.as_str())
        .unwrap_or_default();
    info!(target: "http_request","new request, {} {}", request.method().as_str(), path);

    let response = next.run(request).await;
    let response_time = time::OffsetDateTime::now_utc() - now;
    info!(target: "http_response", "response, code: {}, time: {}", response.status().as_str(), response_time);

    response
}
