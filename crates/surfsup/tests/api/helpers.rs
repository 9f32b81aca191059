use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use hyper::{header, Method};
use mockall::mock;
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use surfsup::{
    app, db::Error, AppState, ClimateData, ClimateStore, PrecipitationReading, Station,
    StationActivity, TemperatureReading, TemperatureStats,
};
use time::Date;
use tower::ServiceExt;

mock! {
    pub ClimateAccess {}

    #[async_trait]
    impl ClimateData for ClimateAccess {
        async fn most_recent_date(&self) -> Result<Date, Error>;
        async fn station_activity(&self) -> Result<Vec<StationActivity>, Error>;
        async fn station(&self, station_id: &str) -> Result<Option<Station>, Error>;
        async fn most_recent_date_for_station(&self, station_id: &str) -> Result<Option<Date>, Error>;
        async fn precipitation_since(&self, since: Date) -> Result<Vec<PrecipitationReading>, Error>;
        async fn temperatures_for_station_since(
            &self,
            station_id: &str,
            since: Date,
        ) -> Result<Vec<TemperatureReading>, Error>;
        async fn temperature_stats(
            &self,
            start: Date,
            end: Option<Date>,
        ) -> Result<TemperatureStats, Error>;
    }
}

pub struct TestApp {
    pub app: Router,
    pub state: AppState,
}

pub async fn spawn_app(climate: Arc<dyn ClimateData>) -> TestApp {
    let state = AppState::new(climate)
        .await
        .expect("Failed to build app state");

    TestApp {
        app: app(state.clone()),
        state,
    }
}

impl TestApp {
    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .header(header::ACCEPT, "application/json")
            .body(Body::empty())
            .unwrap();

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request.");

        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    pub async fn get_json(&self, uri: &str) -> (StatusCode, Value) {
        let (status, body) = self.get(uri).await;
        let json = serde_json::from_str(&body)
            .unwrap_or_else(|e| panic!("response to {} was not json ({}): {}", uri, e, body));
        (status, json)
    }
}

/// Mock with the startup expectations already satisfied.
pub fn startup_mock(most_recent: Date, ranking: Vec<StationActivity>) -> MockClimateAccess {
    let mut climate = MockClimateAccess::new();
    climate
        .expect_most_recent_date()
        .times(1)
        .returning(move || Ok(most_recent));
    climate
        .expect_station_activity()
        .times(1)
        .returning(move || Ok(ranking.clone()));
    climate.expect_station().returning(|_| Ok(None));
    climate
}

pub fn activity(station: &str, count: i64) -> StationActivity {
    StationActivity {
        station: station.to_string(),
        count,
    }
}

const SCHEMA: &str = "
    CREATE TABLE measurement (
        id INTEGER PRIMARY KEY,
        station TEXT,
        date TEXT,
        prcp FLOAT,
        tobs FLOAT
    );
    CREATE TABLE station (
        id INTEGER PRIMARY KEY,
        station TEXT,
        name TEXT,
        latitude FLOAT,
        longitude FLOAT,
        elevation FLOAT
    );";

/// In-memory dataset seeded with `(station, date, prcp, tobs)` rows.
pub async fn seeded_store(rows: &[(&str, &str, Option<f64>, f64)]) -> ClimateStore {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory sqlite");
    sqlx::raw_sql(SCHEMA).execute(&pool).await.unwrap();

    for (station, date, prcp, tobs) in rows {
        sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?, ?, ?, ?)")
            .bind(*station)
            .bind(*date)
            .bind(*prcp)
            .bind(*tobs)
            .execute(&pool)
            .await
            .unwrap();
    }

    ClimateStore::from_pool(pool)
}
