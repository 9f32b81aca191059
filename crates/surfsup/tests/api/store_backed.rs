use crate::helpers::{seeded_store, spawn_app};
use axum::http::StatusCode;
use serde_json::{json, Value};
use std::sync::Arc;

// USC00519281 is the most active station but its last reading (2017-08-18)
// precedes the dataset-wide latest date (2017-08-23).
const ROWS: &[(&str, &str, Option<f64>, f64)] = &[
    ("USC00519281", "2016-08-17", Some(0.1), 70.0),
    ("USC00519281", "2016-08-18", None, 71.0),
    ("USC00519281", "2016-08-24", Some(0.3), 72.0),
    ("USC00519281", "2017-02-01", Some(0.0), 66.0),
    ("USC00519281", "2017-08-18", Some(0.06), 79.0),
    ("USC00519397", "2016-08-23", Some(0.0), 75.0),
    ("USC00519397", "2016-08-22", Some(0.2), 74.0),
    ("USC00519397", "2017-08-23", Some(0.45), 81.0),
    ("USC00513117", "2010-01-01", Some(0.08), 65.0),
    ("USC00513117", "2017-08-20", None, 78.0),
];

async fn dataset_app() -> crate::helpers::TestApp {
    spawn_app(Arc::new(seeded_store(ROWS).await)).await
}

fn as_f64(value: &Value) -> f64 {
    value.as_f64().expect("expected a number")
}

#[tokio::test]
async fn precipitation_stays_inside_window_in_date_order() {
    let test_app = dataset_app().await;
    let (status, body) = test_app.get_json("/api/v1.0/precipitation").await;
    assert_eq!(status, StatusCode::OK);

    let records = body.as_array().unwrap();
    let dates: Vec<&str> = records
        .iter()
        .map(|r| r["Date"].as_str().unwrap())
        .collect();

    assert_eq!(records.len(), 6);
    assert!(dates.iter().all(|d| *d >= "2016-08-23"));
    assert!(dates.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(
        records[4],
        json!({"Date": "2017-08-20", "Precipitation": null})
    );
}

#[tokio::test]
async fn station_counts_descend_and_cover_every_row() {
    let test_app = dataset_app().await;
    let (status, body) = test_app.get_json("/api/v1.0/stations").await;
    assert_eq!(status, StatusCode::OK);

    let records = body.as_array().unwrap();
    let counts: Vec<i64> = records
        .iter()
        .map(|r| r["Count"].as_i64().unwrap())
        .collect();

    assert_eq!(records[0]["Station"], "USC00519281");
    assert!(counts.windows(2).all(|pair| pair[0] >= pair[1]));
    assert_eq!(counts.iter().sum::<i64>(), ROWS.len() as i64);
}

#[tokio::test]
async fn tobs_uses_the_stations_own_trailing_year() {
    let test_app = dataset_app().await;
    let (status, body) = test_app.get_json("/api/v1.0/tobs").await;
    assert_eq!(status, StatusCode::OK);

    let mut dates: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["Date"].as_str().unwrap())
        .collect();
    dates.sort();

    // 2016-08-18 is outside the global window but inside the station's own
    assert_eq!(
        dates,
        vec!["2016-08-18", "2016-08-24", "2017-02-01", "2017-08-18"]
    );
}

#[tokio::test]
async fn reversed_range_returns_null_stats() {
    let test_app = dataset_app().await;
    let (status, body) = test_app.get_json("/api/v1.0/2017-08-23/2016-08-23").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"Min Temperature": null, "Average Temperature": null, "Max Temperature": null})
    );
}

#[tokio::test]
async fn start_before_dataset_covers_everything() {
    let test_app = dataset_app().await;
    let (status, body) = test_app.get_json("/api/v1.0/1900-01-01").await;
    assert_eq!(status, StatusCode::OK);

    let temps: Vec<f64> = ROWS.iter().map(|row| row.3).collect();
    let avg = temps.iter().sum::<f64>() / temps.len() as f64;

    assert_eq!(as_f64(&body["Min Temperature"]), 65.0);
    assert_eq!(as_f64(&body["Max Temperature"]), 81.0);
    assert!((as_f64(&body["Average Temperature"]) - avg).abs() < 1e-9);
}

#[tokio::test]
async fn single_row_dataset_summary() {
    let store = seeded_store(&[("USC1", "2017-01-01", Some(0.5), 70.0)]).await;
    let test_app = spawn_app(Arc::new(store)).await;

    let (status, body) = test_app.get_json("/api/v1.0/2017-01-01/2017-01-01").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"Min Temperature": 70.0, "Average Temperature": 70.0, "Max Temperature": 70.0})
    );
}
