//! JSON shapes returned by the `/api/v1.0` routes.
//!
//! Key names are part of the public contract and include spaces.

use serde::Serialize;
use time::Date;

use crate::db::{PrecipitationReading, StationActivity, TemperatureReading, TemperatureStats};

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PrecipitationRecord {
    #[serde(rename = "Date", with = "iso_date")]
    pub date: Date,
    #[serde(rename = "Precipitation")]
    pub precipitation: Option<f64>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct StationRecord {
    #[serde(rename = "Station")]
    pub station: String,
    #[serde(rename = "Count")]
    pub count: i64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TemperatureRecord {
    #[serde(rename = "Date", with = "iso_date")]
    pub date: Date,
    #[serde(rename = "Temperature")]
    pub temperature: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TemperatureSummary {
    #[serde(rename = "Min Temperature")]
    pub min: Option<f64>,
    #[serde(rename = "Average Temperature")]
    pub avg: Option<f64>,
    #[serde(rename = "Max Temperature")]
    pub max: Option<f64>,
}

impl From<PrecipitationReading> for PrecipitationRecord {
    fn from(reading: PrecipitationReading) -> Self {
        Self {
            date: reading.date,
            precipitation: reading.prcp,
        }
    }
}

impl From<&StationActivity> for StationRecord {
    fn from(activity: &StationActivity) -> Self {
        Self {
            station: activity.station.clone(),
            count: activity.count,
        }
    }
}

impl From<TemperatureReading> for TemperatureRecord {
    fn from(reading: TemperatureReading) -> Self {
        Self {
            date: reading.date,
            temperature: reading.tobs,
        }
    }
}

impl From<TemperatureStats> for TemperatureSummary {
    fn from(stats: TemperatureStats) -> Self {
        Self {
            min: stats.min,
            avg: stats.avg,
            max: stats.max,
        }
    }
}

/// Records in ascending date order; equal dates keep their query order.
pub fn precipitation_records(readings: Vec<PrecipitationReading>) -> Vec<PrecipitationRecord> {
    let mut records: Vec<PrecipitationRecord> =
        readings.into_iter().map(PrecipitationRecord::from).collect();
    records.sort_by_key(|record| record.date);
    records
}
