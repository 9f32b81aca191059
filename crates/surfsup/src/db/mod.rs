mod climate_data;
mod sqlite;

pub use climate_data::*;
pub use sqlite::*;

use serde::Serialize;
use time::Date;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Climate dataset unavailable: {0}")]
    Unavailable(String),
    #[error("Climate dataset has no {0}")]
    EmptyDataset(&'static str),
    #[error("Failed to query sqlite: {0}")]
    Query(#[from] sqlx::Error),
    #[error("Failed to parse stored date: {0}")]
    DateParse(#[from] time::error::Parse),
}

/// Columns of the `station` table.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Station {
    pub id: i64,
    pub station: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

/// Number of measurement rows recorded for one station.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct StationActivity {
    pub station: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrecipitationReading {
    pub date: Date,
    /// Missing readings stay `None`, never zero.
    pub prcp: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureReading {
    pub date: Date,
    pub tobs: f64,
}

/// Aggregate over `tobs`; every field is `None` when no rows matched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemperatureStats {
    pub min: Option<f64>,
    pub avg: Option<f64>,
    pub max: Option<f64>,
}

#[cfg(test)]
pub(crate) use sqlite::testing;
