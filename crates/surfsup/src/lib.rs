pub mod dates;
pub mod db;
mod error;
pub mod responses;
pub mod routes;
mod snapshot;
mod startup;
pub mod templates;
mod utils;

pub use db::{
    ClimateData, ClimateStore, PrecipitationReading, Station, StationActivity, TemperatureReading,
    TemperatureStats,
};
pub use error::ApiError;
pub use routes::*;
pub use snapshot::Snapshot;
pub use startup::*;
pub use utils::*;
