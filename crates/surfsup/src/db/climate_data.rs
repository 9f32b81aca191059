use async_trait::async_trait;
use time::Date;

use super::{
    Error, PrecipitationReading, Station, StationActivity, TemperatureReading, TemperatureStats,
};

/// Read-only queries over the measurement and station tables.
#[async_trait]
pub trait ClimateData: Sync + Send {
    /// Latest measurement date in the dataset, `EmptyDataset` when there are no rows
    async fn most_recent_date(&self) -> Result<Date, Error>;
    /// Stations ordered by descending measurement count; tie order is unspecified
    async fn station_activity(&self) -> Result<Vec<StationActivity>, Error>;
    async fn station(&self, station_id: &str) -> Result<Option<Station>, Error>;
    async fn most_recent_date_for_station(&self, station_id: &str) -> Result<Option<Date>, Error>;
    /// Readings dated on or after `since`, ascending by date
    async fn precipitation_since(&self, since: Date) -> Result<Vec<PrecipitationReading>, Error>;
    async fn temperatures_for_station_since(
        &self,
        station_id: &str,
        since: Date,
    ) -> Result<Vec<TemperatureReading>, Error>;
    /// Min/avg/max temperature for `start <= date [<= end]`
    async fn temperature_stats(
        &self,
        start: Date,
        end: Option<Date>,
    ) -> Result<TemperatureStats, Error>;
}
