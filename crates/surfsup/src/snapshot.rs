use log::{info, warn};
use time::Date;

use crate::{
    dates::trailing_year_start,
    db::{ClimateData, Error, StationActivity},
};

/// Values derived once at startup and shared read-only by every request.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub most_recent_date: Date,
    pub one_year_window: Date,
    pub station_activity: Vec<StationActivity>,
    pub most_active_station: String,
}

impl Snapshot {
    pub async fn load(climate: &dyn ClimateData) -> Result<Self, Error> {
        let most_recent_date = climate.most_recent_date().await?;
        let one_year_window = trailing_year_start(most_recent_date);

        let station_activity = climate.station_activity().await?;
        let most_active_station = station_activity
            .first()
            .map(|activity| activity.station.clone())
            .ok_or(Error::EmptyDataset("stations"))?;

        info!("  Most recent date: {}", most_recent_date);
        info!("  One year window starts: {}", one_year_window);
        match climate.station(&most_active_station).await? {
            Some(station) => info!(
                "  Most active station: {} ({})",
                most_active_station, station.name
            ),
            None => warn!(
                "  Most active station: {} (not listed in station table)",
                most_active_station
            ),
        }

        Ok(Self {
            most_recent_date,
            one_year_window,
            station_activity,
            most_active_station,
        })
    }
}
