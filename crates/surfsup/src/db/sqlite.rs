use async_trait::async_trait;
use log::{debug, info};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow},
    Row,
};
use std::{str::FromStr, time::Duration};
use surfsup_core::is_file;
use time::Date;

use super::{
    ClimateData, Error, PrecipitationReading, Station, StationActivity, TemperatureReading,
    TemperatureStats,
};
use crate::dates::{format_date, parse_date};

/// Climate dataset backed by a read-only SQLite file.
///
/// The schema is fixed:
/// `measurement(id, station, date, prcp, tobs)` and
/// `station(id, station, name, latitude, longitude, elevation)`.
#[derive(Clone)]
pub struct ClimateStore {
    pool: SqlitePool,
}

impl ClimateStore {
    pub async fn connect(path: &str) -> Result<Self, Error> {
        if !is_file(path) {
            return Err(Error::Unavailable(format!("no dataset file at {}", path)));
        }

        let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", path))
            .map_err(|e| Error::Unavailable(format!("invalid dataset path {}: {}", path, e)))?
            .read_only(true)
            .create_if_missing(false)
            .pragma("busy_timeout", "5000");

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(30))
            .connect_with(options)
            .await
            .map_err(|e| Error::Unavailable(format!("failed to open {}: {}", path, e)))?;

        let store = Self::from_pool(pool);
        store
            .health_check()
            .await
            .map_err(|e| Error::Unavailable(format!("{}: {}", path, e)))?;
        info!("SQLite climate dataset opened read-only at: {}", path);

        Ok(store)
    }

    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Check that both tables are reachable.
    pub async fn health_check(&self) -> Result<(), Error> {
        sqlx::query("SELECT 1 FROM measurement LIMIT 1")
            .fetch_optional(&self.pool)
            .await?;
        sqlx::query("SELECT 1 FROM station LIMIT 1")
            .fetch_optional(&self.pool)
            .await?;
        Ok(())
    }

    fn row_to_station(row: &SqliteRow) -> Station {
        Station {
            id: row.get("id"),
            station: row.get("station"),
            name: row.get("name"),
            latitude: row.get("latitude"),
            longitude: row.get("longitude"),
            elevation: row.get("elevation"),
        }
    }
}

#[async_trait]
impl ClimateData for ClimateStore {
    async fn most_recent_date(&self) -> Result<Date, Error> {
        let last: Option<String> = sqlx::query_scalar("SELECT MAX(date) FROM measurement")
            .fetch_one(&self.pool)
            .await?;

        match last {
            Some(date) => Ok(parse_date(&date)?),
            None => Err(Error::EmptyDataset("measurements")),
        }
    }

    async fn station_activity(&self) -> Result<Vec<StationActivity>, Error> {
        let rows = sqlx::query(
            "SELECT station, COUNT(station) AS station_count
             FROM measurement
             GROUP BY station
             ORDER BY station_count DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .iter()
            .map(|row| StationActivity {
                station: row.get("station"),
                count: row.get("station_count"),
            })
            .collect())
    }

    async fn station(&self, station_id: &str) -> Result<Option<Station>, Error> {
        let row = sqlx::query(
            "SELECT id, station, name,
                    CAST(latitude AS REAL) AS latitude,
                    CAST(longitude AS REAL) AS longitude,
                    CAST(elevation AS REAL) AS elevation
             FROM station WHERE station = ?",
        )
        .bind(station_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(Self::row_to_station))
    }

    async fn most_recent_date_for_station(&self, station_id: &str) -> Result<Option<Date>, Error> {
        let last: Option<String> =
            sqlx::query_scalar("SELECT MAX(date) FROM measurement WHERE station = ?")
                .bind(station_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(last.as_deref().map(parse_date).transpose()?)
    }

    async fn precipitation_since(&self, since: Date) -> Result<Vec<PrecipitationReading>, Error> {
        let rows = sqlx::query(
            "SELECT date, CAST(prcp AS REAL) AS prcp
             FROM measurement
             WHERE date >= ?
             ORDER BY date",
        )
        .bind(format_date(since))
        .fetch_all(&self.pool)
        .await?;
        debug!("precipitation since {}: {} rows", since, rows.len());

        rows.iter()
            .map(|row| -> Result<PrecipitationReading, Error> {
                let date: String = row.get("date");
                Ok(PrecipitationReading {
                    date: parse_date(&date)?,
                    prcp: row.get("prcp"),
                })
            })
            .collect()
    }

    async fn temperatures_for_station_since(
        &self,
        station_id: &str,
        since: Date,
    ) -> Result<Vec<TemperatureReading>, Error> {
        let rows = sqlx::query(
            "SELECT date, CAST(tobs AS REAL) AS tobs
             FROM measurement
             WHERE station = ? AND date >= ?",
        )
        .bind(station_id)
        .bind(format_date(since))
        .fetch_all(&self.pool)
        .await?;
        debug!(
            "temperatures for {} since {}: {} rows",
            station_id,
            since,
            rows.len()
        );

        rows.iter()
            .map(|row| -> Result<TemperatureReading, Error> {
                let date: String = row.get("date");
                Ok(TemperatureReading {
                    date: parse_date(&date)?,
                    tobs: row.get("tobs"),
                })
            })
            .collect()
    }

    async fn temperature_stats(
        &self,
        start: Date,
        end: Option<Date>,
    ) -> Result<TemperatureStats, Error> {
        let mut sql = String::from(
            "SELECT CAST(MIN(tobs) AS REAL) AS min_temp,
                    CAST(AVG(tobs) AS REAL) AS avg_temp,
                    CAST(MAX(tobs) AS REAL) AS max_temp
             FROM measurement
             WHERE date >= ?",
        );
        if end.is_some() {
            sql.push_str(" AND date <= ?");
        }

        let mut query = sqlx::query(&sql).bind(format_date(start));
        if let Some(end) = end {
            query = query.bind(format_date(end));
        }
        let row = query.fetch_one(&self.pool).await?;

        Ok(TemperatureStats {
            min: row.get("min_temp"),
            avg: row.get("avg_temp"),
            max: row.get("max_temp"),
        })
    }
}
