//! Open-Meteo daily forecast response model.
//!
//! The API returns the `daily` block as parallel arrays: one `time` array
//! and one array per requested variable, all of equal length. This module
//! zips them row-wise into [`DailyWeather`] records, preserving the
//! chronological order the API returns.

use crate::error::MeteoError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used by Open-Meteo for daily timestamps and query parameters.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The six daily aggregate variables requested from the API, in query order.
pub const DAILY_VARIABLES: &str = "temperature_2m_max,temperature_2m_min,temperature_2m_mean,\
relative_humidity_2m_mean,relative_humidity_2m_max,relative_humidity_2m_min";

/// One day of aggregated weather observations.
///
/// A reading the API reports as `null` becomes `None` and is skipped by the
/// statistics, the same way the source dataset marks gaps rather than
/// fabricating values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyWeather {
    pub date: NaiveDate,
    /// Mean temperature at 2m, °C
    pub temp_mean: Option<f64>,
    /// Maximum temperature at 2m, °C
    pub temp_max: Option<f64>,
    /// Minimum temperature at 2m, °C
    pub temp_min: Option<f64>,
    /// Mean relative humidity at 2m, %
    pub humidity_mean: Option<f64>,
    /// Maximum relative humidity at 2m, %
    pub humidity_max: Option<f64>,
    /// Minimum relative humidity at 2m, %
    pub humidity_min: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    daily: DailySeries,
}

#[derive(Debug, Deserialize)]
struct DailySeries {
    time: Vec<String>,
    temperature_2m_max: Vec<Option<f64>>,
    temperature_2m_min: Vec<Option<f64>>,
    temperature_2m_mean: Vec<Option<f64>>,
    relative_humidity_2m_mean: Vec<Option<f64>>,
    relative_humidity_2m_max: Vec<Option<f64>>,
    relative_humidity_2m_min: Vec<Option<f64>>,
}

impl DailyWeather {
    /// Parse an Open-Meteo forecast response body into daily records.
    pub fn response_to_daily(body: &str) -> Result<Vec<DailyWeather>, MeteoError> {
        let response: ForecastResponse = serde_json::from_str(body)
            .map_err(|e| MeteoError::MalformedResponse(e.to_string()))?;
        response.daily.into_records()
    }
}

impl DailySeries {
    fn into_records(self) -> Result<Vec<DailyWeather>, MeteoError> {
        let n = self.time.len();
        let metric_lengths = [
            self.temperature_2m_max.len(),
            self.temperature_2m_min.len(),
            self.temperature_2m_mean.len(),
            self.relative_humidity_2m_mean.len(),
            self.relative_humidity_2m_max.len(),
            self.relative_humidity_2m_min.len(),
        ];
        if metric_lengths.iter().any(|&len| len != n) {
            return Err(MeteoError::MalformedResponse(format!(
                "daily arrays have unequal lengths: time={} metrics={:?}",
                n, metric_lengths
            )));
        }

        let mut records = Vec::with_capacity(n);
        for (i, time) in self.time.iter().enumerate() {
            let date = NaiveDate::parse_from_str(time, DATE_FORMAT)
                .map_err(|_| MeteoError::InvalidDate(time.clone()))?;
            records.push(DailyWeather {
                date,
                temp_mean: self.temperature_2m_mean[i],
                temp_max: self.temperature_2m_max[i],
                temp_min: self.temperature_2m_min[i],
                humidity_mean: self.relative_humidity_2m_mean[i],
                humidity_max: self.relative_humidity_2m_max[i],
                humidity_min: self.relative_humidity_2m_min[i],
            });
        }
        Ok(records)
    }
}
