//! Descriptive statistics over the daily series.
//!
//! Missing readings (`None`) are skipped rather than propagated, so a
//! series with gaps still produces an aggregate; a series with no readings
//! at all yields `None`.

use crate::daily::DailyWeather;
use serde::Serialize;

/// Mean of the present readings, `None` when there are none.
pub fn mean<I: IntoIterator<Item = Option<f64>>>(values: I) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for value in values.into_iter().flatten() {
        sum += value;
        count += 1;
    }
    if count > 0 {
        Some(sum / count as f64)
    } else {
        None
    }
}

/// Maximum of the present readings, `None` when there are none.
pub fn max<I: IntoIterator<Item = Option<f64>>>(values: I) -> Option<f64> {
    values
        .into_iter()
        .flatten()
        .fold(None, |acc, v| Some(acc.map_or(v, |a: f64| a.max(v))))
}

/// Minimum of the present readings, `None` when there are none.
pub fn min<I: IntoIterator<Item = Option<f64>>>(values: I) -> Option<f64> {
    values
        .into_iter()
        .flatten()
        .fold(None, |acc, v| Some(acc.map_or(v, |a: f64| a.min(v))))
}

/// The six aggregates displayed in the metric panels: mean of the mean
/// series, max of the max series, min of the min series, for temperature
/// and relative humidity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClimateSummary {
    pub temp_mean: Option<f64>,
    pub temp_max: Option<f64>,
    pub temp_min: Option<f64>,
    pub humidity_mean: Option<f64>,
    pub humidity_max: Option<f64>,
    pub humidity_min: Option<f64>,
}

impl ClimateSummary {
    pub fn from_daily(daily: &[DailyWeather]) -> Self {
        Self {
            temp_mean: mean(daily.iter().map(|d| d.temp_mean)),
            temp_max: max(daily.iter().map(|d| d.temp_max)),
            temp_min: min(daily.iter().map(|d| d.temp_min)),
            humidity_mean: mean(daily.iter().map(|d| d.humidity_mean)),
            humidity_max: max(daily.iter().map(|d| d.humidity_max)),
            humidity_min: min(daily.iter().map(|d| d.humidity_min)),
        }
    }
}

/// Render a temperature for a metric panel, one decimal place.
pub fn format_celsius(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}°C", v),
        None => "--".to_string(),
    }
}

/// Render a relative humidity for a metric panel, one decimal place.
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}%", v),
        None => "--".to_string(),
    }
}

/// One state's mean temperature over the window. Only used for the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstadoSummary {
    pub estado: String,
    pub temp_media: Option<f64>,
}

impl EstadoSummary {
    pub fn from_daily(estado: &str, daily: &[DailyWeather]) -> Self {
        Self {
            estado: estado.to_string(),
            temp_media: mean(daily.iter().map(|d| d.temp_mean)),
        }
    }
}
