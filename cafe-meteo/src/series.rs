//! Flat `{series, date, value}` points consumed by the D3 chart layer.
//!
//! Each time-series chart draws one line per series label; a point carries
//! the label so the chart can group rows without a separate schema. Days
//! with a missing reading are skipped.

use crate::daily::DailyWeather;
use serde::Serialize;

/// Line labels, as shown in the chart legends.
pub const SERIES_MEAN: &str = "Média";
pub const SERIES_MAX: &str = "Máxima";
pub const SERIES_MIN: &str = "Mínima";

/// A single data point on a multi-line time-series chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SeriesPoint {
    pub series: String,
    /// ISO date, the chart x-axis key
    pub date: String,
    pub value: f64,
}

fn collect_series<'a>(
    daily: &'a [DailyWeather],
    label: &str,
    extract: fn(&DailyWeather) -> Option<f64>,
) -> impl Iterator<Item = SeriesPoint> + 'a {
    let label = label.to_string();
    daily.iter().filter_map(move |day| {
        extract(day).map(|value| SeriesPoint {
            series: label.clone(),
            date: day.date.to_string(),
            value,
        })
    })
}

/// The three temperature lines (mean, max, min) for the selected state.
pub fn temperature_series(daily: &[DailyWeather]) -> Vec<SeriesPoint> {
    collect_series(daily, SERIES_MEAN, |d| d.temp_mean)
        .chain(collect_series(daily, SERIES_MAX, |d| d.temp_max))
        .chain(collect_series(daily, SERIES_MIN, |d| d.temp_min))
        .collect()
}

/// The three relative-humidity lines (mean, max, min).
pub fn humidity_series(daily: &[DailyWeather]) -> Vec<SeriesPoint> {
    collect_series(daily, SERIES_MEAN, |d| d.humidity_mean)
        .chain(collect_series(daily, SERIES_MAX, |d| d.humidity_max))
        .chain(collect_series(daily, SERIES_MIN, |d| d.humidity_min))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{humidity_series, temperature_series, SERIES_MAX, SERIES_MEAN};
    use crate::daily::DailyWeather;
    use chrono::NaiveDate;

    fn sample() -> Vec<DailyWeather> {
        vec![
            DailyWeather {
                date: NaiveDate::from_ymd_opt(2026, 7, 5).unwrap(),
                temp_mean: Some(20.0),
                temp_max: Some(24.0),
                temp_min: Some(16.0),
                humidity_mean: Some(50.0),
                humidity_max: Some(80.0),
                humidity_min: Some(30.0),
            },
            DailyWeather {
                date: NaiveDate::from_ymd_opt(2026, 7, 6).unwrap(),
                temp_mean: None,
                temp_max: Some(25.0),
                temp_min: Some(15.0),
                humidity_mean: Some(60.0),
                humidity_max: None,
                humidity_min: Some(35.0),
            },
        ]
    }

    #[test]
    fn test_temperature_series_groups_by_label() {
        let points = temperature_series(&sample());
        // temp_mean has one gap, so 1 + 2 + 2 points.
        assert_eq!(points.len(), 5);
        assert_eq!(points.iter().filter(|p| p.series == SERIES_MEAN).count(), 1);
        assert_eq!(points.iter().filter(|p| p.series == SERIES_MAX).count(), 2);
        assert_eq!(points[0].date, "2026-07-05");
        assert_eq!(points[0].value, 20.0);
    }

    #[test]
    fn test_humidity_series_skips_missing_readings() {
        let points = humidity_series(&sample());
        assert_eq!(points.len(), 5);
        assert!(!points
            .iter()
            .any(|p| p.series == SERIES_MAX && p.date == "2026-07-06"));
    }

    #[test]
    fn test_points_serialize_for_d3() {
        let json = serde_json::to_string(&temperature_series(&sample())).unwrap();
        assert!(json.contains(r#""series":"Média""#));
        assert!(json.contains(r#""date":"2026-07-05""#));
    }
}
