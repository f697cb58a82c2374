//! Brazilian state boundaries and the name-keyed temperature join.
//!
//! The boundary file is a GeoJSON `FeatureCollection` with one feature per
//! federative unit, identified by its `name` property. It is fetched once
//! per app lifetime and reused read-only across renders. The join writes a
//! `temp_media` property into each feature for the choropleth; a state
//! with no matching summary gets `null` (an uncolored polygon), never an
//! error.

use cafe_meteo::stats::EstadoSummary;
use geojson::{FeatureCollection, GeoJson};
use serde_json::Value;
use thiserror::Error;

/// Source of the state boundary polygons.
pub const GEOJSON_URL: &str = "https://raw.githubusercontent.com/codeforamerica/click_that_hood/master/public/data/brazil-states.geojson";

/// Feature property holding the state name; the join key. The match is
/// exact, including case and diacritics.
pub const NAME_PROPERTY: &str = "name";

/// Feature property the join writes the mean temperature into.
pub const TEMP_PROPERTY: &str = "temp_media";

#[derive(Debug, Error)]
pub enum GeoError {
    /// Transport failure or non-success status fetching the boundary file.
    #[cfg(feature = "api")]
    #[error("boundary request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("boundary file is not valid GeoJSON: {0}")]
    Parse(#[from] geojson::Error),

    #[error("boundary file is not a FeatureCollection")]
    NotFeatureCollection,
}

/// The parsed state boundary collection.
#[derive(Debug, Clone)]
pub struct GeoEstados {
    collection: FeatureCollection,
}

impl GeoEstados {
    pub fn from_geojson_str(raw: &str) -> Result<Self, GeoError> {
        match raw.parse::<GeoJson>()? {
            GeoJson::FeatureCollection(collection) => Ok(Self { collection }),
            _ => Err(GeoError::NotFeatureCollection),
        }
    }

    pub fn len(&self) -> usize {
        self.collection.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.features.is_empty()
    }

    /// The `name` property of every feature, in file order. Features
    /// without a name yield an empty string.
    pub fn feature_names(&self) -> Vec<String> {
        self.collection
            .features
            .iter()
            .map(|feature| {
                feature
                    .property(NAME_PROPERTY)
                    .and_then(Value::as_str)
                    .unwrap_or("")
                    .to_string()
            })
            .collect()
    }

    /// Left join of the fan-out summaries onto the boundary features.
    ///
    /// Every feature gets a `temp_media` property: the matching state's
    /// mean temperature, or `null` when no summary matches its name (or
    /// the summary itself has no readings). Returns how many features
    /// received a non-null value.
    pub fn attach_mean_temperatures(&mut self, summaries: &[EstadoSummary]) -> usize {
        let mut matched = 0usize;
        for feature in &mut self.collection.features {
            let name = feature
                .property(NAME_PROPERTY)
                .and_then(Value::as_str)
                .map(str::to_string);
            let temp = name.as_deref().and_then(|name| {
                summaries
                    .iter()
                    .find(|summary| summary.estado == name)
                    .and_then(|summary| summary.temp_media)
            });
            match temp {
                Some(value) => {
                    feature.set_property(TEMP_PROPERTY, value);
                    matched += 1;
                }
                None => feature.set_property(TEMP_PROPERTY, Value::Null),
            }
        }
        log::info!(
            "Joined {} of {} boundary features to fan-out summaries",
            matched,
            self.collection.features.len()
        );
        matched
    }

    /// Serialize the (possibly joined) collection for the D3 layer.
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.collection).unwrap_or_default()
    }
}

/// Fetch and parse the boundary file. Callers memoize the result for the
/// process lifetime; there is no invalidation short of a restart.
#[cfg(feature = "api")]
pub async fn fetch_geo(client: &reqwest::Client) -> Result<GeoEstados, GeoError> {
    let body = client
        .get(GEOJSON_URL)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    GeoEstados::from_geojson_str(&body)
}

#[cfg(test)]
mod tests {
    use super::{GeoEstados, GeoError};
    use cafe_meteo::stats::EstadoSummary;

    const TWO_STATES: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {"name": "Bahia"},
                "geometry": {"type": "Polygon", "coordinates": [[[-41.0, -12.0], [-42.0, -12.0], [-42.0, -13.0], [-41.0, -12.0]]]}
            },
            {
                "type": "Feature",
                "properties": {"name": "Ceará"},
                "geometry": {"type": "Polygon", "coordinates": [[[-38.0, -3.0], [-39.0, -3.0], [-39.0, -4.0], [-38.0, -3.0]]]}
            }
        ]
    }"#;

    #[test]
    fn test_parse_feature_collection() {
        let geo = GeoEstados::from_geojson_str(TWO_STATES).unwrap();
        assert_eq!(geo.len(), 2);
        assert_eq!(geo.feature_names(), vec!["Bahia", "Ceará"]);
    }

    #[test]
    fn test_non_collection_rejected() {
        let point = r#"{"type": "Point", "coordinates": [0.0, 0.0]}"#;
        let err = GeoEstados::from_geojson_str(point).unwrap_err();
        assert!(matches!(err, GeoError::NotFeatureCollection));
    }

    #[test]
    fn test_join_attaches_temperature_by_name() {
        let mut geo = GeoEstados::from_geojson_str(TWO_STATES).unwrap();
        let summaries = vec![
            EstadoSummary { estado: "Bahia".to_string(), temp_media: Some(21.5) },
            EstadoSummary { estado: "Ceará".to_string(), temp_media: Some(27.0) },
        ];
        assert_eq!(geo.attach_mean_temperatures(&summaries), 2);
        let json = geo.to_json();
        assert!(json.contains(r#""temp_media":21.5"#));
        assert!(json.contains(r#""temp_media":27.0"#));
    }

    #[test]
    fn test_unmatched_name_degrades_to_null() {
        let mut geo = GeoEstados::from_geojson_str(TWO_STATES).unwrap();
        // "Ceara" without the accent must not match "Ceará".
        let summaries = vec![
            EstadoSummary { estado: "Bahia".to_string(), temp_media: Some(21.5) },
            EstadoSummary { estado: "Ceara".to_string(), temp_media: Some(27.0) },
        ];
        assert_eq!(geo.attach_mean_temperatures(&summaries), 1);
        assert!(geo.to_json().contains(r#""temp_media":null"#));
    }

    #[test]
    fn test_summary_without_readings_is_null_too() {
        let mut geo = GeoEstados::from_geojson_str(TWO_STATES).unwrap();
        let summaries = vec![
            EstadoSummary { estado: "Bahia".to_string(), temp_media: None },
        ];
        assert_eq!(geo.attach_mean_temperatures(&summaries), 0);
    }
}
