//! Open-Meteo HTTP client.
//!
//! The same async client runs natively (under a tokio runtime) and in the
//! browser (reqwest's WASM backend), so the dashboard and the CLI share one
//! request path. One GET per coordinate pair, no retries, no timeout beyond
//! the library default, no caching.

use crate::daily::{DailyWeather, DAILY_VARIABLES, DATE_FORMAT};
use crate::error::MeteoError;
use crate::estado::Estado;
use crate::stats::EstadoSummary;
use crate::window::FetchWindow;
use log::info;

/// Production endpoint for daily forecast aggregates.
pub const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Timezone sent with every request, regardless of the queried coordinates.
pub const TIMEZONE: &str = "America/Sao_Paulo";

#[derive(Debug, Clone)]
pub struct MeteoClient {
    client: reqwest::Client,
    base_url: String,
}

impl Default for MeteoClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MeteoClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: FORECAST_URL.to_string(),
        }
    }

    /// Client pointed at an alternate endpoint. Used by tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch the daily aggregates for one coordinate pair over the window.
    pub async fn fetch_daily(
        &self,
        latitude: f64,
        longitude: f64,
        window: FetchWindow,
    ) -> Result<Vec<DailyWeather>, MeteoError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("daily", DAILY_VARIABLES.to_string()),
                ("start_date", window.start.format(DATE_FORMAT).to_string()),
                ("end_date", window.end.format(DATE_FORMAT).to_string()),
                ("timezone", TIMEZONE.to_string()),
            ])
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;
        DailyWeather::response_to_daily(&body)
    }

    /// Fetch the daily aggregates for one estado's reference coordinate.
    pub async fn fetch_estado(
        &self,
        estado: &Estado,
        window: FetchWindow,
    ) -> Result<Vec<DailyWeather>, MeteoError> {
        info!("Fetching daily weather for {}", estado.name);
        self.fetch_daily(estado.latitude, estado.longitude, window).await
    }

    /// The national fan-out: one request per estado, strictly sequential,
    /// each averaged into an [`EstadoSummary`] for the map. A failed request
    /// aborts the whole fan-out.
    pub async fn fetch_all_summaries(
        &self,
        estados: &[Estado],
        window: FetchWindow,
    ) -> Result<Vec<EstadoSummary>, MeteoError> {
        let mut summaries = Vec::with_capacity(estados.len());
        for estado in estados {
            let daily = self.fetch_estado(estado, window).await?;
            summaries.push(EstadoSummary::from_daily(&estado.name, &daily));
        }
        info!("Fan-out complete: {} estados summarized", summaries.len());
        Ok(summaries)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::{MeteoClient, TIMEZONE};
    use crate::daily::DAILY_VARIABLES;
    use crate::error::MeteoError;
    use crate::estado::Estado;
    use crate::window::FetchWindow;
    use chrono::NaiveDate;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const BODY: &str = r#"{"daily": {
        "time": ["2026-07-05", "2026-07-06", "2026-07-07"],
        "temperature_2m_max": [24.1, 25.3, 23.8],
        "temperature_2m_min": [14.2, 15.0, 13.9],
        "temperature_2m_mean": [15.0, 20.0, 25.0],
        "relative_humidity_2m_mean": [50.0, 60.0, 70.0],
        "relative_humidity_2m_max": [88.0, 91.0, 93.0],
        "relative_humidity_2m_min": [35.0, 38.0, 41.0]
    }}"#;

    fn window() -> FetchWindow {
        FetchWindow {
            start: NaiveDate::from_ymd_opt(2026, 7, 5).unwrap(),
            end: NaiveDate::from_ymd_opt(2026, 7, 7).unwrap(),
        }
    }

    async fn mock_forecast(server: &MockServer, template: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .and(query_param("timezone", TIMEZONE))
            .and(query_param("daily", DAILY_VARIABLES))
            .and(query_param("start_date", "2026-07-05"))
            .and(query_param("end_date", "2026-07-07"))
            .respond_with(template)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_fetch_daily_parses_response() {
        let server = MockServer::start().await;
        mock_forecast(&server, ResponseTemplate::new(200).set_body_raw(BODY, "application/json")).await;

        let client = MeteoClient::with_base_url(format!("{}/v1/forecast", server.uri()));
        let daily = client.fetch_daily(-12.5797, -41.7007, window()).await.unwrap();
        assert_eq!(daily.len(), 3);
        assert_eq!(daily[1].temp_mean, Some(20.0));
    }

    #[tokio::test]
    async fn test_fetch_daily_propagates_error_status() {
        let server = MockServer::start().await;
        mock_forecast(&server, ResponseTemplate::new(500)).await;

        let client = MeteoClient::with_base_url(format!("{}/v1/forecast", server.uri()));
        let err = client.fetch_daily(-12.5797, -41.7007, window()).await.unwrap_err();
        assert!(matches!(err, MeteoError::Http(_)));
    }

    #[tokio::test]
    async fn test_fetch_daily_rejects_non_json_body() {
        let server = MockServer::start().await;
        mock_forecast(&server, ResponseTemplate::new(200).set_body_raw("not json", "text/plain")).await;

        let client = MeteoClient::with_base_url(format!("{}/v1/forecast", server.uri()));
        let err = client.fetch_daily(-12.5797, -41.7007, window()).await.unwrap_err();
        assert!(matches!(err, MeteoError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_fan_out_is_one_request_per_estado() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(BODY, "application/json"))
            .expect(2)
            .mount(&server)
            .await;

        let estados = vec![
            Estado { name: "Bahia".to_string(), latitude: -12.5797, longitude: -41.7007 },
            Estado { name: "Ceará".to_string(), latitude: -3.7172, longitude: -38.5434 },
        ];
        let client = MeteoClient::with_base_url(format!("{}/v1/forecast", server.uri()));
        let summaries = client.fetch_all_summaries(&estados, window()).await.unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].estado, "Bahia");
        assert_eq!(summaries[0].temp_media, Some(20.0));
    }
}
