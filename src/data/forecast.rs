use std::time::Duration;

use chrono::{NaiveDateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::weather::{HourlyForecast, HourlySample, Location};

pub const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
pub const HOURLY_FIELDS: &str = "temperature_2m,weathercode,precipitation_probability,windspeed_10m";
pub const MAX_HOURLY_ROWS: usize = 8;

#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("forecast request could not be sent")]
    Request(#[source] reqwest::Error),
    #[error("forecast request failed: {0}")]
    Status(StatusCode),
    #[error("failed to parse forecast payload")]
    Decode(#[source] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct ForecastClient {
    client: Client,
    base_url: String,
}

impl Default for ForecastClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastClient {
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(FORECAST_URL)
    }

    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub async fn fetch(&self, location: Location) -> Result<HourlyForecast, ForecastError> {
        debug!(
            lat = location.latitude,
            lon = location.longitude,
            "requesting hourly forecast"
        );
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("latitude", location.latitude.to_string()),
                ("longitude", location.longitude.to_string()),
                ("hourly", HOURLY_FIELDS.to_string()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await
            .map_err(ForecastError::Request)?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "forecast endpoint returned an error status");
            return Err(ForecastError::Status(status));
        }

        let payload: ForecastResponse = response.json().await.map_err(ForecastError::Decode)?;
        let rows = parse_hourly(&payload.hourly);
        debug!(rows = rows.len(), "forecast parsed");

        Ok(HourlyForecast {
            location,
            rows,
            fetched_at: Utc::now(),
        })
    }
}

/// Zips the column arrays into rows. The time column always bounds the
/// result; measurement columns the payload left out do not shorten it.
fn parse_hourly(hourly: &HourlyBlock) -> Vec<HourlySample> {
    let len = [
        hourly.temperature_2m.len(),
        hourly.weathercode.len(),
        hourly.precipitation_probability.len(),
        hourly.windspeed_10m.len(),
    ]
    .into_iter()
    .filter(|len| *len > 0)
    .fold(hourly.time.len(), usize::min)
    .min(MAX_HOURLY_ROWS);

    (0..len)
        .map(|idx| HourlySample {
            time: hourly
                .time
                .get(idx)
                .and_then(|raw| raw.as_deref())
                .and_then(parse_datetime),
            temperature_2m: hourly.temperature_2m.get(idx).copied().flatten(),
            weathercode: hourly.weathercode.get(idx).copied().flatten(),
            precipitation_probability: hourly
                .precipitation_probability
                .get(idx)
                .copied()
                .flatten(),
            windspeed_10m: hourly.windspeed_10m.get(idx).copied().flatten(),
        })
        .collect()
}

fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M").ok()
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    hourly: HourlyBlock,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct HourlyBlock {
    time: Vec<Option<String>>,
    temperature_2m: Vec<Option<f32>>,
    weathercode: Vec<Option<i32>>,
    precipitation_probability: Vec<Option<f32>>,
    windspeed_10m: Vec<Option<f32>>,
}
