use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

mod conditions;
mod normalize;

pub use conditions::{
    WeatherKind, resolve_weather_kind, resolve_weather_kind_f64, weather_code_options,
    weather_label,
};
pub use normalize::{
    DEFAULT_TEMP_MAX_C, DEFAULT_TEMP_MIN_C, DEFAULT_WIND_MAX, NormalizationRanges, clamp01,
    normalize_precip_probability, normalize_temp_c, normalize_temp_c_in, normalize_wind_speed,
    normalize_wind_speed_in,
};

pub const NEUTRAL_TEMP01: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

impl Default for Location {
    fn default() -> Self {
        // Tokyo
        Self::new(35.6762, 139.6503)
    }
}

/// One hourly row of the upstream forecast. Every measurement may be absent.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlySample {
    pub time: Option<NaiveDateTime>,
    pub temperature_2m: Option<f32>,
    pub weathercode: Option<i32>,
    pub precipitation_probability: Option<f32>,
    pub windspeed_10m: Option<f32>,
}

/// Weather channels rescaled into `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedWeather {
    pub temp01: f32,
    pub precip01: f32,
    pub wind01: f32,
}

impl Default for NormalizedWeather {
    fn default() -> Self {
        Self {
            temp01: NEUTRAL_TEMP01,
            precip01: 0.0,
            wind01: 0.0,
        }
    }
}

impl NormalizedWeather {
    /// Builds channels from raw values, clamping each one. NaN temperature falls
    /// back to the neutral midpoint, NaN precipitation/wind to zero.
    #[must_use]
    pub fn new(temp01: f32, precip01: f32, wind01: f32) -> Self {
        Self {
            temp01: if temp01.is_nan() {
                NEUTRAL_TEMP01
            } else {
                clamp01(temp01)
            },
            precip01: clamp01(precip01),
            wind01: clamp01(wind01),
        }
    }

    #[must_use]
    pub fn from_sample(sample: &HourlySample, ranges: &NormalizationRanges) -> Self {
        Self {
            temp01: ranges.temp(sample.temperature_2m.unwrap_or(f32::NAN)),
            precip01: sample
                .precipitation_probability
                .map_or(0.0, normalize_precip_probability),
            wind01: sample
                .windspeed_10m
                .map_or(0.0, |speed| ranges.wind(speed)),
        }
    }
}

/// The sample the effects are currently driven by.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherSnapshot {
    pub channels: NormalizedWeather,
    pub weathercode: Option<i32>,
    pub kind: WeatherKind,
}

impl WeatherSnapshot {
    #[must_use]
    pub fn new(channels: NormalizedWeather, weathercode: Option<i32>) -> Self {
        Self {
            channels,
            weathercode,
            kind: resolve_weather_kind(weathercode),
        }
    }

    #[must_use]
    pub fn from_sample(sample: &HourlySample, ranges: &NormalizationRanges) -> Self {
        Self::new(
            NormalizedWeather::from_sample(sample, ranges),
            sample.weathercode,
        )
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        self.weathercode.map_or("No data", weather_label)
    }
}

impl Default for WeatherSnapshot {
    fn default() -> Self {
        Self::new(NormalizedWeather::default(), None)
    }
}

/// Forecast rows plus the moment they were fetched.
#[derive(Debug, Clone)]
pub struct HourlyForecast {
    pub location: Location,
    pub rows: Vec<HourlySample>,
    pub fetched_at: chrono::DateTime<chrono::Utc>,
}

impl HourlyForecast {
    /// Only the first row drives the visuals.
    #[must_use]
    pub fn current(&self) -> Option<&HourlySample> {
        self.rows.first()
    }

    #[must_use]
    pub fn current_snapshot(&self, ranges: &NormalizationRanges) -> Option<WeatherSnapshot> {
        self.current()
            .map(|sample| WeatherSnapshot::from_sample(sample, ranges))
    }
}
