//! Weather channels to effect parameters.
//!
//! Every computer here is a closed-form affine map of the clamped channels.
//! No state and no randomness: the same inputs always give bit-identical output.

use serde::Serialize;

use super::weather::{NEUTRAL_TEMP01, NormalizedWeather, WeatherKind, clamp01};

mod cloudy;
mod rain;
mod snow;
mod thunder;

pub use cloudy::{CloudyFactors, compute_cloudy_factors};
pub use rain::{RainFactors, compute_rain_factors};
pub use snow::{MAX_SNOWFLAKE_AMOUNT, SnowFactors, compute_snow_factors};
pub use thunder::{ThunderFactors, compute_thunder_factors};

/// Channels accepted by the factor computers. Missing channels default to
/// 0.5 temperature and zero precipitation/wind.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FactorInputs {
    pub temp01: Option<f32>,
    pub precip01: Option<f32>,
    pub wind01: Option<f32>,
}

impl FactorInputs {
    #[must_use]
    pub fn with_temp(mut self, temp01: f32) -> Self {
        self.temp01 = Some(temp01);
        self
    }

    #[must_use]
    pub fn with_precip(mut self, precip01: f32) -> Self {
        self.precip01 = Some(precip01);
        self
    }

    #[must_use]
    pub fn with_wind(mut self, wind01: f32) -> Self {
        self.wind01 = Some(wind01);
        self
    }

    /// Defaults applied, then every channel clamped into `[0, 1]`. A NaN
    /// temperature counts as missing.
    pub(crate) fn resolve(self) -> Channels {
        Channels {
            temp: self
                .temp01
                .filter(|temp| !temp.is_nan())
                .map_or(NEUTRAL_TEMP01, clamp01),
            precip: clamp01(self.precip01.unwrap_or(0.0)),
            wind: clamp01(self.wind01.unwrap_or(0.0)),
        }
    }
}

impl From<NormalizedWeather> for FactorInputs {
    fn from(value: NormalizedWeather) -> Self {
        Self {
            temp01: Some(value.temp01),
            precip01: Some(value.precip01),
            wind01: Some(value.wind01),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Channels {
    pub temp: f32,
    pub precip: f32,
    pub wind: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum EffectFactors {
    /// Driven entirely by the background layer.
    Clear,
    Cloudy(CloudyFactors),
    Rain(RainFactors),
    Snow(SnowFactors),
    /// Storm body reuses the rain parameters; jitter and flash come on top.
    Thunder {
        rain: RainFactors,
        thunder: ThunderFactors,
    },
    Unknown,
}

impl EffectFactors {
    #[must_use]
    pub fn kind(&self) -> WeatherKind {
        match self {
            Self::Clear => WeatherKind::Clear,
            Self::Cloudy(_) => WeatherKind::Cloudy,
            Self::Rain(_) => WeatherKind::Rain,
            Self::Snow(_) => WeatherKind::Snow,
            Self::Thunder { .. } => WeatherKind::Thunder,
            Self::Unknown => WeatherKind::Unknown,
        }
    }
}

#[must_use]
pub fn compute_effect_factors(kind: WeatherKind, inputs: FactorInputs) -> EffectFactors {
    match kind {
        WeatherKind::Clear => EffectFactors::Clear,
        WeatherKind::Cloudy => EffectFactors::Cloudy(compute_cloudy_factors(inputs)),
        WeatherKind::Rain => EffectFactors::Rain(compute_rain_factors(inputs)),
        WeatherKind::Snow => EffectFactors::Snow(compute_snow_factors(inputs)),
        WeatherKind::Thunder => EffectFactors::Thunder {
            rain: compute_rain_factors(inputs),
            thunder: compute_thunder_factors(inputs),
        },
        WeatherKind::Unknown => EffectFactors::Unknown,
    }
}
