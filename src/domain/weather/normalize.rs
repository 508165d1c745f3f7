use serde::{Deserialize, Serialize};

pub const DEFAULT_TEMP_MIN_C: f32 = -10.0;
pub const DEFAULT_TEMP_MAX_C: f32 = 40.0;
pub const DEFAULT_WIND_MAX: f32 = 30.0;

const DEGENERATE_TEMP01: f32 = 0.5;

#[must_use]
pub fn clamp01(x: f32) -> f32 {
    if x.is_nan() || x < 0.0 {
        0.0
    } else if x > 1.0 {
        1.0
    } else {
        x
    }
}

/// Maps °C onto `[0, 1]` over the default -10..40 range.
#[must_use]
pub fn normalize_temp_c(temp_c: f32) -> f32 {
    normalize_temp_c_in(temp_c, DEFAULT_TEMP_MIN_C, DEFAULT_TEMP_MAX_C)
}

/// Returns 0.5 when any argument is non-finite or the range is empty.
#[must_use]
pub fn normalize_temp_c_in(temp_c: f32, min: f32, max: f32) -> f32 {
    if !temp_c.is_finite() || !min.is_finite() || !max.is_finite() || min == max {
        return DEGENERATE_TEMP01;
    }
    clamp01((temp_c - min) / (max - min))
}

/// Input is a 0..100 percentage.
#[must_use]
pub fn normalize_precip_probability(prob: f32) -> f32 {
    if !prob.is_finite() {
        return 0.0;
    }
    clamp01(prob / 100.0)
}

#[must_use]
pub fn normalize_wind_speed(speed: f32) -> f32 {
    normalize_wind_speed_in(speed, DEFAULT_WIND_MAX)
}

#[must_use]
pub fn normalize_wind_speed_in(speed: f32, max: f32) -> f32 {
    if !speed.is_finite() || !max.is_finite() || max <= 0.0 {
        return 0.0;
    }
    clamp01(speed / max)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizationRanges {
    pub temp_min_c: f32,
    pub temp_max_c: f32,
    pub wind_max: f32,
}

impl Default for NormalizationRanges {
    fn default() -> Self {
        Self {
            temp_min_c: DEFAULT_TEMP_MIN_C,
            temp_max_c: DEFAULT_TEMP_MAX_C,
            wind_max: DEFAULT_WIND_MAX,
        }
    }
}

impl NormalizationRanges {
    #[must_use]
    pub fn temp(&self, temp_c: f32) -> f32 {
        normalize_temp_c_in(temp_c, self.temp_min_c, self.temp_max_c)
    }

    #[must_use]
    pub fn wind(&self, speed: f32) -> f32 {
        normalize_wind_speed_in(speed, self.wind_max)
    }
}
