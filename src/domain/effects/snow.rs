use serde::Serialize;

use super::FactorInputs;

/// Flake count ceiling for the heaviest, windiest snowfall.
pub const MAX_SNOWFLAKE_AMOUNT: f32 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnowFactors {
    pub blizzard_factor: f32,
    pub snowflake_amount: f32,
    pub base_saturation: f32,
    pub base_lightness: f32,
    pub highlight_strength: f32,
}

#[must_use]
pub fn compute_snow_factors(inputs: FactorInputs) -> SnowFactors {
    let c = inputs.resolve();
    let coldness = 1.0 - c.temp;

    SnowFactors {
        blizzard_factor: 0.05 + c.wind * 0.4 + c.precip * 0.35,
        snowflake_amount: (80.0 + c.precip * 100.0 + c.wind * 40.0).min(MAX_SNOWFLAKE_AMOUNT),
        base_saturation: 0.12 + c.precip * 0.1,
        base_lightness: 0.88 - c.precip * 0.15 - coldness * 0.05,
        highlight_strength: 0.35 + coldness * 0.35 + c.precip * 0.2,
    }
}
