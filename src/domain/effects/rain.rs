use serde::Serialize;

use super::FactorInputs;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RainFactors {
    pub noise_scale: f32,
    pub noise_strength: f32,
    pub wobble_strength: f32,
    pub flow_speed: f32,
    pub opacity: f32,
    pub highlight_gain: f32,
    pub ripple_mix: f32,
}

/// `noise_scale` stays in `[0.7, 1.8]`, `noise_strength` in `[0.2, 0.75]`
/// and `opacity` in `[0.55, 1.0]`.
#[must_use]
pub fn compute_rain_factors(inputs: FactorInputs) -> RainFactors {
    let c = inputs.resolve();
    let coldness = 1.0 - c.temp;

    RainFactors {
        noise_scale: 0.7 + coldness * 0.8 + c.precip * 0.3,
        noise_strength: 0.2 + c.precip * 0.45 + c.wind * 0.1,
        wobble_strength: 0.04 + c.wind * 0.15,
        flow_speed: 0.35 + c.wind * 1.1 + c.precip * 0.3,
        opacity: (0.55 + c.precip * 0.35 + coldness * 0.1).min(1.0),
        highlight_gain: 1.1 + c.precip * 0.3,
        ripple_mix: 0.1 + c.precip * 0.7,
    }
}
