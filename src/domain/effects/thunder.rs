use glam::Vec2;
use serde::Serialize;

use super::FactorInputs;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThunderFactors {
    pub jitter_freq: Vec2,
    pub jitter_phase: Vec2,
    pub jitter_scale: Vec2,
    pub flash_intensity: f32,
}

/// Temperature does not affect the storm jitter.
#[must_use]
pub fn compute_thunder_factors(inputs: FactorInputs) -> ThunderFactors {
    let c = inputs.resolve();

    ThunderFactors {
        jitter_freq: Vec2::new(70.0 + c.wind * 40.0, 90.0 + c.wind * 45.0),
        jitter_phase: Vec2::new(1.2 + c.precip * 1.8, 0.8 + c.wind * 1.2),
        jitter_scale: Vec2::new(
            0.004 + c.precip * 0.01 + c.wind * 0.004,
            0.004 + c.precip * 0.008 + c.wind * 0.006,
        ),
        flash_intensity: 0.3 + c.precip * 0.4 + c.wind * 0.3,
    }
}
