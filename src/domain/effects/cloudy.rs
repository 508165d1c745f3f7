use serde::Serialize;

use super::FactorInputs;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudyFactors {
    pub noise_scale: f32,
    pub noise_strength: f32,
    pub wobble_strength: f32,
    pub flow_speed: f32,
    pub opacity: f32,
    pub highlight_gain: f32,
    pub shadow_strength: f32,
}

#[must_use]
pub fn compute_cloudy_factors(inputs: FactorInputs) -> CloudyFactors {
    let c = inputs.resolve();
    let inv_temp = 1.0 - c.temp;

    CloudyFactors {
        // colder air spreads the cloud mass wider
        noise_scale: 0.8 + inv_temp * 0.9,
        noise_strength: 0.18 + c.precip * 0.28 + inv_temp * 0.05,
        wobble_strength: 0.05 + c.wind * 0.12,
        flow_speed: 0.25 + c.wind * 0.9,
        opacity: (0.6 + c.precip * 0.25 + inv_temp * 0.05).min(1.0),
        highlight_gain: 1.0 + inv_temp * 0.35,
        shadow_strength: 0.18 + c.precip * 0.25,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> FactorInputs {
        FactorInputs::default()
    }

    #[test]
    fn nan_temperature_reads_as_neutral() {
        let nan = compute_cloudy_factors(inputs().with_temp(f32::NAN).with_precip(0.4));
        assert_eq!(nan, compute_cloudy_factors(inputs().with_temp(0.5).with_precip(0.4)));
        assert_eq!(nan, compute_cloudy_factors(inputs().with_precip(0.4)));
    }

    #[test]
    fn precipitation_raises_noise_strength() {
        let light = compute_cloudy_factors(inputs().with_precip(0.1));
        let heavy = compute_cloudy_factors(inputs().with_precip(0.9));
        assert!(heavy.noise_strength > light.noise_strength);
        assert!(heavy.shadow_strength > light.shadow_strength);
    }

    #[test]
    fn wind_raises_flow_speed() {
        let calm = compute_cloudy_factors(inputs().with_wind(0.0));
        let windy = compute_cloudy_factors(inputs().with_wind(1.0));
        assert!(windy.flow_speed > calm.flow_speed);
        assert!(windy.wobble_strength > calm.wobble_strength);
    }

    #[test]
    fn colder_air_grows_noise_scale() {
        let warm = compute_cloudy_factors(inputs().with_temp(0.9));
        let cold = compute_cloudy_factors(inputs().with_temp(0.1));
        assert!(cold.noise_scale > warm.noise_scale);
        assert!(cold.highlight_gain > warm.highlight_gain);
    }

    #[test]
    fn outputs_stay_in_expected_ranges() {
        let f = compute_cloudy_factors(inputs().with_temp(0.5).with_precip(0.5).with_wind(0.5));
        assert!((0.5..=2.0).contains(&f.noise_scale));
        assert!(f.noise_strength > 0.0 && f.noise_strength <= 0.6);
        assert!(f.wobble_strength >= 0.0);
        assert!(f.opacity > 0.0 && f.opacity <= 1.0);
    }

    #[test]
    fn opacity_is_capped_at_full_cover() {
        let f = compute_cloudy_factors(inputs().with_temp(0.0).with_precip(1.0));
        assert!((f.opacity - 0.9).abs() < 1e-6);
        let f = compute_cloudy_factors(FactorInputs {
            temp01: Some(-5.0),
            precip01: Some(10.0),
            wind01: Some(10.0),
        });
        assert!(f.opacity <= 1.0);
    }
}
