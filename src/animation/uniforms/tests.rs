use super::*;
use crate::domain::effects::{
    compute_cloudy_factors, compute_effect_factors, compute_rain_factors, compute_snow_factors,
    compute_thunder_factors,
};

const FRAME: f32 = 1.0 / 60.0;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

fn stormy() -> NormalizedWeather {
    NormalizedWeather::new(0.2, 0.9, 0.7)
}

fn targets(kind: WeatherKind, channels: NormalizedWeather) -> EffectFactors {
    compute_effect_factors(kind, channels.into())
}

#[test]
fn fbm_channels_follow_at_their_own_rates() {
    let mut fbm = FbmUniforms::new(NormalizedWeather::new(0.0, 0.0, 0.0));
    fbm.tick(FRAME, NormalizedWeather::new(1.0, 1.0, 1.0));
    assert!(approx(fbm.temp, 0.05));
    assert!(approx(fbm.precip, 0.1));
    assert!(approx(fbm.wind, 0.08));
    assert!(approx(fbm.time, FRAME));
}

#[test]
fn fbm_time_ignores_bad_deltas() {
    let mut fbm = FbmUniforms::default();
    fbm.tick(-1.0, NormalizedWeather::default());
    fbm.tick(f32::NAN, NormalizedWeather::default());
    assert_eq!(fbm.time, 0.0);
}

#[test]
fn cloudy_converges_to_factors() {
    let channels = stormy();
    let target = compute_cloudy_factors(channels.into());
    let mut u = CloudyUniforms::default();
    for _ in 0..600 {
        u.tick(FRAME, &target, channels);
    }
    assert!(approx(u.noise_scale, target.noise_scale));
    assert!(approx(u.opacity, target.opacity));
    assert!(approx(u.flow_speed, target.flow_speed));
    assert!(approx(u.shadow_strength, target.shadow_strength));
}

#[test]
fn cloudy_time_advances_with_flow_speed() {
    let channels = NormalizedWeather::new(0.5, 0.0, 1.0);
    let target = compute_cloudy_factors(channels.into());
    let mut u = CloudyUniforms::default();
    u.tick(0.5, &target, channels);
    assert!(approx(u.time, 0.5 * target.flow_speed));
}

#[test]
fn paused_frame_leaves_values_alone() {
    let channels = stormy();
    let target = compute_rain_factors(channels.into());
    let mut u = RainUniforms::default();
    u.tick(0.0, &target, channels);
    let initial = RainUniforms::default();
    assert_eq!(u.time, initial.time);
    assert_eq!(u.noise_strength, initial.noise_strength);
    assert_eq!(u.ripple_mix, initial.ripple_mix);
}

#[test]
fn rain_never_touches_shadow() {
    let channels = stormy();
    let target = compute_rain_factors(channels.into());
    let mut u = RainUniforms::default();
    for _ in 0..120 {
        u.tick(FRAME, &target, channels);
    }
    assert_eq!(u.shadow_strength, 0.25);
    assert!(u.ripple_mix > 0.2);
}

#[test]
fn snow_time_is_wall_clock() {
    let target = compute_snow_factors(stormy().into());
    let mut u = SnowUniforms::default();
    u.tick(0.25, &target);
    u.tick(0.25, &target);
    assert!(approx(u.time, 0.5));
    assert!(u.snowflake_amount <= crate::domain::effects::MAX_SNOWFLAKE_AMOUNT);
}

#[test]
fn thunder_scales_rain_targets() {
    let channels = stormy();
    let rain = compute_rain_factors(channels.into());
    let thunder = compute_thunder_factors(channels.into());
    let mut u = ThunderUniforms::default();
    // a full second saturates the follow rate
    u.tick(1.0, &rain, &thunder, channels);
    assert!(approx(u.noise_strength, rain.noise_strength * 1.1));
    assert!(approx(u.wobble_strength, rain.wobble_strength * 1.2));
    assert!(approx(u.flow_speed, rain.flow_speed * 1.4));
    assert!(approx(u.highlight_gain, rain.highlight_gain * 1.3));
    assert!(approx(u.shadow_strength, rain.highlight_gain * 0.2));
    assert!(approx(u.ripple_mix, rain.ripple_mix * 1.4));
    assert!(approx(u.flash_intensity, thunder.flash_intensity));
    assert!(approx(u.jitter_freq.x, thunder.jitter_freq.x));
    assert!(approx(u.time, rain.flow_speed * 1.2));
}

#[test]
fn for_kind_round_trips() {
    for kind in [
        WeatherKind::Clear,
        WeatherKind::Cloudy,
        WeatherKind::Rain,
        WeatherKind::Snow,
        WeatherKind::Thunder,
        WeatherKind::Unknown,
    ] {
        assert_eq!(EffectUniforms::for_kind(kind).kind(), kind);
    }
}

#[test]
fn unknown_has_nothing_to_animate() {
    let mut u = EffectUniforms::for_kind(WeatherKind::Unknown);
    u.tick(FRAME, &targets(WeatherKind::Unknown, stormy()), stormy());
    assert_eq!(u, EffectUniforms::Unknown);
    assert_eq!(u.time(), None);
    assert!(u.scalars().is_empty());
}

#[test]
fn clear_tracks_temperature_only() {
    let hot = NormalizedWeather::new(1.0, 1.0, 1.0);
    let mut u = EffectUniforms::for_kind(WeatherKind::Clear);
    u.tick(FRAME, &targets(WeatherKind::Clear, hot), hot);
    let EffectUniforms::Clear(fbm) = u else {
        panic!("expected clear uniforms");
    };
    assert!(approx(fbm.temp, 0.525));
    assert_eq!(fbm.precip, 0.0);
    assert_eq!(fbm.wind, 0.0);
    assert!(u.palette().is_none());
}

#[test]
fn dispatch_tick_updates_palette() {
    let mut u = EffectUniforms::for_kind(WeatherKind::Rain);
    u.tick(FRAME, &targets(WeatherKind::Rain, stormy()), stormy());
    assert_eq!(u.palette(), Some(EffectPalette::rain(stormy())));
    assert!(u.time().is_some_and(|t| t > 0.0));
}

#[test]
fn dispatch_tick_follows_given_targets() {
    let mut u = EffectUniforms::for_kind(WeatherKind::Cloudy);
    let target = compute_cloudy_factors(stormy().into());
    for _ in 0..600 {
        u.tick(FRAME, &EffectFactors::Cloudy(target), stormy());
    }
    let EffectUniforms::Cloudy(cloudy) = u else {
        panic!("expected cloudy uniforms");
    };
    assert!(approx(cloudy.noise_scale, target.noise_scale));
    assert!(approx(cloudy.opacity, target.opacity));
}

#[test]
fn mismatched_targets_leave_state_alone() {
    let mut u = EffectUniforms::for_kind(WeatherKind::Snow);
    u.tick(FRAME, &targets(WeatherKind::Rain, stormy()), stormy());
    assert_eq!(u, EffectUniforms::for_kind(WeatherKind::Snow));
}

#[test]
fn scalars_list_every_thunder_uniform() {
    let u = EffectUniforms::for_kind(WeatherKind::Thunder);
    let scalars = u.scalars();
    assert_eq!(scalars.len(), 16);
    assert_eq!(scalars[0], ("uTime", 0.0));
    assert!(scalars.contains(&("uFlashIntensity", 0.4)));
}
