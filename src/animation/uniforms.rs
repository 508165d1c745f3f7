use glam::Vec2;
use serde::Serialize;

use super::{
    palette::{EffectPalette, Rgb},
    smoothing::{follow_vec2, frame_alpha, sanitize_delta, smooth_follow},
};
use crate::domain::{
    effects::{CloudyFactors, EffectFactors, RainFactors, SnowFactors, ThunderFactors},
    weather::{NormalizedWeather, WeatherKind},
};

const TEMP_ALPHA: f32 = 0.05;
const PRECIP_ALPHA: f32 = 0.1;
const WIND_ALPHA: f32 = 0.08;

const CLOUDY_RATE: f32 = 3.0;
const RAIN_RATE: f32 = 3.2;
const THUNDER_RATE: f32 = 3.5;
const SNOW_RATE: f32 = 2.5;

/// Raw channels fed to the fractal-noise layer behind every effect, and to the
/// clear-sky sphere texture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FbmUniforms {
    pub time: f32,
    pub temp: f32,
    pub precip: f32,
    pub wind: f32,
}

impl Default for FbmUniforms {
    fn default() -> Self {
        Self::new(NormalizedWeather::default())
    }
}

impl FbmUniforms {
    #[must_use]
    pub fn new(initial: NormalizedWeather) -> Self {
        Self {
            time: 0.0,
            temp: initial.temp01,
            precip: initial.precip01,
            wind: initial.wind01,
        }
    }

    /// Wind settles fastest after precipitation, temperature slowest.
    pub fn tick(&mut self, delta_secs: f32, target: NormalizedWeather) {
        self.time += sanitize_delta(delta_secs);
        self.temp = smooth_follow(self.temp, target.temp01, TEMP_ALPHA);
        self.precip = smooth_follow(self.precip, target.precip01, PRECIP_ALPHA);
        self.wind = smooth_follow(self.wind, target.wind01, WIND_ALPHA);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudyUniforms {
    pub time: f32,
    pub noise_scale: f32,
    pub noise_strength: f32,
    pub wobble_strength: f32,
    pub flow_speed: f32,
    pub opacity: f32,
    pub highlight_gain: f32,
    pub shadow_strength: f32,
    pub palette: EffectPalette,
}

impl Default for CloudyUniforms {
    fn default() -> Self {
        Self {
            time: 0.0,
            noise_scale: 1.0,
            noise_strength: 0.25,
            wobble_strength: 0.05,
            flow_speed: 0.4,
            opacity: 0.75,
            highlight_gain: 1.0,
            shadow_strength: 0.25,
            palette: EffectPalette {
                base: Rgb::from_hex(0x00cf_d7e6),
                highlight: Rgb::from_hex(0x00f4_f7ff),
            },
        }
    }
}

impl CloudyUniforms {
    pub fn tick(&mut self, delta_secs: f32, target: &CloudyFactors, channels: NormalizedWeather) {
        let alpha = frame_alpha(delta_secs, CLOUDY_RATE);
        self.time += sanitize_delta(delta_secs) * target.flow_speed;
        self.noise_scale = smooth_follow(self.noise_scale, target.noise_scale, alpha);
        self.noise_strength = smooth_follow(self.noise_strength, target.noise_strength, alpha);
        self.wobble_strength = smooth_follow(self.wobble_strength, target.wobble_strength, alpha);
        self.flow_speed = smooth_follow(self.flow_speed, target.flow_speed, alpha);
        self.opacity = smooth_follow(self.opacity, target.opacity, alpha);
        self.highlight_gain = smooth_follow(self.highlight_gain, target.highlight_gain, alpha);
        self.shadow_strength = smooth_follow(self.shadow_strength, target.shadow_strength, alpha);
        self.palette = EffectPalette::cloudy(channels);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RainUniforms {
    pub time: f32,
    pub noise_scale: f32,
    pub noise_strength: f32,
    pub wobble_strength: f32,
    pub flow_speed: f32,
    pub opacity: f32,
    pub highlight_gain: f32,
    /// Not driven by rain factors; kept at its initial value.
    pub shadow_strength: f32,
    pub ripple_mix: f32,
    pub palette: EffectPalette,
}

impl Default for RainUniforms {
    fn default() -> Self {
        Self {
            time: 0.0,
            noise_scale: 1.0,
            noise_strength: 0.25,
            wobble_strength: 0.05,
            flow_speed: 0.4,
            opacity: 0.75,
            highlight_gain: 1.1,
            shadow_strength: 0.25,
            ripple_mix: 0.2,
            palette: EffectPalette {
                base: Rgb::from_hex(0x005d_7aa5),
                highlight: Rgb::from_hex(0x00a8_c4ef),
            },
        }
    }
}

impl RainUniforms {
    pub fn tick(&mut self, delta_secs: f32, target: &RainFactors, channels: NormalizedWeather) {
        let alpha = frame_alpha(delta_secs, RAIN_RATE);
        self.time += sanitize_delta(delta_secs) * target.flow_speed;
        self.noise_scale = smooth_follow(self.noise_scale, target.noise_scale, alpha);
        self.noise_strength = smooth_follow(self.noise_strength, target.noise_strength, alpha);
        self.wobble_strength = smooth_follow(self.wobble_strength, target.wobble_strength, alpha);
        self.flow_speed = smooth_follow(self.flow_speed, target.flow_speed, alpha);
        self.opacity = smooth_follow(self.opacity, target.opacity, alpha);
        self.highlight_gain = smooth_follow(self.highlight_gain, target.highlight_gain, alpha);
        self.ripple_mix = smooth_follow(self.ripple_mix, target.ripple_mix, alpha);
        self.palette = EffectPalette::rain(channels);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnowUniforms {
    pub time: f32,
    pub blizzard_factor: f32,
    pub snowflake_amount: f32,
    pub palette: EffectPalette,
}

impl Default for SnowUniforms {
    fn default() -> Self {
        Self {
            time: 0.0,
            blizzard_factor: 0.2,
            snowflake_amount: 120.0,
            palette: EffectPalette {
                base: Rgb::from_hex(0x006f_747d),
                highlight: Rgb::WHITE,
            },
        }
    }
}

impl SnowUniforms {
    /// Snow phase runs at wall-clock speed; wind shows up through the blizzard factor.
    pub fn tick(&mut self, delta_secs: f32, target: &SnowFactors) {
        let alpha = frame_alpha(delta_secs, SNOW_RATE);
        self.time += sanitize_delta(delta_secs);
        self.blizzard_factor = smooth_follow(self.blizzard_factor, target.blizzard_factor, alpha);
        self.snowflake_amount =
            smooth_follow(self.snowflake_amount, target.snowflake_amount, alpha);
        self.palette = EffectPalette::snow(target);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThunderUniforms {
    pub time: f32,
    pub noise_scale: f32,
    pub noise_strength: f32,
    pub wobble_strength: f32,
    pub flow_speed: f32,
    pub opacity: f32,
    pub highlight_gain: f32,
    pub shadow_strength: f32,
    pub ripple_mix: f32,
    pub jitter_freq: Vec2,
    pub jitter_phase: Vec2,
    pub jitter_scale: Vec2,
    pub flash_intensity: f32,
    pub palette: EffectPalette,
}

impl Default for ThunderUniforms {
    fn default() -> Self {
        Self {
            time: 0.0,
            noise_scale: 1.0,
            noise_strength: 0.35,
            wobble_strength: 0.08,
            flow_speed: 0.6,
            opacity: 0.85,
            highlight_gain: 1.2,
            shadow_strength: 0.2,
            ripple_mix: 0.4,
            jitter_freq: Vec2::new(90.0, 110.0),
            jitter_phase: Vec2::new(1.0, 1.0),
            jitter_scale: Vec2::new(0.006, 0.006),
            flash_intensity: 0.4,
            palette: EffectPalette {
                base: Rgb::from_hex(0x004b_5d8d),
                highlight: Rgb::from_hex(0x00f6_f1d6),
            },
        }
    }
}

impl ThunderUniforms {
    /// The storm body is a gained-up rain effect.
    pub fn tick(
        &mut self,
        delta_secs: f32,
        rain: &RainFactors,
        thunder: &ThunderFactors,
        channels: NormalizedWeather,
    ) {
        let alpha = frame_alpha(delta_secs, THUNDER_RATE);
        self.time += sanitize_delta(delta_secs) * rain.flow_speed * 1.2;
        self.noise_scale = smooth_follow(self.noise_scale, rain.noise_scale, alpha);
        self.noise_strength = smooth_follow(self.noise_strength, rain.noise_strength * 1.1, alpha);
        self.wobble_strength =
            smooth_follow(self.wobble_strength, rain.wobble_strength * 1.2, alpha);
        self.flow_speed = smooth_follow(self.flow_speed, rain.flow_speed * 1.4, alpha);
        self.opacity = smooth_follow(self.opacity, rain.opacity, alpha);
        self.highlight_gain = smooth_follow(self.highlight_gain, rain.highlight_gain * 1.3, alpha);
        self.shadow_strength =
            smooth_follow(self.shadow_strength, rain.highlight_gain * 0.2, alpha);
        self.ripple_mix = smooth_follow(self.ripple_mix, rain.ripple_mix * 1.4, alpha);

        self.jitter_freq = follow_vec2(self.jitter_freq, thunder.jitter_freq, alpha);
        self.jitter_phase = follow_vec2(self.jitter_phase, thunder.jitter_phase, alpha);
        self.jitter_scale = follow_vec2(self.jitter_scale, thunder.jitter_scale, alpha);
        self.flash_intensity = smooth_follow(self.flash_intensity, thunder.flash_intensity, alpha);
        self.palette = EffectPalette::thunder(channels);
    }
}

/// Uniform state of the foreground object, one variant per weather kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum EffectUniforms {
    Clear(FbmUniforms),
    Cloudy(CloudyUniforms),
    Rain(RainUniforms),
    Snow(SnowUniforms),
    Thunder(ThunderUniforms),
    Unknown,
}

impl EffectUniforms {
    /// Fresh state for a newly mounted object of `kind`.
    #[must_use]
    pub fn for_kind(kind: WeatherKind) -> Self {
        match kind {
            WeatherKind::Clear => Self::Clear(FbmUniforms::default()),
            WeatherKind::Cloudy => Self::Cloudy(CloudyUniforms::default()),
            WeatherKind::Rain => Self::Rain(RainUniforms::default()),
            WeatherKind::Snow => Self::Snow(SnowUniforms::default()),
            WeatherKind::Thunder => Self::Thunder(ThunderUniforms::default()),
            WeatherKind::Unknown => Self::Unknown,
        }
    }

    #[must_use]
    pub fn kind(&self) -> WeatherKind {
        match self {
            Self::Clear(_) => WeatherKind::Clear,
            Self::Cloudy(_) => WeatherKind::Cloudy,
            Self::Rain(_) => WeatherKind::Rain,
            Self::Snow(_) => WeatherKind::Snow,
            Self::Thunder(_) => WeatherKind::Thunder,
            Self::Unknown => WeatherKind::Unknown,
        }
    }

    /// Advances this variant toward `targets`. Colours follow the raw
    /// `channels`. Targets computed for another kind leave the state alone.
    pub fn tick(
        &mut self,
        delta_secs: f32,
        targets: &EffectFactors,
        channels: NormalizedWeather,
    ) {
        match (self, targets) {
            // the sphere texture only tracks temperature
            (Self::Clear(u), EffectFactors::Clear) => {
                u.time += sanitize_delta(delta_secs);
                u.temp = smooth_follow(u.temp, channels.temp01, TEMP_ALPHA);
            }
            (Self::Cloudy(u), EffectFactors::Cloudy(target)) => {
                u.tick(delta_secs, target, channels);
            }
            (Self::Rain(u), EffectFactors::Rain(target)) => u.tick(delta_secs, target, channels),
            (Self::Snow(u), EffectFactors::Snow(target)) => u.tick(delta_secs, target),
            (Self::Thunder(u), EffectFactors::Thunder { rain, thunder }) => {
                u.tick(delta_secs, rain, thunder, channels);
            }
            _ => {}
        }
    }

    #[must_use]
    pub fn time(&self) -> Option<f32> {
        match self {
            Self::Clear(u) => Some(u.time),
            Self::Cloudy(u) => Some(u.time),
            Self::Rain(u) => Some(u.time),
            Self::Snow(u) => Some(u.time),
            Self::Thunder(u) => Some(u.time),
            Self::Unknown => None,
        }
    }

    #[must_use]
    pub fn palette(&self) -> Option<EffectPalette> {
        match self {
            Self::Cloudy(u) => Some(u.palette),
            Self::Rain(u) => Some(u.palette),
            Self::Snow(u) => Some(u.palette),
            Self::Thunder(u) => Some(u.palette),
            Self::Clear(_) | Self::Unknown => None,
        }
    }

    /// Named scalar uniforms in shader order, for display.
    #[must_use]
    pub fn scalars(&self) -> Vec<(&'static str, f32)> {
        match self {
            Self::Clear(u) => vec![("uTime", u.time), ("uTemp", u.temp)],
            Self::Cloudy(u) => vec![
                ("uTime", u.time),
                ("uNoiseScale", u.noise_scale),
                ("uNoiseStrength", u.noise_strength),
                ("uWobbleStrength", u.wobble_strength),
                ("uFlowSpeed", u.flow_speed),
                ("uOpacity", u.opacity),
                ("uHighlightGain", u.highlight_gain),
                ("uShadowStrength", u.shadow_strength),
            ],
            Self::Rain(u) => vec![
                ("uTime", u.time),
                ("uNoiseScale", u.noise_scale),
                ("uNoiseStrength", u.noise_strength),
                ("uWobbleStrength", u.wobble_strength),
                ("uFlowSpeed", u.flow_speed),
                ("uOpacity", u.opacity),
                ("uHighlightGain", u.highlight_gain),
                ("uShadowStrength", u.shadow_strength),
                ("uRippleMix", u.ripple_mix),
            ],
            Self::Snow(u) => vec![
                ("uTime", u.time),
                ("uBlizzardFactor", u.blizzard_factor),
                ("uSnowflakeAmount", u.snowflake_amount),
            ],
            Self::Thunder(u) => vec![
                ("uTime", u.time),
                ("uNoiseScale", u.noise_scale),
                ("uNoiseStrength", u.noise_strength),
                ("uWobbleStrength", u.wobble_strength),
                ("uFlowSpeed", u.flow_speed),
                ("uOpacity", u.opacity),
                ("uHighlightGain", u.highlight_gain),
                ("uShadowStrength", u.shadow_strength),
                ("uRippleMix", u.ripple_mix),
                ("uJitterFreq.x", u.jitter_freq.x),
                ("uJitterFreq.y", u.jitter_freq.y),
                ("uJitterPhase.x", u.jitter_phase.x),
                ("uJitterPhase.y", u.jitter_phase.y),
                ("uJitterScale.x", u.jitter_scale.x),
                ("uJitterScale.y", u.jitter_scale.y),
                ("uFlashIntensity", u.flash_intensity),
            ],
            Self::Unknown => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests;
