//! Character-cell approximation of the effect shaders, so the uniform state can
//! be eyeballed in a terminal. `u`/`v` are cell centres in `[0, 1)`.

use std::sync::LazyLock;

use noise::{NoiseFn, Perlin};

use crate::animation::{EffectUniforms, FbmUniforms, Rgb, UniformState};

const DENSITY_RAMP: [char; 5] = [' ', '░', '▒', '▓', '█'];
const COOL: Rgb = Rgb::new(0.16, 0.24, 0.42);
const WARM: Rgb = Rgb::new(0.52, 0.30, 0.18);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewCell {
    pub glyph: char,
    pub color: Rgb,
}

impl PreviewCell {
    fn new(glyph: char, color: Rgb) -> Self {
        Self { glyph, color }
    }
}

#[must_use]
pub fn shade(state: &UniformState, u: f32, v: f32) -> PreviewCell {
    let background = shade_background(&state.background, u, v);
    match &state.effect {
        EffectUniforms::Clear(sphere) => shade_clear(sphere, u, v).unwrap_or(background),
        EffectUniforms::Cloudy(c) => {
            let n = fbm(
                u * c.noise_scale * 4.0 + c.time * 0.3,
                v * c.noise_scale * 3.0 + (c.time * 2.0).sin() * c.wobble_strength,
            );
            let coverage = ((n - 0.5) * (1.0 + c.noise_strength * 4.0) + 0.5) * c.opacity;
            if coverage < 0.3 {
                return background;
            }
            let shadow = 1.0 - c.shadow_strength * (1.0 - v);
            let color = c
                .palette
                .base
                .lerp(c.palette.highlight, (n * c.highlight_gain).clamp(0.0, 1.0))
                .lerp(Rgb::new(0.0, 0.0, 0.0), 1.0 - shadow);
            PreviewCell::new(ramp(coverage), color)
        }
        EffectUniforms::Rain(r) => rain_cell(
            u,
            v,
            r.time,
            r.noise_strength,
            r.ripple_mix,
            r.palette.highlight,
        )
        .unwrap_or(PreviewCell::new(
            background.glyph,
            background.color.lerp(r.palette.base, r.opacity * 0.5),
        )),
        EffectUniforms::Thunder(t) => {
            let flash = (t.time * t.jitter_freq.x * 0.01 + t.jitter_phase.x).fract()
                < t.flash_intensity * 0.08;
            if flash {
                let glyph = if hash2(cell(u, 97.0), cell(v, 89.0)) < 0.15 {
                    '╱'
                } else {
                    background.glyph
                };
                return PreviewCell::new(glyph, t.palette.highlight);
            }
            let jitter = (t.time * t.jitter_freq.y).sin() * t.jitter_scale.x * 10.0;
            rain_cell(
                u + jitter,
                v,
                t.time,
                t.noise_strength,
                t.ripple_mix,
                t.palette.highlight,
            )
            .unwrap_or(PreviewCell::new(
                background.glyph,
                background.color.lerp(t.palette.base, t.opacity * 0.6),
            ))
        }
        EffectUniforms::Snow(s) => {
            let drift = u + s.time * s.blizzard_factor * 0.2;
            let fall = v - s.time * 0.08;
            let threshold = s.snowflake_amount / 1000.0;
            if hash2(cell(drift, 64.0), cell(fall, 32.0)) < threshold {
                PreviewCell::new('*', s.palette.highlight)
            } else {
                PreviewCell::new(
                    background.glyph,
                    background.color.lerp(s.palette.base, 0.3),
                )
            }
        }
        EffectUniforms::Unknown => background,
    }
}

fn shade_background(bg: &FbmUniforms, u: f32, v: f32) -> PreviewCell {
    let n = fbm(u * 3.0 + bg.time * 0.05 * (1.0 + bg.wind), v * 3.0);
    let color = COOL
        .lerp(WARM, bg.temp)
        .lerp(Rgb::new(0.12, 0.14, 0.18), bg.precip * 0.5);
    let glyph = if n > 0.62 { '·' } else { ' ' };
    PreviewCell::new(glyph, color.lerp(Rgb::WHITE, n * 0.15))
}

fn shade_clear(sphere: &FbmUniforms, u: f32, v: f32) -> Option<PreviewCell> {
    // cells are roughly twice as tall as wide
    let dx = (u - 0.5) * 2.0;
    let dy = v - 0.45;
    let dist = (dx * dx + dy * dy).sqrt();
    if dist > 0.3 {
        return None;
    }
    let core = Rgb::new(1.0, 0.86, 0.45).lerp(Rgb::new(1.0, 0.55, 0.25), sphere.temp);
    let swirl = fbm(u * 6.0 + sphere.time * 0.2, v * 6.0);
    let glyph = if dist < 0.22 { '█' } else { '▓' };
    Some(PreviewCell::new(glyph, core.lerp(Rgb::WHITE, swirl * 0.3)))
}

fn rain_cell(
    u: f32,
    v: f32,
    time: f32,
    noise_strength: f32,
    ripple_mix: f32,
    color: Rgb,
) -> Option<PreviewCell> {
    let column = cell(u, 80.0);
    let offset = hash2(column, 7);
    let streak = (v * 2.0 - time * 1.5 + offset * 10.0).fract();
    let density = 0.08 + noise_strength * 0.25;
    if hash2(column, 13) < density * 2.0 && streak < 0.18 {
        return Some(PreviewCell::new('│', color));
    }
    if v > 0.9 && hash2(column, cell(time, 4.0)) < ripple_mix * 0.5 {
        return Some(PreviewCell::new('∘', color));
    }
    None
}

fn ramp(value: f32) -> char {
    let last = DENSITY_RAMP.len() - 1;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let idx = (value.clamp(0.0, 1.0) * last as f32).round() as usize;
    DENSITY_RAMP[idx.min(last)]
}

#[allow(clippy::cast_possible_truncation)]
fn cell(coord: f32, cells: f32) -> i32 {
    (coord * cells).floor() as i32
}

#[allow(clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn hash2(x: i32, y: i32) -> f32 {
    let mut h = (x as u32).wrapping_mul(0x27d4_eb2d) ^ (y as u32).wrapping_mul(0x1656_67b1);
    h ^= h >> 15;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    (h & 0x00ff_ffff) as f32 / 16_777_216.0
}

/// Octave layout of the preview noise.
#[derive(Debug, Clone, Copy)]
struct NoiseConfig {
    seed: u32,
    octaves: u32,
    persistence: f64,
    lacunarity: f64,
}

const PREVIEW_NOISE: NoiseConfig = NoiseConfig {
    seed: 7,
    octaves: 3,
    persistence: 0.5,
    lacunarity: 2.0,
};

static PERLIN: LazyLock<Perlin> = LazyLock::new(|| Perlin::new(PREVIEW_NOISE.seed));

/// Fractal Perlin noise remapped into `[0, 1)`.
#[allow(clippy::cast_possible_truncation)]
fn fbm(x: f32, y: f32) -> f32 {
    let config = PREVIEW_NOISE;
    let mut sum = 0.0;
    let mut norm = 0.0;
    let mut amplitude = 1.0;
    let mut frequency = 1.0;
    for _ in 0..config.octaves {
        sum += PERLIN.get([f64::from(x) * frequency, f64::from(y) * frequency]) * amplitude;
        norm += amplitude;
        amplitude *= config.persistence;
        frequency *= config.lacunarity;
    }
    let n = (sum / norm + 1.0) * 0.5;
    (n as f32).clamp(0.0, 0.999_999)
}
