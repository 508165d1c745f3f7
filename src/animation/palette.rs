use serde::Serialize;

use crate::domain::{effects::SnowFactors, weather::NormalizedWeather};

/// Linear 0..1 RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    #[must_use]
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| f32::from(((hex >> shift) & 0xff) as u8) / 255.0;
        Self::new(channel(16), channel(8), channel(0))
    }

    /// Hue wraps around, saturation and lightness are clamped.
    #[must_use]
    pub fn from_hsl(h: f32, s: f32, l: f32) -> Self {
        let h = h.rem_euclid(1.0);
        let s = s.clamp(0.0, 1.0);
        let l = l.clamp(0.0, 1.0);
        if s == 0.0 {
            return Self::new(l, l, l);
        }
        let p = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let q = 2.0 * l - p;
        Self::new(
            hue_to_channel(q, p, h + 1.0 / 3.0),
            hue_to_channel(q, p, h),
            hue_to_channel(q, p, h - 1.0 / 3.0),
        )
    }

    #[must_use]
    pub fn to_hsl(self) -> (f32, f32, f32) {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let lightness = (min + max) / 2.0;
        if min == max {
            return (0.0, 0.0, lightness);
        }
        let delta = max - min;
        let saturation = if lightness <= 0.5 {
            delta / (max + min)
        } else {
            delta / (2.0 - max - min)
        };
        let hue = if max == self.r {
            (self.g - self.b) / delta + if self.g < self.b { 6.0 } else { 0.0 }
        } else if max == self.g {
            (self.b - self.r) / delta + 2.0
        } else {
            (self.r - self.g) / delta + 4.0
        };
        (hue / 6.0, saturation, lightness)
    }

    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
        )
    }

    #[must_use]
    pub fn offset_hsl(self, dh: f32, ds: f32, dl: f32) -> Self {
        let (h, s, l) = self.to_hsl();
        Self::from_hsl(h + dh, s + ds, l + dl)
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let quantize = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        (quantize(self.r), quantize(self.g), quantize(self.b))
    }
}

fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * 6.0 * (2.0 / 3.0 - t)
    } else {
        p
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Base and highlight tint of one effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EffectPalette {
    pub base: Rgb,
    pub highlight: Rgb,
}

impl EffectPalette {
    #[must_use]
    pub fn cloudy(c: NormalizedWeather) -> Self {
        let hue = lerp(0.6, 0.52, c.precip01.min(1.0));
        let saturation = 0.08 + c.precip01 * 0.12;
        let lightness = lerp(0.82, 0.72, (c.precip01 + (1.0 - c.temp01) * 0.5).min(1.0));
        let base = Rgb::from_hsl(hue, saturation, lightness);
        Self {
            base,
            highlight: base.lerp(Rgb::WHITE, 0.25 + c.wind01 * 0.2),
        }
    }

    #[must_use]
    pub fn rain(c: NormalizedWeather) -> Self {
        let hue = lerp(0.58, 0.5, (c.wind01 * 0.4).min(1.0));
        let saturation = 0.2 + c.wind01 * 0.15;
        let lightness = lerp(0.55, 0.7, (1.0 - c.temp01 * 0.4).max(0.1));
        let base = Rgb::from_hsl(hue, saturation, lightness);
        Self {
            base,
            highlight: base
                .lerp(Rgb::from_hex(0x00d3_e7ff), 0.35 + c.wind01 * 0.2)
                .offset_hsl(0.0, 0.02, 0.05),
        }
    }

    #[must_use]
    pub fn snow(factors: &SnowFactors) -> Self {
        let base = Rgb::from_hsl(0.6, factors.base_saturation, factors.base_lightness);
        Self {
            base,
            highlight: base.lerp(Rgb::WHITE, factors.highlight_strength.clamp(0.0, 1.0)),
        }
    }

    #[must_use]
    pub fn thunder(c: NormalizedWeather) -> Self {
        let base = Rgb::from_hsl(
            0.58 - c.wind01 * 0.05,
            0.35 + c.wind01 * 0.15,
            0.45 + (1.0 - c.temp01) * 0.1,
        );
        Self {
            base,
            highlight: base
                .lerp(Rgb::from_hex(0x00ff_e9a8), 0.6)
                .offset_hsl(0.0, 0.05, 0.1),
        }
    }
}
