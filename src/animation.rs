//! Per-frame uniform state for the weather effects.
//!
//! The factor computers in [`crate::domain::effects`] produce targets; this
//! module owns the mutable values that chase them, one [`EffectDriver`] per
//! visual object.

mod driver;
mod palette;
mod smoothing;
mod target;
mod uniforms;

pub use driver::{EffectDriver, UniformState};
pub use palette::{EffectPalette, Rgb};
pub use smoothing::{DEFAULT_FOLLOW_ALPHA, follow_vec2, frame_alpha, smooth_follow};
pub use target::{
    BACKGROUND_TEXTURE, CLEAR_SPHERE_TEXTURE, DEFAULT_FBO_BASE, DEFAULT_FBO_MAX, FboRequest,
    fbo_size,
};
pub use uniforms::{
    CloudyUniforms, EffectUniforms, FbmUniforms, RainUniforms, SnowUniforms, ThunderUniforms,
};
