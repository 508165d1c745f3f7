use serde::Serialize;

pub const DEFAULT_FBO_BASE: u32 = 512;
pub const DEFAULT_FBO_MAX: u32 = 1024;

const MIN_DPR: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FboRequest {
    pub base: u32,
    pub max: u32,
    pub dpr: f32,
}

impl Default for FboRequest {
    fn default() -> Self {
        Self {
            base: DEFAULT_FBO_BASE,
            max: DEFAULT_FBO_MAX,
            dpr: 1.0,
        }
    }
}

impl FboRequest {
    #[must_use]
    pub fn with_dpr(mut self, dpr: f32) -> Self {
        self.dpr = dpr;
        self
    }
}

/// Full-screen background texture.
pub const BACKGROUND_TEXTURE: FboRequest = FboRequest {
    base: 512,
    max: 1024,
    dpr: 1.0,
};

/// Texture mapped onto the clear-sky sphere.
pub const CLEAR_SPHERE_TEXTURE: FboRequest = FboRequest {
    base: 256,
    max: 512,
    dpr: 1.0,
};

/// Square render-target edge: `round(base * max(0.1, dpr))`, never above `max`.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub fn fbo_size(request: FboRequest) -> u32 {
    let dpr = request.dpr.max(MIN_DPR);
    let size = (request.base as f32 * dpr).round();
    size.min(request.max as f32) as u32
}
