use glam::Vec2;

pub const DEFAULT_FOLLOW_ALPHA: f32 = 0.05;

/// One-pole low-pass step: moves `current` a fraction `alpha` toward `target`.
///
/// After `n` steps toward a fixed target the remaining gap is `(1 - alpha)^n`
/// of the original one.
#[must_use]
pub fn smooth_follow(current: f32, target: f32, alpha: f32) -> f32 {
    current + (target - current) * alpha
}

#[must_use]
pub fn follow_vec2(current: Vec2, target: Vec2, alpha: f32) -> Vec2 {
    current.lerp(target, alpha)
}

/// Frame-rate independent follow rate, saturating at a full jump.
#[must_use]
pub fn frame_alpha(delta_secs: f32, rate: f32) -> f32 {
    (sanitize_delta(delta_secs) * rate).clamp(0.0, 1.0)
}

/// Negative or non-finite frame deltas count as a paused frame.
#[must_use]
pub(crate) fn sanitize_delta(delta_secs: f32) -> f32 {
    if delta_secs.is_finite() && delta_secs > 0.0 {
        delta_secs
    } else {
        0.0
    }
}
