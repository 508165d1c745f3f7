use serde::Serialize;
use tracing::debug;

use super::uniforms::{EffectUniforms, FbmUniforms};
use crate::domain::{
    effects::{EffectFactors, compute_effect_factors},
    weather::{WeatherKind, WeatherSnapshot},
};

/// Everything the renderer reads on one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UniformState {
    pub background: FbmUniforms,
    pub effect: EffectUniforms,
}

/// Per-frame driver for the background layer and the foreground effect.
///
/// The effect object is remounted (fresh uniforms) whenever the weather kind
/// changes; the background survives kind changes and only chases the channels.
#[derive(Debug, Clone)]
pub struct EffectDriver {
    state: UniformState,
    targets: EffectFactors,
}

impl EffectDriver {
    #[must_use]
    pub fn new(snapshot: &WeatherSnapshot) -> Self {
        Self {
            state: UniformState {
                background: FbmUniforms::new(snapshot.channels),
                effect: EffectUniforms::for_kind(snapshot.kind),
            },
            targets: compute_effect_factors(snapshot.kind, snapshot.channels.into()),
        }
    }

    pub fn tick(&mut self, delta_secs: f32, snapshot: &WeatherSnapshot) -> &UniformState {
        if snapshot.kind != self.kind() {
            debug!(
                from = self.kind().as_str(),
                to = snapshot.kind.as_str(),
                "remounting weather effect"
            );
            self.state.effect = EffectUniforms::for_kind(snapshot.kind);
        }
        self.targets = compute_effect_factors(snapshot.kind, snapshot.channels.into());
        self.state.background.tick(delta_secs, snapshot.channels);
        self.state
            .effect
            .tick(delta_secs, &self.targets, snapshot.channels);
        &self.state
    }

    #[must_use]
    pub fn kind(&self) -> WeatherKind {
        self.state.effect.kind()
    }

    #[must_use]
    pub fn state(&self) -> &UniformState {
        &self.state
    }

    /// Factors the uniforms were last pulled toward.
    #[must_use]
    pub fn targets(&self) -> &EffectFactors {
        &self.targets
    }
}
