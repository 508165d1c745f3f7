//! Non-interactive `--one-shot` output.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::{
    animation::{
        BACKGROUND_TEXTURE, CLEAR_SPHERE_TEXTURE, EffectDriver, EffectUniforms, FbmUniforms,
        FboRequest, fbo_size,
    },
    app::settings::RuntimeSettings,
    cli::Cli,
    data::forecast::ForecastClient,
    domain::{
        effects::EffectFactors,
        weather::{NormalizedWeather, WeatherKind, WeatherSnapshot},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RenderTarget {
    pub base: u32,
    pub max: u32,
    pub dpr: f32,
    pub size: u32,
}

impl From<FboRequest> for RenderTarget {
    fn from(request: FboRequest) -> Self {
        Self {
            base: request.base,
            max: request.max,
            dpr: request.dpr,
            size: fbo_size(request),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OneShotReport {
    pub kind: WeatherKind,
    pub label: &'static str,
    pub weathercode: Option<i32>,
    pub channels: NormalizedWeather,
    pub factors: EffectFactors,
    pub uniforms: EffectUniforms,
    pub background: FbmUniforms,
    pub render_target: RenderTarget,
    /// Only clear skies render the sphere texture.
    pub sphere_target: Option<RenderTarget>,
}

impl OneShotReport {
    /// State after a single frame at the configured frame rate.
    #[must_use]
    pub fn build(snapshot: &WeatherSnapshot, settings: &RuntimeSettings) -> Self {
        let mut driver = EffectDriver::new(snapshot);
        let state = *driver.tick(1.0 / f32::from(settings.fps.max(1)), snapshot);
        Self {
            kind: snapshot.kind,
            label: snapshot.label(),
            weathercode: snapshot.weathercode,
            channels: snapshot.channels,
            factors: *driver.targets(),
            uniforms: state.effect,
            background: state.background,
            render_target: BACKGROUND_TEXTURE.with_dpr(settings.dpr).into(),
            sphere_target: (snapshot.kind == WeatherKind::Clear)
                .then(|| CLEAR_SPHERE_TEXTURE.with_dpr(settings.dpr).into()),
        }
    }
}

/// With `--code` the snapshot comes from the flags alone; otherwise the
/// current forecast row is fetched and the channel flags are layered on top.
pub async fn resolve_snapshot(cli: &Cli, settings: &RuntimeSettings) -> Result<WeatherSnapshot> {
    if cli.code.is_some() {
        return Ok(WeatherSnapshot::new(
            cli.override_channels(NormalizedWeather::default()),
            cli.code,
        ));
    }

    let client = cli
        .forecast_url
        .clone()
        .map_or_else(ForecastClient::new, ForecastClient::with_base_url);
    let forecast = client
        .fetch(settings.location())
        .await
        .context("fetching forecast for one-shot output")?;
    let live = forecast
        .current_snapshot(&settings.ranges)
        .context("forecast had no hourly rows")?;
    Ok(WeatherSnapshot::new(
        cli.override_channels(live.channels),
        live.weathercode,
    ))
}

pub async fn print_one_shot(cli: &Cli, settings: &RuntimeSettings) -> Result<()> {
    let snapshot = resolve_snapshot(cli, settings).await?;
    info!(kind = snapshot.kind.as_str(), "rendering one-shot report");
    let report = OneShotReport::build(&snapshot, settings);
    let json = serde_json::to_string_pretty(&report).context("serializing one-shot report")?;
    println!("{json}");
    Ok(())
}
