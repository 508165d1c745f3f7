use std::{path::PathBuf, time::Instant};

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::{
    animation::{BACKGROUND_TEXTURE, EffectDriver, FboRequest, UniformState, fbo_size},
    app::{
        events::{AppEvent, start_frame_task, start_refresh_task},
        settings::{RuntimeSettings, save_runtime_settings},
    },
    cli::Cli,
    data::forecast::ForecastClient,
    domain::weather::{HourlyForecast, NormalizedWeather, WeatherSnapshot},
};

mod input;

/// Channel step for the override keys.
pub const CHANNEL_STEP: f32 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Loading,
    Ready,
    Error,
    Quit,
}

/// Where the driver's snapshot comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceMode {
    Live,
    Override,
}

#[derive(Debug)]
pub struct AppState {
    pub mode: AppMode,
    pub running: bool,
    pub settings: RuntimeSettings,
    pub settings_path: Option<PathBuf>,
    pub source: SourceMode,
    pub forecast: Option<HourlyForecast>,
    pub live: WeatherSnapshot,
    pub override_channels: NormalizedWeather,
    pub override_code: Option<i32>,
    pub driver: EffectDriver,
    pub last_error: Option<String>,
    pub status: String,
    pub fetch_in_flight: bool,
    pub last_frame_at: Instant,
    pub frame_tick: u64,
    forecast_client: ForecastClient,
}

impl AppState {
    pub fn new(cli: &Cli, settings: RuntimeSettings, settings_path: Option<PathBuf>) -> Self {
        let live = WeatherSnapshot::default();
        let override_channels = cli.override_channels(live.channels);
        let source = if cli.has_overrides() {
            SourceMode::Override
        } else {
            SourceMode::Live
        };
        let forecast_client = cli
            .forecast_url
            .clone()
            .map_or_else(ForecastClient::new, ForecastClient::with_base_url);

        let mut state = Self {
            mode: AppMode::Loading,
            running: true,
            settings,
            settings_path,
            source,
            forecast: None,
            live,
            override_channels,
            override_code: cli.code,
            driver: EffectDriver::new(&live),
            last_error: None,
            status: "Initializing...".to_string(),
            fetch_in_flight: false,
            last_frame_at: Instant::now(),
            frame_tick: 0,
            forecast_client,
        };
        state.driver = EffectDriver::new(&state.active_snapshot());
        state
    }

    /// Snapshot the driver follows this frame.
    #[must_use]
    pub fn active_snapshot(&self) -> WeatherSnapshot {
        match self.source {
            SourceMode::Live => self.live,
            SourceMode::Override => WeatherSnapshot::new(self.override_channels, self.override_code),
        }
    }

    #[must_use]
    pub fn uniforms(&self) -> &UniformState {
        self.driver.state()
    }

    #[must_use]
    pub fn background_texture_size(&self) -> u32 {
        fbo_size(self.render_target())
    }

    #[must_use]
    pub fn render_target(&self) -> FboRequest {
        BACKGROUND_TEXTURE.with_dpr(self.settings.dpr)
    }

    pub async fn handle_event(
        &mut self,
        event: AppEvent,
        tx: &mpsc::Sender<AppEvent>,
        cli: &Cli,
    ) -> Result<()> {
        match event {
            AppEvent::Bootstrap => {
                cli.validate()?;
                start_frame_task(tx.clone(), self.settings.fps);
                start_refresh_task(tx.clone(), self.settings.refresh_interval_secs);
                self.start_fetch(tx).await?;
            }
            AppEvent::TickFrame => {
                let now = Instant::now();
                let delta = now.duration_since(self.last_frame_at);
                self.last_frame_at = now;
                self.advance_frame(delta.as_secs_f32());
            }
            AppEvent::TickRefresh => {
                if self.mode != AppMode::Quit {
                    self.start_fetch(tx).await?;
                }
            }
            AppEvent::Input(event) => self.handle_input(event, tx).await?,
            AppEvent::FetchStarted => {
                self.fetch_in_flight = true;
                self.status = "Fetching forecast...".to_string();
                if self.forecast.is_none() {
                    self.mode = AppMode::Loading;
                }
            }
            AppEvent::FetchSucceeded(forecast) => self.apply_forecast(forecast),
            AppEvent::FetchFailed(err) => {
                warn!(error = %err, "forecast fetch failed");
                self.fetch_in_flight = false;
                self.last_error = Some(err);
                self.status = "Fetch failed".to_string();
                // the last good snapshot stays on screen
                if self.forecast.is_none() {
                    self.mode = AppMode::Error;
                }
            }
            AppEvent::Quit => {
                self.mode = AppMode::Quit;
            }
        }

        Ok(())
    }

    /// One render frame: the driver chases the active snapshot.
    pub fn advance_frame(&mut self, delta_secs: f32) {
        let snapshot = self.active_snapshot();
        self.driver.tick(delta_secs, &snapshot);
        self.frame_tick = self.frame_tick.saturating_add(1);
    }

    pub fn apply_forecast(&mut self, forecast: HourlyForecast) {
        self.fetch_in_flight = false;
        match forecast.current_snapshot(&self.settings.ranges) {
            Some(snapshot) => {
                info!(
                    kind = snapshot.kind.as_str(),
                    code = ?snapshot.weathercode,
                    "forecast updated"
                );
                self.live = snapshot;
                self.last_error = None;
                self.status = format!("Updated {}", forecast.fetched_at.format("%H:%M:%S UTC"));
                self.mode = AppMode::Ready;
            }
            None => {
                warn!("forecast payload had no hourly rows");
                self.last_error = Some("forecast had no hourly rows".to_string());
                if self.forecast.is_none() {
                    self.mode = AppMode::Error;
                }
                return;
            }
        }
        self.forecast = Some(forecast);
    }

    async fn handle_input(&mut self, event: Event, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        if let Event::Key(key) = event
            && key.kind == KeyEventKind::Press
        {
            self.handle_key_press(key, tx).await?;
        }
        Ok(())
    }

    async fn handle_key_press(&mut self, key: KeyEvent, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            tx.send(AppEvent::Quit).await?;
            return Ok(());
        }
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => tx.send(AppEvent::Quit).await?,
            KeyCode::Char('r') => self.start_fetch(tx).await?,
            KeyCode::Char('s') => self.persist_settings(),
            code => self.handle_override_key(code),
        }
        Ok(())
    }

    async fn start_fetch(&mut self, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        if self.fetch_in_flight {
            return Ok(());
        }
        // set before the spawn so a second key press cannot start another fetch
        self.fetch_in_flight = true;
        tx.send(AppEvent::FetchStarted).await?;

        let client = self.forecast_client.clone();
        let location = self.settings.location();
        let tx2 = tx.clone();
        tokio::spawn(async move {
            match client.fetch(location).await {
                Ok(forecast) => {
                    let _ = tx2.send(AppEvent::FetchSucceeded(forecast)).await;
                }
                Err(err) => {
                    let _ = tx2.send(AppEvent::FetchFailed(err.to_string())).await;
                }
            }
        });
        Ok(())
    }

    fn persist_settings(&mut self) {
        let Some(path) = self.settings_path.as_deref() else {
            self.status = "Settings persistence disabled".to_string();
            return;
        };
        match save_runtime_settings(path, &self.settings) {
            Ok(()) => {
                info!(path = %path.display(), "settings saved");
                self.status = "Settings saved".to_string();
            }
            Err(err) => {
                warn!(error = %err, "saving settings failed");
                self.last_error = Some(format!("{err:#}"));
            }
        }
    }
}
