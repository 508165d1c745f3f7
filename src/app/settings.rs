use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    cli::{Cli, DEFAULT_FPS, DEFAULT_REFRESH_SECS},
    domain::weather::{Location, NormalizationRanges},
};

pub const CONFIG_DIR_ENV: &str = "SKYSHADE_CONFIG_DIR";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeSettings {
    pub ranges: NormalizationRanges,
    pub fps: u8,
    pub dpr: f32,
    pub refresh_interval_secs: u64,
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        let location = Location::default();
        Self {
            ranges: NormalizationRanges::default(),
            fps: DEFAULT_FPS,
            dpr: 1.0,
            refresh_interval_secs: DEFAULT_REFRESH_SECS,
            latitude: location.latitude,
            longitude: location.longitude,
        }
    }
}

impl RuntimeSettings {
    #[must_use]
    pub fn location(&self) -> Location {
        Location::new(self.latitude, self.longitude)
    }

    /// Layers every flag the user actually passed over `self`.
    #[must_use]
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(location) = cli.location() {
            self.latitude = location.latitude;
            self.longitude = location.longitude;
        }
        if let Some(fps) = cli.fps {
            self.fps = fps;
        }
        if let Some(dpr) = cli.dpr {
            self.dpr = dpr;
        }
        if let Some(secs) = cli.refresh_interval {
            self.refresh_interval_secs = secs;
        }
        self
    }

    #[must_use]
    pub fn from_cli_defaults(cli: &Cli) -> Self {
        Self::default().with_cli(cli)
    }
}

/// Built-in defaults, then the settings file, then the command line.
pub fn load_runtime_settings(cli: &Cli, enable_disk: bool) -> (RuntimeSettings, Option<PathBuf>) {
    if !enable_disk {
        return (RuntimeSettings::from_cli_defaults(cli), None);
    }
    let Some(path) = settings_path() else {
        return (RuntimeSettings::from_cli_defaults(cli), None);
    };
    let settings = load_runtime_settings_from(cli, &path);
    (settings, Some(path))
}

pub fn load_runtime_settings_from(cli: &Cli, path: &Path) -> RuntimeSettings {
    let saved = match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<RuntimeSettings>(&content) {
            Ok(saved) => {
                debug!(path = %path.display(), "loaded settings");
                saved
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "ignoring unreadable settings file");
                RuntimeSettings::default()
            }
        },
        Err(_) => RuntimeSettings::default(),
    };
    saved.with_cli(cli)
}

pub fn save_runtime_settings(path: &Path, settings: &RuntimeSettings) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("creating settings directory failed")?;
    }
    let payload =
        serde_json::to_string_pretty(settings).context("serializing settings payload failed")?;
    fs::write(path, payload).context("writing settings file failed")
}

fn settings_path() -> Option<PathBuf> {
    if let Some(base) = std::env::var_os(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(base).join("settings.json"));
    }

    let home = std::env::var_os("HOME")?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join("skyshade")
            .join("settings.json"),
    )
}
