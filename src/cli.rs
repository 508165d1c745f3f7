#![allow(clippy::missing_errors_doc)]

use std::path::PathBuf;

use clap::Parser;

use crate::domain::weather::{Location, NormalizedWeather};

pub const DEFAULT_FPS: u8 = 30;
pub const DEFAULT_REFRESH_SECS: u64 = 600;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "skyshade",
    version,
    about = "Weather-driven effect uniforms, previewed in the terminal"
)]
pub struct Cli {
    /// Latitude (default: Tokyo)
    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude (default: Tokyo)
    #[arg(long, allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Target FPS (15..60)
    #[arg(long, value_parser = clap::value_parser!(u8).range(15..=60))]
    pub fps: Option<u8>,

    /// Device pixel ratio used for render-target sizing
    #[arg(long)]
    pub dpr: Option<f32>,

    /// Forecast endpoint override
    #[arg(long)]
    pub forecast_url: Option<String>,

    /// Refresh interval in seconds
    #[arg(long)]
    pub refresh_interval: Option<u64>,

    /// Force a WMO weather code instead of the live one
    #[arg(long, allow_negative_numbers = true)]
    pub code: Option<i32>,

    /// Force the normalized temperature channel
    #[arg(long)]
    pub temp01: Option<f32>,

    /// Force the normalized precipitation channel
    #[arg(long)]
    pub precip01: Option<f32>,

    /// Force the normalized wind channel
    #[arg(long)]
    pub wind01: Option<f32>,

    /// Print factors and uniforms as JSON and exit (non-interactive)
    #[arg(long)]
    pub one_shot: bool,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn validate(&self) -> anyhow::Result<()> {
        match (self.lat, self.lon) {
            (Some(_), None) | (None, Some(_)) => {
                anyhow::bail!("--lat and --lon must be provided together")
            }
            (Some(lat), Some(lon))
                if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) =>
            {
                anyhow::bail!("coordinates out of range: {lat}, {lon}")
            }
            _ => {}
        }
        if let Some(dpr) = self.dpr
            && !(dpr.is_finite() && dpr > 0.0)
        {
            anyhow::bail!("--dpr must be a positive number");
        }
        Ok(())
    }

    #[must_use]
    pub fn location(&self) -> Option<Location> {
        self.lat.zip(self.lon).map(|(lat, lon)| Location::new(lat, lon))
    }

    /// Whether any of the override flags was given.
    #[must_use]
    pub fn has_overrides(&self) -> bool {
        self.code.is_some()
            || self.temp01.is_some()
            || self.precip01.is_some()
            || self.wind01.is_some()
    }

    /// Override channels layered over `base`.
    #[must_use]
    pub fn override_channels(&self, base: NormalizedWeather) -> NormalizedWeather {
        NormalizedWeather::new(
            self.temp01.unwrap_or(base.temp01),
            self.precip01.unwrap_or(base.precip01),
            self.wind01.unwrap_or(base.wind01),
        )
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::Cli;
    use crate::domain::weather::NormalizedWeather;

    #[test]
    fn defaults_leave_everything_unset() {
        let cli = Cli::parse_from(["skyshade"]);
        assert!(cli.lat.is_none());
        assert!(cli.fps.is_none());
        assert!(!cli.one_shot);
        assert!(!cli.has_overrides());
        assert!(cli.location().is_none());
    }

    #[test]
    fn parses_negative_coordinates() {
        let cli = Cli::parse_from(["skyshade", "--lat", "-33.86", "--lon", "151.2"]);
        let location = cli.location().expect("location");
        assert_eq!(location.latitude, -33.86);
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn rejects_fps_out_of_range() {
        assert!(Cli::try_parse_from(["skyshade", "--fps", "5"]).is_err());
        assert!(Cli::try_parse_from(["skyshade", "--fps", "61"]).is_err());
        let cli = Cli::parse_from(["skyshade", "--fps", "60"]);
        assert_eq!(cli.fps, Some(60));
    }

    #[test]
    fn lat_requires_lon() {
        let cli = Cli::parse_from(["skyshade", "--lat", "10"]);
        let err = cli.validate().expect_err("expected pairing error");
        assert!(err.to_string().contains("--lat and --lon"));
    }

    #[test]
    fn rejects_bad_dpr() {
        let cli = Cli::parse_from(["skyshade", "--dpr", "0"]);
        assert!(cli.validate().is_err());
    }

    #[test]
    fn overrides_layer_over_live_channels() {
        let cli = Cli::parse_from(["skyshade", "--code", "95", "--precip01", "0.9"]);
        assert!(cli.has_overrides());
        let channels = cli.override_channels(NormalizedWeather::new(0.3, 0.1, 0.4));
        assert_eq!(channels, NormalizedWeather::new(0.3, 0.9, 0.4));
    }

    #[test]
    fn override_channels_are_clamped() {
        let cli = Cli::parse_from(["skyshade", "--wind01", "3"]);
        let channels = cli.override_channels(NormalizedWeather::default());
        assert_eq!(channels.wind01, 1.0);
    }
}
