use chrono::Utc;
use clap::Parser;

use crate::{
    cli::Cli,
    domain::weather::{HourlyForecast, HourlySample, Location},
};

pub(crate) fn test_cli(args: &[&str]) -> Cli {
    Cli::parse_from(std::iter::once("skyshade").chain(args.iter().copied()))
}

pub(crate) fn sample(code: i32, temp_c: f32, precip_pct: f32, wind: f32) -> HourlySample {
    HourlySample {
        time: None,
        temperature_2m: Some(temp_c),
        weathercode: Some(code),
        precipitation_probability: Some(precip_pct),
        windspeed_10m: Some(wind),
    }
}

/// Single-row forecast over Tokyo.
pub(crate) fn forecast(code: i32, temp_c: f32) -> HourlyForecast {
    HourlyForecast {
        location: Location::default(),
        rows: vec![sample(code, temp_c, 70.0, 9.0)],
        fetched_at: Utc::now(),
    }
}
