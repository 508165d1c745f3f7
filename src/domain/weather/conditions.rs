use serde::Serialize;

/// Visual family an effect is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherKind {
    Clear,
    Cloudy,
    Rain,
    Snow,
    Thunder,
    Unknown,
}

impl WeatherKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Cloudy => "cloudy",
            Self::Rain => "rain",
            Self::Snow => "snow",
            Self::Thunder => "thunder",
            Self::Unknown => "unknown",
        }
    }
}

#[must_use]
pub fn resolve_weather_kind(code: Option<i32>) -> WeatherKind {
    let Some(code) = code else {
        return WeatherKind::Unknown;
    };
    match code {
        0 | 1 => WeatherKind::Clear,
        2..=4 | 45 | 48 => WeatherKind::Cloudy,
        51..=67 | 80..=82 => WeatherKind::Rain,
        71..=77 | 85..=86 => WeatherKind::Snow,
        95..=99 => WeatherKind::Thunder,
        _ => WeatherKind::Unknown,
    }
}

/// Loosely typed codes: NaN, infinities and fractional values are `Unknown`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn resolve_weather_kind_f64(code: Option<f64>) -> WeatherKind {
    let code = code.filter(|c| c.is_finite() && c.fract() == 0.0);
    match code {
        Some(c) if c >= f64::from(i32::MIN) && c <= f64::from(i32::MAX) => {
            resolve_weather_kind(Some(c as i32))
        }
        _ => WeatherKind::Unknown,
    }
}

const WEATHER_LABELS: &[(i32, &str)] = &[
    (0, "Clear sky"),
    (1, "Mainly clear"),
    (2, "Partly cloudy"),
    (3, "Overcast"),
    (45, "Fog"),
    (48, "Depositing rime fog"),
    (51, "Light drizzle"),
    (53, "Moderate drizzle"),
    (55, "Dense drizzle"),
    (56, "Light freezing drizzle"),
    (57, "Dense freezing drizzle"),
    (61, "Slight rain"),
    (63, "Moderate rain"),
    (65, "Heavy rain"),
    (66, "Light freezing rain"),
    (67, "Heavy freezing rain"),
    (71, "Slight snowfall"),
    (73, "Moderate snowfall"),
    (75, "Heavy snowfall"),
    (77, "Snow grains"),
    (80, "Slight rain showers"),
    (81, "Moderate rain showers"),
    (82, "Violent rain showers"),
    (85, "Slight snow showers"),
    (86, "Heavy snow showers"),
    (95, "Thunderstorm"),
    (96, "Thunderstorm + light hail"),
    (99, "Thunderstorm + heavy hail"),
];

#[must_use]
pub fn weather_label(code: i32) -> &'static str {
    WEATHER_LABELS
        .iter()
        .find_map(|(candidate, label)| (*candidate == code).then_some(*label))
        .unwrap_or("Unknown")
}

/// Every labelled code in ascending order, for manual selection.
#[must_use]
pub fn weather_code_options() -> Vec<(i32, &'static str)> {
    WEATHER_LABELS.to_vec()
}
