use ratatui::style::Color;

use crate::{animation::Rgb, domain::weather::WeatherKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCapability {
    TrueColor,
    Xterm256,
    Basic16,
}

pub fn detect_color_capability() -> ColorCapability {
    if std::env::var_os("NO_COLOR").is_some() {
        return ColorCapability::Basic16;
    }

    let colorterm = std::env::var("COLORTERM")
        .unwrap_or_default()
        .to_lowercase();
    if colorterm.contains("truecolor") || colorterm.contains("24bit") {
        return ColorCapability::TrueColor;
    }

    let term = std::env::var("TERM").unwrap_or_default().to_lowercase();
    if term.contains("256color") {
        ColorCapability::Xterm256
    } else {
        ColorCapability::Basic16
    }
}

/// Terminal colour for a linear effect colour.
#[must_use]
pub fn effect_color(color: Rgb, capability: ColorCapability) -> Color {
    let (r, g, b) = color.to_rgb8();
    quantize(Color::Rgb(r, g, b), capability)
}

#[must_use]
pub fn kind_accent(kind: WeatherKind) -> Color {
    match kind {
        WeatherKind::Clear => Color::Rgb(255, 205, 96),
        WeatherKind::Cloudy => Color::Rgb(196, 206, 222),
        WeatherKind::Rain => Color::Rgb(110, 160, 230),
        WeatherKind::Snow => Color::Rgb(232, 240, 255),
        WeatherKind::Thunder => Color::Rgb(246, 228, 140),
        WeatherKind::Unknown => Color::Gray,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn quantize(color: Color, capability: ColorCapability) -> Color {
    match (capability, color) {
        (ColorCapability::TrueColor, c) => c,
        (ColorCapability::Xterm256, Color::Rgb(r, g, b)) => {
            let to_cube = |v: u8| -> u8 { ((f32::from(v) / 255.0) * 5.0).round() as u8 };
            Color::Indexed(16 + 36 * to_cube(r) + 6 * to_cube(g) + to_cube(b))
        }
        (ColorCapability::Basic16, Color::Rgb(r, g, b)) => basic16_from_rgb(r, g, b),
        (_, c) => c,
    }
}

fn basic16_from_rgb(r: u8, g: u8, b: u8) -> Color {
    let rgb = Rgb::new(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
    );
    let (hue, saturation, light) = rgb.to_hsl();

    if saturation < 0.1 {
        return match light {
            l if l < 0.20 => Color::Black,
            l if l < 0.40 => Color::DarkGray,
            l if l < 0.72 => Color::Gray,
            _ => Color::White,
        };
    }

    let bright = light >= 0.55;
    let (dim, lit) = match hue * 360.0 {
        h if !(30.0..330.0).contains(&h) => (Color::Red, Color::LightRed),
        h if h < 90.0 => (Color::Yellow, Color::LightYellow),
        h if h < 150.0 => (Color::Green, Color::LightGreen),
        h if h < 210.0 => (Color::Cyan, Color::LightCyan),
        h if h < 270.0 => (Color::Blue, Color::LightBlue),
        _ => (Color::Magenta, Color::LightMagenta),
    };
    if bright { lit } else { dim }
}
