use crossterm::event::KeyCode;
use tracing::debug;

use super::{AppState, CHANNEL_STEP, SourceMode};
use crate::domain::weather::{NormalizedWeather, weather_code_options};

impl AppState {
    /// Override-panel keys. Any edit switches the driver onto the override
    /// snapshot; other keys are ignored.
    pub(crate) fn handle_override_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('o') => self.toggle_source(),
            KeyCode::Char('[') => self.cycle_override_code(-1),
            KeyCode::Char(']') => self.cycle_override_code(1),
            KeyCode::Char(ch @ ('t' | 'T' | 'p' | 'P' | 'w' | 'W')) => self.nudge_channel(ch),
            _ => {}
        }
    }

    pub(crate) fn toggle_source(&mut self) {
        self.source = match self.source {
            SourceMode::Live => {
                // nothing chosen yet, start from what is on screen
                if self.override_code.is_none() {
                    self.override_code = self.live.weathercode;
                    self.override_channels = self.live.channels;
                }
                SourceMode::Override
            }
            SourceMode::Override => SourceMode::Live,
        };
        debug!(source = ?self.source, "snapshot source changed");
    }

    fn enter_override(&mut self) {
        if self.source == SourceMode::Live {
            self.override_channels = self.live.channels;
            self.override_code = self.live.weathercode;
            self.source = SourceMode::Override;
        }
    }

    pub(crate) fn cycle_override_code(&mut self, direction: i8) {
        self.enter_override();
        let codes: Vec<i32> = weather_code_options()
            .into_iter()
            .map(|(code, _)| code)
            .collect();
        let current = self
            .override_code
            .filter(|code| codes.contains(code))
            .unwrap_or_else(|| {
                // first step from an unlisted code lands on either end
                if direction >= 0 {
                    codes.last().copied().unwrap_or_default()
                } else {
                    codes.first().copied().unwrap_or_default()
                }
            });
        self.override_code = Some(cycle(&codes, current, direction));
    }

    pub(crate) fn nudge_channel(&mut self, key: char) {
        self.enter_override();
        let step = if key.is_ascii_uppercase() {
            CHANNEL_STEP
        } else {
            -CHANNEL_STEP
        };
        let c = self.override_channels;
        self.override_channels = match key.to_ascii_lowercase() {
            't' => NormalizedWeather::new(c.temp01 + step, c.precip01, c.wind01),
            'p' => NormalizedWeather::new(c.temp01, c.precip01 + step, c.wind01),
            'w' => NormalizedWeather::new(c.temp01, c.precip01, c.wind01 + step),
            _ => c,
        };
    }
}

pub(crate) fn cycle<T: Copy + Eq>(values: &[T], current: T, direction: i8) -> T {
    if values.is_empty() {
        return current;
    }
    let idx = values.iter().position(|v| *v == current).unwrap_or(0);
    let len = values.len();
    let next = if direction >= 0 {
        (idx + 1) % len
    } else if idx == 0 {
        len - 1
    } else {
        idx - 1
    };
    values[next]
}
