use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use rand::Rng;
use tokio::{
    sync::mpsc::Sender,
    time::{MissedTickBehavior, interval, sleep},
};

use crate::domain::weather::HourlyForecast;

#[derive(Debug)]
pub enum AppEvent {
    Bootstrap,
    TickFrame,
    TickRefresh,
    Input(Event),
    FetchStarted,
    FetchSucceeded(HourlyForecast),
    FetchFailed(String),
    Quit,
}

pub fn spawn_input_task() -> impl futures::Stream<Item = Event> {
    EventStream::new().filter_map(|event| async move { event.ok() })
}

pub fn start_frame_task(tx: Sender<AppEvent>, fps: u8) {
    let fps = fps.clamp(15, 60);
    tokio::spawn(async move {
        let mut ticker = interval(Duration::from_millis(1000_u64 / u64::from(fps)));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            if tx.send(AppEvent::TickFrame).await.is_err() {
                break;
            }
        }
    });
}

/// Periodic refresh with +/-10% jitter. A failed fetch is not retried early.
pub fn start_refresh_task(tx: Sender<AppEvent>, refresh_secs: u64) {
    tokio::spawn(async move {
        let base = refresh_secs.max(10);
        loop {
            sleep(jittered(base)).await;
            if tx.send(AppEvent::TickRefresh).await.is_err() {
                break;
            }
        }
    });
}

#[allow(clippy::cast_precision_loss)]
fn jittered(base_secs: u64) -> Duration {
    let mut rng = rand::rng();
    let jitter = rng.random_range(-0.1f32..0.1f32);
    Duration::from_secs_f32(((base_secs as f32) * (1.0 + jitter)).max(1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jitter_stays_within_ten_percent() {
        for _ in 0..100 {
            let wait = jittered(600).as_secs_f32();
            assert!((540.0..=660.0).contains(&wait), "{wait}");
        }
    }

    #[tokio::test]
    async fn frame_task_emits_ticks() {
        let (tx, mut rx) = tokio::sync::mpsc::channel(4);
        start_frame_task(tx, 60);
        let event = tokio::time::timeout(Duration::from_secs(1), rx.recv())
            .await
            .expect("frame tick in time");
        assert!(matches!(event, Some(AppEvent::TickFrame)));
    }
}
