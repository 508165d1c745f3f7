#![allow(dead_code)]

use std::time::Duration;

use clap::Parser;
use serde_json::{Value, json};
use skyshade::{
    app::{events::AppEvent, state::AppState},
    cli::Cli,
};
use tokio::sync::mpsc;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, query_param},
};

pub fn cli(args: &[&str]) -> Cli {
    Cli::parse_from(std::iter::once("skyshade").chain(args.iter().copied()))
}

/// Eight hours of light rain over Tokyo.
pub fn rain_payload() -> Value {
    json!({
        "latitude": 35.68,
        "longitude": 139.69,
        "hourly": {
            "time": (0..8).map(|h| format!("2026-02-12T{h:02}:00")).collect::<Vec<_>>(),
            "temperature_2m": [15.0, 14.5, 14.0, 13.8, 13.2, 12.9, 12.5, 12.0],
            "weathercode": [61, 61, 63, 63, 3, 3, 2, 1],
            "precipitation_probability": [80, 75, 70, 60, 40, 30, 20, 10],
            "windspeed_10m": [15.0, 14.0, 12.0, 10.0, 9.0, 8.0, 7.0, 6.0]
        }
    })
}

pub async fn forecast_server(payload: Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("timezone", "auto"))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload))
        .mount(&server)
        .await;
    server
}

pub async fn failing_server(status: u16) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(status))
        .mount(&server)
        .await;
    server
}

/// Feeds queued events back into the state until a fetch settles.
pub async fn pump_until_fetched(
    app: &mut AppState,
    cli: &Cli,
    tx: &mpsc::Sender<AppEvent>,
    rx: &mut mpsc::Receiver<AppEvent>,
) {
    loop {
        let event = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("event before timeout")
            .expect("channel open");
        let settled = matches!(
            event,
            AppEvent::FetchSucceeded(_) | AppEvent::FetchFailed(_)
        );
        app.handle_event(event, tx, cli).await.expect("handle event");
        if settled {
            return;
        }
    }
}
