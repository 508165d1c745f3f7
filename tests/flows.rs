mod common;

use common::{cli, failing_server, forecast_server, pump_until_fetched, rain_payload};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use skyshade::{
    animation::EffectUniforms,
    app::{
        events::AppEvent,
        settings::RuntimeSettings,
        state::{AppMode, AppState, SourceMode},
    },
    domain::weather::WeatherKind,
};
use tokio::sync::mpsc;

fn key(code: KeyCode) -> AppEvent {
    AppEvent::Input(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

#[tokio::test]
async fn refresh_key_fetches_and_drives_rain() {
    let server = forecast_server(rain_payload()).await;
    let uri = server.uri();
    let cli = cli(&["--forecast-url", &uri]);
    let mut app = AppState::new(&cli, RuntimeSettings::default(), None);
    let (tx, mut rx) = mpsc::channel(64);

    app.handle_event(key(KeyCode::Char('r')), &tx, &cli)
        .await
        .expect("refresh key");
    pump_until_fetched(&mut app, &cli, &tx, &mut rx).await;

    assert_eq!(app.mode, AppMode::Ready);
    assert_eq!(app.live.kind, WeatherKind::Rain);
    assert_eq!(app.forecast.as_ref().map(|f| f.rows.len()), Some(8));

    for _ in 0..30 {
        app.advance_frame(1.0 / 30.0);
    }
    let EffectUniforms::Rain(rain) = app.uniforms().effect else {
        panic!("expected rain uniforms, got {:?}", app.uniforms().effect.kind());
    };
    assert!(rain.time > 0.0);
    assert!(rain.ripple_mix > 0.0);
    assert!(app.uniforms().background.precip > 0.0);
}

#[tokio::test]
async fn server_error_before_first_forecast_is_an_error_state() {
    let server = failing_server(503).await;
    let uri = server.uri();
    let cli = cli(&["--forecast-url", &uri]);
    let mut app = AppState::new(&cli, RuntimeSettings::default(), None);
    let (tx, mut rx) = mpsc::channel(64);

    app.handle_event(key(KeyCode::Char('r')), &tx, &cli)
        .await
        .expect("refresh key");
    pump_until_fetched(&mut app, &cli, &tx, &mut rx).await;

    assert_eq!(app.mode, AppMode::Error);
    assert!(!app.fetch_in_flight);
    assert!(
        app.last_error
            .as_deref()
            .is_some_and(|err| err.contains("503"))
    );
}

#[tokio::test]
async fn override_session_switches_effect_kind() {
    let server = forecast_server(rain_payload()).await;
    let uri = server.uri();
    let cli = cli(&["--forecast-url", &uri]);
    let mut app = AppState::new(&cli, RuntimeSettings::default(), None);
    let (tx, mut rx) = mpsc::channel(64);

    app.handle_event(key(KeyCode::Char('r')), &tx, &cli)
        .await
        .expect("refresh key");
    pump_until_fetched(&mut app, &cli, &tx, &mut rx).await;
    app.advance_frame(0.05);
    assert_eq!(app.driver.kind(), WeatherKind::Rain);

    app.handle_event(key(KeyCode::Char('o')), &tx, &cli)
        .await
        .expect("toggle");
    assert_eq!(app.source, SourceMode::Override);
    assert_eq!(app.override_code, Some(61));

    // 61 -> 63 -> 65 -> 66 ... walking forward until a thunder code
    while app.active_snapshot().kind != WeatherKind::Thunder {
        app.handle_event(key(KeyCode::Char(']')), &tx, &cli)
            .await
            .expect("cycle");
    }
    app.advance_frame(0.05);
    assert_eq!(app.driver.kind(), WeatherKind::Thunder);
    assert_eq!(app.live.kind, WeatherKind::Rain);

    app.handle_event(key(KeyCode::Char('o')), &tx, &cli)
        .await
        .expect("toggle back");
    app.advance_frame(0.05);
    assert_eq!(app.driver.kind(), WeatherKind::Rain);
}

#[tokio::test]
async fn escape_quits() {
    let cli = cli(&["--code", "0"]);
    let mut app = AppState::new(&cli, RuntimeSettings::default(), None);
    let (tx, mut rx) = mpsc::channel(8);

    app.handle_event(key(KeyCode::Esc), &tx, &cli)
        .await
        .expect("escape");
    let event = rx.recv().await.expect("quit event");
    app.handle_event(event, &tx, &cli).await.expect("quit");
    assert_eq!(app.mode, AppMode::Quit);
}
