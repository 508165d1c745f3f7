mod common;

use common::{failing_server, forecast_server, rain_payload};
use serde_json::json;
use skyshade::{
    data::forecast::{ForecastClient, ForecastError, HOURLY_FIELDS},
    domain::weather::{Location, NormalizationRanges, WeatherKind},
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, query_param},
};

#[tokio::test]
async fn fetch_parses_hourly_rows() {
    let server = forecast_server(rain_payload()).await;
    let client = ForecastClient::with_base_url(server.uri());

    let forecast = client
        .fetch(Location::new(35.6762, 139.6503))
        .await
        .expect("forecast");

    assert_eq!(forecast.rows.len(), 8);
    let first = forecast.current().expect("first row");
    assert_eq!(first.weathercode, Some(61));
    assert_eq!(first.temperature_2m, Some(15.0));
    assert!(first.time.is_some());

    let snapshot = forecast
        .current_snapshot(&NormalizationRanges::default())
        .expect("snapshot");
    assert_eq!(snapshot.kind, WeatherKind::Rain);
    assert!((snapshot.channels.temp01 - 0.5).abs() < 1e-6);
    assert!((snapshot.channels.precip01 - 0.8).abs() < 1e-6);
    assert!((snapshot.channels.wind01 - 0.5).abs() < 1e-6);
}

#[tokio::test]
async fn fetch_sends_expected_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("latitude", "-33.5"))
        .and(query_param("longitude", "151.25"))
        .and(query_param("hourly", HOURLY_FIELDS))
        .and(query_param("timezone", "auto"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rain_payload()))
        .expect(1)
        .mount(&server)
        .await;

    ForecastClient::with_base_url(server.uri())
        .fetch(Location::new(-33.5, 151.25))
        .await
        .expect("forecast");
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = failing_server(500).await;
    let err = ForecastClient::with_base_url(server.uri())
        .fetch(Location::default())
        .await
        .expect_err("server error");

    assert!(matches!(err, ForecastError::Status(_)));
    assert_eq!(
        err.to_string(),
        "forecast request failed: 500 Internal Server Error"
    );
}

#[tokio::test]
async fn ragged_columns_are_cut_to_the_shortest() {
    let server = forecast_server(json!({
        "hourly": {
            "time": ["2026-02-12T00:00", "2026-02-12T01:00", "2026-02-12T02:00"],
            "temperature_2m": [1.0, 2.0, 3.0],
            "weathercode": [71, 73],
            "precipitation_probability": [50, 60, 70],
            "windspeed_10m": [4.0, 5.0, 6.0]
        }
    }))
    .await;

    let forecast = ForecastClient::with_base_url(server.uri())
        .fetch(Location::default())
        .await
        .expect("forecast");
    assert_eq!(forecast.rows.len(), 2);
    assert_eq!(forecast.rows[1].weathercode, Some(73));
}

#[tokio::test]
async fn null_values_become_missing_fields() {
    let server = forecast_server(json!({
        "hourly": {
            "time": ["2026-02-12T00:00"],
            "temperature_2m": [null],
            "weathercode": [95],
            "precipitation_probability": [null],
            "windspeed_10m": [20.0]
        }
    }))
    .await;

    let forecast = ForecastClient::with_base_url(server.uri())
        .fetch(Location::default())
        .await
        .expect("forecast");
    let snapshot = forecast
        .current_snapshot(&NormalizationRanges::default())
        .expect("snapshot");
    assert_eq!(snapshot.kind, WeatherKind::Thunder);
    assert_eq!(snapshot.channels.temp01, 0.5);
    assert_eq!(snapshot.channels.precip01, 0.0);
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&server)
        .await;

    let err = ForecastClient::with_base_url(server.uri())
        .fetch(Location::default())
        .await
        .expect_err("decode error");
    assert!(matches!(err, ForecastError::Decode(_)));
}
