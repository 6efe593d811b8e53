mod helpers;

use business_hours::domain::errors::DomainError;
use business_hours::domain::ports::holiday_source::HolidaySource;
use business_hours::infrastructure::providers::HttpHolidaySource;
use helpers::*;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn source_for(server: &MockServer, timeout: Duration) -> HttpHolidaySource {
    HttpHolidaySource::new(format!("{}/WorkingDays.json", server.uri()), timeout).unwrap()
}

#[tokio::test]
async fn test_fetches_holiday_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/WorkingDays.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(EASTER_2025)))
        .mount(&server)
        .await;

    let source = source_for(&server, Duration::from_secs(5));
    let holidays = source.fetch_holidays().await.unwrap();

    assert_eq!(holidays, vec!["2025-04-17".to_string(), "2025-04-18".to_string()]);
}

#[tokio::test]
async fn test_every_fetch_hits_the_source() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/WorkingDays.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["2025-01-01"])))
        .expect(2)
        .mount(&server)
        .await;

    let source = source_for(&server, Duration::from_secs(5));
    source.fetch_holidays().await.unwrap();
    source.fetch_holidays().await.unwrap();
}

#[tokio::test]
async fn test_error_status_is_upstream_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let source = source_for(&server, Duration::from_secs(5));
    let err = source.fetch_holidays().await.unwrap_err();

    assert!(matches!(err, DomainError::UpstreamUnavailable(ref msg) if msg.contains("502")));
}

#[tokio::test]
async fn test_invalid_payload_is_upstream_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "holidays": [] })))
        .mount(&server)
        .await;

    let source = source_for(&server, Duration::from_secs(5));
    let err = source.fetch_holidays().await.unwrap_err();

    assert!(matches!(err, DomainError::UpstreamUnavailable(_)));
}

#[tokio::test]
async fn test_slow_source_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!(EASTER_2025))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let source = source_for(&server, Duration::from_millis(200));
    let err = source.fetch_holidays().await.unwrap_err();

    assert!(matches!(err, DomainError::UpstreamUnavailable(_)));
}

#[tokio::test]
async fn test_service_end_to_end_with_remote_calendar() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/WorkingDays.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(EASTER_2025)))
        .mount(&server)
        .await;

    let source = Arc::new(source_for(&server, Duration::from_secs(5)));
    let service = create_test_service(source, DEFAULT_NOW);

    let result = service
        .add_business_time(input(Some(5), Some(4), Some("2025-04-10T15:00:00Z")))
        .await
        .unwrap();
    assert_eq!(result.date, "2025-04-21T20:00:00Z");
}
