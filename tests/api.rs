use chrono::NaiveDate;
use fx_converter::models::currency::Currency;
use fx_converter::models::error::AppError;
use fx_converter::services::api::{ApiConfig, RateClient};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> RateClient {
    let config = ApiConfig::builder().base_url(server.uri()).build();
    RateClient::with_config(config).expect("Failed to create client")
}

async fn mount_latest(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path("/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn convert_parses_rate_and_date() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/latest"))
        .and(query_param("amount", "100"))
        .and(query_param("from", "EUR"))
        .and(query_param("to", "USD"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"amount":100.0,"base":"EUR","date":"2024-01-15","rates":{"USD":108.5}}"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let conversion = client_for(&server)
        .convert(100.0, Currency::Eur, Currency::Usd)
        .await
        .expect("conversion should succeed");

    assert_eq!(conversion.value, 108.5);
    assert_eq!(
        conversion.date,
        Some(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
    );
}

#[tokio::test]
async fn convert_returns_zero_when_target_rate_missing() {
    let server = MockServer::start().await;
    mount_latest(&server, r#"{"date":"2024-01-15","rates":{"CAD":1.2}}"#).await;

    let conversion = client_for(&server)
        .convert(10.0, Currency::Eur, Currency::Usd)
        .await
        .expect("conversion should succeed");

    assert_eq!(conversion.value, 0.0);
}

#[tokio::test]
async fn convert_tolerates_missing_date() {
    let server = MockServer::start().await;
    mount_latest(&server, r#"{"rates":{"USD":1.085}}"#).await;

    let conversion = client_for(&server)
        .convert(1.0, Currency::Eur, Currency::Usd)
        .await
        .expect("conversion should succeed");

    assert_eq!(conversion.value, 1.085);
    assert_eq!(conversion.date, None);
}

#[tokio::test]
async fn convert_surfaces_generic_error_for_bad_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/latest"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let error = client_for(&server)
        .convert(100.0, Currency::Eur, Currency::Usd)
        .await
        .expect_err("conversion should fail");

    assert!(matches!(error, AppError::BadStatus(_)));
    assert_eq!(error.to_string(), "Network response was not ok");
}

#[tokio::test]
async fn convert_reports_parse_failures() {
    let server = MockServer::start().await;
    mount_latest(&server, "definitely not json").await;

    let error = client_for(&server)
        .convert(100.0, Currency::Eur, Currency::Usd)
        .await
        .expect_err("conversion should fail");

    assert!(error.to_string().starts_with("API error"));
}
