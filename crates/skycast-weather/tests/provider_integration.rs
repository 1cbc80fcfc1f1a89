//! Integration tests for WeatherProvider and WeatherSession using wiremock.

use skycast_core::WeatherConfig;
use skycast_weather::{
    DisplayUnit, LookupError, SessionState, WeatherProvider, WeatherSession,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn payload(name: &str, country: &str, temp: f64, condition: &str) -> serde_json::Value {
    serde_json::json!({
        "weather": [{"id": 800, "main": condition, "description": condition.to_lowercase(), "icon": "01d"}],
        "main": {"temp": temp, "humidity": 70, "pressure": 1015},
        "sys": {"country": country},
        "name": name,
        "cod": 200
    })
}

fn provider_for(server: &MockServer) -> WeatherProvider {
    let config = WeatherConfig {
        api_base_url: format!("{}/data/2.5/weather", server.uri()),
        api_key: Some("test-key".to_string()),
        ..WeatherConfig::default()
    };
    WeatherProvider::new(&config).unwrap()
}

#[tokio::test]
async fn test_fetch_sends_imperial_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "Paris"))
        .and(query_param("units", "imperial"))
        .and(query_param("appid", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload("Paris", "FR", 59.0, "Clouds")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let snapshot = provider_for(&mock_server).fetch("Paris").await.unwrap();

    assert_eq!(snapshot.place, "Paris");
    assert_eq!(snapshot.country, "FR");
    assert_eq!(snapshot.temperature_f, 59.0);
    assert_eq!(snapshot.humidity, 70.0);
    assert_eq!(snapshot.condition, "Clouds");
    assert_eq!(snapshot.rainfall_mm, None);
}

#[tokio::test]
async fn test_fetch_encodes_query_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("q", "São Paulo,BR"))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload("São Paulo", "BR", 77.0, "Clear")))
        .mount(&mock_server)
        .await;

    let snapshot = provider_for(&mock_server).fetch("São Paulo,BR").await.unwrap();
    assert_eq!(snapshot.place, "São Paulo");
}

#[tokio::test]
async fn test_fetch_reads_hourly_rain() {
    let mock_server = MockServer::start().await;

    let mut body = payload("Bergen", "NO", 46.4, "Rain");
    body["rain"] = serde_json::json!({"1h": 2.79});

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let snapshot = provider_for(&mock_server).fetch("Bergen").await.unwrap();
    assert_eq!(snapshot.rainfall_mm, Some(2.79));
}

#[tokio::test]
async fn test_fetch_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "cod": "404",
            "message": "city not found"
        })))
        .mount(&mock_server)
        .await;

    let err = provider_for(&mock_server).fetch("Zzzzz").await.unwrap_err();

    match err {
        LookupError::Status { status, message } => {
            assert_eq!(status, 404);
            assert!(message.contains("city not found"));
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let err = provider_for(&mock_server).fetch("Paris").await.unwrap_err();
    assert!(matches!(err, LookupError::Parse(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_fetch_unreachable_server() {
    let config = WeatherConfig {
        // Port 9 (discard) is not expected to accept HTTP connections
        api_base_url: "http://127.0.0.1:9/weather".to_string(),
        api_key: Some("test-key".to_string()),
        request_timeout_secs: Some(2),
        ..WeatherConfig::default()
    };
    let provider = WeatherProvider::new(&config).unwrap();

    let err = provider.fetch("Paris").await.unwrap_err();
    assert!(matches!(err, LookupError::Network(_)), "got {:?}", err);
    assert_eq!(err.user_message(), "Location Not Found");
}

#[tokio::test]
async fn test_session_paris_then_unknown() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("q", "Paris"))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload("Paris", "FR", 59.0, "Clouds")))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("q", "Zzzzz"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "cod": "404",
            "message": "city not found"
        })))
        .mount(&mock_server)
        .await;

    let mut session = WeatherSession::new(provider_for(&mock_server), DisplayUnit::Fahrenheit);

    session.submit("Paris").await.unwrap();
    assert!(matches!(session.state(), SessionState::Loaded(_)));
    assert_eq!(session.history().entries(), ["Paris"]);
    assert_eq!(session.temperature_label().as_deref(), Some("59.00° F"));
    assert_eq!(
        session.clothing_suggestion(),
        Some("Wear light clothes, but keep a jacket handy.")
    );

    session.submit("Zzzzz").await.unwrap();
    assert_eq!(session.error(), Some("Location Not Found"));
    assert!(session.snapshot().is_none());
    assert_eq!(session.history().entries(), ["Paris"]);
}
