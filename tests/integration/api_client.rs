//! API client tests against a mock hub

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vitalwatch::AlertSeverity;
use vitalwatch::api::ApiClient;

fn reading_json(minute: u32, glucose: f64) -> serde_json::Value {
    json!({
        "id": format!("r-{minute}"),
        "device_id": "DEV-1",
        "timestamp": format!("2026-03-01T10:{minute:02}:00Z"),
        "glucose": glucose,
        "bp_systolic": 120.0,
        "bp_diastolic": 80.0,
        "spo2": 97.0,
        "heart_rate": 72.0
    })
}

#[tokio::test]
async fn latest_parses_reading_prediction_and_alerts() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/latest"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "health_data": reading_json(0, 210.0),
            "prediction": {
                "diabetes_risk": 0.62,
                "heart_disease_risk": 0.1,
                "hypoxia_risk": 0.05
            },
            "alerts": [{
                "id": "a-1",
                "health_data_id": "r-0",
                "message": "High glucose level detected",
                "condition": "high_glucose",
                "severity": "high",
                "timestamp": "2026-03-01T10:00:00Z",
                "acknowledged": false
            }]
        })))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri(), Some("test-token".to_string())).unwrap();
    let latest = client.latest().await.unwrap().unwrap();

    let reading = latest.health_data.unwrap();
    assert_eq!(reading.glucose, 210.0);
    assert_eq!(latest.prediction.unwrap().diabetes_risk, 0.62);

    let alerts = latest.alerts.unwrap();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].severity, AlertSeverity::High);
}

#[tokio::test]
async fn latest_is_none_when_the_hub_has_no_data() {
    let server = MockServer::start().await;

    // A fresh hub answers 404 until the first reading arrives
    Mock::given(method("GET"))
        .and(path("/api/latest"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status": "error",
            "message": "No data available"
        })))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri(), None).unwrap();
    assert!(client.latest().await.unwrap().is_none());
}

#[tokio::test]
async fn latest_is_none_on_a_non_success_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "error"
        })))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri(), None).unwrap();
    assert!(client.latest().await.unwrap().is_none());
}

#[tokio::test]
async fn history_passes_window_parameters_and_returns_data() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/history"))
        .and(query_param("hours", "24"))
        .and(query_param("limit", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "data": [reading_json(5, 110.0), reading_json(0, 105.0)]
        })))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri(), None).unwrap();
    let readings = client.history(24, 100).await.unwrap();

    // The hub does not guarantee ordering; the client returns as-is
    assert_eq!(readings.len(), 2);
    assert_eq!(readings[0].glucose, 110.0);
}

#[tokio::test]
async fn history_with_error_status_is_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/history"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "error",
            "data": []
        })))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri(), None).unwrap();
    assert!(client.history(24, 100).await.unwrap().is_empty());
}

#[tokio::test]
async fn active_alerts_queries_unacknowledged_only() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/alerts"))
        .and(query_param("acknowledged", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "alerts": [
                {
                    "id": "a-1",
                    "message": "Low SpO2 level detected",
                    "condition": "low_spo2",
                    "severity": "medium",
                    "timestamp": "2026-03-01T10:00:00Z"
                }
            ]
        })))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri(), None).unwrap();
    let alerts = client.active_alerts().await.unwrap();

    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].severity, AlertSeverity::Medium);
    assert!(!alerts[0].acknowledged);
}

#[tokio::test]
async fn acknowledge_posts_to_the_alert_path() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/alerts/a-1/acknowledge"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "message": "Alert acknowledged"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri(), None).unwrap();
    client.acknowledge_alert("a-1").await.unwrap();
}

#[tokio::test]
async fn acknowledge_tolerates_a_malformed_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/alerts/a-1/acknowledge"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri(), None).unwrap();
    // Logged only; never an error for the UI
    assert!(client.acknowledge_alert("a-1").await.is_ok());
}

#[tokio::test]
async fn simulate_sends_scenario_and_interval() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/simulate"))
        .and(body_json(json!({"scenario": "hypoxia", "interval": 5})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri(), None).unwrap();
    client.simulate("hypoxia", 5).await.unwrap();
}
