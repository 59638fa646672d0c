//! Integration tests for city name search against a mock geocoding provider

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use weatherdash::WeatherDashError;
use weatherdash::config::GeocodingConfig;
use weatherdash::location::SearchClient;

fn client_for(server: &MockServer) -> SearchClient {
    let config = GeocodingConfig {
        search_base_url: server.uri(),
        ..Default::default()
    };
    SearchClient::new(&config).unwrap()
}

#[tokio::test]
async fn search_sends_encoded_name_and_fixed_parameters() {
    let server = MockServer::start().await;
    // "new york" must travel as "new%20york"; wiremock matches the decoded value
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("name", "new york"))
        .and(query_param("count", "5"))
        .and(query_param("language", "en"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [
                {
                    "name": "New York",
                    "latitude": 40.7128,
                    "longitude": -74.006,
                    "country": "United States",
                    "admin1": "New York"
                },
                {
                    "name": "New York Mills",
                    "latitude": 46.518,
                    "longitude": -95.3764,
                    "country": "United States",
                    "admin1": "Minnesota"
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let cities = client_for(&server).search("new york").await.unwrap();

    assert_eq!(cities.len(), 2);
    assert_eq!(cities[0].town, "New York");
    assert_eq!(cities[0].state, "New York");
    assert_eq!(cities[0].location, (40.7128, -74.006));
    assert_eq!(cities[1].state, "Minnesota");
}

#[tokio::test]
async fn search_without_results_yields_empty_list() {
    let server = MockServer::start().await;
    // the provider omits the results key entirely when nothing matches
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "generationtime_ms": 0.5 })),
        )
        .mount(&server)
        .await;

    let cities = client_for(&server).search("xyzzy").await.unwrap();
    assert!(cities.is_empty());
}

#[tokio::test]
async fn search_fills_missing_labels_with_placeholders() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [
                { "name": "Null Island", "latitude": 0.0, "longitude": 0.0 }
            ]
        })))
        .mount(&server)
        .await;

    let cities = client_for(&server).search("null island").await.unwrap();

    assert_eq!(cities[0].state, "");
    assert_eq!(cities[0].country, "Unknown");
}

#[tokio::test]
async fn blank_query_is_rejected_without_a_request() {
    let server = MockServer::start().await;

    let result = client_for(&server).search("   ").await;

    assert!(matches!(result, Err(WeatherDashError::Validation { .. })));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn search_server_error_becomes_explicit_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .mount(&server)
        .await;

    let result = client_for(&server).search("london").await;

    assert!(matches!(result, Err(WeatherDashError::Api { .. })));
}
