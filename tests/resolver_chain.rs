//! Integration tests for the location fallback chain
//!
//! Each strategy's HTTP service is played by a wiremock server; the device
//! capability is injected. The chain must always terminate in a usable city.

use std::sync::Arc;

use async_trait::async_trait;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use weatherdash::location::{
    Coordinates, DeviceLocation, DeviceLocationError, FixedDeviceLocation, IpLookupClient,
    LocationResolver, NoDeviceLocation, NominatimClient,
};
use weatherdash::models::City;
use weatherdash::config::{GeocodingConfig, IpLookupConfig};

/// Device capability whose permission prompt was declined
struct DeniedDevice;

#[async_trait]
impl DeviceLocation for DeniedDevice {
    async fn locate(&self) -> Result<Coordinates, DeviceLocationError> {
        Err(DeviceLocationError::PermissionDenied)
    }
}

fn austin_ip_payload() -> serde_json::Value {
    serde_json::json!({
        "city": "Austin",
        "region": "Texas",
        "country_name": "United States",
        "latitude": 30.27,
        "longitude": -97.74
    })
}

fn resolver(
    device: Arc<dyn DeviceLocation>,
    nominatim: &MockServer,
    ip: &MockServer,
) -> LocationResolver {
    let geocoding = GeocodingConfig {
        reverse_base_url: nominatim.uri(),
        ..Default::default()
    };
    let ip_lookup = IpLookupConfig {
        base_url: ip.uri(),
        ..Default::default()
    };

    LocationResolver::new(
        device,
        NominatimClient::new(&geocoding).unwrap(),
        IpLookupClient::new(&ip_lookup).unwrap(),
    )
}

async fn mount_ip_austin(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(austin_ip_payload()))
        .mount(server)
        .await;
}

#[tokio::test]
async fn device_fix_with_good_reverse_geocode_resolves_directly() {
    let nominatim = MockServer::start().await;
    let ip = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reverse"))
        .and(query_param("format", "json"))
        .and(query_param("lat", "46.8182"))
        .and(query_param("lon", "8.2275"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "address": {
                "town": "Sachseln",
                "state": "Obwalden",
                "country": "Switzerland"
            }
        })))
        .mount(&nominatim)
        .await;

    let resolver = resolver(
        Arc::new(FixedDeviceLocation::new(46.8182, 8.2275)),
        &nominatim,
        &ip,
    );
    let city = resolver.resolve().await;

    assert_eq!(city.town, "Sachseln");
    assert_eq!(city.state, "Obwalden");
    assert_eq!(city.country, "Switzerland");
    assert_eq!(city.location, (46.8182, 8.2275));
}

#[tokio::test]
async fn reverse_geocode_failure_falls_through_to_ip() {
    let nominatim = MockServer::start().await;
    let ip = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&nominatim)
        .await;
    mount_ip_austin(&ip).await;

    let resolver = resolver(
        Arc::new(FixedDeviceLocation::new(46.8182, 8.2275)),
        &nominatim,
        &ip,
    );
    let city = resolver.resolve().await;

    assert_eq!(city.town, "Austin");
    assert_eq!(city.state, "Texas");
    assert_eq!(city.country, "United States");
    assert_eq!(city.location, (30.27, -97.74));
}

#[tokio::test]
async fn reverse_geocode_without_address_falls_through_to_ip() {
    let nominatim = MockServer::start().await;
    let ip = MockServer::start().await;

    // 200 response, but no usable address labels
    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "error": "Unable to geocode" })),
        )
        .mount(&nominatim)
        .await;
    mount_ip_austin(&ip).await;

    let resolver = resolver(
        Arc::new(FixedDeviceLocation::new(0.0, 0.0)),
        &nominatim,
        &ip,
    );
    let city = resolver.resolve().await;

    assert_eq!(city.town, "Austin");
}

#[tokio::test]
async fn denied_geolocation_skips_reverse_and_uses_ip() {
    let nominatim = MockServer::start().await;
    let ip = MockServer::start().await;
    mount_ip_austin(&ip).await;

    let resolver = resolver(Arc::new(DeniedDevice), &nominatim, &ip);
    let city = resolver.resolve().await;

    assert_eq!(
        city,
        City::new("Austin", "Texas", "United States", 30.27, -97.74)
    );
    // The reverse geocoder must not have been consulted
    assert!(nominatim.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn all_strategies_failing_yields_static_fallback() {
    let nominatim = MockServer::start().await;
    let ip = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json/"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .mount(&ip)
        .await;

    let resolver = resolver(Arc::new(NoDeviceLocation), &nominatim, &ip);
    let city = resolver.resolve().await;

    assert_eq!(city, City::fallback());
    assert_eq!(city.location, (-74.0060, 40.7128));
}

#[tokio::test]
async fn ip_lookup_with_unexpected_payload_yields_static_fallback() {
    let nominatim = MockServer::start().await;
    let ip = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "error": true,
            "reason": "RateLimited"
        })))
        .mount(&ip)
        .await;

    let resolver = resolver(Arc::new(NoDeviceLocation), &nominatim, &ip);
    let city = resolver.resolve().await;

    assert_eq!(city, City::fallback());
}
