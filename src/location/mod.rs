//! Location resolution
//!
//! Determines the current city via an ordered chain of strategies, each
//! attempted exactly once per pass, short-circuiting on the first success:
//!
//! 1. device geolocation + reverse geocoding of the resulting coordinates
//! 2. IP-based geolocation
//! 3. the static fallback city
//!
//! The chain never fails outward: every branch terminates in a usable
//! [`City`]. An explicit search bypasses the chain entirely (see
//! [`search::SearchClient`]).

pub mod device;
pub mod ip_lookup;
pub mod nominatim;
pub mod search;

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::WeatherDashConfig;
use crate::error::WeatherDashError;
use crate::models::City;

pub use device::{Coordinates, DeviceLocation, DeviceLocationError, FixedDeviceLocation, NoDeviceLocation};
pub use ip_lookup::IpLookupClient;
pub use nominatim::NominatimClient;
pub use search::SearchClient;

/// Resolves the current city through the strategy chain
#[derive(Clone)]
pub struct LocationResolver {
    device: Arc<dyn DeviceLocation>,
    nominatim: NominatimClient,
    ip_lookup: IpLookupClient,
}

impl LocationResolver {
    /// Create a resolver with an explicit device capability
    #[must_use]
    pub fn new(
        device: Arc<dyn DeviceLocation>,
        nominatim: NominatimClient,
        ip_lookup: IpLookupClient,
    ) -> Self {
        Self {
            device,
            nominatim,
            ip_lookup,
        }
    }

    /// Create a resolver from configuration. Pinned device coordinates act
    /// as the platform fix; otherwise the device capability is absent.
    pub fn from_config(config: &WeatherDashConfig) -> Result<Self, WeatherDashError> {
        let device: Arc<dyn DeviceLocation> = match config.device_coordinates() {
            Some((lat, lon)) => Arc::new(FixedDeviceLocation::new(lat, lon)),
            None => Arc::new(NoDeviceLocation),
        };

        Ok(Self::new(
            device,
            NominatimClient::new(&config.geocoding)?,
            IpLookupClient::new(&config.ip_lookup)?,
        ))
    }

    /// Resolve the current city. Always produces a usable value.
    pub async fn resolve(&self) -> City {
        let coords = match self.device.locate().await {
            Ok(coords) => coords,
            Err(e) => {
                debug!("Device geolocation unavailable: {}", e);
                return self.ip_fallback().await;
            }
        };

        match self.nominatim.reverse(coords).await {
            Ok(city) => {
                info!("Resolved location via device fix: {}", city.display_name());
                city
            }
            Err(e) => {
                debug!("Reverse geocoding failed: {}, falling back to IP", e);
                self.ip_fallback().await
            }
        }
    }

    async fn ip_fallback(&self) -> City {
        match self.ip_lookup.lookup().await {
            Ok(city) => {
                info!("Resolved location via IP: {}", city.display_name());
                city
            }
            Err(e) => {
                warn!(
                    "IP geolocation failed: {}, using the static fallback city",
                    e
                );
                City::fallback()
            }
        }
    }
}
