//! Device geolocation capability
//!
//! The platform location service is an injection seam: deployments that have
//! a real fix (GPS daemon, kiosk config, test harness) implement
//! [`DeviceLocation`]; everything else uses [`NoDeviceLocation`] and the
//! resolver falls through to the next strategy.

use async_trait::async_trait;
use thiserror::Error;

/// A one-shot coordinate pair from the platform location service
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Why a device location request did not produce coordinates
#[derive(Debug, Error)]
pub enum DeviceLocationError {
    #[error("no geolocation capability on this platform")]
    Unsupported,

    #[error("geolocation permission denied")]
    PermissionDenied,

    #[error("geolocation request failed: {0}")]
    Failed(String),
}

/// Platform geolocation capability
#[async_trait]
pub trait DeviceLocation: Send + Sync {
    /// Request a one-shot coordinate pair
    async fn locate(&self) -> Result<Coordinates, DeviceLocationError>;
}

/// The capability-absent default: every request reports `Unsupported`.
#[derive(Debug, Default)]
pub struct NoDeviceLocation;

#[async_trait]
impl DeviceLocation for NoDeviceLocation {
    async fn locate(&self) -> Result<Coordinates, DeviceLocationError> {
        Err(DeviceLocationError::Unsupported)
    }
}

/// A pinned fix, e.g. from configuration on a stationary deployment.
#[derive(Debug, Clone, Copy)]
pub struct FixedDeviceLocation {
    coordinates: Coordinates,
}

impl FixedDeviceLocation {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            coordinates: Coordinates {
                latitude,
                longitude,
            },
        }
    }
}

#[async_trait]
impl DeviceLocation for FixedDeviceLocation {
    async fn locate(&self) -> Result<Coordinates, DeviceLocationError> {
        Ok(self.coordinates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_no_device_location_is_unsupported() {
        let result = NoDeviceLocation.locate().await;
        assert!(matches!(result, Err(DeviceLocationError::Unsupported)));
    }

    #[tokio::test]
    async fn test_fixed_device_location_returns_pin() {
        let device = FixedDeviceLocation::new(46.8182, 8.2275);
        let coords = device.locate().await.unwrap();
        assert_eq!(coords.latitude, 46.8182);
        assert_eq!(coords.longitude, 8.2275);
    }
}
