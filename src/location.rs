//! Device position lookup with an explicit permission gate.

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, error, info};

// Keyless IP geolocation endpoint used as the device position source
const GEO_ENDPOINT: &str = "https://ipapi.co/json/";

/// A one-shot position fix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

/// Location service errors
#[derive(Debug, Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Location service unavailable: {0}")]
    Unavailable(String),
}

/// The seam between the screen controller and whatever provides positions.
pub trait LocationService {
    fn current_position(
        &self,
    ) -> impl Future<Output = Result<Position, LocationError>> + Send;
}

/// Position source backed by an IP geolocation lookup. The consent flag is
/// checked before any network traffic: a denied permission never dials out.
#[derive(Debug, Clone)]
pub struct IpLocation {
    client: reqwest::Client,
    endpoint: String,
    consent: bool,
}

impl IpLocation {
    pub fn new(consent: bool) -> Self {
        Self::with_endpoint(GEO_ENDPOINT.to_string(), consent)
    }

    pub fn with_endpoint(endpoint: String, consent: bool) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            consent,
        }
    }
}

/// Response structure for the IP geolocation endpoint
#[derive(Debug, Deserialize)]
struct GeoResponse {
    latitude: f64,
    longitude: f64,
}

impl LocationService for IpLocation {
    async fn current_position(&self) -> Result<Position, LocationError> {
        if !self.consent {
            return Err(LocationError::PermissionDenied);
        }

        info!("Resolving current position via {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|err| LocationError::Unavailable(err.to_string()))?;

        if !response.status().is_success() {
            error!("Position lookup failed: {}", response.status());
            return Err(LocationError::Unavailable(format!(
                "status {}",
                response.status()
            )));
        }

        let geo: GeoResponse = response
            .json()
            .await
            .map_err(|err| LocationError::Unavailable(err.to_string()))?;
        debug!("Position resolved: {}, {}", geo.latitude, geo.longitude);

        Ok(Position {
            latitude: geo.latitude,
            longitude: geo.longitude,
        })
    }
}
