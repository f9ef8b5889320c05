//! Primary source: the position compute microservice.
//!
//! One POST per chart with the UTC instant and geographic coordinates;
//! the service replies with a JSON array of per-planet records. Records
//! may carry an inline error for individual planets; those become
//! [`PlanetFetch::Unavailable`] without failing the source.

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use natal_geo::GeoPlace;
use natal_time::UtcInstant;

use crate::error::ProviderError;
use crate::planet::{ALL_PLANETS, Planet};
use crate::types::{PlanetFetch, PlanetaryPosition, PositionProvider, SourceTier};

#[derive(Debug, Serialize)]
struct ComputeRequest<'a> {
    utc: String,
    latitude: f64,
    longitude: f64,
    altitude_km: f64,
    place: &'a str,
}

#[derive(Debug, Deserialize)]
struct ComputeResponse {
    positions: Vec<ComputeRecord>,
}

#[derive(Debug, Deserialize)]
struct ComputeRecord {
    planet: String,
    #[serde(default)]
    longitude: Option<f64>,
    #[serde(default)]
    latitude: Option<f64>,
    #[serde(default)]
    distance_au: Option<f64>,
    #[serde(default)]
    magnitude: Option<f64>,
    #[serde(default)]
    error: Option<String>,
}

/// HTTP client for the compute microservice.
pub struct ComputeServiceProvider {
    client: Client,
    base_url: String,
}

impl ComputeServiceProvider {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn record_to_fetch(record: &ComputeRecord, stamp: &str) -> Option<PlanetFetch> {
        let planet = Planet::from_name(&record.planet)?;
        if let Some(reason) = &record.error {
            return Some(PlanetFetch::Unavailable {
                planet,
                reason: reason.clone(),
            });
        }
        match (record.longitude, record.latitude) {
            (Some(longitude_deg), latitude) => Some(PlanetFetch::Available(PlanetaryPosition {
                planet,
                longitude_deg,
                latitude_deg: latitude.unwrap_or(0.0),
                distance_au: record.distance_au.unwrap_or(0.0).max(0.0),
                magnitude: record.magnitude,
                source_timestamp: stamp.to_string(),
            })),
            (None, _) => Some(PlanetFetch::Unavailable {
                planet,
                reason: "no longitude in response".to_string(),
            }),
        }
    }
}

#[async_trait]
impl PositionProvider for ComputeServiceProvider {
    fn tier(&self) -> SourceTier {
        SourceTier::ComputeService
    }

    async fn fetch_positions(
        &self,
        utc: &UtcInstant,
        place: &GeoPlace,
    ) -> Result<Vec<PlanetFetch>, ProviderError> {
        let url = format!("{}/positions", self.base_url.trim_end_matches('/'));
        debug!("compute-service request: {url}");

        let stamp = utc.to_string();
        let body = ComputeRequest {
            utc: stamp.clone(),
            latitude: place.latitude_deg,
            longitude: place.longitude_deg,
            altitude_km: place.altitude_km,
            place: place.name,
        };

        let response = self.client.post(&url).json(&body).send().await?;
        if !response.status().is_success() {
            return Err(ProviderError::Status(response.status().as_u16()));
        }
        let parsed: ComputeResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        // Normalize onto the internal schema: every chart body gets an
        // entry, planets missing from the response included.
        let mut fetches = Vec::with_capacity(ALL_PLANETS.len());
        for planet in ALL_PLANETS {
            let fetch = parsed
                .positions
                .iter()
                .find(|r| Planet::from_name(&r.planet) == Some(planet))
                .and_then(|r| Self::record_to_fetch(r, &stamp))
                .unwrap_or_else(|| PlanetFetch::Unavailable {
                    planet,
                    reason: "missing from response".to_string(),
                });
            fetches.push(fetch);
        }
        Ok(fetches)
    }
}
