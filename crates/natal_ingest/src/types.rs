//! Ingestion data model: positions, per-planet outcomes, source tiers,
//! attempt traces, and chain configuration.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use natal_geo::GeoPlace;
use natal_time::UtcInstant;

use crate::error::ProviderError;
use crate::planet::Planet;

/// One planet's position as reported by a source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetaryPosition {
    pub planet: Planet,
    /// Geocentric ecliptic longitude in degrees, [0, 360).
    pub longitude_deg: f64,
    /// Ecliptic latitude in degrees.
    pub latitude_deg: f64,
    /// Distance from Earth in astronomical units. Never negative.
    pub distance_au: f64,
    /// Apparent visual magnitude, when the source reports one.
    pub magnitude: Option<f64>,
    /// UTC instant the data is valid for, as reported by the source.
    pub source_timestamp: String,
}

/// Per-planet outcome. A failed planet is a distinct state, never a
/// zeroed position that could be mistaken for Aries 0°.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlanetFetch {
    Available(PlanetaryPosition),
    Unavailable { planet: Planet, reason: String },
}

impl PlanetFetch {
    pub fn planet(&self) -> Planet {
        match self {
            Self::Available(p) => p.planet,
            Self::Unavailable { planet, .. } => *planet,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }

    pub fn position(&self) -> Option<&PlanetaryPosition> {
        match self {
            Self::Available(p) => Some(p),
            Self::Unavailable { .. } => None,
        }
    }
}

/// Which tier of the chain produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceTier {
    /// Primary compute microservice.
    ComputeService,
    /// Secondary ephemeris HTTP API.
    EphemerisApi,
    /// Tertiary offline mean-element table. Mock data, clearly
    /// distinguishable from real ephemeris output.
    MockData,
}

impl SourceTier {
    pub const fn name(self) -> &'static str {
        match self {
            Self::ComputeService => "compute-service",
            Self::EphemerisApi => "ephemeris-api",
            Self::MockData => "mock-data",
        }
    }
}

impl std::fmt::Display for SourceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of one source attempt in the chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttemptOutcome {
    Succeeded { available: usize, unavailable: usize },
    Failed { reason: String },
    TimedOut,
}

/// One entry of the chain's attempt trace, in attempt order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceAttempt {
    pub tier: SourceTier,
    pub outcome: AttemptOutcome,
}

/// Result of running the fallback chain for one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct IngestResult {
    /// One entry per chart body, in `ALL_PLANETS` order.
    pub fetches: Vec<PlanetFetch>,
    /// Tier that supplied the fetches.
    pub tier: SourceTier,
    /// Every attempt made, in order.
    pub attempts: Vec<SourceAttempt>,
    /// All real sources failed and mean elements were substituted.
    pub exhausted: bool,
}

/// Ingestion configuration, passed in at construction time.
///
/// Explicit rather than ambient: base URLs and timing knobs travel with
/// the chain instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestConfig {
    /// Base URL of the primary compute microservice.
    pub compute_base_url: String,
    /// Base URL of the secondary ephemeris API.
    pub ephemeris_base_url: String,
    /// Bound on each source attempt.
    pub request_timeout: Duration,
    /// Delay between successive per-planet requests against a
    /// rate-sensitive source.
    pub inter_request_delay: Duration,
}

impl IngestConfig {
    /// Config with the documented default timing: 30 s per-source
    /// timeout, 1 s inter-request delay.
    pub fn new(compute_base_url: impl Into<String>, ephemeris_base_url: impl Into<String>) -> Self {
        Self {
            compute_base_url: compute_base_url.into(),
            ephemeris_base_url: ephemeris_base_url.into(),
            request_timeout: Duration::from_secs(30),
            inter_request_delay: Duration::from_secs(1),
        }
    }

    pub fn validate(&self) -> Result<(), ProviderError> {
        if self.compute_base_url.is_empty() {
            return Err(ProviderError::InvalidConfig("compute_base_url must not be empty"));
        }
        if self.ephemeris_base_url.is_empty() {
            return Err(ProviderError::InvalidConfig("ephemeris_base_url must not be empty"));
        }
        if self.request_timeout.is_zero() {
            return Err(ProviderError::InvalidConfig("request_timeout must be nonzero"));
        }
        Ok(())
    }
}

/// An upstream position source.
///
/// The chain only depends on this shape; HTTP call, embedded numeric
/// table, or static data are all equally valid implementations.
#[async_trait]
pub trait PositionProvider: Send + Sync {
    /// Tier this source occupies in the chain.
    fn tier(&self) -> SourceTier;

    /// Positions for every chart body at the given instant and place.
    ///
    /// A per-planet failure is reported inline as
    /// [`PlanetFetch::Unavailable`]; an `Err` means the source as a
    /// whole is unusable and the chain should advance.
    async fn fetch_positions(
        &self,
        utc: &UtcInstant,
        place: &GeoPlace,
    ) -> Result<Vec<PlanetFetch>, ProviderError>;
}
