//! Birth-chart angle computation.
//!
//! The one entry point hosts integrate against is
//! [`ChartEngine::compute_chart_angles`]: a civil birth moment in, a
//! complete [`ChartAngles`] out, with sign and house placements for the
//! chart bodies plus Ascendant and Midheaven, with machine-readable
//! degradation flags for every fallback taken along the way.
//!
//! ```rust,ignore
//! use natal_chart::*;
//!
//! let config = ChartConfig::new(IngestConfig::new(
//!     "https://positions.internal",
//!     "https://ssd.jpl.nasa.gov/api/horizons.api",
//! ));
//! let engine = ChartEngine::new(config)?;
//! let moment = engine.moment("2002-10-03", "11:00", "Paris, France");
//! let chart = engine.compute_chart_angles(&moment).await?;
//! println!("Ascendant: {}", chart.ascendant_placement());
//! ```

pub mod engine;
pub mod error;
pub mod types;

pub use engine::{ChartConfig, ChartEngine, UtcStrategyKind};
pub use error::ChartError;
pub use types::{ChartAngles, ChartDiagnostics, CivilBirthMoment, PlacedPlanet};

// Re-export the types hosts need so callers depend on this crate alone.
pub use natal_angles::{
    HouseCusp, HouseMethod, HouseSystem, Sign, ZodiacPlacement, placement_of, sign_of,
};
pub use natal_geo::{GeoPlace, Gazetteer, MatchConfidence, PlaceResolution};
pub use natal_ingest::{
    ALL_PLANETS, AttemptOutcome, FallbackChain, IngestConfig, Planet, PlanetFetch,
    PlanetaryPosition, PositionProvider, SourceAttempt, SourceTier,
};
pub use natal_time::{TimeSource, UtcInstant, UtcStrategy};
