//! The chart engine: wiring and the top-level computation.

use std::collections::BTreeMap;

use log::{debug, warn};

use natal_angles::{
    OBLIQUITY_DEG, ascendant_deg, build_house_system, house_of, is_polar, midheaven_deg,
    placement_of,
};
use natal_geo::{Gazetteer, PlaceResolution};
use natal_ingest::{FallbackChain, IngestConfig, PlanetFetch};
use natal_time::{
    SeasonalHeuristicStrategy, TzTableStrategy, UtcStrategy, convert_with_fallback,
    greenwich_sidereal_hours, julian_day, local_sidereal_hours,
};

use crate::error::ChartError;
use crate::types::{ChartAngles, CivilBirthMoment, PlacedPlanet, diagnostics_from};

/// Which civil-to-UTC strategy the engine runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UtcStrategyKind {
    /// Full IANA timezone table; exact across historical DST.
    #[default]
    TimezoneTable,
    /// Country seasonal-offset heuristic; for deployments without a
    /// timezone database.
    SeasonalHeuristic,
}

/// Engine configuration, explicit at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartConfig {
    pub ingest: IngestConfig,
    pub utc_strategy: UtcStrategyKind,
}

impl ChartConfig {
    pub fn new(ingest: IngestConfig) -> Self {
        Self {
            ingest,
            utc_strategy: UtcStrategyKind::default(),
        }
    }
}

/// The temporal–astronomical coordinate engine.
///
/// Holds the gazetteer, the selected conversion strategy, and the
/// position fallback chain. All angle/time math is pure; the only
/// network-bound step is the planetary-position fetch.
pub struct ChartEngine {
    gazetteer: Gazetteer,
    strategy: Box<dyn UtcStrategy + Send + Sync>,
    chain: FallbackChain,
}

impl ChartEngine {
    pub fn new(config: ChartConfig) -> Result<Self, ChartError> {
        let chain = FallbackChain::new(config.ingest)?;
        Ok(Self::with_chain(config.utc_strategy, chain))
    }

    /// Engine over a caller-supplied chain. Used by tests and by hosts
    /// that bring their own position sources.
    pub fn with_chain(strategy_kind: UtcStrategyKind, chain: FallbackChain) -> Self {
        let strategy: Box<dyn UtcStrategy + Send + Sync> = match strategy_kind {
            UtcStrategyKind::TimezoneTable => Box::new(TzTableStrategy),
            UtcStrategyKind::SeasonalHeuristic => Box::new(SeasonalHeuristicStrategy),
        };
        Self {
            gazetteer: Gazetteer::builtin(),
            strategy,
            chain,
        }
    }

    /// Resolve a free-text place name against the gazetteer.
    pub fn resolve_place(&self, query: &str) -> PlaceResolution {
        self.gazetteer.resolve(query)
    }

    /// Build a birth moment from a free-text place query.
    pub fn moment(
        &self,
        date: impl Into<String>,
        time: impl Into<String>,
        place_query: &str,
    ) -> CivilBirthMoment {
        CivilBirthMoment::new(date, time, self.resolve_place(place_query))
    }

    /// Compute the chart angles for a birth moment.
    ///
    /// Degrades gracefully on every recoverable condition, annotating
    /// the result; errors only on contract violations (malformed date),
    /// never on provider outages.
    pub async fn compute_chart_angles(
        &self,
        moment: &CivilBirthMoment,
    ) -> Result<ChartAngles, ChartError> {
        let place = &moment.place.place;

        let (utc, flags) =
            convert_with_fallback(self.strategy.as_ref(), &moment.date, &moment.time, place)?;
        debug!("birth moment {} at {} resolves to {utc} UTC", moment.date, place.name);

        let jd = julian_day(&utc);
        let gst = greenwich_sidereal_hours(jd);
        let lst = local_sidereal_hours(gst, place.longitude_deg);

        let degraded_angles = is_polar(place.latitude_deg);
        if degraded_angles {
            warn!(
                "latitude {} is in the polar clamp region, horizon angles are approximate",
                place.latitude_deg
            );
        }
        let asc = ascendant_deg(lst, place.latitude_deg, OBLIQUITY_DEG);
        let mc = midheaven_deg(lst);
        let houses = build_house_system(asc, mc, place.latitude_deg);

        let ingest = self.chain.fetch(&utc, place).await;

        let mut planets = BTreeMap::new();
        for fetch in ingest.fetches {
            let (placement, house) = match &fetch {
                PlanetFetch::Available(pos) => (
                    Some(placement_of(pos.longitude_deg)),
                    Some(house_of(pos.longitude_deg, &houses)),
                ),
                PlanetFetch::Unavailable { .. } => (None, None),
            };
            planets.insert(fetch.planet(), PlacedPlanet { fetch, placement, house });
        }

        Ok(ChartAngles {
            houses,
            planets,
            source: ingest.tier,
            attempts: ingest.attempts,
            diagnostics: diagnostics_from(
                moment.place.confidence,
                flags.time_source,
                flags.used_naive_fallback,
                flags.strategy,
                degraded_angles,
                ingest.tier,
                ingest.exhausted,
            ),
        })
    }
}
