//! End-to-end chart computation against stub position sources.

use std::time::Duration;

use async_trait::async_trait;

use natal_chart::{
    ALL_PLANETS, ChartEngine, FallbackChain, GeoPlace, MatchConfidence, Planet, PlanetFetch,
    PlanetaryPosition, PositionProvider, Sign, SourceTier, UtcInstant, UtcStrategyKind,
};
use natal_ingest::ProviderError;

/// Deterministic stand-in for the compute microservice.
struct FixedSource {
    planets: Vec<(Planet, f64)>,
}

impl FixedSource {
    fn complete() -> Self {
        Self {
            planets: ALL_PLANETS.iter().map(|&p| (p, 17.0 + 31.0 * p as u8 as f64)).collect(),
        }
    }
}

#[async_trait]
impl PositionProvider for FixedSource {
    fn tier(&self) -> SourceTier {
        SourceTier::ComputeService
    }

    async fn fetch_positions(
        &self,
        utc: &UtcInstant,
        _place: &GeoPlace,
    ) -> Result<Vec<PlanetFetch>, ProviderError> {
        Ok(self
            .planets
            .iter()
            .map(|&(planet, longitude_deg)| {
                PlanetFetch::Available(PlanetaryPosition {
                    planet,
                    longitude_deg,
                    latitude_deg: 0.0,
                    distance_au: 1.0,
                    magnitude: None,
                    source_timestamp: utc.to_string(),
                })
            })
            .collect())
    }
}

struct DownSource(SourceTier);

#[async_trait]
impl PositionProvider for DownSource {
    fn tier(&self) -> SourceTier {
        self.0
    }

    async fn fetch_positions(
        &self,
        _utc: &UtcInstant,
        _place: &GeoPlace,
    ) -> Result<Vec<PlanetFetch>, ProviderError> {
        Err(ProviderError::Http("connection refused".to_string()))
    }
}

fn engine_with(providers: Vec<Box<dyn PositionProvider>>) -> ChartEngine {
    ChartEngine::with_chain(
        UtcStrategyKind::TimezoneTable,
        FallbackChain::with_providers(providers, Duration::from_secs(1)),
    )
}

#[tokio::test]
async fn reference_chart_end_to_end() {
    let engine = engine_with(vec![Box::new(FixedSource::complete())]);
    let moment = engine.moment("2002-10-03", "11:00", "Paris, France");
    assert_eq!(moment.place.confidence, MatchConfidence::Exact);

    let chart = engine.compute_chart_angles(&moment).await.unwrap();

    let asc = chart.ascendant_placement();
    assert_eq!(asc.sign, Sign::Scorpio, "Ascendant = {asc}");
    assert!((chart.houses.ascendant_deg - 222.83).abs() < 3.0);

    assert_eq!(chart.planets.len(), 10);
    assert!(!chart.degraded());
    assert_eq!(chart.source, SourceTier::ComputeService);

    // Every available planet carries a placement and a house
    for placed in chart.planets.values() {
        assert!(placed.placement.is_some());
        let house = placed.house.unwrap();
        assert!((1..=12).contains(&house));
    }
}

#[tokio::test]
async fn fallback_completeness_when_all_sources_fail() {
    let engine = engine_with(vec![
        Box::new(DownSource(SourceTier::ComputeService)),
        Box::new(DownSource(SourceTier::EphemerisApi)),
    ]);
    let moment = engine.moment("2002-10-03", "11:00", "Paris, France");

    let chart = engine.compute_chart_angles(&moment).await.unwrap();

    assert_eq!(chart.source, SourceTier::MockData);
    assert!(chart.diagnostics.all_sources_exhausted);
    assert!(chart.diagnostics.mock_data);
    assert!(chart.degraded());
    // Still a complete chart
    assert_eq!(chart.planets.len(), 10);
    assert!(chart.planets.values().all(|p| p.placement.is_some()));
    assert_eq!(chart.attempts.len(), 2);
}

#[tokio::test]
async fn unresolved_place_is_flagged_not_fatal() {
    let engine = engine_with(vec![Box::new(FixedSource::complete())]);
    let moment = engine.moment("2002-10-03", "11:00", "Atlantis");
    assert_eq!(moment.place.confidence, MatchConfidence::Fallback);
    assert_eq!(moment.place.place.name, "Paris, France");

    let chart = engine.compute_chart_angles(&moment).await.unwrap();
    assert_eq!(chart.diagnostics.place_confidence, MatchConfidence::Fallback);
    assert!(chart.degraded());
}

#[tokio::test]
async fn unknown_birth_time_assumes_noon() {
    let engine = engine_with(vec![Box::new(FixedSource::complete())]);
    let moment = engine.moment("2002-10-03", "time unknown", "Paris, France");

    let chart = engine.compute_chart_angles(&moment).await.unwrap();
    assert!(chart.diagnostics.assumed_noon);
    assert!(chart.degraded());
}

#[tokio::test]
async fn malformed_date_is_a_hard_error() {
    let engine = engine_with(vec![Box::new(FixedSource::complete())]);
    let moment = engine.moment("03/10/2002", "11:00", "Paris, France");

    assert!(engine.compute_chart_angles(&moment).await.is_err());
}

#[tokio::test]
async fn idempotent_for_identical_input() {
    let engine = engine_with(vec![Box::new(FixedSource::complete())]);
    let moment = engine.moment("2002-10-03", "11:00", "Paris, France");

    let a = engine.compute_chart_angles(&moment).await.unwrap();
    let b = engine.compute_chart_angles(&moment).await.unwrap();

    assert_eq!(a, b);
    let a_json = serde_json::to_string(&a).unwrap();
    let b_json = serde_json::to_string(&b).unwrap();
    assert_eq!(a_json, b_json);
}

#[tokio::test]
async fn partial_planet_failure_keeps_siblings() {
    struct PartialSource;

    #[async_trait]
    impl PositionProvider for PartialSource {
        fn tier(&self) -> SourceTier {
            SourceTier::EphemerisApi
        }

        async fn fetch_positions(
            &self,
            utc: &UtcInstant,
            _place: &GeoPlace,
        ) -> Result<Vec<PlanetFetch>, ProviderError> {
            Ok(ALL_PLANETS
                .iter()
                .map(|&planet| {
                    if planet == Planet::Moon {
                        PlanetFetch::Unavailable {
                            planet,
                            reason: "rate limited".to_string(),
                        }
                    } else {
                        PlanetFetch::Available(PlanetaryPosition {
                            planet,
                            longitude_deg: 200.0,
                            latitude_deg: 0.0,
                            distance_au: 1.0,
                            magnitude: None,
                            source_timestamp: utc.to_string(),
                        })
                    }
                })
                .collect())
        }
    }

    let engine = engine_with(vec![Box::new(PartialSource)]);
    let moment = engine.moment("2002-10-03", "11:00", "Paris, France");
    let chart = engine.compute_chart_angles(&moment).await.unwrap();

    let moon = &chart.planets[&Planet::Moon];
    assert!(moon.placement.is_none());
    assert!(moon.house.is_none());
    assert!(matches!(moon.fetch, PlanetFetch::Unavailable { .. }));

    let placed = chart.planets.values().filter(|p| p.placement.is_some()).count();
    assert_eq!(placed, 9);
    assert_eq!(chart.source, SourceTier::EphemerisApi);
}

#[tokio::test]
async fn seasonal_heuristic_strategy_end_to_end() {
    let engine = ChartEngine::with_chain(
        UtcStrategyKind::SeasonalHeuristic,
        FallbackChain::with_providers(
            vec![Box::new(FixedSource::complete())],
            Duration::from_secs(1),
        ),
    );
    let moment = engine.moment("2002-10-03", "11:00", "Paris, France");
    let chart = engine.compute_chart_angles(&moment).await.unwrap();

    assert_eq!(chart.diagnostics.utc_strategy, "seasonal-heuristic");
    // Same UTC instant as the timezone table for this date, so the
    // Ascendant matches the reference chart.
    assert_eq!(chart.ascendant_placement().sign, Sign::Scorpio);
}

#[tokio::test]
async fn polar_latitude_flags_degraded_angles() {
    static POLE: &[GeoPlace] = &[GeoPlace {
        name: "Alert, Canada",
        latitude_deg: 89.95,
        longitude_deg: -62.34,
        altitude_km: 0.03,
        timezone_id: "America/Toronto",
        country: "Canada",
    }];

    let engine = engine_with(vec![Box::new(FixedSource::complete())]);
    let gaz = natal_chart::Gazetteer::with_entries(POLE);
    let moment = natal_chart::CivilBirthMoment::new("2002-10-03", "11:00", gaz.resolve("Alert, Canada"));

    let chart = engine.compute_chart_angles(&moment).await.unwrap();
    assert!(chart.diagnostics.degraded_angles);
    assert!(chart.degraded());
    // Angles are still defined and in range
    assert!((0.0..360.0).contains(&chart.houses.ascendant_deg));
}
