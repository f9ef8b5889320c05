//! Chart input and output types.

use std::collections::BTreeMap;

use serde::Serialize;

use natal_angles::{HouseSystem, ZodiacPlacement, placement_of};
use natal_geo::{MatchConfidence, PlaceResolution};
use natal_ingest::{Planet, PlanetFetch, SourceAttempt, SourceTier};
use natal_time::TimeSource;

/// A birth moment as the user gave it: local civil date and time at a
/// resolved place.
#[derive(Debug, Clone, PartialEq)]
pub struct CivilBirthMoment {
    /// Local calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Local wall-clock time, free-form (coerced during conversion).
    pub time: String,
    /// Resolved birth place with its match confidence.
    pub place: PlaceResolution,
}

impl CivilBirthMoment {
    pub fn new(date: impl Into<String>, time: impl Into<String>, place: PlaceResolution) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            place,
        }
    }
}

/// One chart body with its placement, or its recorded unavailability.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedPlanet {
    pub fetch: PlanetFetch,
    /// Sign placement; `None` when the planet was unavailable.
    pub placement: Option<ZodiacPlacement>,
    /// House number 1..=12; `None` when the planet was unavailable.
    pub house: Option<u8>,
}

/// Machine-readable degradation flags carried on every chart.
///
/// A silent heuristic default must never look like a precise answer;
/// each recoverable fallback taken during computation sets its flag
/// here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartDiagnostics {
    /// Confidence of the place match; `Fallback` means the default
    /// place was substituted.
    pub place_confidence: MatchConfidence,
    /// Birth time was unrecognizable and noon was assumed.
    pub assumed_noon: bool,
    /// Timezone conversion failed; local time was treated as UTC.
    pub used_naive_fallback: bool,
    /// Which conversion strategy ran.
    pub utc_strategy: &'static str,
    /// Latitude fell in the polar clamp region; horizon angles are
    /// approximate.
    pub degraded_angles: bool,
    /// Positions come from the offline mean-element table.
    pub mock_data: bool,
    /// Every position source failed; mock data was substituted.
    pub all_sources_exhausted: bool,
}

impl ChartDiagnostics {
    /// Whether any degradation occurred.
    pub fn degraded(&self) -> bool {
        self.place_confidence == MatchConfidence::Fallback
            || self.assumed_noon
            || self.used_naive_fallback
            || self.degraded_angles
            || self.mock_data
            || self.all_sources_exhausted
    }
}

/// The engine's final output: house system, placed planets, provenance.
///
/// Built once per request and treated as read-only downstream. Planet
/// iteration order is fixed (BTreeMap), so identical inputs serialize
/// identically.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartAngles {
    pub houses: HouseSystem,
    pub planets: BTreeMap<Planet, PlacedPlanet>,
    /// Tier that supplied the planetary positions.
    pub source: SourceTier,
    /// Every source attempt, in order.
    pub attempts: Vec<SourceAttempt>,
    pub diagnostics: ChartDiagnostics,
}

impl ChartAngles {
    /// Sign placement of the Ascendant, derived from the stored angle.
    pub fn ascendant_placement(&self) -> ZodiacPlacement {
        placement_of(self.houses.ascendant_deg)
    }

    /// Sign placement of the Midheaven, derived from the stored angle.
    pub fn midheaven_placement(&self) -> ZodiacPlacement {
        placement_of(self.houses.mc_deg)
    }

    /// Whether any fallback or degradation was involved.
    pub fn degraded(&self) -> bool {
        self.diagnostics.degraded()
    }
}

/// Internal: diagnostics assembled from conversion flags.
pub(crate) fn diagnostics_from(
    place_confidence: MatchConfidence,
    time_source: TimeSource,
    used_naive_fallback: bool,
    utc_strategy: &'static str,
    degraded_angles: bool,
    source: SourceTier,
    exhausted: bool,
) -> ChartDiagnostics {
    ChartDiagnostics {
        place_confidence,
        assumed_noon: time_source == TimeSource::AssumedNoon,
        used_naive_fallback,
        utc_strategy,
        degraded_angles,
        mock_data: source == SourceTier::MockData,
        all_sources_exhausted: exhausted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_diagnostics_not_degraded() {
        let d = diagnostics_from(
            MatchConfidence::Exact,
            TimeSource::Parsed,
            false,
            "tz-table",
            false,
            SourceTier::ComputeService,
            false,
        );
        assert!(!d.degraded());
    }

    #[test]
    fn each_flag_degrades() {
        let base = diagnostics_from(
            MatchConfidence::Exact,
            TimeSource::Parsed,
            false,
            "tz-table",
            false,
            SourceTier::ComputeService,
            false,
        );

        let mut d = base;
        d.place_confidence = MatchConfidence::Fallback;
        assert!(d.degraded());

        let mut d = base;
        d.assumed_noon = true;
        assert!(d.degraded());

        let mut d = base;
        d.used_naive_fallback = true;
        assert!(d.degraded());

        let mut d = base;
        d.degraded_angles = true;
        assert!(d.degraded());

        let mut d = base;
        d.mock_data = true;
        assert!(d.degraded());
    }

    #[test]
    fn partial_place_match_is_not_degraded() {
        let mut d = diagnostics_from(
            MatchConfidence::Partial,
            TimeSource::Parsed,
            false,
            "tz-table",
            false,
            SourceTier::EphemerisApi,
            false,
        );
        assert!(!d.degraded());
        d.mock_data = true;
        assert!(d.degraded());
    }
}
