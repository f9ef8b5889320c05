//! Error types for chart computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use natal_ingest::ProviderError;
use natal_time::TimeError;

/// Errors from chart-engine construction or computation.
///
/// Ordinary bad input (unknown place, failed timezone lookup, missing
/// birth time, provider outages) never surfaces here; those degrade
/// gracefully and are annotated on the chart. Only contract violations
/// and configuration mistakes do.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Civil time conversion failed hard (malformed date string).
    Time(TimeError),
    /// Ingestion configuration was rejected.
    Ingest(ProviderError),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::Ingest(e) => write!(f, "ingest error: {e}"),
        }
    }
}

impl Error for ChartError {}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<ProviderError> for ChartError {
    fn from(e: ProviderError) -> Self {
        Self::Ingest(e)
    }
}
