//! Planetary-position ingestion with a tiered fallback chain.
//!
//! This crate provides:
//! - [`PositionProvider`], the async trait every upstream source
//!   implements; the chain does not care whether a source is an HTTP
//!   call or a local table, only the response/error shape matters
//! - [`ComputeServiceProvider`] (primary), [`HorizonsProvider`]
//!   (secondary), [`MeanElementsProvider`] (tertiary, offline)
//! - [`FallbackChain`], which tries the sources in order with a bounded
//!   per-source timeout and records every attempt
//!
//! Cancellation is drop-based: all awaits are cancel-safe, so dropping a
//! chain future abandons outstanding requests and timers.

pub mod chain;
pub mod compute_service;
pub mod error;
pub mod horizons;
pub mod mean_elements;
pub mod planet;
pub mod types;

pub use chain::FallbackChain;
pub use compute_service::ComputeServiceProvider;
pub use error::ProviderError;
pub use horizons::HorizonsProvider;
pub use mean_elements::{MeanElementsProvider, mean_positions};
pub use planet::{ALL_PLANETS, Planet};
pub use types::{
    AttemptOutcome, IngestConfig, IngestResult, PlanetFetch, PlanetaryPosition, PositionProvider,
    SourceAttempt, SourceTier,
};
