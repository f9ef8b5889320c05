//! The tiered fallback chain.
//!
//! Sources are tried strictly in order; a failed or timed-out source is
//! never retried, the chain simply advances, so worst-case latency is
//! bounded by the sum of the per-source timeouts. Every attempt is
//! recorded so the caller can see exactly which tier answered.

use std::time::Duration;

use log::{debug, warn};
use reqwest::Client;
use tokio::time::timeout;

use natal_geo::GeoPlace;
use natal_time::UtcInstant;

use crate::compute_service::ComputeServiceProvider;
use crate::error::ProviderError;
use crate::horizons::HorizonsProvider;
use crate::mean_elements::{MeanElementsProvider, mean_positions};
use crate::types::{
    AttemptOutcome, IngestConfig, IngestResult, PositionProvider, SourceAttempt, SourceTier,
};

/// Ordered chain of position sources with a bounded per-source timeout.
pub struct FallbackChain {
    providers: Vec<Box<dyn PositionProvider>>,
    request_timeout: Duration,
}

impl FallbackChain {
    /// Build the production chain: compute service, ephemeris API, mean
    /// elements.
    pub fn new(config: IngestConfig) -> Result<Self, ProviderError> {
        config.validate()?;
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ProviderError::Http(e.to_string()))?;

        let providers: Vec<Box<dyn PositionProvider>> = vec![
            Box::new(ComputeServiceProvider::new(
                client.clone(),
                config.compute_base_url.clone(),
            )),
            Box::new(HorizonsProvider::new(
                client,
                config.ephemeris_base_url.clone(),
                config.inter_request_delay,
            )),
            Box::new(MeanElementsProvider),
        ];
        Ok(Self {
            providers,
            request_timeout: config.request_timeout,
        })
    }

    /// Chain over caller-supplied sources. Used by tests and by hosts
    /// that bring their own providers.
    pub fn with_providers(
        providers: Vec<Box<dyn PositionProvider>>,
        request_timeout: Duration,
    ) -> Self {
        Self {
            providers,
            request_timeout,
        }
    }

    /// Run the chain for one chart.
    ///
    /// A source succeeds when it returns at least one available planet;
    /// partial results are kept as-is (one planet's failure never nulls
    /// out the others). If every source fails, mean-element data is
    /// substituted and the result is marked exhausted.
    pub async fn fetch(&self, utc: &UtcInstant, place: &GeoPlace) -> IngestResult {
        let mut attempts = Vec::with_capacity(self.providers.len());

        for provider in &self.providers {
            let tier = provider.tier();
            debug!("trying position source {tier}");

            match timeout(self.request_timeout, provider.fetch_positions(utc, place)).await {
                Err(_) => {
                    warn!("position source {tier} timed out");
                    attempts.push(SourceAttempt {
                        tier,
                        outcome: AttemptOutcome::TimedOut,
                    });
                }
                Ok(Err(e)) => {
                    warn!("position source {tier} failed: {e}");
                    attempts.push(SourceAttempt {
                        tier,
                        outcome: AttemptOutcome::Failed { reason: e.to_string() },
                    });
                }
                Ok(Ok(fetches)) => {
                    let available = fetches.iter().filter(|f| f.is_available()).count();
                    let unavailable = fetches.len() - available;
                    if available == 0 {
                        warn!("position source {tier} returned no available planets");
                        attempts.push(SourceAttempt {
                            tier,
                            outcome: AttemptOutcome::Failed {
                                reason: "no planets available".to_string(),
                            },
                        });
                        continue;
                    }
                    attempts.push(SourceAttempt {
                        tier,
                        outcome: AttemptOutcome::Succeeded { available, unavailable },
                    });
                    return IngestResult {
                        fetches,
                        tier,
                        attempts,
                        exhausted: false,
                    };
                }
            }
        }

        warn!("all position sources exhausted, substituting mean-element data");
        IngestResult {
            fetches: mean_positions(utc),
            tier: SourceTier::MockData,
            attempts,
            exhausted: true,
        }
    }
}
