//! Secondary source: a Horizons-style ephemeris HTTP API.
//!
//! One GET per planet. The API wraps a plain-text ephemeris table in a
//! JSON envelope; the rows of interest sit between the `$$SOE` and
//! `$$EOE` markers, with right ascension and declination in sexagesimal
//! columns. The API is request-rate sensitive, so the per-planet loop is
//! serialized with a fixed delay rather than issued concurrently.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;
use urlencoding::encode;

use natal_angles::{OBLIQUITY_DEG, equatorial_to_ecliptic_deg};
use natal_geo::GeoPlace;
use natal_time::UtcInstant;

use crate::error::ProviderError;
use crate::planet::{ALL_PLANETS, Planet};
use crate::types::{PlanetFetch, PlanetaryPosition, PositionProvider, SourceTier};

#[derive(Debug, Deserialize)]
struct HorizonsResponse {
    result: String,
}

/// HTTP client for the ephemeris API.
pub struct HorizonsProvider {
    client: Client,
    base_url: String,
    inter_request_delay: Duration,
}

impl HorizonsProvider {
    pub fn new(client: Client, base_url: impl Into<String>, inter_request_delay: Duration) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            inter_request_delay,
        }
    }

    fn query_url(&self, planet: Planet, date: &str, time: &str) -> String {
        let start = format!("{date} {time}");
        format!(
            "{}?format=json&COMMAND={}&OBJ_DATA=YES&MAKE_EPHEM=YES&EPHEM_TYPE=OBSERVER\
             &CENTER=500@399&START_TIME='{}'&STOP_TIME='{}'&STEP_SIZE='1m'&QUANTITIES='1,9,20'",
            self.base_url.trim_end_matches('/'),
            encode(planet.horizons_id()),
            encode(&start),
            encode(&start),
        )
    }

    async fn fetch_one(
        &self,
        planet: Planet,
        utc: &UtcInstant,
    ) -> Result<PlanetaryPosition, ProviderError> {
        let date = format!("{:04}-{:02}-{:02}", utc.year, utc.month, utc.day);
        let time = format!("{:02}:{:02}", utc.hour, utc.minute);
        let url = self.query_url(planet, &date, &time);
        debug!("ephemeris-api request for {planet}: {url}");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ProviderError::Status(response.status().as_u16()));
        }
        let parsed: HorizonsResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        parse_ephemeris_row(&parsed.result, planet, &utc.to_string())
    }
}

/// Extract the first data row between `$$SOE` and `$$EOE` and convert
/// its RA/Dec columns to an ecliptic position.
///
/// Expected row shape (whitespace separated):
/// `date time RAh RAm RAs DECsign_d DECm DECs [mag] [delta] ...`
fn parse_ephemeris_row(
    result: &str,
    planet: Planet,
    stamp: &str,
) -> Result<PlanetaryPosition, ProviderError> {
    let lines: Vec<&str> = result.lines().collect();
    let soe = lines.iter().position(|l| l.contains("$$SOE"));
    let eoe = lines.iter().position(|l| l.contains("$$EOE"));
    let (Some(soe), Some(eoe)) = (soe, eoe) else {
        return Err(ProviderError::Parse("no $$SOE/$$EOE markers".to_string()));
    };

    for line in &lines[soe + 1..eoe] {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 8 {
            continue;
        }

        let ra_h: f64 = parse_field(parts[2])?;
        let ra_m: f64 = parse_field(parts[3])?;
        let ra_s: f64 = parse_field(parts[4])?;
        let ra_deg = (ra_h + ra_m / 60.0 + ra_s / 3600.0) * 15.0;

        let dec_field = parts[5];
        let negative = dec_field.starts_with('-');
        let dec_d: f64 = parse_field(dec_field.trim_start_matches(['+', '-']))?;
        let dec_m: f64 = parse_field(parts[6])?;
        let dec_s: f64 = parse_field(parts[7])?;
        let mut dec_deg = dec_d + dec_m / 60.0 + dec_s / 3600.0;
        if negative {
            dec_deg = -dec_deg;
        }

        let magnitude = parts.get(8).and_then(|s| s.parse::<f64>().ok());
        let distance_au = parts
            .get(9)
            .and_then(|s| s.parse::<f64>().ok())
            .unwrap_or(0.0)
            .max(0.0);

        return Ok(PlanetaryPosition {
            planet,
            longitude_deg: equatorial_to_ecliptic_deg(ra_deg, dec_deg, OBLIQUITY_DEG),
            latitude_deg: 0.0,
            distance_au,
            magnitude,
            source_timestamp: stamp.to_string(),
        });
    }

    Err(ProviderError::Parse("no data rows in ephemeris table".to_string()))
}

fn parse_field(s: &str) -> Result<f64, ProviderError> {
    s.parse::<f64>()
        .map_err(|_| ProviderError::Parse(format!("bad numeric field {s:?}")))
}

#[async_trait]
impl PositionProvider for HorizonsProvider {
    fn tier(&self) -> SourceTier {
        SourceTier::EphemerisApi
    }

    async fn fetch_positions(
        &self,
        utc: &UtcInstant,
        _place: &GeoPlace,
    ) -> Result<Vec<PlanetFetch>, ProviderError> {
        let mut fetches = Vec::with_capacity(ALL_PLANETS.len());
        for (i, planet) in ALL_PLANETS.into_iter().enumerate() {
            // Rate-limit discipline: serialize per-planet requests.
            if i > 0 && !self.inter_request_delay.is_zero() {
                tokio::time::sleep(self.inter_request_delay).await;
            }
            match self.fetch_one(planet, utc).await {
                Ok(position) => fetches.push(PlanetFetch::Available(position)),
                Err(e) => fetches.push(PlanetFetch::Unavailable {
                    planet,
                    reason: e.to_string(),
                }),
            }
        }
        Ok(fetches)
    }
}
