//! Civil (local) wall-clock time to UTC.
//!
//! Two interchangeable strategies implement [`UtcStrategy`]:
//!
//! - [`TzTableStrategy`] interprets the wall clock in the place's IANA
//!   timezone via `chrono-tz`, which handles historical DST transitions
//!   exactly.
//! - [`SeasonalHeuristicStrategy`] needs no timezone database: it maps
//!   the place's country to a summer/winter offset pair and classifies
//!   the date with a fixed Mar 27 – Oct 27 summer window. Intentionally
//!   approximate.
//!
//! [`convert_with_fallback`] wraps either strategy: on conversion
//! failure it degrades to a naive same-offset conversion (local treated
//! as UTC) and flags the result instead of aborting the chart.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use log::warn;

use natal_geo::GeoPlace;

use crate::error::TimeError;
use crate::instant::UtcInstant;

/// Where the hour/minute used for the conversion came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSource {
    /// A recognizable time pattern was extracted from the input.
    Parsed,
    /// Nothing recognizable; noon was assumed. A documented precision
    /// loss that must be surfaced to the user, never hidden.
    AssumedNoon,
}

/// Diagnostic flags produced alongside every conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionFlags {
    pub time_source: TimeSource,
    /// The strategy failed and the naive same-offset conversion was
    /// substituted (usually wrong by the local UTC offset).
    pub used_naive_fallback: bool,
    /// Name of the strategy that was asked to convert.
    pub strategy: &'static str,
}

/// Civil-to-UTC conversion strategy.
pub trait UtcStrategy {
    /// Strategy name for diagnostics.
    fn name(&self) -> &'static str;

    /// Convert a local `YYYY-MM-DD` date and free-form time at a place
    /// into a UTC instant.
    fn to_utc(&self, date: &str, time: &str, place: &GeoPlace)
    -> Result<UtcInstant, TimeError>;
}

/// Extract a canonical `(hour, minute, second)` from a free-form time
/// string.
///
/// Recognizes `H[H]<sep>MM[<sep>SS]` with `:`, `.` or `h` separators
/// anywhere in the input, or a bare 1–2 digit hour. Anything else yields
/// `12:00` with [`TimeSource::AssumedNoon`].
pub fn coerce_time(raw: &str) -> (u32, u32, u32, TimeSource) {
    let bytes: Vec<char> = raw.chars().collect();
    let n = bytes.len();
    let mut i = 0;

    while i < n {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }
        // digit run of length 1-2
        let start = i;
        while i < n && bytes[i].is_ascii_digit() && i - start < 2 {
            i += 1;
        }
        if i < n && bytes[i].is_ascii_digit() {
            // longer digit run (e.g. a year); skip it entirely
            while i < n && bytes[i].is_ascii_digit() {
                i += 1;
            }
            continue;
        }
        let hour: u32 = bytes[start..i].iter().collect::<String>().parse().unwrap_or(0);
        if hour > 23 {
            continue;
        }

        let (minute, rest) = match take_two_digit_field(&bytes, i) {
            Some((m, next)) if m < 60 => (m, next),
            _ => {
                // bare hour with no minute field
                return (hour, 0, 0, TimeSource::Parsed);
            }
        };
        let second = match take_two_digit_field(&bytes, rest) {
            Some((s, _)) if s < 60 => s,
            _ => 0,
        };
        return (hour, minute, second, TimeSource::Parsed);
    }

    (12, 0, 0, TimeSource::AssumedNoon)
}

/// Parse `<sep>DD` at position `i`, returning the value and the index
/// past it.
fn take_two_digit_field(chars: &[char], i: usize) -> Option<(u32, usize)> {
    let sep = *chars.get(i)?;
    if sep != ':' && sep != '.' && sep != 'h' && sep != 'H' {
        return None;
    }
    let a = *chars.get(i + 1)?;
    let b = *chars.get(i + 2)?;
    if !a.is_ascii_digit() || !b.is_ascii_digit() {
        return None;
    }
    let value = a.to_digit(10)? * 10 + b.to_digit(10)?;
    Some((value, i + 3))
}

fn parse_date(date: &str) -> Result<NaiveDate, TimeError> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|_| TimeError::InvalidDate(date.to_string()))
}

/// IANA timezone-table strategy.
///
/// Exact for historical DST transitions; requires the place to carry a
/// known timezone identifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct TzTableStrategy;

impl UtcStrategy for TzTableStrategy {
    fn name(&self) -> &'static str {
        "tz-table"
    }

    fn to_utc(&self, date: &str, time: &str, place: &GeoPlace)
    -> Result<UtcInstant, TimeError> {
        let date = parse_date(date)?;
        let (hour, minute, second, _) = coerce_time(time);

        let tz: Tz = place
            .timezone_id
            .parse()
            .map_err(|_| TimeError::UnknownTimezone(place.timezone_id.to_string()))?;

        let naive_time = NaiveTime::from_hms_opt(hour, minute, second)
            .ok_or_else(|| TimeError::InvalidTime(time.to_string()))?;
        let naive = NaiveDateTime::new(date, naive_time);

        // Ambiguous wall-clock times (fall-back overlap) take the earlier
        // instant; nonexistent ones (spring-forward gap) are an error the
        // caller degrades from.
        let local = tz
            .from_local_datetime(&naive)
            .earliest()
            .ok_or(TimeError::NonexistentLocalTime)?;
        let utc = local.with_timezone(&Utc).naive_utc();

        Ok(UtcInstant::new(
            utc.year(),
            utc.month(),
            utc.day(),
            utc.hour(),
            utc.minute(),
            utc.second() as f64,
        ))
    }
}

/// Country seasonal-offset table: `(country, summer_h, winter_h)`.
///
/// Offsets are hours ahead of UTC during the fixed summer window and
/// outside it. Countries without DST repeat the same value. The window
/// is wrong for the southern hemisphere; the heuristic is a last resort
/// when no timezone table is available.
const COUNTRY_OFFSETS: &[(&str, f64, f64)] = &[
    ("France", 2.0, 1.0),
    ("Germany", 2.0, 1.0),
    ("Spain", 2.0, 1.0),
    ("Italy", 2.0, 1.0),
    ("Belgium", 2.0, 1.0),
    ("Netherlands", 2.0, 1.0),
    ("Switzerland", 2.0, 1.0),
    ("Austria", 2.0, 1.0),
    ("Poland", 2.0, 1.0),
    ("Sweden", 2.0, 1.0),
    ("Norway", 2.0, 1.0),
    ("Denmark", 2.0, 1.0),
    ("Portugal", 1.0, 0.0),
    ("United Kingdom", 1.0, 0.0),
    ("Ireland", 1.0, 0.0),
    ("Greece", 3.0, 2.0),
    ("Turkey", 3.0, 3.0),
    ("Russia", 3.0, 3.0),
    ("Egypt", 2.0, 2.0),
    ("Morocco", 1.0, 0.0),
    ("Senegal", 0.0, 0.0),
    ("United States", -4.0, -5.0),
    ("Canada", -4.0, -5.0),
    ("Mexico", -6.0, -6.0),
    ("Brazil", -3.0, -3.0),
    ("Argentina", -3.0, -3.0),
    ("Japan", 9.0, 9.0),
    ("China", 8.0, 8.0),
    ("India", 5.5, 5.5),
    ("Australia", 10.0, 11.0),
];

/// Seasonal-offset heuristic strategy.
///
/// Summer window: [Mar 27, Oct 27] inclusive, every year.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeasonalHeuristicStrategy;

impl SeasonalHeuristicStrategy {
    fn offset_hours(country: &str, month: u32, day: u32) -> Option<f64> {
        let (_, summer, winter) = COUNTRY_OFFSETS
            .iter()
            .find(|(name, _, _)| name.eq_ignore_ascii_case(country))?;
        Some(if in_summer_window(month, day) { *summer } else { *winter })
    }
}

/// Whether a date falls inside the fixed summer window.
fn in_summer_window(month: u32, day: u32) -> bool {
    let after_start = month > 3 || (month == 3 && day >= 27);
    let before_end = month < 10 || (month == 10 && day <= 27);
    after_start && before_end
}

/// Country of a place: the explicit field, else the token after the last
/// comma of the name.
fn country_of(place: &GeoPlace) -> &str {
    if !place.country.is_empty() {
        return place.country;
    }
    place
        .name
        .rsplit(',')
        .next()
        .map(str::trim)
        .unwrap_or("")
}

impl UtcStrategy for SeasonalHeuristicStrategy {
    fn name(&self) -> &'static str {
        "seasonal-heuristic"
    }

    fn to_utc(&self, date: &str, time: &str, place: &GeoPlace)
    -> Result<UtcInstant, TimeError> {
        let parsed = parse_date(date)?;
        let (hour, minute, second, _) = coerce_time(time);

        let country = country_of(place);
        let offset_h = Self::offset_hours(country, parsed.month(), parsed.day())
            .ok_or_else(|| TimeError::UnknownCountry(country.to_string()))?;

        let mut year = parsed.year();
        let mut month = parsed.month();
        let mut day = parsed.day();
        let mut minutes = hour as i64 * 60 + minute as i64 - (offset_h * 60.0).round() as i64;

        // Borrow/carry whole civil days until the minutes are in range.
        while minutes < 0 {
            minutes += 1440;
            day -= 1;
            if day == 0 {
                month = if month == 1 { 12 } else { month - 1 };
                if month == 12 {
                    year -= 1;
                }
                day = days_in_month(year, month);
            }
        }
        while minutes >= 1440 {
            minutes -= 1440;
            day += 1;
            if day > days_in_month(year, month) {
                day = 1;
                month += 1;
                if month > 12 {
                    month = 1;
                    year += 1;
                }
            }
        }

        Ok(UtcInstant::new(
            year,
            month,
            day,
            (minutes / 60) as u32,
            (minutes % 60) as u32,
            second as f64,
        ))
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 {
                29
            } else {
                28
            }
        }
    }
}

/// Convert with the degradation envelope.
///
/// Strategy errors other than an unparseable date fall back to the
/// naive same-offset conversion (local treated as UTC) with
/// `used_naive_fallback` set. An unparseable date is a contract
/// violation and propagates as a hard error.
pub fn convert_with_fallback(
    strategy: &dyn UtcStrategy,
    date: &str,
    time: &str,
    place: &GeoPlace,
) -> Result<(UtcInstant, ConversionFlags), TimeError> {
    let (hour, minute, second, time_source) = coerce_time(time);
    let mut flags = ConversionFlags {
        time_source,
        used_naive_fallback: false,
        strategy: strategy.name(),
    };

    match strategy.to_utc(date, time, place) {
        Ok(utc) => Ok((utc, flags)),
        Err(e @ TimeError::InvalidDate(_)) => Err(e),
        Err(e) => {
            warn!(
                "civil-to-UTC via {} failed for {}: {e}; using naive same-offset conversion",
                strategy.name(),
                place.name
            );
            let parsed = parse_date(date)?;
            flags.used_naive_fallback = true;
            Ok((
                UtcInstant::new(
                    parsed.year(),
                    parsed.month(),
                    parsed.day(),
                    hour,
                    minute,
                    second as f64,
                ),
                flags,
            ))
        }
    }
}
