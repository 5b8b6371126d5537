//! Free-form duration phrases, canonically stored as whole minutes.
//!
//! Matching order: a single value+unit pair (`2h`, `30 minutes`,
//! `1.25 hours`), then a compound `<hours>h <minutes>m` where either
//! half may be absent, then a bare integer taken as minutes. Empty
//! input means "no duration" rather than an error.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};

const MINUTES_PER_HOUR: i64 = 60;

static SIMPLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(\d+(?:\.\d+)?)\s*(h|hours?|m|mins?|minutes?)$").unwrap()
});

static COMPOUND: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:(\d+)\s*h(?:ours?)?)?\s*(?:(\d+)\s*m(?:inutes?)?)?$").unwrap()
});

/// Parses a duration phrase into minutes; `Ok(None)` for blank input.
pub fn parse_duration(input: &str) -> Result<Option<i64>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    if let Some(caps) = SIMPLE.captures(trimmed) {
        let value: f64 = caps[1]
            .parse()
            .map_err(|_| Error::InvalidDuration(input.to_string()))?;
        let minutes = if caps[2].to_lowercase().starts_with('h') {
            (value * MINUTES_PER_HOUR as f64) as i64
        } else {
            value as i64
        };
        return Ok(Some(minutes));
    }

    if let Some(caps) = COMPOUND.captures(trimmed) {
        let hours: i64 = caps
            .get(1)
            .map_or(Ok(0), |m| m.as_str().parse())
            .map_err(|_| Error::InvalidDuration(input.to_string()))?;
        let minutes: i64 = caps
            .get(2)
            .map_or(Ok(0), |m| m.as_str().parse())
            .map_err(|_| Error::InvalidDuration(input.to_string()))?;
        if hours == 0 && minutes == 0 {
            return Ok(None);
        }
        return Ok(Some(hours * MINUTES_PER_HOUR + minutes));
    }

    if let Ok(minutes) = trimmed.parse::<i64>() {
        return Ok(Some(minutes));
    }

    Err(Error::InvalidDuration(input.to_string()))
}

/// Compact display form: `2h 30m`, `2h` or `45m`.
pub fn format_duration(total_minutes: i64) -> String {
    let hours = total_minutes / MINUTES_PER_HOUR;
    let minutes = total_minutes % MINUTES_PER_HOUR;
    if hours > 0 && minutes > 0 {
        format!("{hours}h {minutes}m")
    } else if hours > 0 {
        format!("{hours}h")
    } else {
        format!("{minutes}m")
    }
}

/// Canonical storage form: the bare minute count.
pub fn format_for_storage(total_minutes: i64) -> String {
    total_minutes.to_string()
}

/// Strict inverse of [`format_for_storage`].
pub fn parse_from_storage(input: &str) -> Result<i64> {
    input
        .trim()
        .parse()
        .map_err(|_| Error::InvalidDuration(input.to_string()))
}
