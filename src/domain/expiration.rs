//! Expiration offsets and the wall-clock boundary
//!
//! Expiration specs are human-readable duration strings ("10 days",
//! "1.5h", bare milliseconds). Wall-clock time is sampled in exactly one
//! place and always as whole seconds, so both sides of the expiration
//! comparison share a unit.

use chrono::{Duration, Utc};

use super::error::TokenError;

/// Current time in whole seconds since the Unix epoch.
///
/// The only place the codec reads the clock.
pub fn now_epoch_secs() -> i64 {
    Utc::now().timestamp()
}

/// Parse a duration spec such as "10 days", "1.5h", "30s" or "2000"
/// (bare values are milliseconds) into an offset.
pub fn parse_duration(spec: &str) -> Result<Duration, TokenError> {
    let spec = spec.trim();
    if spec.is_empty() {
        return Err(TokenError::configuration("expiration spec cannot be empty"));
    }

    let value_end = spec
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-'))
        .unwrap_or(spec.len());
    let (value_part, unit_part) = spec.split_at(value_end);

    let value: f64 = value_part.parse().map_err(|_| {
        TokenError::configuration(format!("invalid duration value in spec '{}'", spec))
    })?;
    if !value.is_finite() {
        return Err(TokenError::configuration(format!(
            "invalid duration value in spec '{}'",
            spec
        )));
    }

    let millis_per_unit = match unit_part.trim().to_ascii_lowercase().as_str() {
        "" | "ms" | "msec" | "msecs" | "millisecond" | "milliseconds" => 1.0,
        "s" | "sec" | "secs" | "second" | "seconds" => 1_000.0,
        "m" | "min" | "mins" | "minute" | "minutes" => 60_000.0,
        "h" | "hr" | "hrs" | "hour" | "hours" => 3_600_000.0,
        "d" | "day" | "days" => 86_400_000.0,
        "w" | "week" | "weeks" => 604_800_000.0,
        // 365.25 days
        "y" | "yr" | "yrs" | "year" | "years" => 31_557_600_000.0,
        other => {
            return Err(TokenError::configuration(format!(
                "unknown duration unit '{}'",
                other
            )))
        }
    };

    let millis = (value * millis_per_unit).round();
    Duration::try_milliseconds(millis as i64).ok_or_else(|| {
        TokenError::configuration(format!("duration spec '{}' is out of range", spec))
    })
}
