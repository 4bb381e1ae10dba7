//! Free-text duration parsing.
//!
//! howlongtobeat.com renders play times as strings like `"12 Hours"`,
//! `"5½ Hours"`, `"50 Mins"`, `"5 Hours - 12 Hours"`, or `"--"` when the
//! time is not tracked. This module normalizes them to fractional hours.

/// Typographic half-hour marker used by the site ("5½ Hours").
const HALF_GLYPH: char = '½';

/// Parse a duration string into fractional hours.
///
/// `"--"` (not tracked) maps to 0. A `" - "` range resolves to the mean of
/// its bounds. Anything sub-hour clamps up to 1 hour. Malformed text yields
/// 0 rather than an error; callers treat every field as best-effort.
pub fn parse_time(text: &str) -> f64 {
    if text.starts_with("--") {
        return 0.0;
    }
    if let Some((low, high)) = text.split_once(" - ") {
        return (single_time(low) + single_time(high)) / 2.0;
    }
    single_time(text)
}

/// Parse a single (non-range) value like `"12 Hours"` or `"50 Mins"`.
fn single_time(text: &str) -> f64 {
    let Some((amount, unit)) = text.split_once(' ') else {
        return 0.0;
    };
    // Minutes always clamp to the one-hour minimum, whatever the count.
    if unit.trim() == "Mins" {
        return 1.0;
    }
    if amount.contains(HALF_GLYPH) {
        return 0.5 + leading_int(amount);
    }
    // parseInt semantics: leading digits only, truncation ("4.5" -> 4).
    leading_int(amount)
}

fn leading_int(s: &str) -> f64 {
    let digits: String = s.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse::<u64>().map(|n| n as f64).unwrap_or(0.0)
}
