//! Derived measurements: ellipsoid volume, density ratios, follow-up
//! duration, and decimal-comma number handling.
//!
//! Everything here is recomputed from the source measurements on demand.

use jiff::Unit;
use jiff::civil::Date;

use crate::error::CoreError;

/// Ellipsoid approximation factor (π/6, rounded as used clinically).
pub const ELLIPSOID_FACTOR: f64 = 0.52;

/// Default threshold for a follow-up to count as sufficient, in months.
pub const SUFFICIENT_FOLLOW_UP_MONTHS: u32 = 24;

/// Ellipsoid volume from three linear measurements.
///
/// A zero, negative, or non-finite dimension yields 0, which callers treat
/// as "not computed".
pub fn volume(a: f64, b: f64, c: f64) -> f64 {
    if [a, b, c].iter().any(|d| !d.is_finite() || *d <= 0.0) {
        return 0.0;
    }
    a * b * c * ELLIPSOID_FACTOR
}

/// `numerator / volume`, or 0 when there is no volume to divide by.
pub fn density(numerator: f64, volume: f64) -> f64 {
    if !volume.is_finite() || volume <= 0.0 || !numerator.is_finite() || numerator <= 0.0 {
        return 0.0;
    }
    numerator / volume
}

/// Parse a date typed as `YYYY-MM-DD` or `DD/MM/YYYY`.
pub fn parse_date(text: &str) -> Result<Date, CoreError> {
    let trimmed = text.trim();
    if let Ok(date) = trimmed.parse::<Date>() {
        return Ok(date);
    }

    let parts: Vec<&str> = trimmed.split('/').collect();
    if let [day, month, year] = parts.as_slice() {
        let day: i8 = day.parse().map_err(|_| invalid(trimmed))?;
        let month: i8 = month.parse().map_err(|_| invalid(trimmed))?;
        let year: i16 = year.parse().map_err(|_| invalid(trimmed))?;
        return Date::new(year, month, day).map_err(|_| invalid(trimmed));
    }

    Err(invalid(trimmed))
}

/// Whole months elapsed between `prior` and `today`.
///
/// Fails with [`CoreError::InvalidDate`] when `prior` does not parse or lies
/// after `today`.
pub fn follow_up_months(prior: &str, today: Date) -> Result<u32, CoreError> {
    let prior_date = parse_date(prior)?;
    if prior_date > today {
        return Err(CoreError::InvalidDate(format!(
            "{} is in the future",
            prior.trim()
        )));
    }

    let span = prior_date
        .until((Unit::Month, today))
        .map_err(|e| CoreError::InvalidDate(e.to_string()))?;
    Ok(u32::try_from(span.get_months()).unwrap_or(0))
}

/// [`follow_up_months`] against the local calendar date.
pub fn follow_up_months_from_now(prior: &str) -> Result<u32, CoreError> {
    follow_up_months(prior, jiff::Zoned::now().date())
}

/// Boundary inclusive: exactly `threshold` months is sufficient.
pub fn is_sufficient_follow_up(months: u32, threshold: u32) -> bool {
    months >= threshold
}

/// Parse a number typed with either `.` or `,` as the decimal separator.
///
/// Never fails: anything unparsable reads as 0 so a half-typed field keeps
/// the form usable.
pub fn parse_locale_number(text: &str) -> f64 {
    let normalized = text.trim().replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => 0.0,
    }
}

/// Format with a decimal comma and a fixed number of decimals.
pub fn format_locale_number(number: f64, decimals: usize) -> String {
    let number = if number.is_finite() { number } else { 0.0 };
    let formatted = format!("{:.*}", decimals, number).replace('.', ",");
    // "-0,0" reads oddly in a report.
    match formatted.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == ',') => rest.to_string(),
        _ => formatted,
    }
}

/// `DD/MM/YYYY`, the format dates are written in the report body.
pub fn format_date(date: Date) -> String {
    format!("{:02}/{:02}/{:04}", date.day(), date.month(), date.year())
}

fn invalid(text: &str) -> CoreError {
    CoreError::InvalidDate(text.to_string())
}
