#![forbid(unsafe_code)]

/// Largest denominator considered by [`format_fraction`]. Values needing a
/// finer resolution are approximated, not represented exactly.
pub const MAX_DENOMINATOR: u32 = 1000;

const TOLERANCE: f64 = 1.0e-6;

fn split_fraction(text: &str) -> Option<(f64, f64)> {
    let (numerator, denominator) = text.split_once('/')?;
    let numerator = numerator.trim();
    let denominator = denominator.trim();
    if numerator.is_empty() || denominator.is_empty() {
        return None;
    }
    if !numerator.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if !denominator.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let numerator = numerator.parse::<f64>().ok()?;
    let denominator = denominator.parse::<f64>().ok()?;
    Some((numerator, denominator))
}

/// True only for the strict "digits/digits" form with a non-zero
/// denominator. Decimal strings are not valid fractions.
pub fn is_valid_fraction(text: &str) -> bool {
    matches!(split_fraction(text), Some((_, denominator)) if denominator != 0.0)
}

/// Parses "numerator/denominator" or a plain decimal. Returns `f64::NAN`
/// when neither form parses; never panics.
pub fn parse_fraction(text: &str) -> f64 {
    if let Some((numerator, denominator)) = split_fraction(text)
        && denominator != 0.0
    {
        return numerator / denominator;
    }
    text.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Renders `value` as the "n/d" pair with the smallest error among
/// denominators 1..=[`MAX_DENOMINATOR`]. A candidate replaces the incumbent
/// only when it improves the error by more than 1e-6, so the first (smallest)
/// denominator wins ties: 0.5 becomes "1/2", not "500/1000".
pub fn format_fraction(value: f64) -> String {
    let mut numerator = 1.0_f64;
    let mut denominator = 1u32;
    let mut error = (value - 1.0).abs();

    for d in 1..=MAX_DENOMINATOR {
        let n = (value * f64::from(d)).round();
        let err = (value - n / f64::from(d)).abs();
        if err < error - TOLERANCE {
            numerator = n;
            denominator = d;
            error = err;
        }
    }

    format!("{numerator}/{denominator}")
}
