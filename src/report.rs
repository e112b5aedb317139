//! This module renders computed variants as text.
//!
//! Charges are printed in their shortest round-trip form and forces are rounded to a number of
//! significant digits, following the general numeric format: scientific notation for large or
//! very small magnitudes, fixed-point otherwise with at least one digit after the point.

use crate::types::{ChargePair, ForcePair};

/// Decimal exponents from this value upward switch a charge to scientific notation.
const CHARGE_SCIENTIFIC_EXPONENT: i32 = 16;
/// Decimal exponents below this value switch any number to scientific notation.
const SMALL_SCIENTIFIC_EXPONENT: i32 = -4;
/// An `f64` never needs more than 17 significant digits to round-trip.
const MAX_SIGNIFICANT_DIGITS: usize = 17;

/// Formats one variant as a report line.
///
/// The line reads
/// `F2 (for charge q2=<q2>nKL) = <f2>nH, F3 (for charge q3=<q3>nKL) = <f3>nH`, with the charges
/// rendered by [`format_charge`] and the forces rounded by [`format_significant`] to `accuracy`
/// significant digits.
pub fn format_variant_line(pair: &ChargePair, forces: &ForcePair, accuracy: u32) -> String {
    let digits = accuracy as usize;
    format!(
        "F2 (for charge q2={}nKL) = {}nH, F3 (for charge q3={}nKL) = {}nH",
        format_charge(pair.q2),
        format_significant(forces.f2, digits),
        format_charge(pair.q3),
        format_significant(forces.f3, digits),
    )
}

/// Formats a charge with the fewest digits that still round-trip to the same `f64`.
///
/// Magnitudes below `1e-4` or from `1e16` upward use scientific notation with a signed,
/// two-digit exponent (`-1e-05`); everything else is fixed-point and always carries a decimal
/// point (`-0.001`, `2.0`).
pub fn format_charge(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let shortest = format!("{:e}", value);
    let (mantissa, exponent) = split_exponent(&shortest);

    if (SMALL_SCIENTIFIC_EXPONENT..CHARGE_SCIENTIFIC_EXPONENT).contains(&exponent) {
        ensure_fraction(value.to_string())
    } else {
        join_exponent(mantissa, exponent)
    }
}

/// Rounds a value to `digits` significant digits.
///
/// The rounded value is written in scientific notation when its decimal exponent is below `-4`
/// or at least `digits - 1`, and in fixed-point notation otherwise. Trailing zeros are dropped,
/// except that fixed-point output keeps one digit after the point. `digits` is clamped to
/// `1..=17`.
///
/// ```
/// use coulomb_variants::report::format_significant;
///
/// assert_eq!(format_significant(56.19375, 3), "56.2");
/// assert_eq!(format_significant(99.9, 2), "1e+02");
/// assert_eq!(format_significant(1.0000000000000002, 2), "1.0");
/// ```
pub fn format_significant(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let digits = digits.clamp(1, MAX_SIGNIFICANT_DIGITS);
    let rounded = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = split_exponent(&rounded);

    if exponent < SMALL_SCIENTIFIC_EXPONENT || exponent >= digits as i32 - 1 {
        join_exponent(trim_zeros(mantissa), exponent)
    } else {
        let decimals = (digits as i32 - 1 - exponent) as usize;
        ensure_fraction(trim_zeros(&format!("{:.*}", decimals, value)).to_string())
    }
}

fn split_exponent(scientific: &str) -> (&str, i32) {
    match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse().unwrap_or(0)),
        None => (scientific, 0),
    }
}

fn join_exponent(mantissa: &str, exponent: i32) -> String {
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{}e{}{:02}", mantissa, sign, exponent.unsigned_abs())
}

fn trim_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

fn ensure_fraction(mut number: String) -> String {
    if !number.contains('.') {
        number.push_str(".0");
    }
    number
}
