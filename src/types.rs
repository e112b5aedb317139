//! This module defines the value types that flow between the variant generator, the force
//! calculator and the report formatting.
//!
//! All of them are small `Copy` values computed per variant and dropped once written out.

use crate::error::CoulombError;
use num_rational::Rational64;

/// A pair of negative charges, in nKL, as handed to the force calculator.
///
/// `q2` sits at the end of the 0.3 m cathet and `q3` at the end of the 0.4 m cathet. Pairs
/// produced by the variant generator satisfy `|q2| + |q3| = 1` with both charges negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChargePair {
    /// The charge across the first (0.3 m) cathet.
    pub q2: f64,
    /// The charge across the second (0.4 m) cathet.
    pub q3: f64,
}

impl ChargePair {
    pub fn new(q2: f64, q3: f64) -> Self {
        Self { q2, q3 }
    }

    /// Computes the forces this pair exerts on the positive charge.
    ///
    /// This is a shorthand for [`crate::forces::calculate_power_negative_charge`].
    pub fn forces(&self) -> Result<ForcePair, CoulombError> {
        crate::forces::calculate_power_negative_charge(self.q2, self.q3)
    }
}

impl From<ChargePair> for (f64, f64) {
    fn from(pair: ChargePair) -> Self {
        (pair.q2, pair.q3)
    }
}

/// A charge pair in exact decimal form, before conversion to floating point.
///
/// The generator steps through these so that the count of variants and the balance
/// `|q2| + |q3| = 1` hold exactly, independent of binary rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExactChargePair {
    /// The charge across the first (0.3 m) cathet.
    pub q2: Rational64,
    /// The charge across the second (0.4 m) cathet.
    pub q3: Rational64,
}

impl ExactChargePair {
    /// Converts both charges to their nearest `f64` values.
    pub fn to_f64(&self) -> ChargePair {
        ChargePair {
            q2: rational_to_f64(&self.q2),
            q3: rational_to_f64(&self.q3),
        }
    }
}

impl From<ExactChargePair> for ChargePair {
    fn from(pair: ExactChargePair) -> Self {
        pair.to_f64()
    }
}

/// The force magnitudes, in nH, exerted on the positive charge by each negative charge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForcePair {
    /// The force exerted by `q2` across the 0.3 m cathet.
    pub f2: f64,
    /// The force exerted by `q3` across the 0.4 m cathet.
    pub f3: f64,
}

impl From<ForcePair> for (f64, f64) {
    fn from(forces: ForcePair) -> Self {
        (forces.f2, forces.f3)
    }
}

// Numerator and denominator stay below 2^53 for supported accuracies, so both casts are exact
// and the division rounds once.
#[inline]
fn rational_to_f64(value: &Rational64) -> f64 {
    *value.numer() as f64 / *value.denom() as f64
}
