use crate::{
    error::CoulombError,
    math::constants::MAX_ACCURACY,
    types::{ChargePair, ExactChargePair},
};
use num_rational::Rational64;
use num_traits::{One, Signed, ToPrimitive};
use std::iter::FusedIterator;

/// Iterator over the charge-pair variants in exact decimal form.
///
/// `q2` starts at `-10^-a` and decreases by `10^-a` per step; `q3` is its complement
/// `-(1 - |q2|)`. The iteration ends, without yielding it, once `|q2|` reaches the positive
/// charge. A clone continues from the same position; call the generator again to restart.
#[derive(Debug, Clone)]
pub struct ExactVariants {
    step: Rational64,
    next_q2: Rational64,
}

impl ExactVariants {
    fn new(accuracy: u32) -> Result<Self, CoulombError> {
        if accuracy > MAX_ACCURACY {
            return Err(CoulombError::AccuracyOutOfRange {
                accuracy,
                max: MAX_ACCURACY,
            });
        }

        let step = -Rational64::new(1, 10i64.pow(accuracy));
        Ok(Self {
            step,
            next_q2: step,
        })
    }

    fn remaining(&self) -> Rational64 {
        (Rational64::one() - self.next_q2.abs()) / self.step.abs()
    }
}

impl Iterator for ExactVariants {
    type Item = ExactChargePair;

    fn next(&mut self) -> Option<Self::Item> {
        let q2 = self.next_q2;
        if q2.abs() == Rational64::one() {
            return None;
        }

        let q3 = -(Rational64::one() - q2.abs());
        self.next_q2 += self.step;
        Some(ExactChargePair { q2, q3 })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining().to_integer().to_usize() {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

impl FusedIterator for ExactVariants {}

/// Iterator over the charge-pair variants as floating-point values.
///
/// Each pair is stepped exactly by [`ExactVariants`] and converted to `f64` only when yielded,
/// so the values are the nearest doubles to decimals with `accuracy` digits.
#[derive(Debug, Clone)]
pub struct Variants {
    exact: ExactVariants,
}

impl Iterator for Variants {
    type Item = ChargePair;

    fn next(&mut self) -> Option<Self::Item> {
        self.exact.next().map(|pair| pair.to_f64())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.exact.size_hint()
    }
}

impl FusedIterator for Variants {}

/// Generates all charge-pair variants in nKL at the given decimal accuracy.
///
/// For `accuracy = 1` this yields `(-0.1, -0.9), (-0.2, -0.8), ..., (-0.9, -0.1)`. In general the
/// sequence holds `10^accuracy - 1` pairs; an accuracy of zero yields nothing, because the very
/// first candidate already carries the whole compensating charge.
///
/// The iterator is lazy and the function is pure: calling it again with the same accuracy
/// reproduces the same sequence.
///
/// # Errors
///
/// Returns `CoulombError::AccuracyOutOfRange` if `accuracy` exceeds
/// [`MAX_ACCURACY`](crate::math::constants::MAX_ACCURACY).
pub fn generate_all_variants(accuracy: u32) -> Result<Variants, CoulombError> {
    Ok(Variants {
        exact: ExactVariants::new(accuracy)?,
    })
}

/// Generates the same sequence as [`generate_all_variants`], keeping the exact decimal values.
pub fn generate_exact_variants(accuracy: u32) -> Result<ExactVariants, CoulombError> {
    ExactVariants::new(accuracy)
}
