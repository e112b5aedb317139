//! This module defines the configuration of a variant enumeration run.

use crate::math::constants::DEFAULT_ACCURACY;

/// Configuration parameters for enumerating charge-pair variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumerationOptions {
    /// The number of digits after the decimal point.
    ///
    /// Charges are stepped in increments of `10^-accuracy` nKL, so a run yields
    /// `10^accuracy - 1` variants. The same value sets the number of significant digits the
    /// forces are reported with.
    pub accuracy: u32,
}

impl EnumerationOptions {
    pub fn with_accuracy(accuracy: u32) -> Self {
        Self { accuracy }
    }

    /// The number of variants a run with these options produces.
    pub fn variant_count(&self) -> u64 {
        10u64.saturating_pow(self.accuracy).saturating_sub(1)
    }
}

impl Default for EnumerationOptions {
    fn default() -> Self {
        Self {
            accuracy: DEFAULT_ACCURACY,
        }
    }
}
