use thiserror::Error;

/// The primary error type for all fallible operations in the `coulomb_variants` library.
///
/// Both variants describe caller mistakes rather than runtime conditions: a charge pair that was
/// not produced by the variant generator, or an accuracy the exact decimal stepping cannot
/// represent. Neither is meant to be recovered from.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoulombError {
    /// Raised by the force calculator when the two negative charges do not exactly compensate
    /// the positive charge, i.e. `|q2 + q3| != 1` nKL.
    ///
    /// Pairs yielded by the variant generator always satisfy the balance, so this points at an
    /// externally supplied pair.
    #[error(
        "The sum of negative charges should be equal to positive: |{q2} + {q3}| != {positive} nKL"
    )]
    InvalidChargeBalance {
        /// The first negative charge, in nKL.
        q2: f64,
        /// The second negative charge, in nKL.
        q3: f64,
        /// The positive charge the pair must balance, in nKL.
        positive: f64,
    },

    /// The requested number of decimal digits exceeds what the generator can step through
    /// exactly and still convert faithfully to `f64`.
    #[error("Accuracy {accuracy} is out of range: at most {max} decimal digits are supported")]
    AccuracyOutOfRange {
        /// The accuracy that was requested.
        accuracy: u32,
        /// The largest supported accuracy.
        max: u32,
    },
}
