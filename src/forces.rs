//! This module implements the force calculator: Coulomb's law applied to a charge pair placed on
//! the fixed triangle.

use crate::{
    error::CoulombError,
    math::{
        constants::{CATHETS, POSITIVE_CHARGE_NKL},
        coulomb::coulomb_force_nano,
    },
    types::ForcePair,
};

/// Calculates the forces acting on the positive charge by Coulomb's law, in nH.
///
/// `q2` acts across the 0.3 m cathet and `q3` across the 0.4 m cathet. No rounding is applied;
/// formatting is left to the caller.
///
/// # Arguments
///
/// * `q2` - The first negative charge in nKL.
/// * `q3` - The second negative charge in nKL.
///
/// # Errors
///
/// Returns `CoulombError::InvalidChargeBalance` if `|q2 + q3|` is not exactly the positive
/// charge. Pairs from [`generate_all_variants`](crate::variants::generate_all_variants) always
/// pass this check.
pub fn calculate_power_negative_charge(q2: f64, q3: f64) -> Result<ForcePair, CoulombError> {
    if (q2 + q3).abs() != POSITIVE_CHARGE_NKL {
        return Err(CoulombError::InvalidChargeBalance {
            q2,
            q3,
            positive: POSITIVE_CHARGE_NKL,
        });
    }

    Ok(ForcePair {
        f2: coulomb_force_nano(POSITIVE_CHARGE_NKL, q2, CATHETS[0]),
        f3: coulomb_force_nano(POSITIVE_CHARGE_NKL, q3, CATHETS[1]),
    })
}
