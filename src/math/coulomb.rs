use super::constants::{COULOMB_CONSTANT, NANO_PREFIX};

/// Magnitude of the Coulomb force between two point charges, in nano-newtons.
///
/// Both charges are given in nKL and scaled to coulombs before Coulomb's law is applied; the
/// resulting force in newtons is then re-expressed in nH. Signs are dropped, so the result is
/// always non-negative.
///
/// # Arguments
///
/// * `charge_a_nkl` - The first charge in nano-coulombs.
/// * `charge_b_nkl` - The second charge in nano-coulombs.
/// * `distance` - The separation of the two charges in meters.
#[inline]
pub fn coulomb_force_nano(charge_a_nkl: f64, charge_b_nkl: f64, distance: f64) -> f64 {
    let charge_a = charge_a_nkl * NANO_PREFIX;
    let charge_b = charge_b_nkl * NANO_PREFIX;
    COULOMB_CONSTANT * (charge_a.abs() * charge_b.abs() / distance.powi(2)) / NANO_PREFIX
}
