//! This module provides the physical constants and the electrostatics used by the library.
//!
//! It holds the fixed triangle geometry together with Coulomb's law expressed in the nKL / nH unit
//! system the rest of the crate works in.

/// The fixed geometry, charges and physical constants.
///
/// This module defines the cathets and hypotenuse of the 3-4-5 triangle, the positive charge at
/// its right angle, Coulomb's constant and the nano prefix, along with the accuracy bounds of the
/// variant generator.
pub mod constants;

/// Coulomb's law between two point charges.
pub mod coulomb;
