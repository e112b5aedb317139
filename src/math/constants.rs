//! This module defines the fixed physical setup: the 3-4-5 right triangle, the positive charge at
//! its right angle, and the constants of Coulomb's law in the units the library works in.
//!
//! Charges are expressed in nano-coulombs (nKL) and forces in nano-newtons (nH); distances stay in
//! meters.

/// Value of the nano prefix.
///
/// Charges given in nKL are multiplied by this factor to reach coulombs, and forces computed in
/// newtons are divided by it to come back to nH.
pub const NANO_PREFIX: f64 = 1e-9;

/// Coulomb's constant `k` in N·m²/C², rounded to the value used in school problems.
pub const COULOMB_CONSTANT: f64 = 9e9;

/// The two cathets of the triangle in meters.
///
/// The first negative charge sits at the end of the 0.3 m cathet, the second one at the end of
/// the 0.4 m cathet.
pub const CATHETS: [f64; 2] = [0.3, 0.4];

/// The hypotenuse of the triangle in meters.
///
/// It closes the triangle but does not enter the force computation: only the interactions with
/// the positive charge at the right angle are considered.
pub const HYPOTENUSE: f64 = 0.5;

/// Charge of the positive point charge at the right-angle vertex, in nKL.
pub const POSITIVE_CHARGE_NKL: f64 = 1.0;

/// The largest number of decimal digits the variant generator accepts.
///
/// Up to 15 digits every charge `k / 10^a` has a numerator and denominator that are exact `f64`
/// integers, so a single division yields the correctly rounded value.
pub const MAX_ACCURACY: u32 = 15;

/// The accuracy used when none is requested explicitly.
pub const DEFAULT_ACCURACY: u32 = 3;
