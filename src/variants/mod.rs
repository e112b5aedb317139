//! This module contains the variant generator that enumerates candidate charge pairs.
//!
//! It provides the exact and floating-point iterators over the pairs, the entry points that build
//! them for a given decimal accuracy, and `EnumerationOptions` for configuring a run.

mod generator;
mod options;

pub use generator::{ExactVariants, Variants, generate_all_variants, generate_exact_variants};
pub use options::EnumerationOptions;
