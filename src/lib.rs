pub mod error;
pub mod forces;
pub mod math;
pub mod report;
pub mod types;
pub mod variants;

pub use error::CoulombError;
pub use forces::calculate_power_negative_charge;
pub use types::{ChargePair, ExactChargePair, ForcePair};
pub use variants::{
    EnumerationOptions, ExactVariants, Variants, generate_all_variants, generate_exact_variants,
};
