//! Helpers shared by the Compute and Check phases of the batched scalar
//! multiplication check: the limb codec used at the hint boundary, big integer
//! helpers and conversions between native field elements and integers.

pub mod biguint_helpers;
pub mod field_helpers;
pub mod limbs;
pub mod math;

pub use biguint_helpers::BigUintHelpers;
pub use field_helpers::{FieldHelpers, FieldHelpersError};
pub use limbs::{decompose, decompose_into, recompose, LimbError};
