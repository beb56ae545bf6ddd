//! Batched elliptic curve scalar multiplication checks over emulated fields.
//!
//! Verifying `s·P` over a foreign field with one constraint per operation of
//! the double-and-add loop is expensive. Instead, the computation is split in
//! two phases.
//!
//! The Compute phase ([hint]) runs double-and-add on plain integers
//! ([engine], [projective]) and returns the projective `(result, acc)` pair
//! after each bit of the scalar. It is not trusted.
//!
//! The Check phase ([circuit]) imports this trace as range checked
//! [emulated] elements, binds the inputs into a Fiat-Shamir [transcript],
//! folds the six coordinates of each step with powers of a challenge `alpha`
//! and compresses all folded values into one multilinear [polynomial]
//! evaluation at `(beta, beta², …, beta^k)`.
//!
//! The phases only meet through the [builder::HintFn] boundary.

pub mod builder;
pub mod circuit;
pub mod curve;
pub mod emulated;
pub mod engine;
pub mod error;
pub mod hint;
pub mod params;
pub mod polynomial;
pub mod projective;
pub mod transcript;

pub use circuit::{ScalarMulCircuit, ScalarMulClaim};
pub use error::ScalarMulError;
pub use transcript::{ALPHA, BETA};
