//! This module implements the errors raised while generating and checking
//! batched scalar multiplications.

use ecmul_utils::LimbError;
use thiserror::Error;

/// Errors raised by the hints and at the hint boundary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HintError {
    #[error("malformed hint input: {0}")]
    InputLayout(&'static str),

    #[error("the number of hint outputs ({0}) is not a multiple of the step size ({1})")]
    OutputLayout(usize, usize),

    #[error("hint output {0} does not fit in the native field")]
    OutputOverflow(usize),

    #[error(transparent)]
    Limb(#[from] LimbError),
}

/// Errors raised by the emulated field arithmetic
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmulationError {
    #[error("an element has {0} limbs, expected {1}")]
    LimbCount(usize, usize),

    #[error("limb {0} is wider than {1} bits")]
    LimbOverflow(usize, usize),

    #[error("the value ({0} bits) does not fit in the limbs of a reduced element")]
    ValueOverflow(usize),
}

/// Errors raised by the Fiat-Shamir transcript
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranscriptError {
    #[error("the challenge {0} is not declared in the transcript")]
    UnknownLabel(String),

    #[error("the challenge {0} has already been computed")]
    AlreadyComputed(String),

    #[error("the challenge preceding {0} has not been computed")]
    PreviousNotComputed(String),

    #[error("the challenge {0} has no bound value")]
    NoBindings(String),
}

/// Errors raised by the multilinear evaluation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolynomialError {
    #[error("cannot evaluate a polynomial without values")]
    Empty,

    #[error("{0} values do not fit the hypercube of dimension {1}")]
    TooManyValues(usize, usize),

    #[error("a point of dimension {0} is too large for {1} values")]
    TooManyVariables(usize, usize),
}

/// Errors raised when defining the batched scalar multiplication check
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScalarMulError {
    #[error("the number of points ({points}) differs from the number of scalars ({scalars})")]
    ShapeMismatch { points: usize, scalars: usize },

    #[error("the hint failed: {0}")]
    Hint(#[from] HintError),

    #[error("emulated arithmetic failed: {0}")]
    Emulation(#[from] EmulationError),

    #[error("transcript failed: {0}")]
    Transcript(#[from] TranscriptError),

    #[error("polynomial evaluation failed: {0}")]
    Polynomial(#[from] PolynomialError),

    #[error(transparent)]
    Limb(#[from] LimbError),
}
