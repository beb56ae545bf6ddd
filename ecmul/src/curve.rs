//! Emulated curve points and their marshaling into the transcript.

use crate::{emulated::Element, error::EmulationError, params::FieldParams};
use ark_ff::PrimeField;
use num_bigint::BigUint;

/// An affine input point over the emulated base field `B`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AffinePoint<B: FieldParams, F: PrimeField> {
    pub x: Element<B, F>,
    pub y: Element<B, F>,
}

impl<B: FieldParams, F: PrimeField> AffinePoint<B, F> {
    pub fn from_biguint(x: &BigUint, y: &BigUint) -> Result<Self, EmulationError> {
        Ok(Self {
            x: Element::from_biguint(x)?,
            y: Element::from_biguint(y)?,
        })
    }

    /// `x ‖ y`, both big endian on the byte size of the modulus
    pub fn marshal(&self) -> Result<Vec<u8>, EmulationError> {
        let mut bytes = self.x.to_bytes_be()?;
        bytes.extend(self.y.to_bytes_be()?);
        Ok(bytes)
    }
}

/// Big endian encoding of a scalar, on the byte size of its modulus
pub fn marshal_scalar<S: FieldParams, F: PrimeField>(
    scalar: &Element<S, F>,
) -> Result<Vec<u8>, EmulationError> {
    scalar.to_bytes_be()
}

/// A projective point whose coordinates were given by a hint
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmulatedPoint<B: FieldParams, F: PrimeField> {
    pub x: Element<B, F>,
    pub y: Element<B, F>,
    pub z: Element<B, F>,
}

/// One double-and-add step as imported in the circuit
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceStep<B: FieldParams, F: PrimeField> {
    /// Running result after this step
    pub result: EmulatedPoint<B, F>,
    /// Doubled accumulator after this step
    pub acc: EmulatedPoint<B, F>,
}
