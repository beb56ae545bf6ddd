//! The double-and-add hint.
//!
//! This is the only unconstrained computation: it runs outside of the circuit
//! on plain integers and returns, for every bit of the scalar, the running
//! result and the doubled accumulator. Nothing here is trusted by the
//! circuit, see [crate::circuit].
//!
//! # Layout
//!
//! The inputs are
//!
//! ```text
//! | base bits per limb | base nb limbs | base modulus limbs | x limbs | y limbs |
//! | scalar bits per limb | scalar nb limbs | scalar modulus limbs | scalar limbs |
//! ```
//!
//! and, for each step `i`, the outputs are the limbs of
//!
//! ```text
//! | result_x | result_y | result_z | acc_x | acc_y | acc_z |
//! ```
//!
//! The number of steps is `outputs.len() / (6 · base nb limbs)`.

use crate::{
    engine::BigIntEngine, error::HintError, params::CurveParams, projective::ProjectivePoint,
};
use ecmul_utils::{decompose, decompose_into, recompose};
use log::trace;
use num_bigint::BigUint;

/// Number of coordinates emitted per step
pub const COORDINATES_PER_STEP: usize = 6;

/// Decoded hint inputs
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScalarMulInputs {
    pub base_bits_per_limb: usize,
    pub base_nb_limbs: usize,
    pub base_modulus: BigUint,
    pub x: BigUint,
    pub y: BigUint,
    pub scalar_bits_per_limb: usize,
    pub scalar_nb_limbs: usize,
    pub scalar_modulus: BigUint,
    pub scalar: BigUint,
}

fn read_usize(inputs: &[BigUint], idx: usize) -> Result<usize, HintError> {
    let v = inputs
        .get(idx)
        .ok_or(HintError::InputLayout("missing limb parameters"))?;
    usize::try_from(v).map_err(|_| HintError::InputLayout("limb parameter too large"))
}

fn read_limbs(
    inputs: &[BigUint],
    start: usize,
    nb_limbs: usize,
    width: usize,
) -> Result<BigUint, HintError> {
    let limbs = inputs
        .get(start..start.saturating_add(nb_limbs))
        .ok_or(HintError::InputLayout("not enough limbs"))?;
    Ok(recompose(limbs, width)?)
}

impl ScalarMulInputs {
    /// Parses the flat input layout described in the module documentation
    pub fn decode(inputs: &[BigUint]) -> Result<Self, HintError> {
        let base_bits_per_limb = read_usize(inputs, 0)?;
        let base_nb_limbs = read_usize(inputs, 1)?;
        let mut pos = 2;
        let base_modulus = read_limbs(inputs, pos, base_nb_limbs, base_bits_per_limb)?;
        pos += base_nb_limbs;
        let x = read_limbs(inputs, pos, base_nb_limbs, base_bits_per_limb)?;
        pos += base_nb_limbs;
        let y = read_limbs(inputs, pos, base_nb_limbs, base_bits_per_limb)?;
        pos += base_nb_limbs;

        let scalar_bits_per_limb = read_usize(inputs, pos)?;
        let scalar_nb_limbs = read_usize(inputs, pos + 1)?;
        pos += 2;
        let scalar_modulus = read_limbs(inputs, pos, scalar_nb_limbs, scalar_bits_per_limb)?;
        pos += scalar_nb_limbs;
        let scalar = read_limbs(inputs, pos, scalar_nb_limbs, scalar_bits_per_limb)?;
        pos += scalar_nb_limbs;

        if pos != inputs.len() {
            return Err(HintError::InputLayout("trailing inputs"));
        }

        Ok(Self {
            base_bits_per_limb,
            base_nb_limbs,
            base_modulus,
            x,
            y,
            scalar_bits_per_limb,
            scalar_nb_limbs,
            scalar_modulus,
            scalar,
        })
    }

    /// Flattens the inputs into the layout read by [scalar_mul_steps]
    pub fn encode(&self) -> Result<Vec<BigUint>, HintError> {
        let base = |v: &BigUint| decompose(v, self.base_bits_per_limb, self.base_nb_limbs);
        let scalar = |v: &BigUint| decompose(v, self.scalar_bits_per_limb, self.scalar_nb_limbs);

        let mut res = vec![
            BigUint::from(self.base_bits_per_limb),
            BigUint::from(self.base_nb_limbs),
        ];
        res.extend(base(&self.base_modulus)?);
        res.extend(base(&self.x)?);
        res.extend(base(&self.y)?);
        res.push(BigUint::from(self.scalar_bits_per_limb));
        res.push(BigUint::from(self.scalar_nb_limbs));
        res.extend(scalar(&self.scalar_modulus)?);
        res.extend(scalar(&self.scalar)?);
        Ok(res)
    }
}

/// Runs `nb_steps` iterations of double-and-add on the affine point `(x, y)`
/// and returns the `(result, acc)` snapshot after each iteration.
///
/// `result` starts at the identity and `acc` at the input point. At step `i`
/// the low bit of the remaining scalar selects whether `acc` is added to
/// `result`, then `acc` is doubled unconditionally. Bits of the scalar beyond
/// `nb_steps` are ignored.
pub fn scalar_mul_trace(
    api: &BigIntEngine,
    b3: &BigUint,
    x: &BigUint,
    y: &BigUint,
    scalar: &BigUint,
    nb_steps: usize,
) -> Vec<(ProjectivePoint, ProjectivePoint)> {
    let one = BigUint::from(1u32);
    let mut scalar = scalar.clone();
    let mut acc = ProjectivePoint::from_affine(x, y);
    let mut result = ProjectivePoint::identity();
    let mut trace = Vec::with_capacity(nb_steps);
    for _ in 0..nb_steps {
        let selector = &scalar & &one;
        scalar >>= 1;
        let candidate = acc.add(&result, api, b3);
        result = ProjectivePoint::select(&selector, &candidate, &result);
        acc = acc.double(api, b3);
        trace.push((result.clone(), acc.clone()));
    }
    trace
}

/// The hint computing all double-and-add steps of one scalar multiplication
/// on the curve `C`.
///
/// The native modulus is unused: all values are reduced modulo the foreign
/// base modulus read from the inputs.
pub fn scalar_mul_steps<C: CurveParams>(
    _native_modulus: &BigUint,
    inputs: &[BigUint],
    outputs: &mut [BigUint],
) -> Result<(), HintError> {
    let inputs = ScalarMulInputs::decode(inputs)?;
    emit_steps(&inputs, &C::b3(), outputs)
}

/// Writes the trace of `inputs` into `outputs`, curve coefficient `b3 = 3·b`.
pub fn emit_steps(
    inputs: &ScalarMulInputs,
    b3: &BigUint,
    outputs: &mut [BigUint],
) -> Result<(), HintError> {
    let nb_limbs = inputs.base_nb_limbs;
    let step_size = COORDINATES_PER_STEP * nb_limbs;
    if nb_limbs == 0 {
        return Err(HintError::InputLayout("zero base limbs"));
    }
    if outputs.len() % step_size != 0 {
        return Err(HintError::OutputLayout(outputs.len(), step_size));
    }
    let nb_steps = outputs.len() / step_size;
    trace!(
        "scalar mul hint: {nb_steps} steps, scalar modulus of {} bits",
        inputs.scalar_modulus.bits()
    );

    let api = BigIntEngine::new(inputs.base_modulus.clone());
    let trace = scalar_mul_trace(&api, b3, &inputs.x, &inputs.y, &inputs.scalar, nb_steps);

    for ((result, acc), out) in trace.iter().zip(outputs.chunks_mut(step_size)) {
        let coords = [&result.x, &result.y, &result.z, &acc.x, &acc.y, &acc.z];
        for (coord, window) in coords.into_iter().zip(out.chunks_mut(nb_limbs)) {
            decompose_into(coord, inputs.base_bits_per_limb, window)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Toy163;

    fn toy_inputs(scalar: u32) -> ScalarMulInputs {
        ScalarMulInputs {
            base_bits_per_limb: 4,
            base_nb_limbs: 2,
            base_modulus: BigUint::from(163u32),
            x: BigUint::from(2u32),
            y: BigUint::from(34u32),
            scalar_bits_per_limb: 4,
            scalar_nb_limbs: 2,
            scalar_modulus: BigUint::from(139u32),
            scalar: BigUint::from(scalar),
        }
    }

    #[test]
    fn test_layout_roundtrip() {
        let inputs = toy_inputs(5);
        let encoded = inputs.encode().unwrap();
        // 2 parameters + 3 base values + 2 parameters + 2 scalar values
        assert_eq!(encoded.len(), 2 + 3 * 2 + 2 + 2 * 2);
        assert_eq!(ScalarMulInputs::decode(&encoded).unwrap(), inputs);
    }

    #[test]
    fn test_truncated_inputs() {
        let encoded = toy_inputs(5).encode().unwrap();
        assert!(matches!(
            ScalarMulInputs::decode(&encoded[..encoded.len() - 1]),
            Err(HintError::InputLayout(_))
        ));
        let mut longer = encoded.clone();
        longer.push(BigUint::default());
        assert_eq!(
            ScalarMulInputs::decode(&longer),
            Err(HintError::InputLayout("trailing inputs"))
        );
    }

    #[test]
    fn test_zero_steps() {
        let encoded = toy_inputs(5).encode().unwrap();
        let mut outputs = vec![];
        scalar_mul_steps::<Toy163>(&BigUint::default(), &encoded, &mut outputs).unwrap();
        assert!(outputs.is_empty());
    }

    #[test]
    fn test_output_length_must_be_whole_steps() {
        let encoded = toy_inputs(5).encode().unwrap();
        let mut outputs = vec![BigUint::default(); 13];
        assert_eq!(
            scalar_mul_steps::<Toy163>(&BigUint::default(), &encoded, &mut outputs),
            Err(HintError::OutputLayout(13, 12))
        );
    }

    #[test]
    fn test_high_bits_are_dropped() {
        // 0b10101 truncated to 4 bits is 0b0101 = 5
        let api = BigIntEngine::new(BigUint::from(163u32));
        let b3 = Toy163::b3();
        let (x, y) = (BigUint::from(2u32), BigUint::from(34u32));
        let truncated = scalar_mul_trace(&api, &b3, &x, &y, &BigUint::from(21u32), 4);
        let exact = scalar_mul_trace(&api, &b3, &x, &y, &BigUint::from(5u32), 4);
        assert_eq!(truncated, exact);
    }

    #[test]
    fn test_deterministic() {
        let encoded = toy_inputs(77).encode().unwrap();
        let mut first = vec![BigUint::default(); 8 * 12];
        let mut second = vec![BigUint::default(); 8 * 12];
        scalar_mul_steps::<Toy163>(&BigUint::default(), &encoded, &mut first).unwrap();
        scalar_mul_steps::<Toy163>(&BigUint::default(), &encoded, &mut second).unwrap();
        assert_eq!(first, second);
    }
}
