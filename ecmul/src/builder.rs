//! The witness builder the circuit is defined against.
//!
//! It plays the role of the constraint system frontend in witness mode:
//! values are concrete native field elements, and untrusted computations
//! are delegated to hints through [Builder::new_hint]. The circuit never
//! calls the Compute phase directly, it only registers a [HintFn].

use crate::error::HintError;
use ark_ff::PrimeField;
use core::marker::PhantomData;
use ecmul_utils::FieldHelpers;
use log::debug;
use num_bigint::BigUint;

/// An unconstrained computation on integers. The first argument is the
/// native modulus, then the inputs; the hint fills every output slot.
pub type HintFn = fn(&BigUint, &[BigUint], &mut [BigUint]) -> Result<(), HintError>;

/// Witness mode circuit builder over the native field `F`
#[derive(Debug)]
pub struct Builder<F: PrimeField> {
    nb_hint_calls: usize,
    nb_hint_outputs: usize,
    _marker: PhantomData<F>,
}

impl<F: PrimeField> Default for Builder<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: PrimeField> Builder<F> {
    pub fn new() -> Self {
        Self {
            nb_hint_calls: 0,
            nb_hint_outputs: 0,
            _marker: PhantomData,
        }
    }

    /// Number of hints invoked so far
    pub fn nb_hint_calls(&self) -> usize {
        self.nb_hint_calls
    }

    /// Total number of values returned by hints so far
    pub fn nb_hint_outputs(&self) -> usize {
        self.nb_hint_outputs
    }

    /// Calls `hint` on `inputs` and returns its `nb_outputs` results as native
    /// elements. Every result must be a canonical native field element.
    pub fn new_hint(
        &mut self,
        hint: HintFn,
        nb_outputs: usize,
        inputs: &[F],
    ) -> Result<Vec<F>, HintError> {
        let native_modulus = F::modulus_biguint();
        let inputs: Vec<BigUint> = inputs.iter().map(|x| x.to_biguint()).collect();
        let mut outputs = vec![BigUint::default(); nb_outputs];
        hint(&native_modulus, &inputs, &mut outputs)?;

        self.nb_hint_calls += 1;
        self.nb_hint_outputs += nb_outputs;
        debug!(
            "hint call {}: {} inputs, {nb_outputs} outputs",
            self.nb_hint_calls,
            inputs.len()
        );

        outputs
            .iter()
            .enumerate()
            .map(|(i, v)| F::from_biguint(v).map_err(|_| HintError::OutputOverflow(i)))
            .collect()
    }

    /// Little endian binary decomposition of `x` on `nb_digits` bits.
    /// Higher bits are dropped if `nb_digits` is smaller than the bit size of
    /// the native field.
    pub fn to_binary(&self, x: F, nb_digits: usize) -> Vec<bool> {
        x.to_bits_le(nb_digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::Fr;

    fn double_all(_: &BigUint, inputs: &[BigUint], outputs: &mut [BigUint]) -> Result<(), HintError> {
        for (o, i) in outputs.iter_mut().zip(inputs) {
            *o = i * 2u32;
        }
        Ok(())
    }

    fn return_modulus(
        modulus: &BigUint,
        _: &[BigUint],
        outputs: &mut [BigUint],
    ) -> Result<(), HintError> {
        outputs[0] = modulus.clone();
        Ok(())
    }

    #[test]
    fn test_new_hint() {
        let mut builder = Builder::<Fr>::new();
        let res = builder
            .new_hint(double_all, 2, &[Fr::from(3u64), Fr::from(5u64)])
            .unwrap();
        assert_eq!(res, vec![Fr::from(6u64), Fr::from(10u64)]);
        assert_eq!(builder.nb_hint_calls(), 1);
        assert_eq!(builder.nb_hint_outputs(), 2);
    }

    #[test]
    fn test_hint_output_must_be_in_field() {
        let mut builder = Builder::<Fr>::new();
        assert_eq!(
            builder.new_hint(return_modulus, 1, &[]),
            Err(HintError::OutputOverflow(0))
        );
    }

    #[test]
    fn test_to_binary() {
        let builder = Builder::<Fr>::new();
        assert_eq!(
            builder.to_binary(Fr::from(6u64), 4),
            vec![false, true, true, false]
        );
    }
}
