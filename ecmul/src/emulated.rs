//! Emulated foreign field arithmetic in witness mode.
//!
//! An [Element] of the foreign field `P` is a vector of native `F` limbs of
//! `P::BITS_PER_LIMB` bits each. Reduced elements have exactly
//! `P::NB_LIMBS` limbs and a value smaller than the modulus. Unreduced
//! elements, produced by [EmulatedField::mul_no_reduce] and
//! [EmulatedField::sum], carry as many limbs as their value needs and are
//! brought back by [EmulatedField::reduce].
//!
//! Limbs coming from a hint are range checked by [EmulatedField::new_element].
//! The operation counters give an idea of the cost a constrained backend
//! would pay for the same computation.

use crate::{error::EmulationError, params::FieldParams};
use ark_ff::PrimeField;
use core::marker::PhantomData;
use ecmul_utils::{limbs::nb_limbs_for, BigUintHelpers, FieldHelpers};
use num_bigint::BigUint;
use num_integer::Integer;

/// An element of the emulated field `P` over the native field `F`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element<P: FieldParams, F: PrimeField> {
    limbs: Vec<F>,
    _marker: PhantomData<P>,
}

impl<P: FieldParams, F: PrimeField> Element<P, F> {
    /// Builds a reduced element from an integer, as done when assigning the
    /// witness. The value is not reduced and must fit in `P::NB_LIMBS` limbs.
    pub fn from_biguint(value: &BigUint) -> Result<Self, EmulationError> {
        if value.bits() as usize > P::BITS_PER_LIMB * P::NB_LIMBS {
            return Err(EmulationError::ValueOverflow(value.bits() as usize));
        }
        Ok(Self::from_value(value, P::NB_LIMBS))
    }

    /// Splits `value` in at least `min_limbs` limbs
    fn from_value(value: &BigUint, min_limbs: usize) -> Self {
        let nb_limbs = nb_limbs_for(value.bits() as usize, P::BITS_PER_LIMB).max(min_limbs);
        let mask = (BigUint::from(1u32) << P::BITS_PER_LIMB) - 1u32;
        let limbs = (0..nb_limbs)
            .map(|i| F::from((value >> (i * P::BITS_PER_LIMB)) & &mask))
            .collect();
        Self {
            limbs,
            _marker: PhantomData,
        }
    }

    pub fn limbs(&self) -> &[F] {
        &self.limbs
    }

    /// The integer represented by the limbs
    pub fn value(&self) -> BigUint {
        self.limbs
            .iter()
            .rev()
            .fold(BigUint::default(), |acc, limb| {
                (acc << P::BITS_PER_LIMB) + limb.to_biguint()
            })
    }

    /// Whether the element is in canonical form
    pub fn is_reduced(&self) -> bool {
        self.limbs.len() == P::NB_LIMBS && self.value() < *P::modulus()
    }

    /// Big endian bytes of the value, on `P::modulus_bytes()` bytes.
    /// Used to marshal reduced elements into the transcript.
    pub fn to_bytes_be(&self) -> Result<Vec<u8>, EmulationError> {
        let value = self.value();
        value
            .to_bytes_be_padded(P::modulus_bytes())
            .ok_or(EmulationError::ValueOverflow(value.bitlen()))
    }
}

/// Limbs of the modulus of `P`, as the native elements handed to hints
pub fn modulus_limbs<P: FieldParams, F: PrimeField>() -> Vec<F> {
    Element::<P, F>::from_value(P::modulus(), P::NB_LIMBS).limbs
}

/// Witness mode arithmetic over the emulated field `P`
#[derive(Debug)]
pub struct EmulatedField<P: FieldParams, F: PrimeField> {
    nb_mul: usize,
    nb_reductions: usize,
    nb_range_checks: usize,
    _marker: PhantomData<(P, F)>,
}

impl<P: FieldParams, F: PrimeField> Default for EmulatedField<P, F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: FieldParams, F: PrimeField> EmulatedField<P, F> {
    pub fn new() -> Self {
        Self {
            nb_mul: 0,
            nb_reductions: 0,
            nb_range_checks: 0,
            _marker: PhantomData,
        }
    }

    /// Number of multiplications, reduced or not
    pub fn nb_mul(&self) -> usize {
        self.nb_mul
    }

    /// Number of modular reductions
    pub fn nb_reductions(&self) -> usize {
        self.nb_reductions
    }

    /// Number of limbs range checked
    pub fn nb_range_checks(&self) -> usize {
        self.nb_range_checks
    }

    pub fn zero(&self) -> Element<P, F> {
        Element::from_value(&BigUint::default(), P::NB_LIMBS)
    }

    pub fn one(&self) -> Element<P, F> {
        Element::from_value(&BigUint::from(1u32), P::NB_LIMBS)
    }

    /// A reduced constant
    pub fn constant(&self, value: &BigUint) -> Element<P, F> {
        Element::from_value(&value.mod_floor(P::modulus()), P::NB_LIMBS)
    }

    /// Imports limbs given by a hint. Each limb is range checked to
    /// `P::BITS_PER_LIMB` bits; the value itself is not required to be
    /// smaller than the modulus.
    pub fn new_element(&mut self, limbs: Vec<F>) -> Result<Element<P, F>, EmulationError> {
        if limbs.len() != P::NB_LIMBS {
            return Err(EmulationError::LimbCount(limbs.len(), P::NB_LIMBS));
        }
        for (i, limb) in limbs.iter().enumerate() {
            if limb.to_biguint().bits() as usize > P::BITS_PER_LIMB {
                return Err(EmulationError::LimbOverflow(i, P::BITS_PER_LIMB));
            }
        }
        self.nb_range_checks += limbs.len();
        Ok(Element {
            limbs,
            _marker: PhantomData,
        })
    }

    /// Recomposes little endian bits into a reduced element
    pub fn from_bits(&mut self, bits: &[bool]) -> Element<P, F> {
        let value = bits
            .iter()
            .rev()
            .fold(BigUint::default(), |acc, bit| (acc << 1) + u32::from(*bit));
        self.reduce_value(&value)
    }

    fn reduce_value(&mut self, value: &BigUint) -> Element<P, F> {
        self.nb_reductions += 1;
        self.nb_range_checks += P::NB_LIMBS;
        Element::from_value(&value.mod_floor(P::modulus()), P::NB_LIMBS)
    }

    pub fn reduce(&mut self, a: &Element<P, F>) -> Element<P, F> {
        self.reduce_value(&a.value())
    }

    pub fn add(&mut self, a: &Element<P, F>, b: &Element<P, F>) -> Element<P, F> {
        self.reduce_value(&(a.value() + b.value()))
    }

    pub fn sub(&mut self, a: &Element<P, F>, b: &Element<P, F>) -> Element<P, F> {
        let modulus = P::modulus();
        let b = b.value().mod_floor(modulus);
        self.reduce_value(&(a.value() + modulus - b))
    }

    pub fn mul(&mut self, a: &Element<P, F>, b: &Element<P, F>) -> Element<P, F> {
        self.nb_mul += 1;
        self.reduce_value(&(a.value() * b.value()))
    }

    /// Product without reduction
    pub fn mul_no_reduce(&mut self, a: &Element<P, F>, b: &Element<P, F>) -> Element<P, F> {
        self.nb_mul += 1;
        Element::from_value(&(a.value() * b.value()), P::NB_LIMBS)
    }

    /// Sum of all terms without reduction
    pub fn sum(&mut self, terms: &[&Element<P, F>]) -> Element<P, F> {
        let value = terms
            .iter()
            .fold(BigUint::default(), |acc, t| acc + t.value());
        Element::from_value(&value, P::NB_LIMBS)
    }

    /// Whether both elements are congruent modulo `P`
    pub fn is_equal(&self, a: &Element<P, F>, b: &Element<P, F>) -> bool {
        a.value().mod_floor(P::modulus()) == b.value().mod_floor(P::modulus())
    }
}
