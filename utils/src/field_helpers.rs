use ark_ff::{BigInteger, PrimeField};
use num_bigint::BigUint;
use thiserror::Error;

// Field helpers error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldHelpersError {
    #[error("integer does not fit in the native field ({0} bits)")]
    NotInField(u64),
}
pub type Result<T> = std::result::Result<T, FieldHelpersError>;

/// Conversions between native field elements, bits and big integers
pub trait FieldHelpers<F> {
    /// Converts a big integer strictly smaller than the modulus, without
    /// reducing it
    fn from_biguint(big: &BigUint) -> Result<F>;

    /// Canonical integer representative
    fn to_biguint(&self) -> BigUint;

    /// Little endian bits of the canonical representative, truncated or zero
    /// padded to `nb_digits`
    fn to_bits_le(&self, nb_digits: usize) -> Vec<bool>;

    /// Get the modulus as `BigUint`
    fn modulus_biguint() -> BigUint;
}

impl<F: PrimeField> FieldHelpers<F> for F {
    fn from_biguint(big: &BigUint) -> Result<F> {
        if *big >= Self::modulus_biguint() {
            return Err(FieldHelpersError::NotInField(big.bits()));
        }
        Ok(F::from(big.clone()))
    }

    fn to_biguint(&self) -> BigUint {
        (*self).into()
    }

    fn to_bits_le(&self, nb_digits: usize) -> Vec<bool> {
        let mut bits = self.into_bigint().to_bits_le();
        bits.resize(nb_digits, false);
        bits
    }

    fn modulus_biguint() -> BigUint {
        F::MODULUS.into()
    }
}
