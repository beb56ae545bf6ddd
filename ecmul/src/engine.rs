//! Arbitrary precision modular arithmetic used by the hint.
//!
//! Nothing computed here is trusted by the circuit: the results are checked
//! afterwards through the randomized compression of the trace.

use num_bigint::BigUint;
use num_integer::Integer;

/// Modular arithmetic over `BigUint` for a fixed modulus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BigIntEngine {
    modulus: BigUint,
}

impl BigIntEngine {
    pub fn new(modulus: BigUint) -> Self {
        Self { modulus }
    }

    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    pub fn reduce(&self, a: &BigUint) -> BigUint {
        a.mod_floor(&self.modulus)
    }

    pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b).mod_floor(&self.modulus)
    }

    pub fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let b = b.mod_floor(&self.modulus);
        (a + &self.modulus - b).mod_floor(&self.modulus)
    }

    pub fn neg(&self, a: &BigUint) -> BigUint {
        self.sub(&BigUint::default(), a)
    }

    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b).mod_floor(&self.modulus)
    }

    /// Inverse by Fermat's little theorem, the modulus being prime.
    /// Returns `None` for zero.
    pub fn inverse(&self, a: &BigUint) -> Option<BigUint> {
        let a = self.reduce(a);
        if a.bits() == 0 {
            return None;
        }
        let exp = &self.modulus - 2u32;
        Some(a.modpow(&exp, &self.modulus))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_modulus() {
        let api = BigIntEngine::new(BigUint::from(163u32));
        let a = BigUint::from(150u32);
        let b = BigUint::from(20u32);
        assert_eq!(api.add(&a, &b), BigUint::from(7u32));
        assert_eq!(api.sub(&b, &a), BigUint::from(33u32));
        assert_eq!(api.mul(&a, &b), BigUint::from(3000u32 % 163));
        assert_eq!(api.neg(&BigUint::default()), BigUint::default());
        let inv = api.inverse(&a).unwrap();
        assert_eq!(api.mul(&a, &inv), BigUint::from(1u32));
        assert_eq!(api.inverse(&BigUint::from(163u32)), None);
    }

    #[test]
    fn test_no_overflow_on_wide_operands() {
        let modulus: BigUint = (BigUint::from(1u32) << 255) - 19u32;
        let api = BigIntEngine::new(modulus.clone());
        let a = &modulus - 1u32;
        // (p - 1)² = 1 mod p
        assert_eq!(api.mul(&a, &a), BigUint::from(1u32));
        assert_eq!(api.add(&a, &a), &modulus - 2u32);
    }
}
