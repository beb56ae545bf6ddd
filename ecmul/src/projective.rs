//! Projective point arithmetic over the foreign base field, on integers.
//!
//! The formulas are the complete ones of Renes, Costello and Batina
//! (<https://eprint.iacr.org/2015/1060>, algorithms 7 and 9) for short
//! Weierstrass curves `y² = x³ + b`. They need no special casing of the
//! identity `(0 : 1 : 0)` and are valid for curves without 2-torsion.
//!
//! Every operation returns a fresh point; inputs are never mutated.

use crate::engine::BigIntEngine;
use num_bigint::BigUint;

/// A point `(X : Y : Z)` representing the affine point `(X/Z, Y/Z)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectivePoint {
    pub x: BigUint,
    pub y: BigUint,
    pub z: BigUint,
}

impl ProjectivePoint {
    pub fn new(x: BigUint, y: BigUint, z: BigUint) -> Self {
        Self { x, y, z }
    }

    /// The point at infinity `(0 : 1 : 0)`
    pub fn identity() -> Self {
        Self::new(BigUint::default(), BigUint::from(1u32), BigUint::default())
    }

    pub fn from_affine(x: &BigUint, y: &BigUint) -> Self {
        Self::new(x.clone(), y.clone(), BigUint::from(1u32))
    }

    pub fn is_identity(&self) -> bool {
        self.z.bits() == 0
    }

    /// Affine coordinates, `None` for the identity
    pub fn to_affine(&self, api: &BigIntEngine) -> Option<(BigUint, BigUint)> {
        let z_inv = api.inverse(&self.z)?;
        Some((api.mul(&self.x, &z_inv), api.mul(&self.y, &z_inv)))
    }

    /// Whether both points represent the same group element
    pub fn equivalent(&self, other: &Self, api: &BigIntEngine) -> bool {
        match (self.is_identity(), other.is_identity()) {
            (true, true) => true,
            (false, false) => {
                api.mul(&self.x, &other.z) == api.mul(&other.x, &self.z)
                    && api.mul(&self.y, &other.z) == api.mul(&other.y, &self.z)
            }
            _ => false,
        }
    }

    /// Complete addition `self + other`, with `b3 = 3·b`
    pub fn add(&self, other: &Self, api: &BigIntEngine, b3: &BigUint) -> Self {
        let (x1, y1, z1) = (&self.x, &self.y, &self.z);
        let (x2, y2, z2) = (&other.x, &other.y, &other.z);

        let t0 = api.mul(x1, x2);
        let t1 = api.mul(y1, y2);
        let t2 = api.mul(z1, z2);
        let t3 = api.mul(&api.add(x1, y1), &api.add(x2, y2));
        let t4 = api.add(&t0, &t1);
        let t3 = api.sub(&t3, &t4);
        let t4 = api.mul(&api.add(y1, z1), &api.add(y2, z2));
        let t4 = api.sub(&t4, &api.add(&t1, &t2));
        let x3 = api.mul(&api.add(x1, z1), &api.add(x2, z2));
        let y3 = api.sub(&x3, &api.add(&t0, &t2));
        let t0 = api.mul(&t0, &BigUint::from(3u32));
        let t2 = api.mul(b3, &t2);
        let z3 = api.add(&t1, &t2);
        let t1 = api.sub(&t1, &t2);
        let y3 = api.mul(b3, &y3);
        let x3 = api.sub(&api.mul(&t3, &t1), &api.mul(&t4, &y3));
        let y3 = api.add(&api.mul(&t1, &z3), &api.mul(&y3, &t0));
        let z3 = api.add(&api.mul(&z3, &t4), &api.mul(&t0, &t3));

        Self::new(x3, y3, z3)
    }

    /// Complete doubling `2·self`, with `b3 = 3·b`
    pub fn double(&self, api: &BigIntEngine, b3: &BigUint) -> Self {
        let (x, y, z) = (&self.x, &self.y, &self.z);

        let t0 = api.mul(y, y);
        let z3 = api.mul(&t0, &BigUint::from(8u32));
        let t1 = api.mul(y, z);
        let t2 = api.mul(b3, &api.mul(z, z));
        let x3 = api.mul(&t2, &z3);
        let y3 = api.add(&t0, &t2);
        let z3 = api.mul(&t1, &z3);
        let t2 = api.mul(&t2, &BigUint::from(3u32));
        let t0 = api.sub(&t0, &t2);
        let y3 = api.add(&x3, &api.mul(&t0, &y3));
        let x3 = api.mul(&api.mul(&t0, &api.mul(x, y)), &BigUint::from(2u32));

        Self::new(x3, y3, z3)
    }

    /// Returns `a` if `bit == 1` and `b` if `bit == 0`.
    ///
    /// # Panics
    ///
    /// Panics if `bit` is neither 0 nor 1.
    pub fn select(bit: &BigUint, a: &Self, b: &Self) -> Self {
        if *bit == BigUint::from(1u32) {
            a.clone()
        } else if bit.bits() == 0 {
            b.clone()
        } else {
            panic!("selector must be a bit, got {bit}")
        }
    }
}
