//! Compile time descriptors of the emulated fields and curves.
//!
//! A circuit is always instantiated for statically known field parameters,
//! so they are carried as type parameters rather than runtime values. The
//! moduli are kept in lazily initialised immutable statics.

use core::fmt::Debug;
use num_bigint::BigUint;
use once_cell::sync::Lazy;

/// Parameters of an emulated (foreign) prime field
pub trait FieldParams: 'static + Clone + Copy + Debug + PartialEq + Eq {
    /// Width of a limb, in bits
    const BITS_PER_LIMB: usize;

    /// Number of limbs of a reduced element
    const NB_LIMBS: usize;

    /// The prime modulus
    fn modulus() -> &'static BigUint;

    /// Bit length of the modulus
    fn modulus_bits() -> usize {
        Self::modulus().bits() as usize
    }

    /// Number of bytes used to marshal a reduced element
    fn modulus_bytes() -> usize {
        Self::modulus_bits().div_ceil(8)
    }
}

/// Parameters of a short Weierstrass curve `y² = x³ + b` over an emulated
/// base field.
pub trait CurveParams: 'static + Clone + Copy + Debug {
    /// Field of the coordinates
    type Base: FieldParams;

    /// Field of the scalars, i.e. the group order
    type Scalar: FieldParams;

    /// Human readable name used in logs
    const NAME: &'static str;

    /// The `b` coefficient of the curve equation
    fn b() -> &'static BigUint;

    /// `3·b mod p`, used by the complete projective formulas
    fn b3() -> BigUint {
        (Self::b() * 3u32) % Self::Base::modulus()
    }

    /// Affine coordinates of a generator of the prime order group
    fn generator() -> &'static (BigUint, BigUint);
}

/// The base field modulus of secp256k1 (in big endian)
/// FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFE FFFFFC2F
/// given by the computation 2^256 - 2^32 - 2^9 - 2^8 - 2^7 - 2^6 - 2^4 - 1
pub const SECP256K1_MOD: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF, 0xFC, 0x2F,
];

/// The group order of secp256k1 (in big endian)
pub const SECP256K1_ORDER: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE,
    0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36, 0x41, 0x41,
];

const SECP256K1_GX: [u8; 32] = [
    0x79, 0xBE, 0x66, 0x7E, 0xF9, 0xDC, 0xBB, 0xAC, 0x55, 0xA0, 0x62, 0x95, 0xCE, 0x87, 0x0B, 0x07,
    0x02, 0x9B, 0xFC, 0xDB, 0x2D, 0xCE, 0x28, 0xD9, 0x59, 0xF2, 0x81, 0x5B, 0x16, 0xF8, 0x17, 0x98,
];

const SECP256K1_GY: [u8; 32] = [
    0x48, 0x3A, 0xDA, 0x77, 0x26, 0xA3, 0xC4, 0x65, 0x5D, 0xA4, 0xFB, 0xFC, 0x0E, 0x11, 0x08, 0xA8,
    0xFD, 0x17, 0xB4, 0x48, 0xA6, 0x85, 0x54, 0x19, 0x9C, 0x47, 0xD0, 0x8F, 0xFB, 0x10, 0xD4, 0xB8,
];

static SECP256K1_FP_MODULUS: Lazy<BigUint> = Lazy::new(|| BigUint::from_bytes_be(&SECP256K1_MOD));
static SECP256K1_FR_MODULUS: Lazy<BigUint> =
    Lazy::new(|| BigUint::from_bytes_be(&SECP256K1_ORDER));
static SECP256K1_B: Lazy<BigUint> = Lazy::new(|| BigUint::from(7u32));
static SECP256K1_GENERATOR: Lazy<(BigUint, BigUint)> = Lazy::new(|| {
    (
        BigUint::from_bytes_be(&SECP256K1_GX),
        BigUint::from_bytes_be(&SECP256K1_GY),
    )
});

/// Base field of secp256k1, 4 limbs of 64 bits
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Secp256k1Fp;

impl FieldParams for Secp256k1Fp {
    const BITS_PER_LIMB: usize = 64;
    const NB_LIMBS: usize = 4;

    fn modulus() -> &'static BigUint {
        &SECP256K1_FP_MODULUS
    }
}

/// Scalar field of secp256k1, 4 limbs of 64 bits
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Secp256k1Fr;

impl FieldParams for Secp256k1Fr {
    const BITS_PER_LIMB: usize = 64;
    const NB_LIMBS: usize = 4;

    fn modulus() -> &'static BigUint {
        &SECP256K1_FR_MODULUS
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Secp256k1;

impl CurveParams for Secp256k1 {
    type Base = Secp256k1Fp;
    type Scalar = Secp256k1Fr;

    const NAME: &'static str = "secp256k1";

    fn b() -> &'static BigUint {
        &SECP256K1_B
    }

    fn generator() -> &'static (BigUint, BigUint) {
        &SECP256K1_GENERATOR
    }
}

// Toy curve y² = x³ + 7 over F_163. The group has prime order 139 and
// x³ + 7 has no root mod 163, so there is no 2-torsion and the complete
// formulas apply. Small enough to check traces by hand.

static TOY163_FP_MODULUS: Lazy<BigUint> = Lazy::new(|| BigUint::from(163u32));
static TOY163_FR_MODULUS: Lazy<BigUint> = Lazy::new(|| BigUint::from(139u32));
static TOY163_B: Lazy<BigUint> = Lazy::new(|| BigUint::from(7u32));
static TOY163_GENERATOR: Lazy<(BigUint, BigUint)> =
    Lazy::new(|| (BigUint::from(2u32), BigUint::from(34u32)));

/// Base field of the toy curve, 2 limbs of 4 bits
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Toy163Fp;

impl FieldParams for Toy163Fp {
    const BITS_PER_LIMB: usize = 4;
    const NB_LIMBS: usize = 2;

    fn modulus() -> &'static BigUint {
        &TOY163_FP_MODULUS
    }
}

/// Scalar field of the toy curve, 2 limbs of 4 bits
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Toy163Fr;

impl FieldParams for Toy163Fr {
    const BITS_PER_LIMB: usize = 4;
    const NB_LIMBS: usize = 2;

    fn modulus() -> &'static BigUint {
        &TOY163_FR_MODULUS
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Toy163;

impl CurveParams for Toy163 {
    type Base = Toy163Fp;
    type Scalar = Toy163Fr;

    const NAME: &'static str = "toy163";

    fn b() -> &'static BigUint {
        &TOY163_B
    }

    fn generator() -> &'static (BigUint, BigUint) {
        &TOY163_GENERATOR
    }
}
