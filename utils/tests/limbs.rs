use ecmul_utils::{decompose, recompose, LimbError};
use num_bigint::BigUint;
use proptest::prelude::*;

fn secp256k1_modulus() -> BigUint {
    BigUint::parse_bytes(
        b"fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f",
        16,
    )
    .unwrap()
}

fn arb_biguint(max_bytes: usize) -> impl Strategy<Value = BigUint> {
    prop::collection::vec(any::<u8>(), 0..=max_bytes).prop_map(|bytes| BigUint::from_bytes_le(&bytes))
}

#[test]
fn test_secp256k1_modulus_limbs() {
    let modulus = secp256k1_modulus();
    let limbs = decompose(&modulus, 64, 4).unwrap();
    assert_eq!(
        limbs,
        vec![
            BigUint::from(0xfffffffefffffc2fu64),
            BigUint::from(u64::MAX),
            BigUint::from(u64::MAX),
            BigUint::from(u64::MAX),
        ]
    );
    assert_eq!(recompose(&limbs, 64).unwrap(), modulus);
}

#[test]
fn test_empty_limbs_are_invalid() {
    assert_eq!(
        recompose(&[], 64),
        Err(LimbError::InvalidInput("zero length limb slice"))
    );
    assert_eq!(
        decompose(&BigUint::default(), 64, 0),
        Err(LimbError::InvalidInput("zero length destination"))
    );
}

#[test]
fn test_overflow_boundary() {
    // 2^256 - 1 fits 4 limbs of 64 bits, 2^256 does not
    let max = (BigUint::from(1u32) << 256) - 1u32;
    assert!(decompose(&max, 64, 4).is_ok());
    let too_big = BigUint::from(1u32) << 256;
    assert_eq!(
        decompose(&too_big, 64, 4),
        Err(LimbError::Overflow {
            bits: 257,
            nb_limbs: 4,
            width: 64
        })
    );
}

proptest! {
    #[test]
    fn prop_decompose_recompose(x in arb_biguint(40), width in 1usize..80, nb_limbs in 1usize..8) {
        let fits = x.bits() as usize <= width * nb_limbs;
        match decompose(&x, width, nb_limbs) {
            Ok(limbs) => {
                prop_assert!(fits);
                prop_assert_eq!(limbs.len(), nb_limbs);
                prop_assert!(limbs.iter().all(|l| l.bits() as usize <= width));
                prop_assert_eq!(recompose(&limbs, width).unwrap(), x);
            }
            Err(LimbError::Overflow { .. }) => prop_assert!(!fits),
            Err(e) => prop_assert!(false, "unexpected error {e}"),
        }
    }
}
