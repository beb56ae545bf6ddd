//! Describes the limb codec used to move foreign field integers across the
//! hint boundary.
//!
//! An integer `x` is represented by `n` limbs of `w` bits each, in little
//! endian order, i.e. `x = Σ limbs[i] · 2^(w·i)`. No modular reduction is
//! performed in either direction: the codec is a pure change of base.

use num_bigint::BigUint;
use thiserror::Error;

/// Errors raised by the limb codec
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LimbError {
    #[error("invalid limb input: {0}")]
    InvalidInput(&'static str),

    #[error("decomposed integer does not fit into the destination ({bits} bits > {nb_limbs} limbs of {width} bits)")]
    Overflow {
        bits: usize,
        nb_limbs: usize,
        width: usize,
    },
}

pub type Result<T> = std::result::Result<T, LimbError>;

/// Reconstructs an integer from its little endian base-`2^width` limbs.
///
/// Limbs are not required to be smaller than `2^width`: a wide limb simply
/// carries into the next position.
pub fn recompose(limbs: &[BigUint], width: usize) -> Result<BigUint> {
    if limbs.is_empty() {
        return Err(LimbError::InvalidInput("zero length limb slice"));
    }
    if width == 0 {
        return Err(LimbError::InvalidInput("limb width is zero"));
    }
    let res = limbs
        .iter()
        .rev()
        .fold(BigUint::default(), |acc, limb| (acc << width) + limb);
    Ok(res)
}

/// Splits `input` into exactly `nb_limbs` limbs of `width` bits, in little
/// endian order. Fails with [LimbError::Overflow] if
/// `bits(input) > nb_limbs · width`.
pub fn decompose(input: &BigUint, width: usize, nb_limbs: usize) -> Result<Vec<BigUint>> {
    let mut res = vec![BigUint::default(); nb_limbs];
    decompose_into(input, width, &mut res)?;
    Ok(res)
}

/// Same as [decompose] but writes the limbs into `out`, using `out.len()` as
/// the number of limbs. `out` is left untouched on failure.
pub fn decompose_into(input: &BigUint, width: usize, out: &mut [BigUint]) -> Result<()> {
    if out.is_empty() {
        return Err(LimbError::InvalidInput("zero length destination"));
    }
    if width == 0 {
        return Err(LimbError::InvalidInput("limb width is zero"));
    }
    let bits = input.bits() as usize;
    if bits > out.len() * width {
        return Err(LimbError::Overflow {
            bits,
            nb_limbs: out.len(),
            width,
        });
    }
    let mask = (BigUint::from(1u32) << width) - 1u32;
    let mut tmp = input.clone();
    for limb in out.iter_mut() {
        *limb = &tmp & &mask;
        tmp >>= width;
    }
    Ok(())
}

/// Number of `width` bit limbs needed to hold `bits` bits, at least one.
pub fn nb_limbs_for(bits: usize, width: usize) -> usize {
    bits.div_ceil(width).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recompose_little_endian() {
        let limbs = [BigUint::from(0x1u32), BigUint::from(0x2u32), BigUint::from(0x3u32)];
        assert_eq!(recompose(&limbs, 8).unwrap(), BigUint::from(0x030201u32));
    }

    #[test]
    fn test_recompose_wide_limbs_carry() {
        // 0x1ff is wider than 8 bits and carries into the next limb
        let limbs = [BigUint::from(0x1ffu32), BigUint::from(0x1u32)];
        assert_eq!(recompose(&limbs, 8).unwrap(), BigUint::from(0x2ffu32));
    }

    #[test]
    fn test_decompose_pads_with_zero_limbs() {
        let limbs = decompose(&BigUint::from(0xabu32), 4, 4).unwrap();
        assert_eq!(
            limbs,
            vec![
                BigUint::from(0xbu32),
                BigUint::from(0xau32),
                BigUint::default(),
                BigUint::default()
            ]
        );
    }

    #[test]
    fn test_decompose_into_leaves_output_on_overflow() {
        let mut out = vec![BigUint::from(7u32); 2];
        let err = decompose_into(&BigUint::from(0x100u32), 4, &mut out).unwrap_err();
        assert_eq!(
            err,
            LimbError::Overflow {
                bits: 9,
                nb_limbs: 2,
                width: 4
            }
        );
        assert_eq!(out, vec![BigUint::from(7u32); 2]);
    }

    #[test]
    fn test_zero_width_is_invalid() {
        assert!(matches!(
            recompose(&[BigUint::from(1u32)], 0),
            Err(LimbError::InvalidInput(_))
        ));
        assert!(matches!(
            decompose(&BigUint::from(1u32), 0, 3),
            Err(LimbError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_nb_limbs_for() {
        assert_eq!(nb_limbs_for(0, 64), 1);
        assert_eq!(nb_limbs_for(64, 64), 1);
        assert_eq!(nb_limbs_for(65, 64), 2);
        assert_eq!(nb_limbs_for(256, 64), 4);
    }
}
