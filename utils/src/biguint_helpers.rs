//! This module provides a set of helpers on big integers used when
//! marshaling foreign field values.
use num_bigint::BigUint;

/// Helpers for BigUint
pub trait BigUintHelpers {
    /// Returns the minimum number of bits required to represent a BigUint
    /// As opposed to BigUint::bits, this function returns 1 for the input zero
    fn bitlen(&self) -> usize;

    /// Big endian bytes, left padded with zeros to `len` bytes.
    /// Returns `None` if the value does not fit in `len` bytes.
    fn to_bytes_be_padded(&self, len: usize) -> Option<Vec<u8>>;
}

impl BigUintHelpers for BigUint {
    fn bitlen(&self) -> usize {
        if self.bits() == 0 {
            1
        } else {
            self.bits() as usize
        }
    }

    fn to_bytes_be_padded(&self, len: usize) -> Option<Vec<u8>> {
        let bytes = if self.bits() == 0 {
            vec![]
        } else {
            self.to_bytes_be()
        };
        if bytes.len() > len {
            return None;
        }
        let mut res = vec![0u8; len - bytes.len()];
        res.extend_from_slice(&bytes);
        Some(res)
    }
}
