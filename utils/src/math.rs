//! Integer logarithms sizing the multilinear evaluation point.

/// Returns floor(log2(d)), i.e. the bit length of `d` minus one.
/// Panics if d = 0.
pub fn floor_log2(d: usize) -> usize {
    assert!(d != 0);
    (usize::BITS - 1 - d.leading_zeros()) as usize
}
