//! Integer square root.

use alloy_primitives::Uint;

/// Floor of the square root via Newton's method.
///
/// Generic over the integer width so the same routine serves 256-bit
/// deposits and 512-bit reserve products.
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use cpmm_pool::math::isqrt;
///
/// assert_eq!(isqrt(U256::from(36u8)), U256::from(6u8));
/// assert_eq!(isqrt(U256::from(35u8)), U256::from(5u8));
/// ```
#[must_use]
pub fn isqrt<const BITS: usize, const LIMBS: usize>(n: Uint<BITS, LIMBS>) -> Uint<BITS, LIMBS> {
    if n.is_zero() {
        return n;
    }
    let mut x = n;
    // ceil(n / 2) without the overflow of n + 1
    let mut y = (x >> 1usize) + (x & Uint::<BITS, LIMBS>::ONE);
    while y < x {
        x = y;
        y = (x + n / x) >> 1usize;
    }
    x
}
