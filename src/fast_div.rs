//! Division by 10 and 100 without a hardware divider.
//!
//! The quotient is first approximated with shifts and adds. The approximation
//! never exceeds the real quotient and is at most one short of it for any
//! `u32`, so a single correction step on the remainder makes it exact.

/// Returns `(x / 10, x % 10)`.
#[inline]
pub fn div_mod_10(x: u32) -> (u32, u32) {
    // q ~= x * 0.8, then / 8
    let mut q = (x >> 1) + (x >> 2);
    q += q >> 4;
    q += q >> 8;
    q += q >> 16;
    q >>= 3;

    let mut r = x - q * 10;
    while r > 9 {
        q += 1;
        r -= 10;
    }
    (q, r)
}

/// Returns `(x / 100, x % 100)`.
#[inline]
pub fn div_mod_100(x: u32) -> (u32, u32) {
    // q ~= x * 0.64, then / 64
    let mut q = (x >> 1) + (x >> 3) + (x >> 6) - (x >> 10) + (x >> 12) + (x >> 13) - (x >> 16);
    q += q >> 20;
    q >>= 6;

    let mut r = x - q * 100;
    while r > 99 {
        q += 1;
        r -= 100;
    }
    (q, r)
}
