//! Arithmetic in GF(2^8) modulo the Rijndael polynomial x^8 + x^4 + x^3 + x + 1.
//!
//! Addition in this field is XOR. Everything here is `const fn` so the
//! substitution tables can be derived at compile time.

/// Low byte of the reduction polynomial `0x11B`.
pub const REDUCTION: u8 = 0x1b;

/// Multiplies a field element by `x` (the element `{02}`).
#[inline]
pub const fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ REDUCTION
    } else {
        shifted
    }
}

/// Multiplies two field elements by shift-and-add with reduction.
#[inline]
pub const fn gf_multiply(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    let mut bit = 0;
    while bit < 8 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = xtime(a);
        b >>= 1;
        bit += 1;
    }
    product
}

/// Returns the multiplicative inverse of `a`, with `0` mapping to `0`.
///
/// Computed as `a^254`, which is `a^-1` for every nonzero element of the
/// multiplicative group of order 255.
pub const fn gf_inverse(a: u8) -> u8 {
    let mut result = 1u8;
    let mut base = a;
    let mut exp = 254u8;
    while exp != 0 {
        if exp & 1 != 0 {
            result = gf_multiply(result, base);
        }
        base = gf_multiply(base, base);
        exp >>= 1;
    }
    result
}
