//! Forward and inverse S-boxes, derived from field inverses at compile time.

use crate::gf::gf_inverse;

/// Constant XORed in by the affine step.
const AFFINE_CONSTANT: u8 = 0x63;

/// Affine bit transformation applied on top of the field inverse.
#[inline]
pub(crate) const fn affine(b: u8) -> u8 {
    b ^ b.rotate_left(1) ^ b.rotate_left(2) ^ b.rotate_left(3) ^ b.rotate_left(4) ^ AFFINE_CONSTANT
}

const fn build_sbox() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = affine(gf_inverse(i as u8));
        i += 1;
    }
    table
}

const fn invert(table: &[u8; 256]) -> [u8; 256] {
    let mut inverse = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        inverse[table[i] as usize] = i as u8;
        i += 1;
    }
    inverse
}

pub(crate) const SBOX: [u8; 256] = build_sbox();
pub(crate) const INV_SBOX: [u8; 256] = invert(&SBOX);

// A non-bijective SBOX leaves INV_SBOX with overwritten slots, which this catches.
const _: () = {
    let mut i = 0;
    while i < 256 {
        assert!(
            INV_SBOX[SBOX[i] as usize] as usize == i,
            "inverse S-box does not invert the S-box"
        );
        i += 1;
    }
};

/// Forward S-box lookup used by SubBytes and the key schedule.
#[inline]
pub fn sbox_lookup(byte: u8) -> u8 {
    SBOX[byte as usize]
}

/// Inverse S-box lookup used by InvSubBytes.
#[inline]
pub fn inverse_sbox_lookup(byte: u8) -> u8 {
    INV_SBOX[byte as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_entries() {
        assert_eq!(sbox_lookup(0x00), 0x63);
        assert_eq!(sbox_lookup(0x01), 0x7c);
        assert_eq!(sbox_lookup(0x53), 0xed);
        assert_eq!(sbox_lookup(0xff), 0x16);
        assert_eq!(inverse_sbox_lookup(0x00), 0x52);
        assert_eq!(inverse_sbox_lookup(0x63), 0x00);
        assert_eq!(inverse_sbox_lookup(0xed), 0x53);
    }

    #[test]
    fn tables_are_mutual_inverses() {
        for x in 0..=255u8 {
            assert_eq!(inverse_sbox_lookup(sbox_lookup(x)), x);
            assert_eq!(sbox_lookup(inverse_sbox_lookup(x)), x);
        }
    }

    #[test]
    fn no_fixed_points() {
        for x in 0..=255u8 {
            assert_ne!(sbox_lookup(x), x);
            assert_ne!(sbox_lookup(x), !x);
        }
    }
}
