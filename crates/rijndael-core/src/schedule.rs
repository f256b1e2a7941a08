//! AES-128 key expansion into 11 round keys.

use core::fmt;

use crate::block::Block;
use crate::gf::xtime;
use crate::key::Aes128Key;
use crate::sbox::sbox_lookup;

/// Number of full rounds for a 128-bit key.
pub const ROUNDS: usize = 10;

/// Number of round keys produced by the key schedule.
pub const ROUND_KEYS: usize = ROUNDS + 1;

/// Total bytes of expanded key material.
pub const EXPANDED_KEY_SIZE: usize = ROUND_KEYS * 16;

const WORDS: usize = ROUND_KEYS * 4;

const fn round_constants() -> [u8; ROUNDS] {
    let mut rcon = [0u8; ROUNDS];
    rcon[0] = 0x01;
    let mut i = 1;
    while i < ROUNDS {
        rcon[i] = xtime(rcon[i - 1]);
        i += 1;
    }
    rcon
}

/// Round constants, successive powers of `x` in GF(2^8).
pub const RCON: [u8; ROUNDS] = round_constants();

const _: () = assert!(RCON[ROUNDS - 1] == 0x36, "round constant sequence is wrong");

fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

fn sub_word(word: u32) -> u32 {
    u32::from_be_bytes(word.to_be_bytes().map(sbox_lookup))
}

/// Expanded round keys for AES-128.
///
/// Derived once per key and reused for any number of blocks. Owned by the
/// caller; nothing about it is shared across keys.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RoundKeys([Block; ROUND_KEYS]);

impl RoundKeys {
    /// Runs the key schedule.
    pub fn expand(key: &Aes128Key) -> Self {
        let mut w = [0u32; WORDS];
        for (word, chunk) in w.iter_mut().zip(key.as_bytes().chunks_exact(4)) {
            *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        for i in 4..WORDS {
            let mut temp = w[i - 1];
            if i % 4 == 0 {
                temp = sub_word(rot_word(temp)) ^ (u32::from(RCON[i / 4 - 1]) << 24);
            }
            w[i] = w[i - 4] ^ temp;
        }

        let mut round_keys = [[0u8; 16]; ROUND_KEYS];
        for (round_key, words) in round_keys.iter_mut().zip(w.chunks_exact(4)) {
            for (dst, word) in round_key.chunks_exact_mut(4).zip(words) {
                dst.copy_from_slice(&word.to_be_bytes());
            }
        }
        Self(round_keys)
    }

    /// Returns the round key at the requested index (0..=10).
    ///
    /// # Panics
    ///
    /// Panics if `round > 10`.
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }

    /// Number of round keys held; always 11.
    #[inline]
    pub fn count(&self) -> usize {
        self.0.len()
    }

    /// Flattened 176-byte expanded key.
    pub fn as_bytes(&self) -> [u8; EXPANDED_KEY_SIZE] {
        let mut out = [0u8; EXPANDED_KEY_SIZE];
        for (dst, round_key) in out.chunks_exact_mut(16).zip(self.0.iter()) {
            dst.copy_from_slice(round_key);
        }
        out
    }
}

impl fmt::Debug for RoundKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoundKeys")
            .field("count", &self.count())
            .finish_non_exhaustive()
    }
}

/// Expands a 128-bit key into 11 round keys.
pub fn expand_key(key: &Aes128Key) -> RoundKeys {
    RoundKeys::expand(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIPS_A1_KEY: [u8; 16] = [
        0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f,
        0x3c,
    ];

    #[test]
    fn round_constants_are_powers_of_x() {
        assert_eq!(
            RCON,
            [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36]
        );
    }

    #[test]
    fn expansion_matches_fips_appendix_a1() {
        let rks = expand_key(&Aes128Key::from(FIPS_A1_KEY));
        assert_eq!(rks.count(), ROUND_KEYS);
        assert_eq!(rks.get(0), &FIPS_A1_KEY);
        assert_eq!(
            rks.get(1),
            &[
                0xa0, 0xfa, 0xfe, 0x17, 0x88, 0x54, 0x2c, 0xb1, 0x23, 0xa3, 0x39, 0x39, 0x2a, 0x6c,
                0x76, 0x05
            ]
        );
        assert_eq!(
            rks.get(10),
            &[
                0xd0, 0x14, 0xf9, 0xa8, 0xc9, 0xee, 0x25, 0x89, 0xe1, 0x3f, 0x0c, 0xc8, 0xb6, 0x63,
                0x0c, 0xa6
            ]
        );
    }

    #[test]
    fn flattened_schedule_is_176_bytes_in_round_order() {
        let rks = expand_key(&Aes128Key::from(FIPS_A1_KEY));
        let flat = rks.as_bytes();
        assert_eq!(flat.len(), EXPANDED_KEY_SIZE);
        for round in 0..ROUND_KEYS {
            assert_eq!(&flat[round * 16..(round + 1) * 16], rks.get(round));
        }
    }

    #[test]
    fn debug_does_not_print_round_keys() {
        let rks = expand_key(&Aes128Key::from([0x5c; 16]));
        assert_eq!(format!("{rks:?}"), "RoundKeys { count: 11, .. }");
    }
}
