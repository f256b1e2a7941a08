//! AES-128 block encryption/decryption and the caller-owned cipher object.

use core::fmt;

use crate::block::{block_from_slice, Block};
use crate::error::{Buffer, Result};
use crate::key::Aes128Key;
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::schedule::{RoundKeys, ROUNDS};

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_with_schedule(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = *block;

    add_round_key(&mut state, round_keys.get(0));

    for round in 1..ROUNDS {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_keys.get(round));
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, round_keys.get(ROUNDS));

    state
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
pub fn decrypt_with_schedule(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = *block;

    add_round_key(&mut state, round_keys.get(ROUNDS));
    for round in (1..ROUNDS).rev() {
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, round_keys.get(round));
        inv_mix_columns(&mut state);
    }
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);
    add_round_key(&mut state, round_keys.get(0));

    state
}

/// Encrypts one block under `key`.
///
/// Both buffers must be exactly 16 bytes; anything else yields
/// [`Error::InvalidLength`](crate::Error::InvalidLength) naming the buffer.
pub fn encrypt_block(plaintext: &[u8], key: &[u8]) -> Result<Block> {
    let block = block_from_slice(plaintext, Buffer::Block)?;
    let key = Aes128Key::from_slice(key)?;
    Ok(encrypt_with_schedule(&block, &RoundKeys::expand(&key)))
}

/// Decrypts one block under `key`. Inverse of [`encrypt_block`].
pub fn decrypt_block(ciphertext: &[u8], key: &[u8]) -> Result<Block> {
    let block = block_from_slice(ciphertext, Buffer::Block)?;
    let key = Aes128Key::from_slice(key)?;
    Ok(decrypt_with_schedule(&block, &RoundKeys::expand(&key)))
}

/// AES-128 with the key schedule computed once and reused across blocks.
#[derive(Clone)]
pub struct Aes128 {
    round_keys: RoundKeys,
}

impl Aes128 {
    /// Expands `key` and keeps the schedule.
    pub fn new(key: &Aes128Key) -> Self {
        Self {
            round_keys: RoundKeys::expand(key),
        }
    }

    /// Like [`Aes128::new`] but takes an unchecked byte slice.
    pub fn from_slice(key: &[u8]) -> Result<Self> {
        Ok(Self::new(&Aes128Key::from_slice(key)?))
    }

    /// The cached round keys.
    pub fn round_keys(&self) -> &RoundKeys {
        &self.round_keys
    }

    /// Encrypts a block, returning the ciphertext.
    pub fn encrypt_block(&self, block: &Block) -> Block {
        encrypt_with_schedule(block, &self.round_keys)
    }

    /// Decrypts a block, returning the plaintext.
    pub fn decrypt_block(&self, block: &Block) -> Block {
        decrypt_with_schedule(block, &self.round_keys)
    }

    /// Encrypts a block in place.
    pub fn encrypt_in_place(&self, block: &mut Block) {
        *block = self.encrypt_block(block);
    }

    /// Decrypts a block in place.
    pub fn decrypt_in_place(&self, block: &mut Block) {
        *block = self.decrypt_block(block);
    }
}

impl fmt::Debug for Aes128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Aes128 { .. }")
    }
}
