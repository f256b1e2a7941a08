//! Single-block AES-128 (Rijndael) cipher engine.
//!
//! This crate mirrors the FIPS-197 specification for the 128-bit key,
//! 10-round variant and provides:
//! - GF(2^8) arithmetic and compile-time derived S-boxes.
//! - The AES-128 key schedule, cacheable per key as [`RoundKeys`] / [`Aes128`].
//! - Single-block encryption and decryption, checked ([`encrypt_block`]) and
//!   fixed-size ([`encrypt_with_schedule`]).
//! - The individual round transformations, for cross-validation.
//! - A known-answer [`selftest`].
//!
//! Modes of operation, padding and key derivation are left to callers.
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod gf;
mod key;
mod round;
mod sbox;
mod schedule;
pub mod selftest;

pub use crate::block::{xor_in_place, Block, BLOCK_SIZE};
pub use crate::cipher::{
    decrypt_block, decrypt_with_schedule, encrypt_block, encrypt_with_schedule, Aes128,
};
pub use crate::error::{Buffer, Error, Result};
pub use crate::gf::{gf_inverse, gf_multiply, xtime};
pub use crate::key::{Aes128Key, KEY_SIZE};
pub use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
pub use crate::sbox::{inverse_sbox_lookup, sbox_lookup};
pub use crate::schedule::{expand_key, RoundKeys, EXPANDED_KEY_SIZE, RCON, ROUNDS, ROUND_KEYS};
