//! Known-answer self-test.
//!
//! Re-checks the table invariants at run time and replays a fixed set of
//! published vectors through both directions of the cipher. Intended for
//! start-up checks in hosts that load the engine, and shared with the
//! differential test suite so both use one vector table.

use hex_literal::hex;

use crate::block::Block;
use crate::cipher::{decrypt_with_schedule, encrypt_with_schedule};
use crate::error::{Error, Result};
use crate::gf::gf_inverse;
use crate::key::Aes128Key;
use crate::sbox::{affine, inverse_sbox_lookup, sbox_lookup};
use crate::schedule::{RoundKeys, ROUND_KEYS};

/// A published key/plaintext/ciphertext triple.
#[derive(Clone, Copy, Debug)]
pub struct KnownAnswer {
    /// Where the vector comes from.
    pub name: &'static str,
    /// Cipher key.
    pub key: [u8; 16],
    /// Input block.
    pub plaintext: Block,
    /// Expected output block.
    pub ciphertext: Block,
}

/// Built-in vectors replayed by [`run`].
pub const VECTORS: &[KnownAnswer] = &[
    KnownAnswer {
        name: "fips-197 appendix b",
        key: hex!("2b7e151628aed2a6abf7158809cf4f3c"),
        plaintext: hex!("3243f6a8885a308d313198a2e0370734"),
        ciphertext: hex!("3925841d02dc09fbdc118597196a0b32"),
    },
    KnownAnswer {
        name: "fips-197 appendix c.1",
        key: hex!("000102030405060708090a0b0c0d0e0f"),
        plaintext: hex!("00112233445566778899aabbccddeeff"),
        ciphertext: hex!("69c4e0d86a7b0430d8cdb78070b4c55a"),
    },
    KnownAnswer {
        name: "cross-check sample",
        key: hex!("32142e564309461b4b11331104080663"),
        plaintext: hex!("0102030405060708090a0b0c0d0e0f10"),
        ciphertext: hex!("4b958693b4e9c4eb92b3e869af40e0ce"),
    },
    KnownAnswer {
        name: "zero key, zero block",
        key: [0u8; 16],
        plaintext: [0u8; 16],
        ciphertext: hex!("66e94bd4ef8a2c3b884cfa59ca342b2e"),
    },
    KnownAnswer {
        name: "sp 800-38a ecb-aes128 block 1",
        key: hex!("2b7e151628aed2a6abf7158809cf4f3c"),
        plaintext: hex!("6bc1bee22e409f96e93d7e117393172a"),
        ciphertext: hex!("3ad77bb40d7a3660a89ecaf32466ef97"),
    },
    KnownAnswer {
        name: "sp 800-38a ecb-aes128 block 2",
        key: hex!("2b7e151628aed2a6abf7158809cf4f3c"),
        plaintext: hex!("ae2d8a571e03ac9c9eb76fac45af8e51"),
        ciphertext: hex!("f5d3d58503b9699de785895a96fdbaaf"),
    },
    KnownAnswer {
        name: "sp 800-38a ecb-aes128 block 3",
        key: hex!("2b7e151628aed2a6abf7158809cf4f3c"),
        plaintext: hex!("30c81c46a35ce411e5fbc1191a0a52ef"),
        ciphertext: hex!("43b1cd7f598ece23881b00e3ed030688"),
    },
    KnownAnswer {
        name: "sp 800-38a ecb-aes128 block 4",
        key: hex!("2b7e151628aed2a6abf7158809cf4f3c"),
        plaintext: hex!("f69f2445df4f9b17ad2b417be66c3710"),
        ciphertext: hex!("7b0c785e27e8ad3f8223207104725dd4"),
    },
];

/// Checks the S-box tables and key schedule shape.
pub fn verify_tables() -> Result<()> {
    for x in 0..=255u8 {
        if inverse_sbox_lookup(sbox_lookup(x)) != x {
            log::error!("inverse S-box mismatch at {:#04x}", x);
            return Err(Error::InvariantViolation(
                "S-box and inverse S-box are not mutual inverses",
            ));
        }
        if sbox_lookup(x) != affine(gf_inverse(x)) {
            log::error!("S-box entry {:#04x} is not affine(inverse)", x);
            return Err(Error::InvariantViolation(
                "S-box does not match the field-inverse construction",
            ));
        }
    }

    let round_keys = RoundKeys::expand(&Aes128Key::from([0u8; 16]));
    if round_keys.count() != ROUND_KEYS {
        return Err(Error::InvariantViolation("key schedule must yield 11 round keys"));
    }
    log::debug!("substitution tables and key schedule verified");
    Ok(())
}

/// Checks a single vector in both directions.
pub fn check(vector: &KnownAnswer) -> Result<()> {
    let round_keys = RoundKeys::expand(&Aes128Key::from(vector.key));
    let ciphertext = encrypt_with_schedule(&vector.plaintext, &round_keys);
    let plaintext = decrypt_with_schedule(&vector.ciphertext, &round_keys);
    if ciphertext != vector.ciphertext || plaintext != vector.plaintext {
        log::error!("known-answer mismatch: {}", vector.name);
        return Err(Error::KnownAnswerMismatch {
            vector: vector.name,
        });
    }
    Ok(())
}

/// Runs the full self-test, stopping at the first failure.
pub fn run() -> Result<()> {
    log::info!("running AES-128 self-test");
    verify_tables()?;
    for vector in VECTORS {
        check(vector)?;
        log::debug!("pass: {}", vector.name);
    }
    log::info!("self-test passed ({} vectors)", VECTORS.len());
    Ok(())
}
