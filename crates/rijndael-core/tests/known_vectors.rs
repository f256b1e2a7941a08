//! Differential checks against published AES-128 vectors.

use rijndael_core::selftest::VECTORS;
use rijndael_core::{decrypt_block, encrypt_block, expand_key, Aes128, Aes128Key, Buffer, Error};

fn decode(hex_str: &str) -> Vec<u8> {
    hex::decode(hex_str.replace(' ', "")).unwrap()
}

#[test]
fn every_published_vector_round_trips_through_the_facade() {
    for vector in VECTORS {
        let ct = encrypt_block(&vector.plaintext, &vector.key).unwrap();
        assert_eq!(ct, vector.ciphertext, "{}", vector.name);
        let pt = decrypt_block(&ct, &vector.key).unwrap();
        assert_eq!(pt, vector.plaintext, "{}", vector.name);
    }
}

#[test]
fn cross_check_sample_from_spaced_hex() {
    let plaintext = decode("01 02 03 04 05 06 07 08 09 0A 0B 0C 0D 0E 0F 10");
    let key = decode("32 14 2E 56 43 09 46 1B 4B 11 33 11 04 08 06 63");
    let expected = decode("4B 95 86 93 B4 E9 C4 EB 92 B3 E8 69 AF 40 E0 CE");
    assert_eq!(encrypt_block(&plaintext, &key).unwrap().to_vec(), expected);
}

#[test]
fn fips_197_c1_is_pinned() {
    let plaintext = decode("00112233445566778899aabbccddeeff");
    let key = decode("000102030405060708090a0b0c0d0e0f");
    let ct = encrypt_block(&plaintext, &key).unwrap();
    assert_eq!(hex::encode(ct), "69c4e0d86a7b0430d8cdb78070b4c55a");
}

#[test]
fn ecb_stream_under_cached_schedule() {
    // SP 800-38A F.1.1, four blocks under one key.
    let key = Aes128Key::from_slice(&decode("2b7e151628aed2a6abf7158809cf4f3c")).unwrap();
    let cipher = Aes128::new(&key);
    let plaintext = decode(
        "6bc1bee22e409f96e93d7e117393172a ae2d8a571e03ac9c9eb76fac45af8e51 \
         30c81c46a35ce411e5fbc1191a0a52ef f69f2445df4f9b17ad2b417be66c3710",
    );
    let expected = decode(
        "3ad77bb40d7a3660a89ecaf32466ef97 f5d3d58503b9699de785895a96fdbaaf \
         43b1cd7f598ece23881b00e3ed030688 7b0c785e27e8ad3f8223207104725dd4",
    );
    let mut data = plaintext.clone();
    for chunk in data.chunks_exact_mut(16) {
        let mut block = [0u8; 16];
        block.copy_from_slice(chunk);
        cipher.encrypt_in_place(&mut block);
        chunk.copy_from_slice(&block);
    }
    assert_eq!(data, expected);
    for chunk in data.chunks_exact_mut(16) {
        let mut block = [0u8; 16];
        block.copy_from_slice(chunk);
        cipher.decrypt_in_place(&mut block);
        chunk.copy_from_slice(&block);
    }
    assert_eq!(data, plaintext);
    assert_eq!(cipher.round_keys(), &expand_key(&key));
}

#[test]
fn invalid_lengths_never_produce_output() {
    let key = [0u8; 16];
    for len in [0usize, 1, 15, 17, 32] {
        let buf = vec![0xffu8; len];
        assert_eq!(
            encrypt_block(&buf, &key).unwrap_err(),
            Error::InvalidLength {
                what: Buffer::Block,
                expected: 16,
                actual: len
            }
        );
        assert!(matches!(
            decrypt_block(&key, &buf),
            Err(Error::InvalidLength {
                what: Buffer::Key,
                ..
            })
        ));
    }
}
