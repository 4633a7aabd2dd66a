//! FIPS-197 known-answer tests exercised through the public API.

use rand::RngCore;

use rijndael::{decrypt, encrypt, Error};

struct Kat<'a> {
    key: &'a str,
    plain: &'a str,
    cipher: &'a str,
}

const KNOWN_ANSWER_TESTS: &[Kat] = &[
    // Appendix B
    Kat {
        key:    "2b7e151628aed2a6abf7158809cf4f3c",
        plain:  "3243f6a8885a308d313198a2e0370734",
        cipher: "3925841d02dc09fbdc118597196a0b32",
    },
    // Appendix C.1, AES-128
    Kat {
        key:    "000102030405060708090a0b0c0d0e0f",
        plain:  "00112233445566778899aabbccddeeff",
        cipher: "69c4e0d86a7b0430d8cdb78070b4c55a",
    },
    // Appendix C.2, AES-192
    Kat {
        key:    "000102030405060708090a0b0c0d0e0f1011121314151617",
        plain:  "00112233445566778899aabbccddeeff",
        cipher: "dda97ca4864cdfe06eaf70a0ec0d7191",
    },
    // Appendix C.3, AES-256
    Kat {
        key:    "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
        plain:  "00112233445566778899aabbccddeeff",
        cipher: "8ea2b7ca516745bfeafc49904b496089",
    },
];

#[test]
fn known_answer_tests() {
    for Kat { key, plain, cipher } in KNOWN_ANSWER_TESTS {
        let key = hex::decode(key).unwrap();
        let plain = hex::decode(plain).unwrap();
        let cipher = hex::decode(cipher).unwrap();

        assert_eq!(encrypt(&plain, &key).unwrap()[..], cipher[..]);
        assert_eq!(decrypt(&cipher, &key).unwrap()[..], plain[..]);
    }
}

#[test]
fn round_trip_random_keys_and_blocks() {
    let mut rng = rand::thread_rng();

    for key_len in [16, 24, 32] {
        let mut key = vec![0u8; key_len];
        let mut block = [0u8; 16];

        for _ in 0..100 {
            rng.fill_bytes(&mut key);
            rng.fill_bytes(&mut block);

            let ct = encrypt(&block, &key).unwrap();
            assert_eq!(decrypt(&ct, &key).unwrap(), block);

            // The mirror composition holds byte-for-byte as well.
            let pt = decrypt(&block, &key).unwrap();
            assert_eq!(encrypt(&pt, &key).unwrap(), block);
        }
    }
}

#[test]
fn rejects_invalid_key_lengths() {
    let block = [0u8; 16];

    for len in [0usize, 1, 15, 17, 23, 25, 31, 33, 64] {
        let key = vec![0u8; len];
        assert_eq!(encrypt(&block, &key), Err(Error::InvalidKeyLength(len)));
        assert_eq!(decrypt(&block, &key), Err(Error::InvalidKeyLength(len)));
    }
}

#[test]
fn rejects_invalid_block_lengths() {
    let key = [0u8; 16];

    for len in [0usize, 1, 15, 17, 32] {
        let block = vec![0u8; len];
        assert_eq!(encrypt(&block, &key), Err(Error::InvalidBlockLength(len)));
        assert_eq!(decrypt(&block, &key), Err(Error::InvalidBlockLength(len)));
    }
}

#[test]
fn key_errors_take_precedence_over_block_errors() {
    // Validation fails fast on the key, before the block is touched.
    assert_eq!(encrypt(&[0u8; 15], &[0u8; 17]), Err(Error::InvalidKeyLength(17)));
}
