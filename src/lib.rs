//! Single-block AES (Rijndael) encryption and decryption as specified by FIPS-197.
//!
//! This crate implements the AES block cipher core: the GF(2⁸) field
//! arithmetic, the substitution/permutation/diffusion round transformations,
//! and the key-schedule expansion for 128-, 192-, and 256-bit keys. Each call
//! to [`encrypt`] or [`decrypt`] processes exactly one 16-byte block; modes of
//! operation, padding, and authenticated encryption are left to the caller.
//!
//! The implementation substitutes bytes through a 256-byte lookup table, which
//! is vulnerable to [cache-based side-channel attacks][t-table]. It aims for
//! clarity and bit-exact fidelity to the standard rather than constant-time
//! guarantees; a hardened deployment should substitute a constant-time S-box.
//!
//! [t-table]: https://access.redhat.com/blogs/766093/posts/1976303
//!
//! The state is held in column-major order per FIPS-197 §3.4: the flat input
//! byte stream `in0..in15` fills the 4×4 grid one column at a time, and the
//! output block reverses the mapping, so round trips are byte-exact from the
//! caller's perspective.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod util;

pub mod block;
mod error;
pub mod key;
pub mod ops;

mod sbox {
    //! Substitution tables generated at build time from the GF(2⁸) inverse
    //! table and the FIPS-197 affine transformation.
    include!(concat!(env!("OUT_DIR"), "/sbox.rs"));
}

pub use self::block::{Block, BLOCK_LEN};
pub use self::error::Error;
pub use self::key::{Key, Schedule};
pub use self::ops::Cipher;
pub use self::sbox::{INV_SBOX, SBOX};

/// The result of a fallible cipher operation.
pub type Result<T> = core::result::Result<T, Error>;

/// Encrypts a single 16-byte block under a 128-, 192-, or 256-bit key.
///
/// The key length selects the round count (10, 12, or 14). Any other key or
/// block length is rejected before any computation takes place.
pub fn encrypt(block: &[u8], key: &[u8]) -> Result<[u8; BLOCK_LEN]> {
    let key = Key::from_bytes(key)?;
    let mut state = Block::try_from(block)?;

    state.encrypt(Schedule::from(key).as_slice());

    Ok(state.into())
}

/// Decrypts a single 16-byte block under a 128-, 192-, or 256-bit key.
///
/// Uses the same expanded key schedule as [`encrypt`], consumed in reverse
/// round order.
pub fn decrypt(block: &[u8], key: &[u8]) -> Result<[u8; BLOCK_LEN]> {
    let key = Key::from_bytes(key)?;
    let mut state = Block::try_from(block)?;

    state.decrypt(Schedule::from(key).as_slice());

    Ok(state.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sbox_tables_are_mutually_inverse() {
        for x in 0..=255u8 {
            assert_eq!(INV_SBOX[SBOX[x as usize] as usize], x);
            assert_eq!(SBOX[INV_SBOX[x as usize] as usize], x);
        }
    }

    #[test]
    fn sbox_spot_checks() {
        // FIPS-197 figure 7.
        assert_eq!(SBOX[0x00], 0x63);
        assert_eq!(SBOX[0x01], 0x7c);
        assert_eq!(SBOX[0x53], 0xed);
        assert_eq!(SBOX[0xff], 0x16);
    }
}
