//! Key material, round constants, and the key-schedule expansion.

use static_assertions::const_assert_eq;

use crate::block::Block;
use crate::{Error, Result, SBOX};

/// The round constants used for key expansion.
///
/// `ROUND_CONSTANTS[j - 1]` is the first byte of the word `Rcon[j] = {x^(j-1),
/// 00, 00, 00}`, with powers of x taken in GF(2⁸): each constant doubles the
/// previous one, reducing by the field polynomial when doubling carries out of
/// the byte. FIPS-197 indexes `Rcon` from 1.
pub const ROUND_CONSTANTS: [u8; 10] = round_constants();

const fn round_constants() -> [u8; 10] {
    let mut rcon = [0u8; 10];
    let mut r = 1u8;
    let mut j = 0;
    while j < 10 {
        rcon[j] = r;
        r = if r < 0x80 { r << 1 } else { (r << 1) ^ 0x1b };
        j += 1;
    }
    rcon
}

// The reduction kicks in exactly once over the ten constants.
const_assert_eq!(ROUND_CONSTANTS[7], 0x80);
const_assert_eq!(ROUND_CONSTANTS[8], 0x1b);

/// A secret key which has not yet been expanded.
///
/// Must be either 128, 192, or 256 bits long.
#[derive(Clone, Copy)]
pub enum Key<'a> {
    /// A 128-bit key.
    Aes128(&'a [u8; 16]),

    /// A 192-bit key.
    Aes192(&'a [u8; 24]),

    /// A 256-bit key.
    Aes256(&'a [u8; 32]),
}

impl<'a> Key<'a> {
    /// Creates a `Key` from a byte slice.
    ///
    /// The slice must be either 16, 24, or 32 bytes long.
    pub fn from_bytes(key: &'a [u8]) -> Result<Self> {
        if let Ok(key) = key.try_into() {
            Ok(Key::Aes128(key))
        } else if let Ok(key) = key.try_into() {
            Ok(Key::Aes192(key))
        } else if let Ok(key) = key.try_into() {
            Ok(Key::Aes256(key))
        } else {
            Err(Error::InvalidKeyLength(key.len()))
        }
    }

    /// Returns the number of rounds which should be used for a key of this length.
    pub fn rounds(&self) -> usize {
        match self {
            Key::Aes128(_) => 10,
            Key::Aes192(_) => 12,
            Key::Aes256(_) => 14,
        }
    }

    /// The number of 128-bit round keys used for encryption with a key of this length.
    pub fn num_round_keys(&self) -> usize {
        self.rounds() + 1
    }

    /// Returns the length of this key in bytes.
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// The number of 32-bit words in this key (`Nk` in FIPS-197).
    pub fn num_words(&self) -> usize {
        self.len() / 4
    }

    /// A byte slice containing the key material.
    pub fn as_slice(&self) -> &[u8] {
        match self {
            Key::Aes128(a) => &a[..],
            Key::Aes192(a) => &a[..],
            Key::Aes256(a) => &a[..],
        }
    }
}

impl AsRef<[u8]> for Key<'_> {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

/// An expanded key schedule: one `Block`-sized round key per round, plus one.
///
/// Round keys are consumed in forward order during encryption and in reverse
/// order during decryption; decryption uses the same schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Schedule {
    /// The round keys for a 128-bit key.
    Aes128([Block; 11]),

    /// The round keys for a 192-bit key.
    Aes192([Block; 13]),

    /// The round keys for a 256-bit key.
    Aes256([Block; 15]),
}

impl Schedule {
    /// Creates a zero-initialized key schedule with the same length as the given key.
    fn new(key: Key<'_>) -> Self {
        match key {
            Key::Aes128(_) => Schedule::Aes128([Block::default(); 11]),
            Key::Aes192(_) => Schedule::Aes192([Block::default(); 13]),
            Key::Aes256(_) => Schedule::Aes256([Block::default(); 15]),
        }
    }

    /// The round keys in this key schedule.
    pub fn as_slice(&self) -> &[Block] {
        match self {
            Schedule::Aes128(s) => s,
            Schedule::Aes192(s) => s,
            Schedule::Aes256(s) => s,
        }
    }

    fn as_mut_slice(&mut self) -> &mut [Block] {
        match self {
            Schedule::Aes128(s) => s,
            Schedule::Aes192(s) => s,
            Schedule::Aes256(s) => s,
        }
    }

    /// Reads the `n`th 32-bit word of the schedule in big-endian byte order.
    fn word(&self, n: usize) -> u32 {
        let Block(rk) = self.as_slice()[n / 4];
        let i = 4 * (n % 4);
        u32::from_be_bytes([rk[i], rk[i + 1], rk[i + 2], rk[i + 3]])
    }

    fn set_word(&mut self, n: usize, word: u32) {
        let Block(rk) = &mut self.as_mut_slice()[n / 4];
        let i = 4 * (n % 4);
        rk[i..i + 4].copy_from_slice(&word.to_be_bytes());
    }
}

impl AsRef<[Block]> for Schedule {
    fn as_ref(&self) -> &[Block] {
        self.as_slice()
    }
}

/// Cyclically rotates a word one byte to the left: `[b0,b1,b2,b3] -> [b1,b2,b3,b0]`.
///
/// Used only during key expansion, never on the state.
fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

/// Applies the S-box to each of a word's four bytes.
fn sub_word(word: u32) -> u32 {
    let mut bytes = word.to_be_bytes();
    for byte in &mut bytes {
        *byte = SBOX[*byte as usize];
    }

    u32::from_be_bytes(bytes)
}

impl From<Key<'_>> for Schedule {
    /// Expands a cipher key into `4 * (Nr + 1)` schedule words.
    ///
    /// The loop is inherently sequential: every word depends on the word
    /// before it.
    fn from(key: Key<'_>) -> Self {
        let mut sched = Schedule::new(key);

        // The first Nk words are the cipher key verbatim.
        let nk = key.num_words();
        for (i, word) in key.as_slice().chunks_exact(4).enumerate() {
            sched.set_word(i, u32::from_be_bytes([word[0], word[1], word[2], word[3]]));
        }

        for i in nk..(4 * key.num_round_keys()) {
            let mut temp = sched.word(i - 1);
            if i % nk == 0 {
                temp = sub_word(rot_word(temp)) ^ (u32::from(ROUND_CONSTANTS[i / nk - 1]) << 24);
            } else if nk > 6 && i % nk == 4 {
                temp = sub_word(temp);
            }

            sched.set_word(i, sched.word(i - nk) ^ temp);
        }

        sched
    }
}
