//! The 16-byte AES state block and its round transformations.

use core::{fmt, ops};

use gf256::Element;

use crate::ops::{AddRoundKey, MixColumns, ShiftRows, SubBytes};
use crate::{Error, INV_SBOX, SBOX};

/// The number of bytes in an AES block.
pub const BLOCK_LEN: usize = 16;

type BlockArray = [u8; BLOCK_LEN];

/// A byte array with the same length as an AES block.
///
/// Bytes are stored in column-major order, so the flat input byte stream
/// `in0..in15` fills the grid one column at a time:
///
///```text
///  0  4  8 12
///  1  5  9 13
///  2  6 10 14
///  3  7 11 15
///```
///
/// Each column is one 4-byte word.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
#[repr(transparent)]
pub struct Block(pub BlockArray);

fn idx(row: usize, col: usize) -> usize {
    debug_assert!(row < 4);
    debug_assert!(col < 4);

    row + 4 * col
}

/// Indexes a block by row, then column.
impl ops::Index<(usize, usize)> for Block {
    type Output = u8;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[idx(row, col)]
    }
}

/// Indexes a block by row, then column.
impl ops::IndexMut<(usize, usize)> for Block {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[idx(row, col)]
    }
}

impl fmt::Debug for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }

        Ok(())
    }
}

impl TryFrom<&[u8]> for Block {
    type Error = Error;

    fn try_from(s: &[u8]) -> Result<Self, Self::Error> {
        s.try_into()
            .map(Block)
            .map_err(|_| Error::InvalidBlockLength(s.len()))
    }
}

impl From<BlockArray> for Block {
    fn from(arr: BlockArray) -> Self {
        Block(arr)
    }
}

impl From<Block> for BlockArray {
    fn from(block: Block) -> Self {
        block.0
    }
}

impl AsRef<[u8]> for Block {
    fn as_ref(&self) -> &[u8] {
        &self.0[..]
    }
}

impl Block {
    /// Iterates over the bytes in a block.
    pub fn iter(&self) -> impl '_ + Iterator<Item = &u8> {
        self.0.iter()
    }

    /// Iterates over the bytes in a block.
    pub fn iter_mut(&mut self) -> impl '_ + Iterator<Item = &mut u8> {
        self.0.iter_mut()
    }

    /// Creates a new `Block` from a byte array in row-major order.
    pub fn from_row_major(bytes: BlockArray) -> Block {
        let mut block = Block(bytes);
        block.transpose();
        block
    }

    /// Transposes an AES block in-place.
    ///
    /// The first row becomes the first column, etc.
    pub fn transpose(&mut self) {
        for row in 0..4 {
            for col in (row + 1)..4 {
                self.0.swap(idx(row, col), idx(col, row));
            }
        }
    }
}

impl SubBytes for Block {
    fn sub_bytes(&mut self) {
        let Block(block) = self;
        for byte in block {
            *byte = SBOX[*byte as usize];
        }
    }

    fn inv_sub_bytes(&mut self) {
        let Block(block) = self;
        for byte in block {
            *byte = INV_SBOX[*byte as usize];
        }
    }
}

impl ShiftRows for Block {
    define_function_of_involutions_with_inverse! {
        #[inverse = inv_shift_rows]
        fn shift_rows(&mut self) {
            // Row 1
            self.0.swap(1, 5);
            self.0.swap(5, 9);
            self.0.swap(9, 13);

            // Row 2
            self.0.swap(2, 10);
            self.0.swap(6, 14);

            // Row 3
            self.0.swap(11, 15);
            self.0.swap(7, 11);
            self.0.swap(3, 7);
        }
    }
}

impl MixColumns for Block {
    fn mix_columns(&mut self) {
        let elem = |r, c| Element(self[(r % 4, c)]);

        let mut tmp = Block::default();
        for col in 0..4 {
            for row in 0..4 {
                let el = Element(2) * elem(row, col)
                       + Element(3) * elem(row + 1, col)
                       + Element(1) * elem(row + 2, col)
                       + Element(1) * elem(row + 3, col);

                tmp[(row, col)] = el.0;
            }
        }

        *self = tmp;
    }

    fn inv_mix_columns(&mut self) {
        let elem = |r, c| Element(self[(r % 4, c)]);

        let mut tmp = Block::default();
        for col in 0..4 {
            for row in 0..4 {
                let el = Element(14) * elem(row, col)
                       + Element(11) * elem(row + 1, col)
                       + Element(13) * elem(row + 2, col)
                       + Element(9) * elem(row + 3, col);

                tmp[(row, col)] = el.0;
            }
        }

        *self = tmp;
    }
}

impl AddRoundKey for Block {
    fn add_round_key(&mut self, rk: &Self) {
        for (a, b) in self.iter_mut().zip(rk.iter()) {
            *a ^= b;
        }
    }
}
