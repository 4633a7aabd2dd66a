//! Arithmetic in GF(2⁸)/(x⁸ + x⁴ + x³ + x + 1), the finite field used by AES.

#![no_std]

use core::ops;

mod inv;
pub mod tables;

pub use self::inv::inverse_table;

/// An element of GF(2⁸)/(x⁸ + x⁴ + x³ + x + 1).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Element(pub u8);

impl ops::Add for Element {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl ops::AddAssign for Element {
    fn add_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl ops::Mul for Element {
    type Output = Self;

    fn mul(mut self, rhs: Self) -> Self::Output {
        self *= rhs;
        self
    }
}

impl ops::MulAssign for Element {
    fn mul_assign(&mut self, rhs: Self) {
        self.0 = mul(self.0, rhs.0);
    }
}

/// Multiplies two field elements by shift-and-reduce ("peasant" multiplication).
///
/// Partial products selected by the set bits of `rhs` are XOR-accumulated while
/// `lhs` is repeatedly doubled, reducing by 0x1b whenever doubling would carry
/// out of the byte.
pub const fn mul(mut lhs: u8, mut rhs: u8) -> u8 {
    let mut ret = 0u8;
    let mut i = 0;
    while i < 8 {
        if rhs & 1 != 0 {
            ret ^= lhs;
        }

        let will_overflow = lhs & 0x80 != 0;
        lhs <<= 1;
        if will_overflow {
            lhs ^= 0x1b;
        }

        rhs >>= 1;
        i += 1;
    }

    ret
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mul_known_inverse_pair() {
        assert_eq!(Element(0x53) * Element(0xca), Element(1));
    }

    #[test]
    fn mul_by_zero_and_one() {
        for x in 0..=255u8 {
            assert_eq!(mul(x, 0), 0);
            assert_eq!(mul(0, x), 0);
            assert_eq!(mul(x, 1), x);
            assert_eq!(mul(1, x), x);
        }
    }

    #[test]
    fn mul_commutative() {
        for x in 0..=255u8 {
            for y in x..=255u8 {
                assert_eq!(mul(x, y), mul(y, x));
            }
        }
    }

    #[test]
    fn add_is_xor() {
        assert_eq!(Element(0x0d) + Element(0x11), Element(0x1c));
    }
}
