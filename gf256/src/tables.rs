//! Logarithm/antilogarithm multiplication tables over the generator 0x03.
//!
//! `x·y = EXP[(LOG[x] + LOG[y]) mod 255]` for nonzero operands; a zero operand
//! yields zero, since zero has no logarithm. [`mul`] here and the
//! shift-and-reduce [`crate::mul`] agree on all 65536 input pairs.

/// Antilogarithm table: `EXP[i]` is the generator 0x03 raised to the `i`th power.
pub const EXP: [u8; 255] = exp_table();

/// Logarithm table: `LOG[EXP[i]] == i` for all `i`. Entry 0 is unused filler.
pub const LOG: [u8; 256] = log_table();

const fn exp_table() -> [u8; 255] {
    let mut table = [0u8; 255];
    let mut power = 1u8;
    let mut i = 0;
    while i < 255 {
        table[i] = power;
        power = crate::mul(power, 0x03);
        i += 1;
    }
    table
}

const fn log_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 255 {
        table[EXP[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Multiplies two field elements by table lookup.
pub fn mul(x: u8, y: u8) -> u8 {
    if x == 0 || y == 0 {
        return 0;
    }

    EXP[(LOG[x as usize] as usize + LOG[y as usize] as usize) % 255]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_cycles_through_every_nonzero_element() {
        let mut seen = [false; 256];
        for &x in EXP.iter() {
            assert!(!seen[x as usize]);
            seen[x as usize] = true;
        }
        assert!(!seen[0]);
    }

    #[test]
    fn table_and_shift_reduce_agree_on_all_pairs() {
        for x in 0..=255u8 {
            for y in 0..=255u8 {
                assert_eq!(mul(x, y), crate::mul(x, y), "{:#x} · {:#x}", x, y);
            }
        }
    }
}
