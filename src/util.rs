/// Reverse a series of expressions.
macro_rules! reverse {
    ([] $($reversed:expr;)*) => {
        $( $reversed; )*
    };
    ([$head:expr; $($tail:expr;)*] $($reversed:expr;)*) => {
        reverse!([$($tail;)*] $head; $($reversed;)*)
    };
    ($($exprs:expr;)*) => {
        reverse!([$($exprs;)*])
    };
}

/// This macro defines the inverse of a function which is comprised exclusively of involutions.
///
/// Several useful functions in this library can be written as a sequence of expressions which are
/// their own inverse (e.g. `mem::swap`). Such a function is called an involution.
/// To invert a series of involutions, we can apply the same operations in reverse order.
macro_rules! define_function_of_involutions_with_inverse {
    ( $(
            #[inverse = $inverse:ident]
            $vis:vis fn $fn:ident ($($args:tt)*) {
                $( $expr:expr; )*
            }
    );* $(;)*) => {
        $(
            $vis fn $fn($($args)*) {
                $( $expr; )*
            }

            $vis fn $inverse($($args)*) {
                reverse!{ $( $expr; )* }
            }
        )*
    };
}

#[cfg(test)]
pub mod test {
    use crate::block::{Block, BLOCK_LEN};
    use crate::ops::*;

    /// A round transformation paired with its inverse.
    pub struct RoundTrip {
        func: fn(&mut Block),
        inv: fn(&mut Block),
    }

    impl RoundTrip {
        pub fn shift_rows() -> Self {
            RoundTrip {
                func: Block::shift_rows,
                inv: Block::inv_shift_rows,
            }
        }

        pub fn mix_columns() -> Self {
            RoundTrip {
                func: Block::mix_columns,
                inv: Block::inv_mix_columns,
            }
        }

        pub fn sub_bytes() -> Self {
            RoundTrip {
                func: Block::sub_bytes,
                inv: Block::inv_sub_bytes,
            }
        }

        /// Asserts that `self.func(input) == output` and `self.inv(output) == input`,
        /// block by block.
        pub fn known_answer_test(&self, input: &[u8], output: &[u8]) {
            assert_eq!(input.len() % BLOCK_LEN, 0);
            assert_eq!(input.len(), output.len());

            let chunks = input.chunks(BLOCK_LEN).zip(output.chunks(BLOCK_LEN));

            for (input, output) in chunks {
                let mut block = Block::try_from(input).unwrap();

                (self.func)(&mut block);
                assert_eq!(block.as_ref(), output);

                (self.inv)(&mut block);
                assert_eq!(block.as_ref(), input);
            }
        }
    }
}
