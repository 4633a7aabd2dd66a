//! Errors reported at the public API boundary.

use core::fmt;

/// A usage error detected while validating caller input.
///
/// Both variants are raised synchronously, before any cipher computation, and
/// carry the offending length. Malformed input is never truncated or padded;
/// there is no partial output and nothing is retried.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The key was not exactly 16, 24, or 32 bytes long.
    InvalidKeyLength(usize),

    /// The data block was not exactly 16 bytes long.
    InvalidBlockLength(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidKeyLength(len) => {
                write!(f, "invalid key length: {} bytes (expected 16, 24, or 32)", len)
            }
            Error::InvalidBlockLength(len) => {
                write!(f, "invalid block length: {} bytes (expected 16)", len)
            }
        }
    }
}

#[cfg(test)]
impl std::error::Error for Error {}
