use thiserror::Error;

/// Error type for base64 encoding and decoding operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A byte outside the alphabet was found in the input.
    #[error("invalid character {ch:?} at offset {offset}")]
    InvalidCharacter { ch: char, offset: usize },

    /// A padding character appeared where padding is not allowed.
    #[error("invalid padding at offset {offset}")]
    InvalidPadding { offset: usize },

    /// The input length is not a multiple of 4.
    #[error("invalid input length {0}: must be a multiple of 4")]
    InvalidLength(usize),

    /// The caller-supplied output buffer cannot hold the result.
    #[error("output buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall { needed: usize, available: usize },
}

impl Error {
    /// Returns `true` if the error was caused by malformed base64 input
    /// rather than by an undersized output buffer.
    pub fn is_invalid_encoding(&self) -> bool {
        !matches!(self, Error::BufferTooSmall { .. })
    }

    pub(crate) fn invalid_character(byte: u8, offset: usize) -> Self {
        Error::InvalidCharacter {
            ch: byte as char,
            offset,
        }
    }
}
