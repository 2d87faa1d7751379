//! Standard base64 encoding and decoding.
//!
//! This library converts binary data to the RFC 4648 base64 text form
//! (`A-Z`, `a-z`, `0-9`, `+`, `/` with `=` padding) and back. There is no
//! line wrapping and no URL-safe variant.
//!
//! Every operation comes in an allocating form ([`encode`], [`decode`]) and
//! a form that writes into caller storage ([`encode_to_slice`],
//! [`decode_to_slice`]). The slice forms check capacity up front and fail
//! with [`Error::BufferTooSmall`] instead of writing out of bounds. Decoding
//! can also run in place ([`decode_in_place`]), overwriting the encoded text
//! with the decoded bytes.
//!
//! Decoding is strict: the input length must be a multiple of 4, every byte
//! must come from the alphabet, and `=` may only appear as the last one or
//! two characters.
//!
//! # Example
//!
//! ```
//! let encoded = base64_codec::encode(b"foobar");
//! assert_eq!(encoded, "Zm9vYmFy");
//!
//! let decoded = base64_codec::decode(&encoded).unwrap();
//! assert_eq!(decoded, b"foobar");
//! ```

mod decode;
mod encode;
mod error;


pub use decode::{decode, decode_in_place, decode_to_slice, decode_vec_in_place, decoded_len};
pub use encode::{encode, encode_to_slice, encode_to_vec, encoded_len};
pub use error::Error;

/// Standard base64 alphabet (RFC 4648).
pub const ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Padding character used in the final quantum.
pub const PAD: u8 = b'=';

/// Marks bytes that are not part of the alphabet in [`DECODE_TABLE`].
pub(crate) const INVALID: u8 = 0xFF;

/// Reverse lookup table for [`ALPHABET`], built at compile time.
pub(crate) static DECODE_TABLE: [u8; 256] = build_decode_table(ALPHABET);

const fn build_decode_table(alphabet: &[u8; 64]) -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < 64 {
        table[alphabet[i] as usize] = i as u8;
        i += 1;
    }
    table
}
