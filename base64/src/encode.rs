use crate::{Error, ALPHABET, PAD};

/// Calculates the encoded length for a given input length.
///
/// The result is always a multiple of 4: `4 * ceil(len / 3)`.
///
/// # Example
///
/// ```
/// use base64_codec::encoded_len;
///
/// assert_eq!(encoded_len(0), 0);
/// assert_eq!(encoded_len(1), 4);
/// assert_eq!(encoded_len(3), 4);
/// assert_eq!(encoded_len(4), 8);
/// ```
#[inline]
pub fn encoded_len(len: usize) -> usize {
    len.div_ceil(3) * 4
}

/// Encodes binary data to a base64 string.
///
/// # Example
///
/// ```
/// use base64_codec::encode;
///
/// assert_eq!(encode(b"Hello"), "SGVsbG8=");
/// ```
pub fn encode(data: &[u8]) -> String {
    let output = encode_to_vec(data);

    // Every byte comes from ALPHABET or is PAD, all ASCII
    String::from_utf8(output).expect("base64 output is always valid UTF-8")
}

/// Encodes binary data into a newly allocated byte vector.
pub fn encode_to_vec(data: &[u8]) -> Vec<u8> {
    let mut output = vec![0u8; encoded_len(data.len())];
    let written = encode_quanta(&mut output, data);
    debug_assert_eq!(written, output.len());
    output
}

/// Encodes data into a caller-provided buffer.
///
/// Returns the number of bytes written, which is always
/// [`encoded_len`]`(data.len())`. Bytes past that point are left untouched.
///
/// # Errors
///
/// Returns [`Error::BufferTooSmall`] if `output` is shorter than
/// [`encoded_len`]`(data.len())`. Nothing is written in that case.
///
/// # Example
///
/// ```
/// use base64_codec::{encode_to_slice, encoded_len};
///
/// let data = b"fo";
/// let mut buf = vec![0u8; encoded_len(data.len())];
/// let n = encode_to_slice(&mut buf, data).unwrap();
/// assert_eq!(&buf[..n], b"Zm8=");
/// ```
pub fn encode_to_slice(output: &mut [u8], data: &[u8]) -> Result<usize, Error> {
    let needed = encoded_len(data.len());
    if output.len() < needed {
        return Err(Error::BufferTooSmall {
            needed,
            available: output.len(),
        });
    }

    Ok(encode_quanta(&mut output[..needed], data))
}

/// Core encoder. `output` must hold at least `encoded_len(data.len())` bytes.
fn encode_quanta(output: &mut [u8], data: &[u8]) -> usize {
    let chunks = data.chunks_exact(3);
    let remainder = chunks.remainder();
    let mut out_idx = 0;

    for chunk in chunks {
        let (b0, b1, b2) = (chunk[0], chunk[1], chunk[2]);
        output[out_idx] = ALPHABET[(b0 >> 2) as usize];
        output[out_idx + 1] = ALPHABET[(((b0 & 0x03) << 4) | (b1 >> 4)) as usize];
        output[out_idx + 2] = ALPHABET[(((b1 & 0x0F) << 2) | (b2 >> 6)) as usize];
        output[out_idx + 3] = ALPHABET[(b2 & 0x3F) as usize];
        out_idx += 4;
    }

    match *remainder {
        [b0] => {
            output[out_idx] = ALPHABET[(b0 >> 2) as usize];
            output[out_idx + 1] = ALPHABET[((b0 & 0x03) << 4) as usize];
            output[out_idx + 2] = PAD;
            output[out_idx + 3] = PAD;
            out_idx += 4;
        }
        [b0, b1] => {
            output[out_idx] = ALPHABET[(b0 >> 2) as usize];
            output[out_idx + 1] = ALPHABET[(((b0 & 0x03) << 4) | (b1 >> 4)) as usize];
            output[out_idx + 2] = ALPHABET[((b1 & 0x0F) << 2) as usize];
            output[out_idx + 3] = PAD;
            out_idx += 4;
        }
        _ => {}
    }

    out_idx
}
