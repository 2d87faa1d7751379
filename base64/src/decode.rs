use tracing::debug;

use crate::{Error, DECODE_TABLE, INVALID, PAD};

/// Returns the exact number of bytes `input` decodes to.
///
/// Only the length and the trailing padding are inspected; characters are
/// validated when the input is actually decoded.
///
/// # Errors
///
/// Returns [`Error::InvalidLength`] if the length is not a multiple of 4 and
/// [`Error::InvalidPadding`] if more than two trailing `=` are present.
///
/// # Example
///
/// ```
/// use base64_codec::decoded_len;
///
/// assert_eq!(decoded_len(b"Zm9v").unwrap(), 3);
/// assert_eq!(decoded_len(b"Zm8=").unwrap(), 2);
/// assert_eq!(decoded_len(b"Zg==").unwrap(), 1);
/// assert!(decoded_len(b"Zg=").is_err());
/// ```
pub fn decoded_len(input: &[u8]) -> Result<usize, Error> {
    let len = input.len();
    if len % 4 != 0 {
        return Err(reject(Error::InvalidLength(len)));
    }

    let padding_len = input.iter().rev().take_while(|&&b| b == PAD).count();
    if padding_len > 2 {
        return Err(reject(Error::InvalidPadding {
            offset: len - padding_len,
        }));
    }

    Ok(len / 4 * 3 - padding_len)
}

/// Decodes base64 text into a newly allocated byte vector.
///
/// The input is not modified.
///
/// # Example
///
/// ```
/// use base64_codec::decode;
///
/// assert_eq!(decode("SGVsbG8=").unwrap(), b"Hello");
/// assert!(decode("SGVsbG8").is_err());
/// ```
pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    let input = input.as_ref();
    let mut output = vec![0u8; decoded_len(input)?];
    let written = decode_quanta(&mut output, input)?;
    debug_assert_eq!(written, output.len());
    Ok(output)
}

/// Decodes base64 text into a caller-provided buffer.
///
/// Returns the number of bytes written. If decoding fails part-way, the
/// prefix of `output` may already have been overwritten.
///
/// # Errors
///
/// Returns [`Error::BufferTooSmall`] if `output` is shorter than
/// [`decoded_len`]`(input)`, or one of the invalid-encoding variants if the
/// input is malformed.
pub fn decode_to_slice(output: &mut [u8], input: &[u8]) -> Result<usize, Error> {
    let needed = decoded_len(input)?;
    if output.len() < needed {
        return Err(Error::BufferTooSmall {
            needed,
            available: output.len(),
        });
    }

    decode_quanta(&mut output[..needed], input)
}

/// Decodes base64 text in place.
///
/// The decoded bytes are written over the beginning of `buf` and their count
/// is returned. Bytes after that prefix keep leftover encoded text. Each
/// 4-character quantum shrinks to at most 3 bytes, so the write position
/// never overtakes the read position.
///
/// If decoding fails the contents of `buf` are unspecified.
///
/// # Example
///
/// ```
/// use base64_codec::decode_in_place;
///
/// let mut buf = *b"Zm9vYmE=";
/// let n = decode_in_place(&mut buf).unwrap();
/// assert_eq!(&buf[..n], b"fooba");
/// ```
pub fn decode_in_place(buf: &mut [u8]) -> Result<usize, Error> {
    let expected = decoded_len(buf)?;
    let last = buf.len().saturating_sub(4);
    let mut out_idx = 0;

    for in_idx in (0..buf.len()).step_by(4) {
        let quad = [buf[in_idx], buf[in_idx + 1], buf[in_idx + 2], buf[in_idx + 3]];
        let (bytes, count) = decode_quantum(quad, in_idx, in_idx == last)?;
        buf[out_idx..out_idx + count].copy_from_slice(&bytes[..count]);
        out_idx += count;
    }

    debug_assert_eq!(out_idx, expected);
    Ok(out_idx)
}

/// Decodes a vector of base64 text in place and truncates it to the
/// decoded length.
pub fn decode_vec_in_place(buf: &mut Vec<u8>) -> Result<(), Error> {
    let len = decode_in_place(buf)?;
    buf.truncate(len);
    Ok(())
}

/// Decodes every quantum of `input` into `output`, which the caller has
/// already sized with [`decoded_len`].
fn decode_quanta(output: &mut [u8], input: &[u8]) -> Result<usize, Error> {
    let last = input.len().saturating_sub(4);
    let mut out_idx = 0;

    for (n, quad) in input.chunks_exact(4).enumerate() {
        let offset = n * 4;
        let quad = [quad[0], quad[1], quad[2], quad[3]];
        let (bytes, count) = decode_quantum(quad, offset, offset == last)?;
        output[out_idx..out_idx + count].copy_from_slice(&bytes[..count]);
        out_idx += count;
    }

    Ok(out_idx)
}

/// Decodes one quantum starting at `offset` in the input.
///
/// Returns the three reconstructed bytes and how many of them are real
/// (`3 - tail`, where `tail` is the number of `=` in the quantum).
#[inline]
fn decode_quantum(quad: [u8; 4], offset: usize, is_last: bool) -> Result<([u8; 3], usize), Error> {
    let values = [
        DECODE_TABLE[quad[0] as usize],
        DECODE_TABLE[quad[1] as usize],
        DECODE_TABLE[quad[2] as usize],
        DECODE_TABLE[quad[3] as usize],
    ];

    // Fast path: four alphabet characters, no padding
    if (values[0] | values[1] | values[2] | values[3]) <= 63 {
        return Ok((assemble(values), 3));
    }

    decode_quantum_slow(quad, offset, is_last)
}

/// Handles quanta that contain padding or invalid characters.
#[cold]
fn decode_quantum_slow(
    quad: [u8; 4],
    offset: usize,
    is_last: bool,
) -> Result<([u8; 3], usize), Error> {
    let mut values = [0u8; 4];
    let mut tail = 0;

    for (i, &c) in quad.iter().enumerate() {
        if c == PAD {
            // Only the last two positions of the final quantum may be padding
            if !is_last || i < 2 {
                return Err(reject(Error::InvalidPadding { offset: offset + i }));
            }
            tail += 1;
            continue;
        }

        if tail > 0 {
            return Err(reject(Error::InvalidPadding {
                offset: offset + i - tail,
            }));
        }

        let v = DECODE_TABLE[c as usize];
        if v == INVALID {
            return Err(reject(Error::invalid_character(c, offset + i)));
        }
        values[i] = v;
    }

    Ok((assemble(values), 3 - tail))
}

#[inline]
fn assemble([v0, v1, v2, v3]: [u8; 4]) -> [u8; 3] {
    [(v0 << 2) | (v1 >> 4), (v1 << 4) | (v2 >> 2), (v2 << 6) | v3]
}

fn reject(err: Error) -> Error {
    debug!(error = %err, "rejecting base64 input");
    err
}
