use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::error::CliError;

/// Input block size for streaming encode. A multiple of 3 so only the
/// final block can produce padding.
const ENCODE_BLOCK_LEN: usize = 3 * 16 * 1024;

/// Path that selects stdin or stdout instead of a file.
const STDIO_PATH: &str = "-";

fn is_stdio(path: &Path) -> bool {
    path == Path::new(STDIO_PATH)
}

fn open_input(path: &Path) -> Result<Box<dyn Read>, CliError> {
    if is_stdio(path) {
        debug!("reading from stdin");
        return Ok(Box::new(io::stdin().lock()));
    }

    let file = File::open(path).map_err(|e| CliError::Open(path.to_path_buf(), e))?;
    debug!(path = %path.display(), "reading from file");
    Ok(Box::new(BufReader::new(file)))
}

fn open_output(path: &Path) -> Result<Box<dyn Write>, CliError> {
    if is_stdio(path) {
        return Ok(Box::new(BufWriter::new(io::stdout().lock())));
    }

    let file = File::create(path).map_err(|e| CliError::Create(path.to_path_buf(), e))?;
    debug!(path = %path.display(), "writing to file");
    Ok(Box::new(BufWriter::new(file)))
}

/// Fills `buf` from `reader`, stopping early only at end of input.
fn read_block(reader: &mut impl Read, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Streams `input` through the encoder into `output`.
pub fn encode(input: &Path, output: &Path, newline: bool) -> Result<(), CliError> {
    let mut reader = open_input(input)?;
    let mut writer = open_output(output)?;

    let mut block = vec![0u8; ENCODE_BLOCK_LEN];
    let mut encoded = vec![0u8; base64_codec::encoded_len(ENCODE_BLOCK_LEN)];
    let mut bytes_in = 0;
    let mut bytes_out = 0;

    loop {
        let n = read_block(&mut reader, &mut block)?;
        if n == 0 {
            break;
        }

        let written = base64_codec::encode_to_slice(&mut encoded, &block[..n])?;
        writer.write_all(&encoded[..written])?;
        bytes_in += n;
        bytes_out += written;

        if n < block.len() {
            break;
        }
    }

    if newline {
        writer.write_all(b"\n")?;
    }
    writer.flush()?;

    info!(bytes_in, bytes_out, "encoded");
    Ok(())
}

/// Decodes all of `input` and writes the bytes to `output`.
///
/// Trailing ASCII whitespace is stripped first so the output of `encode`
/// decodes as-is. The output is only opened once decoding has succeeded.
pub fn decode(input: &Path, output: &Path) -> Result<(), CliError> {
    let mut reader = open_input(input)?;
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    let bytes_in = buf.len();

    let text_len = buf.trim_ascii_end().len();
    buf.truncate(text_len);
    base64_codec::decode_vec_in_place(&mut buf)?;

    let mut writer = open_output(output)?;
    writer.write_all(&buf)?;
    writer.flush()?;

    info!(bytes_in, bytes_out = buf.len(), "decoded");
    Ok(())
}
