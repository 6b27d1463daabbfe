//! Minimal PNG encoder for solid-color placeholder icons.
//!
//! Emits exactly one flavor of PNG: 8-bit truecolor (color type 2), no
//! interlacing, filter type 0 on every scanline. The IDAT payload is wrapped
//! in a valid zlib stream built from stored deflate blocks, so the pixel data
//! is framed with a real header and Adler-32 trailer but never actually
//! compressed. Chunk CRCs are computed with the standard PNG CRC-32, which
//! keeps the output readable by any conforming decoder.

use anyhow::{ensure, Result};

/// The fixed 8-byte PNG file signature.
pub const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

/// Describes one icon to generate: dimensions plus a flat RGB fill color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    pub width: u32,
    pub height: u32,
    pub color: (u8, u8, u8),
}

impl IconSpec {
    /// Convenience constructor for the common square-icon case.
    pub fn square(size: u32, color: (u8, u8, u8)) -> Self {
        Self {
            width: size,
            height: size,
            color,
        }
    }

    fn validate(&self) -> Result<()> {
        ensure!(
            self.width >= 1 && self.height >= 1,
            "Icon dimensions must be at least 1x1, got {}x{}",
            self.width,
            self.height
        );
        Ok(())
    }
}

/// Encode a solid-color icon as a complete PNG byte buffer.
///
/// Pure computation over the spec; rejects zero-sized dimensions before
/// building anything. Color components are constrained to [0, 255] by type.
pub fn encode(spec: &IconSpec) -> Result<Vec<u8>> {
    spec.validate()?;

    let raw = scanlines(spec);
    let mut png = Vec::with_capacity(SIGNATURE.len() + 12 * 3 + 13 + raw.len() + 16);
    png.extend_from_slice(&SIGNATURE);

    // IHDR: width, height, bit depth 8, color type 2 (truecolor RGB),
    // compression 0, filter 0, interlace 0.
    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&spec.width.to_be_bytes());
    ihdr.extend_from_slice(&spec.height.to_be_bytes());
    ihdr.extend_from_slice(&[8, 2, 0, 0, 0]);
    write_chunk(&mut png, b"IHDR", &ihdr);

    write_chunk(&mut png, b"IDAT", &zlib_store(&raw));
    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

/// Build the raw filtered scanlines: per row, one zero filter-tag byte
/// followed by `width` repetitions of the 3 color bytes. Total length is
/// always `height * (1 + 3 * width)`.
pub fn scanlines(spec: &IconSpec) -> Vec<u8> {
    let (r, g, b) = spec.color;
    let row_len = 1 + 3 * spec.width as usize;
    let mut raw = Vec::with_capacity(spec.height as usize * row_len);
    for _ in 0..spec.height {
        raw.push(0);
        for _ in 0..spec.width {
            raw.extend_from_slice(&[r, g, b]);
        }
    }
    raw
}

/// Append one length-prefixed chunk: 4-byte big-endian length, 4-byte type,
/// data, then a CRC-32 over type + data.
fn write_chunk(out: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(chunk_type);
    out.extend_from_slice(data);
    out.extend_from_slice(&crc32(chunk_type, data).to_be_bytes());
}

fn crc32(chunk_type: &[u8], data: &[u8]) -> u32 {
    let mut crc = 0xffff_ffffu32;
    for &byte in chunk_type.iter().chain(data) {
        crc ^= byte as u32;
        for _ in 0..8 {
            crc = if crc & 1 != 0 {
                (crc >> 1) ^ 0xedb8_8320
            } else {
                crc >> 1
            };
        }
    }
    !crc
}

/// Wrap raw bytes in a zlib stream of stored (uncompressed) deflate blocks.
/// Each block carries at most 65535 bytes; the stream ends with the Adler-32
/// of the raw data.
fn zlib_store(data: &[u8]) -> Vec<u8> {
    let mut out = vec![0x78, 0x01];
    let mut i = 0;
    loop {
        let len = (data.len() - i).min(65535);
        let is_last = i + len == data.len();
        out.push(u8::from(is_last));
        out.extend_from_slice(&(len as u16).to_le_bytes());
        out.extend_from_slice(&(!(len as u16)).to_le_bytes());
        out.extend_from_slice(&data[i..i + len]);
        i += len;
        if is_last {
            break;
        }
    }
    let (mut a, mut b) = (1u32, 0u32);
    for &byte in data {
        a = (a + byte as u32) % 65521;
        b = (b + a) % 65521;
    }
    out.extend_from_slice(&((b << 16) | a).to_be_bytes());
    out
}
