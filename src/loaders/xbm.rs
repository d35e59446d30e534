use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::bitmap::BitmapData;

/// Loads an XBM bitmap file and repacks it for the canvas blit format.
pub fn load_xbm_file(path: impl AsRef<Path>) -> Result<BitmapData> {
    let path = path.as_ref();
    println!("Loading XBM bitmap: {:?}", path);

    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read XBM file: {:?}", path))?;

    parse_xbm(&source).with_context(|| format!("Failed to parse XBM file: {:?}", path))
}

/// Parses XBM source text.
///
/// XBM stores one pixel per bit, LSB-first, rows padded to byte
/// boundaries; the canvas blit format is MSB-first with the same row
/// padding, so each data byte is bit-reversed on the way in.
pub fn parse_xbm(source: &str) -> Result<BitmapData> {
    let mut width: Option<u32> = None;
    let mut height: Option<u32> = None;

    for line in source.lines() {
        let mut parts = line.split_whitespace();
        if parts.next() != Some("#define") {
            continue;
        }

        let (Some(name), Some(value)) = (parts.next(), parts.next()) else {
            continue;
        };

        if name.ends_with("_width") {
            width = Some(
                value
                    .parse()
                    .with_context(|| format!("invalid width value {value:?}"))?,
            );
        } else if name.ends_with("_height") {
            height = Some(
                value
                    .parse()
                    .with_context(|| format!("invalid height value {value:?}"))?,
            );
        }
    }

    let width = width.context("missing _width #define")?;
    let height = height.context("missing _height #define")?;

    let body = source
        .split_once('{')
        .context("missing bitmap data block")?
        .1;
    let body = body
        .split_once('}')
        .context("unterminated bitmap data block")?
        .0;

    let mut bits = Vec::new();
    for token in body.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }

        bits.push(parse_byte(token)?.reverse_bits());
    }

    BitmapData::new(width, height, bits)
}

fn parse_byte(token: &str) -> Result<u8> {
    let parsed = match token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => token.parse(),
    };

    parsed.with_context(|| format!("invalid byte literal {token:?}"))
}
