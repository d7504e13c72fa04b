use crate::error::{HexflipError, Result};
use crate::hexline::decode_line;
use std::io::{BufRead, Write};

/// Number of differing bits between two equal-length values
/// Returns `None` when the lengths differ
pub fn hamming_distance(a: &[u8], b: &[u8]) -> Option<u32> {
    if a.len() != b.len() {
        return None;
    }
    Some(a.iter().zip(b).map(|(x, y)| (x ^ y).count_ones()).sum())
}

/// Read two hex streams in lockstep and write the distance of each pair
/// Returns the number of pairs compared
pub fn distance_stream<L, R, W>(left: L, right: R, out: &mut W) -> Result<u64>
where
    L: BufRead,
    R: BufRead,
    W: Write,
{
    let mut left = left.lines();
    let mut right = right.lines();
    let mut compared = 0u64;

    loop {
        let line = compared + 1;
        let (a, b) = match (left.next(), right.next()) {
            (None, None) => break,
            (Some(a), Some(b)) => (a?, b?),
            _ => return Err(HexflipError::UnevenStreams { line }),
        };

        let a = decode_line(&a, line)?;
        let b = decode_line(&b, line)?;
        let distance = hamming_distance(&a, &b).ok_or(HexflipError::LengthMismatch {
            line,
            left: a.len(),
            right: b.len(),
        })?;

        writeln!(out, "{}", distance)?;
        compared += 1;
    }
    out.flush()?;

    tracing::debug!(pairs = compared, "distance complete");
    Ok(compared)
}
