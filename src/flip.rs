use crate::error::Result;
use crate::hexline::{decode_line, encode_line};
use rand::Rng;
use std::io::{BufRead, Write};

/// Flip `flips` random bits of `hash` in place
/// Each flip picks a byte and a bit uniformly; the same bit may be picked
/// again, in which case the two flips cancel
pub fn flip_bits<R: Rng>(rng: &mut R, hash: &mut [u8], flips: u64) {
    if hash.is_empty() {
        return;
    }
    for _ in 0..flips {
        let byte = rng.gen_range(0..hash.len());
        let bit = rng.gen_range(0..8u32);
        hash[byte] ^= 1 << bit;
    }
}

/// Corrupt every hex line of `input` and write it to `out`
/// Stops at the first undecodable line; lines already written stay written
/// Returns the number of lines written
pub fn flip_stream<R, B, W>(rng: &mut R, input: B, out: &mut W, flips: u64) -> Result<u64>
where
    R: Rng,
    B: BufRead,
    W: Write,
{
    tracing::info!(flips, "flipping bits");

    let mut written = 0u64;
    for (index, text) in input.lines().enumerate() {
        let line = index as u64 + 1;
        let mut hash = decode_line(&text?, line)?;
        flip_bits(rng, &mut hash, flips);
        writeln!(out, "{}", encode_line(&hash))?;
        out.flush()?;
        tracing::trace!(line, bytes = hash.len(), "line flipped");
        written += 1;
    }

    tracing::debug!(lines = written, "flip complete");
    Ok(written)
}
