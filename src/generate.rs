use crate::error::Result;
use crate::hexline::{encode_line, BitWidth};
use rand::RngCore;
use std::io::Write;

/// Draw one random hash value of the given width
/// A failing random source is fatal, nothing is retried
pub fn generate_hash<R: RngCore>(rng: &mut R, width: BitWidth) -> Result<Vec<u8>> {
    let mut hash = vec![0u8; width.bytes()];
    rng.try_fill_bytes(&mut hash)?;
    Ok(hash)
}

/// Write `count` random hashes to `out`, one uppercase hex line each
/// Returns the number of lines written
pub fn write_hashes<R, W>(rng: &mut R, width: BitWidth, count: u64, out: &mut W) -> Result<u64>
where
    R: RngCore,
    W: Write,
{
    tracing::info!(bits = width.bits(), count, "generating hashes");

    for _ in 0..count {
        let hash = generate_hash(rng, width)?;
        writeln!(out, "{}", encode_line(&hash))?;
    }
    out.flush()?;

    tracing::debug!(lines = count, "generation complete");
    Ok(count)
}
