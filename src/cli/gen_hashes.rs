use crate::error::Result;
use crate::generate::write_hashes;
use crate::hexline::BitWidth;
use crate::rng::make_rng;
use std::io::{self, BufWriter, Write};

/// Options for the gen_hashes command
#[derive(Debug, Clone)]
pub struct GenOptions {
    pub width: BitWidth,
    pub count: u64,
    pub seed: Option<u64>,
}

/// Generate hashes into `out`
pub fn gen_hashes<W: Write>(options: &GenOptions, out: &mut W) -> Result<u64> {
    let mut rng = make_rng(options.seed)?;
    write_hashes(&mut rng, options.width, options.count, out)
}

/// Generate hashes onto stdout, buffered and flushed once at the end
pub fn gen_hashes_stdout(options: &GenOptions) -> Result<u64> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    gen_hashes(options, &mut out)
}
