use crate::error::Result;
use crate::flip::flip_stream;
use crate::rng::make_rng;
use std::io::{self, BufRead, Write};

/// Options for the flip command
#[derive(Debug, Clone, Default)]
pub struct FlipOptions {
    pub flips: u64,
    pub seed: Option<u64>,
}

/// Corrupt the hex lines of `input` into `out`
pub fn flip<B: BufRead, W: Write>(options: &FlipOptions, input: B, out: &mut W) -> Result<u64> {
    let mut rng = make_rng(options.seed)?;
    flip_stream(&mut rng, input, out, options.flips)
}

/// Corrupt stdin onto stdout, one line out per line in
pub fn flip_stdio(options: &FlipOptions) -> Result<u64> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    // StdoutLock is line-buffered, so every hash leaves as soon as it is done
    let mut out = stdout.lock();
    flip(options, stdin.lock(), &mut out)
}
