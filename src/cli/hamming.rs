use crate::distance::distance_stream;
use crate::error::{HexflipError, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// Options for the hamming command
/// `-` as a path means stdin; at most one side may use it
#[derive(Debug, Clone)]
pub struct HammingOptions {
    pub left: PathBuf,
    pub right: PathBuf,
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn open_input(path: &Path) -> Result<Box<dyn BufRead>> {
    if is_stdin(path) {
        Ok(Box::new(io::stdin().lock()))
    } else {
        Ok(Box::new(BufReader::new(File::open(path)?)))
    }
}

/// Compare the two inputs line by line, writing one distance per line
pub fn hamming<W: Write>(options: &HammingOptions, out: &mut W) -> Result<u64> {
    if is_stdin(&options.left) && is_stdin(&options.right) {
        return Err(HexflipError::InvalidArgument(
            "only one input can be read from stdin".into(),
        ));
    }
    tracing::info!(left = %options.left.display(), right = %options.right.display(), "comparing");

    let left = open_input(&options.left)?;
    let right = open_input(&options.right)?;
    distance_stream(left, right, out)
}

/// Compare the two inputs onto stdout
pub fn hamming_stdout(options: &HammingOptions) -> Result<u64> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    hamming(options, &mut out)
}
