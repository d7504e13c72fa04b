pub mod flip;
pub mod gen_hashes;
pub mod hamming;

pub use flip::*;
pub use gen_hashes::*;
pub use hamming::*;

use crate::error::Result;
use crate::hexline::{parse_count, BitWidth};
use std::process::ExitCode;
use tracing::Level;

/// Version line shared by all binaries (profile and git hash come from build.rs)
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("HEXFLIP_PROFILE"),
    " ",
    env!("HEXFLIP_GIT_HASH"),
    ")"
);

/// Install the stderr log subscriber
/// 0 = warn, 1 = info, 2 = debug, 3+ = trace
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    // A second init in the same process is harmless; keep the first one
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

pub fn parse_bit_width(s: &str) -> std::result::Result<BitWidth, String> {
    s.parse().map_err(|e| format!("{}", e))
}

pub fn parse_hash_count(s: &str) -> std::result::Result<u64, String> {
    parse_count("count", s).map_err(|e| format!("{}", e))
}

pub fn parse_flip_count(s: &str) -> std::result::Result<u64, String> {
    parse_count("flip count", s).map_err(|e| format!("{}", e))
}

/// Turn a command result into the process exit code
/// A reader closing the pipe early is not an error for a filter
pub fn finish(result: Result<u64>) -> ExitCode {
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) if e.is_broken_pipe() => {
            tracing::debug!("output closed early");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
