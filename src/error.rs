use thiserror::Error;

#[derive(Error, Debug)]
pub enum HexflipError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Line {line}: invalid hex: {source}")]
    Decode {
        line: u64,
        #[source]
        source: hex::FromHexError,
    },

    #[error("Line {line}: empty hash value")]
    EmptyHash { line: u64 },

    #[error("Line {line}: length mismatch ({left} bytes vs {right} bytes)")]
    LengthMismatch { line: u64, left: usize, right: usize },

    #[error("Line {line}: one input ended before the other")]
    UnevenStreams { line: u64 },

    #[error("Random source failed: {0}")]
    Entropy(#[from] rand::Error),
}

impl HexflipError {
    /// True when the downstream reader went away (e.g. `| head`)
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, HexflipError::Io(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}

pub type Result<T> = std::result::Result<T, HexflipError>;
