//! hexflip - random hash values and bit-flip corruption for test data
//!
//! Three small filters that speak the same format: one uppercase hex
//! value per line.
//!
//! ```text
//! gen_hashes 256 1000 | flip 3 > corrupted.txt
//! hamming originals.txt corrupted.txt
//! ```
//!
//! - **gen_hashes**: random values of a fixed bit width
//! - **flip**: XOR N random bits into each value, sampled with replacement
//! - **hamming**: bit distance between matching lines of two streams
//!
//! ## Example
//!
//! ```
//! use hexflip::{flip_stream, make_rng, write_hashes, BitWidth};
//! use std::io::Cursor;
//!
//! let mut rng = make_rng(Some(7)).unwrap();
//! let mut hashes = Vec::new();
//! write_hashes(&mut rng, BitWidth::new(64).unwrap(), 2, &mut hashes).unwrap();
//!
//! let mut corrupted = Vec::new();
//! flip_stream(&mut rng, Cursor::new(hashes), &mut corrupted, 1).unwrap();
//! assert_eq!(String::from_utf8(corrupted).unwrap().lines().count(), 2);
//! ```

pub mod cli;
pub mod distance;
pub mod error;
pub mod flip;
pub mod generate;
pub mod hexline;
pub mod rng;

pub use distance::{distance_stream, hamming_distance};
pub use error::{HexflipError, Result};
pub use flip::{flip_bits, flip_stream};
pub use generate::{generate_hash, write_hashes};
pub use hexline::{decode_line, encode_line, parse_count, BitWidth};
pub use rng::make_rng;
