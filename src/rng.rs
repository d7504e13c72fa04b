use crate::error::Result;
use rand::rngs::{OsRng, StdRng};
use rand::SeedableRng;

/// Build the process RNG
/// With a seed the stream is reproducible, otherwise it is seeded from the OS
pub fn make_rng(seed: Option<u64>) -> Result<StdRng> {
    match seed {
        Some(seed) => {
            tracing::debug!(seed, "using seeded RNG");
            Ok(StdRng::seed_from_u64(seed))
        }
        None => Ok(StdRng::from_rng(OsRng)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = make_rng(Some(17)).unwrap();
        let mut b = make_rng(Some(17)).unwrap();
        assert_eq!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn test_entropy_seeded_rng() {
        let mut a = make_rng(None).unwrap();
        let mut b = make_rng(None).unwrap();
        // 2^-128 chance of a false failure
        let xs = [a.next_u64(), a.next_u64()];
        let ys = [b.next_u64(), b.next_u64()];
        assert_ne!(xs, ys);
    }
}
