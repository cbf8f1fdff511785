use rand::{Rng, SeedableRng, rngs::StdRng};

/// Shared pseudorandom source for every roll in a session.
///
/// Not cryptographically secure; only uniformity matters here.
#[derive(Debug)]
pub struct Roller {
    rng: StdRng,
}

impl Roller {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let rng = StdRng::from_os_rng();
        Roller { rng }
    }

    pub fn from_seed(seed: u64) -> Self {
        let rng = StdRng::seed_from_u64(seed);
        Roller { rng }
    }

    /// A single die with `sides` faces, in `1..=sides`.
    pub fn d(&mut self, sides: u32) -> u32 {
        self.rng.random_range(1..=sides)
    }

    #[cfg(test)]
    pub fn test_rng() -> Self {
        Self::from_seed(42)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_d_stays_in_range() {
        let mut roller = Roller::test_rng();
        for sides in [2, 6, 20, 50] {
            for _ in 0..1000 {
                let value = roller.d(sides);
                assert!((1..=sides).contains(&value));
            }
        }
    }

    #[test]
    fn test_seeded_rollers_agree() {
        let mut a = Roller::from_seed(7);
        let mut b = Roller::from_seed(7);
        let left: Vec<u32> = (0..32).map(|_| a.d(20)).collect();
        let right: Vec<u32> = (0..32).map(|_| b.d(20)).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn test_every_face_shows_up() {
        let mut roller = Roller::test_rng();
        let mut seen = [false; 6];
        for _ in 0..1000 {
            seen[roller.d(6) as usize - 1] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
