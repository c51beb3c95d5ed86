//! Action and observation space declarations.

use rand::Rng;

use crate::core::{Cells, BOARD_SIZE, MAX_EXPONENT, NUM_DIRECTIONS};

/// A finite set of integer actions `0..n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Discrete {
    pub n: usize,
}

impl Discrete {
    pub const fn new(n: usize) -> Self {
        Self { n }
    }

    /// The four-action space of the board, ordered Left, Up, Right, Down.
    pub const fn directions() -> Self {
        Self::new(NUM_DIRECTIONS)
    }

    pub fn contains(&self, action: &usize) -> bool {
        *action < self.n
    }

    /// Uniform action, or `None` for an empty space.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        (self.n > 0).then(|| rng.random_range(0..self.n))
    }
}

/// Bounded integer box of a fixed `[rows, cols]` shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxSpace {
    pub low: u8,
    pub high: u8,
    pub shape: [usize; 2],
}

impl BoxSpace {
    /// 4×4 exponents in `0..=11`.
    pub const fn board() -> Self {
        Self {
            low: 0,
            high: MAX_EXPONENT,
            shape: [BOARD_SIZE, BOARD_SIZE],
        }
    }

    pub fn contains(&self, obs: &Cells) -> bool {
        obs.iter()
            .flatten()
            .all(|&v| (self.low..=self.high).contains(&v))
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Cells {
        core::array::from_fn(|_| core::array::from_fn(|_| rng.random_range(self.low..=self.high)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn empty_discrete_space_has_no_samples() {
        let mut rng = SmallRng::seed_from_u64(0);
        let space = Discrete::new(0);
        assert_eq!(space.sample(&mut rng), None);
        assert!(!space.contains(&0));
    }

    #[test]
    fn board_box_samples_stay_in_bounds() {
        let mut rng = SmallRng::seed_from_u64(1);
        let space = BoxSpace::board();
        for _ in 0..50 {
            assert!(space.contains(&space.sample(&mut rng)));
        }
    }
}
