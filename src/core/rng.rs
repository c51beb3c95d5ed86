//! Seeded random source that remembers how far it has advanced.

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

/// Number of raw draws taken from a seeded stream.
///
/// Each `next_u32` and each `next_u64` call advances the generator by a fixed
/// number of steps, so replaying the same counts in any order lands on the
/// same stream position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct StreamPosition {
    pub u32_draws: u64,
    pub u64_draws: u64,
}

/// `SmallRng` wrapper counting its draws so it can be restored mid-stream.
#[derive(Clone, Debug)]
pub(crate) struct TrackedRng {
    inner: SmallRng,
    position: StreamPosition,
}

impl TrackedRng {
    pub(crate) fn seed_from_u64(seed: u64) -> Self {
        Self {
            inner: SmallRng::seed_from_u64(seed),
            position: StreamPosition::default(),
        }
    }

    /// Rebuild the stream for `seed` and fast-forward it to `position`.
    pub(crate) fn resume(seed: u64, position: StreamPosition) -> Self {
        let mut rng = Self::seed_from_u64(seed);
        for _ in 0..position.u32_draws {
            rng.next_u32();
        }
        for _ in 0..position.u64_draws {
            rng.next_u64();
        }
        rng
    }

    pub(crate) fn position(&self) -> StreamPosition {
        self.position
    }
}

impl RngCore for TrackedRng {
    fn next_u32(&mut self) -> u32 {
        self.position.u32_draws += 1;
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.position.u64_draws += 1;
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}
