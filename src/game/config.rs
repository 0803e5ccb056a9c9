//! Per-game configuration

use super::timer::DEFAULT_GAME_SECONDS;
use crate::core::Dimension;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Settings chosen by the application layer before a game starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub dimension: Dimension,
    pub duration_secs: u32,
    /// Fixed seed for reproducible boards
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dimension: Dimension::Standard,
            duration_secs: DEFAULT_GAME_SECONDS,
            seed: None,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn new(dimension: Dimension) -> Self {
        Self {
            dimension,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub const fn with_duration(mut self, seconds: u32) -> Self {
        self.duration_secs = seconds;
        self
    }

    /// Random source for board generation: seeded if a seed is set
    #[must_use]
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn defaults_to_standard_three_minute_game() {
        let config = GameConfig::default();
        assert_eq!(config.dimension, Dimension::Standard);
        assert_eq!(config.duration_secs, 180);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let config = GameConfig::new(Dimension::Big).with_seed(Some(9));
        let a: u64 = config.rng().random();
        let b: u64 = config.rng().random();
        assert_eq!(a, b);
    }
}
