use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng, SeedableRng};

use crate::engine::RandomSource;

/// Системный RNG: каждая игра разная.
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut thread_rng());
    }

    fn pick_in_range(&mut self, low: usize, high: usize) -> usize {
        if high <= low {
            return low;
        }
        thread_rng().gen_range(low..=high)
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Одинаковый seed = одинаковая колода и одинаковые размеры рук.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    fn pick_in_range(&mut self, low: usize, high: usize) -> usize {
        if high <= low {
            return low;
        }
        self.inner.gen_range(low..=high)
    }
}

/// RNG по конфигу: seed есть – детерминированный, нет – системный.
#[derive(Clone, Debug)]
pub enum GameRng {
    System(SystemRng),
    Seeded(DeterministicRng),
}

impl GameRng {
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => GameRng::Seeded(DeterministicRng::from_seed(seed)),
            None => GameRng::System(SystemRng),
        }
    }
}

impl RandomSource for GameRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        match self {
            GameRng::System(rng) => rng.shuffle(slice),
            GameRng::Seeded(rng) => rng.shuffle(slice),
        }
    }

    fn pick_in_range(&mut self, low: usize, high: usize) -> usize {
        match self {
            GameRng::System(rng) => rng.pick_in_range(low, high),
            GameRng::Seeded(rng) => rng.pick_in_range(low, high),
        }
    }
}
