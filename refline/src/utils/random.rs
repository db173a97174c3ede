#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use crate::utils::Float;
use rand::prelude::*;
use std::cell::{Cell, RefCell};

/// Provides the way to use randomized values in generic way.
pub trait Random {
    /// Produces integral random value, uniformly distributed on the closed interval [min, max]
    fn uniform_int(&self, min: i32, max: i32) -> i32;

    /// Produces real random value, uniformly distributed on the closed interval [min, max)
    fn uniform_real(&self, min: Float, max: Float) -> Float;

    /// Produces integral random value on the closed interval [min, max] or `None` if the source
    /// cannot produce more values.
    fn try_uniform_int(&self, min: i32, max: i32) -> Option<i32> {
        Some(self.uniform_int(min, max))
    }
}

/// A default random implementation.
pub struct DefaultRandom {
    rng: RefCell<StdRng>,
}

impl DefaultRandom {
    /// Creates a new instance of `DefaultRandom` which produces the same sequence for the same seed.
    pub fn new_repeatable(seed: u64) -> Self {
        Self { rng: RefCell::new(StdRng::seed_from_u64(seed)) }
    }
}

impl Default for DefaultRandom {
    fn default() -> Self {
        Self { rng: RefCell::new(StdRng::from_entropy()) }
    }
}

impl Random for DefaultRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        if min == max {
            return min;
        }

        assert!(min < max);
        self.rng.borrow_mut().gen_range(min..=max)
    }

    fn uniform_real(&self, min: Float, max: Float) -> Float {
        if (min - max).abs() < Float::EPSILON {
            return min;
        }

        assert!(min < max);
        self.rng.borrow_mut().gen_range(min..max)
    }
}

/// A random source which replays a recorded sequence of integral draws.
///
/// Values are returned in the recorded order regardless of the requested range: checking that they
/// fit is left to the consumer. Real draws are not recorded and always resolve to `min`.
pub struct ReplayRandom {
    draws: Vec<i32>,
    cursor: Cell<usize>,
}

impl ReplayRandom {
    /// Creates a new instance of `ReplayRandom`.
    pub fn new(draws: Vec<i32>) -> Self {
        Self { draws, cursor: Cell::new(0) }
    }

    /// Returns amount of draws consumed so far.
    pub fn consumed(&self) -> usize {
        self.cursor.get()
    }

    /// Returns amount of draws which are not consumed yet.
    pub fn remaining(&self) -> usize {
        self.draws.len() - self.cursor.get()
    }
}

impl Random for ReplayRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        self.try_uniform_int(min, max).unwrap_or(min)
    }

    fn uniform_real(&self, min: Float, _: Float) -> Float {
        min
    }

    fn try_uniform_int(&self, _: i32, _: i32) -> Option<i32> {
        let cursor = self.cursor.get();
        let value = self.draws.get(cursor).copied()?;
        self.cursor.set(cursor + 1);

        Some(value)
    }
}
