//! The seam the engine uses for anything that should be swappable in tests:
//! where the head goes next and where the egg search starts.
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use std::fmt::Debug;

use crate::types::{Coordinate, Direction};

/// Decides the next head location and the starting point of egg placement.
/// Implementations are cloned along with the game when the solver forks it.
pub trait Lookahead: Debug + Clone {
    /// where the head ends up after moving in `direction`
    fn next_head_location(&self, head: Coordinate, direction: Direction) -> Coordinate {
        head.step(direction)
    }

    /// where the scan for a free egg cell starts, must be on the board
    fn next_egg_location(&mut self, width: u32, height: u32) -> Coordinate;
}

/// Production lookahead, egg searches start on a uniformly random cell
#[derive(Debug, Clone)]
pub struct RandomLookahead {
    rng: SmallRng,
}

impl RandomLookahead {
    /// seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// reproducible sequence of eggs
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Lookahead for RandomLookahead {
    fn next_egg_location(&mut self, width: u32, height: u32) -> Coordinate {
        Coordinate::new(
            self.rng.gen_range(0..width.max(1)) as i32,
            self.rng.gen_range(0..height.max(1)) as i32,
        )
    }
}

/// Deterministic lookahead: egg searches start on the scripted cells in
/// order, then on the fallback cell forever after.
#[derive(Debug, Clone)]
pub struct ScriptedLookahead {
    eggs: VecDeque<Coordinate>,
    fallback: Coordinate,
}

impl ScriptedLookahead {
    #[allow(missing_docs)]
    pub fn new(eggs: impl IntoIterator<Item = Coordinate>, fallback: Coordinate) -> Self {
        Self {
            eggs: eggs.into_iter().collect(),
            fallback,
        }
    }

    /// always starts the egg search at the same cell
    pub fn fixed(start: Coordinate) -> Self {
        Self::new(std::iter::empty(), start)
    }

    /// scripted starts that have not been used yet
    pub fn remaining(&self) -> usize {
        self.eggs.len()
    }
}

impl Default for ScriptedLookahead {
    fn default() -> Self {
        Self::fixed(Coordinate::new(0, 0))
    }
}

impl Lookahead for ScriptedLookahead {
    fn next_egg_location(&mut self, _width: u32, _height: u32) -> Coordinate {
        self.eggs.pop_front().unwrap_or(self.fallback)
    }
}
