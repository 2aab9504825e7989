#![deny(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]
//! A grid snake simulation with an autonomous player.
//!
//! The crate is built around [`engine::SnakeGame`], a compact snake state
//! (a fixed capacity ring for the body plus an O(1) collision index) that can
//! be cheaply forked. [`solver::Solver`] uses those forks to search for a path
//! from the head to the egg, and [`autoplay`] strings solves together into a
//! full game. The only thing a renderer needs to read is the
//! [`board::PixelGrid`] the engine keeps up to date on every tick.
//!
//! ```
//! use snake_autoplay::config::{GameConfig, SolverConfig};
//! use snake_autoplay::engine::SnakeGame;
//! use snake_autoplay::solver::Solver;
//! use snake_autoplay::types::{Coordinate, NoopInstruments};
//!
//! let game = SnakeGame::new(&GameConfig::default()).expect("the default config is valid");
//! assert_eq!(game.head(), Coordinate::new(4, 5));
//!
//! let solver = Solver::new(SolverConfig::default());
//! let path = solver.find_path(&NoopInstruments, &game).expect("the egg is in a straight line");
//! assert_eq!(path.len(), 4);
//! ```

pub mod autoplay;
pub mod board;
pub mod boundary;
pub mod config;
pub mod engine;
mod error;
pub mod solver;
pub mod types;

pub use error::{Error, Result};
