//! Drivers that play a whole game without a human.
//!
//! [`autoplay`] asks the solver for a path to each egg in turn and replays it
//! on the live game. [`play_randomly`] is the fallback for when searching is
//! not wanted, it picks moves at random and only tries to avoid dying.
use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use crate::boundary::BoundaryIndex;
use crate::engine::{Lookahead, SnakeGame};
use crate::solver::Solver;
use crate::types::{Direction, GameStatus, SolverInstruments, TickOutcome};

/// What a driver did before it stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplaySummary {
    #[allow(missing_docs)]
    pub eggs_eaten: usize,
    /// ticks applied to the live game, including a final fatal one
    pub ticks: usize,
    /// state of the game when the driver stopped. `Running` means the driver
    /// gave up (no path, or out of ticks) before the game ended
    pub status: GameStatus,
}

/// Plays `game` by solving for the egg and replaying the path, over and over,
/// until the game ends or the solver finds no path. `on_tick` runs after
/// every applied move, it is where a renderer reads the pixel grid.
pub fn autoplay<I, B, L, F>(
    game: &mut SnakeGame<B, L>,
    solver: &Solver,
    instruments: &I,
    mut on_tick: F,
) -> AutoplaySummary
where
    I: SolverInstruments,
    B: BoundaryIndex,
    L: Lookahead,
    F: FnMut(&SnakeGame<B, L>),
{
    let mut eggs_eaten = 0;
    let mut ticks = 0;

    'game: while !game.status().is_over() {
        let path = match solver.find_path(instruments, game) {
            Some(path) => path,
            None => {
                info!(length = game.len(), "no path to the egg, giving up");
                break;
            }
        };
        debug!(path = %path.iter().join(","), egg = %game.egg(), "replaying path");

        for direction in path {
            let outcome = game.tick(direction);
            ticks += 1;
            on_tick(game);
            match outcome {
                TickOutcome::AteEgg => eggs_eaten += 1,
                TickOutcome::Moved => {}
                TickOutcome::Died | TickOutcome::Won => break 'game,
            }
        }
    }

    let summary = AutoplaySummary {
        eggs_eaten,
        ticks,
        status: game.status(),
    };
    info!(?summary, "autoplay finished");
    summary
}

/// Plays up to `max_ticks` random moves.
///
/// Each tick draws a direction uniformly at random. If that move would be
/// fatal, every other direction is tried once, in random order, before the
/// snake gives up and takes the fatal move.
pub fn play_randomly<B, L, R, F>(
    game: &mut SnakeGame<B, L>,
    rng: &mut R,
    max_ticks: usize,
    mut on_tick: F,
) -> AutoplaySummary
where
    B: BoundaryIndex,
    L: Lookahead,
    R: Rng,
    F: FnMut(&SnakeGame<B, L>),
{
    let mut eggs_eaten = 0;
    let mut ticks = 0;

    while ticks < max_ticks && !game.status().is_over() {
        let mut directions = Direction::all();
        directions.shuffle(rng);
        let direction = directions
            .iter()
            .copied()
            .find(|d| !game.is_fatal(*d))
            .unwrap_or(directions[0]);

        let outcome = game.tick(direction);
        ticks += 1;
        on_tick(game);
        if outcome == TickOutcome::AteEgg {
            eggs_eaten += 1;
        }
    }

    AutoplaySummary {
        eggs_eaten,
        ticks,
        status: game.status(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::DenseBoundary;
    use crate::config::{GameConfig, SolverConfig};
    use crate::engine::{RandomLookahead, ScriptedLookahead};
    use crate::types::{Coordinate, NoopInstruments};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_autoplay_eats_eggs() {
        let mut game = SnakeGame::<DenseBoundary, RandomLookahead>::with_lookahead(
            &GameConfig::default(),
            RandomLookahead::seeded(11),
        )
        .unwrap();
        let solver = Solver::new(SolverConfig::default());
        let mut frames = 0;
        let summary = autoplay(&mut game, &solver, &NoopInstruments, |g| {
            assert!(g.assert_consistency());
            frames += 1;
        });

        assert!(summary.eggs_eaten >= 1);
        assert_eq!(summary.ticks, frames);
        assert_eq!(game.len(), 3 + summary.eggs_eaten);
        assert_ne!(summary.status, GameStatus::Dead);
    }

    #[test]
    fn test_autoplay_wins_a_tiny_board() {
        // a 1 row board: eat the egg at the end and there is nowhere left
        let mut game = SnakeGame::<DenseBoundary, ScriptedLookahead>::from_layout(
            3,
            1,
            &[Coordinate::new(0, 0)],
            Coordinate::new(1, 0),
            ScriptedLookahead::default(),
        )
        .unwrap();
        let summary = autoplay(&mut game, &Solver::default(), &NoopInstruments, |_| {});
        assert_eq!(
            summary,
            AutoplaySummary {
                eggs_eaten: 1,
                ticks: 2,
                status: GameStatus::Won,
            }
        );
    }

    #[test]
    fn test_autoplay_on_finished_game_does_nothing() {
        let mut game = SnakeGame::<DenseBoundary, ScriptedLookahead>::from_layout(
            3,
            3,
            &[Coordinate::new(0, 0)],
            Coordinate::new(2, 2),
            ScriptedLookahead::default(),
        )
        .unwrap();
        game.tick(Direction::North);
        let summary = autoplay(&mut game, &Solver::default(), &NoopInstruments, |_| {
            panic!("no ticks expected")
        });
        assert_eq!(summary.ticks, 0);
        assert_eq!(summary.status, GameStatus::Dead);
    }

    #[test]
    fn test_random_play_only_dies_when_trapped() {
        for seed in 0..8 {
            let mut game = SnakeGame::<DenseBoundary, RandomLookahead>::with_lookahead(
                &GameConfig::new(6, 6),
                RandomLookahead::seeded(seed),
            )
            .unwrap();
            let mut before = game.clone();
            let mut last = game.clone();
            let mut rng = SmallRng::seed_from_u64(seed);
            let summary = play_randomly(&mut game, &mut rng, 300, |g| {
                assert!(g.assert_consistency());
                before = std::mem::replace(&mut last, g.clone());
            });

            assert!(summary.ticks <= 300);
            assert_eq!(game.len(), 3 + summary.eggs_eaten);
            if summary.status == GameStatus::Dead {
                assert!(Direction::all().iter().all(|d| before.is_fatal(*d)));
            }
        }
    }

    #[test]
    fn test_random_play_dies_when_trapped() {
        let body = [
            Coordinate::new(0, 1),
            Coordinate::new(1, 1),
            Coordinate::new(1, 0),
            Coordinate::new(0, 0),
        ];
        let mut game = SnakeGame::<DenseBoundary, ScriptedLookahead>::from_layout(
            5,
            5,
            &body,
            Coordinate::new(4, 4),
            ScriptedLookahead::default(),
        )
        .unwrap();
        let mut rng = SmallRng::seed_from_u64(5);
        let summary = play_randomly(&mut game, &mut rng, 10, |_| {});
        assert_eq!(summary.ticks, 1);
        assert_eq!(summary.status, GameStatus::Dead);
    }
}
