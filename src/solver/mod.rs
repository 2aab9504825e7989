//! Searching for the egg.
//!
//! The solver grows a tree of forked games. Every node holds its own copy of
//! the game, so siblings never share mutable state, and nodes live in an
//! arena that links children to parents by index. Nodes are expanded cheapest
//! first, where a node's cost is one step plus the Manhattan distance from its
//! head to the egg, and a node that ate the egg costs nothing.
//!
//! A child is only queued when it costs no more than its parent. This keeps
//! the tree small (after the first move every queued step gets closer to the
//! egg) but it is greedier than A*: an egg that can only be reached by first
//! moving away from it is reported as unreachable even though a path exists.
//! Callers are expected to fall back to another strategy when that happens.
use num_format::{Locale, ToFormattedString};
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, instrument, warn};

use crate::boundary::BoundaryIndex;
use crate::config::SolverConfig;
use crate::engine::{Lookahead, SnakeGame};
use crate::types::{Direction, SolverInstruments, TickOutcome};

mod priority_queue;

pub use priority_queue::{Cost, PriorityQueue};

/// cost of every move
const STEP_COST: Cost = 1;

/// the root is always expanded first and admits every child
const ROOT_COST: Cost = Cost::MAX;

/// Why a search stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveOutcome {
    /// a path to the egg was found
    Found,
    /// every admissible branch died
    Exhausted,
    /// `max_expanded_nodes` was hit
    NodeBudget,
    /// `time_budget_ms` was hit
    TimeBudget,
    /// the game had already ended
    GameOver,
}

impl fmt::Display for SolveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SolveOutcome::Found => "found",
            SolveOutcome::Exhausted => "exhausted",
            SolveOutcome::NodeBudget => "out of nodes",
            SolveOutcome::TimeBudget => "out of time",
            SolveOutcome::GameOver => "game over",
        };
        write!(f, "{}", s)
    }
}

/// Counters for a single search, handed to [`SolverInstruments`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// nodes whose children were generated
    pub expanded: usize,
    /// children generated, dead or alive
    pub generated: usize,
    /// children that died on their move
    pub dead_ends: usize,
    /// children dropped because they cost more than their parent
    pub pruned: usize,
    /// largest the open set got
    pub max_queue_len: usize,
    /// number of moves in the returned path
    pub path_len: Option<usize>,
    #[allow(missing_docs)]
    pub elapsed: Duration,
    #[allow(missing_docs)]
    pub outcome: SolveOutcome,
}

impl Default for SearchStats {
    fn default() -> Self {
        Self {
            expanded: 0,
            generated: 0,
            dead_ends: 0,
            pruned: 0,
            max_queue_len: 0,
            path_len: None,
            elapsed: Duration::default(),
            outcome: SolveOutcome::Exhausted,
        }
    }
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: expanded {} generated {} pruned {} dead {} peak queue {} in {:?}",
            self.outcome,
            self.expanded.to_formatted_string(&Locale::en),
            self.generated.to_formatted_string(&Locale::en),
            self.pruned.to_formatted_string(&Locale::en),
            self.dead_ends.to_formatted_string(&Locale::en),
            self.max_queue_len.to_formatted_string(&Locale::en),
            self.elapsed,
        )
    }
}

#[derive(Debug)]
struct SearchNode<B: BoundaryIndex, L: Lookahead> {
    // taken once the node is expanded, and never stored for egg nodes
    state: Option<SnakeGame<B, L>>,
    parent: Option<usize>,
    direction: Option<Direction>,
    reached_egg: bool,
    heuristic_cost: Cost,
}

/// Finds paths from the head to the egg
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    #[allow(missing_docs)]
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    #[allow(missing_docs)]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Searches for a sequence of moves that takes the head of `game` to its
    /// egg, oldest move first. `game` itself is never modified. `None` means
    /// no path was found within the budget, not that none exists.
    #[instrument(level = "trace", skip_all)]
    pub fn find_path<I, B, L>(
        &self,
        instruments: &I,
        game: &SnakeGame<B, L>,
    ) -> Option<Vec<Direction>>
    where
        I: SolverInstruments,
        B: BoundaryIndex,
        L: Lookahead,
    {
        let (path, stats) = self.search(game);
        instruments.observe_search(&stats);
        debug!(%stats, "search finished");
        path
    }

    fn search<B: BoundaryIndex, L: Lookahead>(
        &self,
        game: &SnakeGame<B, L>,
    ) -> (Option<Vec<Direction>>, SearchStats) {
        let start = Instant::now();
        let deadline = self.config.time_budget().map(|budget| start + budget);
        let mut stats = SearchStats::default();

        if game.status().is_over() {
            stats.outcome = SolveOutcome::GameOver;
            return (None, stats);
        }

        let mut arena = vec![SearchNode {
            state: Some(game.simulation_copy()),
            parent: None,
            direction: None,
            reached_egg: false,
            heuristic_cost: ROOT_COST,
        }];
        let mut queue = PriorityQueue::new();
        queue.push(0, ROOT_COST);

        let mut path = None;
        stats.outcome = loop {
            stats.max_queue_len = stats.max_queue_len.max(queue.len());
            let index = match queue.pop() {
                Some((index, _)) => index,
                None => break SolveOutcome::Exhausted,
            };

            if arena[index].reached_egg {
                path = Some(reconstruct_path(&arena, index));
                break SolveOutcome::Found;
            }
            if let Some(max) = self.config.max_expanded_nodes {
                if stats.expanded >= max {
                    warn!(max, "solver ran out of nodes");
                    break SolveOutcome::NodeBudget;
                }
            }
            if let Some(deadline) = deadline {
                if Instant::now() >= deadline {
                    warn!(expanded = stats.expanded, "solver ran out of time");
                    break SolveOutcome::TimeBudget;
                }
            }

            let state = match arena[index].state.take() {
                Some(state) => state,
                None => continue,
            };
            let parent_cost = arena[index].heuristic_cost;
            stats.expanded += 1;

            for &direction in Direction::all().iter() {
                let mut next = state.clone();
                let outcome = next.tick(direction);
                stats.generated += 1;
                if outcome == TickOutcome::Died {
                    stats.dead_ends += 1;
                    continue;
                }

                // a won game means the egg was eaten and no next one fits
                let reached_egg = matches!(outcome, TickOutcome::AteEgg | TickOutcome::Won);
                let cost = if reached_egg {
                    0
                } else {
                    STEP_COST + next.head().manhattan_distance(&next.egg())
                };
                if cost > parent_cost {
                    stats.pruned += 1;
                    continue;
                }

                arena.push(SearchNode {
                    state: if reached_egg { None } else { Some(next) },
                    parent: Some(index),
                    direction: Some(direction),
                    reached_egg,
                    heuristic_cost: cost,
                });
                queue.push(arena.len() - 1, cost);
            }
        };

        stats.path_len = path.as_ref().map(Vec::len);
        stats.elapsed = start.elapsed();
        (path, stats)
    }
}

fn reconstruct_path<B: BoundaryIndex, L: Lookahead>(
    arena: &[SearchNode<B, L>],
    mut index: usize,
) -> Vec<Direction> {
    let mut path = vec![];
    while let Some(parent) = arena[index].parent {
        path.extend(arena[index].direction);
        index = parent;
    }
    path.reverse();
    path
}
