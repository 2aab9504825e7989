//! various types that are shared between the engine, the solver and callers
use crate::solver::SearchStats;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A vector with which to do positional math
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vector {
    /// x offset
    pub x: i32,
    /// y offset
    pub y: i32,
}

/// A cell on the board, using the canvas convention: `(0, 0)` is the top
/// left corner, x grows to the right and y grows downwards.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    /// column
    pub x: i32,
    /// row
    pub y: i32,
}

impl Coordinate {
    /// makes a new coordinate
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// the coordinate one step away in the given vector
    pub fn add_vec(&self, v: Vector) -> Coordinate {
        Coordinate {
            x: self.x + v.x,
            y: self.y + v.y,
        }
    }

    /// the coordinate one step away in the given direction
    pub fn step(&self, direction: Direction) -> Coordinate {
        self.add_vec(direction.to_vector())
    }

    /// taxicab distance between two coordinates
    pub fn manhattan_distance(&self, other: &Coordinate) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// checks whether the two coordinates share an edge
    pub fn is_adjacent(&self, other: &Coordinate) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Represents a single move of the snake's head
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    #[allow(missing_docs)]
    North,
    #[allow(missing_docs)]
    South,
    #[allow(missing_docs)]
    East,
    #[allow(missing_docs)]
    West,
}

/// number of distinct directions
pub const N_DIRECTIONS: usize = 4;

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::North => write!(f, "north"),
            Direction::South => write!(f, "south"),
            Direction::East => write!(f, "east"),
            Direction::West => write!(f, "west"),
        }
    }
}

impl Direction {
    /// convert this direction to a vector, y grows downwards
    pub fn to_vector(self) -> Vector {
        match self {
            Direction::North => Vector { x: 0, y: -1 },
            Direction::South => Vector { x: 0, y: 1 },
            Direction::East => Vector { x: 1, y: 0 },
            Direction::West => Vector { x: -1, y: 0 },
        }
    }

    /// create a Direction from a unit vector, returns None for anything else
    pub fn from_vector(vector: Vector) -> Option<Self> {
        match vector {
            Vector { x: 0, y: -1 } => Some(Self::North),
            Vector { x: 0, y: 1 } => Some(Self::South),
            Vector { x: 1, y: 0 } => Some(Self::East),
            Vector { x: -1, y: 0 } => Some(Self::West),
            _ => None,
        }
    }

    /// returns all directions, in the order the solver expands them
    pub const fn all() -> [Direction; N_DIRECTIONS] {
        [
            Direction::East,
            Direction::North,
            Direction::South,
            Direction::West,
        ]
    }

    /// converts this direction to an index, in the same order as `Direction::all()`
    pub fn as_index(&self) -> usize {
        match self {
            Direction::East => 0,
            Direction::North => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }
}

/// The values written in to the pixel grid
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CellValue {
    /// nothing here
    Empty = 0,
    /// a snake body segment, head included
    Body = 1,
    /// the egg
    Egg = 3,
}

impl CellValue {
    /// the raw value a renderer sees
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// parses a raw pixel value
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(CellValue::Empty),
            1 => Some(CellValue::Body),
            3 => Some(CellValue::Egg),
            _ => None,
        }
    }
}

/// The lifecycle of a game, `Dead` and `Won` are terminal
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// still accepting ticks
    Running,
    /// the head ran in to a wall or the body
    Dead,
    /// the board filled up and no egg can be placed
    Won,
}

impl GameStatus {
    #[allow(missing_docs)]
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::Running)
    }
}

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickOutcome {
    /// the snake moved without growing
    Moved,
    /// the snake moved on to the egg and grew by one
    AteEgg,
    /// the snake died, either on this tick or an earlier one
    Died,
    /// the game is won, either on this tick or an earlier one
    Won,
}

impl TickOutcome {
    /// the first half of the classic `(is_game_over, did_win)` pair
    pub fn is_game_over(&self) -> bool {
        matches!(self, TickOutcome::Died | TickOutcome::Won)
    }

    /// the second half of the classic `(is_game_over, did_win)` pair
    pub fn did_win(&self) -> bool {
        matches!(self, TickOutcome::Won)
    }

    /// collapses the outcome in to `(is_game_over, did_win)`
    pub fn as_pair(&self) -> (bool, bool) {
        (self.is_game_over(), self.did_win())
    }
}

/// Instruments to be used with the solver
pub trait SolverInstruments: fmt::Debug {
    #[allow(missing_docs)]
    fn observe_search(&self, stats: &SearchStats);
}

/// Instruments that throw every observation away
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopInstruments;

impl SolverInstruments for NoopInstruments {
    fn observe_search(&self, _stats: &SearchStats) {}
}
