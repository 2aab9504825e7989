use crate::types::Coordinate;
use thiserror::Error;

/// Errors raised while setting up a game or reading its configuration
#[derive(Debug, Error)]
pub enum Error {
    /// the board has no cells
    #[error("board dimensions must be positive, got {width}x{height}")]
    InvalidDimensions {
        #[allow(missing_docs)]
        width: u32,
        #[allow(missing_docs)]
        height: u32,
    },

    /// a snake needs at least a head
    #[error("initial snake length must be at least 1")]
    EmptySnake,

    /// more segments than cells
    #[error("initial snake length {length} exceeds board capacity {capacity}")]
    LengthExceedsCapacity {
        #[allow(missing_docs)]
        length: usize,
        #[allow(missing_docs)]
        capacity: usize,
    },

    /// the starting body is laid out on a single row and has to fit in it
    #[error("body of length {length} at x={start_offset} does not fit a board {width} wide")]
    BodyDoesNotFit {
        #[allow(missing_docs)]
        start_offset: u32,
        #[allow(missing_docs)]
        length: usize,
        #[allow(missing_docs)]
        width: u32,
    },

    /// a layout cell sits outside the playfield
    #[error("{0} is off the board")]
    OffBoard(Coordinate),

    /// a layout lists the same cell twice
    #[error("the body crosses itself at {0}")]
    OverlappingBody(Coordinate),

    /// two consecutive layout cells do not share an edge
    #[error("body segments {0} and {1} are not adjacent")]
    DisjointBody(Coordinate, Coordinate),

    /// the egg was put on top of the snake
    #[error("the egg at {0} is on the snake")]
    EggOnBody(Coordinate),

    /// no free cell is left for the first egg
    #[error("no free cell is left for the first egg")]
    NoRoomForEgg,

    /// the configuration could not be parsed
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
