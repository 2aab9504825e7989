//! The snake simulation.
//!
//! [`SnakeGame`] keeps the body in a fixed capacity ring (`width * height`
//! slots, a head cursor and a tail cursor) and mirrors every body cell in a
//! [`BoundaryIndex`] together with the walls, so a move is checked with a
//! single lookup. Cloning a game is a flat copy of those buffers, which is
//! what lets the solver fork thousands of hypothetical futures.
use fxhash::FxHashSet;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::board::PixelGrid;
use crate::boundary::{perimeter_cells, BoundaryIndex, DenseBoundary};
use crate::config::GameConfig;
use crate::types::{CellValue, Coordinate, Direction, GameStatus, TickOutcome, Vector};
use crate::{Error, Result};

mod egg;
mod lookahead;

pub use egg::place_egg;
pub use lookahead::{Lookahead, RandomLookahead, ScriptedLookahead};

/// A single snake game.
///
/// `B` is the collision index and `L` the source of head moves and egg
/// positions, see [`Lookahead`].
#[derive(Debug, Clone)]
pub struct SnakeGame<B: BoundaryIndex = DenseBoundary, L: Lookahead = RandomLookahead> {
    width: u32,
    height: u32,
    // [ .., tail, body, body, .., head, .. ] wrapping around the end
    body: Vec<Coordinate>,
    head: usize,
    tail: usize,
    length: usize,
    egg: Coordinate,
    direction: Direction,
    status: GameStatus,
    boundaries: B,
    grid: Option<PixelGrid>,
    lookahead: L,
}

impl SnakeGame {
    /// Sets up a game with real randomness for egg placement.
    ///
    /// The body is laid out on row `height / 2` facing East, with its tail
    /// `start_offset` cells from the left edge.
    pub fn new(config: &GameConfig) -> Result<Self> {
        Self::with_lookahead(config, RandomLookahead::from_entropy())
    }
}

fn check_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimensions { width, height });
    }
    Ok(())
}

impl<B: BoundaryIndex, L: Lookahead> SnakeGame<B, L> {
    fn empty(width: u32, height: u32, lookahead: L) -> Self {
        let capacity = width as usize * height as usize;
        Self {
            width,
            height,
            body: vec![Coordinate::new(0, 0); capacity],
            head: 0,
            tail: 0,
            length: 0,
            egg: Coordinate::new(0, 0),
            direction: Direction::East,
            status: GameStatus::Running,
            boundaries: B::walled(width, height),
            grid: Some(PixelGrid::new(width as usize, height as usize)),
            lookahead,
        }
    }

    /// Sets up a game from a config, using `lookahead` for every egg.
    ///
    /// The first egg goes on the body's row, mirrored across the board from
    /// the head. When that cell is unusable the egg is placed the same way
    /// every later egg is.
    pub fn with_lookahead(config: &GameConfig, lookahead: L) -> Result<Self> {
        let GameConfig {
            width,
            height,
            start_offset,
            initial_length,
        } = *config;
        check_dimensions(width, height)?;
        if initial_length == 0 {
            return Err(Error::EmptySnake);
        }
        if initial_length > config.capacity() {
            return Err(Error::LengthExceedsCapacity {
                length: initial_length,
                capacity: config.capacity(),
            });
        }
        if start_offset as usize + initial_length > width as usize {
            return Err(Error::BodyDoesNotFit {
                start_offset,
                length: initial_length,
                width,
            });
        }

        let row = (height / 2) as i32;
        let cells = (0..initial_length)
            .map(|i| Coordinate::new(start_offset as i32 + i as i32, row))
            .collect_vec();

        let mut game = Self::empty(width, height, lookahead);
        game.lay_body(&cells);

        let head = game.head();
        let preferred = Coordinate::new(width as i32 - head.x + 1, row);
        let egg = if game.on_board(preferred) && !game.boundaries.is_boundary(preferred) {
            preferred
        } else {
            let start = game.lookahead.next_egg_location(width, height);
            place_egg(&game.boundaries, width, height, start).ok_or(Error::NoRoomForEgg)?
        };
        game.set_egg(egg);

        debug!(head = ?game.head(), tail = ?game.tail(), egg = ?game.egg, "game set up");
        Ok(game)
    }

    /// Builds a game from an explicit position. `body` is listed from tail to
    /// head and every pair of neighbours must share an edge. The snake faces
    /// the way its last segment moved, or East for a single cell snake.
    pub fn from_layout(
        width: u32,
        height: u32,
        body: &[Coordinate],
        egg: Coordinate,
        lookahead: L,
    ) -> Result<Self> {
        check_dimensions(width, height)?;
        if body.is_empty() {
            return Err(Error::EmptySnake);
        }
        let capacity = width as usize * height as usize;
        if body.len() > capacity {
            return Err(Error::LengthExceedsCapacity {
                length: body.len(),
                capacity,
            });
        }

        let mut game = Self::empty(width, height, lookahead);
        let mut seen = FxHashSet::default();
        for c in body {
            if !game.on_board(*c) {
                return Err(Error::OffBoard(*c));
            }
            if !seen.insert(*c) {
                return Err(Error::OverlappingBody(*c));
            }
        }
        if let Some((a, b)) = body.iter().tuple_windows().find(|(a, b)| !a.is_adjacent(b)) {
            return Err(Error::DisjointBody(*a, *b));
        }
        if !game.on_board(egg) {
            return Err(Error::OffBoard(egg));
        }
        if seen.contains(&egg) {
            return Err(Error::EggOnBody(egg));
        }

        game.lay_body(body);
        game.set_egg(egg);
        if let [.., neck, head] = body {
            let facing = Vector {
                x: head.x - neck.x,
                y: head.y - neck.y,
            };
            game.direction = Direction::from_vector(facing).unwrap_or(Direction::East);
        }
        Ok(game)
    }

    fn lay_body(&mut self, cells: &[Coordinate]) {
        for (i, c) in cells.iter().enumerate() {
            self.body[i] = *c;
            self.boundaries.add(*c);
            self.paint(*c, CellValue::Body);
        }
        self.tail = 0;
        self.head = cells.len() - 1;
        self.length = cells.len();
    }

    fn set_egg(&mut self, egg: Coordinate) {
        self.egg = egg;
        self.paint(egg, CellValue::Egg);
    }

    fn paint(&mut self, c: Coordinate, value: CellValue) {
        if let Some(grid) = self.grid.as_mut() {
            grid.set(c, value);
        }
    }

    fn on_board(&self, c: Coordinate) -> bool {
        c.x >= 0 && c.y >= 0 && c.x < self.width as i32 && c.y < self.height as i32
    }

    /// Advances the game by one step.
    ///
    /// Running in to a wall or the body kills the snake without touching
    /// anything else. Moving on to the egg grows the snake by one and places
    /// the next egg; if there is no cell left for it the game is won instead
    /// and the move is not applied. Ticks on a finished game only repeat the
    /// final outcome.
    #[instrument(level = "trace", skip(self))]
    pub fn tick(&mut self, direction: Direction) -> TickOutcome {
        match self.status {
            GameStatus::Dead => return TickOutcome::Died,
            GameStatus::Won => return TickOutcome::Won,
            GameStatus::Running => {}
        }
        if self.length >= self.capacity() {
            self.status = GameStatus::Won;
            return TickOutcome::Won;
        }

        let candidate = self.lookahead.next_head_location(self.head(), direction);
        if self.boundaries.is_boundary(candidate) {
            self.status = GameStatus::Dead;
            return TickOutcome::Died;
        }

        let capacity = self.capacity();
        let will_grow = candidate == self.egg;
        if will_grow {
            // the head is about to cover the candidate, the next egg can't go there
            self.boundaries.add(candidate);
            let start = self.lookahead.next_egg_location(self.width, self.height);
            match place_egg(&self.boundaries, self.width, self.height, start) {
                Some(egg) => self.set_egg(egg),
                None => {
                    self.boundaries.remove(candidate);
                    self.status = GameStatus::Won;
                    debug!(length = self.length, "board is full");
                    return TickOutcome::Won;
                }
            }
        } else {
            let old_tail = self.body[self.tail];
            self.boundaries.remove(old_tail);
            self.paint(old_tail, CellValue::Empty);
            self.tail = (self.tail + 1) % capacity;
        }

        self.head = (self.head + 1) % capacity;
        self.body[self.head] = candidate;
        self.boundaries.add(candidate);
        self.paint(candidate, CellValue::Body);
        self.direction = direction;

        if will_grow {
            self.length += 1;
            TickOutcome::AteEgg
        } else {
            TickOutcome::Moved
        }
    }

    /// checks whether moving in `direction` would end the game, without moving
    pub fn is_fatal(&self, direction: Direction) -> bool {
        self.status.is_over()
            || self
                .boundaries
                .is_boundary(self.lookahead.next_head_location(self.head(), direction))
    }

    /// An independent copy without the pixel grid, for simulating moves that
    /// nobody will look at.
    pub fn simulation_copy(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            body: self.body.clone(),
            head: self.head,
            tail: self.tail,
            length: self.length,
            egg: self.egg,
            direction: self.direction,
            status: self.status,
            boundaries: self.boundaries.clone(),
            grid: None,
            lookahead: self.lookahead.clone(),
        }
    }

    /// stops maintaining the pixel grid and frees it
    pub fn disable_pixel_grid(&mut self) {
        self.grid = None;
    }

    /// starts maintaining the pixel grid again, redrawing it from the body
    /// and the egg
    pub fn enable_pixel_grid(&mut self) {
        let mut grid = PixelGrid::new(self.width as usize, self.height as usize);
        grid.set(self.egg, CellValue::Egg);
        for c in self.body() {
            grid.set(c, CellValue::Body);
        }
        self.grid = Some(grid);
    }

    /// the grid renderers read, `None` while it is disabled
    pub fn pixel_grid(&self) -> Option<&PixelGrid> {
        self.grid.as_ref()
    }

    #[allow(missing_docs)]
    pub fn head(&self) -> Coordinate {
        self.body[self.head]
    }

    #[allow(missing_docs)]
    pub fn tail(&self) -> Coordinate {
        self.body[self.tail]
    }

    #[allow(missing_docs)]
    pub fn egg(&self) -> Coordinate {
        self.egg
    }

    /// number of body segments, head included
    pub fn len(&self) -> usize {
        self.length
    }

    /// always false, every game has at least a head
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// the most segments the body could ever hold
    pub fn capacity(&self) -> usize {
        self.body.len()
    }

    #[allow(missing_docs)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[allow(missing_docs)]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[allow(missing_docs)]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// the direction of the last applied move
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// body segments from head to tail
    pub fn body(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let capacity = self.capacity();
        (0..self.length).map(move |i| self.body[(self.head + capacity - i) % capacity])
    }

    #[allow(missing_docs)]
    pub fn boundaries(&self) -> &B {
        &self.boundaries
    }

    #[allow(missing_docs)]
    pub fn lookahead(&self) -> &L {
        &self.lookahead
    }

    /// Checks that the collision index holds exactly the walls plus the body,
    /// that the body is connected and on the board, that the egg is free, and
    /// that the pixel grid (when enabled) agrees with all of it.
    pub fn assert_consistency(&self) -> bool {
        let body = self.body().collect_vec();
        if body.len() != self.length || self.length == 0 {
            return false;
        }
        if self.boundaries.len() != perimeter_cells(self.width, self.height) + self.length {
            return false;
        }
        if !body
            .iter()
            .all(|c| self.on_board(*c) && self.boundaries.is_boundary(*c))
        {
            return false;
        }
        if body.iter().tuple_windows().any(|(a, b)| !a.is_adjacent(b)) {
            return false;
        }
        if !self.on_board(self.egg) || self.boundaries.is_boundary(self.egg) {
            return false;
        }
        match &self.grid {
            Some(grid) => {
                grid.count(CellValue::Body) == self.length
                    && grid.get(self.egg) == Some(CellValue::Egg)
                    && body.iter().all(|c| grid.get(*c) == Some(CellValue::Body))
            }
            None => true,
        }
    }
}
