//! Collision indexes: the set of cells that kill the snake when the head
//! enters them.
//!
//! Walls are stored as a one cell ring around the playfield (x = -1,
//! x = width, y = -1, y = height) so that hitting a wall and hitting the body
//! are the same O(1) lookup.
use fxhash::FxHashSet;
use std::fmt::Debug;

use crate::types::Coordinate;

/// A set of dead coordinates. Cloning must produce an independent copy, the
/// solver relies on that to fork game states.
pub trait BoundaryIndex: Debug + Clone {
    /// an empty index for a board of the given size
    fn with_dimensions(width: u32, height: u32) -> Self;

    /// marks a cell as dead, adding a cell twice is a no-op
    fn add(&mut self, c: Coordinate);

    /// clears a cell, removing an absent cell is a no-op
    fn remove(&mut self, c: Coordinate);

    #[allow(missing_docs)]
    fn is_boundary(&self, c: Coordinate) -> bool;

    /// number of dead cells
    fn len(&self) -> usize;

    #[allow(missing_docs)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// an index holding only the walls around the board
    fn walled(width: u32, height: u32) -> Self {
        let mut index = Self::with_dimensions(width, height);
        let (w, h) = (width as i32, height as i32);
        for x in -1..=w {
            index.add(Coordinate::new(x, -1));
            index.add(Coordinate::new(x, h));
        }
        for y in 0..h {
            index.add(Coordinate::new(-1, y));
            index.add(Coordinate::new(w, y));
        }
        index
    }
}

/// number of wall cells `BoundaryIndex::walled` creates
pub fn perimeter_cells(width: u32, height: u32) -> usize {
    2 * (width as usize + 2) + 2 * height as usize
}

/// A flat boolean array covering the board plus its wall ring. This is the
/// fast choice for the small boards the game is played on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseBoundary {
    stride: usize,
    rows: usize,
    cells: Vec<bool>,
    len: usize,
}

impl DenseBoundary {
    fn offset(&self, c: Coordinate) -> Option<usize> {
        let (x, y) = (c.x + 1, c.y + 1);
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.stride || y >= self.rows {
            return None;
        }
        Some(y * self.stride + x)
    }
}

impl BoundaryIndex for DenseBoundary {
    fn with_dimensions(width: u32, height: u32) -> Self {
        let stride = width as usize + 2;
        let rows = height as usize + 2;
        Self {
            stride,
            rows,
            cells: vec![false; stride * rows],
            len: 0,
        }
    }

    /// cells beyond the wall ring can never be reached, they are dropped
    fn add(&mut self, c: Coordinate) {
        if let Some(i) = self.offset(c) {
            if !self.cells[i] {
                self.cells[i] = true;
                self.len += 1;
            }
        }
    }

    fn remove(&mut self, c: Coordinate) {
        if let Some(i) = self.offset(c) {
            if self.cells[i] {
                self.cells[i] = false;
                self.len -= 1;
            }
        }
    }

    fn is_boundary(&self, c: Coordinate) -> bool {
        match self.offset(c) {
            Some(i) => self.cells[i],
            None => true,
        }
    }

    fn len(&self) -> usize {
        self.len
    }
}

/// A hash set of coordinates, for very large boards where a dense array
/// would mostly hold `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SparseBoundary {
    cells: FxHashSet<Coordinate>,
}

impl BoundaryIndex for SparseBoundary {
    fn with_dimensions(_width: u32, _height: u32) -> Self {
        Self::default()
    }

    fn add(&mut self, c: Coordinate) {
        self.cells.insert(c);
    }

    fn remove(&mut self, c: Coordinate) {
        self.cells.remove(&c);
    }

    fn is_boundary(&self, c: Coordinate) -> bool {
        self.cells.contains(&c)
    }

    fn len(&self) -> usize {
        self.cells.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn expected_walls(width: i32, height: i32) -> Vec<Coordinate> {
        (-1..=width)
            .cartesian_product(-1..=height)
            .filter(|(x, y)| *x == -1 || *x == width || *y == -1 || *y == height)
            .map(|(x, y)| Coordinate::new(x, y))
            .collect()
    }

    fn check_walls<B: BoundaryIndex>(width: u32, height: u32) {
        let index = B::walled(width, height);
        let walls = expected_walls(width as i32, height as i32);
        assert_eq!(index.len(), walls.len());
        assert_eq!(index.len(), perimeter_cells(width, height));
        for wall in walls {
            assert!(index.is_boundary(wall), "{} should be a wall", wall);
        }
        for (x, y) in (0..width as i32).cartesian_product(0..height as i32) {
            assert!(!index.is_boundary(Coordinate::new(x, y)));
        }
    }

    #[test]
    fn test_walls_square() {
        check_walls::<DenseBoundary>(2, 2);
        check_walls::<SparseBoundary>(2, 2);
    }

    #[test]
    fn test_walls_not_square() {
        check_walls::<DenseBoundary>(2, 4);
        check_walls::<SparseBoundary>(2, 4);
        check_walls::<DenseBoundary>(7, 3);
        check_walls::<SparseBoundary>(7, 3);
    }

    fn check_add_remove<B: BoundaryIndex>() {
        let mut index = B::with_dimensions(5, 5);
        let c = Coordinate::new(2, 3);
        index.add(c);
        index.add(c);
        assert_eq!(index.len(), 1);
        assert!(index.is_boundary(c));

        index.remove(c);
        index.remove(c);
        index.remove(Coordinate::new(0, 0));
        assert!(index.is_empty());
        assert!(!index.is_boundary(c));
    }

    #[test]
    fn test_add_remove_are_idempotent() {
        check_add_remove::<DenseBoundary>();
        check_add_remove::<SparseBoundary>();
    }

    fn check_clone_is_deep<B: BoundaryIndex>() {
        let mut original = B::walled(3, 3);
        original.add(Coordinate::new(1, 1));
        let mut copy = original.clone();
        copy.add(Coordinate::new(0, 0));
        copy.remove(Coordinate::new(1, 1));

        assert!(original.is_boundary(Coordinate::new(1, 1)));
        assert!(!original.is_boundary(Coordinate::new(0, 0)));
        assert_eq!(original.len(), perimeter_cells(3, 3) + 1);
        assert!(copy.is_boundary(Coordinate::new(0, 0)));
        assert!(!copy.is_boundary(Coordinate::new(1, 1)));
    }

    #[test]
    fn test_clone_is_deep() {
        check_clone_is_deep::<DenseBoundary>();
        check_clone_is_deep::<SparseBoundary>();
    }

    #[test]
    fn test_dense_treats_far_cells_as_walls() {
        let index = DenseBoundary::with_dimensions(3, 3);
        assert!(index.is_boundary(Coordinate::new(-2, 0)));
        assert!(index.is_boundary(Coordinate::new(0, 10)));
        assert!(!index.is_boundary(Coordinate::new(-1, 0)));
    }
}
