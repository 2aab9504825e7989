//! The pixel grid handed to renderers
use std::fmt;
use std::ops::Index;

use crate::types::{CellValue, Coordinate};

/// A `width`x`height` matrix of [`CellValue`]s indexed as `grid[x][y]`.
///
/// Cells are stored column major so that `grid[x]` is a contiguous slice of
/// the column at `x`. The engine is the only writer; renderers read it once
/// per tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl PixelGrid {
    /// an all empty grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![CellValue::Empty.as_u8(); width * height],
        }
    }

    #[allow(missing_docs)]
    pub fn width(&self) -> usize {
        self.width
    }

    #[allow(missing_docs)]
    pub fn height(&self) -> usize {
        self.height
    }

    fn offset(&self, c: Coordinate) -> Option<usize> {
        if c.x < 0 || c.y < 0 {
            return None;
        }
        let (x, y) = (c.x as usize, c.y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(x * self.height + y)
    }

    /// the value at a coordinate, `None` when it is off the grid
    pub fn get(&self, c: Coordinate) -> Option<CellValue> {
        self.offset(c)
            .and_then(|i| CellValue::from_u8(self.cells[i]))
    }

    /// writes a value, writes off the grid are ignored
    pub fn set(&mut self, c: Coordinate, value: CellValue) {
        if let Some(i) = self.offset(c) {
            self.cells[i] = value.as_u8();
        }
    }

    /// resets every cell to empty
    pub fn clear(&mut self) {
        self.cells
            .iter_mut()
            .for_each(|c| *c = CellValue::Empty.as_u8());
    }

    /// number of cells holding the given value
    pub fn count(&self, value: CellValue) -> usize {
        self.cells.iter().filter(|c| **c == value.as_u8()).count()
    }

    /// iterates the columns, each one a slice indexed by y
    pub fn columns(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(self.height.max(1))
    }
}

impl Index<usize> for PixelGrid {
    type Output = [u8];

    fn index(&self, x: usize) -> &[u8] {
        &self.cells[x * self.height..(x + 1) * self.height]
    }
}

impl fmt::Display for PixelGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let symbol = match CellValue::from_u8(self[x][y]) {
                    Some(CellValue::Body) => '#',
                    Some(CellValue::Egg) => 'o',
                    _ => '.',
                };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
