//! Board module - the immutable tile grid
//!
//! A board is a `width x height` grid of cells stored row-major in one flat
//! vector. Coordinates are [`Point`]s: `row` counts down from the top, `col`
//! counts right from the left edge.
//!
//! Boards have no public mutators. Every transform (`with_cell`, `transpose`,
//! `mirror`, the slides in [`crate::slide`]) returns a new board, so the
//! previous value can always be compared against the next one.

use std::fmt;

use crate::error::BoardError;
use crate::types::{is_valid_cell, Cell, Point};

/// The game board - `width` columns x `height` rows using flat storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat cells, row-major order (row * width + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a board with every cell empty
    pub fn empty(width: usize, height: usize) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::EmptyDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![0; width * height],
        })
    }

    /// Build a board from rows of cell values
    ///
    /// Rejects an empty grid, rows of differing length, and values that are
    /// neither `0` nor a power of two.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_core::Board;
    ///
    /// let board = Board::from_rows(&[[0, 2], [4, 0]]).unwrap();
    /// assert_eq!(board.width(), 2);
    /// assert_eq!(board.to_rows(), vec![vec![0, 2], vec![4, 0]]);
    ///
    /// assert!(Board::from_rows(&[vec![2, 2], vec![2]]).is_err());
    /// assert!(Board::from_rows(&[[3, 0]]).is_err());
    /// ```
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Result<Self, BoardError> {
        let height = rows.len();
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if width == 0 || height == 0 {
            return Err(BoardError::EmptyDimension { width, height });
        }

        let mut cells = Vec::with_capacity(width * height);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != width {
                return Err(BoardError::RaggedRow {
                    row,
                    expected: width,
                    actual: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                if !is_valid_cell(value) {
                    return Err(BoardError::InvalidTile { row, col, value });
                }
            }
            cells.extend_from_slice(values);
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Build a board from rows produced by a transform.
    ///
    /// Callers guarantee the rows are non-empty and rectangular.
    pub(crate) fn from_row_vecs(width: usize, rows: impl IntoIterator<Item = Vec<Cell>>) -> Self {
        let cells: Vec<Cell> = rows.into_iter().flatten().collect();
        debug_assert!(width > 0 && cells.len() % width == 0);
        Self {
            width,
            height: cells.len() / width,
            cells,
        }
    }

    /// A board of the same dimensions with every cell empty
    pub fn cleared(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            cells: vec![0; self.cells.len()],
        }
    }

    #[inline(always)]
    fn index(&self, point: Point) -> Option<usize> {
        if point.row >= self.height || point.col >= self.width {
            return None;
        }
        Some(point.row * self.width + point.col)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at `point`
    /// Returns None if out of bounds
    pub fn get(&self, point: Point) -> Option<Cell> {
        self.index(point).map(|idx| self.cells[idx])
    }

    /// Check if `point` lies on the board
    pub fn contains_point(&self, point: Point) -> bool {
        self.index(point).is_some()
    }

    /// Return a copy of the board with one cell replaced
    /// Returns None if `point` is out of bounds
    pub fn with_cell(&self, point: Point, value: Cell) -> Option<Self> {
        let idx = self.index(point)?;
        let mut next = self.clone();
        next.cells[idx] = value;
        Some(next)
    }

    /// Flat row-major view of all cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.height {
            return None;
        }
        let start = row * self.width;
        Some(&self.cells[start..start + self.width])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width)
    }

    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.rows().map(|row| row.to_vec()).collect()
    }

    /// Every coordinate on the board, row by row
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| Point::new(row, col)))
    }

    /// Coordinates of all empty cells, row by row
    pub fn empty_points(&self) -> Vec<Point> {
        self.points()
            .filter(|&p| self.get(p) == Some(0))
            .collect()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    pub fn tile_count(&self) -> usize {
        self.cells.len() - self.empty_count()
    }

    /// Sum of all cell values
    pub fn sum(&self) -> u64 {
        self.cells.iter().map(|&v| u64::from(v)).sum()
    }

    /// Largest tile on the board (0 when empty)
    pub fn max_tile(&self) -> Cell {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    pub fn contains_value(&self, value: Cell) -> bool {
        self.cells.contains(&value)
    }

    /// Swap rows and columns
    pub fn transpose(&self) -> Self {
        let mut cells = Vec::with_capacity(self.cells.len());
        for col in 0..self.width {
            for row in 0..self.height {
                cells.push(self.cells[row * self.width + col]);
            }
        }
        Self {
            width: self.height,
            height: self.width,
            cells,
        }
    }

    /// Reverse every row
    pub fn mirror(&self) -> Self {
        let mut cells = self.cells.clone();
        for row in cells.chunks_mut(self.width) {
            row.reverse();
        }
        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pad = self.max_tile().max(1).to_string().len();
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{value:>pad$}")?;
            }
        }
        Ok(())
    }
}
