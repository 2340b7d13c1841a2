//! Grid module - the shared playfield
//!
//! A 12x20 grid where each cell is either empty or solid (a locked tetromino cell).
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..11 (left to right), y ranges 0..19 (top to bottom).

use crate::types::{Cell, Point, BOARD_CELLS, BOARD_COLS, BOARD_ROWS};

/// The playfield - 12 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Row-major (y * COLS + x)
    cells: [Cell; BOARD_CELLS],
}

impl Grid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_CELLS],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_COLS as i8 || y < 0 || y >= BOARD_ROWS as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_COLS as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_COLS
    }

    pub fn height(&self) -> u8 {
        BOARD_ROWS
    }

    /// Cell at (x, y), `None` when out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and solid
    pub fn is_solid(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Cell::Solid))
    }

    pub fn is_solid_at(&self, p: Point) -> bool {
        self.is_solid(p.x, p.y)
    }

    /// In bounds and empty
    pub fn is_empty_at(&self, p: Point) -> bool {
        matches!(self.get(p.x, p.y), Some(Cell::Empty))
    }

    /// Check if a row is completely solid
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_ROWS as usize {
            return false;
        }
        let start = y * BOARD_COLS as usize;
        self.cells[start..start + BOARD_COLS as usize]
            .iter()
            .all(Cell::is_solid)
    }

    /// Remove row `y`: every row above moves down one and row 0 is emptied.
    pub fn clear_row(&mut self, y: usize) {
        if y >= BOARD_ROWS as usize {
            return;
        }
        let width = BOARD_COLS as usize;

        // copy_within handles the overlapping ranges
        for row in (1..=y).rev() {
            let src = (row - 1) * width;
            self.cells.copy_within(src..src + width, row * width);
        }
        self.cells[..width].fill(Cell::Empty);
    }

    /// Clear every full row and return how many were removed.
    ///
    /// Scans bottom to top. After a clear the same row index is examined again,
    /// since the row shifted into it may be full as well.
    pub fn clear_full_rows(&mut self) -> u32 {
        let mut cleared = 0;
        let mut y = BOARD_ROWS as usize;
        while y > 0 {
            let row = y - 1;
            if self.is_row_full(row) {
                self.clear_row(row);
                cleared += 1;
            } else {
                y -= 1;
            }
        }
        cleared
    }

    /// Mark every in-bounds cell solid. Cells above the board (y < 0) are skipped.
    pub fn lock_cells(&mut self, cells: &[Point]) {
        for p in cells {
            if p.y >= 0 {
                self.set(p.x, p.y, Cell::Solid);
            }
        }
    }

    /// Number of solid cells
    pub fn solid_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_solid()).count()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy into a row-major 2D array (snapshot form)
    pub fn write_rows(&self, out: &mut [[Cell; BOARD_COLS as usize]; BOARD_ROWS as usize]) {
        let width = BOARD_COLS as usize;
        for (y, row) in out.iter_mut().enumerate() {
            row.copy_from_slice(&self.cells[y * width..(y + 1) * width]);
        }
    }

    /// Build from text rows, `#` is solid. Missing rows at the top are empty.
    ///
    /// ```
    /// use tui_snaketris_core::Grid;
    ///
    /// let grid = Grid::from_rows(&["############"]);
    /// assert!(grid.is_row_full(19));
    /// assert!(!grid.is_row_full(18));
    /// ```
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut grid = Self::new();
        let offset = (BOARD_ROWS as usize).saturating_sub(rows.len());
        for (i, row) in rows.iter().enumerate().take(BOARD_ROWS as usize) {
            for (x, ch) in row.chars().enumerate().take(BOARD_COLS as usize) {
                if ch == '#' {
                    grid.set(x as i8, (offset + i) as i8, Cell::Solid);
                }
            }
        }
        grid
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
