use std::fmt;

use super::Direction;
use crate::error::GridError;

pub const DEFAULT_HEIGHT: usize = 4;
pub const DEFAULT_WIDTH: usize = 4;

/// Largest tile a grid can hold. Two of these never merge, so doubling a tile
/// always fits in a `u32`.
pub const MAX_TILE: u32 = 1 << 30;

/// Characters reserved for one tile when the grid is drawn.
pub(crate) const CELL_WIDTH: usize = 6;

/// Score gained and merges performed by one slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlideSummary {
    pub gained: u64,
    pub merges: usize,
}

impl SlideSummary {
    fn absorb(&mut self, other: SlideSummary) {
        self.gained += other.gained;
        self.merges += other.merges;
    }
}

/// A `height x width` matrix of tiles, stored row-major.
///
/// A cell is 0 when empty, otherwise a power of two >= 2. Only the four
/// geometric operations below know about coordinates; every directional rule
/// is written once for `Left` and mapped onto the other directions through
/// [`Grid::reflect_columns`] and [`Grid::transpose`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<u32>,
}

impl Grid {
    /// Create an empty grid.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(height: usize, width: usize) -> Self {
        assert!(
            height > 0 && width > 0,
            "grid dimensions must be non-zero (got {height}x{width})"
        );
        Grid {
            height,
            width,
            cells: vec![0; height * width],
        }
    }

    /// Build a grid from explicit rows, checking shape and tile values.
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self, GridError> {
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if width == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(rows.len() * width);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != width {
                return Err(GridError::Ragged {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                if !is_tile_value(value) {
                    return Err(GridError::InvalidTile { row, col, value });
                }
            }
            cells.extend_from_slice(values);
        }

        Ok(Grid {
            height: rows.len(),
            width,
            cells,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the tile at a position. Row 0 is the top.
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[row * self.width + col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: u32) {
        debug_assert!(is_tile_value(value));
        self.cells[row * self.width + col] = value;
    }

    /// Borrow one row.
    pub fn row(&self, row: usize) -> &[u32] {
        &self.cells[row * self.width..(row + 1) * self.width]
    }

    /// Iterate over rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks(self.width)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Coordinates of every empty cell, row-major.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == 0)
            .map(|(idx, _)| (idx / self.width, idx % self.width))
            .collect()
    }

    /// Number of non-empty cells.
    pub fn count_tiles(&self) -> usize {
        self.cells.iter().filter(|&&v| v != 0).count()
    }

    /// The largest tile on the grid, or 0 if it is empty.
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&v| v != 0)
    }

    pub(crate) fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Mirror the grid left-to-right.
    pub fn reflect_columns(&self) -> Grid {
        let mut cells = self.cells.clone();
        for row in cells.chunks_mut(self.width) {
            row.reverse();
        }
        Grid {
            height: self.height,
            width: self.width,
            cells,
        }
    }

    /// Swap rows and columns. A `h x w` grid becomes `w x h`.
    pub fn transpose(&self) -> Grid {
        let mut cells = Vec::with_capacity(self.cells.len());
        for col in 0..self.width {
            for row in 0..self.height {
                cells.push(self.get(row, col));
            }
        }
        Grid {
            height: self.width,
            width: self.height,
            cells,
        }
    }

    /// Whether sliding in `direction` would change at least one cell.
    pub fn can_slide(&self, direction: Direction) -> bool {
        match direction {
            Direction::Left => self.can_slide_left(),
            Direction::Right => self.reflect_columns().can_slide_left(),
            Direction::Up => self.transpose().can_slide_left(),
            Direction::Down => self.transpose().can_slide(Direction::Right),
        }
    }

    /// Slide and merge every line toward `direction`. No randomness.
    pub fn slide(&self, direction: Direction) -> (Grid, SlideSummary) {
        match direction {
            Direction::Left => self.slide_left(),
            Direction::Right => {
                let (moved, summary) = self.reflect_columns().slide_left();
                (moved.reflect_columns(), summary)
            }
            Direction::Up => {
                let (moved, summary) = self.transpose().slide_left();
                (moved.transpose(), summary)
            }
            Direction::Down => {
                let (moved, summary) = self.transpose().slide(Direction::Right);
                (moved.transpose(), summary)
            }
        }
    }

    fn can_slide_left(&self) -> bool {
        self.rows().any(line_can_slide_left)
    }

    fn slide_left(&self) -> (Grid, SlideSummary) {
        let mut moved = self.clone();
        let mut summary = SlideSummary::default();
        for row in moved.cells.chunks_mut(self.width) {
            summary.absorb(slide_line_left(row));
        }
        (moved, summary)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", border_line('┌', '┬', '┐', self.width))?;
        for (idx, row) in self.rows().enumerate() {
            if idx > 0 {
                writeln!(f, "{}", border_line('├', '┼', '┤', self.width))?;
            }
            for &value in row {
                write!(f, "│{}", tile_label(value))?;
            }
            writeln!(f, "│")?;
        }
        write!(f, "{}", border_line('└', '┴', '┘', self.width))
    }
}

/// A horizontal rule such as `┌──────┬──────┐` spanning `columns` cells.
pub(crate) fn border_line(left: char, mid: char, right: char, columns: usize) -> String {
    let segment = "─".repeat(CELL_WIDTH);
    let mid = mid.to_string();
    let inner = vec![segment; columns].join(mid.as_str());
    format!("{left}{inner}{right}")
}

/// The tile value centred in a cell, or blanks for an empty cell.
pub(crate) fn tile_label(value: u32) -> String {
    if value == 0 {
        " ".repeat(CELL_WIDTH)
    } else {
        format!("{:^width$}", value, width = CELL_WIDTH)
    }
}

fn is_tile_value(value: u32) -> bool {
    value == 0 || (value >= 2 && value <= MAX_TILE && value.is_power_of_two())
}

fn can_merge(a: u32, b: u32) -> bool {
    a != 0 && a == b && a < MAX_TILE
}

/// True if some adjacent pair would slide (`0, x`) or merge (`x, x`).
fn line_can_slide_left(line: &[u32]) -> bool {
    line.windows(2)
        .any(|pair| (pair[0] == 0 && pair[1] != 0) || can_merge(pair[0], pair[1]))
}

/// Compact, merge, compact. The order matters: merging only ever joins tiles
/// that are adjacent after the first compaction, and each tile at most once.
fn slide_line_left(line: &mut [u32]) -> SlideSummary {
    compact(line);
    let summary = merge(line);
    compact(line);
    summary
}

/// Move non-zero tiles to the front, keeping their order.
fn compact(line: &mut [u32]) {
    let mut write = 0;
    for read in 0..line.len() {
        if line[read] != 0 {
            // Everything in write..read is zero here.
            line.swap(write, read);
            write += 1;
        }
    }
}

fn merge(line: &mut [u32]) -> SlideSummary {
    let mut summary = SlideSummary::default();
    let mut i = 0;
    while i + 1 < line.len() {
        if can_merge(line[i], line[i + 1]) {
            line[i] *= 2;
            line[i + 1] = 0;
            summary.gained += u64::from(line[i]);
            summary.merges += 1;
            i += 2;
        } else {
            i += 1;
        }
    }
    summary
}
