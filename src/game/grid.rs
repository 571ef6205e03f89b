use super::direction::Direction;
use crate::consts;
use std::num::NonZeroU32;
use thiserror::Error;

/// A position on the game grid, measured in cells from the top-left corner.
///
/// Coordinates are signed so that a head which has just moved off the top or
/// left edge can still be represented (and then rejected by collision
/// detection).
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct Cell {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Cell {
    pub(crate) const fn new(x: i32, y: i32) -> Cell {
        Cell { x, y }
    }

    /// Return the cell one step away from `self` in direction `dir`
    pub(crate) fn shifted(self, dir: Direction) -> Cell {
        let (dx, dy) = dir.offset();
        Cell {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Cell {
        Cell::new(x, y)
    }
}

/// The drawing area that the game is played on, in pixels
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Board {
    width: u32,
    height: u32,
    cell_size: NonZeroU32,
}

impl Board {
    /// Create a board of `width` × `height` pixels divided into square cells
    /// `cell_size` pixels wide.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the resulting grid would be too small to hold the
    /// starting snake or too large to fit on the screen.
    pub(crate) fn new(width: u32, height: u32, cell_size: NonZeroU32) -> Result<Board, BoardError> {
        let board = Board {
            width,
            height,
            cell_size,
        };
        let bounds = board.bounds();
        let (columns, rows) = (bounds.max_x, bounds.max_y);
        if columns < consts::MIN_GRID_CELLS || rows < consts::MIN_GRID_CELLS {
            Err(BoardError::TooSmall { columns, rows })
        } else if columns > consts::MAX_GRID_COLUMNS || rows > consts::MAX_GRID_ROWS {
            Err(BoardError::TooLarge { columns, rows })
        } else {
            Ok(board)
        }
    }

    pub(crate) fn width(self) -> u32 {
        self.width
    }

    pub(crate) fn height(self) -> u32 {
        self.height
    }

    pub(crate) fn cell_size(self) -> NonZeroU32 {
        self.cell_size
    }

    /// Convert the pixel dimensions of the board to grid bounds
    pub(crate) fn bounds(self) -> Bounds {
        let cell = self.cell_size.get();
        Bounds {
            max_x: i32::try_from(self.width / cell).unwrap_or(i32::MAX),
            max_y: i32::try_from(self.height / cell).unwrap_or(i32::MAX),
        }
    }
}

impl Default for Board {
    fn default() -> Board {
        Board {
            width: consts::DEFAULT_CANVAS_WIDTH,
            height: consts::DEFAULT_CANVAS_HEIGHT,
            cell_size: NonZeroU32::new(consts::DEFAULT_CELL_SIZE).unwrap_or(NonZeroU32::MIN),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum BoardError {
    #[error("board is only {columns}×{rows} cells; at least {min}×{min} are needed", min = consts::MIN_GRID_CELLS)]
    TooSmall { columns: i32, rows: i32 },
    #[error(
        "board is {columns}×{rows} cells; at most {max_x}×{max_y} fit on the screen",
        max_x = consts::MAX_GRID_COLUMNS,
        max_y = consts::MAX_GRID_ROWS
    )]
    TooLarge { columns: i32, rows: i32 },
}

/// The extent of the grid.  Valid cells have `0 <= x < max_x` and
/// `0 <= y < max_y`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Bounds {
    pub(crate) max_x: i32,
    pub(crate) max_y: i32,
}

impl Bounds {
    pub(crate) fn contains(self, cell: Cell) -> bool {
        (0..self.max_x).contains(&cell.x) && (0..self.max_y).contains(&cell.y)
    }

    /// Iterate over the cells in which food & speed boosts may be placed.
    ///
    /// This is every cell except those in the last column and the last row.
    pub(crate) fn spawn_cells(self) -> impl Iterator<Item = Cell> {
        let max_x = self.max_x.saturating_sub(1);
        let max_y = self.max_y.saturating_sub(1);
        (0..max_y).flat_map(move |y| (0..max_x).map(move |x| Cell::new(x, y)))
    }
}
