//! Grid configuration, size types, and the occupancy grid.
//!
//! The grid is fixed in width (`columns`) and grows downward without bound.
//! Everything here is in cell units except [`PixelSize`] and [`PixelRect`],
//! which carry the on-screen size the gesture layer works with.

use alloc::vec::Vec;
use core::fmt;

use crate::error::GridError;

/// Tallest item the grid accepts, in cells.
///
/// Keeps row arithmetic and the occupancy buffer bounded. Far above any
/// drag cap; only hand-built item lists get near it.
pub const MAX_ITEM_HEIGHT: u32 = 1 << 16;

/// Fixed grid parameters, set once when a store is built.
///
/// # Example
///
/// ```
/// use zengrid::GridConfig;
///
/// // A 390pt-wide phone screen split into three square cells.
/// let config = GridConfig::for_viewport(390.0, 3);
/// assert_eq!(config.cell_size, 130.0);
/// assert_eq!(config.max_width_px(), 390.0);
/// assert_eq!(config.max_height_px(), 260.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridConfig {
    /// Number of columns. Items never extend past this.
    pub columns: u32,
    /// Side length of one square cell, in pixels.
    pub cell_size: f32,
    /// Tallest an item can be dragged to, in cells.
    pub max_height_cells: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new(3, 100.0)
    }
}

impl GridConfig {
    /// Create a config with the default two-row height cap.
    pub const fn new(columns: u32, cell_size: f32) -> Self {
        Self {
            columns,
            cell_size,
            max_height_cells: 2,
        }
    }

    /// Size cells so that `columns` of them span the viewport exactly.
    pub fn for_viewport(viewport_width: f32, columns: u32) -> Self {
        Self::new(columns, viewport_width / columns.max(1) as f32)
    }

    /// Set the height cap applied while dragging.
    pub fn max_height_cells(mut self, cells: u32) -> Self {
        self.max_height_cells = cells;
        self
    }

    /// Check that the grid can hold at least one 1×1 item.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.columns == 0 {
            return Err(GridError::ZeroColumns);
        }
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(GridError::InvalidCellSize);
        }
        if self.max_height_cells == 0 {
            return Err(GridError::ZeroHeightCap);
        }
        Ok(())
    }

    /// Convert a cell count to pixels.
    pub fn cells_to_px(&self, cells: u32) -> f32 {
        cells as f32 * self.cell_size
    }

    /// Widest an item can be, in pixels.
    pub fn max_width_px(&self) -> f32 {
        self.cells_to_px(self.columns)
    }

    /// Tallest an item can be dragged to, in pixels.
    pub fn max_height_px(&self) -> f32 {
        self.cells_to_px(self.max_height_cells)
    }
}

/// Width × height in whole cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CellSize {
    pub width: u32,
    pub height: u32,
}

impl CellSize {
    /// Create a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Pixel size of this many cells.
    pub fn to_px(self, cell_size: f32) -> PixelSize {
        PixelSize::new(
            self.width as f32 * cell_size,
            self.height as f32 * cell_size,
        )
    }
}

/// Width × height in pixels. Fractional while a drag is in flight.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PixelSize {
    pub width: f32,
    pub height: f32,
}

impl PixelSize {
    /// Create a new size.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Pixel rectangle used to position an item on screen.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PixelRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Which item, if any, owns each cell.
///
/// Stored row-major. Rows past [`rows()`](Self::rows) are implicitly empty,
/// so the grid behaves as if it were infinitely tall.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancyGrid {
    columns: u32,
    cells: Vec<Option<usize>>,
}

impl OccupancyGrid {
    /// Create an empty grid.
    pub fn new(columns: u32) -> Self {
        Self {
            columns,
            cells: Vec::new(),
        }
    }

    /// Number of columns.
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of rows touched so far.
    pub fn rows(&self) -> u32 {
        if self.columns == 0 {
            return 0;
        }
        (self.cells.len() / self.columns as usize) as u32
    }

    /// Owner of the cell at `(x, y)`, or `None` when empty or out of range.
    pub fn get(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.columns {
            return None;
        }
        self.cells.get(self.offset(x, y)).copied().flatten()
    }

    /// Cells of row `y`. Empty slice past the current extent.
    pub fn row(&self, y: u32) -> &[Option<usize>] {
        let start = self.offset(0, y);
        let end = start + self.columns as usize;
        self.cells.get(start..end).unwrap_or(&[])
    }

    /// Whether any cell in row `y` is occupied.
    pub fn row_has_content(&self, y: u32) -> bool {
        self.row(y).iter().any(Option::is_some)
    }

    /// Whether every cell of the `w`×`h` rectangle at `(x, y)` is empty.
    ///
    /// Callers must keep `x + w <= columns`; a rectangle that sticks out of
    /// the grid is never free.
    pub fn is_free(&self, x: u32, y: u32, w: u32, h: u32) -> bool {
        let fits = x.checked_add(w).is_some_and(|right| right <= self.columns);
        debug_assert!(
            fits,
            "rect {w} wide at column {x} exceeds {} columns",
            self.columns
        );
        if !fits {
            return false;
        }
        // Rows past the extent are empty, so only the touched part is scanned.
        let bottom = y.saturating_add(h).min(self.rows());
        (y..bottom).all(|row| (x..x + w).all(|col| self.get(col, row).is_none()))
    }

    /// Mark the `w`×`h` rectangle at `(x, y)` as owned by `item`.
    ///
    /// Columns past the grid width and rows past `u32::MAX` are ignored.
    pub fn occupy(&mut self, x: u32, y: u32, w: u32, h: u32, item: usize) {
        let right = x.saturating_add(w).min(self.columns);
        let bottom = y.saturating_add(h);
        debug_assert!(right == x.saturating_add(w));
        let needed = self.offset(0, bottom);
        if self.cells.len() < needed {
            self.cells.resize(needed, None);
        }
        for row in y..bottom {
            for col in x..right {
                let i = self.offset(col, row);
                self.cells[i] = Some(item);
            }
        }
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.columns as usize + x as usize
    }
}

/// One row per line, item indices or `.` for empty cells.
impl fmt::Display for OccupancyGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.rows() {
            for (x, cell) in self.row(y).iter().enumerate() {
                if x > 0 {
                    f.write_str(" ")?;
                }
                match cell {
                    Some(item) => write!(f, "{item}")?,
                    None => f.write_str(".")?,
                }
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
