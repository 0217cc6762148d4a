//! Greedy first-fit packing of an ordered item list.
//!
//! Items are placed one at a time, in list order, at the first free anchor in
//! row-major scan order (top to bottom, then left to right). Earlier items
//! are never moved to make room for later ones, and the list order decides
//! the result: the same shapes in a different order pack differently.
//!
//! ```text
//!     items: [1×1, 2×1, 1×1, 1×2, 1×1]      3 columns
//!
//!     ┌───┬───────┐
//!     │ 0 │   1   │   row 0
//!     ├───┼───┬───┤
//!     │ 2 │ 3 │ 4 │   row 1
//!     └───┤   ├───┘
//!         │   │       row 2
//!         └───┘
//! ```
//!
//! # Example
//!
//! ```
//! use zengrid::{GridConfig, Item, pack};
//!
//! let items = [Item::new(0, 1, 1), Item::new(1, 2, 1), Item::new(2, 1, 1)];
//! let layout = pack(&GridConfig::new(3, 100.0), &items);
//!
//! assert_eq!(layout.placements[1].x, 1);
//! assert_eq!(layout.placements[2].y, 1);
//! assert_eq!(layout.grid_height, 200.0);
//! ```

use alloc::vec::Vec;

use crate::gap;
use crate::grid::{CellSize, GridConfig, MAX_ITEM_HEIGHT, OccupancyGrid, PixelRect};

/// A grid item: stable identity plus its committed size in cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Item {
    /// Identity assigned when the list is built. Survives re-packs.
    pub index: usize,
    /// Width in cells.
    pub width: u32,
    /// Height in cells.
    pub height: u32,
}

impl Item {
    /// Create an item.
    pub const fn new(index: usize, width: u32, height: u32) -> Self {
        Self {
            index,
            width,
            height,
        }
    }

    /// Build `count` 1×1 items indexed `0..count`.
    pub fn unit_list(count: usize) -> Vec<Self> {
        (0..count).map(|i| Self::new(i, 1, 1)).collect()
    }

    /// Committed size in cells.
    pub fn size(&self) -> CellSize {
        CellSize::new(self.width, self.height)
    }
}

/// Cell rectangle assigned to one item.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    pub item_index: usize,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Placement {
    /// Whether two placements share at least one cell.
    pub fn overlaps(&self, other: &Placement) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }

    /// Size in cells.
    pub fn size(&self) -> CellSize {
        CellSize::new(self.width, self.height)
    }

    /// Where the item sits on screen.
    pub fn to_px(&self, cell_size: f32) -> PixelRect {
        PixelRect {
            left: self.x as f32 * cell_size,
            top: self.y as f32 * cell_size,
            width: self.width as f32 * cell_size,
            height: self.height as f32 * cell_size,
        }
    }
}

/// Result of packing an item list.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    /// One placement per item, in item-list order.
    pub placements: Vec<Placement>,
    /// Rows used (maximum `y + height`).
    pub rows: u32,
    /// `rows` in pixels.
    pub grid_height: f32,
    /// Whether the packed grid has a trapped empty cell.
    /// See [`gap::has_gap`].
    pub has_gap: bool,
    /// Cell ownership the placements were derived from.
    pub occupancy: OccupancyGrid,
}

impl Layout {
    /// Placement of the item with identity `item_index`.
    pub fn placement(&self, item_index: usize) -> Option<&Placement> {
        self.placements.iter().find(|p| p.item_index == item_index)
    }
}

/// Pack `items` into a grid of `config.columns` columns.
///
/// Total and deterministic. Widths are clamped into `1..=columns` and
/// heights into `1..=MAX_ITEM_HEIGHT`, so every item fits somewhere: the
/// grid grows downward until it does.
pub fn pack(config: &GridConfig, items: &[Item]) -> Layout {
    let columns = config.columns.max(1);
    let mut grid = OccupancyGrid::new(columns);
    let mut placements = Vec::with_capacity(items.len());
    let mut rows = 0;

    for item in items {
        let width = item.width.clamp(1, columns);
        let height = item.height.clamp(1, MAX_ITEM_HEIGHT);
        let (x, y) = first_fit(&grid, width, height);
        grid.occupy(x, y, width, height, item.index);
        placements.push(Placement {
            item_index: item.index,
            x,
            y,
            width,
            height,
        });
        rows = rows.max(y.saturating_add(height));
    }

    let has_gap = gap::has_gap(&grid);

    #[cfg(feature = "tracing")]
    tracing::debug!(items = items.len(), rows, has_gap, "packed grid");

    Layout {
        placements,
        rows,
        grid_height: config.cells_to_px(rows),
        has_gap,
        occupancy: grid,
    }
}

/// First anchor in row-major order where a `width`×`height` rect is free.
///
/// Only rows up to the grid's extent need scanning: the row just past it is
/// always free at column 0.
fn first_fit(grid: &OccupancyGrid, width: u32, height: u32) -> (u32, u32) {
    let last_x = grid.columns() - width;
    (0..grid.rows())
        .find_map(|y| {
            (0..=last_x)
                .find(|&x| grid.is_free(x, y, width, height))
                .map(|x| (x, y))
        })
        .unwrap_or((0, grid.rows()))
}
