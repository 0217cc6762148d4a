//! Error type shared by configuration, the layout store, and resize sessions.

use core::fmt;

/// Grid configuration or layout store error.
///
/// Configuration and item-list variants are returned when a store is built.
/// Index and session variants indicate a caller bug (the gesture layer asked
/// about an item or drag that does not exist) and are returned instead of
/// being ignored. [`GapDetected`](Self::GapDetected) is the only variant a
/// user is expected to see.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GridError {
    /// Grid was configured with zero columns.
    ZeroColumns,
    /// Cell size is zero, negative, or not finite.
    InvalidCellSize,
    /// Height cap for resizing is zero cells.
    ZeroHeightCap,
    /// An item in the initial list has zero width or height.
    ZeroItemDimension { index: usize },
    /// An item is taller than the grid accepts.
    ItemTooTall { index: usize, height: u32, max: u32 },
    /// An item in the initial list is wider than the grid.
    ItemTooWide {
        index: usize,
        width: u32,
        columns: u32,
    },
    /// Item index does not exist in the store.
    IndexOutOfRange { index: usize, len: usize },
    /// `update`/`end`/`cancel` without a dragging session for this item.
    NoActiveSession { index: usize },
    /// `begin` while this item is already being dragged.
    SessionActive { index: usize },
    /// Resize handles are only available in edit mode.
    NotEditable,
    /// Layout has a trapped empty cell at `(x, y)`; locking is refused.
    GapDetected { x: u32, y: u32 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroColumns => f.write_str("grid must have at least one column"),
            Self::InvalidCellSize => f.write_str("cell size must be a positive finite number"),
            Self::ZeroHeightCap => f.write_str("height cap must be at least one cell"),
            Self::ZeroItemDimension { index } => {
                write!(f, "item {index} has a zero width or height")
            }
            Self::ItemTooWide {
                index,
                width,
                columns,
            } => write!(
                f,
                "item {index} is {width} cells wide but the grid has {columns} columns"
            ),
            Self::ItemTooTall { index, height, max } => write!(
                f,
                "item {index} is {height} cells tall but at most {max} are allowed"
            ),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "item index {index} out of range for {len} items")
            }
            Self::NoActiveSession { index } => {
                write!(f, "item {index} has no resize in progress")
            }
            Self::SessionActive { index } => {
                write!(f, "item {index} is already being resized")
            }
            Self::NotEditable => f.write_str("layout is locked; enter edit mode to resize"),
            Self::GapDetected { x, y } => {
                write!(f, "there are empty spaces in the grid (cell {x},{y})")
            }
        }
    }
}

impl core::error::Error for GridError {}
