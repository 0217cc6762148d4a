//! The layout store: authoritative item list plus its derived layout.
//!
//! The store is the only stateful piece and the only one a UI talks to.
//! Gesture events go in, snapshots come out. Every committed size change
//! re-packs the whole list, so readers only ever see a complete layout.
//!
//! # Example
//!
//! ```
//! use zengrid::{CellSize, GridConfig, LayoutStore};
//!
//! let mut store = LayoutStore::with_unit_items(GridConfig::new(3, 100.0), 4).unwrap();
//! store.toggle_editable().unwrap();
//!
//! store.begin_resize(0).unwrap();
//! store.update_resize(0, 120.0, 0.0).unwrap();
//! assert_eq!(store.end_resize(0).unwrap(), CellSize::new(2, 1));
//!
//! let first = store.layout().placement(0).unwrap();
//! assert_eq!((first.x, first.y, first.width), (0, 0, 2));
//! ```

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::error::GridError;
use crate::gap;
use crate::grid::{CellSize, GridConfig, MAX_ITEM_HEIGHT, PixelSize};
use crate::pack::{Item, Layout, pack};
use crate::resize::{ResizePhase, ResizeSession};

/// Item list, derived layout, edit flag, and per-item resize sessions.
#[derive(Clone, Debug)]
pub struct LayoutStore {
    config: GridConfig,
    items: Vec<Item>,
    layout: Layout,
    editable: bool,
    sessions: BTreeMap<usize, ResizeSession>,
}

impl LayoutStore {
    /// Build a store from item sizes. Item `i` gets identity `i`.
    ///
    /// Starts locked (not editable).
    pub fn new(config: GridConfig, sizes: &[CellSize]) -> Result<Self, GridError> {
        config.validate()?;
        let items = sizes
            .iter()
            .enumerate()
            .map(|(index, size)| -> Result<Item, GridError> {
                check_size(&config, index, *size)?;
                Ok(Item::new(index, size.width, size.height))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let layout = pack(&config, &items);
        Ok(Self {
            config,
            items,
            layout,
            editable: false,
            sessions: BTreeMap::new(),
        })
    }

    /// Build a store of `count` 1×1 items.
    pub fn with_unit_items(config: GridConfig, count: usize) -> Result<Self, GridError> {
        let sizes: Vec<CellSize> = (0..count).map(|_| CellSize::new(1, 1)).collect();
        Self::new(config, &sizes)
    }

    /// Grid parameters fixed at construction.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Committed item list, in identity order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Layout packed from the current item list.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Whether resize handles are available.
    pub fn is_editable(&self) -> bool {
        self.editable
    }

    /// Whether the current layout has a trapped empty cell.
    pub fn has_gap(&self) -> bool {
        self.layout.has_gap
    }

    /// First trapped empty cell, if any.
    pub fn gap_position(&self) -> Option<(u32, u32)> {
        gap::first_gap(&self.layout.occupancy)
    }

    /// Replace item `index`'s size and re-pack.
    pub fn set_item_size(&mut self, index: usize, size: CellSize) -> Result<(), GridError> {
        self.check_index(index)?;
        check_size(&self.config, index, size)?;
        let item = &mut self.items[index];
        item.width = size.width;
        item.height = size.height;
        self.layout = pack(&self.config, &self.items);
        Ok(())
    }

    /// Enter or leave edit mode. Returns the new flag.
    ///
    /// Not a plain flip: a trapped gap blocks only the locking direction.
    /// Leaving edit mode locks the layout, which is refused while the
    /// layout has a trapped gap. Entering is always allowed so the gap can
    /// be fixed.
    pub fn toggle_editable(&mut self) -> Result<bool, GridError> {
        if self.editable
            && let Some((x, y)) = self.gap_position()
        {
            #[cfg(feature = "tracing")]
            tracing::warn!(x, y, "refusing to lock layout with empty spaces");

            return Err(GridError::GapDetected { x, y });
        }
        self.editable = !self.editable;
        Ok(self.editable)
    }

    /// Handle grabbed. Returns the baseline pixel size.
    pub fn begin_resize(&mut self, index: usize) -> Result<PixelSize, GridError> {
        self.check_index(index)?;
        if !self.editable {
            return Err(GridError::NotEditable);
        }
        if self.sessions.get(&index).is_some_and(ResizeSession::is_dragging) {
            return Err(GridError::SessionActive { index });
        }
        let session = ResizeSession::begin(index, self.committed_size(index), &self.config);

        #[cfg(feature = "tracing")]
        tracing::debug!(item = index, "resize started");

        let baseline = session.baseline();
        self.sessions.insert(index, session);
        Ok(baseline)
    }

    /// Pointer moved. Returns the clamped live size; the layout is untouched.
    pub fn update_resize(&mut self, index: usize, dx: f32, dy: f32) -> Result<PixelSize, GridError> {
        self.session_mut(index)?.update(dx, dy)
    }

    /// Handle released. Commits the snapped size and re-packs.
    pub fn end_resize(&mut self, index: usize) -> Result<CellSize, GridError> {
        let size = self.session_mut(index)?.end()?;
        self.set_item_size(index, size)?;
        Ok(size)
    }

    /// Gesture interrupted. Returns the restored pixel size.
    pub fn cancel_resize(&mut self, index: usize) -> Result<PixelSize, GridError> {
        self.session_mut(index)?.cancel()
    }

    /// Size to draw item `index` at right now, in pixels.
    ///
    /// The live drag size while dragging, otherwise the placed size.
    pub fn live_size(&self, index: usize) -> Result<PixelSize, GridError> {
        self.check_index(index)?;
        if let Some(live) = self.sessions.get(&index).and_then(ResizeSession::live_size) {
            return Ok(live);
        }
        let placed = self
            .layout
            .placement(index)
            .map_or_else(|| self.committed_size(index), |p| p.size());
        Ok(placed.to_px(self.config.cell_size))
    }

    /// Lifecycle phase of item `index`'s most recent resize.
    pub fn resize_phase(&self, index: usize) -> Result<ResizePhase, GridError> {
        self.check_index(index)?;
        Ok(self
            .sessions
            .get(&index)
            .map(ResizeSession::phase)
            .unwrap_or_default())
    }

    fn committed_size(&self, index: usize) -> CellSize {
        self.items[index].size()
    }

    fn session_mut(&mut self, index: usize) -> Result<&mut ResizeSession, GridError> {
        self.check_index(index)?;
        self.sessions
            .get_mut(&index)
            .ok_or(GridError::NoActiveSession { index })
    }

    fn check_index(&self, index: usize) -> Result<(), GridError> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(GridError::IndexOutOfRange {
                index,
                len: self.items.len(),
            })
        }
    }
}

fn check_size(config: &GridConfig, index: usize, size: CellSize) -> Result<(), GridError> {
    if size.width == 0 || size.height == 0 {
        return Err(GridError::ZeroItemDimension { index });
    }
    if size.height > MAX_ITEM_HEIGHT {
        return Err(GridError::ItemTooTall {
            index,
            height: size.height,
            max: MAX_ITEM_HEIGHT,
        });
    }
    if size.width > config.columns {
        return Err(GridError::ItemTooWide {
            index,
            width: size.width,
            columns: config.columns,
        });
    }
    Ok(())
}
