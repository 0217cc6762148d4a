//! Interactive resize of a single item.
//!
//! A [`ResizeSession`] turns a stream of drag translations into one committed
//! cell size. While dragging, the size is continuous and only clamped; it is
//! never written back to the item list. On release it is snapped to whole
//! cells. A cancelled drag restores the size the item had when it began.
//!
//! ```text
//!              begin              end
//!     Idle ────────────▶ Dragging ──────▶ Committed
//!                        │  ▲  │
//!                 update └──┘  └────────▶ Cancelled
//!                                 cancel
//! ```
//!
//! # Example
//!
//! ```
//! use zengrid::{CellSize, GridConfig, ResizeSession};
//!
//! let config = GridConfig::new(3, 100.0);
//! let mut session = ResizeSession::begin(0, CellSize::new(1, 1), &config);
//!
//! let live = session.update(250.0, 40.0).unwrap();
//! assert_eq!((live.width, live.height), (300.0, 140.0));
//!
//! assert_eq!(session.end().unwrap(), CellSize::new(3, 1));
//! ```

use crate::error::GridError;
use crate::grid::{CellSize, GridConfig, PixelSize};

/// Where an item's resize gesture is in its lifecycle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ResizePhase {
    /// No drag has started.
    #[default]
    Idle,
    /// Handle is held; the live size follows the pointer.
    Dragging,
    /// Released; the snapped size was committed.
    Committed,
    /// Gesture was interrupted; nothing was committed.
    Cancelled,
}

/// Drag state for one item.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ResizeSession {
    item: usize,
    phase: ResizePhase,
    baseline: PixelSize,
    live: PixelSize,
    config: GridConfig,
}

impl ResizeSession {
    /// Start dragging `item`, whose committed size is `committed`.
    pub fn begin(item: usize, committed: CellSize, config: &GridConfig) -> Self {
        let baseline = committed.to_px(config.cell_size);
        Self {
            item,
            phase: ResizePhase::Dragging,
            baseline,
            live: baseline,
            config: *config,
        }
    }

    /// Item this session resizes.
    pub fn item(&self) -> usize {
        self.item
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> ResizePhase {
        self.phase
    }

    /// Whether the handle is still held.
    pub fn is_dragging(&self) -> bool {
        self.phase == ResizePhase::Dragging
    }

    /// Pixel size captured at `begin`.
    pub fn baseline(&self) -> PixelSize {
        self.baseline
    }

    /// Clamped pixel size to draw, while dragging.
    pub fn live_size(&self) -> Option<PixelSize> {
        self.is_dragging().then_some(self.live)
    }

    /// Apply the gesture's cumulative translation since `begin`.
    ///
    /// Returns the clamped live size. Does not touch the item list.
    pub fn update(&mut self, dx: f32, dy: f32) -> Result<PixelSize, GridError> {
        self.require_dragging()?;
        self.live = clamp_size(self.baseline, dx, dy, &self.config);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            item = self.item,
            width = self.live.width,
            height = self.live.height,
            "resize update"
        );

        Ok(self.live)
    }

    /// Release the handle: snap the live size to whole cells.
    pub fn end(&mut self) -> Result<CellSize, GridError> {
        self.require_dragging()?;
        let size = snap_to_cells(self.live, self.config.cell_size);
        self.live = size.to_px(self.config.cell_size);
        self.phase = ResizePhase::Committed;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            item = self.item,
            width = size.width,
            height = size.height,
            "resize committed"
        );

        Ok(size)
    }

    /// Abandon the drag and restore the baseline.
    pub fn cancel(&mut self) -> Result<PixelSize, GridError> {
        self.require_dragging()?;
        self.live = self.baseline;
        self.phase = ResizePhase::Cancelled;

        #[cfg(feature = "tracing")]
        tracing::debug!(item = self.item, "resize cancelled");

        Ok(self.baseline)
    }

    fn require_dragging(&self) -> Result<(), GridError> {
        if self.is_dragging() {
            Ok(())
        } else {
            Err(GridError::NoActiveSession { index: self.item })
        }
    }
}

/// Live size for a drag of `(dx, dy)` from `baseline`.
///
/// Each axis is clamped independently: width to `[cell, columns × cell]`,
/// height to `[cell, max_height_cells × cell]`. Non-finite translations
/// count as zero.
pub fn clamp_size(baseline: PixelSize, dx: f32, dy: f32, config: &GridConfig) -> PixelSize {
    let min = config.cell_size;
    let dx = if dx.is_finite() { dx } else { 0.0 };
    let dy = if dy.is_finite() { dy } else { 0.0 };
    PixelSize::new(
        (baseline.width + dx).clamp(min, config.max_width_px().max(min)),
        (baseline.height + dy).clamp(min, config.max_height_px().max(min)),
    )
}

/// Round a pixel size to the nearest whole cells, halves rounding up.
///
/// Never returns less than one cell per axis.
pub fn snap_to_cells(size: PixelSize, cell_size: f32) -> CellSize {
    CellSize::new(
        snap_axis(size.width, cell_size),
        snap_axis(size.height, cell_size),
    )
}

fn snap_axis(px: f32, cell_size: f32) -> u32 {
    let cells = num_traits::Float::floor(px / cell_size + 0.5);
    if cells < 1.0 { 1 } else { cells as u32 }
}
