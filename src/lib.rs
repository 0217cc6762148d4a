//! Dense grid packing with interactive resize and trapped-gap validation.
//!
//! Pure layout logic for a fixed-width, downward-growing grid of
//! rectangular items. No rendering or gesture capture; `no_std`
//! compatible (requires `alloc`).
//!
//! # Modules
//!
//! - [`grid`] — Grid configuration, size types, cell occupancy
//! - [`pack`] — Greedy, order-preserving first-fit packer
//! - [`gap`] — Trapped empty-cell detection used to gate locking a layout
//! - [`resize`] — Per-item drag session: clamping and cell snapping
//! - [`store`] — Item list, derived layout, edit mode, gesture entry points

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod error;
pub mod gap;
pub mod grid;
pub mod pack;
pub mod resize;
pub mod store;

pub use error::GridError;
pub use gap::{first_gap, has_gap};
pub use grid::{CellSize, GridConfig, MAX_ITEM_HEIGHT, OccupancyGrid, PixelRect, PixelSize};
pub use pack::{Item, Layout, Placement, pack};
pub use resize::{ResizePhase, ResizeSession, clamp_size, snap_to_cells};
pub use store::LayoutStore;
