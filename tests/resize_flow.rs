//! End-to-end gesture flows through the layout store.
//!
//! Each test drives the store the way a gesture layer would: toggle edit
//! mode, then begin/update/end (or cancel) drags, reading snapshots between
//! steps.

use zengrid::{
    CellSize, GridConfig, GridError, Layout, LayoutStore, OccupancyGrid, PixelSize, ResizePhase,
    has_gap,
};

fn config() -> GridConfig {
    GridConfig::new(3, 100.0)
}

fn anchors(layout: &Layout) -> Vec<(usize, u32, u32)> {
    layout
        .placements
        .iter()
        .map(|p| (p.item_index, p.x, p.y))
        .collect()
}

fn drag(store: &mut LayoutStore, index: usize, dx: f32, dy: f32) -> Result<CellSize, GridError> {
    store.begin_resize(index)?;
    // A few intermediate frames, as a pointer would report them.
    for step in 1..=4 {
        let t = step as f32 / 4.0;
        store.update_resize(index, dx * t, dy * t)?;
    }
    store.end_resize(index)
}

#[test]
fn four_unit_items() {
    let store = LayoutStore::with_unit_items(config(), 4).unwrap();
    assert_eq!(
        anchors(store.layout()),
        vec![(0, 0, 0), (1, 1, 0), (2, 2, 0), (3, 0, 1)]
    );
    assert_eq!(store.layout().grid_height, 200.0);
}

#[test]
fn widening_first_item_reflows_the_rest() {
    let mut store = LayoutStore::with_unit_items(config(), 4).unwrap();
    store.toggle_editable().unwrap();

    assert_eq!(drag(&mut store, 0, 100.0, 0.0), Ok(CellSize::new(2, 1)));

    let layout = store.layout();
    let first = layout.placement(0).unwrap();
    assert_eq!((first.x, first.y, first.width, first.height), (0, 0, 2, 1));
    assert_eq!(
        anchors(layout),
        vec![(0, 0, 0), (1, 2, 0), (2, 0, 1), (3, 1, 1)]
    );
    for (i, a) in layout.placements.iter().enumerate() {
        for b in &layout.placements[i + 1..] {
            assert!(!a.overlaps(b));
        }
    }
}

#[test]
fn overshooting_drag_snaps_to_full_width() {
    let mut store = LayoutStore::with_unit_items(config(), 3).unwrap();
    store.toggle_editable().unwrap();

    store.begin_resize(0).unwrap();
    let live = store.update_resize(0, 250.0, 0.0).unwrap();
    assert_eq!(live.width, 300.0);
    assert_eq!(store.end_resize(0), Ok(CellSize::new(3, 1)));
    assert_eq!(store.live_size(0), Ok(PixelSize::new(300.0, 100.0)));
}

#[test]
fn trapped_hole_blocks_lock() {
    let mut grid = OccupancyGrid::new(3);
    grid.occupy(0, 0, 1, 1, 0);
    grid.occupy(2, 0, 1, 1, 1);
    grid.occupy(0, 1, 3, 1, 2);
    grid.occupy(0, 2, 3, 1, 3);
    grid.occupy(0, 3, 3, 1, 4);
    assert!(has_gap(&grid));

    // Four 2-wide items leave column 2 empty on every row.
    let mut store = LayoutStore::new(config(), &[CellSize::new(2, 1); 4]).unwrap();
    assert!(store.has_gap());
    assert_eq!(store.toggle_editable(), Ok(true));
    let err = store.toggle_editable().unwrap_err();
    assert_eq!(err, GridError::GapDetected { x: 2, y: 0 });
    assert!(store.is_editable());

    // Editing stays possible; shrinking the first item closes the hole.
    store.begin_resize(0).unwrap();
    store.update_resize(0, -100.0, 0.0).unwrap();
    store.end_resize(0).unwrap();
    store.begin_resize(1).unwrap();
    store.update_resize(1, -100.0, 0.0).unwrap();
    store.end_resize(1).unwrap();
    assert_eq!(store.gap_position(), None);
    assert_eq!(store.toggle_editable(), Ok(false));
}

#[test]
fn end_without_begin_fails() {
    let mut store = LayoutStore::with_unit_items(config(), 2).unwrap();
    store.toggle_editable().unwrap();
    assert_eq!(
        store.end_resize(0),
        Err(GridError::NoActiveSession { index: 0 })
    );
    assert_eq!(
        store.update_resize(5, 1.0, 1.0),
        Err(GridError::IndexOutOfRange { index: 5, len: 2 })
    );
}

#[test]
fn cancelled_drag_commits_nothing() {
    let mut store = LayoutStore::with_unit_items(config(), 5).unwrap();
    store.toggle_editable().unwrap();
    let before = store.layout().clone();

    store.begin_resize(2).unwrap();
    store.update_resize(2, 90.0, 90.0).unwrap();
    assert_eq!(store.live_size(2), Ok(PixelSize::new(190.0, 190.0)));
    store.cancel_resize(2).unwrap();

    assert_eq!(store.layout(), &before);
    assert_eq!(store.items()[2].size(), CellSize::new(1, 1));
    assert_eq!(store.resize_phase(2), Ok(ResizePhase::Cancelled));
    assert_eq!(
        store.cancel_resize(2),
        Err(GridError::NoActiveSession { index: 2 })
    );
}

#[test]
fn overlapping_sessions_on_different_items() {
    let mut store = LayoutStore::with_unit_items(config(), 6).unwrap();
    store.toggle_editable().unwrap();

    store.begin_resize(0).unwrap();
    store.begin_resize(4).unwrap();
    store.update_resize(0, 0.0, 100.0).unwrap();
    store.update_resize(4, 100.0, 0.0).unwrap();

    assert_eq!(store.end_resize(4), Ok(CellSize::new(2, 1)));
    // Item 0 is still mid-drag and keeps its live size across the re-pack.
    assert_eq!(store.live_size(0), Ok(PixelSize::new(100.0, 200.0)));
    assert_eq!(store.end_resize(0), Ok(CellSize::new(1, 2)));

    let layout = store.layout();
    assert_eq!(layout.placement(0).unwrap().height, 2);
    assert_eq!(layout.placement(4).unwrap().width, 2);
}

#[test]
fn viewport_sized_cells() {
    let config = GridConfig::for_viewport(390.0, 3);
    let mut store = LayoutStore::with_unit_items(config, 3).unwrap();
    store.toggle_editable().unwrap();
    assert_eq!(drag(&mut store, 1, 70.0, 70.0), Ok(CellSize::new(2, 2)));
    let rect = store.layout().placement(1).unwrap().to_px(config.cell_size);
    assert_eq!((rect.left, rect.top), (130.0, 0.0));
    assert_eq!((rect.width, rect.height), (260.0, 260.0));
}
