//! Trapped-gap detection.
//!
//! A layout may only be locked when it has no empty cell sandwiched between
//! occupied ones. The check walks the grid in packer scan order:
//!
//! 1. Take the leading run of rows that have at least one occupied cell.
//! 2. Drop the last two rows of that run. They are the placement frontier,
//!    where ragged edges are expected.
//! 3. Flatten what is left row-major and look for
//!    `occupied → empty… → occupied`.
//!
//! ```text
//!     0 0 .      flattened (rows 0-1): 0 0 . 1 1 .
//!     1 1 .                                ^ trapped
//!     2 2 .      rows 2-3 are the frontier and are not inspected
//!     3 3 .
//! ```
//!
//! This is a heuristic. It does not prove that a later placement could never
//! backfill a hole, and with multi-cell items it can both flag holes that a
//! 1×1 would fill and miss holes inside the frontier rows. A flood fill from
//! the growth frontier would be exact.

use crate::grid::OccupancyGrid;

/// Whether the grid has an empty cell trapped between occupied cells.
pub fn has_gap(grid: &OccupancyGrid) -> bool {
    first_gap(grid).is_some()
}

/// Position of the first trapped empty cell, in scan order.
///
/// Reports the empty cell that starts the offending run, so a UI can point
/// at the hole rather than at the item after it.
pub fn first_gap(grid: &OccupancyGrid) -> Option<(u32, u32)> {
    let content_rows = (0..grid.rows())
        .take_while(|&y| grid.row_has_content(y))
        .count() as u32;
    let inspected = content_rows.saturating_sub(2);

    let mut seen_occupied = false;
    let mut hole: Option<(u32, u32)> = None;
    for y in 0..inspected {
        for (x, cell) in grid.row(y).iter().enumerate() {
            match cell {
                None if seen_occupied => {
                    hole.get_or_insert((x as u32, y));
                }
                None => {}
                Some(_) if hole.is_some() => return hole,
                Some(_) => seen_occupied = true,
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_from(rows: &[&[Option<usize>]]) -> OccupancyGrid {
        let mut g = OccupancyGrid::new(3);
        for (y, row) in rows.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                if let Some(item) = cell {
                    g.occupy(x as u32, y as u32, 1, 1, *item);
                }
            }
        }
        g
    }

    #[test]
    fn empty_grid_has_no_gap() {
        assert!(!has_gap(&OccupancyGrid::new(3)));
    }

    #[test]
    fn full_rows_have_no_gap() {
        let g = grid_from(&[
            &[Some(0), Some(1), Some(2)],
            &[Some(3), Some(4), Some(5)],
            &[Some(6), Some(7), Some(8)],
            &[Some(9), None, None],
        ]);
        assert!(!has_gap(&g));
    }

    #[test]
    fn hole_between_occupied_rows() {
        let g = grid_from(&[
            &[Some(0), Some(0), None],
            &[Some(1), Some(1), None],
            &[Some(2), Some(2), None],
            &[Some(3), Some(3), None],
        ]);
        assert!(has_gap(&g));
        assert_eq!(first_gap(&g), Some((2, 0)));
    }

    #[test]
    fn single_trapped_cell() {
        let g = grid_from(&[
            &[Some(0), None, Some(1)],
            &[Some(2), Some(3), Some(4)],
            &[Some(5), Some(6), Some(7)],
            &[Some(8), Some(9), Some(10)],
        ]);
        assert_eq!(first_gap(&g), Some((1, 0)));
    }

    #[test]
    fn frontier_rows_are_ignored() {
        // Hole sits in the last two content rows.
        let g = grid_from(&[
            &[Some(0), Some(1), Some(2)],
            &[Some(3), None, Some(4)],
            &[Some(5), Some(6), None],
        ]);
        assert!(!has_gap(&g));
    }

    #[test]
    fn trailing_empties_are_not_a_gap() {
        let g = grid_from(&[
            &[Some(0), Some(1), Some(2)],
            &[Some(3), Some(4), None],
            &[Some(5), None, None],
            &[Some(6), None, None],
            &[Some(7), None, None],
        ]);
        // Flattened rows 0-2: 0 1 2 3 4 . 5 . . -> hole at (2, 1).
        assert_eq!(first_gap(&g), Some((2, 1)));
    }

    #[test]
    fn leading_empties_are_not_a_gap() {
        let g = grid_from(&[
            &[None, None, Some(0)],
            &[Some(1), Some(2), Some(3)],
            &[Some(4), None, None],
            &[Some(5), None, None],
        ]);
        assert!(!has_gap(&g));
    }

    #[test]
    fn empty_row_ends_the_inspected_run() {
        let g = grid_from(&[
            &[Some(0), Some(1), Some(2)],
            &[None, None, None],
            &[Some(3), Some(4), Some(5)],
            &[Some(6), Some(7), Some(8)],
            &[Some(9), Some(10), Some(11)],
        ]);
        // Only row 0 is content-bearing before the blank row, and the
        // frontier allowance swallows it.
        assert!(!has_gap(&g));
    }
}
