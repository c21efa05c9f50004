//! Per-line conflict predicates.
//!
//! A line is in conflict when it holds two or more pieces. Per-line checks
//! are total: an index or key addressing no cells counts zero pieces and
//! never conflicts. Per-family checks cover every line of the family and
//! short-circuit on the first conflict.

use crate::core::grid::Grid;
use crate::rules::lines::{diagonal_cells, DiagonalDir};

/// True iff the row holds two or more pieces.
pub fn row_conflict_at(grid: &Grid, row: usize) -> bool {
    if row >= grid.n() {
        return false;
    }
    let pieces = grid.row(row).iter().filter(|cell| cell.is_occupied()).count();
    pieces > 1
}

/// True iff the column holds two or more pieces.
pub fn col_conflict_at(grid: &Grid, col: usize) -> bool {
    if col >= grid.n() {
        return false;
    }
    let pieces = (0..grid.n())
        .filter(|&row| grid.get(row, col).is_occupied())
        .count();
    pieces > 1
}

/// True iff the keyed diagonal holds two or more pieces.
pub fn diagonal_conflict_at(grid: &Grid, dir: DiagonalDir, key: i64) -> bool {
    let pieces = diagonal_cells(grid.n(), dir, key)
        .filter(|&(row, col)| grid.get(row, col).is_occupied())
        .count();
    pieces > 1
}

/// Any row in conflict.
pub fn any_row_conflict(grid: &Grid) -> bool {
    (0..grid.n()).any(|row| row_conflict_at(grid, row))
}

/// Any column in conflict. Iterates column indices `0..n`.
pub fn any_col_conflict(grid: &Grid) -> bool {
    (0..grid.n()).any(|col| col_conflict_at(grid, col))
}

/// Any diagonal of the family in conflict.
pub fn any_diagonal_conflict(grid: &Grid, dir: DiagonalDir) -> bool {
    dir.key_range(grid.n())
        .any(|key| diagonal_conflict_at(grid, dir, key))
}
