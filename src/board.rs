//! The board API: an owned grid, validated mutation with change
//! notification, and the conflict query surface.
//!
//! Queries are pure reads of the current grid contents;
//! [`ConflictBoard::toggle_piece`] is the sole mutator. Single-threaded by
//! design: callers sharing a board across threads must add their own
//! synchronization.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::core::cell::Occupancy;
use crate::core::grid::Grid;
use crate::rules::conflicts;
use crate::rules::lines::{major_key, minor_key, DiagonalDir};

/// Structured errors surfaced at the board boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// A source row does not match the inferred side length.
    NonSquare {
        row: usize,
        expected: usize,
        got: usize,
    },
    /// A cell index outside `[0, n)` on either axis.
    OutOfBounds { row: usize, col: usize, n: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::NonSquare { row, expected, got } => write!(
                f,
                "non-square board: row {row} has {got} cells, expected {expected}"
            ),
            BoardError::OutOfBounds { row, col, n } => {
                write!(f, "cell ({row}, {col}) is outside the {n}x{n} board")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// A single successful mutation, as seen by change subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeEvent {
    pub row: usize,
    pub col: usize,
    /// State of the cell after the toggle.
    pub occupancy: Occupancy,
}

/// Handle for removing a change subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&ChangeEvent)>;

/// An N×N board that owns its grid and answers attack-conflict queries
/// for rook and queen geometries.
pub struct ConflictBoard {
    grid: Grid,
    subscribers: FxHashMap<SubscriptionId, Subscriber>,
    next_subscription: u64,
}

impl fmt::Debug for ConflictBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConflictBoard")
            .field("grid", &self.grid)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl ConflictBoard {
    /// An all-empty `n`×`n` board. `n = 0` is a valid degenerate board.
    pub fn empty(n: usize) -> Self {
        Self::with_grid(Grid::empty(n))
    }

    /// Build from numeric rows; the side length is `rows.len()`.
    ///
    /// Any nonzero value counts as a piece. Fails on the first row whose
    /// length differs from the side length.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, BoardError> {
        let n = rows.len();
        let mut cells = Vec::with_capacity(n * n);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != n {
                return Err(BoardError::NonSquare {
                    row,
                    expected: n,
                    got: values.len(),
                });
            }
            cells.extend(values.iter().map(|&v| Occupancy::from_raw(v)));
        }
        Ok(Self::with_grid(Grid::from_cells(n, cells)))
    }

    fn with_grid(grid: Grid) -> Self {
        Self {
            grid,
            subscribers: FxHashMap::default(),
            next_subscription: 0,
        }
    }

    #[inline]
    pub fn n(&self) -> usize {
        self.grid.n()
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Rows as occupancy slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Occupancy]> {
        self.grid.rows()
    }

    /// The board as nested `0`/`1` vectors.
    pub fn to_matrix(&self) -> Vec<Vec<u8>> {
        self.grid.to_matrix()
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), BoardError> {
        if self.grid.in_bounds(row, col) {
            Ok(())
        } else {
            Err(BoardError::OutOfBounds {
                row,
                col,
                n: self.n(),
            })
        }
    }

    /// Flip the cell at `(row, col)`, notify subscribers, and return the
    /// cell's new occupancy.
    ///
    /// Out-of-range indices are rejected and leave the board untouched.
    pub fn toggle_piece(&mut self, row: usize, col: usize) -> Result<Occupancy, BoardError> {
        self.check_bounds(row, col)?;
        let occupancy = self.grid.toggle(row, col);
        self.notify(&ChangeEvent {
            row,
            col,
            occupancy,
        });
        Ok(occupancy)
    }

    /// Register a change subscriber; it fires after every successful toggle.
    pub fn on_change(&mut self, subscriber: impl FnMut(&ChangeEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.insert(id, Box::new(subscriber));
        id
    }

    /// Remove a subscriber. Returns false if the id was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(&id).is_some()
    }

    fn notify(&mut self, event: &ChangeEvent) {
        // Ascending id order keeps notification deterministic.
        let mut ids: Vec<SubscriptionId> = self.subscribers.keys().copied().collect();
        ids.sort_unstable();
        for id in ids {
            if let Some(subscriber) = self.subscribers.get_mut(&id) {
                subscriber(event);
            }
        }
    }

    // --- rows and columns --------------------------------------------

    /// True iff `row` holds two or more pieces.
    pub fn has_row_conflict_at(&self, row: usize) -> bool {
        conflicts::row_conflict_at(&self.grid, row)
    }

    /// True iff any row holds two or more pieces.
    pub fn has_any_row_conflict(&self) -> bool {
        conflicts::any_row_conflict(&self.grid)
    }

    /// True iff `col` holds two or more pieces.
    pub fn has_col_conflict_at(&self, col: usize) -> bool {
        conflicts::col_conflict_at(&self.grid, col)
    }

    /// True iff any column holds two or more pieces.
    pub fn has_any_col_conflict(&self) -> bool {
        conflicts::any_col_conflict(&self.grid)
    }

    // --- diagonals ---------------------------------------------------

    /// True iff the major diagonal with `key = col - row` holds two or
    /// more pieces.
    pub fn has_major_diagonal_conflict_at(&self, key: i64) -> bool {
        conflicts::diagonal_conflict_at(&self.grid, DiagonalDir::Major, key)
    }

    /// True iff any major diagonal holds two or more pieces.
    pub fn has_any_major_diagonal_conflict(&self) -> bool {
        conflicts::any_diagonal_conflict(&self.grid, DiagonalDir::Major)
    }

    /// True iff the minor diagonal with `key = col + row` holds two or
    /// more pieces.
    pub fn has_minor_diagonal_conflict_at(&self, key: i64) -> bool {
        conflicts::diagonal_conflict_at(&self.grid, DiagonalDir::Minor, key)
    }

    /// True iff any minor diagonal holds two or more pieces.
    pub fn has_any_minor_diagonal_conflict(&self) -> bool {
        conflicts::any_diagonal_conflict(&self.grid, DiagonalDir::Minor)
    }

    // --- aggregates --------------------------------------------------

    /// Rook rules: any row or column in conflict.
    pub fn has_any_rook_conflict(&self) -> bool {
        self.has_any_row_conflict() || self.has_any_col_conflict()
    }

    /// Queen rules over the whole board.
    pub fn has_any_queen_conflict(&self) -> bool {
        self.has_any_rook_conflict()
            || self.has_any_major_diagonal_conflict()
            || self.has_any_minor_diagonal_conflict()
    }

    /// Queen rules restricted to the four lines through `(row, col)`,
    /// validating the candidate cell first.
    pub fn has_any_queen_conflict_at(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        self.check_bounds(row, col)?;
        Ok(self.has_row_conflict_at(row)
            || self.has_col_conflict_at(col)
            || self.has_major_diagonal_conflict_at(major_key(row, col))
            || self.has_minor_diagonal_conflict_at(minor_key(row, col)))
    }
}
