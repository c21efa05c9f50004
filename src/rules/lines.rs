//! Line families of the square board.
//!
//! Rows and columns are addressed by their index. Diagonals are addressed
//! by a single integer key measured at the reference row 0:
//!
//! - major (top-left to bottom-right): `key = col - row`
//! - minor (top-right to bottom-left): `key = col + row`
//!
//! Both diagonal families walk the board one row at a time with a fixed
//! column step, so a single iterator serves both via [`DiagonalDir`].

use std::ops::RangeInclusive;

/// Walk direction of a diagonal family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagonalDir {
    /// Top-left to bottom-right: the column grows with the row.
    Major,
    /// Top-right to bottom-left: the column shrinks as the row grows.
    Minor,
}

impl DiagonalDir {
    /// Column step per row walked.
    #[inline]
    pub fn col_step(self) -> i64 {
        match self {
            DiagonalDir::Major => 1,
            DiagonalDir::Minor => -1,
        }
    }

    /// Inclusive keys of every diagonal of this family that holds at least
    /// one cell of an `n`-sided board. Empty for `n = 0`; a single key for
    /// `n = 1`; `2n - 1` keys otherwise.
    pub fn key_range(self, n: usize) -> RangeInclusive<i64> {
        let n = n as i64;
        match self {
            DiagonalDir::Major => (1 - n)..=(n - 1),
            DiagonalDir::Minor => 0..=(2 * n - 2),
        }
    }
}

/// Key of the major diagonal through `(row, col)`; constant along the line.
#[inline]
pub fn major_key(row: usize, col: usize) -> i64 {
    col as i64 - row as i64
}

/// Key of the minor diagonal through `(row, col)`; constant along the line.
#[inline]
pub fn minor_key(row: usize, col: usize) -> i64 {
    col as i64 + row as i64
}

/// In-bounds cells of one diagonal, walked row by row from row 0.
///
/// Corner diagonals are shorter than `n`: rows whose column falls off the
/// board are skipped, never errors. A key addressing no cells yields an
/// empty walk.
pub fn diagonal_cells(
    n: usize,
    dir: DiagonalDir,
    key: i64,
) -> impl Iterator<Item = (usize, usize)> {
    let step = dir.col_step();
    let side = n as i64;
    (0..side).filter_map(move |row| {
        let col = key + step * row;
        (0..side).contains(&col).then(|| (row as usize, col as usize))
    })
}

/// One attack line of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    Row(usize),
    Col(usize),
    MajorDiagonal(i64),
    MinorDiagonal(i64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonal_walk_skips_off_board_columns() {
        let cells: Vec<_> = diagonal_cells(4, DiagonalDir::Major, -2).collect();
        assert_eq!(cells, vec![(2, 0), (3, 1)]);

        let cells: Vec<_> = diagonal_cells(4, DiagonalDir::Minor, 5).collect();
        assert_eq!(cells, vec![(2, 3), (3, 2)]);

        assert_eq!(diagonal_cells(4, DiagonalDir::Major, 99).count(), 0);
    }

    #[test]
    fn key_ranges_collapse_on_tiny_boards() {
        assert_eq!(DiagonalDir::Major.key_range(0).count(), 0);
        assert_eq!(DiagonalDir::Minor.key_range(0).count(), 0);
        assert_eq!(DiagonalDir::Major.key_range(1).count(), 1);
        assert_eq!(DiagonalDir::Minor.key_range(1).count(), 1);
        assert_eq!(DiagonalDir::Major.key_range(4).count(), 7);
        assert_eq!(DiagonalDir::Minor.key_range(4).count(), 7);
    }

    #[test]
    fn keys_are_invariant_along_their_line() {
        for (row, col) in diagonal_cells(5, DiagonalDir::Major, -1) {
            assert_eq!(major_key(row, col), -1);
        }
        for (row, col) in diagonal_cells(5, DiagonalDir::Minor, 6) {
            assert_eq!(minor_key(row, col), 6);
        }
    }
}
