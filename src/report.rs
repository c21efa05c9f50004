//! Whole-board conflict report.
//!
//! The boolean queries on [`ConflictBoard`] answer "is there any
//! conflict"; a renderer also needs to know *which* lines are over
//! capacity so it can highlight them. One sweep over the grid tallies
//! piece counts per line and keeps the lines holding two or more.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::board::ConflictBoard;
use crate::rules::lines::{major_key, minor_key, Line};

/// Conflicted lines of a board, grouped by family and sorted by index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConflictReport {
    pub rows: Vec<usize>,
    pub cols: Vec<usize>,
    pub major_diagonals: Vec<i64>,
    pub minor_diagonals: Vec<i64>,
}

impl ConflictReport {
    /// Tally the four lines through every piece and keep the lines that
    /// hold two or more.
    pub fn scan(board: &ConflictBoard) -> Self {
        let mut counts: FxHashMap<Line, u32> = FxHashMap::default();
        for (row, cells) in board.rows().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if !cell.is_occupied() {
                    continue;
                }
                for line in [
                    Line::Row(row),
                    Line::Col(col),
                    Line::MajorDiagonal(major_key(row, col)),
                    Line::MinorDiagonal(minor_key(row, col)),
                ] {
                    *counts.entry(line).or_insert(0) += 1;
                }
            }
        }

        let mut report = ConflictReport::default();
        for (line, pieces) in counts {
            if pieces < 2 {
                continue;
            }
            match line {
                Line::Row(i) => report.rows.push(i),
                Line::Col(i) => report.cols.push(i),
                Line::MajorDiagonal(k) => report.major_diagonals.push(k),
                Line::MinorDiagonal(k) => report.minor_diagonals.push(k),
            }
        }
        report.rows.sort_unstable();
        report.cols.sort_unstable();
        report.major_diagonals.sort_unstable();
        report.minor_diagonals.sort_unstable();
        report
    }

    /// True when no line of any family is conflicted.
    pub fn is_clean(&self) -> bool {
        self.rows.is_empty()
            && self.cols.is_empty()
            && self.major_diagonals.is_empty()
            && self.minor_diagonals.is_empty()
    }

    /// Every conflicted line: rows, then columns, then major and minor
    /// diagonals, each sorted.
    pub fn conflicted_lines(&self) -> Vec<Line> {
        let mut out = Vec::new();
        out.extend(self.rows.iter().map(|&i| Line::Row(i)));
        out.extend(self.cols.iter().map(|&i| Line::Col(i)));
        out.extend(self.major_diagonals.iter().map(|&k| Line::MajorDiagonal(k)));
        out.extend(self.minor_diagonals.iter().map(|&k| Line::MinorDiagonal(k)));
        out
    }
}
