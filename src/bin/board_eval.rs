use std::path::PathBuf;

use queens_board::board::{BoardError, ConflictBoard};
use queens_board::report::ConflictReport;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum BoardSpec {
    /// An all-empty board of the given side length.
    Empty { n: usize },
    /// Explicit rows; any nonzero value is a piece.
    Rows { rows: Vec<Vec<u8>> },
}

#[derive(Debug, Clone, Deserialize)]
struct InputFile {
    board: BoardSpec,
}

fn build_board(spec: &BoardSpec) -> Result<ConflictBoard, BoardError> {
    match spec {
        BoardSpec::Empty { n } => Ok(ConflictBoard::empty(*n)),
        BoardSpec::Rows { rows } => ConflictBoard::from_rows(rows),
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: board_eval <board.json>");
        std::process::exit(2);
    }

    let path = PathBuf::from(&args[1]);
    let bytes = match std::fs::read(&path) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Failed to read {}: {e}", path.display());
            std::process::exit(1);
        }
    };

    let input: InputFile = match serde_json::from_slice(&bytes) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Invalid JSON in {}: {e}", path.display());
            std::process::exit(2);
        }
    };

    let board = match build_board(&input.board) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Invalid board: {e}");
            std::process::exit(2);
        }
    };

    let report = ConflictReport::scan(&board);
    let out = serde_json::json!({
        "board": {
            "n": board.n(),
            "rows": board.to_matrix(),
        },
        "conflicts": {
            "any_row": board.has_any_row_conflict(),
            "any_col": board.has_any_col_conflict(),
            "any_major_diagonal": board.has_any_major_diagonal_conflict(),
            "any_minor_diagonal": board.has_any_minor_diagonal_conflict(),
            "any_rook": board.has_any_rook_conflict(),
            "any_queen": board.has_any_queen_conflict(),
        },
        "report": report,
    });
    println!("{}", serde_json::to_string_pretty(&out).unwrap());
}
