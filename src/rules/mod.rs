//! Pure conflict rules over a grid.
//!
//! - [`lines`]: the four line families and the lazy diagonal walk.
//! - [`conflicts`]: per-line and per-family conflict predicates.
//!
//! Everything here is a read-only function of the grid contents.

pub mod conflicts;
pub mod lines;
