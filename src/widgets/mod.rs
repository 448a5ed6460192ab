//! Drawing building blocks shared by the pages.
//!
//! - [`header`]: header bar and fixed-height text rows
//! - [`primitives`]: axis arrows and truncating row formatting

mod header;
mod primitives;

pub use header::{draw_header, draw_row};
pub use primitives::{ArrowDirection, LineText, draw_axis_arrow, line_text};
