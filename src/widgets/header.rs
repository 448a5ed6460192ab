//! Page header bar and text rows.
//!
//! Every text page shares the same layout: a lit bar across the top holding the
//! page title in dark text, then fixed-height rows of lit text below it.
//!
//! ```text
//! ┌────────────────────────────┐
//! │▓NETWORK▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓│  row 0 (header)
//! │eth0: 192.168.1.10          │  row 1
//! │wlan0: 10.0.0.4             │  row 2
//! │...                         │
//! └────────────────────────────┘
//! ```

use embedded_graphics::pixelcolor::BinaryColor;

use crate::canvas::Canvas;
use crate::config::{LINE_HEIGHT, SCREEN_WIDTH};

/// Right edge of the header bar (inclusive).
const HEADER_RIGHT: i32 = SCREEN_WIDTH as i32 - 1;

/// Bottom edge of the header bar (inclusive). Exactly one text row tall.
const HEADER_BOTTOM: i32 = LINE_HEIGHT - 1;

/// Top y coordinate of text row `row` (row 0 is the header).
#[inline]
const fn row_y(row: usize) -> i32 {
    row as i32 * LINE_HEIGHT
}

/// Draw the lit header bar with `title` knocked out in dark text.
pub fn draw_header(canvas: &mut Canvas, title: &str) {
    canvas.draw_rect(0, 0, HEADER_RIGHT, HEADER_BOTTOM, BinaryColor::On, Some(BinaryColor::On));
    canvas.draw_text(0, 0, title, BinaryColor::Off);
}

/// Draw lit text at the start of row `row`.
pub fn draw_row(canvas: &mut Canvas, row: usize, text: &str) {
    canvas.draw_text(0, row_y(row), text, BinaryColor::On);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_y() {
        assert_eq!(row_y(0), 0);
        assert_eq!(row_y(1), LINE_HEIGHT);
        assert_eq!(row_y(4), 4 * LINE_HEIGHT);
    }

    #[test]
    fn test_header_bar_is_lit_with_dark_title() {
        let mut canvas = Canvas::new();
        draw_header(&mut canvas, "STATS");

        // Right end of the bar has no text over it
        assert!(canvas.pixel(HEADER_RIGHT, 0));
        assert!(canvas.pixel(HEADER_RIGHT, HEADER_BOTTOM));
        // Nothing below the bar
        assert!(!canvas.pixel(HEADER_RIGHT, LINE_HEIGHT));

        // Title glyphs punch holes in the bar
        let bar_pixels = (HEADER_RIGHT + 1) as u32 * LINE_HEIGHT as u32;
        assert!(canvas.lit_count() < bar_pixels);
    }

    #[test]
    fn test_draw_row_stays_in_row() {
        let mut canvas = Canvas::new();
        draw_row(&mut canvas, 2, "CPU: 1.0%");
        for y in 0..Canvas::HEIGHT {
            for x in 0..Canvas::WIDTH {
                if canvas.pixel(x, y) {
                    assert!((row_y(2)..row_y(3)).contains(&y), "row 2 text leaked to y={y}");
                }
            }
        }
        assert!(!canvas.is_blank());
    }
}
