//! Low-level drawing and text helpers shared across pages.
//!
//! # Axis Arrows
//!
//! `draw_axis_arrow` draws a shaft plus a two-segment arrowhead at its tip, each
//! wing 3px back from the tip. Only the two directions the chart needs exist.
//!
//! # Line Text
//!
//! Page rows are formatted into a fixed-capacity `heapless::String` so a tick
//! never allocates for text. Values longer than the panel row are truncated at a
//! char boundary instead of being dropped wholesale (which is what a plain
//! `write!` into a full `heapless::String` would do).

use core::fmt::{self, Write};

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::Point;
use heapless::String;

use crate::canvas::Canvas;
use crate::config::LINE_CHARS;

/// Byte capacity of one formatted row. Rows are cut to `LINE_CHARS` chars first.
const LINE_CAPACITY: usize = 64;

/// One formatted text row.
pub type LineText = String<LINE_CAPACITY>;

/// Wing length of an arrowhead, in pixels.
const ARROW_WING: i32 = 3;

/// Direction an axis arrow points.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ArrowDirection {
    Up,
    Right,
}

/// Draw a 1px shaft from `tail` to `tip` with an arrowhead at `tip`.
///
/// # Arrow Geometry
/// - `Up`: wings from `tip` down-left and down-right, `(-3, +3)` and `(+3, +3)`
/// - `Right`: wings from `tip` up-left and down-left, `(-3, -3)` and `(-3, +3)`
pub fn draw_axis_arrow(canvas: &mut Canvas, tail: Point, tip: Point, direction: ArrowDirection) {
    canvas.draw_line(tail.x, tail.y, tip.x, tip.y, BinaryColor::On);
    let (wing_a, wing_b) = match direction {
        ArrowDirection::Up => (
            Point::new(tip.x - ARROW_WING, tip.y + ARROW_WING),
            Point::new(tip.x + ARROW_WING, tip.y + ARROW_WING),
        ),
        ArrowDirection::Right => (
            Point::new(tip.x - ARROW_WING, tip.y - ARROW_WING),
            Point::new(tip.x - ARROW_WING, tip.y + ARROW_WING),
        ),
    };
    canvas.draw_line(tip.x, tip.y, wing_a.x, wing_a.y, BinaryColor::On);
    canvas.draw_line(wing_b.x, wing_b.y, tip.x, tip.y, BinaryColor::On);
}

/// `fmt::Write` adapter that keeps at most `LINE_CHARS` chars and drops the rest.
struct Truncating<'a> {
    buf: &'a mut LineText,
    remaining: usize,
}

impl Write for Truncating<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for ch in s.chars() {
            if self.remaining == 0 || self.buf.push(ch).is_err() {
                self.remaining = 0;
                break;
            }
            self.remaining -= 1;
        }
        Ok(())
    }
}

/// Format one row of text, truncated to the panel width.
///
/// ```ignore
/// let row = line_text(format_args!("CPU: {cpu:.1}%"));
/// ```
pub fn line_text(args: fmt::Arguments<'_>) -> LineText {
    let mut buf = LineText::new();
    let mut writer = Truncating {
        buf: &mut buf,
        remaining: LINE_CHARS,
    };
    let _ = writer.write_fmt(args);
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_text_short() {
        let row = line_text(format_args!("CPU: {:.1}%", 12.345));
        assert_eq!(row.as_str(), "CPU: 12.3%");
    }

    #[test]
    fn test_line_text_truncates_to_panel_width() {
        let long = "x".repeat(200);
        let row = line_text(format_args!("Uptime: {long}"));
        assert_eq!(row.chars().count(), LINE_CHARS);
        assert!(row.starts_with("Uptime: "));
    }

    #[test]
    fn test_line_text_multibyte() {
        let row = line_text(format_args!("Temperature: {}", "48.3°C"));
        assert!(row.starts_with("Temperature: 48"));
        assert!(row.chars().count() <= LINE_CHARS);
    }

    #[test]
    fn test_up_arrow() {
        let mut canvas = Canvas::new();
        draw_axis_arrow(&mut canvas, Point::new(3, 60), Point::new(3, 0), ArrowDirection::Up);
        assert!(canvas.pixel(3, 0));
        assert!(canvas.pixel(3, 60));
        assert!(canvas.pixel(0, 3));
        assert!(canvas.pixel(6, 3));
        assert!(!canvas.pixel(0, 0));
    }

    #[test]
    fn test_right_arrow() {
        let mut canvas = Canvas::new();
        draw_axis_arrow(&mut canvas, Point::new(3, 60), Point::new(127, 60), ArrowDirection::Right);
        assert!(canvas.pixel(127, 60));
        assert!(canvas.pixel(124, 57));
        assert!(canvas.pixel(124, 63));
        assert!(canvas.pixel(3, 60));
        assert!(!canvas.pixel(2, 60));
    }
}
