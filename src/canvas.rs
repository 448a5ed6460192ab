//! One frame's worth of 1-bit pixels.
//!
//! A [`Canvas`] is created fresh for every tick, drawn on by exactly one page and
//! then handed to the display backend. Nothing on it survives into the next tick.
//!
//! Storage is a packed row-major bitmap (`FRAME_BYTES` bytes, MSB = leftmost
//! pixel). The canvas implements [`DrawTarget`], so any embedded-graphics
//! primitive can be drawn onto it directly. The convenience methods below wrap the
//! three primitives the pages use (text, line, rectangle) with the panel's
//! coordinate convention: integer pixels, (0,0) top-left, inclusive corners.
//!
//! Out-of-range pixels are clipped silently. There are no error conditions.

use core::convert::Infallible;
use core::fmt;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyleBuilder, Rectangle};
use embedded_graphics::text::{Baseline, Text};

use crate::config::{FRAME_BYTES, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::styles::{stroke_style, text_style};

/// Fixed-size monochrome bitmap.
#[derive(Clone, PartialEq, Eq)]
pub struct Canvas {
    bits: [u8; FRAME_BYTES],
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    pub const WIDTH: i32 = SCREEN_WIDTH as i32;
    pub const HEIGHT: i32 = SCREEN_HEIGHT as i32;

    /// Create a blank canvas (all pixels off).
    pub const fn new() -> Self {
        Self { bits: [0; FRAME_BYTES] }
    }

    /// Reset every pixel to background.
    pub fn clear(&mut self) {
        self.bits.fill(0);
    }

    #[inline]
    const fn index(x: i32, y: i32) -> Option<(usize, u8)> {
        if x < 0 || y < 0 || x >= Self::WIDTH || y >= Self::HEIGHT {
            return None;
        }
        let bit = (y * Self::WIDTH + x) as usize;
        Some((bit / 8, 0x80 >> (bit % 8)))
    }

    /// Set one pixel. Coordinates outside the panel are ignored.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: BinaryColor) {
        if let Some((byte, mask)) = Self::index(x, y) {
            match color {
                BinaryColor::On => self.bits[byte] |= mask,
                BinaryColor::Off => self.bits[byte] &= !mask,
            }
        }
    }

    /// Whether the pixel at (x, y) is lit. Outside the panel reads as off.
    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> bool {
        Self::index(x, y).is_some_and(|(byte, mask)| self.bits[byte] & mask != 0)
    }

    /// True when no pixel is lit.
    pub fn is_blank(&self) -> bool {
        self.bits.iter().all(|&b| b == 0)
    }

    /// Number of lit pixels.
    pub fn lit_count(&self) -> u32 {
        self.bits.iter().map(|b| b.count_ones()).sum()
    }

    /// Every pixel of the frame, row by row, as embedded-graphics pixels.
    pub fn pixels(&self) -> impl Iterator<Item = Pixel<BinaryColor>> + '_ {
        (0..Self::HEIGHT).flat_map(move |y| {
            (0..Self::WIDTH).map(move |x| Pixel(Point::new(x, y), BinaryColor::from(self.pixel(x, y))))
        })
    }

    // =========================================================================
    // Drawing Primitives
    // =========================================================================

    /// Draw a run of fixed-width glyphs with its top-left corner at (x, y).
    ///
    /// No wrapping. Glyphs past the right edge are clipped.
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str, color: BinaryColor) {
        Text::with_baseline(text, Point::new(x, y), text_style(color), Baseline::Top)
            .draw(self)
            .ok();
    }

    /// Draw a 1px line between two inclusive endpoints.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: BinaryColor) {
        Line::new(Point::new(x0, y0), Point::new(x1, y1))
            .into_styled(stroke_style(color))
            .draw(self)
            .ok();
    }

    /// Draw a rectangle spanning two inclusive corners given in any order.
    ///
    /// `outline` is a 1px border inside the rectangle; `fill`, when present,
    /// paints the interior.
    pub fn draw_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, outline: BinaryColor, fill: Option<BinaryColor>) {
        let mut style = PrimitiveStyleBuilder::new().stroke_color(outline).stroke_width(1);
        if let Some(fill) = fill {
            style = style.fill_color(fill);
        }
        Rectangle::with_corners(Point::new(x0, y0), Point::new(x1, y1))
            .into_styled(style.build())
            .draw(self)
            .ok();
    }

    /// Text art rendering: `#` for lit pixels, `.` for dark, one line per row.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(FRAME_BYTES * 8 + Self::HEIGHT as usize);
        for y in 0..Self::HEIGHT {
            for x in 0..Self::WIDTH {
                out.push(if self.pixel(x, y) { '#' } else { '.' });
            }
            out.push('\n');
        }
        out
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }
}

impl DrawTarget for Canvas {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color);
        }
        Ok(())
    }
}

impl fmt::Debug for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Canvas").field("lit", &self.lit_count()).finish()
    }
}
