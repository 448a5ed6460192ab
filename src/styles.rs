//! Pre-computed static styles for a monochrome panel.
//!
//! `MonoTextStyle::new` and `PrimitiveStyle::with_*` are const fn in
//! embedded-graphics 0.8, so every style used by the pages is built at compile time
//! and referenced directly from the draw calls.
//!
//! The panel is 1-bit: `On` is lit, `Off` is background. Header bars are lit
//! rectangles with `Off` text on top.

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::BinaryColor,
    primitives::PrimitiveStyle,
};
use profont::PROFONT_9_POINT;

// =============================================================================
// Text Styles
// =============================================================================

/// Lit text on dark background. Every page uses this single font.
pub const TEXT_ON: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(&PROFONT_9_POINT, BinaryColor::On);

/// Dark text, for drawing over a lit header bar.
pub const TEXT_OFF: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(&PROFONT_9_POINT, BinaryColor::Off);

// =============================================================================
// Primitive Styles
// =============================================================================

/// 1px lit stroke for axes and arrowheads.
pub const STROKE_ON: PrimitiveStyle<BinaryColor> = PrimitiveStyle::with_stroke(BinaryColor::On, 1);

/// 1px dark stroke.
pub const STROKE_OFF: PrimitiveStyle<BinaryColor> = PrimitiveStyle::with_stroke(BinaryColor::Off, 1);

/// Text style for a given ink color.
#[inline]
pub const fn text_style(color: BinaryColor) -> MonoTextStyle<'static, BinaryColor> {
    match color {
        BinaryColor::On => TEXT_ON,
        BinaryColor::Off => TEXT_OFF,
    }
}

/// 1px line style for a given ink color.
#[inline]
pub const fn stroke_style(color: BinaryColor) -> PrimitiveStyle<BinaryColor> {
    match color {
        BinaryColor::On => STROKE_ON,
        BinaryColor::Off => STROKE_OFF,
    }
}
