//! The page contract.
//!
//! A page draws one screenful onto a [`Canvas`] and reports whether it produced
//! something worth showing. A page that has nothing to show returns
//! [`RenderOutcome::Skipped`] and the scheduler moves on to the next page within
//! the same tick.
//!
//! # Pages
//!
//! - `Network` (`screens::NetworkPage`): interface addresses, never skips
//! - `Stats` (`screens::StatsPage`): CPU, memory, temperature, uptime, never skips
//! - `Traffic` (`screens::TrafficPage`): LoRaWAN rx histogram, skips without data

use crate::canvas::Canvas;

/// Result of one render attempt.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RenderOutcome {
    /// The canvas holds a frame ready to display.
    Rendered,
    /// No usable data. The canvas may be partially drawn and must not be shown.
    Skipped,
}

/// One entry in the page rotation.
///
/// Implementations own whatever data source they read from. `render` takes
/// `&mut self` because some sources keep sampling state between calls (CPU
/// usage is measured relative to the previous sample).
pub trait Page {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Draw onto `canvas`, which the caller hands over blank.
    fn render(&mut self, canvas: &mut Canvas) -> RenderOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Blank;

    impl Page for Blank {
        fn name(&self) -> &'static str {
            "blank"
        }

        fn render(&mut self, _canvas: &mut Canvas) -> RenderOutcome {
            RenderOutcome::Skipped
        }
    }

    #[test]
    fn test_page_as_trait_object() {
        let mut page: Box<dyn Page> = Box::new(Blank);
        let mut canvas = Canvas::new();
        assert_eq!(page.name(), "blank");
        assert_eq!(page.render(&mut canvas), RenderOutcome::Skipped);
    }
}
