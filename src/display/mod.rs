//! Display boundary.
//!
//! A backend takes a finished [`Canvas`] and puts it on a panel. Backends own no
//! page logic; they push pixels, clear, and shut down.
//!
//! - [`oled`]: SSD1306 128x64 over Linux I2C (the gateway hardware)
//! - [`simulator`]: desktop window, behind the `simulator` feature
//! - [`ascii`]: text art on stdout for headless development hosts

pub mod ascii;
#[cfg(target_os = "linux")]
pub mod oled;
#[cfg(feature = "simulator")]
pub mod simulator;

use crate::canvas::Canvas;
use crate::error::DisplayError;

pub use ascii::AsciiDisplay;
#[cfg(target_os = "linux")]
pub use oled::OledDisplay;
#[cfg(feature = "simulator")]
pub use simulator::SimulatorPanel;

/// Panel that frames are pushed to.
///
/// Constructed once before the scheduler starts and never rebuilt mid-run.
pub trait DisplayDriver {
    /// Replace whatever the panel shows with `canvas`.
    fn show(&mut self, canvas: &Canvas) -> Result<(), DisplayError>;

    /// Blank the panel before exit.
    fn shutdown(&mut self) -> Result<(), DisplayError>;
}

impl<D: DisplayDriver + ?Sized> DisplayDriver for Box<D> {
    fn show(&mut self, canvas: &Canvas) -> Result<(), DisplayError> {
        (**self).show(canvas)
    }

    fn shutdown(&mut self) -> Result<(), DisplayError> {
        (**self).shutdown()
    }
}
