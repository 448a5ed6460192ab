//! SSD1306 128x64 panel over Linux I2C.
//!
//! The driver keeps its own frame buffer. A push clears that buffer, copies the
//! canvas into it and flushes the whole frame over the bus.

use std::thread;
use std::time::Duration;

use embedded_graphics::prelude::*;
use linux_embedded_hal::I2cdev;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::size::DisplaySize128x64;
use ssd1306::{I2CDisplayInterface, Ssd1306};
use tracing::info;

use super::DisplayDriver;
use crate::canvas::Canvas;
use crate::error::DisplayError;

/// Controller power-up settle time before the init sequence.
const SETTLE_DELAY: Duration = Duration::from_secs(1);

type Panel = Ssd1306<I2CInterface<I2cdev>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

pub struct OledDisplay {
    panel: Panel,
}

impl OledDisplay {
    /// Open `bus`, wait for the controller, run its init sequence and blank it.
    pub fn open(bus: &str, address: u8) -> Result<Self, DisplayError> {
        info!(bus, address = format_args!("{address:#04x}"), "opening oled panel");

        let i2c = I2cdev::new(bus).map_err(|e| DisplayError::Init(format!("{bus}: {e}")))?;
        let interface = I2CDisplayInterface::new_custom_address(i2c, address);
        let mut panel =
            Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0).into_buffered_graphics_mode();

        thread::sleep(SETTLE_DELAY);

        panel.init().map_err(|e| DisplayError::Init(format!("{e:?}")))?;
        panel.clear_buffer();
        panel.flush().map_err(|e| DisplayError::Init(format!("{e:?}")))?;

        Ok(Self { panel })
    }
}

impl DisplayDriver for OledDisplay {
    fn show(&mut self, canvas: &Canvas) -> Result<(), DisplayError> {
        self.panel.clear_buffer();
        self.panel
            .draw_iter(canvas.pixels())
            .map_err(|e| DisplayError::Push(format!("{e:?}")))?;
        self.panel.flush().map_err(|e| DisplayError::Push(format!("{e:?}")))
    }

    fn shutdown(&mut self) -> Result<(), DisplayError> {
        self.panel.clear_buffer();
        self.panel.flush().map_err(|e| DisplayError::Push(format!("{e:?}")))
    }
}
