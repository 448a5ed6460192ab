//! Desktop preview window using `embedded-graphics-simulator`.
//!
//! Renders the 128x64 canvas with the blue OLED theme at 2x scale. The window is
//! only repainted (and its events drained) when a frame is pushed, so closing it
//! takes effect on the next tick.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{BinaryColorTheme, OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};

use super::DisplayDriver;
use crate::canvas::Canvas;
use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::error::DisplayError;

const WINDOW_TITLE: &str = "Gateway OLED";
const SCALE: u32 = 2;

pub struct SimulatorPanel {
    display: SimulatorDisplay<BinaryColor>,
    window: Window,
}

impl SimulatorPanel {
    pub fn open() -> Self {
        let display = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        let output_settings = OutputSettingsBuilder::new()
            .theme(BinaryColorTheme::OledBlue)
            .scale(SCALE)
            .build();
        let mut window = Window::new(WINDOW_TITLE, &output_settings);
        window.update(&display);
        Self { display, window }
    }

    fn pump_events(&mut self) -> Result<(), DisplayError> {
        if self.window.events().any(|ev| matches!(ev, SimulatorEvent::Quit)) {
            return Err(DisplayError::Closed);
        }
        Ok(())
    }
}

impl DisplayDriver for SimulatorPanel {
    fn show(&mut self, canvas: &Canvas) -> Result<(), DisplayError> {
        self.display.clear(BinaryColor::Off).ok();
        self.display.draw_iter(canvas.pixels()).ok();
        self.window.update(&self.display);
        self.pump_events()
    }

    fn shutdown(&mut self) -> Result<(), DisplayError> {
        self.display.clear(BinaryColor::Off).ok();
        self.window.update(&self.display);
        Ok(())
    }
}
