//! Application configuration.
//!
//! Two layers:
//! - compile-time layout constants (panel geometry, histogram budget, line metrics),
//! - [`Settings`], the runtime knobs assembled from the command line in `main.rs`.
//!
//! Layout positions such as the chart baseline are `const` so page code never
//! recomputes them per tick.

use std::time::Duration;

use profont::PROFONT_9_POINT;

// =============================================================================
// Display Configuration
// =============================================================================

/// Panel width in pixels (SSD1306 128x64).
pub const SCREEN_WIDTH: u32 = 128;

/// Panel height in pixels.
pub const SCREEN_HEIGHT: u32 = 64;

/// Packed 1-bpp buffer length for one full frame.
pub const FRAME_BYTES: usize = (SCREEN_WIDTH * SCREEN_HEIGHT / 8) as usize;

/// Height of one text line. Equal to the font cell height (11px for `ProFont` 9pt).
pub const LINE_HEIGHT: i32 = PROFONT_9_POINT.character_size.height as i32;

/// Width of one glyph cell.
pub const GLYPH_WIDTH: u32 = PROFONT_9_POINT.character_size.width;

/// Characters that fit on one line.
pub const LINE_CHARS: usize = (SCREEN_WIDTH / GLYPH_WIDTH) as usize;

// =============================================================================
// Histogram Layout
// =============================================================================

/// Horizontal pixel budget shared by all bars.
pub const AVAIL_WIDTH: u32 = 120;

/// Height of the tallest bar. The bucket holding `rx_max` reaches exactly this.
pub const AVAIL_HEIGHT: u32 = 40;

/// Upper bound on bars drawn, regardless of how many buckets the source keeps.
pub const MAX_BUCKET_COUNT: usize = 36;

/// X coordinate of the first bar's left edge.
pub const START_WIDTH: i32 = 5;

/// X coordinate of the vertical axis.
pub const AXIS_X: i32 = 3;

/// Y coordinate of the horizontal axis. Bars stand on this line.
pub const BASELINE_Y: i32 = 60;

// =============================================================================
// Timing / Endpoint Defaults
// =============================================================================

/// Time between ticks.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);

/// Upper bound on one metrics fetch. Keeps a hung endpoint from stalling the panel.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(3);

/// Local metrics endpoint published by the packet forwarder log parser.
pub const DEFAULT_METRICS_URL: &str = "http://127.0.0.1:8888/api/metrics";

/// I2C bus the panel hangs off on Raspberry Pi based gateways.
pub const DEFAULT_I2C_BUS: &str = "/dev/i2c-1";

/// SSD1306 default I2C address.
pub const DEFAULT_I2C_ADDRESS: u8 = 0x3C;

// =============================================================================
// Runtime Settings
// =============================================================================

/// Which panel the frames are pushed to.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, clap::ValueEnum)]
pub enum Backend {
    /// SSD1306 over Linux I2C.
    #[default]
    Oled,
    /// Desktop window (`simulator` feature).
    Simulator,
    /// Text art on stdout.
    Ascii,
}

/// Runtime configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub backend: Backend,
    pub i2c_bus: String,
    pub i2c_address: u8,
    pub interval: Duration,
    pub metrics_url: String,
    pub fetch_timeout: Duration,
    /// Render one tick and exit.
    pub once: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            i2c_bus: DEFAULT_I2C_BUS.to_owned(),
            i2c_address: DEFAULT_I2C_ADDRESS,
            interval: DEFAULT_INTERVAL,
            metrics_url: DEFAULT_METRICS_URL.to_owned(),
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            once: false,
        }
    }
}
