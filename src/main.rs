//! gateway-oled: rotating status pages on a LoRaWAN gateway's OLED panel.
//!
//! Start-up order:
//!
//! 1. Parse the command line and set up logging
//! 2. Open the display backend. Failure here is the only fatal error
//! 3. Build the data sources and the Network, Stats, Traffic rotation
//! 4. Install the Ctrl-C / SIGTERM handler
//! 5. Tick until stopped, then blank the panel
//!
//! # Controls (Simulator Mode)
//!
//! Closing the window stops the loop on the next tick.

use anyhow::{Context, Result};
use clap::Parser;
use crossbeam_channel::bounded;
use gateway_oled::cli::Cli;
use gateway_oled::config::{Backend, Settings};
use gateway_oled::display::{AsciiDisplay, DisplayDriver};
use gateway_oled::error::DisplayError;
use gateway_oled::scheduler::Scheduler;
use gateway_oled::screens::default_rotation;
use gateway_oled::sources::{HostNetworkSource, HostSystemSource, HttpMetricsSource};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose { EnvFilter::new("debug") } else { EnvFilter::new("info") }
    });
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();

    let settings = cli.into_settings().context("invalid arguments")?;

    let mut display = match open_display(&settings) {
        Ok(display) => display,
        Err(e) => {
            error!(error = %e, "display init failed");
            eprintln!("OLED screen not found");
            std::process::exit(1);
        }
    };

    let pages = default_rotation(
        HostNetworkSource::new(),
        HostSystemSource::new(),
        HttpMetricsSource::new(settings.metrics_url.clone(), settings.fetch_timeout),
    );
    let mut scheduler = Scheduler::new(pages).context("failed to build page rotation")?;

    let (stop_tx, stop_rx) = bounded::<()>(1);
    ctrlc::set_handler(move || {
        // Full means a stop is already pending
        stop_tx.try_send(()).ok();
    })
    .context("failed to set signal handler")?;

    info!(
        backend = ?settings.backend,
        interval_secs = settings.interval.as_secs(),
        metrics_url = %settings.metrics_url,
        pages = ?scheduler.page_names().collect::<Vec<_>>(),
        "starting page rotation"
    );

    let shown = scheduler.run(&mut display, settings.interval, settings.once, &stop_rx);

    info!(frames = shown, "stopped");
    if let Err(e) = display.shutdown() {
        warn!(error = %e, "failed to blank display");
    }
    Ok(())
}

fn open_display(settings: &Settings) -> Result<Box<dyn DisplayDriver>, DisplayError> {
    match settings.backend {
        Backend::Ascii => Ok(Box::new(AsciiDisplay::stdout())),
        #[cfg(target_os = "linux")]
        Backend::Oled => {
            let panel = gateway_oled::display::OledDisplay::open(&settings.i2c_bus, settings.i2c_address)?;
            Ok(Box::new(panel))
        }
        #[cfg(feature = "simulator")]
        Backend::Simulator => Ok(Box::new(gateway_oled::display::SimulatorPanel::open())),
        #[allow(unreachable_patterns)]
        other => Err(DisplayError::Init(format!("{other:?} backend not built into this binary"))),
    }
}
