//! Command-line interface.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;

use crate::config::{
    Backend,
    DEFAULT_FETCH_TIMEOUT,
    DEFAULT_I2C_BUS,
    DEFAULT_INTERVAL,
    DEFAULT_METRICS_URL,
    Settings,
};

/// Rotating status pages for a LoRaWAN gateway's 128x64 OLED panel.
///
/// Cycles through network addresses, host statistics and a histogram of
/// received LoRa packets, one page per interval.
#[derive(Parser, Debug)]
#[command(name = "gateway-oled")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Where frames are pushed.
    #[arg(short = 'b', long, value_enum, default_value_t = Backend::Oled)]
    pub backend: Backend,

    /// I2C bus device the panel is attached to.
    #[arg(long, default_value = DEFAULT_I2C_BUS)]
    pub i2c_bus: String,

    /// Panel I2C address, decimal or 0x-prefixed hex.
    #[arg(long, default_value = "0x3C")]
    pub i2c_address: String,

    /// Seconds between page changes.
    #[arg(short = 'i', long, default_value_t = DEFAULT_INTERVAL.as_secs())]
    pub interval_secs: u64,

    /// Traffic metrics endpoint.
    #[arg(long, default_value = DEFAULT_METRICS_URL)]
    pub metrics_url: String,

    /// Upper bound on one metrics request, in seconds.
    #[arg(long, default_value_t = DEFAULT_FETCH_TIMEOUT.as_secs())]
    pub fetch_timeout_secs: u64,

    /// Render a single tick and exit.
    #[arg(long)]
    pub once: bool,

    /// Debug logging (overridden by RUST_LOG).
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Cli {
    /// Validate arguments and build runtime settings.
    pub fn into_settings(self) -> Result<Settings> {
        if self.interval_secs == 0 {
            bail!("--interval-secs must be at least 1");
        }
        if self.fetch_timeout_secs == 0 {
            bail!("--fetch-timeout-secs must be at least 1");
        }
        if self.backend == Backend::Simulator && !cfg!(feature = "simulator") {
            bail!("simulator backend requires building with `--features simulator`");
        }
        if self.backend == Backend::Oled && !cfg!(target_os = "linux") {
            bail!("oled backend is only available on Linux");
        }

        let i2c_address = parse_address(&self.i2c_address)
            .with_context(|| format!("invalid I2C address {:?}", self.i2c_address))?;

        Ok(Settings {
            backend: self.backend,
            i2c_bus: self.i2c_bus,
            i2c_address,
            interval: Duration::from_secs(self.interval_secs),
            metrics_url: self.metrics_url,
            fetch_timeout: Duration::from_secs(self.fetch_timeout_secs),
            once: self.once,
        })
    }
}

/// `0x3C`, `0X3c` or `60`.
fn parse_address(raw: &str) -> Result<u8> {
    let raw = raw.trim();
    let address = match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16)?,
        None => raw.parse()?,
    };
    // 7-bit addressing
    if address > 0x7F {
        bail!("address {address:#04x} is outside the 7-bit range");
    }
    Ok(address)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_I2C_ADDRESS;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("gateway-oled").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults_match_settings_default() {
        let settings = parse(&["--backend", "ascii"]).into_settings().unwrap();
        let expected = Settings { backend: Backend::Ascii, ..Settings::default() };
        assert_eq!(settings, expected);
        assert_eq!(settings.i2c_address, DEFAULT_I2C_ADDRESS);
    }

    #[test]
    fn test_overrides() {
        let settings = parse(&[
            "--backend",
            "ascii",
            "--interval-secs",
            "10",
            "--metrics-url",
            "http://10.0.0.2:8888/api/metrics",
            "--i2c-address",
            "0x3d",
            "--once",
        ])
        .into_settings()
        .unwrap();

        assert_eq!(settings.interval, Duration::from_secs(10));
        assert_eq!(settings.metrics_url, "http://10.0.0.2:8888/api/metrics");
        assert_eq!(settings.i2c_address, 0x3D);
        assert!(settings.once);
    }

    #[test]
    fn test_zero_interval_rejected() {
        assert!(parse(&["--backend", "ascii", "--interval-secs", "0"]).into_settings().is_err());
    }

    #[test]
    fn test_unknown_backend_rejected() {
        assert!(Cli::try_parse_from(["gateway-oled", "--backend", "lcd"]).is_err());
    }

    #[test]
    fn test_parse_address() {
        assert_eq!(parse_address("0x3C").unwrap(), 0x3C);
        assert_eq!(parse_address("0X3d").unwrap(), 0x3D);
        assert_eq!(parse_address("60").unwrap(), 60);
        assert!(parse_address("0x80").is_err());
        assert!(parse_address("oled").is_err());
        assert!(parse_address("0x").is_err());
    }
}
