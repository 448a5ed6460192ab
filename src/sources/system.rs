//! Host resource readings.
//!
//! CPU, memory and uptime come from `sysinfo`. The `System` handle is kept across
//! calls: CPU usage is the delta between two refreshes, so the first reading after
//! start is 0.0 and every later one covers the time since the previous tick.
//!
//! Temperature prefers the Raspberry Pi firmware tool (`vcgencmd measure_temp`)
//! and falls back to the first kernel thermal zone.

use std::fs;
use std::process::Command;

use sysinfo::System;
use tracing::debug;

use super::SystemSource;
use crate::error::SourceError;

/// Kernel thermal zone, millidegrees Celsius.
const THERMAL_ZONE: &str = "/sys/class/thermal/thermal_zone0/temp";

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

/// Reads resource usage from the running host.
pub struct HostSystemSource {
    sys: System,
}

impl Default for HostSystemSource {
    fn default() -> Self {
        Self::new()
    }
}

impl HostSystemSource {
    pub fn new() -> Self {
        let mut sys = System::new();
        // Baseline sample so the first tick's reading has something to diff against
        sys.refresh_cpu_usage();
        Self { sys }
    }
}

impl SystemSource for HostSystemSource {
    fn cpu_percent(&mut self) -> Result<f32, SourceError> {
        self.sys.refresh_cpu_usage();
        if self.sys.cpus().is_empty() {
            return Err(SourceError::Unavailable("cpu usage"));
        }
        Ok(self.sys.global_cpu_usage())
    }

    fn memory_used_percent(&mut self) -> Result<f32, SourceError> {
        self.sys.refresh_memory();
        let total = self.sys.total_memory();
        if total == 0 {
            return Err(SourceError::Unavailable("memory usage"));
        }
        Ok((self.sys.used_memory() as f64 / total as f64 * 100.0) as f32)
    }

    fn temperature(&mut self) -> Result<String, SourceError> {
        match vcgencmd_temperature() {
            Ok(temp) => Ok(temp),
            Err(e) => {
                debug!(error = %e, "vcgencmd unavailable, reading thermal zone");
                let raw = fs::read_to_string(THERMAL_ZONE)?;
                parse_millidegrees(&raw).ok_or(SourceError::Unavailable("temperature"))
            }
        }
    }

    fn uptime(&mut self) -> Result<String, SourceError> {
        Ok(format_uptime(System::uptime()))
    }
}

fn vcgencmd_temperature() -> Result<String, SourceError> {
    let output = Command::new("vcgencmd").arg("measure_temp").output()?;
    if !output.status.success() {
        return Err(SourceError::Command { command: "vcgencmd measure_temp" });
    }
    parse_vcgencmd(&String::from_utf8_lossy(&output.stdout)).ok_or(SourceError::Unavailable("temperature"))
}

/// `temp=48.3'C` -> `48.3'C`.
pub(crate) fn parse_vcgencmd(stdout: &str) -> Option<String> {
    let line = stdout.trim();
    let value = line.strip_prefix("temp=").unwrap_or(line);
    (!value.is_empty()).then(|| value.to_owned())
}

/// `48312` -> `48.3'C`, matching the vcgencmd style.
pub(crate) fn parse_millidegrees(raw: &str) -> Option<String> {
    let millis: i64 = raw.trim().parse().ok()?;
    Some(format!("{:.1}'C", millis as f64 / 1000.0))
}

/// Compact uptime: `3d 4h 12m`. Leading zero units are dropped, minutes always shown.
pub(crate) fn format_uptime(secs: u64) -> String {
    let days = secs / SECS_PER_DAY;
    let hours = secs % SECS_PER_DAY / SECS_PER_HOUR;
    let minutes = secs % SECS_PER_HOUR / SECS_PER_MINUTE;

    if days > 0 {
        format!("{days}d {hours}h {minutes}m")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}
