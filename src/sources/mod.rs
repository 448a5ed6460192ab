//! External data the pages read from.
//!
//! Each collaborator sits behind a narrow trait so page logic can be exercised
//! with fakes. The production implementations are thin wrappers:
//!
//! - [`network`]: `getifaddrs` plus the container runtime's bridge list
//! - [`system`]: `sysinfo` CPU/memory/uptime plus the SoC temperature
//! - [`metrics`]: HTTP GET + JSON decode of the packet forwarder's bucket series
//!
//! All calls are synchronous and happen on the tick thread.

pub mod metrics;
pub mod network;
pub mod system;

use std::collections::HashSet;
use std::net::Ipv4Addr;

use crate::error::SourceError;
use crate::histogram::BucketSeries;

pub use metrics::HttpMetricsSource;
pub use network::HostNetworkSource;
pub use system::HostSystemSource;

/// A network interface and its IPv4 addresses.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Interface {
    pub name: String,
    pub ipv4: Vec<Ipv4Addr>,
}

impl Interface {
    pub fn new(name: impl Into<String>, ipv4: impl IntoIterator<Item = Ipv4Addr>) -> Self {
        Self {
            name: name.into(),
            ipv4: ipv4.into_iter().collect(),
        }
    }
}

/// Host network interfaces.
pub trait NetworkSource {
    /// Interfaces in kernel enumeration order.
    fn interfaces(&self) -> Vec<Interface>;

    /// Names of bridge interfaces created by the container runtime.
    fn container_bridges(&self) -> HashSet<String>;
}

/// Host resource readings. Each query fails independently.
pub trait SystemSource {
    /// CPU utilization since the previous call, in percent.
    fn cpu_percent(&mut self) -> Result<f32, SourceError>;

    /// Share of physical memory in use, in percent.
    fn memory_used_percent(&mut self) -> Result<f32, SourceError>;

    /// SoC temperature, already formatted (e.g. `48.3'C`).
    fn temperature(&mut self) -> Result<String, SourceError>;

    /// Time since boot, already formatted (e.g. `3d 4h 12m`).
    fn uptime(&mut self) -> Result<String, SourceError>;
}

/// The LoRaWAN traffic bucket series.
pub trait MetricsSource {
    fn fetch(&self) -> Result<BucketSeries, SourceError>;
}
