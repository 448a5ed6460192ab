//! The page rotation.
//!
//! # Rotation Order
//!
//! 1. **Network** ([`network`]): IPv4 address per matching interface
//! 2. **Stats** ([`stats`]): CPU, free memory, temperature, uptime
//! 3. **Traffic** ([`traffic`]): LoRaWAN rx histogram
//!
//! Network and Stats always render, which guarantees every tick ends with a
//! frame. Traffic is the only page that skips.
//!
//! # Optimizations Applied
//!
//! - Row text is formatted into `heapless::String` via [`crate::widgets::line_text`]
//! - Static text and primitive styles from [`crate::styles`]

mod network;
mod stats;
mod traffic;

pub use network::{NetworkPage, address_lines, is_listed};
pub use stats::{StatsPage, stats_lines};
pub use traffic::TrafficPage;

use crate::pages::Page;
use crate::sources::{MetricsSource, NetworkSource, SystemSource};

/// The fixed production rotation: Network, Stats, Traffic.
pub fn default_rotation<N, S, M>(network: N, system: S, metrics: M) -> Vec<Box<dyn Page>>
where
    N: NetworkSource + 'static,
    S: SystemSource + 'static,
    M: MetricsSource + 'static,
{
    vec![
        Box::new(NetworkPage::new(network)),
        Box::new(StatsPage::new(system)),
        Box::new(TrafficPage::new(metrics)),
    ]
}
