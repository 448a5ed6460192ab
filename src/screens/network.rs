//! Network page: one row per IPv4 address of each gateway-facing interface.
//!
//! # Layout
//!
//! ```text
//! ┌─────────────────────┐
//! │NETWORK              │  header
//! │eth0: 192.168.1.10   │
//! │wlan0: 10.0.0.4      │
//! │br-lan: 172.16.0.1   │  names cut to 6 chars
//! └─────────────────────┘
//! ```
//!
//! Interfaces are kept when their name starts with a known prefix (Ethernet,
//! wireless, bonds, bridges, LTE/UMTS modems, LAN) and they are not a bridge the
//! container runtime created. The page never skips: with no matching interface it
//! still shows the header.

use std::collections::HashSet;

use tracing::debug;

use crate::canvas::Canvas;
use crate::pages::{Page, RenderOutcome};
use crate::sources::{Interface, NetworkSource};
use crate::widgets::{LineText, draw_header, draw_row, line_text};

/// Interface name prefixes shown on the page.
const ALLOWED_PREFIXES: [&str; 8] = ["bond", "e", "w", "r", "br", "lt", "umts", "lan"];

/// Characters of the interface name kept on each row.
const NAME_CHARS: usize = 6;

const TITLE: &str = "NETWORK";

/// Whether `name` matches one of the allowed prefixes.
pub fn is_listed(name: &str) -> bool {
    ALLOWED_PREFIXES.iter().any(|prefix| name.starts_with(prefix))
}

/// `"<name[..6]>: <addr>"` for every IPv4 address of every listed, non-bridge
/// interface, in enumeration order.
pub fn address_lines(interfaces: &[Interface], bridges: &HashSet<String>) -> Vec<LineText> {
    interfaces
        .iter()
        .filter(|iface| is_listed(&iface.name) && !bridges.contains(&iface.name))
        .flat_map(|iface| {
            let short: String = iface.name.chars().take(NAME_CHARS).collect();
            iface
                .ipv4
                .iter()
                .map(move |addr| line_text(format_args!("{short}: {addr}")))
        })
        .collect()
}

pub struct NetworkPage<S> {
    source: S,
}

impl<S: NetworkSource> NetworkPage<S> {
    pub const fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: NetworkSource> Page for NetworkPage<S> {
    fn name(&self) -> &'static str {
        "network"
    }

    fn render(&mut self, canvas: &mut Canvas) -> RenderOutcome {
        let interfaces = self.source.interfaces();
        let bridges = self.source.container_bridges();
        let lines = address_lines(&interfaces, &bridges);
        debug!(interfaces = interfaces.len(), rows = lines.len(), "network page");

        draw_header(canvas, TITLE);
        for (row, line) in lines.iter().enumerate() {
            draw_row(canvas, row + 1, line);
        }
        RenderOutcome::Rendered
    }
}
