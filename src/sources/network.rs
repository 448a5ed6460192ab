//! Interface enumeration via `getifaddrs` and the container bridge list via the
//! `docker` CLI.
//!
//! `getifaddrs` reports one entry per (interface, address family) pair. Entries
//! are folded into one [`Interface`] per name, keeping the order in which each
//! name first appears. That is the kernel's interface order.

use std::collections::HashSet;
use std::net::Ipv4Addr;
use std::process::Command;

use tracing::debug;

use super::{Interface, NetworkSource};
use crate::error::SourceError;

/// Command listing bridge networks; each line is the Linux bridge device name.
const DOCKER_BRIDGE_ARGS: [&str; 6] = ["network", "ls", "-f", "driver=bridge", "--format", "br-{{.ID}}"];

/// Reads interfaces from the running host.
#[derive(Clone, Copy, Default, Debug)]
pub struct HostNetworkSource;

impl HostNetworkSource {
    pub const fn new() -> Self {
        Self
    }
}

impl NetworkSource for HostNetworkSource {
    fn interfaces(&self) -> Vec<Interface> {
        match enumerate() {
            Ok(interfaces) => interfaces,
            Err(e) => {
                debug!(error = %e, "interface enumeration failed");
                Vec::new()
            }
        }
    }

    fn container_bridges(&self) -> HashSet<String> {
        match docker_bridges() {
            Ok(bridges) => bridges,
            Err(e) => {
                // No docker on the host is the common case
                debug!(error = %e, "container bridge query failed");
                HashSet::new()
            }
        }
    }
}

#[cfg(target_os = "linux")]
fn enumerate() -> Result<Vec<Interface>, SourceError> {
    use std::net::SocketAddrV4;

    let addrs = nix::ifaddrs::getifaddrs().map_err(std::io::Error::from)?;
    let entries = addrs.map(|ifaddr| {
        let ipv4 = ifaddr
            .address
            .as_ref()
            .and_then(|addr| addr.as_sockaddr_in())
            .map(|sin| *SocketAddrV4::from(*sin).ip());
        (ifaddr.interface_name, ipv4)
    });
    Ok(group_by_interface(entries))
}

#[cfg(not(target_os = "linux"))]
fn enumerate() -> Result<Vec<Interface>, SourceError> {
    Err(SourceError::Unavailable("interface enumeration"))
}

/// Fold per-address entries into interfaces, preserving first-seen order.
pub(crate) fn group_by_interface<I>(entries: I) -> Vec<Interface>
where
    I: IntoIterator<Item = (String, Option<Ipv4Addr>)>,
{
    let mut interfaces: Vec<Interface> = Vec::new();
    for (name, ipv4) in entries {
        let slot = match interfaces.iter().position(|iface| iface.name == name) {
            Some(pos) => pos,
            None => {
                interfaces.push(Interface::new(name, []));
                interfaces.len() - 1
            }
        };
        if let Some(addr) = ipv4 {
            interfaces[slot].ipv4.push(addr);
        }
    }
    interfaces
}

fn docker_bridges() -> Result<HashSet<String>, SourceError> {
    let output = Command::new("docker").args(DOCKER_BRIDGE_ARGS).output()?;
    if !output.status.success() {
        return Err(SourceError::Command { command: "docker network ls" });
    }
    Ok(parse_bridge_list(&String::from_utf8_lossy(&output.stdout)))
}

/// One bridge device name per non-empty line.
pub(crate) fn parse_bridge_list(stdout: &str) -> HashSet<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}
