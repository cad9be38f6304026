//! Host string to IP address.
//!
//! Literal addresses are used as-is. Anything else costs exactly one forward
//! lookup through a [`NameLookup`] backend; there is no cache and no retry.

use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use asnmap_common::error::ResolutionError;
use tokio::time::timeout;
use tracing::{debug, trace};

/// A forward DNS backend.
#[async_trait]
pub trait NameLookup: Send + Sync {
    async fn lookup_name(&self, host: &str) -> anyhow::Result<Vec<IpAddr>>;
}

/// The operating system resolver (`getaddrinfo`), bounded by a timeout.
pub struct SystemDns {
    timeout: Duration,
}

impl SystemDns {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl NameLookup for SystemDns {
    async fn lookup_name(&self, host: &str) -> anyhow::Result<Vec<IpAddr>> {
        let addrs = timeout(self.timeout, tokio::net::lookup_host((host, 0)))
            .await
            .context("DNS lookup timed out")??;
        Ok(addrs.map(|addr| addr.ip()).collect())
    }
}

pub struct Resolver {
    dns: Arc<dyn NameLookup>,
}

impl Resolver {
    pub fn new(dns: Arc<dyn NameLookup>) -> Self {
        Self { dns }
    }

    pub fn system(dns_timeout: Duration) -> Self {
        Self::new(Arc::new(SystemDns::new(dns_timeout)))
    }

    pub async fn resolve(&self, host: &str) -> Result<IpAddr, ResolutionError> {
        if let Some(ip) = parse_literal(host) {
            trace!("{host} is a literal address");
            return Ok(ip);
        }

        let addrs: Vec<IpAddr> = self
            .dns
            .lookup_name(host)
            .await
            .map_err(|e| ResolutionError::new(host, format!("{e:#}")))?;

        let ip = pick_address(&addrs)
            .ok_or_else(|| ResolutionError::new(host, "no addresses returned"))?;
        debug!("{host} resolved to {ip}");
        Ok(ip)
    }
}

pub fn parse_literal(host: &str) -> Option<IpAddr> {
    host.parse::<IpAddr>().ok()
}

/// First IPv4 answer if there is one, otherwise the first answer of any family.
fn pick_address(addrs: &[IpAddr]) -> Option<IpAddr> {
    addrs
        .iter()
        .find(|ip| ip.is_ipv4())
        .or_else(|| addrs.first())
        .copied()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
