//! Registry lookups for a resolved address.
//!
//! The AS number, AS name and country come from the Team Cymru bulk WHOIS
//! service. The allocated network block comes from RDAP and is only fetched
//! when [`Config::include_cidr`] is set.

use std::net::IpAddr;
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use asnmap_common::config::Config;
use asnmap_common::error::LookupError;
use asnmap_common::lookup::WhoisRecord;
use asnmap_common::utils::ip;
use asnmap_protocols::cymru::{self, CymruRecord};
use asnmap_protocols::rdap::IpNetwork;
use tracing::debug;

use crate::network::{rdap, whois};

#[async_trait]
pub trait LookupClient: Send + Sync {
    async fn lookup(&self, ip: IpAddr) -> Result<WhoisRecord, LookupError>;
}

pub struct RegistryClient {
    http: reqwest::Client,
    whois_server: String,
    rdap_url: String,
    timeout: Duration,
    include_cidr: bool,
}

impl RegistryClient {
    pub fn new(cfg: &Config) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(cfg.timeout)
            .user_agent(concat!("asnmap/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to create HTTP client")?;

        Ok(Self {
            http,
            whois_server: cfg.whois_server.clone(),
            rdap_url: cfg.rdap_url.clone(),
            timeout: cfg.timeout,
            include_cidr: cfg.include_cidr,
        })
    }

    async fn query_asn(&self, ip: &IpAddr) -> anyhow::Result<CymruRecord> {
        let response = whois::query(&self.whois_server, &cymru::create_query(ip), self.timeout).await?;
        let record = cymru::parse_response(&response)?;
        debug!(
            "{ip}: AS{} prefix {} via {}",
            record.asn.map(|asn| asn.to_string()).unwrap_or_default(),
            record.bgp_prefix.as_deref().unwrap_or("-"),
            record.registry.as_deref().unwrap_or("-"),
        );
        Ok(record)
    }

    async fn query_network(&self, ip: &IpAddr) -> anyhow::Result<IpNetwork> {
        let network = rdap::fetch_network(&self.http, &self.rdap_url, ip).await?;
        debug!(
            "{ip}: network {} ({})",
            network.handle.as_deref().unwrap_or("-"),
            network.name.as_deref().unwrap_or("-"),
        );
        Ok(network)
    }
}

#[async_trait]
impl LookupClient for RegistryClient {
    async fn lookup(&self, ip: IpAddr) -> Result<WhoisRecord, LookupError> {
        if let Some(block) = ip::reserved_block(&ip) {
            return Err(LookupError::new(format!(
                "{ip} belongs to a special-purpose block: {block}"
            )));
        }

        let asn: CymruRecord = self.query_asn(&ip).await.map_err(to_lookup_error)?;

        let cidr: Option<String> = if self.include_cidr {
            self.query_network(&ip).await.map_err(to_lookup_error)?.cidr()
        } else {
            None
        };

        Ok(WhoisRecord {
            asn: asn.asn,
            as_name: asn.as_name,
            country: asn.country,
            cidr,
        })
    }
}

fn to_lookup_error(err: anyhow::Error) -> LookupError {
    LookupError::new(format!("{err:#}"))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
