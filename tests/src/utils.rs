use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use asnmap_common::error::LookupError;
use asnmap_common::lookup::WhoisRecord;
use asnmap_core::lookup::LookupClient;
use asnmap_core::resolver::NameLookup;

/// DNS backend with a fixed table; unknown names fail like NXDOMAIN.
#[derive(Default)]
pub struct TableDns {
    pub table: HashMap<String, IpAddr>,
    pub calls: AtomicUsize,
}

impl TableDns {
    pub fn with(entries: &[(&str, &str)]) -> Self {
        Self {
            table: entries
                .iter()
                .map(|(name, ip)| (name.to_string(), ip.parse().unwrap()))
                .collect(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NameLookup for TableDns {
    async fn lookup_name(&self, host: &str) -> anyhow::Result<Vec<IpAddr>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.table.get(host) {
            Some(ip) => Ok(vec![*ip]),
            None => anyhow::bail!("failed to lookup address information: Name or service not known"),
        }
    }
}

/// Registry stand-in: known addresses get a record, others an error.
///
/// Tracks how many lookups run at once so tests can check the pool bound.
#[derive(Default)]
pub struct ScriptedRegistry {
    pub records: HashMap<IpAddr, WhoisRecord>,
    pub delay: Duration,
    pub calls: AtomicUsize,
    in_flight: AtomicUsize,
    pub max_in_flight: AtomicUsize,
}

impl ScriptedRegistry {
    pub fn new(records: HashMap<IpAddr, WhoisRecord>, delay: Duration) -> Self {
        Self {
            records,
            delay,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LookupClient for ScriptedRegistry {
    async fn lookup(&self, ip: IpAddr) -> Result<WhoisRecord, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        tokio::time::sleep(self.delay).await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.records
            .get(&ip)
            .cloned()
            .ok_or_else(|| LookupError::new(format!("no registry data for {ip}")))
    }
}

pub fn google() -> WhoisRecord {
    WhoisRecord {
        asn: Some(15169),
        as_name: Some("GOOGLE, US".to_string()),
        country: Some("US".to_string()),
        cidr: Some("8.8.8.0/24".to_string()),
    }
}
