//! # RDAP IP network objects
//!
//! Decodes the subset of an RDAP `ip network` object (RFC 9083) needed to
//! report the allocated block. Registries that implement the `cidr0`
//! extension list the blocks directly; the others only give the first and
//! last address, which is summarized into CIDR notation here.

use std::net::IpAddr;

use asnmap_common::lookup::known_value;
use asnmap_common::network::range::IpRange;
use serde::Deserialize;

pub const MEDIA_TYPE: &str = "application/rdap+json";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpNetwork {
    #[serde(default)]
    pub handle: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub start_address: Option<String>,
    #[serde(default)]
    pub end_address: Option<String>,
    #[serde(default, rename = "cidr0_cidrs")]
    pub cidr0_cidrs: Vec<Cidr0>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Cidr0 {
    #[serde(default)]
    pub v4prefix: Option<String>,
    #[serde(default)]
    pub v6prefix: Option<String>,
    #[serde(default)]
    pub length: Option<u8>,
}

pub fn network_path(ip: &IpAddr) -> String {
    format!("ip/{ip}")
}

pub fn parse_network(body: &str) -> Result<IpNetwork, serde_json::Error> {
    serde_json::from_str(body)
}

impl IpNetwork {
    /// The network block(s) as `prefix/len`, comma separated.
    pub fn cidr(&self) -> Option<String> {
        let blocks: Vec<String> = self
            .cidr0_cidrs
            .iter()
            .filter_map(Cidr0::to_notation)
            .collect();

        if !blocks.is_empty() {
            return Some(blocks.join(", "));
        }

        self.summarize_bounds()
    }

    fn summarize_bounds(&self) -> Option<String> {
        let start: IpAddr = self.start_address.as_deref()?.trim().parse().ok()?;
        let end: IpAddr = self.end_address.as_deref()?.trim().parse().ok()?;
        let range = IpRange::new(start, end).ok()?;

        let blocks: Vec<String> = range.to_cidrs().iter().map(ToString::to_string).collect();
        known_value(&blocks.join(", "))
    }
}

impl Cidr0 {
    fn to_notation(&self) -> Option<String> {
        let prefix = self.v4prefix.as_deref().or(self.v6prefix.as_deref())?;
        let prefix = known_value(prefix)?;
        Some(format!("{prefix}/{}", self.length?))
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cidr0_extension_is_preferred() {
        let body = r#"{
            "objectClassName": "ip network",
            "handle": "NET-8-8-8-0-2",
            "startAddress": "8.8.8.0",
            "endAddress": "8.8.8.255",
            "name": "GOGL",
            "cidr0_cidrs": [{ "v4prefix": "8.8.8.0", "length": 24 }]
        }"#;
        let network = parse_network(body).unwrap();
        assert_eq!(network.cidr().as_deref(), Some("8.8.8.0/24"));
        assert_eq!(network.name.as_deref(), Some("GOGL"));
        assert_eq!(network.handle.as_deref(), Some("NET-8-8-8-0-2"));
    }

    #[test]
    fn multiple_cidr0_blocks_are_joined() {
        let body = r#"{
            "cidr0_cidrs": [
                { "v6prefix": "2001:4860::", "length": 32 },
                { "v4prefix": "8.8.4.0", "length": 24 }
            ]
        }"#;
        let network = parse_network(body).unwrap();
        assert_eq!(network.cidr().as_deref(), Some("2001:4860::/32, 8.8.4.0/24"));
    }

    #[test]
    fn falls_back_to_address_bounds() {
        let body = r#"{
            "startAddress": "193.0.0.0",
            "endAddress": "193.0.7.255",
            "country": "NL"
        }"#;
        let network = parse_network(body).unwrap();
        assert_eq!(network.cidr().as_deref(), Some("193.0.0.0/21"));
    }

    #[test]
    fn unaligned_bounds_produce_several_blocks() {
        let body = r#"{ "startAddress": "10.0.0.0", "endAddress": "10.0.2.255" }"#;
        let network = parse_network(body).unwrap();
        assert_eq!(network.cidr().as_deref(), Some("10.0.0.0/23, 10.0.2.0/24"));
    }

    #[test]
    fn missing_network_data_is_none() {
        let network = parse_network(r#"{ "objectClassName": "ip network" }"#).unwrap();
        assert_eq!(network.cidr(), None);

        let network = parse_network(r#"{ "startAddress": "garbage", "endAddress": "1.1.1.1" }"#)
            .unwrap();
        assert_eq!(network.cidr(), None);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(parse_network("<html>rate limited</html>").is_err());
    }

    #[test]
    fn request_path() {
        let ip: IpAddr = "2001:4860:4860::8888".parse().unwrap();
        assert_eq!(network_path(&ip), "ip/2001:4860:4860::8888");
    }
}
