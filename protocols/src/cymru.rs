//! # Team Cymru bulk WHOIS
//!
//! IP to ASN mapping over the plain WHOIS port. A request wraps the address
//! in `begin`/`end` markers so the service answers in bulk mode, and `verbose`
//! adds the country, registry and AS name columns:
//!
//! ```text
//! Bulk mode; whois.cymru.com [2024-05-01 10:00:00 +0000]
//! 15169   | 8.8.8.8          | 8.8.8.0/24          | US | arin     | 2023-12-28 | GOOGLE, US
//! ```

use std::net::IpAddr;

use asnmap_common::lookup::known_value;
use thiserror::Error;

const FIELD_SEPARATOR: char = '|';
const VERBOSE_FIELDS: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CymruError {
    #[error("{0}")]
    Service(String),
    #[error("empty response from ASN service")]
    Empty,
    #[error("malformed ASN service line: {0}")]
    Malformed(String),
}

/// One row of the verbose bulk answer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CymruRecord {
    pub asn: Option<u32>,
    pub bgp_prefix: Option<String>,
    pub country: Option<String>,
    pub registry: Option<String>,
    pub as_name: Option<String>,
}

pub fn create_query(ip: &IpAddr) -> String {
    format!("begin\nverbose\n{ip}\nend\n")
}

pub fn parse_response(response: &str) -> Result<CymruRecord, CymruError> {
    let mut lines = response
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("Bulk mode"));

    let line = lines.next().ok_or(CymruError::Empty)?;
    if let Some(message) = line.strip_prefix("Error:") {
        return Err(CymruError::Service(message.trim().to_string()));
    }

    // Column header, only sent when the client asks for it.
    let line = if line.starts_with("AS ") || line.starts_with("AS|") {
        lines.next().ok_or(CymruError::Empty)?
    } else {
        line
    };

    parse_row(line)
}

fn parse_row(line: &str) -> Result<CymruRecord, CymruError> {
    // AS names may contain the separator, so only split the leading columns.
    let fields: Vec<&str> = line.splitn(VERBOSE_FIELDS, FIELD_SEPARATOR).collect();
    if fields.len() != VERBOSE_FIELDS {
        return Err(CymruError::Malformed(line.to_string()));
    }

    Ok(CymruRecord {
        asn: parse_asn(fields[0]),
        bgp_prefix: known_value(fields[2]),
        country: known_value(fields[3]).map(|cc| cc.to_ascii_uppercase()),
        registry: known_value(fields[4]),
        as_name: known_value(fields[6]),
    })
}

/// Multi-origin prefixes list several AS numbers; the first one wins.
fn parse_asn(field: &str) -> Option<u32> {
    field
        .split_whitespace()
        .next()
        .and_then(|token| token.trim_start_matches("AS").parse::<u32>().ok())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
