use std::fmt::Display;
use std::io::{self, Write};

use asnmap_common::lookup::{LookupResult, WhoisRecord};

pub const RULE_WIDTH: usize = 40;
const MISSING: &str = "N/A";

pub fn write_text<W: Write>(out: &mut W, results: &[LookupResult]) -> io::Result<()> {
    for result in results {
        match result {
            LookupResult::Success { host, ip, record } => write_block(out, host, ip, record)?,
            LookupResult::Failure { host, error } => writeln!(out, "Error for {host}: {error}")?,
        }
    }
    Ok(())
}

fn write_block<W: Write>(out: &mut W, host: &str, ip: &impl Display, record: &WhoisRecord) -> io::Result<()> {
    writeln!(out, "Host/IP: {host}")?;
    writeln!(out, "IP: {ip}")?;
    writeln!(out, "ASN: {}", or_missing(record.asn.as_ref()))?;
    writeln!(out, "AS Name: {}", or_missing(record.as_name.as_ref()))?;
    writeln!(out, "Country: {}", or_missing(record.country.as_ref()))?;
    writeln!(out, "CIDR: {}", or_missing(record.cidr.as_ref()))?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))
}

fn or_missing<T: Display>(value: Option<&T>) -> String {
    value.map_or_else(|| MISSING.to_string(), ToString::to_string)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
