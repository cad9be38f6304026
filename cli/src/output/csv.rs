use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use asnmap_common::lookup::LookupResult;

pub const HEADER: [&str; 6] = ["host", "ip", "asn", "as_name", "country", "cidr"];
const ERROR_FIELD: &str = "ERROR";

pub fn write_csv_file(path: &Path, results: &[LookupResult]) -> anyhow::Result<()> {
    let file = File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
    write_csv(BufWriter::new(file), results)
        .with_context(|| format!("failed to write CSV to {}", path.display()))
}

pub fn write_csv<W: Write>(out: W, results: &[LookupResult]) -> anyhow::Result<()> {
    let mut writer = ::csv::Writer::from_writer(out);
    writer.write_record(HEADER)?;
    for result in results {
        writer.write_record(to_row(result))?;
    }
    writer.flush()?;
    Ok(())
}

fn to_row(result: &LookupResult) -> [String; 6] {
    match result {
        LookupResult::Success { host, ip, record } => [
            host.clone(),
            ip.to_string(),
            record.asn.map(|asn| asn.to_string()).unwrap_or_default(),
            record.as_name.clone().unwrap_or_default(),
            record.country.clone().unwrap_or_default(),
            record.cidr.clone().unwrap_or_default(),
        ],
        LookupResult::Failure { host, .. } => [
            host.clone(),
            ERROR_FIELD.to_string(),
            ERROR_FIELD.to_string(),
            ERROR_FIELD.to_string(),
            ERROR_FIELD.to_string(),
            ERROR_FIELD.to_string(),
        ],
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
