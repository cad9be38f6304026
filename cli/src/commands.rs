pub mod lookup;

use std::path::PathBuf;
use std::time::Duration;

use asnmap_common::config::{Config, DEFAULT_POOL_SIZE, DEFAULT_RDAP_URL, DEFAULT_WHOIS_SERVER};
use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(name = "asnmap", version)]
#[command(about = "Bulk ASN, AS name, country and CIDR lookup for hostnames and IP addresses.")]
pub struct CommandLine {
    /// Hostnames or IP addresses to look up; read from stdin when omitted
    pub hosts: Vec<String>,

    /// Write the results to a CSV file instead of printing them
    #[arg(long, value_name = "FILE")]
    pub csv: Option<PathBuf>,

    /// Number of hosts looked up concurrently
    #[arg(short, long, value_name = "N", default_value_t = DEFAULT_POOL_SIZE, value_parser = parse_workers)]
    pub workers: usize,

    /// Skip the RDAP query that fills in the network CIDR
    #[arg(long)]
    pub no_cidr: bool,

    /// Timeout for each DNS, WHOIS and RDAP call
    #[arg(short, long, value_name = "SECS", default_value_t = 10)]
    pub timeout: u64,

    /// ASN WHOIS service as host:port
    #[arg(long, value_name = "ADDR", default_value = DEFAULT_WHOIS_SERVER)]
    pub whois_server: String,

    /// RDAP bootstrap base URL
    #[arg(long, value_name = "URL", default_value = DEFAULT_RDAP_URL)]
    pub rdap_url: String,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        Config {
            pool_size: self.workers,
            include_cidr: !self.no_cidr,
            timeout: Duration::from_secs(self.timeout),
            whois_server: self.whois_server.clone(),
            rdap_url: self.rdap_url.clone(),
        }
    }
}

fn parse_workers(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("at least one worker is required".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("invalid worker count '{s}': {e}")),
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
