use std::time::Duration;

use colored::*;
use tracing::{info, warn};

const BIN: &str = "asnmap";

/// Shown when asnmap is started without arguments on an interactive terminal.
pub fn usage() {
    let title = "Usage:".bold();
    eprintln!("{title}");
    eprintln!("  1. Pipe a list of hostnames or IP addresses:");
    eprintln!("     cat hosts.txt | {BIN} [--csv output.csv]");
    eprintln!("  2. Enter hostnames or IP addresses interactively:");
    eprintln!("     {BIN} [--csv output.csv]");
    eprintln!("     Then enter hostnames or IPs, one per line. Press Ctrl+D (Unix) or Ctrl+Z (Windows) to finish.");
    eprintln!("  3. Provide hostnames or IP addresses as command-line arguments:");
    eprintln!("     {BIN} google.com 8.8.8.8 [--csv output.csv]");
}

pub fn prompt() {
    eprintln!();
    eprintln!(
        "{}",
        "Enter hostnames or IP addresses (one per line), then press Ctrl+D (Unix) or Ctrl+Z (Windows) when finished:"
            .italic()
    );
}

pub fn summary(succeeded: usize, failed: usize, total_time: Duration) {
    let elapsed = format!("{:.2}s", total_time.as_secs_f64());
    if failed == 0 {
        info!("Lookup complete: {succeeded} hosts identified in {elapsed}");
    } else {
        warn!("Lookup complete: {succeeded} hosts identified, {failed} failed in {elapsed}");
    }
}
