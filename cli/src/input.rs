use std::io::IsTerminal;

use anyhow::Context;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::terminal::print;

/// Hosts from the command line, or from stdin when none were given.
///
/// On an interactive terminal the usage text and a prompt are shown first.
pub async fn collect_hosts(args: Vec<String>) -> anyhow::Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args.iter().filter_map(|arg| clean(arg)).collect());
    }

    if std::io::stdin().is_terminal() {
        print::usage();
        print::prompt();
    }

    read_hosts(BufReader::new(tokio::io::stdin()))
        .await
        .context("failed to read hosts from stdin")
}

/// One host per line; surrounding whitespace is dropped and blank lines skipped.
pub async fn read_hosts<R: AsyncBufRead + Unpin>(reader: R) -> std::io::Result<Vec<String>> {
    let mut lines = reader.lines();
    let mut hosts: Vec<String> = Vec::new();
    while let Some(line) = lines.next_line().await? {
        if let Some(host) = clean(&line) {
            hosts.push(host);
        }
    }
    Ok(hosts)
}

/// Refuses to start a run with nothing to look up.
pub fn require_hosts(hosts: Vec<String>) -> anyhow::Result<Vec<String>> {
    if hosts.is_empty() {
        anyhow::bail!("No hosts or IP addresses provided. Exiting.");
    }
    Ok(hosts)
}

fn clean(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
