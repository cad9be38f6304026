use std::net::IpAddr;

use anyhow::Context;
use asnmap_protocols::rdap::{self, IpNetwork};
use reqwest::header::ACCEPT;

/// Fetches the RDAP network object covering `ip`.
///
/// Bootstrap registries answer with a redirect to the authoritative RIR,
/// which the client follows.
pub async fn fetch_network(
    http: &reqwest::Client,
    base_url: &str,
    ip: &IpAddr,
) -> anyhow::Result<IpNetwork> {
    let url: String = format!("{}/{}", base_url.trim_end_matches('/'), rdap::network_path(ip));

    let body: String = http
        .get(&url)
        .header(ACCEPT, rdap::MEDIA_TYPE)
        .send()
        .await
        .with_context(|| format!("RDAP request to {url} failed"))?
        .error_for_status()?
        .text()
        .await
        .with_context(|| format!("failed to read RDAP response from {url}"))?;

    rdap::parse_network(&body).with_context(|| format!("unparseable RDAP response from {url}"))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
